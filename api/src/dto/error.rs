pub use roster_shared::types::response::ErrorResponse;
