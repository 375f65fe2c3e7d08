//! Value objects carried across the service boundary.

pub mod account_input;

pub use account_input::AccountInput;
