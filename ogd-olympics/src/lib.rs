pub mod country;
pub mod error;
pub mod lookup;
pub mod store;
