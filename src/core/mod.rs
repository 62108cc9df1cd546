pub mod color;
pub mod error;
pub mod snapshot;
pub mod store;
