pub mod parameters;
pub mod summary;
