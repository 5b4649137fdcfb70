// DataFrame implementation module
pub mod base;

pub use base::DataFrame;
