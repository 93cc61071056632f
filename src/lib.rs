pub mod chain;
pub mod core;
pub mod source;
pub mod types;
