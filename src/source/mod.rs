pub mod abi;
pub mod artifact;
pub mod builder;
