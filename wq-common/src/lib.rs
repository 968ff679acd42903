#[macro_use]
pub mod macros;

pub mod collection;
pub mod config;
pub mod error;
