//! Use cases for the till module.

pub mod till;

pub use till::*;
