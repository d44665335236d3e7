//! Convert module - argument building and the external converter

pub mod arguments;
pub mod runner;

pub use arguments::*;
pub use runner::*;
