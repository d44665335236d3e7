//! tfjs-wizard: Interactive TensorFlow.js Conversion Library
//!
//! Detects a model's format from its path, asks the converter questions that
//! apply to that format, validates every answer and turns the final answers
//! into the argument list for `tensorflowjs_converter`.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod questions;
pub mod report;
pub mod utils;
