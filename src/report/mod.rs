//! Report module - summarizing conversion results

pub mod output_files;

pub use output_files::*;
