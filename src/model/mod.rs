//! Model module - formats, path classification and saved model metadata

pub mod classify;
pub mod format;
pub mod metadata;

pub use classify::*;
pub use format::Format;
pub use metadata::*;
