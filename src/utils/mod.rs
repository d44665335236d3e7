//! Utility modules for styling, spinners and logging

pub mod logging;
pub mod progress;
pub mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
