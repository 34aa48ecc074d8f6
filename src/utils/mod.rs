pub mod cancel;
pub mod log_sanitizer;

pub use cancel::{CancelHandle, CancelSignal};
pub use log_sanitizer::*;
