pub mod error;
pub mod logging;

pub use error::{Result, SweepError, ToolOperation};
pub use logging::init_logging;
