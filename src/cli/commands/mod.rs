pub mod preview;
pub mod sweep;
