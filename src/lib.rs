pub mod cli;
pub mod config;
pub mod core;
pub mod i18n;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use core::git::{GitCli, RemoteGit};
pub use core::{BranchRef, BranchStatus, ClassifiedBranch, ProtectionPolicy};
pub use i18n::{Language, Messages};
pub use utils::{Result, SweepError};
