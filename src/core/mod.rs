pub mod branch;
pub mod classifier;
pub mod decoration;
pub mod executor;
pub mod git;
pub mod planner;
pub mod prompt;
pub mod selector;

pub use branch::{BranchRef, BranchStatus, ClassifiedBranch, ProtectionPolicy};
pub use classifier::Classifier;
pub use decoration::Decorator;
pub use executor::{DeletionExecutor, DeletionReport};
pub use planner::DeletionPlan;
pub use prompt::{Confirmer, DialoguerConfirmer};
pub use selector::{BranchSelector, FzfSelector, SelectionOutcome};
