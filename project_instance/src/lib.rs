use thiserror::Error;

pub mod activity;
pub mod instance;
pub mod structs;

pub use activity::Activity;
pub use instance::ProjectInstance;
pub use structs::{Mode, Project, Resource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    #[error("activity has {delays} delays but {successors} successors")]
    DelayCountMismatch { delays: usize, successors: usize },
    #[error(
        "mode {mode} of activity {activity} has {found} skill requirements, expected {expected}"
    )]
    SkillRequirementsMismatch {
        activity: usize,
        mode: usize,
        expected: usize,
        found: usize,
    },
    #[error("resource {resource} has {found} skills, expected {expected}")]
    ResourceSkillsMismatch {
        resource: usize,
        expected: usize,
        found: usize,
    },
}
