use serde::Serialize;

use crate::{InstanceError, Mode};

/// A unit of work. Other activities are referenced by their global index in
/// the owning [`ProjectInstance`](crate::ProjectInstance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    modes: Vec<Mode>,
    successors: Vec<usize>,
    predecessors: Vec<usize>,
    /// `start(self) + delays[k] <= start(successors[k])`, RCPSP/max only.
    delays: Option<Vec<i32>>,
    optional: bool,
    selection_groups: Vec<Vec<usize>>,
    name: String,
}

impl Activity {
    pub fn new(modes: Vec<Mode>, successors: Vec<usize>, predecessors: Vec<usize>) -> Self {
        Self {
            modes,
            successors,
            predecessors,
            delays: None,
            optional: false,
            selection_groups: vec![],
            name: String::new(),
        }
    }

    /// Attach one time lag per successor.
    pub fn with_delays(mut self, delays: Vec<i32>) -> Result<Self, InstanceError> {
        if delays.len() != self.successors.len() {
            return Err(InstanceError::DelayCountMismatch {
                delays: delays.len(),
                successors: self.successors.len(),
            });
        }

        self.delays = Some(delays);
        Ok(self)
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// If this activity is scheduled, exactly one activity of every group must
    /// be scheduled as well (RCPSP-PS).
    pub fn with_selection_groups(mut self, selection_groups: Vec<Vec<usize>>) -> Self {
        self.selection_groups = selection_groups;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn num_modes(&self) -> usize {
        self.modes.len()
    }

    pub fn successors(&self) -> &[usize] {
        &self.successors
    }

    pub fn predecessors(&self) -> &[usize] {
        &self.predecessors
    }

    pub fn delays(&self) -> Option<&[i32]> {
        self.delays.as_deref()
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn selection_groups(&self) -> &[Vec<usize>] {
        &self.selection_groups
    }

    /// Identifier of the activity in the source data, empty if unknown.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> Activity {
        Activity::new(vec![Mode::new(4, vec![1, 0])], vec![1, 2], vec![])
    }

    #[test]
    fn defaults() {
        let activity = activity();

        assert_eq!(activity.num_modes(), 1);
        assert_eq!(activity.delays(), None);
        assert!(!activity.optional());
        assert!(activity.selection_groups().is_empty());
        assert_eq!(activity.name(), "");
    }

    #[test]
    fn delays_match_successors() {
        let activity = activity().with_delays(vec![0, -3]).unwrap();
        assert_eq!(activity.delays(), Some(&[0, -3][..]));
    }

    #[test]
    fn delays_mismatch_is_rejected() {
        let err = activity().with_delays(vec![2]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::DelayCountMismatch {
                delays: 1,
                successors: 2
            }
        );
    }

    #[test]
    fn empty_delays_need_no_successors() {
        let activity = Activity::new(vec![Mode::new(0, vec![])], vec![], vec![])
            .with_delays(vec![])
            .unwrap();
        assert_eq!(activity.delays(), Some(&[][..]));
    }

    #[test]
    fn builder_fields() {
        let activity = activity()
            .with_optional(true)
            .with_selection_groups(vec![vec![1], vec![2]])
            .with_name("1:1");

        assert!(activity.optional());
        assert_eq!(activity.selection_groups(), &[vec![1], vec![2]]);
        assert_eq!(activity.name(), "1:1");
    }
}
