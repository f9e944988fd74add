use serde::Serialize;

/// A capacity-bounded resource the activities draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Maximum available amount.
    pub capacity: u32,
    /// Renewable resources replenish every period, non-renewable ones are
    /// consumed once over the whole horizon.
    pub renewable: bool,
    /// One flag per instance skill. `None` if skills are not modeled.
    pub skills: Option<Vec<bool>>,
}

impl Resource {
    pub fn new(capacity: u32, renewable: bool) -> Self {
        Self {
            capacity,
            renewable,
            skills: None,
        }
    }

    pub fn with_skills(mut self, skills: Vec<bool>) -> Self {
        self.skills = Some(skills);
        self
    }
}

/// One way of executing an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub duration: u32,
    /// Demand per resource while the activity is running.
    pub demands: Vec<u32>,
    /// Required proficiency per instance skill, if skills are modeled.
    pub skill_requirements: Option<Vec<u32>>,
}

impl Mode {
    pub fn new(duration: u32, demands: Vec<u32>) -> Self {
        Self {
            duration,
            demands,
            skill_requirements: None,
        }
    }

    pub fn with_skill_requirements(mut self, skill_requirements: Vec<u32>) -> Self {
        self.skill_requirements = Some(skill_requirements);
        self
    }
}

/// Activities sharing a release date. In single project instances there is
/// only one project containing every activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Global activity indices.
    pub activities: Vec<usize>,
    pub release_date: i32,
    pub due_date: Option<i32>,
}

impl Project {
    pub fn new(activities: Vec<usize>, release_date: i32, due_date: Option<i32>) -> Self {
        Self {
            activities,
            release_date,
            due_date,
        }
    }

    pub fn num_activities(&self) -> usize {
        self.activities.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(vec![], 0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_defaults_to_no_skills() {
        let resource = Resource::new(10, true);
        assert_eq!(resource.skills, None);

        let resource = resource.with_skills(vec![true, false]);
        assert_eq!(resource.skills, Some(vec![true, false]));
    }

    #[test]
    fn project_counts_activities() {
        let project = Project::new(vec![3, 4, 5], 7, Some(30));
        assert_eq!(project.num_activities(), 3);

        let project = Project::default();
        assert_eq!(project.num_activities(), 0);
        assert_eq!(project.release_date, 0);
        assert_eq!(project.due_date, None);
    }
}
