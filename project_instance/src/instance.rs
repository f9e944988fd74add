use serde::Serialize;

use crate::{Activity, InstanceError, Project, Resource};

/// A project scheduling instance.
///
/// The activities are stored in one flat list across all projects; the
/// position of an activity in that list is the index every successor,
/// predecessor and project entry refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInstance {
    resources: Vec<Resource>,
    activities: Vec<Activity>,
    projects: Vec<Project>,
    skills: Option<Vec<u32>>,
}

impl ProjectInstance {
    /// Validates that all skill vectors agree with the number of skills.
    pub fn new(
        resources: Vec<Resource>,
        activities: Vec<Activity>,
        projects: Vec<Project>,
        skills: Option<Vec<u32>>,
    ) -> Result<Self, InstanceError> {
        let num_skills = skills.as_ref().map_or(0, Vec::len);

        for (activity_idx, activity) in activities.iter().enumerate() {
            for (mode_idx, mode) in activity.modes().iter().enumerate() {
                if let Some(requirements) = &mode.skill_requirements {
                    if requirements.len() != num_skills {
                        return Err(InstanceError::SkillRequirementsMismatch {
                            activity: activity_idx,
                            mode: mode_idx,
                            expected: num_skills,
                            found: requirements.len(),
                        });
                    }
                }
            }
        }

        for (resource_idx, resource) in resources.iter().enumerate() {
            if let Some(resource_skills) = &resource.skills {
                if resource_skills.len() != num_skills {
                    return Err(InstanceError::ResourceSkillsMismatch {
                        resource: resource_idx,
                        expected: num_skills,
                        found: resource_skills.len(),
                    });
                }
            }
        }

        Ok(Self {
            resources,
            activities,
            projects,
            skills,
        })
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> Option<&[u32]> {
        self.skills.as_deref()
    }

    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    pub fn num_activities(&self) -> usize {
        self.activities.len()
    }

    pub fn num_projects(&self) -> usize {
        self.projects.len()
    }

    pub fn num_skills(&self) -> usize {
        self.skills.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    fn activities(mode: Mode) -> Vec<Activity> {
        vec![
            Activity::new(vec![Mode::new(0, vec![0])], vec![1], vec![]),
            Activity::new(vec![mode], vec![], vec![0]),
        ]
    }

    #[test]
    fn counts() {
        let instance = ProjectInstance::new(
            vec![Resource::new(4, true), Resource::new(9, false)],
            activities(Mode::new(3, vec![1])),
            vec![Project::new(vec![0, 1], 0, None)],
            None,
        )
        .unwrap();

        assert_eq!(instance.num_resources(), 2);
        assert_eq!(instance.num_activities(), 2);
        assert_eq!(instance.num_projects(), 1);
        assert_eq!(instance.num_skills(), 0);
        assert_eq!(instance.skills(), None);
    }

    #[test]
    fn matching_skills_are_accepted() {
        let instance = ProjectInstance::new(
            vec![Resource::new(1, true).with_skills(vec![true, false, true])],
            activities(Mode::new(3, vec![1]).with_skill_requirements(vec![1, 0, 2])),
            vec![Project::new(vec![0, 1], 0, None)],
            Some(vec![1, 2, 3]),
        )
        .unwrap();

        assert_eq!(instance.num_skills(), 3);
    }

    #[test]
    fn skill_requirements_mismatch() {
        let err = ProjectInstance::new(
            vec![Resource::new(1, true)],
            activities(Mode::new(3, vec![1]).with_skill_requirements(vec![1])),
            vec![],
            Some(vec![1, 2]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            InstanceError::SkillRequirementsMismatch {
                activity: 1,
                mode: 0,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn skill_requirements_without_instance_skills() {
        let result = ProjectInstance::new(
            vec![Resource::new(1, true)],
            activities(Mode::new(3, vec![1]).with_skill_requirements(vec![1])),
            vec![],
            None,
        );

        assert!(matches!(
            result,
            Err(InstanceError::SkillRequirementsMismatch { expected: 0, .. })
        ));
    }

    #[test]
    fn resource_skills_mismatch() {
        let err = ProjectInstance::new(
            vec![
                Resource::new(1, true).with_skills(vec![true]),
                Resource::new(1, true).with_skills(vec![true, true, false]),
            ],
            activities(Mode::new(3, vec![1, 1])),
            vec![],
            Some(vec![1]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            InstanceError::ResourceSkillsMismatch {
                resource: 1,
                expected: 1,
                found: 3
            }
        );
    }

    #[test]
    fn serializes_to_json() {
        let instance = ProjectInstance::new(
            vec![Resource::new(4, true)],
            activities(Mode::new(3, vec![1])),
            vec![Project::new(vec![0, 1], 2, Some(10))],
            None,
        )
        .unwrap();

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["resources"][0]["capacity"], 4);
        assert_eq!(json["activities"][1]["predecessors"][0], 0);
        assert_eq!(json["projects"][0]["due_date"], 10);
        assert!(json["skills"].is_null());
    }
}
