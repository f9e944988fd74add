use std::{fmt::Display, fs, path::Path, str::FromStr};

use chumsky::{prelude::*, Parser};
use hashbrown::HashMap;
use log::{debug, trace};
use project_instance::{Activity, InstanceError, Mode, Project, ProjectInstance, Resource};
use structs::{MplibPendingActivity, MplibProjectHeader};
use thiserror::Error;

use crate::lines::{Line, Lines};

mod lines;
pub mod structs;

#[derive(Debug, Error)]
pub enum MplibParseError {
    #[error("cannot read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: invalid {field} {token:?}")]
    InvalidInteger {
        field: &'static str,
        line: usize,
        token: String,
        errors: Vec<Simple<char>>,
    },
    #[error("line {line}: expected {expected} values for {field}, found {found}")]
    TokenCount {
        field: &'static str,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: header of project {project} has {found} values, expected 2 or 3")]
    InvalidProjectHeader {
        project: usize,
        line: usize,
        found: usize,
    },
    #[error("line {line}: activity {activity} declares {declared} successors but lists {found}")]
    SuccessorCountMismatch {
        activity: String,
        line: usize,
        declared: usize,
        found: usize,
    },
    #[error("line {line}: activity {activity} references unknown successor {successor:?}")]
    UnresolvedSuccessor {
        activity: String,
        line: usize,
        successor: String,
    },
    #[error("invalid instance: {0}")]
    Instance(#[from] InstanceError),
}

/// Read and parse a multi-project instance file from MPLIB.
pub fn read_mplib(path: impl AsRef<Path>) -> Result<ProjectInstance, MplibParseError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    trace!("read {} bytes from {path:?}", contents.len());

    parse_mplib(&contents)
}

/// Parse the contents of a multi-project instance file from MPLIB.
///
/// Activities are numbered in file order across all projects. Each activity
/// is named `{project}:{activity}` after its 1-based position in the file.
pub fn parse_mplib(content: &str) -> Result<ProjectInstance, MplibParseError> {
    let mut lines = Lines::new(content);

    let num_projects: usize = lines
        .next_line("number of projects")?
        .single("number of projects")?;
    let num_resources: usize = lines
        .next_line("number of resources")?
        .single("number of resources")?;

    let resources = crate::resources(lines.next_line("resource capacities")?, num_resources)?;

    let mut projects: Vec<Project> = vec![];
    let mut pending: Vec<MplibPendingActivity> = vec![];
    let mut name_to_index: HashMap<String, usize> = HashMap::new();

    for project_idx in 1..=num_projects {
        let header = crate::project_header(lines.next_line("project header")?, project_idx)?;

        // Resources used by the project, already implied by demands > 0
        lines.next_line("project resource usage")?;

        let mut indices = vec![];
        for activity_idx in 1..=header.activities {
            let activity = crate::pending_activity(
                lines.next_line("activity")?,
                project_idx,
                activity_idx,
                num_resources,
            )?;

            indices.push(pending.len());
            name_to_index.insert(activity.name.clone(), pending.len());
            pending.push(activity);
        }

        debug!(
            "project {project_idx}: {} activities, release date {}, due date {:?}",
            header.activities, header.release_date, header.due_date
        );

        projects.push(Project::new(
            indices,
            header.release_date,
            header.due_date,
        ));
    }

    let successors = crate::resolve_successors(&pending, &name_to_index)?;
    let predecessors = crate::derive_predecessors(&successors);

    let activities: Vec<Activity> = pending
        .into_iter()
        .zip(successors)
        .zip(predecessors)
        .map(|((activity, successors), predecessors)| {
            Activity::new(vec![activity.mode], successors, predecessors).with_name(activity.name)
        })
        .collect();

    debug!(
        "parsed {} projects with {} activities and {} resources",
        projects.len(),
        activities.len(),
        resources.len()
    );

    Ok(ProjectInstance::new(resources, activities, projects, None)?)
}

pub(crate) fn integer_parser<T>() -> impl Parser<char, T, Error = Simple<char>>
where
    T: FromStr,
    T::Err: Display,
{
    just('-')
        .or_not()
        .chain::<char, _, _>(text::digits(10))
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<T>()
                .map_err(|err| Simple::custom(span, err.to_string()))
        })
        .then_ignore(end())
        .labelled("integer")
}

pub(crate) fn resources(line: Line, num_resources: usize) -> Result<Vec<Resource>, MplibParseError> {
    let capacities: Vec<u32> = line.integers("resource capacity")?;

    if capacities.len() != num_resources {
        return Err(MplibParseError::TokenCount {
            field: "resource capacities",
            line: line.number,
            expected: num_resources,
            found: capacities.len(),
        });
    }

    Ok(capacities
        .into_iter()
        .map(|capacity| Resource::new(capacity, true))
        .collect())
}

pub(crate) fn project_header(
    line: Line,
    project_idx: usize,
) -> Result<MplibProjectHeader, MplibParseError> {
    match line.tokens().as_slice() {
        [activities, release_date] => Ok(MplibProjectHeader {
            activities: line.integer(activities, "number of activities")?,
            release_date: line.integer(release_date, "release date")?,
            due_date: None,
        }),
        [activities, release_date, due_date] => Ok(MplibProjectHeader {
            activities: line.integer(activities, "number of activities")?,
            release_date: line.integer(release_date, "release date")?,
            due_date: Some(line.integer(due_date, "due date")?),
        }),
        tokens => Err(MplibParseError::InvalidProjectHeader {
            project: project_idx,
            line: line.number,
            found: tokens.len(),
        }),
    }
}

/// `<duration> <demand>... <successor count> <successor>...`
pub(crate) fn pending_activity<'a>(
    line: Line<'a>,
    project_idx: usize,
    activity_idx: usize,
    num_resources: usize,
) -> Result<MplibPendingActivity<'a>, MplibParseError> {
    let name = format!("{project_idx}:{activity_idx}");
    let tokens = line.tokens();
    let fixed = num_resources + 2;

    if tokens.len() < fixed {
        return Err(MplibParseError::TokenCount {
            field: "activity",
            line: line.number,
            expected: fixed,
            found: tokens.len(),
        });
    }

    let duration: u32 = line.integer(tokens[0], "duration")?;
    let demands = tokens[1..=num_resources]
        .iter()
        .map(|token| line.integer::<u32>(token, "demand"))
        .collect::<Result<Vec<_>, _>>()?;
    let declared: usize = line.integer(tokens[fixed - 1], "number of successors")?;

    let successors = tokens[fixed..].to_vec();
    if successors.len() != declared {
        return Err(MplibParseError::SuccessorCountMismatch {
            activity: name,
            line: line.number,
            declared,
            found: successors.len(),
        });
    }

    Ok(MplibPendingActivity {
        name,
        project: project_idx,
        line: line.number,
        mode: Mode::new(duration, demands),
        successors,
    })
}

/// Map the successor tokens to global activity indices.
///
/// A bare token refers to an activity of the same project; a token which is
/// already of the form `{project}:{activity}` is looked up as is.
pub(crate) fn resolve_successors(
    pending: &[MplibPendingActivity],
    name_to_index: &HashMap<String, usize>,
) -> Result<Vec<Vec<usize>>, MplibParseError> {
    pending
        .iter()
        .map(|activity| {
            activity
                .successors
                .iter()
                .map(|&successor| {
                    let name = if successor.contains(':') {
                        successor.to_string()
                    } else {
                        format!("{}:{successor}", activity.project)
                    };

                    name_to_index.get(&name).copied().ok_or_else(|| {
                        MplibParseError::UnresolvedSuccessor {
                            activity: activity.name.clone(),
                            line: activity.line,
                            successor: successor.to_string(),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Invert the successor lists. Predecessors are appended in ascending order
/// of the activity listing them.
pub(crate) fn derive_predecessors(successors: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut predecessors = vec![vec![]; successors.len()];

    for (activity, activity_successors) in successors.iter().enumerate() {
        for &successor in activity_successors {
            predecessors[successor].push(activity);
        }
    }

    predecessors
}
