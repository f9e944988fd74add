use std::{fmt, path::PathBuf};

use anyhow::Result;
use log::{error, info};
use mplib_parser::read_mplib;
use project_instance::ProjectInstance;
use rayon::prelude::*;

use crate::analysis::PrecedenceGraph;

pub fn summary(paths: Vec<PathBuf>) -> Result<()> {
    let files = instance_files(paths)?;

    let summaries: Vec<(PathBuf, Result<InstanceSummary>)> = files
        .into_par_iter()
        .map(|path| {
            let summary = read_mplib(&path)
                .map(|instance| InstanceSummary::new(&instance))
                .map_err(anyhow::Error::from);
            (path, summary)
        })
        .collect();

    let mut failed = 0;
    for (path, summary) in &summaries {
        match summary {
            Ok(summary) => println!("{}: {summary}", path.display()),
            Err(err) => {
                error!("{}: {err}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} instances could not be parsed",
            summaries.len()
        )
    }

    info!("Summarized {} instances", summaries.len());

    Ok(())
}

/// Expand folders to the files they contain, sorted by name.
fn instance_files(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let mut files = vec![];

    for path in paths {
        if path.is_dir() {
            let mut folder_files = vec![];
            for entry in path.read_dir()? {
                let entry_path = entry?.path();
                if entry_path.is_file() {
                    folder_files.push(entry_path);
                }
            }
            folder_files.sort();
            files.append(&mut folder_files);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

#[derive(Debug, PartialEq)]
pub struct InstanceSummary {
    pub projects: usize,
    pub activities: usize,
    pub resources: usize,
    pub precedences: usize,
    pub acyclic: bool,
    pub upper_bound: u64,
    pub critical_path: Option<i64>,
}

impl InstanceSummary {
    pub fn new(instance: &ProjectInstance) -> Self {
        let graph = PrecedenceGraph::new(instance);

        Self {
            projects: instance.num_projects(),
            activities: instance.num_activities(),
            resources: instance.num_resources(),
            precedences: graph.edge_count(),
            acyclic: graph.is_acyclic(),
            upper_bound: graph.duration_upper_bound(),
            critical_path: graph.critical_path_length(),
        }
    }
}

impl fmt::Display for InstanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects={} activities={} resources={} precedences={} acyclic={} upper_bound={} critical_path=",
            self.projects,
            self.activities,
            self.resources,
            self.precedences,
            self.acyclic,
            self.upper_bound
        )?;

        match self.critical_path {
            Some(length) => write!(f, "{length}"),
            None => write!(f, "-"),
        }
    }
}
