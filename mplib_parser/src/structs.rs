use project_instance::Mode;

#[derive(Debug, PartialEq)]
pub struct MplibProjectHeader {
    pub activities: usize,
    pub release_date: i32,
    // only present in the modified instances
    pub due_date: Option<i32>,
}

/// Activity whose successors are still the raw tokens from the file.
#[derive(Debug, PartialEq)]
pub struct MplibPendingActivity<'a> {
    /// `{project}:{activity}`, both 1-based
    pub name: String,
    pub project: usize,
    pub line: usize,
    pub mode: Mode,
    pub successors: Vec<&'a str>,
}
