use anyhow::Result;
use log::{debug, info, trace};
use mplib_parser::read_mplib;
use project_instance::ProjectInstance;
use std::{borrow::Cow, fs::File, io::Write, path::PathBuf};

pub fn graph(input_path: PathBuf, output_path: PathBuf) -> Result<()> {
    let instance = read_mplib(&input_path)?;
    trace!("parsed instance: {instance:#?}");

    let name = input_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!("Creating graph {name} with {} activities", instance.num_activities());

    let mut output_file = File::create(&output_path)?;
    render(&instance, &name, &mut output_file)?;

    info!("Wrote graphviz dot file to: {:?}", output_path);

    Ok(())
}

pub(crate) fn render<W: Write>(instance: &ProjectInstance, name: &str, writer: &mut W) -> Result<()> {
    let edges = Edges {
        name: graph_id(name),
        instance,
        edges: instance
            .activities()
            .iter()
            .enumerate()
            .flat_map(|(idx, activity)| {
                activity
                    .successors()
                    .iter()
                    .map(move |&successor| (idx, successor))
            })
            .collect(),
    };

    dot::render(&edges, writer)?;

    Ok(())
}

/// Graphviz ids may only contain alphanumerics and underscores.
fn graph_id(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    match id.chars().next() {
        Some(c) if !c.is_ascii_digit() => id,
        _ => format!("G{id}"),
    }
}

type Nd = usize;
type Ed = (usize, usize);
struct Edges<'i> {
    name: String,
    instance: &'i ProjectInstance,
    edges: Vec<Ed>,
}

impl<'a> dot::Labeller<'a, Nd, Ed> for Edges<'_> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new(self.name.clone()).expect("Failed to get graph id")
    }

    fn node_id(&'a self, n: &Nd) -> dot::Id<'a> {
        let id = format!("N{}", *n);
        dot::Id::new(id).expect("Failed to label graph node")
    }

    fn node_label(&'a self, n: &Nd) -> dot::LabelText<'a> {
        let activity = &self.instance.activities()[*n];
        let duration = activity
            .modes()
            .first()
            .map(|mode| mode.duration)
            .unwrap_or_default();
        dot::LabelText::label(format!("{} ({})", activity.name(), duration))
    }
}

impl<'a> dot::GraphWalk<'a, Nd, Ed> for Edges<'_> {
    fn nodes(&self) -> dot::Nodes<'a, Nd> {
        Cow::Owned((0..self.instance.num_activities()).collect())
    }

    fn edges(&'a self) -> dot::Edges<'a, Ed> {
        let edges = &self.edges;
        Cow::Borrowed(&edges[..])
    }

    fn source(&self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&self, e: &Ed) -> Nd {
        e.1
    }
}
