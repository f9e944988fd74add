use log::{trace, warn};
use petgraph::{
    algo,
    graph::{DiGraph, NodeIndex},
    Direction,
};
use project_instance::ProjectInstance;

type Graph = DiGraph<usize, ()>;

/// Precedence relations of an instance. Node weights are global activity indices.
pub struct PrecedenceGraph<'a> {
    graph: Graph,
    pub instance: &'a ProjectInstance,
}

impl<'a> PrecedenceGraph<'a> {
    pub fn new(instance: &'a ProjectInstance) -> Self {
        let num_activities = instance.num_activities();
        let mut graph = Graph::with_capacity(num_activities, num_activities);

        for idx in 0..num_activities {
            graph.add_node(idx);
        }

        for (idx, activity) in instance.activities().iter().enumerate() {
            for &successor in activity.successors() {
                if successor >= num_activities {
                    warn!("activity {idx} has successor {successor} out of range");
                    continue;
                }
                graph.add_edge(NodeIndex::new(idx), NodeIndex::new(successor), ());
            }
        }

        Self { graph, instance }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_acyclic(&self) -> bool {
        !algo::is_cyclic_directed(&self.graph)
    }

    /// Compute the upper bound of execution time by accumulating the longest
    /// mode of every activity
    pub fn duration_upper_bound(&self) -> u64 {
        self.instance
            .activities()
            .iter()
            .map(|activity| {
                activity
                    .modes()
                    .iter()
                    .map(|mode| mode.duration as u64)
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Find the lower bound of execution time: the longest path through the
    /// precedence graph using the shortest mode of every activity, where no
    /// activity starts before the release date of its project.
    ///
    /// `None` if the precedence graph has a cycle.
    pub fn critical_path_length(&self) -> Option<i64> {
        let order = algo::toposort(&self.graph, None).ok()?;

        let mut earliest_start = vec![0i64; self.instance.num_activities()];
        for project in self.instance.projects() {
            for &idx in &project.activities {
                if let Some(start) = earliest_start.get_mut(idx) {
                    *start = project.release_date as i64;
                }
            }
        }

        let mut length = 0;
        for node in order {
            let idx = self.graph[node];
            let duration = self.instance.activities()[idx]
                .modes()
                .iter()
                .map(|mode| mode.duration as i64)
                .min()
                .unwrap_or(0);
            let finish = earliest_start[idx] + duration;
            length = length.max(finish);

            for successor in self.graph.neighbors_directed(node, Direction::Outgoing) {
                let successor = self.graph[successor];
                earliest_start[successor] = earliest_start[successor].max(finish);
            }
        }

        trace!("earliest_start: {earliest_start:?}");

        Some(length)
    }
}
