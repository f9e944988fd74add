mod export;
mod graph;
mod summary;

pub use export::export;
pub use graph::graph;
pub use summary::summary;
