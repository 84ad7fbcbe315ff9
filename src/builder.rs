use crate::{TableEngine, TableProblem};

pub struct TableEngineBuilder<P: TableProblem> {
    problem: P,
    snapshots: bool,
}

impl<P: TableProblem> TableEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            snapshots: false,
        }
    }
    /// Record a copy of the table after every layer.
    pub fn with_snapshots(mut self, snapshots: bool) -> Self {
        self.snapshots = snapshots;
        self
    }
    pub fn build(self) -> TableEngine<P> {
        TableEngine::with_snapshots(self.problem, self.snapshots)
    }
}
