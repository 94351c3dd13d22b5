//! Counters collected during a proof search

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

fn secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

/// Summary of a search, reported with the final status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProofStatistics {
    pub initial_clauses: usize,
    /// Given clauses moved into the processed set
    pub processed_clauses: usize,
    pub factors: usize,
    pub resolvents: usize,
    pub tautologies_deleted: usize,
    pub forward_subsumed: usize,
    pub backward_subsumed: usize,
    pub iterations: usize,
    #[serde(serialize_with = "secs")]
    pub elapsed: Duration,
}

impl ProofStatistics {
    /// Clauses produced by inferences
    pub fn generated(&self) -> usize {
        self.factors + self.resolvents
    }
}

impl fmt::Display for ProofStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Initial clauses    : {}", self.initial_clauses)?;
        writeln!(f, "# Processed clauses  : {}", self.processed_clauses)?;
        writeln!(f, "# Factors computed   : {}", self.factors)?;
        writeln!(f, "# Resolvents computed: {}", self.resolvents)?;
        writeln!(f, "# Tautologies deleted: {}", self.tautologies_deleted)?;
        writeln!(f, "# Forward subsumed   : {}", self.forward_subsumed)?;
        writeln!(f, "# Backward subsumed  : {}", self.backward_subsumed)?;
        writeln!(f, "# Iterations         : {}", self.iterations)?;
        write!(f, "# Elapsed time       : {:.3}s", self.elapsed.as_secs_f64())
    }
}
