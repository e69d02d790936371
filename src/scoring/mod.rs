// Gap scoring: per-cluster gap, severity, semantic and dominance metrics.

pub mod gap;
pub mod insight;
