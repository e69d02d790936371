// Concept extraction and head-word clustering.

pub mod cluster;
pub mod extract;
