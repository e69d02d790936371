// Pipelines: end-to-end flows composed from the fetch, concepts, scoring
// and report modules.

pub mod audit;
