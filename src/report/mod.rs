// Report: output models and final assembly.

pub mod assemble;
pub mod models;
