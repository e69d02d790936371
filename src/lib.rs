// topicgap: topical coverage gap analysis between a page and its competitors
//
// This is the library root. Each module corresponds to one stage of the
// audit: fetch pages, chunk their text, extract and cluster concepts, score
// the gaps and assemble the report.

pub mod concepts;
pub mod config;
pub mod fetch;
pub mod nlp;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scoring;
