// Page fetching: turns a URL into the paragraph text the extractor reads.
//
// The PageFetcher trait is the seam: the HTTP implementation lives in
// http.rs, and tests substitute an in-memory fake.

pub mod html;
pub mod http;
pub mod traits;
