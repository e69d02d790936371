// Templated cluster descriptions and recommendations.
//
// Four coverage states, each with a fixed sentence pair parameterized by the
// cluster's head word.

/// Where the target page stands on a cluster relative to the competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Target has no concepts under this head at all
    Missing,
    Behind,
    Ahead,
    Balanced,
}

impl Coverage {
    pub fn from_totals(my_total: u32, comp_total: u32) -> Self {
        if my_total == 0 && comp_total > 0 {
            Coverage::Missing
        } else if my_total < comp_total {
            Coverage::Behind
        } else if my_total > comp_total {
            Coverage::Ahead
        } else {
            Coverage::Balanced
        }
    }
}

/// Returns `(cluster_description, recommendation)` for a head word.
pub fn describe(head: &str, coverage: Coverage) -> (String, String) {
    match coverage {
        Coverage::Missing => (
            format!(
                "Your page has no meaningful coverage of '{head}', while competitors emphasize it heavily."
            ),
            format!(
                "Create a dedicated section addressing '{head}' with structured headings and supporting entities."
            ),
        ),
        Coverage::Behind => (
            format!("Competitors provide deeper semantic coverage of '{head}' compared to your page."),
            format!(
                "Expand topical depth around '{head}' with additional examples and semantic reinforcement."
            ),
        ),
        Coverage::Ahead => (
            format!("You demonstrate stronger coverage of '{head}' than competitors."),
            "Strengthen authority signals by adding schema markup and contextual entity references."
                .to_string(),
        ),
        Coverage::Balanced => (
            format!("Coverage for '{head}' is competitively balanced."),
            "Maintain depth while refining semantic clarity and internal linking.".to_string(),
        ),
    }
}
