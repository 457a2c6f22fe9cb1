//! Recommendation relevance
//!
//! Decides whether a recommendation is emphasized for the user's current
//! technology and data selections.
//!
//! # Combination rule
//!
//! Each relevance dimension that a recommendation declares is checked for an
//! intersection with the selection. A dimension that is not declared counts
//! as matching. The two dimensions are then combined with OR:
//!
//! ```text
//! techs   data    result
//! absent  absent  true
//! set     absent  true   (data side defaults to true)
//! absent  set     true   (tech side defaults to true)
//! set     set     tech_hit || data_hit
//! ```
//!
//! So only a recommendation that declares both dimensions can ever come out
//! as less relevant, and only when neither of them intersects the selection.

use crate::catalog::Recommendation;
use std::collections::BTreeSet;

/// Check if a recommendation is relevant for the selected ids
pub fn is_relevant(
    recommendation: &Recommendation,
    selected_tech_ids: &BTreeSet<String>,
    selected_data_ids: &BTreeSet<String>,
) -> bool {
    let techs = recommendation.relevant_technologies.as_deref();
    let data = recommendation.relevant_data_types.as_deref();

    if techs.is_none() && data.is_none() {
        return true;
    }

    let tech_relevant = techs.is_none_or(|ids| intersects(ids, selected_tech_ids));
    let data_relevant = data.is_none_or(|ids| intersects(ids, selected_data_ids));

    tech_relevant || data_relevant
}

fn intersects(ids: &[String], selected: &BTreeSet<String>) -> bool {
    ids.iter().any(|id| selected.contains(id))
}
