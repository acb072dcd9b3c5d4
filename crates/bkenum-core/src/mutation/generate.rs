//! Lazy candidate generation.

use super::{Candidate, MarkerCatalog};
use crate::url_model::UrlComponents;

/// Yields every candidate for `components`, in rule order.
///
/// The iterator borrows its inputs and holds no other state; calling
/// `generate` again on the same inputs yields the same sequence.
pub fn generate<'a>(
    catalog: &'a MarkerCatalog,
    components: &'a UrlComponents,
) -> impl Iterator<Item = Candidate> + 'a {
    catalog.rules().filter_map(move |rule| {
        rule.apply(&components.filename)
            .map(|filename| Candidate::from_components(components, filename))
    })
}

/// Number of candidates [`generate`] yields for `filename`.
pub fn candidate_count(catalog: &MarkerCatalog, filename: &str) -> usize {
    let per_marker = if filename.contains('.') { 3 } else { 2 };
    catalog.front_only.len() + catalog.back_only.len() + catalog.all_positions.len() * per_marker
}
