//! Candidate partitioning for guess responses
//!
//! Given a guess and the current candidate set, groups the candidates by the
//! pattern each word would produce. The keeper then keeps the largest family.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Group candidate words by the pattern each would produce for `guess`
///
/// Every word lands in exactly one family, so the map is empty only when the
/// candidate set is.
pub(crate) fn partition(
    candidates: &BTreeSet<String>,
    displayed: &Pattern,
    guess: char,
) -> FxHashMap<Pattern, BTreeSet<String>> {
    let mut families: FxHashMap<Pattern, BTreeSet<String>> = FxHashMap::default();

    for word in candidates {
        let pattern = displayed.reveal(word, guess);
        families.entry(pattern).or_default().insert(word.clone());
    }

    families
}

/// Select the largest family, deterministically
///
/// Scans the families in ascending pattern order and replaces the running
/// best only on a strictly larger family, so among families tied for the
/// maximum size the first pattern in sort order survives.
pub(crate) fn largest_family(
    families: FxHashMap<Pattern, BTreeSet<String>>,
) -> Option<(Pattern, BTreeSet<String>)> {
    let mut families: Vec<(Pattern, BTreeSet<String>)> = families.into_iter().collect();
    families.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut best: Option<(Pattern, BTreeSet<String>)> = None;
    for (pattern, words) in families {
        let best_size = best.as_ref().map_or(0, |(_, family)| family.len());
        if words.len() > best_size {
            best = Some((pattern, words));
        }
    }

    best
}
