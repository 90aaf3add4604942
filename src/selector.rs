// src/selector.rs

//! Picks the next quiz question for a client-tracked session.

use std::collections::HashSet;

use rand::Rng;

use crate::models::question::Question;

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Next(Question),
    /// Every candidate has already been served.
    Exhausted,
}

/// Draws one question uniformly at random from `candidates`, skipping every id
/// listed in `previous`.
///
/// Exhaustion is the exact set difference: ids in `previous` that are not
/// candidates (e.g. from another category) do not count against the pool.
/// An empty candidate list is exhausted as well.
pub fn select_question<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Selection
where
    R: Rng,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return Selection::Exhausted;
    }

    let index = rng.gen_range(0..remaining.len());
    Selection::Next(remaining.swap_remove(index))
}
