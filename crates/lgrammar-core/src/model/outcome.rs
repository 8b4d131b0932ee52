use serde::{Deserialize, Serialize};

use super::symbol::Word;
use crate::ops::resolve::weight_scale;

/// One weighted alternative of a stochastic rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<S> {
    /// Word spliced into the output when this candidate is chosen
    pub successor: Word<S>,

    /// Relative weight; weights of a rule need not sum to 1
    pub weight: f64,
}

impl<S> Candidate<S> {
    /// Create a candidate from any symbol sequence
    pub fn new(successor: impl IntoIterator<Item = S>, weight: f64) -> Self {
        Self {
            successor: successor.into_iter().collect(),
            weight,
        }
    }
}

/// What a rule's root symbol is replaced with
///
/// Construction is permissive: a weighted outcome with no usable weights can
/// be built and stored, and only fails when it is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<S> {
    /// Deterministic replacement
    Fixed(Word<S>),

    /// Weighted random choice between candidates, walked in stored order
    Weighted(Vec<Candidate<S>>),
}

impl<S> Outcome<S> {
    /// Deterministic outcome producing `successor`
    pub fn fixed(successor: impl IntoIterator<Item = S>) -> Self {
        Outcome::Fixed(successor.into_iter().collect())
    }

    /// Weighted outcome from `(successor, weight)` pairs
    pub fn weighted<I, W>(candidates: I) -> Self
    where
        I: IntoIterator<Item = (W, f64)>,
        W: IntoIterator<Item = S>,
    {
        Outcome::Weighted(
            candidates
                .into_iter()
                .map(|(successor, weight)| Candidate::new(successor, weight))
                .collect(),
        )
    }

    /// True if resolving this outcome never consumes randomness
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Outcome::Fixed(_))
    }

    /// Sum of candidate weights (1.0 for a fixed outcome)
    ///
    /// The raw sum may overflow to infinity for very large weights; selection
    /// and [`Outcome::probability`] work on scaled weights and are unaffected.
    pub fn total_weight(&self) -> f64 {
        match self {
            Outcome::Fixed(_) => 1.0,
            Outcome::Weighted(candidates) => candidates.iter().map(|c| c.weight).sum(),
        }
    }

    /// Selection probability of the candidate at `index`
    ///
    /// Returns `None` if the index is out of range or the total weight is not
    /// positive.
    pub fn probability(&self, index: usize) -> Option<f64> {
        match self {
            Outcome::Fixed(_) => (index == 0).then_some(1.0),
            Outcome::Weighted(candidates) => {
                let scale = weight_scale(candidates);
                let total: f64 = candidates.iter().map(|c| c.weight / scale).sum();
                if total <= 0.0 || !total.is_finite() {
                    return None;
                }
                candidates.get(index).map(|c| c.weight / scale / total)
            }
        }
    }

    /// Iterate over every word this outcome can produce
    pub fn successors(&self) -> Box<dyn Iterator<Item = &Word<S>> + '_> {
        match self {
            Outcome::Fixed(successor) => Box::new(std::iter::once(successor)),
            Outcome::Weighted(candidates) => Box::new(candidates.iter().map(|c| &c.successor)),
        }
    }
}
