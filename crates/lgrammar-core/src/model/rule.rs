use rand::Rng;
use serde::{Deserialize, Serialize};

use super::outcome::Outcome;
use super::symbol::Symbol;
use crate::errors::Result;
use crate::ops::resolve;

/// Production rule binding one root symbol to an outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule<S> {
    /// Symbol this rule replaces
    pub root: S,

    /// Replacement for `root`
    pub outcome: Outcome<S>,
}

impl<S> Rule<S> {
    /// Create a rule from a root and an outcome
    pub fn new(root: S, outcome: Outcome<S>) -> Self {
        Self { root, outcome }
    }

    /// Deterministic rule: `root -> successor`
    pub fn fixed(root: S, successor: impl IntoIterator<Item = S>) -> Self {
        Self::new(root, Outcome::fixed(successor))
    }

    /// Stochastic rule choosing among `(successor, weight)` pairs
    pub fn weighted<I, W>(root: S, candidates: I) -> Self
    where
        I: IntoIterator<Item = (W, f64)>,
        W: IntoIterator<Item = S>,
    {
        Self::new(root, Outcome::weighted(candidates))
    }
}

impl<S: Symbol> Rule<S> {
    /// Resolve this rule's outcome, drawing from `rng` if it is weighted
    ///
    /// # Errors
    /// * `InvalidRule` - If the weighted outcome has no usable candidates
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&[S]> {
        resolve::resolve(self, rng)
    }

    /// Resolve this rule's outcome with a caller-supplied draw in `[0, total]`
    ///
    /// # Errors
    /// * `InvalidRule` - If the weighted outcome has no usable candidates
    pub fn resolve_with_draw(&self, draw: f64) -> Result<&[S]> {
        resolve::resolve_with_draw(self, draw)
    }
}
