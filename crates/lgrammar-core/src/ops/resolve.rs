//! Outcome resolution and weighted selection
//!
//! A fixed outcome always yields its successor. A weighted outcome draws
//! uniformly from `[0, total)` and walks the candidates in stored order with
//! a running cursor; the first candidate whose upper edge lies above the draw
//! wins. If the walk runs off the end (only possible when the draw lands
//! exactly on `total`) the last candidate is returned, so selection over a
//! valid candidate list always produces a word.
//!
//! Weights are divided by a power of two close to the largest weight before
//! they are summed. The division is exact, so draw boundaries are unchanged,
//! and the scaled total stays finite for any list of finite weights.

use rand::Rng;

use crate::errors::{GrammarError, Result};
use crate::model::{Candidate, Outcome, Rule, Symbol};

/// Resolve a rule to the word that replaces its root
///
/// Fixed outcomes do not touch `rng`. Weighted outcomes consume exactly one
/// draw per call.
///
/// # Errors
/// * `InvalidRule` - If a weighted outcome has no candidates, a negative or
///   non-finite weight, or only zero weights
pub fn resolve<'r, S, R>(rule: &'r Rule<S>, rng: &mut R) -> Result<&'r [S]>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    match &rule.outcome {
        Outcome::Fixed(successor) => Ok(successor),
        Outcome::Weighted(candidates) => {
            let scaled = usable_weights(&rule.root, candidates)?;
            let draw = rng.gen_range(0.0..scaled.total);
            tracing::trace!(root = ?rule.root, draw, total = scaled.total, "weighted draw");
            pick(&rule.root, candidates, draw, scaled.scale)
        }
    }
}

/// Resolve a rule using a caller-supplied draw instead of a random source
///
/// `draw` is expected in `[0, total]`, in the same units as the candidate
/// weights. A draw of exactly `total` selects the last candidate.
///
/// # Errors
/// * `InvalidRule` - Same conditions as [`resolve`]
pub fn resolve_with_draw<S: Symbol>(rule: &Rule<S>, draw: f64) -> Result<&[S]> {
    match &rule.outcome {
        Outcome::Fixed(successor) => Ok(successor),
        Outcome::Weighted(candidates) => {
            let scaled = usable_weights(&rule.root, candidates)?;
            pick(&rule.root, candidates, draw / scaled.scale, scaled.scale)
        }
    }
}

/// Walk `candidates` in order and return the one covering `draw`
///
/// `draw` is in the same units as the weights. Returns `None` only for an
/// empty candidate list.
pub fn select<S>(candidates: &[Candidate<S>], draw: f64) -> Option<&Candidate<S>> {
    let scale = weight_scale(candidates);
    select_scaled(candidates, draw / scale, scale)
}

/// Power of two at or just below the largest finite weight
///
/// Falls back to `1.0` when no weight is positive and finite.
pub(crate) fn weight_scale<S>(candidates: &[Candidate<S>]) -> f64 {
    let max = candidates
        .iter()
        .map(|c| c.weight)
        .filter(|w| w.is_finite() && *w > 0.0)
        .fold(0.0, f64::max);
    if max > 0.0 {
        let exponent = (max.log2().floor() as i32).clamp(-1022, 1023);
        2f64.powi(exponent)
    } else {
        1.0
    }
}

fn select_scaled<S>(candidates: &[Candidate<S>], draw: f64, scale: f64) -> Option<&Candidate<S>> {
    let mut cursor = 0.0;
    for candidate in candidates {
        let weight = candidate.weight / scale;
        if draw < cursor + weight {
            return Some(candidate);
        }
        cursor += weight;
    }
    candidates.last()
}

fn pick<'r, S: Symbol>(
    root: &S,
    candidates: &'r [Candidate<S>],
    draw: f64,
    scale: f64,
) -> Result<&'r [S]> {
    select_scaled(candidates, draw, scale)
        .map(|c| c.successor.as_slice())
        .ok_or_else(|| GrammarError::invalid_rule(root, "weighted outcome has no candidates"))
}

struct ScaledWeights {
    scale: f64,
    total: f64,
}

/// Validate candidate weights and return the scale and scaled total
fn usable_weights<S: Symbol>(root: &S, candidates: &[Candidate<S>]) -> Result<ScaledWeights> {
    if candidates.is_empty() {
        return Err(GrammarError::invalid_rule(
            root,
            "weighted outcome has no candidates",
        ));
    }

    if let Some(bad) = candidates
        .iter()
        .find(|c| !c.weight.is_finite() || c.weight < 0.0)
    {
        return Err(GrammarError::invalid_rule(
            root,
            format!("weight {} is not a finite non-negative number", bad.weight),
        ));
    }

    if candidates.iter().all(|c| c.weight == 0.0) {
        return Err(GrammarError::invalid_rule(root, "all weights are zero"));
    }

    let scale = weight_scale(candidates);
    let total: f64 = candidates.iter().map(|c| c.weight / scale).sum();
    Ok(ScaledWeights { scale, total })
}
