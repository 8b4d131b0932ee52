//! Markov symbol chaining
//!
//! Unlike rewriting, a chain never revisits the accumulated output. It keeps
//! one current symbol, resolves it, appends the successor to the output and
//! continues from the successor's last symbol.

use rand::Rng;

use super::table::RuleTable;
use crate::errors::{GrammarError, Result};
use crate::model::{Symbol, Word};

/// Run a chain of at most `generations` steps starting from `seed`
///
/// The chain stops early, without error, when the current symbol has no
/// rule or a step produces an empty successor. `generations <= 0` produces
/// an empty word once the seed has been checked.
///
/// # Errors
/// * `NoRuleForSeed` - If `seed` has no rule in `table`
/// * `InvalidRule` - If a weighted rule along the chain cannot be resolved;
///   no partial output is returned
pub fn chain<S, R>(table: &RuleTable<S>, seed: &S, generations: i64, rng: &mut R) -> Result<Word<S>>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    let mut rule = Some(
        table
            .find(seed)
            .ok_or_else(|| GrammarError::no_rule_for_seed(seed))?,
    );

    let mut output = Vec::new();
    let mut remaining = generations;
    while remaining > 0 {
        let Some(current) = rule else {
            tracing::debug!(
                steps = generations - remaining,
                last = ?output.last(),
                "chain reached a dead end"
            );
            break;
        };

        let successor = current.resolve(rng)?;
        output.extend_from_slice(successor);
        rule = successor.last().and_then(|next| table.find(next));
        remaining -= 1;
    }

    Ok(output)
}

/// Chain over a single-character alphabet, returning a `String`
///
/// # Errors
/// * `NoRuleForSeed` - If `seed` has no rule in `table`
/// * `InvalidRule` - If a weighted rule along the chain cannot be resolved
pub fn chain_str<R>(
    table: &RuleTable<char>,
    seed: char,
    generations: i64,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    chain(table, &seed, generations, rng).map(|word| word.into_iter().collect())
}
