//! Full-word L-system rewriting
//!
//! Every generation maps each symbol of the current word through the rule
//! table in parallel: a symbol with a rule is replaced by the resolved
//! successor (spliced in, so one symbol may become many or none), a symbol
//! without a rule is copied unchanged. Each generation is built into a fresh
//! buffer from the previous one; a failed resolution discards the whole
//! generation.

use std::iter::FusedIterator;

use rand::Rng;

use super::table::RuleTable;
use crate::errors::Result;
use crate::model::{Symbol, Word};

/// Apply the rule table to `input` for `generations` passes
///
/// `generations <= 0` returns the input unchanged; `N >= 1` applies the
/// table exactly `N` times.
///
/// # Errors
/// * `InvalidRule` - If any rule resolution fails; no partial output is
///   returned
pub fn rewrite<S, R>(
    table: &RuleTable<S>,
    input: &[S],
    generations: i64,
    rng: &mut R,
) -> Result<Word<S>>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    let mut passes = Generations::new(table, input, rng);
    for _ in 0..generations.max(0) {
        let word_len = match passes.advance() {
            Some(result) => result?.len(),
            None => break,
        };
        tracing::debug!(
            generation = passes.generation(),
            word_len,
            "generation rewritten"
        );
    }
    Ok(passes.into_word())
}

/// Apply the rule table to `word` exactly once
///
/// # Errors
/// * `InvalidRule` - If any rule resolution fails
pub fn rewrite_once<S, R>(table: &RuleTable<S>, word: &[S], rng: &mut R) -> Result<Word<S>>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    let mut next = Vec::with_capacity(word.len());
    for symbol in word {
        match table.find(symbol) {
            Some(rule) => next.extend_from_slice(rule.resolve(rng)?),
            None => next.push(symbol.clone()),
        }
    }
    Ok(next)
}

/// Rewrite a string over a single-character alphabet
///
/// # Errors
/// * `InvalidRule` - If any rule resolution fails
pub fn rewrite_str<R>(
    table: &RuleTable<char>,
    input: &str,
    generations: i64,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    let input: Vec<char> = input.chars().collect();
    rewrite(table, &input, generations, rng).map(|word| word.into_iter().collect())
}

/// Iterator over successive generations of a word
///
/// Yields generation 1, 2, … without end; combine with `take` to bound it.
/// After the first error the iterator is exhausted.
///
/// Each `next` hands out an owned copy of the word. [`Generations::advance`]
/// borrows the word instead, so only the current generation is kept alive.
pub struct Generations<'a, S: Symbol, R: ?Sized> {
    table: &'a RuleTable<S>,
    current: Word<S>,
    rng: &'a mut R,
    generation: u64,
    failed: bool,
}

/// Start iterating generations of `input` under `table`
pub fn generations<'a, S, R>(
    table: &'a RuleTable<S>,
    input: &[S],
    rng: &'a mut R,
) -> Generations<'a, S, R>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    Generations::new(table, input, rng)
}

impl<'a, S, R> Generations<'a, S, R>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    /// Start at generation 0 with a copy of `input`
    pub fn new(table: &'a RuleTable<S>, input: &[S], rng: &'a mut R) -> Self {
        Self {
            table,
            current: input.to_vec(),
            rng,
            generation: 0,
            failed: false,
        }
    }

    /// Rewrite the current word once and borrow the result
    ///
    /// The previous generation is dropped as soon as the new one is built.
    /// Returns `None` once a rewrite has failed.
    pub fn advance(&mut self) -> Option<Result<&[S]>> {
        if self.failed {
            return None;
        }
        match rewrite_once(self.table, &self.current, &mut *self.rng) {
            Ok(next) => {
                self.current = next;
                self.generation += 1;
                Some(Ok(self.current.as_slice()))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    /// Number of completed passes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Word of the latest completed generation (the input before any pass)
    pub fn current(&self) -> &[S] {
        &self.current
    }

    /// Take the latest completed generation
    pub fn into_word(self) -> Word<S> {
        self.current
    }
}

impl<S, R> Iterator for Generations<'_, S, R>
where
    S: Symbol,
    R: Rng + ?Sized,
{
    type Item = Result<Word<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|result| result.map(<[S]>::to_vec))
    }
}

impl<S, R> FusedIterator for Generations<'_, S, R>
where
    S: Symbol,
    R: Rng + ?Sized,
{
}
