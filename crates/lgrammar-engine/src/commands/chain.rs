use lgrammar_core::{chain, log_op_end, log_op_error, log_op_start, Word};

use super::{command_rng, elapsed_ms};
use crate::errors::{invalid_command_input, Result};
use crate::grammar_file::GrammarDefinition;

/// Run a Markov chain from a single starting symbol
///
/// ## Arguments
///
/// - `grammar`: Loaded grammar definition
/// - `from`: Starting symbol; falls back to the grammar's axiom when `None`
/// - `steps`: Maximum number of transitions
/// - `seed`: Optional RNG seed for reproducible output
///
/// ## Returns
///
/// The produced symbols rendered in the grammar's alphabet (the starting
/// symbol itself is not included)
///
/// ## Errors
///
/// - `InvalidInput`: Starting point missing or not exactly one symbol
/// - `NoRuleForSeed`: The starting symbol has no rule
/// - `InvalidRule`: A weighted rule could not be resolved
pub fn chain_command(
    grammar: &GrammarDefinition,
    from: Option<&str>,
    steps: i64,
    seed: Option<u64>,
) -> Result<String> {
    log_op_start!("chain", grammar = %grammar.name, steps = steps);
    let start = std::time::Instant::now();

    let result = chain_impl(grammar, from, steps, seed).map_err(|e| {
        log_op_error!("chain", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "chain",
        duration_ms = elapsed_ms(start),
        word_len = result.len()
    );

    Ok(grammar.render(&result))
}

fn chain_impl(
    grammar: &GrammarDefinition,
    from: Option<&str>,
    steps: i64,
    seed: Option<u64>,
) -> Result<Word<String>> {
    let start_word = match from {
        Some(text) => grammar.parse_word(text),
        None => grammar.axiom.clone().unwrap_or_default(),
    };

    let [start_symbol] = start_word.as_slice() else {
        return Err(invalid_command_input(
            "chain",
            &format!(
                "Chain must start from exactly one symbol, got {}",
                start_word.len()
            ),
        ));
    };

    let mut rng = command_rng(seed);
    Ok(chain(&grammar.table, start_symbol, steps, &mut rng)?)
}
