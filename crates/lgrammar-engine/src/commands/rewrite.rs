use lgrammar_core::{generations, log_op_end, log_op_error, log_op_start, ExError, Word};

use super::{command_rng, elapsed_ms};
use crate::errors::{invalid_command_input, Result};
use crate::grammar_file::GrammarDefinition;

/// Rewrite an axiom for a number of generations
///
/// ## Arguments
///
/// - `grammar`: Loaded grammar definition
/// - `axiom`: Axiom text; falls back to the grammar's own axiom when `None`
/// - `generation_count`: Number of passes (`<= 0` returns the axiom)
/// - `seed`: Optional RNG seed for reproducible stochastic output
///
/// ## Returns
///
/// The final word rendered in the grammar's alphabet
///
/// ## Errors
///
/// - `InvalidInput`: No axiom given and the grammar defines none
/// - `InvalidRule`: A weighted rule could not be resolved
pub fn rewrite_command(
    grammar: &GrammarDefinition,
    axiom: Option<&str>,
    generation_count: i64,
    seed: Option<u64>,
) -> Result<String> {
    log_op_start!(
        "rewrite",
        grammar = %grammar.name,
        generations = generation_count
    );
    let start = std::time::Instant::now();

    let result = rewrite_impl(grammar, axiom, generation_count, seed).map_err(|e| {
        log_op_error!("rewrite", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "rewrite",
        duration_ms = elapsed_ms(start),
        word_len = result.len()
    );

    Ok(grammar.render(&result))
}

fn rewrite_impl(
    grammar: &GrammarDefinition,
    axiom: Option<&str>,
    generation_count: i64,
    seed: Option<u64>,
) -> Result<Word<String>> {
    let input = resolve_axiom(grammar, axiom, "rewrite")?;
    let mut rng = command_rng(seed);

    let mut passes = generations(&grammar.table, &input, &mut rng);
    for pass in 1..=generation_count.max(0) {
        match passes.advance() {
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(at_generation(e.into(), pass)),
            None => break,
        }
    }
    Ok(passes.into_word())
}

/// Rewrite an axiom and return every generation, starting with the axiom
///
/// ## Errors
///
/// - `InvalidInput`: No axiom given and the grammar defines none
/// - `InvalidRule`: A weighted rule could not be resolved
pub fn rewrite_trace_command(
    grammar: &GrammarDefinition,
    axiom: Option<&str>,
    generation_count: i64,
    seed: Option<u64>,
) -> Result<Vec<String>> {
    log_op_start!(
        "rewrite_trace",
        grammar = %grammar.name,
        generations = generation_count
    );
    let start = std::time::Instant::now();

    let result = rewrite_trace_impl(grammar, axiom, generation_count, seed).map_err(|e| {
        log_op_error!("rewrite_trace", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "rewrite_trace",
        duration_ms = elapsed_ms(start),
        generations_emitted = result.len()
    );

    Ok(result)
}

fn rewrite_trace_impl(
    grammar: &GrammarDefinition,
    axiom: Option<&str>,
    generation_count: i64,
    seed: Option<u64>,
) -> Result<Vec<String>> {
    let input = resolve_axiom(grammar, axiom, "rewrite_trace")?;
    let mut rng = command_rng(seed);

    let mut lines = vec![grammar.render(&input)];
    let mut passes = generations(&grammar.table, &input, &mut rng);
    for pass in 1..=generation_count.max(0) {
        match passes.advance() {
            Some(Ok(word)) => lines.push(grammar.render(word)),
            Some(Err(e)) => return Err(at_generation(e.into(), pass)),
            None => break,
        }
    }
    Ok(lines)
}

fn at_generation(err: ExError, pass: i64) -> ExError {
    err.with_generation(pass.unsigned_abs())
}

fn resolve_axiom(
    grammar: &GrammarDefinition,
    axiom: Option<&str>,
    op: &str,
) -> Result<Word<String>> {
    match axiom {
        Some(text) => Ok(grammar.parse_word(text)),
        None => grammar.axiom.clone().ok_or_else(|| {
            invalid_command_input(
                op,
                &format!(
                    "Grammar '{}' defines no axiom; pass one explicitly",
                    grammar.name
                ),
            )
        }),
    }
}
