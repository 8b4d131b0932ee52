//! Grammar file parser with validation
//!
//! Parses YAML and validates schema version, rule shape and root uniqueness.
//! Weights are not checked here: a degenerate weighted rule loads fine and
//! fails with `InvalidRule` when it is resolved.

use std::fs;
use std::path::Path;

use lgrammar_core::{ExError, Outcome, Rule, RuleTable};

use super::definition::{Alphabet, GrammarDefinition};
use super::format_v0::{GrammarFileV0, RuleV0};
use crate::errors::{from_yaml, grammar_validation, invalid_symbol, io_error, Result};

/// Parse a grammar file from a path
pub fn parse_grammar_file(path: &Path) -> Result<GrammarDefinition> {
    let content = fs::read_to_string(path).map_err(|e| io_error("grammar_read", e))?;
    parse_grammar_str(&content)
}

/// Parse a grammar from a string
pub fn parse_grammar_str(content: &str) -> Result<GrammarDefinition> {
    let file: GrammarFileV0 = serde_yaml::from_str(content).map_err(from_yaml)?;

    if file.schema_version != 0 {
        return Err(grammar_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            file.schema_version
        )));
    }

    let mut table = RuleTable::new();
    for rule in &file.rules {
        let rule = build_rule(rule, file.alphabet)?;
        table
            .try_add(rule)
            .map_err(|e| ExError::from(e).with_op("grammar_parse"))?;
    }

    let axiom = file.axiom.as_deref().map(|a| file.alphabet.split(a));

    tracing::debug!(
        grammar = %file.name,
        rule_count = table.len(),
        "grammar loaded"
    );

    Ok(GrammarDefinition {
        name: file.name,
        alphabet: file.alphabet,
        axiom,
        table,
    })
}

fn build_rule(rule: &RuleV0, alphabet: Alphabet) -> Result<Rule<String>> {
    let root = single_symbol(&rule.root, alphabet)?;

    let outcome = match (&rule.produces, &rule.choices) {
        (Some(produces), None) => Outcome::Fixed(alphabet.split(produces)),
        (None, Some(choices)) => Outcome::weighted(
            choices
                .iter()
                .map(|c| (alphabet.split(&c.produces), c.weight)),
        ),
        (Some(_), Some(_)) => {
            return Err(invalid_symbol(
                &rule.root,
                "Rule sets both `produces` and `choices`",
            ))
        }
        (None, None) => {
            return Err(invalid_symbol(
                &rule.root,
                "Rule needs either `produces` or `choices`",
            ))
        }
    };

    Ok(Rule::new(root, outcome))
}

fn single_symbol(text: &str, alphabet: Alphabet) -> Result<String> {
    let mut symbols = alphabet.split(text);
    if symbols.len() != 1 {
        return Err(invalid_symbol(
            text,
            &format!("Root must be exactly one symbol, found {}", symbols.len()),
        ));
    }
    Ok(symbols.remove(0))
}
