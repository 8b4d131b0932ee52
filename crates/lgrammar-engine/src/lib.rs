//! LGrammar Engine - grammar files and command handlers
//!
//! This crate sits between the core kernel and the CLI:
//! - Loads and validates YAML grammar definition files
//! - Seeds the random source for reproducible runs
//! - Owns lifecycle logging for rewrite and chain commands

pub mod commands;
pub mod errors;
pub mod grammar_file;

pub use commands::{chain_command, rewrite_command, rewrite_trace_command, rule_listing};
pub use grammar_file::{parse_grammar_file, parse_grammar_str, Alphabet, GrammarDefinition};
