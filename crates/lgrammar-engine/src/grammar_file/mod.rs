//! Grammar definition files
//!
//! Grammars are described in YAML (schema version 0), parsed with serde and
//! validated into a [`GrammarDefinition`] holding a ready-to-use rule table.

pub mod definition;
pub mod format_v0;
pub mod parser;

pub use definition::{Alphabet, GrammarDefinition};
pub use parser::{parse_grammar_file, parse_grammar_str};
