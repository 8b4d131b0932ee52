use std::path::PathBuf;

use lgrammar_engine::{parse_grammar_file, GrammarDefinition};

/// Path to a grammar file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture grammar that is known to be valid
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> GrammarDefinition {
    parse_grammar_file(&fixture_path(name)).unwrap()
}
