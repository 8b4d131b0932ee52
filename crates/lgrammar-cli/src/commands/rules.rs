//! Rules command
//!
//! Usage: lgrammar rules <FILE>

use clap::Args;
use std::path::PathBuf;

use lgrammar_engine::{parse_grammar_file, rule_listing};

#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Path to grammar YAML file
    pub file: PathBuf,
}

/// Execute rules command
pub fn execute(args: RulesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let grammar = parse_grammar_file(&args.file)?;

    println!("# {} ({} rules)", grammar.name, grammar.table.len());
    if let Some(axiom) = &grammar.axiom {
        println!("axiom: {}", grammar.render(axiom));
    }
    for line in rule_listing(&grammar) {
        println!("{}", line);
    }

    Ok(())
}
