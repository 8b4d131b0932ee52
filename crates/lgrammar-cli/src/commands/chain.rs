//! Chain command
//!
//! Usage: lgrammar chain <FILE> [--from <SYMBOL>] [--steps <N>] [--seed <U64>]

use clap::Args;
use std::path::PathBuf;

use lgrammar_engine::{chain_command, parse_grammar_file};

#[derive(Debug, Args)]
pub struct ChainArgs {
    /// Path to grammar YAML file
    pub file: PathBuf,

    /// Starting symbol (default: the grammar's axiom)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Maximum number of transitions
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    pub steps: i64,

    /// Seed for weighted rules (default: OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Emit JSON logs on stderr
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute chain command
pub fn execute(args: ChainArgs) -> Result<(), Box<dyn std::error::Error>> {
    super::init_logging(args.json_logs);

    let grammar = parse_grammar_file(&args.file)?;
    let word = chain_command(&grammar, args.from.as_deref(), args.steps, args.seed)?;
    println!("{}", word);

    Ok(())
}
