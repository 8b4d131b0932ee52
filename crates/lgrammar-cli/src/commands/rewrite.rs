//! Rewrite command
//!
//! Usage: lgrammar rewrite <FILE> [--axiom <WORD>] [--generations <N>] [--seed <U64>] [--trace]

use clap::Args;
use std::path::PathBuf;

use lgrammar_engine::{parse_grammar_file, rewrite_command, rewrite_trace_command};

#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Path to grammar YAML file
    pub file: PathBuf,

    /// Starting word (default: the grammar's axiom)
    #[arg(short, long)]
    pub axiom: Option<String>,

    /// Number of generations to apply
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub generations: i64,

    /// Seed for weighted rules (default: OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print every generation, starting with the axiom
    #[arg(long)]
    pub trace: bool,

    /// Emit JSON logs on stderr
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute rewrite command
pub fn execute(args: RewriteArgs) -> Result<(), Box<dyn std::error::Error>> {
    super::init_logging(args.json_logs);

    let grammar = parse_grammar_file(&args.file)?;
    let axiom = args.axiom.as_deref();

    if args.trace {
        let lines = rewrite_trace_command(&grammar, axiom, args.generations, args.seed)?;
        for (generation, word) in lines.iter().enumerate() {
            println!("{}: {}", generation, word);
        }
    } else {
        let word = rewrite_command(&grammar, axiom, args.generations, args.seed)?;
        println!("{}", word);
    }

    Ok(())
}
