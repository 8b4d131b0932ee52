//! LGrammar CLI
//!
//! Command-line interface for rewriting and chaining grammar files

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lgrammar")]
#[command(about = "LGrammar - L-system rewriting and Markov chaining", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite an axiom for a number of generations
    Rewrite(commands::rewrite::RewriteArgs),
    /// Chain symbol transitions from a starting symbol
    Chain(commands::chain::ChainArgs),
    /// List the rules of a grammar file
    Rules(commands::rules::RulesArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rewrite(args) => commands::rewrite::execute(args),
        Commands::Chain(args) => commands::chain::execute(args),
        Commands::Rules(args) => commands::rules::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
