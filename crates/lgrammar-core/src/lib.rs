//! LGrammar Core - symbol-rewriting grammar engine
//!
//! This crate provides the in-memory kernel for L-system and Markov-chain
//! string generation, including:
//! - Rule and Outcome models (fixed and weighted successors)
//! - RuleTable lookup keyed by root symbol
//! - Weighted selection over an injected random source
//! - Whole-word rewriting across generations
//! - Single-symbol Markov chaining
//! - Error and logging facilities shared by the outer crates
//!
//! # Example
//!
//! ```
//! use lgrammar_core::{rewrite_str, Rule, RuleTable};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let table: RuleTable<char> = [Rule::fixed('A', "AB".chars()), Rule::fixed('B', "A".chars())]
//!     .into_iter()
//!     .collect();
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(rewrite_str(&table, "A", 3, &mut rng).unwrap(), "ABAAB");
//! ```

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use lgrammar_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GrammarError, Result};
pub use model::{word, word_to_string, Candidate, Outcome, Rule, Symbol, Word};
pub use ops::{
    chain, chain_str, generations, rewrite, rewrite_once, rewrite_str, Generations, RuleTable,
};
