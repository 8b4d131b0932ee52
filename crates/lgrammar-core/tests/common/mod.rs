use lgrammar_core::{Rule, RuleTable};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator so stochastic tests are reproducible
#[allow(dead_code)]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Classic Fibonacci-word L-system: A -> AB, B -> A
#[allow(dead_code)]
pub fn fibonacci_table() -> RuleTable<char> {
    [
        Rule::fixed('A', "AB".chars()),
        Rule::fixed('B', "A".chars()),
    ]
    .into_iter()
    .collect()
}

/// Lindenmayer's algae variant expressed over string tokens
#[allow(dead_code)]
pub fn token_table(pairs: &[(&str, &[&str])]) -> RuleTable<String> {
    pairs
        .iter()
        .map(|(root, successor)| {
            Rule::fixed(root.to_string(), successor.iter().map(|s| s.to_string()))
        })
        .collect()
}

/// Owned token word from string slices
#[allow(dead_code)]
pub fn tokens(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}
