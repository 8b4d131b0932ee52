//! Chain engine tests
//!
//! ## Scenarios Covered
//!
//! 1. Deterministic alternation produces the expected chain
//! 2. Dead ends stop the chain without error
//! 3. A seed without a rule fails immediately
//! 4. Weighted transitions follow the previously produced symbol
//! 5. Resolution failures mid-chain return no partial output

mod common;

use common::{seeded, tokens};
use lgrammar_core::{chain, chain_str, GrammarError, Rule, RuleTable};

fn alternating() -> RuleTable<char> {
    [Rule::fixed('A', ['B']), Rule::fixed('B', ['A'])]
        .into_iter()
        .collect()
}

#[test]
fn test_chain_alternates() {
    let mut rng = seeded(0);
    assert_eq!(chain_str(&alternating(), 'A', 4, &mut rng).unwrap(), "BABA");
}

#[test]
fn test_chain_length_matches_steps() {
    let mut rng = seeded(0);
    for steps in 0..8 {
        let out = chain_str(&alternating(), 'B', steps, &mut rng).unwrap();
        assert_eq!(out.len(), steps as usize);
    }
}

#[test]
fn test_chain_dead_end_returns_partial_chain() {
    let table: RuleTable<char> = [Rule::fixed('A', ['B'])].into_iter().collect();
    let mut rng = seeded(0);
    assert_eq!(chain_str(&table, 'A', 5, &mut rng).unwrap(), "B");
}

#[test]
fn test_chain_seed_without_rule_fails() {
    let mut rng = seeded(0);
    let err = chain_str(&alternating(), 'C', 4, &mut rng).unwrap_err();
    assert!(matches!(err, GrammarError::NoRuleForSeed { .. }));
    assert_eq!(err.to_string(), "No rule for chain seed 'C'");
}

#[test]
fn test_weighted_chain_only_visits_reachable_states() {
    // sunny -> sunny (0.8) | rainy (0.2); rainy -> rainy (0.4) | sunny (0.6)
    let table: RuleTable<String> = [
        Rule::weighted(
            "sunny".to_string(),
            [(tokens(&["sunny"]), 0.8), (tokens(&["rainy"]), 0.2)],
        ),
        Rule::weighted(
            "rainy".to_string(),
            [(tokens(&["rainy"]), 0.4), (tokens(&["sunny"]), 0.6)],
        ),
    ]
    .into_iter()
    .collect();

    let mut rng = seeded(7);
    let out = chain(&table, &"sunny".to_string(), 200, &mut rng).unwrap();

    assert_eq!(out.len(), 200);
    assert!(out.iter().all(|s| s == "sunny" || s == "rainy"));
    assert!(out.iter().any(|s| s == "sunny"));
    assert!(out.iter().any(|s| s == "rainy"));
}

#[test]
fn test_weighted_chain_reproducible_with_seed() {
    let table: RuleTable<char> = [
        Rule::weighted('A', [(['A'], 1.0), (['B'], 1.0)]),
        Rule::weighted('B', [(['A'], 1.0), (['B'], 1.0)]),
    ]
    .into_iter()
    .collect();

    let first = chain_str(&table, 'A', 50, &mut seeded(3)).unwrap();
    let second = chain_str(&table, 'A', 50, &mut seeded(3)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chain_invalid_rule_mid_chain_fails() {
    let table: RuleTable<char> = [
        Rule::fixed('A', ['B']),
        Rule::weighted('B', Vec::<(Vec<char>, f64)>::new()),
    ]
    .into_iter()
    .collect();

    let mut rng = seeded(0);
    let err = chain_str(&table, 'A', 3, &mut rng).unwrap_err();
    assert!(matches!(err, GrammarError::InvalidRule { .. }));
}
