use lgrammar_core::Outcome;

use crate::grammar_file::GrammarDefinition;

/// Render the grammar's rules as one line per alternative, sorted by root
///
/// Fixed rules render as `A -> AB`; weighted alternatives carry their
/// selection probability, e.g. `B -> A (p=0.667)`. Alternatives of a rule
/// whose weights cannot be resolved are shown with `p=invalid`.
pub fn rule_listing(grammar: &GrammarDefinition) -> Vec<String> {
    let mut rules: Vec<_> = grammar.table.rules().collect();
    rules.sort_by(|a, b| a.root.cmp(&b.root));

    let mut lines = Vec::new();
    for rule in rules {
        match &rule.outcome {
            Outcome::Fixed(successor) => {
                lines.push(format!(
                    "{} -> {}",
                    rule.root,
                    render_successor(grammar, successor)
                ));
            }
            Outcome::Weighted(candidates) => {
                for (index, candidate) in candidates.iter().enumerate() {
                    let probability = rule
                        .outcome
                        .probability(index)
                        .map(|p| format!("{:.3}", p))
                        .unwrap_or_else(|| "invalid".to_string());
                    lines.push(format!(
                        "{} -> {} (p={})",
                        rule.root,
                        render_successor(grammar, &candidate.successor),
                        probability
                    ));
                }
            }
        }
    }
    lines
}

fn render_successor(grammar: &GrammarDefinition, successor: &[String]) -> String {
    if successor.is_empty() {
        "ε".to_string()
    } else {
        grammar.render(successor)
    }
}
