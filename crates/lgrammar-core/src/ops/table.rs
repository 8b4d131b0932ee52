use std::collections::HashMap;

use crate::errors::{GrammarError, Result};
use crate::model::{Outcome, Rule, Symbol};

/// Rule collection keyed by root symbol
///
/// Holds at most one rule per root. `add` replaces an existing rule for the
/// same root; `try_add` rejects it instead. Tables are read through shared
/// borrows during rewriting, so mutation cannot overlap an in-flight rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<S: Symbol> {
    rules: HashMap<S, Rule<S>>,
}

impl<S: Symbol> RuleTable<S> {
    /// Create a new empty RuleTable
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Build a table from `(root, outcome)` pairs
    ///
    /// Later pairs replace earlier ones with the same root.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Outcome<S>)>,
    {
        pairs
            .into_iter()
            .map(|(root, outcome)| Rule::new(root, outcome))
            .collect()
    }

    /// Find the rule for `symbol`
    ///
    /// Absence is the common case: symbols without a rule are constants of
    /// the grammar.
    pub fn find(&self, symbol: &S) -> Option<&Rule<S>> {
        self.rules.get(symbol)
    }

    /// Insert a rule, replacing any rule with the same root
    ///
    /// # Returns
    /// The displaced rule, if one existed
    pub fn add(&mut self, rule: Rule<S>) -> Option<Rule<S>> {
        let replaced = self.rules.insert(rule.root.clone(), rule);
        if let Some(old) = &replaced {
            tracing::debug!(root = ?old.root, "rule replaced");
        }
        replaced
    }

    /// Insert a rule only if its root has no rule yet
    ///
    /// # Errors
    /// * `DuplicateRoot` - If the table already holds a rule for the root
    pub fn try_add(&mut self, rule: Rule<S>) -> Result<()> {
        if self.rules.contains_key(&rule.root) {
            return Err(GrammarError::duplicate_root(&rule.root));
        }
        self.rules.insert(rule.root.clone(), rule);
        Ok(())
    }

    /// Remove the rule for `root`
    ///
    /// Removing an absent root is a no-op.
    pub fn remove(&mut self, root: &S) -> Option<Rule<S>> {
        self.rules.remove(root)
    }

    /// Check whether `root` has a rule
    pub fn contains(&self, root: &S) -> bool {
        self.rules.contains_key(root)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules (unordered)
    pub fn rules(&self) -> impl Iterator<Item = &Rule<S>> {
        self.rules.values()
    }

    /// Iterate over all root symbols (unordered)
    pub fn roots(&self) -> impl Iterator<Item = &S> {
        self.rules.keys()
    }
}

impl<S: Symbol> Default for RuleTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<Rule<S>> for RuleTable<S> {
    fn from_iter<I: IntoIterator<Item = Rule<S>>>(iter: I) -> Self {
        let mut table = Self::new();
        for rule in iter {
            table.add(rule);
        }
        table
    }
}

impl<S: Symbol> Extend<Rule<S>> for RuleTable<S> {
    fn extend<I: IntoIterator<Item = Rule<S>>>(&mut self, iter: I) {
        for rule in iter {
            self.add(rule);
        }
    }
}
