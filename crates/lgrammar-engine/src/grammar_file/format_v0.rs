//! Grammar Format v0 schema
//!
//! Defines the YAML structure for grammar definition files:
//!
//! ```yaml
//! schema_version: 0
//! name: fibonacci
//! alphabet: chars
//! axiom: A
//! rules:
//!   - root: A
//!     produces: AB
//!   - root: B
//!     choices:
//!       - { produces: A, weight: 2 }
//!       - { produces: "", weight: 1 }
//! ```

use serde::{Deserialize, Serialize};

use super::definition::Alphabet;

/// Top-level grammar file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarFileV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Grammar name, used in logs and listings
    pub name: String,

    /// How successor and axiom strings are split into symbols
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Default axiom for rewriting and default seed for chaining
    #[serde(default)]
    pub axiom: Option<String>,

    /// Production rules
    pub rules: Vec<RuleV0>,
}

/// Rule definition; exactly one of `produces` or `choices` must be set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleV0 {
    /// Root symbol (exactly one symbol in the file's alphabet)
    pub root: String,

    /// Fixed successor
    #[serde(default)]
    pub produces: Option<String>,

    /// Weighted successors
    #[serde(default)]
    pub choices: Option<Vec<ChoiceV0>>,
}

/// One weighted successor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceV0 {
    pub produces: String,
    pub weight: f64,
}
