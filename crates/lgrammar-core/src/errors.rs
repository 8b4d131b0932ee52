use thiserror::Error;

/// Result type alias using GrammarError
pub type Result<T> = std::result::Result<T, GrammarError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Resolution
    InvalidRule,
    NoRuleForSeed,

    // Table construction / grammar files
    DuplicateRoot,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidRule => "ERR_INVALID_RULE",
            ExErrorKind::NoRuleForSeed => "ERR_NO_RULE_FOR_SEED",
            ExErrorKind::DuplicateRoot => "ERR_DUPLICATE_ROOT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the symbol and
/// operation context needed to debug a grammar.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    symbol: Option<String>,
    generation: Option<u64>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            symbol: None,
            generation: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending symbol (already rendered for display)
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Add the generation (1-based) in which the error occurred
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the symbol context, if any
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Get the generation context, if any
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(symbol) = &self.symbol {
            write!(f, " (symbol: {})", symbol)?;
        }
        if let Some(generation) = self.generation {
            write!(f, " (generation: {})", generation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for grammar operations
///
/// Symbols are stored in their `Debug` rendering so the error type stays
/// independent of the alphabet a table is instantiated with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// A weighted outcome has no usable candidates
    #[error("Invalid rule for root {root}: {reason}")]
    InvalidRule { root: String, reason: String },

    /// A chain was started from a symbol that has no transition rule
    #[error("No rule for chain seed {seed}")]
    NoRuleForSeed { seed: String },

    /// A second rule for an already-defined root was rejected
    #[error("Duplicate rule for root {root}")]
    DuplicateRoot { root: String },
}

impl GrammarError {
    /// Build an `InvalidRule` error for the given root symbol
    pub fn invalid_rule(root: &impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        GrammarError::InvalidRule {
            root: format!("{:?}", root),
            reason: reason.into(),
        }
    }

    /// Build a `NoRuleForSeed` error for the given seed symbol
    pub fn no_rule_for_seed(seed: &impl std::fmt::Debug) -> Self {
        GrammarError::NoRuleForSeed {
            seed: format!("{:?}", seed),
        }
    }

    /// Build a `DuplicateRoot` error for the given root symbol
    pub fn duplicate_root(root: &impl std::fmt::Debug) -> Self {
        GrammarError::DuplicateRoot {
            root: format!("{:?}", root),
        }
    }
}

/// Conversion from GrammarError to ExError
impl From<GrammarError> for ExError {
    fn from(err: GrammarError) -> Self {
        match err {
            GrammarError::InvalidRule { root, reason } => ExError::new(ExErrorKind::InvalidRule)
                .with_op("resolve")
                .with_symbol(root)
                .with_message(reason),

            GrammarError::NoRuleForSeed { seed } => ExError::new(ExErrorKind::NoRuleForSeed)
                .with_op("chain")
                .with_symbol(seed)
                .with_message("Chain seed has no transition rule"),

            GrammarError::DuplicateRoot { root } => ExError::new(ExErrorKind::DuplicateRoot)
                .with_symbol(root)
                .with_message("Root symbol already has a rule"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidRule, "ERR_INVALID_RULE"),
            (ExErrorKind::NoRuleForSeed, "ERR_NO_RULE_FOR_SEED"),
            (ExErrorKind::DuplicateRoot, "ERR_DUPLICATE_ROOT"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_invalid_rule_renders_root_with_debug() {
        let err = GrammarError::invalid_rule(&'A', "no candidates");
        assert_eq!(
            err,
            GrammarError::InvalidRule {
                root: "'A'".to_string(),
                reason: "no candidates".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Invalid rule for root 'A': no candidates");
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("grammar_parse")
            .with_symbol("\"F\"")
            .with_message("root must be a single symbol");
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_INPUT] in operation 'grammar_parse': root must be a single symbol (symbol: \"F\")"
        );
    }

    #[test]
    fn test_ex_error_context_none_by_default() {
        let err = ExError::new(ExErrorKind::Io);
        assert!(err.op().is_none());
        assert!(err.symbol().is_none());
        assert!(err.message().is_empty());
    }

    #[test]
    fn test_generation_context_is_displayed() {
        let cause = GrammarError::invalid_rule(&'A', "all weights are zero");
        let err = ExError::from(cause).with_generation(3);

        assert_eq!(err.generation(), Some(3));
        assert!(err.to_string().ends_with("(symbol: 'A') (generation: 3)"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error;

        let cause = ExError::new(ExErrorKind::DuplicateRoot).with_symbol("\"A\"");
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("grammar_read")
            .with_source(cause);

        let source = err.source().unwrap();
        assert!(source.to_string().starts_with("[ERR_DUPLICATE_ROOT]"));
        assert!(ExError::new(ExErrorKind::Io).source().is_none());
    }
}
