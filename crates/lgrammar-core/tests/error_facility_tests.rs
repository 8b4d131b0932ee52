use lgrammar_core::errors::{ExError, ExErrorKind, GrammarError};

#[test]
fn test_invalid_rule_verifiable_by_kind() {
    let err = GrammarError::invalid_rule(&'A', "weighted outcome has no candidates");

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidRule);
    assert_eq!(ex_err.code(), "ERR_INVALID_RULE");
    assert_eq!(ex_err.symbol(), Some("'A'"));
    assert_eq!(ex_err.op(), Some("resolve"));
    assert_eq!(ex_err.message(), "weighted outcome has no candidates");
}

#[test]
fn test_no_rule_for_seed_distinct_from_invalid_rule() {
    let err = GrammarError::no_rule_for_seed(&"seed".to_string());

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NoRuleForSeed);
    assert_eq!(ex_err.code(), "ERR_NO_RULE_FOR_SEED");
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidRule);
    assert_eq!(ex_err.symbol(), Some("\"seed\""));
}

#[test]
fn test_duplicate_root_structured_fields() {
    let ex_err: ExError = GrammarError::duplicate_root(&'F').into();

    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateRoot);
    assert_eq!(ex_err.code(), "ERR_DUPLICATE_ROOT");
    assert!(ex_err.to_string().starts_with("[ERR_DUPLICATE_ROOT]"));
}

#[test]
fn test_error_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidRule,
        ExErrorKind::NoRuleForSeed,
        ExErrorKind::DuplicateRoot,
        ExErrorKind::InvalidInput,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
    ];

    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}
