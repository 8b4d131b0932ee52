//! Boundary events for grammar commands
//!
//! `rewrite`, `rewrite_trace` and `chain` each emit one `start` event and then
//! exactly one of `end` or `end_error`. The engine command functions own these
//! events. Core rewriting and chaining only emit per-generation `debug!` detail.

/// Emit the `start` event of a grammar command
///
/// Extra fields usually name the grammar and the requested generation or step
/// count.
///
/// ```
/// # use lgrammar_core::log_op_start;
/// log_op_start!("chain");
/// log_op_start!("rewrite", grammar = "fibonacci", generations = 5);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event once a word has been produced
///
/// ```
/// # use lgrammar_core::log_op_end;
/// log_op_end!("rewrite", duration_ms = 42, word_len = 13);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event for a failed rewrite or chain
///
/// The error is converted into `ExError` to record `err_kind` and `err_code`.
/// Pass a `GrammarError` straight from the core or an `ExError` that already
/// carries the failing generation.
///
/// ```
/// # use lgrammar_core::{log_op_error, errors::GrammarError};
/// let err = GrammarError::no_rule_for_seed(&'Q');
/// log_op_error!("chain", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
