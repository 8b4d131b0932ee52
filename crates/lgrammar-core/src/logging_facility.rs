//! Structured logging for grammar commands
//!
//! - `init(profile)` installs the stderr subscriber once, so generated words on
//!   stdout never mix with log lines
//! - `log_op_start!`, `log_op_end!` and `log_op_error!` record the boundaries of
//!   `rewrite`, `rewrite_trace` and `chain`
//! - `test_capture` records those boundaries in memory for assertions
//!
//! ```rust
//! use lgrammar_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
