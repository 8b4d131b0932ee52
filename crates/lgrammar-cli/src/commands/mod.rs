pub mod chain;
pub mod rewrite;
pub mod rules;

use lgrammar_core::logging_facility::{init, Profile};

/// Install the log subscriber for a generating command
fn init_logging(json_logs: bool) {
    init(if json_logs {
        Profile::Production
    } else {
        Profile::Development
    });
}
