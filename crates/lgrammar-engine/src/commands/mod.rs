//! Command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for grammar commands:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The core kernel uses only `tracing::debug!()` for internal details.

pub mod chain;
pub mod listing;
pub mod rewrite;

pub use chain::chain_command;
pub use listing::rule_listing;
pub use rewrite::{rewrite_command, rewrite_trace_command};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the random source for one command run
///
/// A seed makes the run reproducible; without one the generator is seeded
/// from OS entropy.
pub fn command_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
