pub mod outcome;
pub mod rule;
pub mod symbol;

pub use outcome::{Candidate, Outcome};
pub use rule::Rule;
pub use symbol::{word, word_to_string, Symbol, Word};
