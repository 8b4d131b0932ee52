use std::fmt::Debug;
use std::hash::Hash;

/// Atomic unit of a grammar's alphabet
///
/// Anything usable as an equality key qualifies: `char` for classic
/// single-letter L-systems, `String` tokens for multi-character symbols, or a
/// caller-defined enum. `Debug` is required so errors and logs can name the
/// offending symbol.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug {}

/// An ordered sequence of symbols
///
/// Inputs, outputs and rule successors are all words, which is what lets one
/// symbol expand into several (`A -> AB`) or into none (erasure).
pub type Word<S> = Vec<S>;

/// Build a `char` word from a string slice
pub fn word(text: &str) -> Word<char> {
    text.chars().collect()
}

/// Render a `char` word back into a `String`
pub fn word_to_string(word: &[char]) -> String {
    word.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_round_trip() {
        let w = word("F+F-F");
        assert_eq!(w, vec!['F', '+', 'F', '-', 'F']);
        assert_eq!(word_to_string(&w), "F+F-F");
    }

    #[test]
    fn test_empty_word() {
        assert!(word("").is_empty());
        assert_eq!(word_to_string(&[]), "");
    }
}
