use lgrammar_core::{RuleTable, Word};
use serde::{Deserialize, Serialize};

/// How text in a grammar file maps to symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Every character is a symbol; words render without separators
    #[default]
    Chars,
    /// Whitespace-separated tokens are symbols; words render space-joined
    Tokens,
}

impl Alphabet {
    /// Split text into symbols
    pub fn split(&self, text: &str) -> Word<String> {
        match self {
            Alphabet::Chars => text.chars().map(String::from).collect(),
            Alphabet::Tokens => text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Render symbols back into text
    pub fn join(&self, word: &[String]) -> String {
        match self {
            Alphabet::Chars => word.concat(),
            Alphabet::Tokens => word.join(" "),
        }
    }
}

/// A validated grammar ready for rewriting or chaining
#[derive(Debug, Clone)]
pub struct GrammarDefinition {
    pub name: String,
    pub alphabet: Alphabet,
    pub axiom: Option<Word<String>>,
    pub table: RuleTable<String>,
}

impl GrammarDefinition {
    /// Split text into symbols using this grammar's alphabet
    pub fn parse_word(&self, text: &str) -> Word<String> {
        self.alphabet.split(text)
    }

    /// Render a word using this grammar's alphabet
    pub fn render(&self, word: &[String]) -> String {
        self.alphabet.join(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_split_and_join() {
        let word = Alphabet::Chars.split("F+F");
        assert_eq!(word, vec!["F", "+", "F"]);
        assert_eq!(Alphabet::Chars.join(&word), "F+F");
    }

    #[test]
    fn test_tokens_split_and_join() {
        let word = Alphabet::Tokens.split("  stem   leaf\tbud ");
        assert_eq!(word, vec!["stem", "leaf", "bud"]);
        assert_eq!(Alphabet::Tokens.join(&word), "stem leaf bud");
    }

    #[test]
    fn test_default_alphabet_is_chars() {
        assert_eq!(Alphabet::default(), Alphabet::Chars);
    }
}
