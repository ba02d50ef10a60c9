use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How input text is split into tree tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// Every Unicode scalar value is a token
    #[default]
    Chars,
    /// Whitespace-separated words
    Words,
    /// Identifiers only (letters, digits, underscores), in source order
    Identifiers,
}

impl TokenMode {
    /// Separator placed between tokens when labels are rendered
    pub fn separator(&self) -> &'static str {
        match self {
            TokenMode::Chars => "",
            TokenMode::Words | TokenMode::Identifiers => " ",
        }
    }
}

/// Split `content` into tokens according to `mode`
///
/// With `fold_case` every token is lowercased first.
pub fn tokenize(content: &str, mode: TokenMode, fold_case: bool) -> Vec<String> {
    let tokens: Vec<String> = match mode {
        TokenMode::Chars => content.chars().map(String::from).collect(),
        TokenMode::Words => content.split_whitespace().map(String::from).collect(),
        TokenMode::Identifiers => extract_identifiers(content),
    };

    if fold_case {
        tokens.into_iter().map(|t| t.to_lowercase()).collect()
    } else {
        tokens
    }
}

/// Identifiers in order of appearance, duplicates kept
fn extract_identifiers(content: &str) -> Vec<String> {
    let mut identifiers = Vec::new();
    let mut current = String::new();

    for ch in content.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if current.is_empty() && ch.is_ascii_digit() {
                // Can't start identifier with digit
                continue;
            }
            current.push(ch);
        } else if !current.is_empty() {
            identifiers.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        identifiers.push(current);
    }

    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars() {
        assert_eq!(tokenize("aé", TokenMode::Chars, false), vec!["a", "é"]);
    }

    #[test]
    fn test_words() {
        let tokens = tokenize("to be\n or  not", TokenMode::Words, false);
        assert_eq!(tokens, vec!["to", "be", "or", "not"]);
    }

    #[test]
    fn test_identifiers_keep_order() {
        let tokens = tokenize("fn getUserById(id: u32) -> id", TokenMode::Identifiers, false);
        assert_eq!(tokens, vec!["fn", "getUserById", "id", "u32", "id"]);
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        let tokens = tokenize("9lives x1", TokenMode::Identifiers, false);
        assert_eq!(tokens, vec!["lives", "x1"]);
    }

    #[test]
    fn test_fold_case() {
        let tokens = tokenize("Hello World", TokenMode::Words, true);
        assert_eq!(tokens, vec!["hello", "world"]);
    }
}
