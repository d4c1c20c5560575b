//! Symbol frequency counting and input validation
//!
//! Produces the ordered frequency table the coding pipeline consumes:
//! entries sorted by descending count, ties kept in order of first
//! appearance in the input.

use crate::config::HuffcConfig;
use crate::error::{HuffcError, Result};

/// One distinct symbol of the input together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: char,
    pub count: usize,
}

/// Count symbol occurrences and order them by descending count.
///
/// The sort is stable, so symbols with equal counts keep the order in which
/// they first appeared in the input.
pub fn count_frequencies(text: &str) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for c in text.chars() {
        match entries.iter_mut().find(|e| e.symbol == c) {
            Some(entry) => entry.count += 1,
            None => entries.push(FrequencyEntry { symbol: c, count: 1 }),
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Check an input sequence against the configured policy.
///
/// Checks run in a fixed order: non-empty, allowed characters, length limit,
/// distinct-symbol limit. The first violation is returned.
pub fn validate(text: &str, config: &HuffcConfig) -> Result<()> {
    if text.is_empty() {
        return Err(HuffcError::InvalidInput("input string is empty".to_string()));
    }

    if let Some(c) = text.chars().find(|&c| !config.alphabet.allows(c)) {
        return Err(HuffcError::DisallowedSymbol(c));
    }

    let len = text.chars().count();
    if len > config.max_input_len {
        return Err(HuffcError::InputTooLong { len, max: config.max_input_len });
    }

    let mut seen: Vec<char> = Vec::new();
    for c in text.chars() {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    if seen.len() > config.max_symbols {
        return Err(HuffcError::TooManySymbols { count: seen.len(), max: config.max_symbols });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alphabet;

    #[test]
    fn test_counts_descending() {
        let entries = count_frequencies("aaaabbcd");
        let expected = vec![
            FrequencyEntry { symbol: 'a', count: 4 },
            FrequencyEntry { symbol: 'b', count: 2 },
            FrequencyEntry { symbol: 'c', count: 1 },
            FrequencyEntry { symbol: 'd', count: 1 },
        ];
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        // All counts equal; order must follow first appearance
        let entries = count_frequencies("dcba");
        let symbols: Vec<char> = entries.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!['d', 'c', 'b', 'a']);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let text = "mississippi";
        let entries = count_frequencies(text);
        let total: usize = entries.iter().map(|e| e.count).sum();
        assert_eq!(total, text.len());
    }

    #[test]
    fn test_validate_accepts_conforming_input() {
        let config = HuffcConfig::default();
        assert!(validate("abracadabra", &config).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let config = HuffcConfig::default();
        assert!(matches!(validate("", &config), Err(HuffcError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_disallowed_character() {
        let config = HuffcConfig::default();
        assert!(matches!(
            validate("abcA", &config),
            Err(HuffcError::DisallowedSymbol('A'))
        ));
    }

    #[test]
    fn test_validate_rejects_too_long() {
        let config = HuffcConfig::default();
        let text = "ab".repeat(21); // 42 characters
        assert!(matches!(
            validate(&text, &config),
            Err(HuffcError::InputTooLong { len: 42, max: 40 })
        ));
    }

    #[test]
    fn test_validate_rejects_too_many_symbols() {
        let config = HuffcConfig::default();
        assert!(matches!(
            validate("abcdefghijk", &config),
            Err(HuffcError::TooManySymbols { count: 11, max: 10 })
        ));
    }

    #[test]
    fn test_any_alphabet_allows_digits() {
        let config = HuffcConfig::default().with_alphabet(Alphabet::Any);
        assert!(validate("a1b2", &config).is_ok());
    }
}
