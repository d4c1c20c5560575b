use crate::error::HuffcError;
use std::str::FromStr;

/// Character set an input sequence is allowed to draw its symbols from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    LowercaseAscii,
    Any,
}

impl Alphabet {
    pub fn allows(&self, c: char) -> bool {
        match self {
            Alphabet::LowercaseAscii => c.is_ascii_lowercase(),
            Alphabet::Any => true,
        }
    }
}

/// Input policy enforced before code construction.
#[derive(Debug, Clone)]
pub struct HuffcConfig {
    pub alphabet: Alphabet,
    pub max_input_len: usize,
    pub max_symbols: usize,
}

impl Default for HuffcConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::LowercaseAscii,
            max_input_len: 40,
            max_symbols: 10,
        }
    }
}

impl HuffcConfig {
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_limits(mut self, max_input_len: usize, max_symbols: usize) -> Self {
        self.max_input_len = max_input_len;
        self.max_symbols = max_symbols;
        self
    }
}

impl FromStr for Alphabet {
    type Err = HuffcError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lowercase" => Ok(Alphabet::LowercaseAscii),
            "any" => Ok(Alphabet::Any),
            _ => Err(HuffcError::ConfigError(format!("Invalid alphabet: {}", s))),
        }
    }
}
