use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffcError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Division by zero: {0}")]
	DivisionByZero(String),

	#[error("Input contains disallowed character '{0}'")]
	DisallowedSymbol(char),

	#[error("Input is {len} characters long, maximum is {max}")]
	InputTooLong { len: usize, max: usize },

	#[error("Input uses {count} distinct symbols, maximum is {max}")]
	TooManySymbols { count: usize, max: usize },

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, HuffcError>;
