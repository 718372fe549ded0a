//! Structured error types for the nucleo toolkit.

use thiserror::Error;

/// Unified error type for all nucleo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NucleoError {
    /// A nucleic-acid sequence contained symbols outside its alphabet.
    #[error("invalid {alphabet} symbols {invalid:?}; valid symbols: {valid}")]
    InvalidSequence {
        /// Alphabet name (e.g. "DNA").
        alphabet: &'static str,
        /// Offending symbols, sorted and de-duplicated.
        invalid: Vec<char>,
        /// The full valid alphabet.
        valid: &'static str,
    },

    /// A protein sequence contained symbols outside the selected residue set.
    #[error("invalid amino acid symbols {invalid:?}; valid symbols: {valid}")]
    InvalidProtein {
        /// Offending symbols, sorted and de-duplicated.
        invalid: Vec<char>,
        /// The residue set in force (strict or extended).
        valid: &'static str,
    },

    /// Invalid argument to an operation (bad motif, zero window, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl NucleoError {
    /// The offending symbols for validation errors, empty otherwise.
    pub fn invalid_symbols(&self) -> &[char] {
        match self {
            NucleoError::InvalidSequence { invalid, .. }
            | NucleoError::InvalidProtein { invalid, .. } => invalid,
            NucleoError::InvalidInput(_) => &[],
        }
    }
}

/// Convenience alias used throughout the nucleo crates.
pub type Result<T> = std::result::Result<T, NucleoError>;
