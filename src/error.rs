// src/error.rs

//! Error types for the edge catalog and EELS notation handling.
//!
//! Unknown elements, shells and energies are not errors: catalog lookups
//! return `Option` for those. Only malformed input and a broken dataset
//! end up here.

use thiserror::Error;

/// The bundled (or configured) edge dataset could not be loaded.
///
/// Stored once by the process-wide catalog and handed out to every caller,
/// hence `Clone`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogLoadError {
    /// The dataset file could not be read
    #[error("cannot read edge data {path}: {message}")]
    Io { path: String, message: String },

    /// The dataset is not valid JSON or does not match the record schema
    #[error("cannot parse edge data {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Atomic numbers start at 1
    #[error("invalid atomic number {0} in edge data")]
    InvalidAtomicNumber(i64),

    /// Two records share one atomic number
    #[error("atomic number {0} appears more than once in edge data")]
    DuplicateAtomicNumber(u32),

    /// Two records share one element symbol
    #[error("element symbol {0} appears more than once in edge data")]
    DuplicateSymbol(String),

    /// Binding energies are non-negative numbers
    #[error("edge {notation} of Z={z} has invalid energy {energy}")]
    InvalidEnergy { z: u32, notation: String, energy: f64 },

    /// An edge key is not EELS notation
    #[error("edge key {notation:?} of Z={z} is not EELS notation")]
    BadEdgeKey { z: u32, notation: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EelsError {
    #[error(transparent)]
    CatalogLoad(#[from] CatalogLoadError),

    #[error("invalid EELS notation {notation:?}: {reason}")]
    InvalidNotation {
        notation: String,
        reason: &'static str,
    },

    #[error("subshell index {subshell_index} has no azimuthal quantum number")]
    InvalidSubshell { subshell_index: u32 },
}

pub type Result<T> = std::result::Result<T, EelsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = EelsError::InvalidNotation {
            notation: "Q0".into(),
            reason: "subshell index must be a positive integer",
        };
        assert!(err.to_string().contains("\"Q0\""));

        let err = EelsError::from(CatalogLoadError::DuplicateAtomicNumber(26));
        assert_eq!(
            err.to_string(),
            "atomic number 26 appears more than once in edge data"
        );
    }
}
