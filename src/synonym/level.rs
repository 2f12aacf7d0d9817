//! Level-dependent scoring weights and the level-checked outcome type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MutaradifError, Result};

/// Levels backed by a precomputed relation graph in the stock provider.
pub const SUPPORTED_LEVELS: [u32; 2] = [2, 3];

/// Message reported when no relation graph exists for a level.
pub const INVALID_LEVEL_MESSAGE: &str = "Please choose the correct level";

/// Weight pair balancing chain frequency (`theta1`) against member coverage (`theta2`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub theta1: f64,
    pub theta2: f64,
}

impl Weights {
    /// Weights for a level.
    ///
    /// Levels 2 and 3 favour member coverage, level 4 weighs both factors
    /// equally. Every other level gets `(0, 0)`, which collapses all scores to
    /// zero.
    pub fn for_level(level: u32) -> Self {
        match level {
            2 | 3 => Weights {
                theta1: 0.4,
                theta2: 0.6,
            },
            4 => Weights {
                theta1: 0.5,
                theta2: 0.5,
            },
            _ => Weights {
                theta1: 0.0,
                theta2: 0.0,
            },
        }
    }
}

/// Result of an operation that first has to resolve a relation graph for a level.
///
/// An unsupported level is an expected outcome callers branch on, not a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelOutcome<T> {
    Ok(T),
    InvalidLevel(u32),
}

impl<T> LevelOutcome<T> {
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, LevelOutcome::InvalidLevel(_))
    }

    /// Returns the payload, discarding the invalid level.
    pub fn ok(self) -> Option<T> {
        match self {
            LevelOutcome::Ok(value) => Some(value),
            LevelOutcome::InvalidLevel(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LevelOutcome<U> {
        match self {
            LevelOutcome::Ok(value) => LevelOutcome::Ok(f(value)),
            LevelOutcome::InvalidLevel(level) => LevelOutcome::InvalidLevel(level),
        }
    }

    /// Converts into a [`Result`] for callers that propagate with `?`.
    pub fn into_result(self) -> Result<T> {
        match self {
            LevelOutcome::Ok(value) => Ok(value),
            LevelOutcome::InvalidLevel(level) => Err(MutaradifError::InvalidLevel(level)),
        }
    }
}

impl<T> fmt::Display for LevelOutcome<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelOutcome::Ok(value) => write!(f, "{value:?}"),
            LevelOutcome::InvalidLevel(_) => f.write_str(INVALID_LEVEL_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_for_level() {
        assert_eq!(Weights::for_level(2), Weights::for_level(3));
        assert_eq!(Weights::for_level(2).theta1, 0.4);
        assert_eq!(Weights::for_level(3).theta2, 0.6);

        let four = Weights::for_level(4);
        assert_eq!((four.theta1, four.theta2), (0.5, 0.5));

        for level in [0, 1, 5, 42] {
            let w = Weights::for_level(level);
            assert_eq!((w.theta1, w.theta2), (0.0, 0.0));
        }
    }

    #[test]
    fn test_outcome_conversions() {
        let ok: LevelOutcome<u8> = LevelOutcome::Ok(7);
        assert!(!ok.is_invalid_level());
        assert_eq!(ok.clone().map(|v| v * 2), LevelOutcome::Ok(14));
        assert_eq!(ok.ok(), Some(7));

        let invalid: LevelOutcome<u8> = LevelOutcome::InvalidLevel(5);
        assert!(invalid.is_invalid_level());
        assert_eq!(invalid.to_string(), INVALID_LEVEL_MESSAGE);
        assert!(matches!(
            invalid.into_result(),
            Err(MutaradifError::InvalidLevel(5))
        ));
    }
}
