//! Set similarity between word lists.
//!
//! - [`diacritics`] - optional Arabic diacritic stripping before comparison
//! - [`jaccard`] - intersection, union and Jaccard similarity

pub mod diacritics;
pub mod jaccard;

pub use diacritics::DiacriticFilter;
pub use jaccard::{JaccardResult, JaccardSelection, jaccard};
