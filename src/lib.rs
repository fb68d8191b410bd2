//! Finds combinations of fixed-length words whose letters are pairwise
//! disjoint and together cover the alphabet with at most one letter missing.
//!
//! The pipeline: [`WordIndex::build`] admits dictionary words with all-distinct
//! letters and groups them into anagram classes by [`Signature`]; [`Ranking`]
//! orders the alphabet rarest-letter-first and assigns each candidate to the
//! step of its rarest letter; [`search`] grows letter-disjoint covers one
//! ranked letter at a time, pruning any cover that falls more than one letter
//! behind; [`combinations`] expands a surviving cover back into every literal
//! word combination its anagram classes allow.

pub mod expand;
pub mod index;
pub mod ranking;
pub mod search;
pub mod signature;

pub use expand::{combination_count, combinations};
pub use index::WordIndex;
pub use ranking::Ranking;
pub use search::{search, search_with, Cover, StepReport};
pub use signature::Signature;
