//! Shared helpers used by the taxonomy, extraction and interaction modules
//!
//! - Text: name folding, ordered de-duplication, char-safe truncation and
//!   context windows around name occurrences

pub mod text;

// Re-export commonly used helpers
pub use text::{
    context_windows, extend_unique, fold_name, push_unique, truncate_at_word_boundary,
    truncate_chars,
};
