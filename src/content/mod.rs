//! Secret content: categories of words (word variant) or prompts (drawing
//! variant).
//!
//! Content is static input supplied by the host. The engine only draws
//! from it; it never edits it.

mod table;

pub use table::{Category, ContentTable, SecretEntry};
