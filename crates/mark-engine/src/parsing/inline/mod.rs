//! # Inline Markup
//!
//! Resolves `_emphasis_`, `__strong__` and `` `code` `` marks inside one
//! paragraph and splices in HTML tags.
//!
//! ## Pipeline
//!
//! ```text
//! paragraph text → tokenize → Tokenized → match_marks → [MatchedPair] → render → HTML
//! ```
//!
//! ## Modules
//!
//! - **`kinds`**: `MarkKind` plus the delimiter constants each kind owns
//! - **`cursor`**: `Cursor` for byte scanning with character-aware lookaround
//! - **`types`**: `MarkToken`, `MarkRole`, `Tokenized`, `MatchedPair`
//! - **`tokenizer`**: `tokenize()` classifies candidate marks and records escapes
//! - **`matcher`**: `match_marks()` pairs tokens (code spans first, then a bounded stack)
//! - **`render`**: `render()` splices tags into the original text
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `_a_` `` renders as `<code>_a_</code>`,
//! never as emphasis inside code.

pub mod cursor;
pub mod kinds;
pub mod matcher;
pub mod render;
pub mod tokenizer;
pub mod types;

pub use kinds::MarkKind;
pub use matcher::match_marks;
pub use render::render;
pub use tokenizer::tokenize;
pub use types::{MarkRole, MarkToken, MatchedPair, Tokenized};
