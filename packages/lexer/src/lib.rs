#![deny(clippy::all)]

//! ML (Markup Language) Lexer
//!
//! Tolerant tokenizer for tag/attribute markup. Converts source text into a
//! flat token stream, folds raw tokens into tag tokens, and walks the result
//! as alternating tag/text chunks. It never rejects input: malformed markup
//! degrades into plain word content instead of producing errors.

pub mod chars;
pub mod compressor;
pub mod lexer;
pub mod parse_util;
pub mod tokens;
pub mod walker;

// Re-exports
pub use compressor::{compress, TokenWindow};
pub use lexer::tokenize;
pub use parse_util::{position_at, try_position_at, Position, PositionError};
pub use tokens::{Token, TokenType};
pub use walker::{walk_chunks, ChunkKind, TokenChunk, TokenWalker};
