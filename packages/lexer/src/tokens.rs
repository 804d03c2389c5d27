//! Lexer Tokens
//!
//! Token types for tag/attribute markup.

use serde::{Deserialize, Serialize};

use crate::parse_util::Position;

/// Token types emitted by the tokenizer, plus the folded tag types
/// produced by the compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenType {
    Sof,
    Eof,
    Word,
    Space,
    Equal,
    BracketOpen,
    BracketSlash,
    BracketClose,
    AttrName,
    AttrValue,
    // Added by the compressor
    TagOpen,
    TagSelfClose,
    TagClose,
}

/// A classified fragment of input text. `content` is the exact substring
/// the token represents; quote characters are kept as literal content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub content: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, content: String, position: Position) -> Self {
        Token {
            token_type,
            content,
            position,
        }
    }

    /// Synthetic start-of-file sentinel.
    pub fn sof() -> Self {
        Token::new(TokenType::Sof, String::new(), Position::default())
    }

    /// Synthetic end-of-file sentinel.
    pub fn eof() -> Self {
        Token::new(TokenType::Eof, String::new(), Position::default())
    }
}
