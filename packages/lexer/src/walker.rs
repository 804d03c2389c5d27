//! Token Walker
//!
//! Cursor over a read-only token sequence, and the traversal that splits a
//! token stream into alternating tag and text chunks.

use serde::{Deserialize, Serialize};

use crate::tokens::{Token, TokenType};

/// Cursor-based walker. Owns nothing but its index; the token sequence is
/// borrowed and never mutated.
pub struct TokenWalker<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> TokenWalker<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenWalker { tokens, cursor: 0 }
    }

    /// Rewind the cursor to the start.
    pub fn reset_cursor(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Peek at the cursor position without advancing.
    pub fn next_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Consume and return tokens starting at the cursor until one matches
    /// the predicate (that token included), or the sequence is exhausted.
    pub fn walk_until<F>(&mut self, predicate: F) -> Vec<Token>
    where
        F: Fn(&Token) -> bool,
    {
        let mut footprint = Vec::new();
        while let Some(token) = self.tokens.get(self.cursor) {
            let done = predicate(token);
            footprint.push(token.clone());
            self.cursor += 1;
            if done {
                break;
            }
        }
        footprint
    }

    /// Advance (or, with a negative count, retreat) the cursor. Retreating
    /// saturates at the start of the sequence.
    pub fn step(&mut self, steps: isize) -> &mut Self {
        if steps.is_negative() {
            self.cursor = self.cursor.saturating_sub(steps.unsigned_abs());
        } else {
            self.cursor += steps as usize;
        }
        self
    }

    /// True once the cursor has reached the last addressable position (one
    /// before the true end, where the `Eof` sentinel sits).
    pub fn is_eof(&self) -> bool {
        self.cursor + 1 >= self.tokens.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkKind {
    Tag,
    Text,
}

/// A maximal run of tokens representing either one piece of tag markup or
/// the literal content between tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenChunk {
    pub kind: ChunkKind,
    pub tokens: Vec<Token>,
}

impl TokenChunk {
    /// Concatenated content of the chunk's tokens.
    pub fn serialize_content(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }
}

/// Partition a token sequence into alternating tag and text chunks.
///
/// Sentinels are stepped over. A `BracketOpen` at the cursor starts a tag
/// chunk running through the next `>`. Anything else starts a text chunk
/// running up to the next `<`; the walker then backtracks one step so the
/// boundary `<` is re-examined as the start of the following tag chunk,
/// and the boundary token is dropped from the text chunk itself.
pub fn walk_chunks(tokens: &[Token]) -> Vec<TokenChunk> {
    let mut walker = TokenWalker::new(tokens);
    let mut chunks = Vec::new();

    while !walker.is_eof() {
        let token_type = match walker.next_token() {
            Some(token) => token.token_type,
            None => break,
        };

        if token_type == TokenType::Sof || token_type == TokenType::Eof {
            walker.step(1);
            continue;
        }

        if token_type == TokenType::BracketOpen {
            let run = walker.walk_until(|token| token.content == ">");
            chunks.push(TokenChunk {
                kind: ChunkKind::Tag,
                tokens: run,
            });
        } else {
            let mut run = walker.walk_until(|token| token.content == "<");
            walker.step(-1);
            run.truncate(run.len().saturating_sub(1));
            chunks.push(TokenChunk {
                kind: ChunkKind::Text,
                tokens: run,
            });
        }
    }

    chunks
}
