//! Token Compressor
//!
//! Folds runs of raw tokens into compact tag tokens using a fixed-size
//! sliding window, filtering loose fragments according to context.

use smallvec::SmallVec;

use crate::parse_util::Position;
use crate::tokens::{Token, TokenType};

const WINDOW_SIZE: usize = 3;

/// Bounded most-recent-N token buffer. Pushing past capacity evicts the
/// oldest entry; negative indices read from the end.
pub struct TokenWindow {
    max_token_count: usize,
    window: SmallVec<[Token; WINDOW_SIZE]>,
}

impl TokenWindow {
    pub fn new(max_token_count: usize) -> Self {
        TokenWindow {
            max_token_count,
            window: SmallVec::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.window.push(token);
        while self.window.len() > self.max_token_count {
            self.window.remove(0);
        }
    }

    pub fn get(&self, index: isize) -> Option<&Token> {
        if index >= 0 {
            self.window.get(index as usize)
        } else {
            self.window
                .len()
                .checked_sub(index.unsigned_abs())
                .and_then(|i| self.window.get(i))
        }
    }

    /// Concatenated content of every token currently in the window.
    pub fn serialize_content(&self) -> String {
        self.window.iter().map(|t| t.content.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Fold a raw token sequence into one where complete tag markup is a
/// single token.
///
/// Matching is on the boundary *contents* of the 3-token window, not on
/// structural completeness: a window starting with `<` and ending with `>`
/// folds to `TagOpen` as soon as it fills, so tags with more than three
/// raw tokens between their brackets never fold. Raw tokens that match no
/// boundary pattern pass through only immediately after an emitted
/// `TagOpen`/`TagClose`; everything else is dropped. Any `BracketOpen`
/// still present after the pass is swept out.
pub fn compress(tokens: &[Token]) -> Vec<Token> {
    let mut collection: Vec<Token> = Vec::new();
    let mut window = TokenWindow::new(WINDOW_SIZE);

    for (index, token) in tokens.iter().enumerate() {
        window.push(token.clone());

        let head = window.get(0).map(|t| t.content.as_str()).unwrap_or("");
        let last = window.get(-1).map(|t| t.content.as_str()).unwrap_or("");

        if head == "<" && last == ">" {
            let position = window.get(0).map(|t| t.position).unwrap_or_default();
            collection.push(Token::new(
                TokenType::TagOpen,
                window.serialize_content(),
                position,
            ));
        } else if head == "<" && last == "/" {
            let position = window.get(0).map(|t| t.position).unwrap_or_default();
            collection.push(Token::new(
                TokenType::TagSelfClose,
                window.serialize_content(),
                position,
            ));
        } else if head == "/" && last == ">" {
            // The opening `<` was already consumed into an earlier window;
            // restore it in the content, and anchor the token at the
            // previous raw input token's position.
            let position = previous_input_position(tokens, index);
            collection.push(Token::new(
                TokenType::TagClose,
                format!("<{}", window.serialize_content()),
                position,
            ));
        } else {
            // Loose tokens survive only immediately after an emitted
            // TagOpen/TagClose (or while nothing has been emitted yet,
            // which is how the leading sentinel gets through).
            let after_fold = matches!(
                collection.last(),
                None | Some(Token {
                    token_type: TokenType::TagOpen | TokenType::TagClose,
                    ..
                })
            );
            if after_fold {
                collection.push(token.clone());
            }
        }
    }

    // BracketOpen is superseded by the Tag* folds
    collection.retain(|token| token.token_type != TokenType::BracketOpen);
    collection
}

fn previous_input_position(tokens: &[Token], index: usize) -> Position {
    index
        .checked_sub(1)
        .and_then(|i| tokens.get(i))
        .map(|t| t.position)
        .unwrap_or_default()
}
