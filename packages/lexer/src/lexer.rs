//! Markup Lexer
//!
//! Character-by-character tokenizer. A single left-to-right scan classifies
//! every character, with the most recently emitted token driving all
//! disambiguation (tag name vs. attribute value vs. plain word).

use crate::chars;
use crate::parse_util::position_at;
use crate::tokens::{Token, TokenType};

/// Tokenize an input string into a flat token sequence.
///
/// Total over any input: the result always starts with `Sof` and ends with
/// `Eof`, and the empty string yields exactly those two sentinels. The scan
/// never fails; malformed markup (unterminated strings, stray brackets) is
/// absorbed rather than reported.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();

    for (index, ch) in input.chars().enumerate() {
        tokenizer.nibble(ch, index, input);
    }

    tokenizer.collection()
}

/// Scanner state: either between tokens or inside a quoted string opened
/// by the given quote character.
enum LexState {
    Normal,
    InString(char),
}

/// Main tokenizer
struct Tokenizer {
    tokens: Vec<Token>,
    current_word: String,
    state: LexState,
}

impl Tokenizer {
    fn new() -> Self {
        Tokenizer {
            tokens: vec![Token::sof()],
            current_word: String::new(),
            state: LexState::Normal,
        }
    }

    /// Read accessor for the emitted tokens. The `Eof` sentinel is appended
    /// here rather than by the scan, and any unflushed accumulator content
    /// is dropped on the floor.
    fn collection(&self) -> Vec<Token> {
        let mut tokens = self.tokens.clone();
        tokens.push(Token::eof());
        tokens
    }

    fn previous_type(&self) -> TokenType {
        self.tokens
            .last()
            .map(|token| token.token_type)
            .unwrap_or(TokenType::Sof)
    }

    /// Consume one character. `previous` is captured once up front: every
    /// guard below compares against the token that was last *before* this
    /// character, even after an earlier branch flushed the accumulator.
    fn nibble(&mut self, ch: char, index: usize, input: &str) {
        let previous = self.previous_type();

        // Quote characters are always kept as literal content. A quote only
        // opens a string in attribute-value position (right after `=`).
        if chars::is_quote(ch) {
            self.current_word.push(ch);
            match self.state {
                LexState::InString(quote) => {
                    if quote == ch {
                        self.state = LexState::Normal;
                    }
                }
                LexState::Normal => {
                    if previous == TokenType::Equal {
                        self.state = LexState::InString(ch);
                    }
                }
            }
            return;
        }

        // Inside a string everything is content, structural characters
        // included. An unterminated string absorbs the rest of the input.
        if matches!(self.state, LexState::InString(_)) {
            self.current_word.push(ch);
            return;
        }

        if chars::is_bracket(ch) {
            match ch {
                chars::SLASH => {
                    self.flush_word(TokenType::Word, index, input);
                    self.emit(TokenType::BracketSlash, "/", index, input);
                }
                chars::LT => {
                    self.flush_word(TokenType::Word, index, input);
                    self.emit(TokenType::BracketOpen, "<", index, input);
                }
                _ => {
                    // `>` closes either a tag name or an unquoted attribute
                    // value, depending on what preceded the accumulator.
                    if previous == TokenType::BracketOpen || previous == TokenType::BracketSlash {
                        self.flush_word(TokenType::Word, index, input);
                    }
                    if previous == TokenType::Equal {
                        self.flush_word(TokenType::AttrValue, index, input);
                    }
                    self.emit(TokenType::BracketClose, ">", index, input);
                }
            }
            return;
        }

        if ch == chars::EQ {
            // An accumulator preceded by whitespace is an attribute name.
            if previous == TokenType::Space {
                self.flush_word(TokenType::AttrName, index, input);
            }
            self.emit(TokenType::Equal, "=", index, input);
            return;
        }

        if ch == chars::SPACE {
            self.flush_word(TokenType::Word, index, input);
            self.emit(TokenType::Space, " ", index, input);
            return;
        }

        self.current_word.push(ch);
    }

    /// Flush the accumulator as a token of the given type, positioned at
    /// the character where the accumulated run began. No-op when empty.
    fn flush_word(&mut self, token_type: TokenType, index: usize, input: &str) {
        if self.current_word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.current_word);
        let start = index - word.chars().count();
        let position = position_at(start, input);
        self.tokens.push(Token::new(token_type, word, position));
    }

    fn emit(&mut self, token_type: TokenType, content: &str, index: usize, input: &str) {
        let position = position_at(index, input);
        self.tokens
            .push(Token::new(token_type, content.to_string(), position));
    }
}
