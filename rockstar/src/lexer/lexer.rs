// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use strum::AsRefStr;
use thiserror::Error;

use crate::{Article, FileLocation, Keyword, Punctuator, SourceCode, Token, TokenKind};

pub struct Lexer<'source_code> {
    input: &'source_code SourceCode,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    next_location: FileLocation,

    line_has_token: bool,
    line_has_comment: bool,

    /// Set after `says`, or after `is` following the variable a statement
    /// starts with. The rest of that line is then taken as text.
    raw_text_pending: Option<RawText>,

    statement_tokens: usize,
    statement_starts_with_variable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawText {
    /// After `says`: kept as is, minus comments and trailing whitespace.
    Verbatim,

    /// After `is`, `was` or `were`: comments separate words, surrounding
    /// whitespace is dropped.
    Words,
}

/// A saved lexer position, used to back out of a lookahead.
#[derive(Clone)]
struct Snapshot<'source_code> {
    chars: CharIndices<'source_code>,
    current: Option<(FileLocation, char)>,
    next_location: FileLocation,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code SourceCode) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            next_location: FileLocation::default(),
            line_has_token: false,
            line_has_comment: false,
            raw_text_pending: None,
            statement_tokens: 0,
            statement_starts_with_variable: false,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        if let Some(mode) = self.raw_text_pending.take() {
            if let Some(token) = self.consume_raw_text(mode)? {
                self.line_has_token = true;
                self.statement_tokens += 1;
                return Ok(Some(token));
            }
        }

        let ch = loop {
            self.skip_inline_whitespace();

            let Some(ch) = self.peek_char() else {
                return Ok(None);
            };

            match ch {
                '\n' => {
                    // A line with nothing but comments on it is invisible, so it can't
                    // split (or form) a blank line.
                    let emit = self.line_has_token || !self.line_has_comment;
                    self.line_has_token = false;
                    self.line_has_comment = false;
                    self.statement_tokens = 0;

                    let token = self.consume_single_char_token(TokenKind::Newline);
                    if emit {
                        return Ok(Some(token));
                    }
                }

                '(' => {
                    self.consume_comment()?;
                    self.line_has_comment = true;
                }

                ch => break ch,
            }
        };

        let token = match ch {
            '"' => self.consume_string()?,

            '0'..='9' => self.consume_number()?,
            '-' | '+' if self.peek_second_char().is_some_and(|c| c.is_ascii_digit()) => self.consume_number()?,

            c if c.is_alphabetic() => self.consume_word_token(),

            c => match Punctuator::from_char(c) {
                Some(punctuator) => self.consume_single_char_token(TokenKind::Punctuator(punctuator)),
                None => {
                    return Err(LexerError {
                        location: self.current_location(),
                        kind: LexerErrorKind::InvalidCharacter(c),
                    });
                }
            },
        };

        self.line_has_token = true;
        self.track_statement(&token.kind);
        Ok(Some(token))
    }

    fn track_statement(&mut self, kind: &TokenKind) {
        let TokenKind::Keyword(keyword) = kind else {
            if self.statement_tokens == 0 {
                self.statement_starts_with_variable = kind.can_be_variable();
            }
            self.statement_tokens += 1;
            return;
        };

        self.raw_text_pending = match keyword {
            Keyword::Says => Some(RawText::Verbatim),
            Keyword::Is | Keyword::Was | Keyword::Were
                if self.statement_tokens == 1 && self.statement_starts_with_variable => Some(RawText::Words),
            _ => None,
        };

        // `Else` may be followed by a statement on the same line.
        if *keyword == Keyword::Else {
            self.statement_tokens = 0;
            return;
        }

        if self.statement_tokens == 0 {
            self.statement_starts_with_variable = kind.can_be_variable();
        }
        self.statement_tokens += 1;
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind,
            begin,
            end,
        }
    }

    fn consume_comment(&mut self) -> Result<(), LexerError> {
        let begin = self.current_location();
        assert_eq!(self.next_char(), Some('('));

        loop {
            match self.next_char() {
                Some(')') => return Ok(()),
                Some(..) => (),
                None => {
                    return Err(LexerError {
                        location: begin,
                        kind: LexerErrorKind::UnterminatedComment,
                    });
                }
            }
        }
    }

    fn consume_string(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        assert_eq!(self.next_char(), Some('"'));

        let offset_begin = self.current_location().offset();

        loop {
            match self.peek_char() {
                Some('"') => break,
                Some(..) => self.consume_char(),
                None => {
                    return Err(LexerError {
                        location: begin,
                        kind: LexerErrorKind::UnterminatedString,
                    });
                }
            }
        }

        let offset_end = self.current_location().offset();
        let str = self.input[offset_begin..offset_end].to_string();

        self.consume_char();

        let end = self.current_location();

        Ok(Token {
            kind: TokenKind::StringLiteral(str),
            begin,
            end,
        })
    }

    /// The rest of the line as one [`TokenKind::PoeticString`]. Nothing is
    /// produced for an empty [`RawText::Words`] tail.
    fn consume_raw_text(&mut self, mode: RawText) -> Result<Option<Token>, LexerError> {
        match mode {
            RawText::Verbatim => {
                if self.peek_char() == Some(' ') {
                    self.consume_char();
                }
            }
            RawText::Words => self.skip_inline_whitespace(),
        }

        let begin = self.current_location();
        let mut end = begin;
        let mut text = String::new();

        loop {
            match self.peek_char() {
                None | Some('\n') => break,
                Some('(') => {
                    self.consume_comment()?;
                    if mode == RawText::Words {
                        text.push(' ');
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.consume_char();
                    if !c.is_whitespace() {
                        end = self.current_location();
                    }
                }
            }
        }

        if mode == RawText::Verbatim {
            end = self.current_location();
        }

        let text = match mode {
            RawText::Verbatim => text.trim_end().to_string(),
            RawText::Words => text.trim().to_string(),
        };

        if mode == RawText::Words && text.is_empty() {
            return Ok(None);
        }

        Ok(Some(Token {
            kind: TokenKind::PoeticString(text),
            begin,
            end,
        }))
    }

    fn consume_number(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.consume_char();
        }

        self.consume_while(|c| c.is_ascii_digit());

        if self.peek_char() == Some('.') {
            self.consume_char();
            self.consume_while(|c| c.is_ascii_digit());
        }

        let end = self.current_location();
        let text = &self.input[begin.offset()..end.offset()];

        let Some(number) = parse_number_literal(text) else {
            return Err(LexerError {
                location: begin,
                kind: LexerErrorKind::InvalidNumber,
            });
        };

        Ok(Token {
            kind: TokenKind::Number(number),
            begin,
            end,
        })
    }

    /// Lexes a keyword, a common variable (article + word), a proper variable
    /// (a run of capitalized words) or a plain word.
    fn consume_word_token(&mut self) -> Token {
        let (begin, end, word) = self.consume_word();

        if let Some(article) = Article::parse(word) {
            if let Some((_, noun_end, noun)) = self.try_consume_following_word(|_| true) {
                return Token {
                    kind: TokenKind::CommonIdentifier {
                        article,
                        noun: noun.to_string(),
                    },
                    begin,
                    end: noun_end,
                };
            }
        }

        if let Some(keyword) = Keyword::parse(word) {
            return Token {
                kind: TokenKind::Keyword(keyword),
                begin,
                end,
            };
        }

        if !is_capitalized(word) {
            return Token {
                kind: TokenKind::Word(word.to_string()),
                begin,
                end,
            };
        }

        let mut words = vec![word.to_string()];
        let mut end = end;

        while let Some((_, word_end, word)) = self.try_consume_following_word(is_proper_word) {
            words.push(word.to_string());
            end = word_end;
        }

        Token {
            kind: TokenKind::ProperIdentifier(words),
            begin,
            end,
        }
    }

    /// Consumes the next word on the same line if `accept` likes it, otherwise leaves
    /// the lexer untouched.
    fn try_consume_following_word(&mut self, accept: impl FnOnce(&str) -> bool) -> Option<(FileLocation, FileLocation, &'source_code str)> {
        let snapshot = self.snapshot();

        self.skip_inline_whitespace();

        if self.peek_char().is_some_and(|c| c.is_alphabetic()) {
            let (begin, end, word) = self.consume_word();
            if accept(word) {
                return Some((begin, end, word));
            }
        }

        self.restore(snapshot);
        None
    }

    fn consume_word(&mut self) -> (FileLocation, FileLocation, &'source_code str) {
        let begin = self.current_location();

        loop {
            let Some(c) = self.peek_char() else {
                break;
            };

            let continues_word = c.is_alphanumeric()
                || (c == '\'' && self.peek_second_char().is_some_and(|c| c.is_alphabetic()));

            if !continues_word {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let input: &'source_code SourceCode = self.input;
        (begin, end, &input[begin.offset()..end.offset()])
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.consume_char();
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' || !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(_, char)| {
                let location = self.next_location;
                self.next_location = location.advance(char);
                (location, char)
            });
        Some(self.current?.1)
    }

    /// The character after the one returned by [`Self::peek_char`].
    fn peek_second_char(&mut self) -> Option<char> {
        self.peek_char()?;
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => self.next_location,
        }
    }

    fn snapshot(&self) -> Snapshot<'source_code> {
        Snapshot {
            chars: self.chars.clone(),
            current: self.current,
            next_location: self.next_location,
        }
    }

    fn restore(&mut self, snapshot: Snapshot<'source_code>) {
        self.chars = snapshot.chars;
        self.current = snapshot.current;
        self.next_location = snapshot.next_location;
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        log::trace!("Lexed {} tokens from {}", tokens.len(), self.input.path().display());
        Ok(tokens)
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_proper_word(word: &str) -> bool {
    is_capitalized(word) && Keyword::parse(word).is_none() && Article::parse(word).is_none()
}

/// Parses `text` according to the number grammar: an optional sign, digits, and
/// an optional decimal point followed by optional digits.
#[must_use]
pub fn parse_number_literal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(|c| c == '-' || c == '+').unwrap_or(text);

    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, fraction),
        None => (unsigned, ""),
    };

    if integral.is_empty()
        || !integral.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    text.trim_end_matches('.').parse().ok()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Unterminated string, expected a closing `\"`")]
    UnterminatedString,

    #[error("Unterminated comment, expected a closing `)`")]
    UnterminatedComment,

    #[error("Invalid character `{0}`")]
    InvalidCharacter(char),

    #[error("Invalid number")]
    InvalidNumber,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
