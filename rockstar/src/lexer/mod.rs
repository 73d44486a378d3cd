// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod lexer;
mod punctuator;
mod token;
mod token_kind;

pub use self::{
    keyword::{Article, Keyword},
    lexer::{
        Lexer,
        LexerError,
        LexerErrorKind,
        parse_number_literal,
    },
    punctuator::Punctuator,
    token::Token,
    token_kind::TokenKind,
};
