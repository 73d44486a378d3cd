// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Article, Keyword, Punctuator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),

    /// An article followed by a word, e.g. `my heart`.
    CommonIdentifier {
        article: Article,
        noun: String,
    },

    /// One or more capitalized words, e.g. `Doctor Feelgood`.
    ProperIdentifier(Vec<String>),

    /// A word that is neither a keyword nor part of a variable name. These only
    /// carry meaning inside poetic literals.
    Word(String),

    StringLiteral(String),
    Number(f64),

    /// The rest of a line following `says`, or following the `is` of a poetic
    /// literal, without comments.
    PoeticString(String),

    Punctuator(Punctuator),
    Newline,
}

impl TokenKind {
    #[must_use]
    pub fn can_be_variable(&self) -> bool {
        match self {
            Self::CommonIdentifier { .. } => true,
            Self::ProperIdentifier(..) => true,
            Self::Keyword(keyword) => keyword.is_pronoun(),
            _ => false,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::CommonIdentifier { article, noun } => f.write_fmt(format_args!("{} {noun}", article.as_ref())),
            Self::ProperIdentifier(words) => f.write_str(&words.join(" ")),
            Self::Word(word) => f.write_str(word),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::Number(number) => number.fmt(f),
            Self::PoeticString(str) => f.write_str(str),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::Newline => f.write_str("end of line"),
        }
    }
}
