// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter, Write};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "ampersand")]
    Ampersand,
    #[strum(serialize = "apostrophe")]
    Apostrophe,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "colon")]
    Colon,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "exclamation mark")]
    ExclamationMark,
    #[strum(serialize = "hyphen")]
    HyphenMinus,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "plus sign")]
    PlusSign,
    #[strum(serialize = "question mark")]
    QuestionMark,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "slash")]
    Solidus,
}

impl Punctuator {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '&' => Self::Ampersand,
            '\'' => Self::Apostrophe,
            '*' => Self::Asterisk,
            ':' => Self::Colon,
            ',' => Self::Comma,
            '!' => Self::ExclamationMark,
            '-' => Self::HyphenMinus,
            '.' => Self::Period,
            '+' => Self::PlusSign,
            '?' => Self::QuestionMark,
            ';' => Self::Semicolon,
            '/' => Self::Solidus,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Ampersand => '&',
            Self::Apostrophe => '\'',
            Self::Asterisk => '*',
            Self::Colon => ':',
            Self::Comma => ',',
            Self::ExclamationMark => '!',
            Self::HyphenMinus => '-',
            Self::Period => '.',
            Self::PlusSign => '+',
            Self::QuestionMark => '?',
            Self::Semicolon => ';',
            Self::Solidus => '/',
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_char())
    }
}
