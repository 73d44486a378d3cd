// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    #[strum(serialize = "ain't")]
    Aint,
    And,
    As,
    Back,
    Big,
    Bigger,
    Break,
    Build,
    By,
    Continue,
    Down,
    Else,
    False,
    Give,
    Great,
    Greater,
    He,
    Her,
    High,
    Higher,
    Him,
    If,
    Into,
    Is,
    #[strum(serialize = "isn't")]
    Isnt,
    It,
    Knock,
    Less,
    Lies,
    Listen,
    Little,
    Low,
    Lower,
    Minus,
    Mysterious,
    No,
    Nobody,
    Not,
    Nothing,
    Nowhere,
    Null,
    Of,
    Ok,
    Over,
    Plus,
    Put,
    Right,
    Say,
    Says,
    Scream,
    She,
    Shout,
    Small,
    Smaller,
    Strong,
    Stronger,
    Take,
    Takes,
    Taking,
    Than,
    Them,
    They,
    Times,
    To,
    True,
    Until,
    Up,
    Was,
    Weak,
    Weaker,
    Were,
    While,
    Whisper,
    With,
    Without,
    Wrong,
    Yes,
}

impl Keyword {
    /// Keywords are matched without regard to case, so `Say`, `say` and `SAY` are the same.
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().eq_ignore_ascii_case(input))
    }

    #[must_use]
    pub const fn is_pronoun(&self) -> bool {
        matches!(self, Self::It | Self::He | Self::She | Self::Him | Self::Her | Self::Them | Self::They)
    }

    /// Words that follow `is` in `is higher than`.
    #[must_use]
    pub const fn is_greater_word(&self) -> bool {
        matches!(self, Self::Higher | Self::Greater | Self::Bigger | Self::Stronger)
    }

    /// Words that follow `is` in `is lower than`.
    #[must_use]
    pub const fn is_less_word(&self) -> bool {
        matches!(self, Self::Lower | Self::Less | Self::Smaller | Self::Weaker)
    }

    /// Words between `is as` and `as` in `is as high as`.
    #[must_use]
    pub const fn is_greater_or_equal_word(&self) -> bool {
        matches!(self, Self::High | Self::Great | Self::Big | Self::Strong)
    }

    /// Words between `is as` and `as` in `is as low as`.
    #[must_use]
    pub const fn is_less_or_equal_word(&self) -> bool {
        matches!(self, Self::Low | Self::Little | Self::Small | Self::Weak)
    }
}

/// The prefixes that turn a lowercase word into a common variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Article {
    A,
    An,
    The,
    My,
    Your,
}

impl Article {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().eq_ignore_ascii_case(input))
    }
}
