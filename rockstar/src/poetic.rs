// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{PoeticLiteral, Value};

/// The value of a poetic number literal. Each word adds one digit: the number of
/// letters in it, modulo 10. Words without letters are skipped.
///
/// ```
/// assert_eq!(rockstar::poetic_number("a lovestruck ladykiller"), 100.0);
/// ```
#[must_use]
pub fn poetic_number(text: &str) -> f64 {
    let digits: String = text
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphabetic()).count())
        .filter(|letters| *letters != 0)
        .filter_map(|letters| char::from_digit((letters % 10) as u32, 10))
        .collect();

    digits.parse().unwrap_or(0.0)
}

impl From<&PoeticLiteral> for Value {
    fn from(literal: &PoeticLiteral) -> Self {
        match literal {
            PoeticLiteral::Type(literal) => Value::from(literal),
            PoeticLiteral::String(text) => Value::String(text.clone()),
            PoeticLiteral::Number(text) => Value::Number(poetic_number(text)),
        }
    }
}
