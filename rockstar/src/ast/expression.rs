// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Debug, Display, Write};

use crate::{Article, Ranged};

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Variable(Identifier),
    Pronoun,
    BinaryOp(BinaryExpression),
    Comparison(ComparisonExpression),
    Call(CallExpression),
}

impl Expression {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Variable(ident) => Some(ident),
            _ => None,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => Display::fmt(literal, f),
            Self::Variable(ident) => Display::fmt(ident, f),
            Self::Pronoun => f.write_str("it"),
            Self::BinaryOp(expr) => Display::fmt(expr, f),
            Self::Comparison(expr) => Display::fmt(expr, f),
            Self::Call(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Mysterious,
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => Display::fmt(number, f),
            Self::String(str) => {
                f.write_char('"')?;
                f.write_str(str)?;
                f.write_char('"')
            }
            Self::Boolean(true) => f.write_str("true"),
            Self::Boolean(false) => f.write_str("false"),
            Self::Null => f.write_str("null"),
            Self::Mysterious => f.write_str("mysterious"),
        }
    }
}

/// A variable as it was written in the source. Two identifiers may name the
/// same variable, see [`crate::CanonicalName`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
    Common {
        article: Article,
        noun: String,
    },
    Proper(Vec<String>),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common { article, noun } => f.write_fmt(format_args!("{} {noun}", article.as_ref())),
            Self::Proper(words) => f.write_str(&words.join(" ")),
        }
    }
}

/// Something that can be assigned to.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Variable(Identifier),
    Pronoun,
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(ident) => Display::fmt(ident, f),
            Self::Pronoun => f.write_str("it"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub operator: Ranged<MathOperator>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.lhs.value(), f)?;

        f.write_char(' ')?;
        f.write_str(self.operator.as_str())?;
        f.write_char(' ')?;

        Display::fmt(self.rhs.value(), f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonExpression {
    pub comparison: Ranged<Comparison>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for ComparisonExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.lhs.value(), f)?;

        f.write_char(' ')?;
        f.write_str(self.comparison.as_str())?;
        f.write_char(' ')?;

        Display::fmt(self.rhs.value(), f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    pub name: Ranged<Identifier>,
    pub arguments: Vec<Ranged<Expression>>,
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.name.value(), f)?;
        f.write_str(" taking ")?;

        for (idx, arg) in self.arguments.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(arg.value(), f)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl MathOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "over",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "is",
            Self::Inequality => "ain't",
            Self::LessThan => "is less than",
            Self::LessThanOrEqual => "is as low as",
            Self::GreaterThan => "is greater than",
            Self::GreaterThanOrEqual => "is as high as",
        }
    }

    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        !matches!(self, Self::Equality | Self::Inequality)
    }
}
