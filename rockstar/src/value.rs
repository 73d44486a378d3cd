// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cmp::Ordering, fmt::Display};

use strum::AsRefStr;

use crate::{parse_number_literal, Comparison, Literal, MathOperator};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,

    /// Explicitly unknown, distinct from [`Value::Null`].
    Mysterious,
}

impl Value {
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(str) => !str.is_empty(),
            Self::Null | Self::Mysterious => false,
        }
    }

    #[must_use]
    pub fn typ(&self) -> ValueType {
        match self {
            Self::Number(..) => ValueType::Number,
            Self::String(..) => ValueType::String,
            Self::Boolean(..) => ValueType::Boolean,
            Self::Null => ValueType::Null,
            Self::Mysterious => ValueType::Mysterious,
        }
    }

    /// The numeric interpretation used by arithmetic, `None` when the value has none.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(true) => Some(1.0),
            Self::Boolean(false) => Some(0.0),
            Self::Null => Some(0.0),
            Self::String(str) => parse_number_literal(str),
            Self::Mysterious => None,
        }
    }

    pub fn apply(&self, operator: MathOperator, rhs: &Self) -> Result<Self, ValueError> {
        if operator == MathOperator::Add {
            match (self, rhs) {
                (Self::Number(lhs), Self::Number(rhs)) => return Ok(Self::Number(lhs + rhs)),
                (Self::String(..), _) | (_, Self::String(..)) => return Ok(Self::String(format!("{self}{rhs}"))),
                _ => (),
            }
        }

        let (Some(lhs_number), Some(rhs_number)) = (self.to_number(), rhs.to_number()) else {
            return Err(ValueError::InvalidOperands {
                operator,
                lhs: self.typ(),
                rhs: rhs.typ(),
            });
        };

        let result = match operator {
            MathOperator::Add => lhs_number + rhs_number,
            MathOperator::Subtract => lhs_number - rhs_number,
            MathOperator::Multiply => lhs_number * rhs_number,
            MathOperator::Divide => {
                if rhs_number == 0.0 {
                    return Err(ValueError::DivisionByZero);
                }

                lhs_number / rhs_number
            }
        };

        Ok(Self::Number(result))
    }

    /// Equality never holds across types, and [`Value::Mysterious`] isn't even
    /// equal to itself.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,
            (Self::Boolean(lhs), Self::Boolean(rhs)) => lhs == rhs,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }

    pub fn compare(&self, other: &Self, comparison: Comparison) -> Result<bool, ValueError> {
        let matches: fn(Ordering) -> bool = match comparison {
            Comparison::Equality => return Ok(self.is_equal_to(other)),
            Comparison::Inequality => return Ok(!self.is_equal_to(other)),
            Comparison::GreaterThan => |ordering| ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqual => |ordering| ordering != Ordering::Less,
            Comparison::LessThan => |ordering| ordering == Ordering::Less,
            Comparison::LessThanOrEqual => |ordering| ordering != Ordering::Greater,
        };

        let ordering = match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs.partial_cmp(rhs),
            (Self::String(lhs), Self::String(rhs)) => Some(lhs.cmp(rhs)),
            _ => {
                return Err(ValueError::Unordered {
                    comparison,
                    lhs: self.typ(),
                    rhs: other.typ(),
                });
            }
        };

        Ok(ordering.is_some_and(matches))
    }
}

impl From<&Literal> for Value {
    fn from(value: &Literal) -> Self {
        match value {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(str) => Self::String(str.clone()),
            Literal::Boolean(b) => Self::Boolean(*b),
            Literal::Null => Self::Null,
            Literal::Mysterious => Self::Mysterious,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Also turns -0 into 0.
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) => n.fmt(f),
            Self::String(str) => f.write_str(str),
            Self::Boolean(true) => f.write_str("true"),
            Self::Boolean(false) => f.write_str("false"),
            Self::Null => f.write_str("null"),
            Self::Mysterious => f.write_str("mysterious"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Null,
    Mysterious,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("Cannot apply `{}` to {lhs} and {rhs}", operator.as_str())]
    InvalidOperands {
        operator: MathOperator,
        lhs: ValueType,
        rhs: ValueType,
    },

    #[error("Cannot compare {lhs} and {rhs} with `{}`", comparison.as_str())]
    Unordered {
        comparison: Comparison,
        lhs: ValueType,
        rhs: ValueType,
    },

    #[error("Division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[rstest]
    #[case(Value::Number(3.0), "3")]
    #[case(Value::Number(-0.0), "0")]
    #[case(Value::Number(2.5), "2.5")]
    #[case(Value::Number(-17.0), "-17")]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Boolean(false), "false")]
    #[case(Value::Null, "null")]
    #[case(Value::Mysterious, "mysterious")]
    #[case(string("rock"), "rock")]
    fn rendering(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Number(1.0), MathOperator::Add, Value::Number(2.0), Value::Number(3.0))]
    #[case(string("ab"), MathOperator::Add, Value::Number(1.0), string("ab1"))]
    #[case(Value::Number(1.5), MathOperator::Add, string("x"), string("1.5x"))]
    #[case(string("it's "), MathOperator::Add, Value::Boolean(true), string("it's true"))]
    #[case(string("it's "), MathOperator::Add, Value::Mysterious, string("it's mysterious"))]
    #[case(Value::Boolean(true), MathOperator::Add, Value::Null, Value::Number(1.0))]
    #[case(Value::Number(10.0), MathOperator::Subtract, Value::Boolean(true), Value::Number(9.0))]
    #[case(string("6"), MathOperator::Multiply, Value::Number(7.0), Value::Number(42.0))]
    #[case(Value::Number(1.0), MathOperator::Divide, Value::Number(4.0), Value::Number(0.25))]
    #[case(Value::Null, MathOperator::Multiply, Value::Number(5.0), Value::Number(0.0))]
    fn arithmetic(#[case] lhs: Value, #[case] operator: MathOperator, #[case] rhs: Value, #[case] expected: Value) {
        assert_eq!(lhs.apply(operator, &rhs), Ok(expected));
    }

    #[rstest]
    #[case(string("ab"), MathOperator::Subtract, Value::Number(1.0))]
    #[case(Value::Mysterious, MathOperator::Multiply, Value::Number(1.0))]
    #[case(Value::Number(1.0), MathOperator::Add, Value::Mysterious)]
    fn invalid_operands(#[case] lhs: Value, #[case] operator: MathOperator, #[case] rhs: Value) {
        assert!(matches!(lhs.apply(operator, &rhs), Err(ValueError::InvalidOperands { .. })));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Value::Number(1.0).apply(MathOperator::Divide, &Value::Null), Err(ValueError::DivisionByZero));
    }

    #[rstest]
    #[case(Value::Number(1.0), Value::Number(1.0), true)]
    #[case(string("a"), string("a"), true)]
    #[case(Value::Null, Value::Null, true)]
    #[case(Value::Boolean(false), Value::Boolean(false), true)]
    #[case(Value::Number(1.0), string("1"), false)]
    #[case(Value::Null, Value::Number(0.0), false)]
    #[case(Value::Mysterious, Value::Mysterious, false)]
    fn equality(#[case] lhs: Value, #[case] rhs: Value, #[case] equal: bool) {
        assert_eq!(lhs.compare(&rhs, Comparison::Equality), Ok(equal));
        assert_eq!(lhs.compare(&rhs, Comparison::Inequality), Ok(!equal));
    }

    #[rstest]
    #[case(Value::Number(1.0), Comparison::LessThan, Value::Number(2.0), true)]
    #[case(Value::Number(2.0), Comparison::LessThanOrEqual, Value::Number(2.0), true)]
    #[case(Value::Number(2.0), Comparison::GreaterThan, Value::Number(2.0), false)]
    #[case(string("abc"), Comparison::GreaterThanOrEqual, string("abd"), false)]
    #[case(string("b"), Comparison::GreaterThan, string("a"), true)]
    fn ordering(#[case] lhs: Value, #[case] comparison: Comparison, #[case] rhs: Value, #[case] expected: bool) {
        assert_eq!(lhs.compare(&rhs, comparison), Ok(expected));
    }

    #[test]
    fn ordering_across_types_is_an_error() {
        let result = Value::Number(1.0).compare(&string("2"), Comparison::LessThan);
        assert!(matches!(result, Err(ValueError::Unordered { .. })));
    }

    #[rstest]
    #[case(Value::Boolean(true), true)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::Number(-3.0), true)]
    #[case(string(""), false)]
    #[case(string("false"), true)]
    #[case(Value::Null, false)]
    #[case(Value::Mysterious, false)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }
}
