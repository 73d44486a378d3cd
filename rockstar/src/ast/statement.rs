// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Expression, FileRange, Identifier, Literal, Ranged, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Assignment(AssignStatement),
    Break,
    Conditional(IfStatement),
    Continue,
    Decrement(StepStatement),
    /// A call used as a statement, its result is discarded.
    Expression(Ranged<Expression>),
    Function(FunctionStatement),
    Increment(StepStatement),
    Input(InputStatement),
    Loop(LoopStatement),
    Output(OutputStatement),
    PoeticLiteral(PoeticStatement),
    Return(ReturnStatement),
}

impl StatementKind {
    /// Whether this statement owns a [`Block`], and therefore is terminated by a
    /// blank line instead of a newline.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::Conditional(..) | Self::Function(..) | Self::Loop(..))
    }
}

/// Statements terminated by a blank line, or by the end of the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// `Put <expression> into <target>`
#[derive(Clone, Debug, PartialEq)]
pub struct AssignStatement {
    pub value: Ranged<Expression>,
    pub target: Ranged<Target>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoeticStatement {
    pub target: Ranged<Target>,
    pub literal: Ranged<PoeticLiteral>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PoeticLiteral {
    /// `Tommy is nothing`
    Type(Literal),

    /// `Tommy says hello there`
    String(String),

    /// `Tommy was a lovestruck ladykiller`, the text is kept verbatim and is
    /// turned into digits when executed.
    Number(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,
    pub body: Block,
    pub else_body: Option<Block>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopKind {
    While,
    Until,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopStatement {
    pub kind: LoopKind,
    pub condition: Ranged<Expression>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionStatement {
    pub name: Ranged<Identifier>,
    pub parameters: Vec<Ranged<Identifier>>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub expression: Ranged<Expression>,
}

/// `Build <target> up` and `Knock <target> down`
#[derive(Clone, Debug, PartialEq)]
pub struct StepStatement {
    pub target: Ranged<Target>,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Say,
    Shout,
    Whisper,
    Scream,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputStatement {
    pub kind: OutputKind,
    pub expression: Ranged<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputStatement {
    pub target: Option<Ranged<Target>>,
}
