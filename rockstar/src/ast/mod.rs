// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod statement;
mod tree;

pub use self::{
    expression::{
        BinaryExpression,
        CallExpression,
        Comparison,
        ComparisonExpression,
        Expression,
        Identifier,
        Literal,
        MathOperator,
        Target,
    },
    statement::{
        AssignStatement,
        Block,
        FunctionStatement,
        IfStatement,
        InputStatement,
        LoopKind,
        LoopStatement,
        OutputKind,
        OutputStatement,
        PoeticLiteral,
        PoeticStatement,
        ReturnStatement,
        Statement,
        StatementKind,
        StepStatement,
    },
    tree::Program,
};
