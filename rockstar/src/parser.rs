// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashSet;

use strum::AsRefStr;

use crate::{
    AssignStatement, BinaryExpression, Block, CallExpression, CanonicalName, Comparison, ComparisonExpression, Expression, FileLocation, FileRange, FunctionStatement, Identifier, IfStatement, InputStatement, Keyword, Literal, LoopKind, LoopStatement, MathOperator, OutputKind, OutputStatement, parse_number_literal, PoeticLiteral, PoeticStatement, Program, Punctuator, Ranged, ReturnStatement, SourceCode, Statement, StatementKind, StepStatement, Target, Token, TokenKind
};

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'tokens> {
    source_code: &'tokens SourceCode,
    tokens: &'tokens [Token],
    cursor: usize,
    token_end: FileLocation,
    end_of_file: FileLocation,

    known_functions: HashSet<CanonicalName>,
    loop_depth: usize,
    function_depth: usize,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(source_code: &'tokens SourceCode, tokens: &'tokens [Token]) -> Self {
        let end_of_file = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            source_code,
            tokens,
            cursor: 0,
            token_end: FileLocation::default(),
            end_of_file,
            known_functions: HashSet::new(),
            loop_depth: 0,
            function_depth: 0,
        }
    }

    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        loop {
            while self.peek_kind() == Some(&TokenKind::Newline) {
                self.consume_token("statement")?;
            }

            if self.is_at_end() {
                break;
            }

            statements.push(self.parse_statement()?);
        }

        log::trace!("Parsed {} top-level statements from {}", statements.len(), self.source_code.path().display());
        Ok(Program::new(self.source_code.path().to_path_buf(), Block { statements }))
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Parses statements until a blank line (which is consumed) or the end of the file.
    fn parse_block(&mut self, context: BlockContext) -> ParseResult<(Block, BlockEnd)> {
        let mut statements = Vec::new();

        let end = loop {
            match self.peek_kind() {
                None => break BlockEnd::EndOfFile,
                Some(TokenKind::Newline) => {
                    self.consume_token("statement")?;
                    break BlockEnd::BlankLine;
                }
                Some(TokenKind::Keyword(Keyword::Else)) if context == BlockContext::IfBody => break BlockEnd::Else,
                Some(..) => statements.push(self.parse_statement()?),
            }
        };

        Ok((Block { statements }, end))
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let first_token = self.peek_token("statement")?.clone();
        let start = first_token.begin;

        let kind = match &first_token.kind {
            TokenKind::Keyword(Keyword::Put) => StatementKind::Assignment(self.parse_assign_statement()?),

            TokenKind::Keyword(Keyword::Say | Keyword::Shout | Keyword::Whisper | Keyword::Scream) => {
                StatementKind::Output(self.parse_output_statement()?)
            }

            TokenKind::Keyword(Keyword::Listen) => StatementKind::Input(self.parse_input_statement()?),
            TokenKind::Keyword(Keyword::If) => StatementKind::Conditional(self.parse_if_statement()?),
            TokenKind::Keyword(Keyword::While | Keyword::Until) => StatementKind::Loop(self.parse_loop_statement()?),

            TokenKind::Keyword(Keyword::Break) => {
                self.ensure_inside_loop(&first_token)?;
                self.consume_token("`break`")?;

                if self.peek_keyword() == Some(Keyword::It) {
                    self.consume_token("`it`")?;
                    self.expect_keyword(Keyword::Down, "`down` after `break it`")?;
                }

                StatementKind::Break
            }

            TokenKind::Keyword(Keyword::Continue) => {
                self.ensure_inside_loop(&first_token)?;
                self.consume_token("`continue`")?;
                StatementKind::Continue
            }

            TokenKind::Keyword(Keyword::Take) => {
                self.ensure_inside_loop(&first_token)?;
                self.parse_take_it_to_the_top()?;
                StatementKind::Continue
            }

            TokenKind::Keyword(Keyword::Give) => StatementKind::Return(self.parse_return_statement()?),
            TokenKind::Keyword(Keyword::Build) => StatementKind::Increment(self.parse_step_statement(Keyword::Up, "`up`")?),
            TokenKind::Keyword(Keyword::Knock) => StatementKind::Decrement(self.parse_step_statement(Keyword::Down, "`down`")?),

            kind if kind.can_be_variable() => self.parse_variable_statement(&first_token)?,

            _ => return Err(ParseError::UnknownStartOfStatement { token: first_token }),
        };

        let range = FileRange::new(start, self.token_end);

        if !kind.is_compound() {
            self.expect_end_of_statement()?;
        }

        Ok(Statement { range, kind })
    }

    fn parse_assign_statement(&mut self) -> ParseResult<AssignStatement> {
        self.consume_token("`put`")?;

        let value = self.parse_expression()?;
        self.expect_keyword(Keyword::Into, "`into`")?;
        let target = self.parse_target()?;

        Ok(AssignStatement { value, target })
    }

    fn parse_output_statement(&mut self) -> ParseResult<OutputStatement> {
        let token = self.consume_token("`say`")?;
        let kind = match token.kind {
            TokenKind::Keyword(Keyword::Shout) => OutputKind::Shout,
            TokenKind::Keyword(Keyword::Whisper) => OutputKind::Whisper,
            TokenKind::Keyword(Keyword::Scream) => OutputKind::Scream,
            _ => OutputKind::Say,
        };

        let expression = self.parse_expression()?;
        Ok(OutputStatement { kind, expression })
    }

    fn parse_input_statement(&mut self) -> ParseResult<InputStatement> {
        self.consume_token("`listen`")?;

        if self.peek_keyword() != Some(Keyword::To) {
            return Ok(InputStatement { target: None });
        }

        self.consume_token("`to`")?;
        let target = self.parse_target()?;
        Ok(InputStatement { target: Some(target) })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        self.consume_token("`if`")?;

        let condition = self.parse_expression()?;
        self.expect_end_of_statement()?;

        let (body, end) = self.parse_block(BlockContext::IfBody)?;

        let else_body = if end == BlockEnd::Else {
            self.consume_token("`else`")?;

            // The first statement of the else block may share the line with `Else`.
            if self.peek_kind() == Some(&TokenKind::Newline) {
                self.consume_token("statement")?;
            }

            Some(self.parse_block(BlockContext::Other)?.0)
        } else {
            None
        };

        Ok(IfStatement { condition, body, else_body })
    }

    fn parse_loop_statement(&mut self) -> ParseResult<LoopStatement> {
        let token = self.consume_token("`while`")?;
        let kind = match token.kind {
            TokenKind::Keyword(Keyword::Until) => LoopKind::Until,
            _ => LoopKind::While,
        };

        let condition = self.parse_expression()?;
        self.expect_end_of_statement()?;

        self.loop_depth += 1;
        let (body, _) = self.parse_block(BlockContext::Other)?;
        self.loop_depth -= 1;

        Ok(LoopStatement { kind, condition, body })
    }

    fn parse_take_it_to_the_top(&mut self) -> ParseResult<()> {
        self.consume_token("`take`")?;
        self.expect_keyword(Keyword::It, "`it` after `take`")?;
        self.expect_keyword(Keyword::To, "`to` after `take it`")?;

        let token = self.consume_token("`the top`")?;
        let is_top = matches!(&token.kind, TokenKind::CommonIdentifier { noun, .. } if noun.eq_ignore_ascii_case("top"));

        if !is_top {
            return Err(ParseError::ExpectedToken { token, expected: "`the top`" });
        }

        Ok(())
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let give = self.consume_token("`give`")?;
        if self.function_depth == 0 {
            return Err(ParseError::ReturnOutsideFunction { token: give });
        }

        self.expect_keyword(Keyword::Back, "`back` after `give`")?;

        let expression = self.parse_expression()?;
        Ok(ReturnStatement { expression })
    }

    /// `Build X up, up` or `Knock X down down`, every `up`/`down` counts once.
    fn parse_step_statement(&mut self, direction: Keyword, expected: &'static str) -> ParseResult<StepStatement> {
        self.consume_token("`build` or `knock`")?;

        let target = self.parse_target()?;
        let mut count = 0;

        loop {
            self.expect_keyword(direction, expected)?;
            count += 1;

            match self.peek_kind() {
                Some(TokenKind::Punctuator(Punctuator::Comma)) => {
                    self.consume_token(expected)?;
                }
                Some(TokenKind::Keyword(keyword)) if *keyword == direction => (),
                _ => break,
            }
        }

        Ok(StepStatement { target, count })
    }

    /// A statement starting with a variable: a function definition, a poetic
    /// literal or a call.
    fn parse_variable_statement(&mut self, first_token: &Token) -> ParseResult<StatementKind> {
        let second = self.tokens.get(self.cursor + 1).map(|token| &token.kind);

        match second {
            Some(TokenKind::Keyword(Keyword::Takes)) => {
                Ok(StatementKind::Function(self.parse_function_statement()?))
            }

            Some(TokenKind::Keyword(Keyword::Is | Keyword::Was | Keyword::Were | Keyword::Says)) => {
                Ok(StatementKind::PoeticLiteral(self.parse_poetic_statement()?))
            }

            _ => {
                let expression = self.parse_expression()?;
                if !matches!(expression.value(), Expression::Call(..)) {
                    return Err(ParseError::UnknownStartOfStatement { token: first_token.clone() });
                }

                Ok(StatementKind::Expression(expression))
            }
        }
    }

    fn parse_function_statement(&mut self) -> ParseResult<FunctionStatement> {
        let name = self.parse_identifier("function name")?;
        self.expect_keyword(Keyword::Takes, "`takes`")?;

        let mut parameters = vec![self.parse_identifier("parameter name")?];
        while self.consume_list_separator()? {
            parameters.push(self.parse_identifier("parameter name")?);
        }

        self.expect_end_of_statement()?;

        // Known before the body is parsed, so the function can call itself.
        self.known_functions.insert(CanonicalName::from(name.value()));

        let outer_loop_depth = std::mem::take(&mut self.loop_depth);
        self.function_depth += 1;

        let (body, _) = self.parse_block(BlockContext::Other)?;

        self.function_depth -= 1;
        self.loop_depth = outer_loop_depth;

        Ok(FunctionStatement { name, parameters, body })
    }

    fn parse_poetic_statement(&mut self) -> ParseResult<PoeticStatement> {
        let target = self.parse_target()?;
        let verb = self.consume_token("`is`")?;

        let expected = match verb.kind {
            TokenKind::Keyword(Keyword::Says) => "text after `says`",
            _ => "poetic literal",
        };

        let token = self.consume_token(expected)?;
        let range = token.range();
        let TokenKind::PoeticString(text) = token.kind else {
            return Err(ParseError::ExpectedToken { token, expected });
        };

        let literal = match verb.kind {
            TokenKind::Keyword(Keyword::Says) => PoeticLiteral::String(text),
            _ => poetic_literal_of(&text),
        };

        Ok(PoeticStatement {
            target,
            literal: Ranged::new(range, literal),
        })
    }

    pub fn parse_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_comparison_expression()
    }

    fn parse_comparison_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let lhs = self.parse_additive_expression()?;

        let Some(comparison) = self.parse_comparison_operator()? else {
            return Ok(lhs);
        };

        let rhs = self.parse_additive_expression()?;
        let range = FileRange::new(lhs.range().start(), rhs.range().end());

        let expression = Expression::Comparison(ComparisonExpression {
            comparison,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        });

        Ok(Ranged::new(range, expression))
    }

    fn parse_comparison_operator(&mut self) -> ParseResult<Option<Ranged<Comparison>>> {
        let Some(keyword) = self.peek_keyword() else {
            return Ok(None);
        };

        if !matches!(keyword, Keyword::Is | Keyword::Aint | Keyword::Isnt) {
            return Ok(None);
        }

        let begin = self.consume_token("comparison")?.begin;

        let comparison = match keyword {
            Keyword::Is => match self.peek_keyword() {
                Some(Keyword::Not) => {
                    self.consume_token("`not`")?;
                    Comparison::Inequality
                }

                Some(word) if word.is_greater_word() => {
                    self.consume_token("comparison")?;
                    self.expect_keyword(Keyword::Than, "`than`")?;
                    Comparison::GreaterThan
                }

                Some(word) if word.is_less_word() => {
                    self.consume_token("comparison")?;
                    self.expect_keyword(Keyword::Than, "`than`")?;
                    Comparison::LessThan
                }

                Some(Keyword::As) => {
                    self.consume_token("`as`")?;

                    let token = self.consume_token("`high` or `low`")?;
                    let comparison = match token.kind {
                        TokenKind::Keyword(word) if word.is_greater_or_equal_word() => Comparison::GreaterThanOrEqual,
                        TokenKind::Keyword(word) if word.is_less_or_equal_word() => Comparison::LessThanOrEqual,
                        _ => return Err(ParseError::ExpectedToken { token, expected: "`high` or `low`" }),
                    };

                    self.expect_keyword(Keyword::As, "`as`")?;
                    comparison
                }

                _ => Comparison::Equality,
            },

            _ => Comparison::Inequality,
        };

        Ok(Some(Ranged::new(FileRange::new(begin, self.token_end), comparison)))
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            (Keyword::Plus, MathOperator::Add),
            (Keyword::With, MathOperator::Add),
            (Keyword::Minus, MathOperator::Subtract),
            (Keyword::Without, MathOperator::Subtract),
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_primary_expression, &[
            (Keyword::Times, MathOperator::Multiply),
            (Keyword::Of, MathOperator::Multiply),
            (Keyword::Over, MathOperator::Divide),
            (Keyword::By, MathOperator::Divide),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(Keyword, MathOperator)]) -> ParseResult<Ranged<Expression>>
            where F: FnMut(&mut Self) -> ParseResult<Ranged<Expression>> {
        let mut expr = operand(self)?;

        loop {
            let Some(next) = self.peek_keyword() else {
                break;
            };

            let Some((_, operator)) = operators.iter().find(|(keyword, _)| *keyword == next).copied() else {
                break;
            };

            let operator_range = self.consume_token("operator")?.range();
            let operator = Ranged::new(operator_range, operator);

            let lhs = expr;
            let rhs = operand(self)?;
            let range = lhs.range().join(rhs.range());

            expr = Ranged::new(range, Expression::BinaryOp(BinaryExpression {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }));
        }

        Ok(expr)
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let token = self.consume_token("expression")?;
        let range = token.range();

        if let Some(literal) = literal_of(&token.kind) {
            return Ok(Ranged::new(range, Expression::Literal(literal)));
        }

        if let TokenKind::Keyword(keyword) = token.kind {
            if keyword.is_pronoun() {
                return Ok(Ranged::new(range, Expression::Pronoun));
            }
        }

        match identifier_of(&token.kind) {
            Some(identifier) => self.parse_reference_or_call(Ranged::new(range, identifier)),
            None => Err(ParseError::UnknownStartOfExpression { token }),
        }
    }

    /// A variable, or a call when the name is followed by `taking` or names a
    /// known function directly followed by an argument.
    fn parse_reference_or_call(&mut self, name: Ranged<Identifier>) -> ParseResult<Ranged<Expression>> {
        let is_call = if self.peek_keyword() == Some(Keyword::Taking) {
            self.consume_token("`taking`")?;
            true
        } else {
            self.known_functions.contains(&CanonicalName::from(name.value()))
                && self.peek_kind().is_some_and(can_start_expression)
        };

        if !is_call {
            return Ok(name.map(Expression::Variable));
        }

        let mut arguments = vec![self.parse_additive_expression()?];
        while self.consume_list_separator()? {
            arguments.push(self.parse_additive_expression()?);
        }

        let range = FileRange::new(name.range().start(), self.token_end);
        Ok(Ranged::new(range, Expression::Call(CallExpression { name, arguments })))
    }

    /// Consumes `,`, `and` or `, and` between arguments or parameters.
    fn consume_list_separator(&mut self) -> ParseResult<bool> {
        match self.peek_kind() {
            Some(TokenKind::Punctuator(Punctuator::Comma)) => {
                self.consume_token("`,`")?;
                if self.peek_keyword() == Some(Keyword::And) {
                    self.consume_token("`and`")?;
                }
                Ok(true)
            }

            Some(TokenKind::Keyword(Keyword::And)) => {
                self.consume_token("`and`")?;
                Ok(true)
            }

            _ => Ok(false),
        }
    }

    fn parse_target(&mut self) -> ParseResult<Ranged<Target>> {
        let token = self.consume_token("variable")?;

        let target = match &token.kind {
            TokenKind::Keyword(keyword) if keyword.is_pronoun() => Some(Target::Pronoun),
            kind => identifier_of(kind).map(Target::Variable),
        };

        let Some(target) = target else {
            return Err(ParseError::ExpectedToken { token, expected: "variable" });
        };

        Ok(Ranged::new(token.range(), target))
    }

    fn parse_identifier(&mut self, expected: &'static str) -> ParseResult<Ranged<Identifier>> {
        let token = self.consume_token(expected)?;

        match identifier_of(&token.kind) {
            Some(identifier) => Ok(Ranged::new(token.range(), identifier)),
            None => Err(ParseError::ExpectedToken { token, expected }),
        }
    }

    fn ensure_inside_loop(&self, token: &Token) -> ParseResult<()> {
        if self.loop_depth == 0 {
            return Err(ParseError::LoopControlOutsideLoop { token: token.clone() });
        }

        Ok(())
    }

    fn peek_token(&self, expected: &'static str) -> ParseResult<&Token> {
        match self.tokens.get(self.cursor) {
            Some(token) => Ok(token),
            None => Err(ParseError::UnexpectedEndOfFile { location: self.end_of_file, expected }),
        }
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.cursor).map(|token| &token.kind)
    }

    fn peek_keyword(&self) -> Option<Keyword> {
        match self.peek_kind() {
            Some(TokenKind::Keyword(keyword)) => Some(*keyword),
            _ => None,
        }
    }

    fn consume_token(&mut self, expected: &'static str) -> ParseResult<Token> {
        let token = self.peek_token(expected)?.clone();
        self.token_end = token.end;
        self.cursor += 1;
        Ok(token)
    }

    fn expect_keyword(&mut self, keyword: Keyword, expected: &'static str) -> ParseResult<Token> {
        let token = self.consume_token(expected)?;

        if token.kind != TokenKind::Keyword(keyword) {
            return Err(ParseError::ExpectedToken { token, expected });
        }

        Ok(token)
    }

    fn expect_end_of_statement(&mut self) -> ParseResult<()> {
        let Some(token) = self.tokens.get(self.cursor) else {
            return Ok(());
        };

        if token.kind != TokenKind::Newline {
            return Err(ParseError::ExpectedToken { token: token.clone(), expected: "end of line" });
        }

        self.cursor += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockEnd {
    BlankLine,
    Else,
    EndOfFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockContext {
    /// The then-branch of an `If`, which also ends at `Else`.
    IfBody,
    Other,
}

fn literal_of(kind: &TokenKind) -> Option<Literal> {
    Some(match kind {
        TokenKind::Number(number) => Literal::Number(*number),
        TokenKind::StringLiteral(str) => Literal::String(str.clone()),
        TokenKind::Keyword(Keyword::True | Keyword::Right | Keyword::Yes | Keyword::Ok) => Literal::Boolean(true),
        TokenKind::Keyword(Keyword::False | Keyword::Wrong | Keyword::No | Keyword::Lies) => Literal::Boolean(false),
        TokenKind::Keyword(Keyword::Null | Keyword::Nothing | Keyword::Nowhere | Keyword::Nobody) => Literal::Null,
        TokenKind::Keyword(Keyword::Mysterious) => Literal::Mysterious,
        _ => return None,
    })
}

/// A lone literal is assigned as is, anything else is a poetic number.
fn poetic_literal_of(text: &str) -> PoeticLiteral {
    if let Some(number) = parse_number_literal(text) {
        return PoeticLiteral::Type(Literal::Number(number));
    }

    let quoted = text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"'));
    if let Some(str) = quoted.filter(|str| !str.contains('"')) {
        return PoeticLiteral::Type(Literal::String(str.to_string()));
    }

    let literal = Keyword::parse(text).and_then(|keyword| literal_of(&TokenKind::Keyword(keyword)));
    match literal {
        Some(literal) => PoeticLiteral::Type(literal),
        None => PoeticLiteral::Number(text.split_whitespace().collect::<Vec<_>>().join(" ")),
    }
}

fn identifier_of(kind: &TokenKind) -> Option<Identifier> {
    match kind {
        TokenKind::CommonIdentifier { article, noun } => Some(Identifier::Common {
            article: *article,
            noun: noun.clone(),
        }),
        TokenKind::ProperIdentifier(words) => Some(Identifier::Proper(words.clone())),
        _ => None,
    }
}

fn can_start_expression(kind: &TokenKind) -> bool {
    kind.can_be_variable() || literal_of(kind).is_some()
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("Expected {expected}, but found {token}")]
    ExpectedToken { token: Token, expected: &'static str },

    #[error("Expected {expected}, but the file ended")]
    UnexpectedEndOfFile { location: FileLocation, expected: &'static str },

    #[error("Unknown start of statement: {token}")]
    UnknownStartOfStatement { token: Token },

    #[error("Unknown start of expression: {token}")]
    UnknownStartOfExpression { token: Token },

    #[error("`give back` is only allowed inside a function")]
    ReturnOutsideFunction { token: Token },

    #[error("`{token}` is only allowed inside a loop")]
    LoopControlOutsideLoop { token: Token },
}

impl ParseError {
    /// The offending token, absent when the file ended early.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::ExpectedToken { token, .. } => Some(token),
            Self::UnexpectedEndOfFile { .. } => None,
            Self::UnknownStartOfStatement { token } => Some(token),
            Self::UnknownStartOfExpression { token } => Some(token),
            Self::ReturnOutsideFunction { token } => Some(token),
            Self::LoopControlOutsideLoop { token } => Some(token),
        }
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::UnexpectedEndOfFile { location, .. } => location.as_zero_range(),
            _ => self.token().map(|token| token.range()).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn location(&self) -> FileLocation {
        self.range().start()
    }

    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self {
            Self::ExpectedToken { expected, .. } => expected,
            Self::UnexpectedEndOfFile { expected, .. } => expected,
            Self::UnknownStartOfStatement { .. } => "statement",
            Self::UnknownStartOfExpression { .. } => "expression",
            Self::ReturnOutsideFunction { .. } => "statement outside of a function",
            Self::LoopControlOutsideLoop { .. } => "statement outside of a loop",
        }
    }

    #[must_use]
    pub fn found(&self) -> String {
        match self.token() {
            Some(token) => token.to_string(),
            None => "end of file".to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Article, Lexer, SourceCode};

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(input: &str) -> ParseResult<Program> {
        let source_code = SourceCode::new_test(input);
        let tokens = Lexer::new(&source_code).tokenize().unwrap();
        Parser::new(&source_code, &tokens).parse_program()
    }

    fn parse_statements(input: &str) -> Vec<StatementKind> {
        parse(input)
            .unwrap()
            .statements()
            .iter()
            .map(|statement| statement.kind.clone())
            .collect()
    }

    fn parse_expression(input: &str) -> Expression {
        let source_code = SourceCode::new_test(input);
        let tokens = Lexer::new(&source_code).tokenize().unwrap();
        Parser::new(&source_code, &tokens).parse_expression().unwrap().into_value()
    }

    fn ranged<T>(value: T) -> Ranged<T> {
        Ranged::new(FileRange::default(), value)
    }

    fn number(value: f64) -> Ranged<Expression> {
        ranged(Expression::Literal(Literal::Number(value)))
    }

    fn binary(operator: MathOperator, lhs: Ranged<Expression>, rhs: Ranged<Expression>) -> Ranged<Expression> {
        ranged(Expression::BinaryOp(BinaryExpression {
            operator: ranged(operator),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }))
    }

    fn proper(name: &str) -> Identifier {
        Identifier::Proper(name.split(' ').map(|x| x.to_string()).collect())
    }

    #[test]
    fn assignment_to_common_variable() {
        assert_eq!(parse_statements("Put 5 into my heart"), vec![
            StatementKind::Assignment(AssignStatement {
                value: number(5.0),
                target: ranged(Target::Variable(Identifier::Common {
                    article: Article::My,
                    noun: "heart".to_string(),
                })),
            }),
        ]);
    }

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert_eq!(
            parse_expression("1 plus 2 times 3 minus 4"),
            binary(
                MathOperator::Subtract,
                binary(
                    MathOperator::Add,
                    number(1.0),
                    binary(MathOperator::Multiply, number(2.0), number(3.0)),
                ),
                number(4.0),
            ).into_value()
        );
    }

    #[rstest]
    #[case("1 is X", Comparison::Equality)]
    #[case("1 is not X", Comparison::Inequality)]
    #[case("1 ain't X", Comparison::Inequality)]
    #[case("1 isn't X", Comparison::Inequality)]
    #[case("1 is higher than X", Comparison::GreaterThan)]
    #[case("1 is stronger than X", Comparison::GreaterThan)]
    #[case("1 is less than X", Comparison::LessThan)]
    #[case("1 is weaker than X", Comparison::LessThan)]
    #[case("1 is as great as X", Comparison::GreaterThanOrEqual)]
    #[case("1 is as little as X", Comparison::LessThanOrEqual)]
    fn comparison_words(#[case] input: &str, #[case] expected: Comparison) {
        let Expression::Comparison(comparison) = parse_expression(input) else {
            panic!("not a comparison: {input}");
        };

        assert_eq!(*comparison.comparison.value(), expected);
        assert_eq!(comparison.lhs.value(), number(1.0).value());
        assert_eq!(comparison.rhs.value(), &Expression::Variable(proper("X")));
    }

    #[rstest]
    #[case("Tommy is nothing", PoeticLiteral::Type(Literal::Null))]
    #[case("Tommy was -12.5", PoeticLiteral::Type(Literal::Number(-12.5)))]
    #[case("Tommy is \"hello\"", PoeticLiteral::Type(Literal::String("hello".to_string())))]
    #[case("Tommy were right (so right)", PoeticLiteral::Type(Literal::Boolean(true)))]
    #[case("Tommy was a lovestruck ladykiller", PoeticLiteral::Number("a lovestruck ladykiller".to_string()))]
    #[case("Tommy was a (big) lady", PoeticLiteral::Number("a lady".to_string()))]
    #[case("Tommy is right now", PoeticLiteral::Number("right now".to_string()))]
    #[case("Tommy says hello, world", PoeticLiteral::String("hello, world".to_string()))]
    #[case("Tommy was a #1 hit", PoeticLiteral::Number("a #1 hit".to_string()))]
    #[case("Tommy is \"rock star", PoeticLiteral::Number("\"rock star".to_string()))]
    #[case("Tommy is ok", PoeticLiteral::Type(Literal::Boolean(true)))]
    #[case("Tommy is (maybe) true", PoeticLiteral::Type(Literal::Boolean(true)))]
    #[case("Tommy was a guy who says hi (x) there", PoeticLiteral::Number("a guy who says hi there".to_string()))]
    fn poetic_literals(#[case] input: &str, #[case] expected: PoeticLiteral) {
        let statements = parse_statements(input);
        let [StatementKind::PoeticLiteral(statement)] = statements.as_slice() else {
            panic!("not a poetic literal: {statements:?}");
        };

        assert_eq!(statement.target.value(), &Target::Variable(proper("Tommy")));
        assert_eq!(statement.literal.value(), &expected);
    }

    #[test]
    fn blank_line_closes_loop() {
        let statements = parse_statements("While X\nBuild X up\n\nSay X\n");
        assert_eq!(statements.len(), 2);

        let StatementKind::Loop(statement) = &statements[0] else {
            panic!("not a loop: {:?}", statements[0]);
        };
        assert_eq!(statement.kind, LoopKind::While);
        assert_eq!(statement.body.statements.len(), 1);
    }

    #[test]
    fn each_blank_line_closes_one_level() {
        let statements = parse_statements("If A\nIf B\nSay 1\n\nSay 2\n\nSay 3\n");
        assert_eq!(statements.len(), 2);

        let StatementKind::Conditional(outer) = &statements[0] else {
            panic!("not a conditional: {:?}", statements[0]);
        };
        assert_eq!(outer.body.statements.len(), 2);
        assert!(matches!(outer.body.statements[0].kind, StatementKind::Conditional(..)));
        assert!(matches!(outer.body.statements[1].kind, StatementKind::Output(..)));
        assert!(matches!(statements[1], StatementKind::Output(..)));
    }

    #[rstest]
    #[case("If X\nSay 1\nElse Say 2\n")]
    #[case("If X\nSay 1\nElse\nSay 2\n")]
    fn else_branch(#[case] input: &str) {
        let statements = parse_statements(input);
        let [StatementKind::Conditional(statement)] = statements.as_slice() else {
            panic!("not a single conditional: {statements:?}");
        };

        assert_eq!(statement.body.statements.len(), 1);
        assert_eq!(statement.else_body.as_ref().map(|block| block.statements.len()), Some(1));
    }

    #[test]
    fn else_after_blank_line_belongs_to_outer_if() {
        let statements = parse_statements("If A\nIf B\nSay 1\n\nElse\nSay 2\n");
        let [StatementKind::Conditional(outer)] = statements.as_slice() else {
            panic!("not a single conditional: {statements:?}");
        };

        let StatementKind::Conditional(inner) = &outer.body.statements[0].kind else {
            panic!("not a conditional: {:?}", outer.body.statements[0]);
        };

        assert_eq!(inner.else_body, None);
        assert!(outer.else_body.is_some());
    }

    #[test]
    fn functions_and_calls() {
        let statements = parse_statements(concat!(
            "Midnight takes your heart, and your soul\n",
            "Give back your heart with your soul\n",
            "\n",
            "Say Midnight taking 1, 2\n",
            "Say Midnight 3 and 4\n",
            "Midnight 5, 6\n",
        ));

        let StatementKind::Function(function) = &statements[0] else {
            panic!("not a function: {:?}", statements[0]);
        };
        assert_eq!(function.name.value(), &proper("Midnight"));
        assert_eq!(function.parameters.len(), 2);
        assert_eq!(function.body.statements.len(), 1);

        for statement in &statements[1..3] {
            let StatementKind::Output(output) = statement else {
                panic!("not an output: {statement:?}");
            };
            let Expression::Call(call) = output.expression.value() else {
                panic!("not a call: {:?}", output.expression);
            };
            assert_eq!(call.arguments.len(), 2);
        }

        assert!(matches!(&statements[3], StatementKind::Expression(..)));
    }

    #[test]
    fn unknown_function_name_is_a_variable() {
        assert_eq!(
            parse_expression("Midnight"),
            Expression::Variable(proper("Midnight")),
        );
    }

    #[rstest]
    #[case("Build it up", 1)]
    #[case("Build my heart up, up up", 3)]
    fn step_count(#[case] input: &str, #[case] expected: usize) {
        let statements = parse_statements(input);
        let [StatementKind::Increment(statement)] = statements.as_slice() else {
            panic!("not an increment: {statements:?}");
        };

        assert_eq!(statement.count, expected);
    }

    #[test]
    fn loop_control_forms() {
        let statements = parse_statements("While X\nBreak it down\nContinue\nTake it to the top\n");
        let StatementKind::Loop(statement) = &statements[0] else {
            panic!("not a loop: {:?}", statements[0]);
        };

        let kinds: Vec<_> = statement.body.statements.iter().map(|x| x.kind.clone()).collect();
        assert_eq!(kinds, vec![StatementKind::Break, StatementKind::Continue, StatementKind::Continue]);
    }

    #[rstest]
    #[case("Give back 5", "ReturnOutsideFunction")]
    #[case("Break", "LoopControlOutsideLoop")]
    #[case("While X\nMidnight takes Y\nBreak\n", "LoopControlOutsideLoop")]
    #[case("Put 5 in X", "ExpectedToken")]
    #[case("Say 5 6", "ExpectedToken")]
    #[case("Say", "UnexpectedEndOfFile")]
    #[case("plus 5", "UnknownStartOfStatement")]
    #[case("Tommy", "UnknownStartOfStatement")]
    #[case("Say into", "UnknownStartOfExpression")]
    #[case("Else Say 1", "UnknownStartOfStatement")]
    fn syntax_errors(#[case] input: &str, #[case] name: &str) {
        let error = parse(input).unwrap_err();
        assert_eq!(error.name(), name);
    }

    #[test]
    fn syntax_error_details() {
        let error = parse("Say 1\nPut 5 in X").unwrap_err();
        assert_eq!(error.expected(), "`into`");
        assert_eq!(error.found(), "in");
        assert_eq!(error.location(), FileLocation::new(12, 1, 6));
    }
}
