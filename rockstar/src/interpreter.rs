// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use crate::{
    parse_number_literal, Binding, Block, CallExpression, CanonicalName, Console, Environment, EnvironmentRef, Expression, FileRange, Function, FunctionStatement, IfStatement, InputStatement, LoopKind, LoopStatement, Program, Ranged, RuntimeError, Statement, StatementKind, StepStatement, Target, Value
};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// How deeply calls may nest before [`RuntimeError::CallDepthExceeded`].
pub const DEFAULT_CALL_DEPTH_LIMIT: usize = 1000;

/// Executes one program. Every program should get its own interpreter, since
/// the global environment lives as long as the interpreter does.
pub struct Interpreter<C>
        where C: Console {
    console: C,
    environment: EnvironmentRef,
    call_depth: usize,
    call_depth_limit: usize,
}

impl<C> Interpreter<C>
        where C: Console {
    pub fn new(console: C) -> Self {
        Self {
            console,
            environment: Environment::new_global(),
            call_depth: 0,
            call_depth_limit: DEFAULT_CALL_DEPTH_LIMIT,
        }
    }

    #[must_use]
    pub fn with_call_depth_limit(self, call_depth_limit: usize) -> Self {
        Self {
            call_depth_limit,
            ..self
        }
    }

    pub fn execute_program(&mut self, program: &Program) -> RuntimeResult<()> {
        log::trace!("Executing {}", program.path().display());

        // Top-level `Give back`, `Break` and `Continue` are rejected while parsing.
        self.execute_block(program.block())?;
        Ok(())
    }

    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    fn execute_block(&mut self, block: &Block) -> RuntimeResult<StatementResult> {
        for statement in &block.statements {
            match self.execute_statement(statement)? {
                StatementResult::Normal => (),
                result => return Ok(result),
            }
        }

        Ok(StatementResult::Normal)
    }

    fn execute_statement(&mut self, statement: &Statement) -> RuntimeResult<StatementResult> {
        log::trace!("Executing statement at {}", statement.range.start());

        match &statement.kind {
            StatementKind::Assignment(assignment) => {
                let value = self.execute_expression(&assignment.value)?;
                self.execute_assign(&assignment.target, value)?;
            }

            StatementKind::Break => return Ok(StatementResult::Break),

            StatementKind::Conditional(conditional) => return self.execute_if_statement(conditional),

            StatementKind::Continue => return Ok(StatementResult::Continue),

            StatementKind::Decrement(step) => self.execute_step(step, -1.0)?,

            StatementKind::Expression(expression) => {
                self.execute_expression(expression)?;
            }

            StatementKind::Function(function) => self.define_function(function),

            StatementKind::Increment(step) => self.execute_step(step, 1.0)?,

            StatementKind::Input(input) => self.execute_input(input, statement.range)?,

            StatementKind::Loop(statement) => return self.execute_loop(statement),

            StatementKind::Output(output) => {
                let value = self.execute_expression(&output.expression)?;
                self.console.write_line(&value.to_string())
                    .map_err(|source| RuntimeError::Console { source, range: output.expression.range() })?;
            }

            StatementKind::PoeticLiteral(poetic) => {
                let value = Value::from(poetic.literal.value());
                self.execute_assign(&poetic.target, value)?;
            }

            StatementKind::Return(statement) => {
                let value = self.execute_expression(&statement.expression)?;
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Normal)
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> RuntimeResult<StatementResult> {
        if self.execute_expression(&statement.condition)?.is_truthy() {
            return self.execute_block(&statement.body);
        }

        match &statement.else_body {
            Some(else_body) => self.execute_block(else_body),
            None => Ok(StatementResult::Normal),
        }
    }

    fn execute_loop(&mut self, statement: &LoopStatement) -> RuntimeResult<StatementResult> {
        let mut iterations = 0_usize;

        loop {
            let condition = self.execute_expression(&statement.condition)?.is_truthy();
            let proceed = match statement.kind {
                LoopKind::While => condition,
                LoopKind::Until => !condition,
            };

            if !proceed {
                break;
            }

            iterations += 1;

            match self.execute_block(&statement.body)? {
                StatementResult::Normal | StatementResult::Continue => (),
                StatementResult::Break => break,
                StatementResult::Return(value) => return Ok(StatementResult::Return(value)),
            }
        }

        log::debug!("Loop at {} ended after {iterations} iteration(s)", statement.condition.range().start());
        Ok(StatementResult::Normal)
    }

    fn define_function(&mut self, statement: &FunctionStatement) {
        let function = Function {
            name: CanonicalName::from(statement.name.value()),
            parameters: statement.parameters.iter().map(|param| CanonicalName::from(param.value())).collect(),
            body: statement.body.clone(),
            environment: Rc::downgrade(&self.environment),
        };

        log::debug!("Defined function {} taking {} parameter(s)", function.name, function.parameters.len());
        self.environment.borrow_mut().define_function(Rc::new(function));
    }

    /// `Build X up` and `Knock X down`.
    fn execute_step(&mut self, statement: &StepStatement, direction: f64) -> RuntimeResult<()> {
        let range = statement.target.range();
        let name = self.resolve_target(&statement.target)?;
        let value = self.read_variable(&name, range)?;

        let Some(number) = value.to_number() else {
            return Err(RuntimeError::TypeMismatch {
                message: format!("Cannot step `{name}`, it holds a {} and not a number", value.typ()),
                range,
            });
        };

        let result = number + direction * statement.count as f64;
        self.environment.borrow_mut().rebind(name, Value::Number(result));
        Ok(())
    }

    fn execute_input(&mut self, statement: &InputStatement, range: FileRange) -> RuntimeResult<()> {
        let line = self.console.read_line()
            .map_err(|source| RuntimeError::Console { source, range })?;

        let Some(line) = line else {
            return Err(RuntimeError::InputExhausted { range });
        };

        let Some(target) = &statement.target else {
            log::trace!("Discarding input line {line:?}");
            return Ok(());
        };

        let value = match parse_number_literal(&line) {
            Some(number) => Value::Number(number),
            None => Value::String(line),
        };

        self.execute_assign(target, value)
    }

    fn execute_assign(&mut self, target: &Ranged<Target>, value: Value) -> RuntimeResult<()> {
        let name = self.resolve_target(target)?;
        self.environment.borrow_mut().assign(name, value);
        Ok(())
    }

    fn resolve_target(&self, target: &Ranged<Target>) -> RuntimeResult<CanonicalName> {
        match target.value() {
            Target::Variable(identifier) => Ok(CanonicalName::from(identifier)),
            Target::Pronoun => self.resolve_pronoun(target.range()),
        }
    }

    fn resolve_pronoun(&self, range: FileRange) -> RuntimeResult<CanonicalName> {
        self.environment.borrow()
            .last_noun()
            .ok_or(RuntimeError::UnresolvedPronoun { range })
    }

    fn read_variable(&self, name: &CanonicalName, range: FileRange) -> RuntimeResult<Value> {
        match self.environment.borrow().find(name) {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Function(..)) => Err(RuntimeError::TypeMismatch {
                message: format!("`{name}` is a function, call it with `taking`"),
                range,
            }),
            None => Err(RuntimeError::UnknownVariable { name: name.clone(), range }),
        }
    }

    fn execute_expression(&mut self, expression: &Ranged<Expression>) -> RuntimeResult<Value> {
        let range = expression.range();

        match expression.value() {
            Expression::Literal(literal) => Ok(Value::from(literal)),

            Expression::Variable(identifier) => self.read_variable(&CanonicalName::from(identifier), range),

            Expression::Pronoun => {
                let name = self.resolve_pronoun(range)?;
                self.read_variable(&name, range)
            }

            Expression::BinaryOp(expression) => {
                let lhs = self.execute_expression(&expression.lhs)?;
                let rhs = self.execute_expression(&expression.rhs)?;

                lhs.apply(*expression.operator.value(), &rhs)
                    .map_err(|e| RuntimeError::from_value_error(e, range))
            }

            Expression::Comparison(expression) => {
                let lhs = self.execute_expression(&expression.lhs)?;
                let rhs = self.execute_expression(&expression.rhs)?;

                lhs.compare(&rhs, *expression.comparison.value())
                    .map(Value::Boolean)
                    .map_err(|e| RuntimeError::from_value_error(e, range))
            }

            Expression::Call(call) => self.execute_call(call, range),
        }
    }

    fn execute_call(&mut self, call: &CallExpression, range: FileRange) -> RuntimeResult<Value> {
        let name = CanonicalName::from(call.name.value());

        let binding = self.environment.borrow().find(&name);
        let Some(Binding::Function(function)) = binding else {
            return Err(RuntimeError::UndefinedFunction { name, range: call.name.range() });
        };

        if function.parameters.len() != call.arguments.len() {
            return Err(RuntimeError::ArityMismatch {
                name,
                expected: function.parameters.len(),
                actual: call.arguments.len(),
                range,
            });
        }

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.execute_expression(argument)?);
        }

        if self.call_depth >= self.call_depth_limit {
            return Err(RuntimeError::CallDepthExceeded { name, limit: self.call_depth_limit, range });
        }

        let Some(defining_environment) = function.environment.upgrade() else {
            return Err(RuntimeError::UndefinedFunction { name, range: call.name.range() });
        };

        let frame = Environment::new_frame(defining_environment);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            frame.borrow_mut().assign(parameter.clone(), argument);
        }

        log::debug!("Calling {name} with {} argument(s)", call.arguments.len());

        let caller_environment = std::mem::replace(&mut self.environment, frame);
        self.call_depth += 1;
        let result = self.execute_block(&function.body);
        self.call_depth -= 1;
        self.environment = caller_environment;

        let value = match result? {
            StatementResult::Return(value) => value,
            _ => Value::Mysterious,
        };

        log::debug!("{name} gave back {value}");
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum StatementResult {
    Normal,
    Return(Value),
    Break,
    Continue,
}
