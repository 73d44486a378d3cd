// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, fmt::Display, rc::{Rc, Weak}};

use crate::{Block, Identifier, Value};

/// The name a variable is stored under. Case is folded and articles are dropped,
/// so `A Boy`, `the boy` and `my BOY` all become `boy`, while `Doctor Feelgood`
/// becomes `doctorfeelgood`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalName(String);

impl CanonicalName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Identifier> for CanonicalName {
    fn from(identifier: &Identifier) -> Self {
        match identifier {
            Identifier::Common { noun, .. } => Self(noun.to_lowercase()),
            Identifier::Proper(words) => Self(words.iter().map(|word| word.to_lowercase()).collect()),
        }
    }
}

impl Display for CanonicalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct Function {
    pub name: CanonicalName,
    pub parameters: Vec<CanonicalName>,
    pub body: Block,

    /// The environment the function was defined in. The function is bound in
    /// that same environment, so it is alive whenever the function can be found.
    pub environment: Weak<RefCell<Environment>>,
}

#[derive(Debug, Clone)]
pub enum Binding {
    Value(Value),
    Function(Rc<Function>),
}

pub type EnvironmentRef = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    parent: Option<EnvironmentRef>,
    bindings: HashMap<CanonicalName, Binding>,
    last_noun: Option<CanonicalName>,
}

impl Environment {
    #[must_use]
    pub fn new_global() -> EnvironmentRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A call frame, reading through to the environment of the function.
    #[must_use]
    pub fn new_frame(parent: EnvironmentRef) -> EnvironmentRef {
        Rc::new(RefCell::new(Self {
            parent: Some(parent),
            bindings: HashMap::new(),
            last_noun: None,
        }))
    }

    /// Binds `name` in this environment, never in a parent, and makes it the
    /// noun pronouns refer to.
    pub fn assign(&mut self, name: CanonicalName, value: Value) {
        self.bindings.insert(name.clone(), Binding::Value(value));
        self.last_noun = Some(name);
    }

    /// Like [`Self::assign`], without touching the last noun.
    pub fn rebind(&mut self, name: CanonicalName, value: Value) {
        self.bindings.insert(name, Binding::Value(value));
    }

    pub fn define_function(&mut self, function: Rc<Function>) {
        self.bindings.insert(function.name.clone(), Binding::Function(function));
    }

    #[must_use]
    pub fn find(&self, name: &CanonicalName) -> Option<Binding> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.clone());
        }

        self.parent.as_ref()?.borrow().find(name)
    }

    /// The noun a pronoun stands for, looking outward when this scope has none.
    #[must_use]
    pub fn last_noun(&self) -> Option<CanonicalName> {
        if let Some(noun) = &self.last_noun {
            return Some(noun.clone());
        }

        self.parent.as_ref()?.borrow().last_noun()
    }
}
