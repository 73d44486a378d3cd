// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use crate::{Block, Statement};

/// A parsed source file.
#[derive(Debug, Default, Clone)]
pub struct Program {
    path: PathBuf,
    block: Block,
}

impl Program {
    #[must_use]
    pub fn new(path: PathBuf, block: Block) -> Self {
        Self {
            path,
            block,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn block(&self) -> &Block {
        &self.block
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.block.statements
    }
}
