// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

use crate::DEFAULT_CALL_DEPTH_LIMIT;

/// The contents of `Rockstar.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub run: ConfigSectionRun,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRun {
    /// Extension of the files picked up when no files are given.
    pub extension: String,
    pub stop_on_error: bool,
    pub color: bool,
    /// How deeply function calls may nest before the program is stopped.
    pub call_depth_limit: usize,
}

impl Default for ConfigSectionRun {
    fn default() -> Self {
        Self {
            extension: "rockstar".to_string(),
            stop_on_error: false,
            color: true,
            call_depth_limit: DEFAULT_CALL_DEPTH_LIMIT,
        }
    }
}
