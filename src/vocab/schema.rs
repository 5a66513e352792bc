//! Vocabulary Schema Types
//!
//! Declarative definitions for the fixed method and action vocabulary of the
//! scripting language (matches the embedded TOML document).

use std::fmt;

use serde::Deserialize;

/// Root vocabulary file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularyFile {
    pub vocabulary: VocabularyMeta,
    pub methods: Vec<MethodDef>,
    pub actions: Vec<ActionDef>,
}

/// Vocabulary metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularyMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// An attribute-setting method like `velocidad` or `base`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MethodDef {
    pub name: String,
    pub attribute: Attribute,
    pub description: Option<String>,
}

/// A parameterless action like `iniciar` or `cerrarGarra`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActionDef {
    pub name: String,
    pub kind: ActionKind,
    pub description: Option<String>,
}

/// The four mutable robot attributes
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Velocity,
    Base,
    Body,
    Gripper,
}

impl Attribute {
    /// Surface-language name, as it appears in scripts and diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Velocity => "velocidad",
            Attribute::Base => "base",
            Attribute::Body => "cuerpo",
            Attribute::Gripper => "garra",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The robot actions
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Start,
    CloseGripper,
    OpenGripper,
    Dump,
}
