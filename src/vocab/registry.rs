//! Vocabulary Registry
//!
//! Lookup-oriented view of a vocabulary definition. Declaration order of
//! methods and actions is preserved because the lexer builds its alternation
//! patterns from it.

use std::collections::HashMap;

use super::schema::{ActionDef, ActionKind, Attribute, MethodDef, VocabularyFile};

/// In-memory vocabulary with fast name lookups
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    name: String,
    version: Option<String>,
    methods: Vec<MethodDef>,
    actions: Vec<ActionDef>,
    method_index: HashMap<String, usize>,
    action_index: HashMap<String, usize>,
}

impl From<VocabularyFile> for Vocabulary {
    fn from(file: VocabularyFile) -> Self {
        let method_index = file
            .methods
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name.clone(), i))
            .collect();
        let action_index = file
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.clone(), i))
            .collect();

        Self {
            name: file.vocabulary.name,
            version: file.vocabulary.version,
            methods: file.methods,
            actions: file.actions,
            method_index,
            action_index,
        }
    }
}

impl Vocabulary {
    /// Load the vocabulary embedded in the binary
    pub fn embedded() -> Self {
        let embedded_toml = include_str!("../../resources/vocab/armscript.toml");

        match toml::from_str::<VocabularyFile>(embedded_toml) {
            Ok(file) => Vocabulary::from(file),
            Err(e) => {
                log::warn!("Failed to parse embedded vocabulary: {e}. Using built-in fallback.");
                Self::builtin_fallback()
            }
        }
    }

    /// Built-in vocabulary in case the embedded TOML fails to parse.
    /// Carries the complete method and action set, without descriptions.
    fn builtin_fallback() -> Self {
        let method = |name: &str, attribute| MethodDef {
            name: name.to_string(),
            attribute,
            description: None,
        };
        let action = |name: &str, kind| ActionDef {
            name: name.to_string(),
            kind,
            description: None,
        };

        Vocabulary::from(VocabularyFile {
            vocabulary: super::schema::VocabularyMeta {
                name: "armscript".to_string(),
                version: Some("builtin-fallback".to_string()),
                description: None,
            },
            methods: vec![
                method("base", Attribute::Base),
                method("cuerpo", Attribute::Body),
                method("garra", Attribute::Gripper),
                method("velocidad", Attribute::Velocity),
            ],
            actions: vec![
                action("iniciar", ActionKind::Start),
                action("cerrarGarra", ActionKind::CloseGripper),
                action("abrirGarra", ActionKind::OpenGripper),
                action("print", ActionKind::Dump),
            ],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Look up a method definition by its surface name
    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.method_index.get(name).map(|&i| &self.methods[i])
    }

    /// Look up an action definition by its surface name
    pub fn action(&self, name: &str) -> Option<&ActionDef> {
        self.action_index.get(name).map(|&i| &self.actions[i])
    }

    /// Resolve a method lexeme to the attribute it sets
    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        self.method(name).map(|m| m.attribute)
    }

    /// Resolve an action lexeme to its kind
    pub fn action_kind(&self, name: &str) -> Option<ActionKind> {
        self.action(name).map(|a| a.kind)
    }

    /// Description for a method or action lexeme, if the vocabulary has one
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.method(name)
            .and_then(|m| m.description.as_deref())
            .or_else(|| self.action(name).and_then(|a| a.description.as_deref()))
    }

    /// Regex alternation over method names, in declaration order
    pub fn method_pattern(&self) -> String {
        alternation(self.methods.iter().map(|m| m.name.as_str()))
    }

    /// Regex alternation over action names, in declaration order
    pub fn action_pattern(&self) -> String {
        alternation(self.actions.iter().map(|a| a.name.as_str()))
    }
}

fn alternation<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|")
}
