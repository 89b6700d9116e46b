//! Typed arguments parsed out of placeholders.

use serde::{Serialize, Serializer};
use std::fmt;

/// The value type of an argument.
///
/// A `Datetime` always carries its format, so a datetime argument without
/// one cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgumentType {
    /// A single line of free text.
    String,
    /// One or more entries, rendered joined by `", "`.
    List,
    /// The current time, rendered with `format`.
    Datetime { format: String },
}

impl ArgumentType {
    /// The type tag as written in a template.
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentType::String => "string",
            ArgumentType::List => "list",
            ArgumentType::Datetime { .. } => "datetime",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of a property, keyed by its name in the template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Example input shown when prompting.
    Example,
    /// Longer description shown when prompting.
    Describe,
    /// Value used when the prompt is answered with nothing.
    Default,
    /// Datetime format.
    Format,
    /// Any other property name, kept so callers can decide what to do with it.
    Other(String),
}

impl PropertyKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "example" => PropertyKind::Example,
            "describe" => PropertyKind::Describe,
            "default" => PropertyKind::Default,
            "format" => PropertyKind::Format,
            other => PropertyKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PropertyKind::Example => "example",
            PropertyKind::Describe => "describe",
            PropertyKind::Default => "default",
            PropertyKind::Format => "format",
            PropertyKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PropertyKind::Other(_))
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A named attribute attached to an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "name")]
    pub kind: PropertyKind,
    pub value: String,
}

impl Property {
    pub fn name(&self) -> &str {
        self.kind.name()
    }
}

/// Ordered property map.
///
/// Entries keep the position where their kind was first seen. Setting a kind
/// that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties(Vec<Property>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: PropertyKind, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|p| p.kind == kind) {
            Some(existing) => existing.value = value,
            None => self.0.push(Property { kind, value }),
        }
    }

    pub fn get(&self, kind: &PropertyKind) -> Option<&str> {
        self.0
            .iter()
            .find(|p| &p.kind == kind)
            .map(|p| p.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One uniquely named placeholder and everything declared on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: ArgumentType,
    pub properties: Properties,
}

impl Argument {
    /// Create an argument with no properties.
    pub fn new(name: impl Into<String>, arg_type: ArgumentType) -> Self {
        Self {
            name: name.into(),
            arg_type,
            properties: Properties::new(),
        }
    }

    pub fn example(&self) -> Option<&str> {
        self.properties.get(&PropertyKind::Example)
    }

    pub fn description(&self) -> Option<&str> {
        self.properties.get(&PropertyKind::Describe)
    }

    pub fn default_value(&self) -> Option<&str> {
        self.properties.get(&PropertyKind::Default)
    }
}
