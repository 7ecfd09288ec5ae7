//! Keyword configuration.
//!
//! Raw options arrive as JSON: `null` for all defaults, an object of fields,
//! or an array as shorthand for `inner` alone. [`normalize`] turns them into
//! an [`OptionRecord`] with every field present, or fails without side
//! effects. [`resolve_inner`] then checks the `inner` entries against the
//! types they name.

use nom::combinator::all_consuming;
use serde_json::{json, Map, Value};

use crate::declare::error::ConfigurationError;
use crate::declare::install::Declarator;
use crate::declare::registry::DeclaratorRegistry;
use crate::declare::strip::{dotted_identifier, identifier};

/// Key of the alias option.
pub const ALIAS: &str = "alias";
/// Key of the nested keyword list.
pub const INNER: &str = "inner";
/// Key of the extra preamble statements.
pub const PREAMBLE: &str = "preamble";

const KNOWN_OPTIONS: [&str; 3] = [ALIAS, INNER, PREAMBLE];

/// A keyword to install inside every block of the outer keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerKeyword {
    /// Registry name of the installing type.
    pub declarator: String,
    /// Raw options as written. [`resolve_inner`] checks that they
    /// normalize for `declarator`.
    pub options: Value,
}

/// Normalized configuration of one installed keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRecord {
    /// Spelling the keyword is installed under.
    pub alias: String,
    /// Keywords made available inside the block, in order.
    pub inner: Vec<InnerKeyword>,
    /// Statements appended after the generated preamble.
    pub preamble: Vec<String>,
}

impl OptionRecord {
    /// Converts back to raw form; [`normalize`] of the result is `self`.
    pub fn to_raw(&self) -> Value {
        let inner: Vec<Value> = self
            .inner
            .iter()
            .flat_map(|entry| {
                [
                    Value::String(entry.declarator.clone()),
                    entry.options.clone(),
                ]
            })
            .collect();
        json!({
            ALIAS: self.alias,
            INNER: inner,
            PREAMBLE: self.preamble,
        })
    }
}

/// Validates and defaults raw options for `declarator`.
pub fn normalize(
    declarator: &dyn Declarator,
    raw: &Value,
) -> Result<OptionRecord, ConfigurationError> {
    let fields = raw_fields(declarator, raw)?;
    if let Some(key) = fields
        .keys()
        .find(|key| !KNOWN_OPTIONS.contains(&key.as_str()))
    {
        return Err(ConfigurationError::UnknownOption {
            key: key.clone(),
            declarator: declarator.type_name().to_string(),
        });
    }

    Ok(OptionRecord {
        alias: normalize_alias(declarator, fields.get(ALIAS))?,
        inner: normalize_inner(declarator, fields.get(INNER))?,
        preamble: normalize_preamble(declarator, fields.get(PREAMBLE))?,
    })
}

/// Checks every `inner` entry of `record`, and theirs in turn: the type
/// must be registered and its options must normalize for that type.
pub fn resolve_inner(
    registry: &DeclaratorRegistry,
    record: &OptionRecord,
) -> Result<(), ConfigurationError> {
    for entry in &record.inner {
        let declarator = registry.resolve(&entry.declarator)?;
        let nested = normalize(declarator.as_ref(), &entry.options)?;
        resolve_inner(registry, &nested)?;
    }
    Ok(())
}

/// Returns `true` when `name` is a valid keyword alias.
pub fn is_valid_alias(name: &str) -> bool {
    all_consuming(identifier)(name).is_ok()
}

/// Expands raw options into a field mapping.
pub(crate) fn raw_fields(
    declarator: &dyn Declarator,
    raw: &Value,
) -> Result<Map<String, Value>, ConfigurationError> {
    match raw {
        Value::Null => Ok(Map::new()),
        Value::Object(fields) => Ok(fields.clone()),
        Value::Array(_) => {
            let mut fields = Map::new();
            fields.insert(INNER.to_string(), raw.clone());
            Ok(fields)
        }
        other => Err(ConfigurationError::InvalidOptions {
            declarator: declarator.type_name().to_string(),
            found: other.to_string(),
        }),
    }
}

fn normalize_alias(
    declarator: &dyn Declarator,
    value: Option<&Value>,
) -> Result<String, ConfigurationError> {
    let alias = match value {
        None | Some(Value::Null) => return Ok(declarator.default_keyword_name().to_string()),
        Some(Value::String(alias)) => alias,
        Some(other) => {
            return Err(ConfigurationError::AliasNotString {
                declarator: declarator.type_name().to_string(),
                found: other.to_string(),
            })
        }
    };

    if !is_valid_alias(alias) {
        return Err(ConfigurationError::InvalidAlias {
            alias: alias.clone(),
            declarator: declarator.type_name().to_string(),
        });
    }
    Ok(alias.clone())
}

fn normalize_inner(
    declarator: &dyn Declarator,
    value: Option<&Value>,
) -> Result<Vec<InnerKeyword>, ConfigurationError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConfigurationError::InnerNotList {
                declarator: declarator.type_name().to_string(),
                found: other.to_string(),
            })
        }
    };

    let mut entries = Vec::new();
    let mut items = items.iter().peekable();
    while let Some(item) = items.next() {
        let name = match item {
            Value::String(name) if all_consuming(dotted_identifier)(name.as_str()).is_ok() => name,
            other => {
                return Err(ConfigurationError::InvalidInnerEntry {
                    declarator: declarator.type_name().to_string(),
                    found: other.to_string(),
                })
            }
        };
        let options = items
            .next_if(|next| matches!(next, Value::Object(_) | Value::Array(_) | Value::Null))
            .cloned()
            .unwrap_or(Value::Null);
        entries.push(InnerKeyword {
            declarator: name.clone(),
            options,
        });
    }
    Ok(entries)
}

fn normalize_preamble(
    declarator: &dyn Declarator,
    value: Option<&Value>,
) -> Result<Vec<String>, ConfigurationError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConfigurationError::PreambleNotList {
                declarator: declarator.type_name().to_string(),
                found: other.to_string(),
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(statement) => Ok(statement.clone()),
            other => Err(ConfigurationError::PreambleEntryNotString {
                declarator: declarator.type_name().to_string(),
                found: other.to_string(),
            }),
        })
        .collect()
}
