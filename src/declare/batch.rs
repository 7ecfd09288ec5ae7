//! Installing several keywords from shared options.

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::declare::error::ConfigurationError;
use crate::declare::host::InstallTarget;
use crate::declare::install::{install_record, Declarator};
use crate::declare::options::{normalize, raw_fields, resolve_inner, ALIAS, INNER, PREAMBLE};
use crate::declare::registry::DeclaratorRegistry;

/// Installs one keyword per entry of `blocks`, an object from alias to
/// option deltas, each merged over `shared`.
///
/// Every entry is validated before the first install, `inner` keywords
/// included; on error nothing is installed.
pub fn install_multiple(
    declarator: Rc<dyn Declarator>,
    registry: &DeclaratorRegistry,
    target: &mut dyn InstallTarget,
    namespace: &str,
    blocks: &Value,
    shared: &Value,
) -> Result<(), ConfigurationError> {
    let Value::Object(blocks) = blocks else {
        return Err(ConfigurationError::InvalidBlocks {
            declarator: declarator.type_name().to_string(),
            found: blocks.to_string(),
        });
    };
    let shared = raw_fields(declarator.as_ref(), shared)?;

    let records = blocks
        .iter()
        .map(|(alias, delta)| {
            let delta = raw_fields(declarator.as_ref(), delta)?;
            let merged = merge_options(&shared, &delta, alias);
            let record = normalize(declarator.as_ref(), &Value::Object(merged))?;
            resolve_inner(registry, &record)?;
            Ok(record)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for record in records {
        install_record(Rc::clone(&declarator), target, namespace, record);
    }
    Ok(())
}

/// Layers `delta` over `shared` for the keyword spelled `alias`.
///
/// List options are concatenated shared-first; any other delta field
/// replaces the shared one. The alias always comes from the entry key.
pub fn merge_options(
    shared: &Map<String, Value>,
    delta: &Map<String, Value>,
    alias: &str,
) -> Map<String, Value> {
    let mut merged = shared.clone();
    for (key, value) in delta {
        let combined = match (key.as_str(), merged.get(key), value) {
            (INNER | PREAMBLE, Some(Value::Array(base)), Value::Array(extra)) => {
                Value::Array(base.iter().chain(extra).cloned().collect())
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged.insert(ALIAS.to_string(), Value::String(alias.to_string()));
    merged
}
