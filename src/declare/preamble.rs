//! Statements injected at the top of a declared block.

use serde_json::Value;

use crate::declare::options::OptionRecord;
use crate::lexer::quote_string;

/// Evaluable no-op that closes every rendered preamble.
pub const PLACEHOLDER: &str = "()";

/// Builds the default preamble for a block declared as `name`.
///
/// In order: the namespace declaration, the version assignment when a
/// version was given, re-installation of the keyword itself with `options`,
/// installation of each inner keyword, then the extra `options.preamble`
/// statements verbatim.
pub fn generate(
    declarator: &str,
    name: &str,
    version: Option<&str>,
    options: &OptionRecord,
) -> Vec<String> {
    let mut statements = vec![format!("package {name}")];
    if let Some(version) = version {
        statements.push(format!("version {}", quote_string(version)));
    }

    statements.push(format!(
        "declare {declarator} {}",
        encode_options(&options.to_raw())
    ));
    for entry in &options.inner {
        statements.push(format!(
            "declare {} {}",
            entry.declarator,
            encode_options(&entry.options)
        ));
    }

    statements.extend(options.preamble.iter().cloned());
    statements
}

/// Encodes raw options as a host string literal holding their JSON text.
pub fn encode_options(raw: &Value) -> String {
    quote_string(&raw.to_string())
}

/// Joins statements into injectable text ending with [`PLACEHOLDER`].
pub fn render(statements: &[String]) -> String {
    let mut text = String::from(" ");
    for statement in statements {
        text.push_str(statement);
        text.push_str("; ");
    }
    text.push_str(PLACEHOLDER);
    text.push(';');
    text
}
