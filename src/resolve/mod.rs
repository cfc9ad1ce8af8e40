//! Field resolution: project one record into the flat field set for one
//! language.
//!
//! A record mixes plain field names (`title`) with language-suffixed ones
//! (`title-de`). For a target language, the suffixed variant is stripped
//! and wins; variants of every other configured language must not leak in
//! under any name. Three keys are always injected: `id`, `language` (the
//! current tag) and `languages` (all configured tags, in order).

use serde_json::{Map, Value};

/// Compute the resolved field set for one (record, language) pair.
///
/// Rules, per field name:
/// 1. `name-<language>` is stripped to `name` and included with its value.
/// 2. `name-<other configured language>` is excluded entirely. There is no
///    fallback for the dropped key; a separate plain field of the same
///    stripped name still applies on its own.
/// 3. Anything else is included verbatim.
///
/// The reserved keys are seeded first, so a row field whose resolved name
/// collides with `id`, `language` or `languages` overwrites the injected
/// value. Language overrides are applied after shared fields, so a plain
/// field never shadows its localized variant, whatever the column order.
pub fn resolve_fields(
    record: &Map<String, Value>,
    id: &str,
    language: &str,
    languages: &[String],
) -> Map<String, Value> {
    let suffix = format!("-{language}");

    let mut resolved = Map::new();
    resolved.insert("id".to_string(), Value::String(id.to_string()));
    resolved.insert("language".to_string(), Value::String(language.to_string()));
    resolved.insert(
        "languages".to_string(),
        Value::Array(languages.iter().cloned().map(Value::String).collect()),
    );

    // Shared fields: no recognized language suffix at all.
    'fields: for (name, value) in record {
        if name.ends_with(&suffix) {
            continue;
        }
        for other in languages {
            if other != language && name.ends_with(&format!("-{other}")) {
                continue 'fields;
            }
        }
        resolved.insert(name.clone(), value.clone());
    }

    // Overrides for the target language.
    for (name, value) in record {
        if let Some(stripped) = name.strip_suffix(&suffix) {
            resolved.insert(stripped.to_string(), value.clone());
        }
    }

    resolved
}
