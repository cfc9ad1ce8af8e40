//! Template helper functions.
//!
//! The three helpers the templates get on top of the resolved fields:
//! `List` splits a multi-line cell, `HasAsset` probes the asset directory,
//! `Empty` tests for blank strings.

use std::path::{Path, PathBuf};

use minijinja::value::{Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

/// Register the helper functions on a template environment.
///
/// `asset_dir` is optional; a template that calls `HasAsset` without one
/// configured fails at render time.
pub fn register(env: &mut Environment<'static>, asset_dir: Option<PathBuf>) {
    env.add_function("List", list);
    env.add_function("HasAsset", move |name: String| {
        has_asset(asset_dir.as_deref(), &name)
    });
    env.add_function("Empty", empty);
}

fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split a cell on newlines into trimmed, non-empty lines, in order.
fn list(lines: String) -> Vec<String> {
    lines
        .split('\n')
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a file of that name exists (and is not a directory) under the
/// asset directory.
fn has_asset(asset_dir: Option<&Path>, asset: &str) -> Result<bool, Error> {
    let Some(dir) = asset_dir else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "if you want to work with assets please define asset-dir",
        ));
    };
    Ok(dir.join(asset).is_file())
}

/// True only for a string value that trims (spaces and tabs) to nothing.
/// Every non-string value, undefined included, is not empty.
fn empty(value: Value) -> bool {
    match value.kind() {
        ValueKind::String => value.as_str().is_some_and(|s| trim_blank(s).is_empty()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_splits_trims_and_drops_empties() {
        assert_eq!(list("a\n\nb \t\n".to_string()), vec!["a", "b"]);
    }

    #[test]
    fn test_list_preserves_order() {
        assert_eq!(
            list("one\ntwo\nthree".to_string()),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_list_of_blank_input_is_empty() {
        assert!(list(" \t\n\t ".to_string()).is_empty());
    }

    #[test]
    fn test_empty_on_blank_string() {
        assert!(empty(Value::from("   ")));
        assert!(empty(Value::from("\t \t")));
        assert!(empty(Value::from("")));
    }

    #[test]
    fn test_empty_on_non_blank_string() {
        assert!(!empty(Value::from("x")));
    }

    #[test]
    fn test_empty_on_non_string_values() {
        assert!(!empty(Value::from(42)));
        assert!(!empty(Value::from(true)));
        assert!(!empty(Value::UNDEFINED));
        assert!(!empty(Value::from(())));
    }

    #[test]
    fn test_has_asset() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"png").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        assert!(has_asset(Some(dir.path()), "logo.png").unwrap());
        assert!(!has_asset(Some(dir.path()), "missing.png").unwrap());
        // Directories do not count as assets.
        assert!(!has_asset(Some(dir.path()), "subdir").unwrap());
    }

    #[test]
    fn test_has_asset_without_asset_dir_fails() {
        let err = has_asset(None, "logo.png").unwrap_err();
        assert!(err.to_string().contains("asset-dir"));
    }

    #[test]
    fn test_functions_usable_from_templates() {
        let mut env = Environment::new();
        register(&mut env, None);
        env.add_template_owned(
            "t.txt".to_string(),
            "{% for item in List(items) %}[{{ item }}]{% endfor %}{{ Empty(blank) }}".to_string(),
        )
        .unwrap();

        let out = env
            .get_template("t.txt")
            .unwrap()
            .render(minijinja::context! { items => "a\n\nb \t\n", blank => "  " })
            .unwrap();
        assert_eq!(out, "[a][b]true");
    }
}
