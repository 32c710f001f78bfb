use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    forms: BTreeMap<String, String>,
    configs: BTreeMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a BTreeMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// A membership application and the first failure it should produce.
#[derive(Debug, Clone, Deserialize)]
pub struct FormCase {
    /// Field values keyed by input name.
    pub fields: serde_json::Map<String, serde_json::Value>,
    pub expected: Option<ExpectedFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedFailure {
    pub field: String,
    pub message: String,
}

impl FormCase {
    /// Field pairs as strings; non-string JSON values are skipped.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect()
    }
}

pub mod forms {
    use super::*;

    /// Names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.forms.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<FormCase> {
        let rel = lookup(&MANIFEST.forms, "form", name)?;
        super::load_json(rel)
    }

    pub fn all() -> Result<Vec<(String, FormCase)>> {
        keys()
            .into_iter()
            .map(|k| load(&k).map(|case| (k, case)))
            .collect()
    }
}

pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }
}
