use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KINDS: [&str; 4] = ["pdf", "iframe", "internal", "external"];
const INTERNAL_KEYS: [&str; 6] = ["finder", "terminal", "mail", "notes", "admin", "admin-cms"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowSize {
    w: i32,
    h: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogApp {
    id: String,
    name: String,
    kind: String,
    window_title: String,
    default_size: WindowSize,
    #[serde(default)]
    desktop: bool,
    #[serde(default)]
    dock: bool,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    internal_key: Option<String>,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    apps: Vec<CatalogApp>,
}

fn validate(apps: &[CatalogApp], path: &str) {
    let mut seen = HashSet::new();
    for app in apps {
        if app.id.trim().is_empty() {
            panic!("{path}: app with empty id");
        }
        if !seen.insert(app.id.as_str()) {
            panic!("{path}: duplicate app id `{}`", app.id);
        }
        if !KINDS.contains(&app.kind.as_str()) {
            panic!("{path}: app `{}` has unknown kind `{}`", app.id, app.kind);
        }
        if app.default_size.w <= 0 || app.default_size.h <= 0 {
            panic!("{path}: app `{}` has a non-positive default size", app.id);
        }
        match app.kind.as_str() {
            "internal" => match app.internal_key.as_deref() {
                Some(key) if INTERNAL_KEYS.contains(&key) => {}
                other => panic!(
                    "{path}: internal app `{}` needs a known internal_key, found {other:?}",
                    app.id
                ),
            },
            _ if app.url.as_deref().map_or(true, |url| url.trim().is_empty()) => {
                panic!("{path}: {} app `{}` needs a url", app.kind, app.id)
            }
            _ => {}
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }
    if catalog.apps.is_empty() {
        panic!("{}: fallback catalog must list at least one app", path.display());
    }
    validate(&catalog.apps, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize fallback catalog");
    let generated = format!(
        "/// Build-time generated fallback app catalog JSON.\n\
pub const FALLBACK_APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
