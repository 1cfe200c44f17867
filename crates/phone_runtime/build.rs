use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    icon: String,
    accent: String,
    in_home: bool,
    order: u32,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = ["camera", "assistant", "browser", "settings", "gallery"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect();

    let builtin_dir = root.join("manifests");
    println!("cargo:rerun-if-changed={}", builtin_dir.display());
    let mut builtin: Vec<PathBuf> = fs::read_dir(&builtin_dir)
        .unwrap_or_else(|err| panic!("failed to list {}: {err}", builtin_dir.display()))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".app.manifest.toml"))
        })
        .collect();
    builtin.sort();
    paths.extend(builtin);
    paths
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen_ids = BTreeSet::new();
    let mut seen_orders = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                manifest.schema_version
            );
        }
        if manifest.display_name.trim().is_empty() {
            panic!("empty display_name in {}", path.display());
        }
        if !seen_ids.insert(manifest.app_id.clone()) {
            panic!("duplicate app_id `{}` in {}", manifest.app_id, path.display());
        }
        if !seen_orders.insert(manifest.order) {
            panic!("duplicate order {} in {}", manifest.order, path.display());
        }
        manifests.push(manifest);
    }

    manifests.sort_by_key(|manifest| manifest.order);
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
