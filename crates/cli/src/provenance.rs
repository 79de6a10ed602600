//! `<artifact>.provenance.json` sidecars: where an output came from.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Contents of a sidecar (and of `cli report`).
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub crate_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    #[track_caller]
    pub fn new(params: Value, outputs: Vec<String>) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            crate_version: dchull::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            params,
            outputs,
        }
    }
}

/// Write the sidecar for `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = Provenance::new(params, vec![artifact.to_string_lossy().into_owned()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
