use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// What produced a result; recorded in the sidecar next to `--out` files.
pub struct Meta {
    pub command: &'static str,
    pub params: Value,
}

impl Meta {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Print `report` as pretty JSON to stdout, or write it to `out` together
/// with a `<stem>.meta.json` sidecar. Returns the sidecar path if one was written.
pub fn emit<T: Serialize>(report: &T, out: Option<&Path>, meta: Meta) -> Result<Option<PathBuf>> {
    let body = serde_json::to_vec_pretty(report)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(None);
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;

    let meta_path = sidecar_path(out);
    let doc = json!({
        "weyl_version": weyl::VERSION,
        "command": meta.command,
        "params": meta.params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&meta_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", meta_path.display()))?;
    tracing::info!(out = %out.display(), meta = %meta_path.display(), "wrote");
    Ok(Some(meta_path))
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".meta.json");
    artifact.with_file_name(name)
}
