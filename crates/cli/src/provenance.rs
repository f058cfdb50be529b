//! `<stem>.provenance.json` sidecars for files written by `planar merge --out`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    planar_version: &'static str,
    command: &'a str,
    tag: Option<&'a str>,
    params: &'a Value,
    output: String,
}

/// Record which command, inputs and code revision produced `artifact`.
pub fn write_sidecar(
    artifact: &Path,
    command: &str,
    params: &Value,
    tag: Option<&str>,
) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        planar_version: planar::VERSION,
        command,
        tag,
        params,
        output: artifact.display().to_string(),
    };
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), command, "provenance written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
