use std::{fs, io, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "civil_pdf_assistant.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    log_filter: Option<String>,
}

impl ClientSettings {
    /// Applies command-line flags, which win over every other layer.
    pub fn apply_overrides(
        &mut self,
        server_url: Option<String>,
        log_filter: Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(v) = server_url {
            self.server_url = normalize_server_url(&v)?;
        }
        if let Some(v) = log_filter {
            self.log_filter = v;
        }
        Ok(())
    }
}

pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE), |name| {
        std::env::var(name).ok()
    })
}

/// Layers defaults, the TOML file at `path` (if present) and environment
/// variables read through `env`, in that order.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            if let Some(v) = file_cfg.server_url {
                settings.server_url = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    if let Some(v) = non_empty(env("PDF_ASSISTANT_SERVER_URL")) {
        settings.server_url = v;
    }
    if let Some(v) = non_empty(env("APP__SERVER_URL")) {
        settings.server_url = v;
    }
    if let Some(v) = non_empty(env("RUST_LOG")) {
        settings.log_filter = v;
    }

    settings.server_url = normalize_server_url(&settings.server_url)?;
    Ok(settings)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts only absolute http(s) URLs and strips the trailing slash so
/// endpoint paths can be appended directly.
pub fn normalize_server_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).with_context(|| format!("invalid server url '{raw}'"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported server url scheme '{other}' in '{raw}'"),
    }
    if parsed.host_str().is_none() {
        bail!("server url '{raw}' has no host");
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
