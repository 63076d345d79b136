//! Site configuration.
//!
//! A client-rendered page has no runtime environment, so overrides are
//! captured when the wasm bundle is compiled and overlaid on the defaults.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use gajanand_contact::ComposeConfig;

pub const ENV_RECIPIENT: &str = "GAJANAND_RECIPIENT";
pub const ENV_ASSET_ROOT: &str = "GAJANAND_ASSET_ROOT";
pub const ENV_SUCCESS_DELAY_MS: &str = "GAJANAND_SUCCESS_DELAY_MS";
pub const ENV_FALLBACK_DELAY_MS: &str = "GAJANAND_FALLBACK_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Prefix for product photos and the logo; empty means root-relative.
    pub asset_root: String,
    /// Scroll offset (px) past which the header turns opaque.
    pub header_scroll_threshold: f64,
    pub compose: ComposeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let compose = ComposeConfig::default();
        Self {
            site_name: compose.site_name.clone(),
            asset_root: String::new(),
            header_scroll_threshold: 20.0,
            compose,
        }
    }
}

fn parse_millis(key: &str, raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of milliseconds, got {raw:?}"))
}

impl SiteConfig {
    /// Overlay the `GAJANAND_*` keys found through `lookup` onto the defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(recipient) = lookup(ENV_RECIPIENT) {
            let recipient = recipient.trim();
            if recipient.is_empty() || !recipient.contains('@') {
                bail!("{ENV_RECIPIENT} must be an email address, got {recipient:?}");
            }
            config.compose.recipient = recipient.to_string();
        }

        if let Some(root) = lookup(ENV_ASSET_ROOT) {
            config.asset_root = root.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_SUCCESS_DELAY_MS) {
            config.compose.primary_delay_ms = parse_millis(ENV_SUCCESS_DELAY_MS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_FALLBACK_DELAY_MS) {
            config.compose.fallback_delay_ms = parse_millis(ENV_FALLBACK_DELAY_MS, &raw)?;
        }

        Ok(config)
    }

    /// Configuration baked in at compile time.
    pub fn from_build_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| {
            match key {
                ENV_RECIPIENT => option_env!("GAJANAND_RECIPIENT"),
                ENV_ASSET_ROOT => option_env!("GAJANAND_ASSET_ROOT"),
                ENV_SUCCESS_DELAY_MS => option_env!("GAJANAND_SUCCESS_DELAY_MS"),
                ENV_FALLBACK_DELAY_MS => option_env!("GAJANAND_FALLBACK_DELAY_MS"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Like [`from_build_env`](Self::from_build_env), but logs and falls back
    /// to the defaults when the baked-in values are unusable.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|err| {
            let detail = format!("{err:#}");
            tracing::error!(error = %detail, "invalid build-time configuration; using defaults");
            Self::default()
        })
    }
}
