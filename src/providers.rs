//! Provider templates for `create --template`.
//!
//! A template rewrites the provider routing fields of a settings blob
//! (`env.ANTHROPIC_BASE_URL`, `env.ANTHROPIC_AUTH_TOKEN`). This is the only
//! place the settings content is parsed; everywhere else it is an opaque
//! byte sequence.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Known provider endpoints a profile can be templated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    Deepseek,
    Kimi,
    Zhipu,
}

impl Provider {
    pub fn all() -> [Provider; 4] {
        [
            Provider::Anthropic,
            Provider::Deepseek,
            Provider::Kimi,
            Provider::Zhipu,
        ]
    }

    /// Endpoint injected as `ANTHROPIC_BASE_URL`. `None` means the official
    /// endpoint, for which any override is removed instead.
    pub fn base_url(&self) -> Option<&'static str> {
        match self {
            Provider::Anthropic => None,
            Provider::Deepseek => Some("https://api.deepseek.com/anthropic"),
            Provider::Kimi => Some("https://api.moonshot.cn/anthropic"),
            Provider::Zhipu => Some("https://open.bigmodel.cn/api/anthropic"),
        }
    }

    /// Rewrite `blob` for this provider, injecting `secret` when supplied.
    ///
    /// The rest of the document is preserved as-is; only the `env` routing
    /// keys are touched.
    pub fn apply(&self, blob: &[u8], secret: Option<&str>) -> Result<Vec<u8>> {
        let mut root: Value = serde_json::from_slice(blob).map_err(Error::InvalidSettingsJson)?;
        let obj = root.as_object_mut().ok_or(Error::SettingsNotObject)?;

        let env = obj
            .entry("env")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or(Error::SettingsNotObject)?;

        match self.base_url() {
            Some(url) => {
                env.insert("ANTHROPIC_BASE_URL".to_string(), Value::from(url));
            }
            None => {
                env.remove("ANTHROPIC_BASE_URL");
            }
        }
        if let Some(secret) = secret {
            env.insert("ANTHROPIC_AUTH_TOKEN".to_string(), Value::from(secret));
        }

        serde_json::to_vec_pretty(&root).map_err(Error::Encode)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Anthropic => "anthropic",
            Provider::Deepseek => "deepseek",
            Provider::Kimi => "kimi",
            Provider::Zhipu => "zhipu",
        };
        f.write_str(name)
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "deepseek" => Ok(Provider::Deepseek),
            "kimi" => Ok(Provider::Kimi),
            "zhipu" => Ok(Provider::Zhipu),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}
