//! Build information reporting

use super::{context::Context, logger::Logger, value::Attr};

/// Build metadata logged once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub module_version: String,
    pub toolchain: Option<String>,
    pub settings: Vec<(String, String)>,
}

impl BuildInfo {
    pub fn new(module_version: impl Into<String>) -> Self {
        Self {
            module_version: module_version.into(),
            toolchain: None,
            settings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_toolchain(mut self, toolchain: impl Into<String>) -> Self {
        self.toolchain = Some(toolchain.into());
        self
    }

    /// Metadata compiled into this crate; `None` outside a cargo build.
    pub fn current() -> Option<Self> {
        let version = option_env!("CARGO_PKG_VERSION")?;
        let profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        let info = Self::new(version)
            .with_setting("package", option_env!("CARGO_PKG_NAME").unwrap_or_default())
            .with_setting("target_os", std::env::consts::OS)
            .with_setting("target_arch", std::env::consts::ARCH)
            .with_setting("profile", profile);

        Some(match option_env!("RUSTC_VERSION") {
            Some(toolchain) => info.with_toolchain(toolchain),
            None => info,
        })
    }

    /// Settings as record attributes, followed by `rustversion` and `modversion`.
    pub fn attrs(&self) -> Vec<Attr> {
        let mut attrs = Vec::with_capacity(self.settings.len() + 2);
        for (key, value) in &self.settings {
            let key = if quote_key(key) {
                format!("{:?}", key)
            } else {
                key.clone()
            };
            let value = if quote_value(value) {
                format!("{:?}", value)
            } else {
                value.clone()
            };
            attrs.push(Attr::new(key, value));
        }

        if let Some(toolchain) = &self.toolchain {
            attrs.push(Attr::new("rustversion", toolchain.as_str()));
        }
        attrs.push(Attr::new("modversion", self.module_version.as_str()));
        attrs
    }
}

fn quote_key(key: &str) -> bool {
    key.is_empty() || key.contains(['=', ' ', '\t', '\r', '\n', '"', '`'])
}

fn quote_value(value: &str) -> bool {
    value.contains([' ', '\t', '\r', '\n', '"', '`'])
}

impl Logger {
    /// Log `info` at Info, or a warning when no build information exists.
    #[track_caller]
    pub fn build_info(&self, ctx: &Context, info: Option<&BuildInfo>) {
        match info {
            Some(info) => self.info(ctx, "build info", info.attrs()),
            None => self.warn(ctx, "build info not available", Vec::new()),
        }
    }
}
