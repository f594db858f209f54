use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Ambient theme input: an identifier plus loosely validated color
/// variables, typically deserialized from the host's theme JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeVars {
    pub id: String,
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

impl ThemeVars {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

/// The small palette every compositor call reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub surface: Rgba,
    pub surface_muted: Rgba,
    pub border: Rgba,
    pub accent: Rgba,
    pub on_accent: Rgba,
    pub background_tint: Rgba,
    pub foreground_tint: Rgba,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            surface: Rgba::rgb(0.16, 0.17, 0.20),
            surface_muted: Rgba::rgb(0.21, 0.22, 0.26),
            border: Rgba::rgb(0.10, 0.11, 0.14),
            accent: Rgba::rgb(0.36, 0.56, 0.98),
            on_accent: Rgba::rgb(0.97, 0.98, 1.00),
            background_tint: Rgba::rgb(0.12, 0.13, 0.16),
            foreground_tint: Rgba::rgb(0.85, 0.87, 0.90),
        }
    }
}

/// Parses theme variables once per distinct theme id. Each id keeps the
/// epoch it was first assigned, so switching back to an earlier theme
/// revalidates its cached pixels instead of orphaning them.
#[derive(Debug, Default)]
pub struct ThemeResolver {
    active_id: Option<String>,
    epoch: u64,
    palette: ThemePalette,
    parsed: HashMap<String, (u64, ThemePalette)>,
    next_epoch: u64,
}

impl ThemeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-reads variables only the first time an id is seen; a returning
    /// id restores its original palette and epoch.
    pub fn resolve(&mut self, vars: &ThemeVars) -> &ThemePalette {
        if self.active_id.as_deref() != Some(vars.id.as_str()) {
            let (epoch, palette) = match self.parsed.get(vars.id.as_str()) {
                Some(hit) => *hit,
                None => {
                    debug!("resolving theme palette for {:?}", vars.id);
                    self.next_epoch += 1;
                    let entry = (self.next_epoch, Self::parse(vars));
                    self.parsed.insert(vars.id.clone(), entry);
                    entry
                }
            };
            self.epoch = epoch;
            self.palette = palette;
            self.active_id = Some(vars.id.clone());
        }
        &self.palette
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn parse(vars: &ThemeVars) -> ThemePalette {
        let defaults = ThemePalette::default();
        let get = |name: &str, fallback: Rgba| -> Rgba {
            match vars.vars.get(name) {
                Some(raw) => Rgba::parse_or(raw, fallback),
                None => fallback,
            }
        };
        ThemePalette {
            surface: get("surface", defaults.surface),
            surface_muted: get("surface-muted", defaults.surface_muted),
            border: get("border", defaults.border),
            accent: get("accent", defaults.accent),
            on_accent: get("on-accent", defaults.on_accent),
            background_tint: get("background-tint", defaults.background_tint),
            foreground_tint: get("foreground-tint", defaults.foreground_tint),
        }
    }
}
