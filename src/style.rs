use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::theme::ThemePalette;

/// Semantic family of a control background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Secondary,
    Ghost,
    Chip,
    Icon,
    Palette,
    Outliner,
    Command,
    Slider,
}

impl Variant {
    /// Flat variants render matte: no glow, gloss or sheen layers.
    pub fn is_flat(self) -> bool {
        matches!(
            self,
            Variant::Icon | Variant::Palette | Variant::Outliner | Variant::Command
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlState {
    Idle,
    Hover,
    Pressed,
    Active,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Auto,
    Rounded,
    Pill,
    Square,
}

impl Shape {
    /// Corner radius in logical pixels for a control of the given height.
    pub fn corner_radius(self, height: f32, requested: f32) -> f32 {
        match self {
            Shape::Auto => requested,
            Shape::Rounded => requested.max(4.0),
            Shape::Pill => height * 0.5,
            Shape::Square => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    pub fn height(self) -> f32 {
        match self {
            ControlSize::Xs => 20.0,
            ControlSize::Sm => 26.0,
            ControlSize::Md => 32.0,
            ControlSize::Lg => 40.0,
        }
    }
}

/// Full semantic input for one background render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub variant: Variant,
    pub state: ControlState,
    pub shape: Shape,
    pub size: ControlSize,
    pub accent: Option<Rgba>,
}

impl RenderStyle {
    pub fn new(variant: Variant, state: ControlState) -> Self {
        Self {
            variant,
            state,
            shape: Shape::Auto,
            size: ControlSize::Md,
            accent: None,
        }
    }
}

/// Resolved colors for one (variant, state, accent, theme) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPalette {
    pub fill: Rgba,
    pub border: Rgba,
    pub shadow: Rgba,
    pub glow: Rgba,
    pub ink: Rgba,
}

/// Base palette before any state transform is applied.
pub fn base_palette(variant: Variant, accent: Option<Rgba>, theme: &ThemePalette) -> ControlPalette {
    let accent = accent.unwrap_or(theme.accent);
    match variant {
        Variant::Primary => ControlPalette {
            fill: accent,
            border: accent.darken(0.35),
            shadow: Rgba::BLACK.with_alpha(0.35),
            glow: accent.lighten(0.25).with_alpha(0.45),
            ink: theme.on_accent,
        },
        Variant::Secondary => ControlPalette {
            fill: theme.surface,
            border: theme.border,
            shadow: Rgba::BLACK.with_alpha(0.28),
            glow: accent.with_alpha(0.25),
            ink: theme.foreground_tint,
        },
        Variant::Ghost => ControlPalette {
            fill: theme.surface.with_alpha(0.0),
            border: theme.border.with_alpha(0.55),
            shadow: Rgba::BLACK.with_alpha(0.0),
            glow: accent.with_alpha(0.18),
            ink: theme.foreground_tint,
        },
        Variant::Chip => ControlPalette {
            fill: theme.surface_muted,
            border: theme.border.with_alpha(0.8),
            shadow: Rgba::BLACK.with_alpha(0.18),
            glow: accent.with_alpha(0.2),
            ink: theme.foreground_tint,
        },
        Variant::Icon | Variant::Command => ControlPalette {
            fill: theme.surface_muted.with_alpha(0.9),
            border: theme.border.with_alpha(0.6),
            shadow: Rgba::BLACK.with_alpha(0.15),
            glow: Rgba::TRANSPARENT,
            ink: theme.foreground_tint,
        },
        Variant::Palette | Variant::Outliner => ControlPalette {
            fill: theme.surface.darken(0.08),
            border: theme.border.with_alpha(0.5),
            shadow: Rgba::BLACK.with_alpha(0.12),
            glow: Rgba::TRANSPARENT,
            ink: theme.foreground_tint,
        },
        Variant::Slider => ControlPalette {
            fill: theme.surface_muted,
            border: theme.border,
            shadow: Rgba::BLACK.with_alpha(0.22),
            glow: accent.with_alpha(0.3),
            ink: accent,
        },
    }
}

/// State transform: hover lightens, pressed/active darken and mute the
/// shadow/glow, disabled pulls everything toward neutral gray with alpha
/// floors so controls never vanish entirely.
pub fn apply_state(palette: ControlPalette, state: ControlState) -> ControlPalette {
    match state {
        ControlState::Idle => palette,
        ControlState::Hover => ControlPalette {
            fill: palette.fill.lighten(0.08),
            border: palette.border.lighten(0.10),
            shadow: palette.shadow,
            glow: palette.glow,
            ink: palette.ink,
        },
        ControlState::Pressed => ControlPalette {
            fill: palette.fill.darken(0.12),
            border: palette.border.darken(0.08),
            shadow: palette.shadow.desaturate(0.5).scale_alpha(0.6, 0.05),
            glow: palette.glow.desaturate(0.5).scale_alpha(0.5, 0.0),
            ink: palette.ink,
        },
        ControlState::Active => ControlPalette {
            fill: palette.fill.darken(0.06),
            border: palette.border.darken(0.04),
            shadow: palette.shadow.desaturate(0.4).scale_alpha(0.7, 0.05),
            glow: palette.glow.desaturate(0.3).scale_alpha(0.8, 0.0),
            ink: palette.ink,
        },
        ControlState::Disabled => {
            let gray = Rgba::rgb(0.5, 0.5, 0.5);
            ControlPalette {
                fill: palette.fill.desaturate(0.8).lerp(gray.with_alpha(palette.fill.a), 0.3).scale_alpha(0.55, 0.18),
                border: palette.border.desaturate(0.8).scale_alpha(0.55, 0.14),
                shadow: palette.shadow.scale_alpha(0.3, 0.0),
                glow: Rgba::TRANSPARENT,
                ink: palette.ink.desaturate(0.9).scale_alpha(0.5, 0.2),
            }
        }
    }
}
