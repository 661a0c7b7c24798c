//! Per-mode color palettes.
//!
//! Each presentation mode gets one palette; [`palette_css`] turns them into
//! CSS custom properties scoped to the mode's root class, so the global
//! stylesheet only ever refers to `var(--...)`.

use devcomedy_core::ThemeMode;

/// Colors for one presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub glow: &'static str,
}

// === LIGHT (clean portfolio) ===
pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    foreground: "#1a1a2e",
    card: "#f8fafc",
    primary: "#6366f1",
    primary_foreground: "#ffffff",
    accent: "#f59e0b",
    muted: "#64748b",
    border: "#e2e8f0",
    glow: "rgba(99, 102, 241, 0.25)",
};

// === NEON HACKER (terminal) ===
pub const NEON_HACKER: Palette = Palette {
    background: "#0a0a0a",
    foreground: "#39ff14",
    card: "#0d1117",
    primary: "#00ff9f",
    primary_foreground: "#0a0a0a",
    accent: "#ff00ff",
    muted: "rgba(57, 255, 20, 0.6)",
    border: "rgba(0, 255, 159, 0.35)",
    glow: "rgba(0, 255, 159, 0.5)",
};

// === PUNNY MODE (circus) ===
pub const PUNNY_MODE: Palette = Palette {
    background: "#fff7ed",
    foreground: "#431407",
    card: "#fffbeb",
    primary: "#ff6b35",
    primary_foreground: "#ffffff",
    accent: "#ffd23f",
    muted: "#9a3412",
    border: "#fed7aa",
    glow: "rgba(255, 210, 63, 0.45)",
};

// Trail accents
pub const NEON_GREEN: &str = "#39ff14";
pub const MANGO: &str = "#ffb347";

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::NeonHacker => &NEON_HACKER,
        ThemeMode::PunnyMode => &PUNNY_MODE,
    }
}

/// Custom-property blocks for every mode, keyed by the mode's root class.
pub fn palette_css() -> String {
    let mut css = format!(":root {{ --neon-green: {}; --mango: {}; }}\n", NEON_GREEN, MANGO);
    for mode in ThemeMode::ALL {
        let p = palette(mode);
        css.push_str(&format!(
            ".portfolio-root.{} {{\n  --background: {};\n  --foreground: {};\n  --card: {};\n  --primary: {};\n  --primary-foreground: {};\n  --accent: {};\n  --muted: {};\n  --border: {};\n  --glow: {};\n}}\n",
            mode.as_str(),
            p.background,
            p.foreground,
            p.card,
            p.primary,
            p.primary_foreground,
            p.accent,
            p.muted,
            p.border,
            p.glow,
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_gets_a_scoped_block() {
        let css = palette_css();
        for mode in ThemeMode::ALL {
            let selector = format!(".portfolio-root.{} {{", mode.as_str());
            assert!(css.contains(&selector), "missing {}", selector);
        }
        assert!(css.contains("--primary: #00ff9f;"));
    }
}
