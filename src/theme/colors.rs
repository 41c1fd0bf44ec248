//! Color palettes for light and dark mode.
//!
//! Each palette becomes a block of CSS custom properties; the stylesheet only
//! refers to the variables.

pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#f6f7fb",
    surface: "#ffffff",
    border: "#dde1ea",
    text: "#1d2330",
    muted: "#667085",
    accent: "#3b5bdb",
    accent_soft: "rgba(59, 91, 219, 0.12)",
    correct: "#2f9e44",
    incorrect: "#e03131",
};

pub const DARK: Palette = Palette {
    background: "#11141b",
    surface: "#1a1f2b",
    border: "#2c3344",
    text: "#e9ecf3",
    muted: "#98a2b3",
    accent: "#748ffc",
    accent_soft: "rgba(116, 143, 252, 0.16)",
    correct: "#51cf66",
    incorrect: "#ff6b6b",
};

impl Palette {
    /// Render the palette as custom properties scoped to `selector`
    pub fn css_block(&self, selector: &str) -> String {
        format!(
            "{selector} {{\n  --bg: {};\n  --surface: {};\n  --border: {};\n  --text: {};\n  --muted: {};\n  --accent: {};\n  --accent-soft: {};\n  --correct: {};\n  --incorrect: {};\n}}\n",
            self.background,
            self.surface,
            self.border,
            self.text,
            self.muted,
            self.accent,
            self.accent_soft,
            self.correct,
            self.incorrect,
        )
    }
}

/// Light palette on the app root, dark palette once `.dark` is applied
pub fn palette_styles() -> String {
    format!("{}{}", LIGHT.css_block(".app"), DARK.css_block(".app.dark"))
}
