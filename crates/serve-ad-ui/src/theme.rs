//! Theme configuration for `Serve Ad`.
//!
//! A dark, high-contrast palette suited to full-screen display devices.

/// Color palette.
pub mod colors {
    /// Page background.
    pub const BACKGROUND: &str = "#0b0d12";
    /// Card and header surfaces.
    pub const SURFACE: &str = "#161a22";
    /// Hovered surfaces.
    pub const SURFACE_HOVER: &str = "#202632";
    /// Primary text.
    pub const TEXT: &str = "#f4f6fb";
    /// Secondary text.
    pub const TEXT_MUTED: &str = "#9aa3b5";
    /// Accent for links and the active route.
    pub const ACCENT: &str = "#38bdf8";
    /// Error accent.
    pub const ERROR: &str = "#f87171";
    /// Hairline borders.
    pub const BORDER: &str = "rgba(255, 255, 255, 0.08)";
}

/// Typography.
pub mod typography {
    /// Body font stack (system fonts, no downloads).
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";
    /// Monospace font stack, used for identifiers.
    pub const FONT_MONO: &str = "ui-monospace, 'SF Mono', Menlo, Consolas, monospace";
}

/// Spacing scale.
pub mod spacing {
    /// Small gap.
    pub const SM: &str = "0.5rem";
    /// Default gap.
    pub const MD: &str = "1rem";
    /// Page padding.
    pub const LG: &str = "2rem";
}

/// Corner radius.
pub const RADIUS: &str = "0.75rem";

/// Default transition.
pub const TRANSITION: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --bg: {bg};
  --surface: {surface};
  --surface-hover: {surface_hover};
  --text: {text};
  --text-muted: {text_muted};
  --accent: {accent};
  --error: {error};
  --border: {border};
  --font-family: {font_family};
  --font-mono: {font_mono};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --radius: {radius};
  --transition: {transition};
}}",
        bg = colors::BACKGROUND,
        surface = colors::SURFACE,
        surface_hover = colors::SURFACE_HOVER,
        text = colors::TEXT,
        text_muted = colors::TEXT_MUTED,
        accent = colors::ACCENT,
        error = colors::ERROR,
        border = colors::BORDER,
        font_family = typography::FONT_FAMILY,
        font_mono = typography::FONT_MONO,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        radius = RADIUS,
        transition = TRANSITION,
    )
}
