//! Highlighting configuration for Lumen
//!
//! Controls whether rendered source carries ANSI color and which style each token category gets.

use std::io::IsTerminal;

use lumen_core::TokenCategory;

/// Highlighting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// When to emit ANSI escapes
    pub color: ColorMode,
    /// Per-category styles
    pub theme: Theme,
}

/// When to emit ANSI escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide for an output stream whose terminal-ness is `is_terminal`.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// An ANSI SGR escape sequence. The empty style leaves text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiStyle(pub &'static str);

impl AnsiStyle {
    pub const RESET: &'static str = "\x1b[0m";
    pub const PLAIN: AnsiStyle = AnsiStyle("");

    pub const BOLD_RED_UNDERLINE: AnsiStyle = AnsiStyle("\x1b[1;4;31m");
    pub const BOLD_MAGENTA: AnsiStyle = AnsiStyle("\x1b[1;35m");
    pub const YELLOW: AnsiStyle = AnsiStyle("\x1b[33m");
    pub const GREEN: AnsiStyle = AnsiStyle("\x1b[32m");
    pub const CYAN: AnsiStyle = AnsiStyle("\x1b[36m");

    pub fn is_plain(&self) -> bool {
        self.0.is_empty()
    }

    /// Append `text` wrapped in this style.
    pub fn paint_into(&self, out: &mut String, text: &str) {
        if self.is_plain() {
            out.push_str(text);
        } else {
            out.push_str(self.0);
            out.push_str(text);
            out.push_str(Self::RESET);
        }
    }
}

/// Styles for each token category plus the error marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub keyword: AnsiStyle,
    pub operator: AnsiStyle,
    pub literal: AnsiStyle,
    pub bracket: AnsiStyle,
    pub identifier: AnsiStyle,
    /// Replaces the category style on the token a syntax error points at
    pub error: AnsiStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: AnsiStyle::BOLD_MAGENTA,
            operator: AnsiStyle::YELLOW,
            literal: AnsiStyle::GREEN,
            bracket: AnsiStyle::CYAN,
            identifier: AnsiStyle::PLAIN,
            error: AnsiStyle::BOLD_RED_UNDERLINE,
        }
    }
}

impl Theme {
    /// A theme with no styling at all.
    pub fn plain() -> Self {
        Self {
            keyword: AnsiStyle::PLAIN,
            operator: AnsiStyle::PLAIN,
            literal: AnsiStyle::PLAIN,
            bracket: AnsiStyle::PLAIN,
            identifier: AnsiStyle::PLAIN,
            error: AnsiStyle::PLAIN,
        }
    }

    pub fn style_for(&self, category: TokenCategory) -> AnsiStyle {
        match category {
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Operator => self.operator,
            TokenCategory::Literal => self.literal,
            TokenCategory::Bracket => self.bracket,
            TokenCategory::Identifier => self.identifier,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            theme: Theme::default(),
        }
    }
}

impl HighlightConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color mode
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Override the style of one category
    pub fn with_category_style(mut self, category: TokenCategory, style: AnsiStyle) -> Self {
        let slot = match category {
            TokenCategory::Keyword => &mut self.theme.keyword,
            TokenCategory::Operator => &mut self.theme.operator,
            TokenCategory::Literal => &mut self.theme.literal,
            TokenCategory::Bracket => &mut self.theme.bracket,
            TokenCategory::Identifier => &mut self.theme.identifier,
        };
        *slot = style;
        self
    }

    /// Whether output to stdout should be colored.
    pub fn use_color(&self) -> bool {
        self.color.resolve(std::io::stdout().is_terminal())
    }
}
