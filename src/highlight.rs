use inksac::prelude::*;

/// Styles user-facing notices and diagnostics, falling back to plain
/// text when the terminal has no color support.
#[derive(Debug, Clone, Copy)]
pub struct StatusStyler {
    color_support: ColorSupport,
}

impl Default for StatusStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let style = Style::builder().foreground(Color::Red).bold().build();
        message.style(style).to_string()
    }

    /// A background job was started.
    pub fn notice(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let style = Style::builder().foreground(Color::Cyan).build();
        message.style(style).to_string()
    }

    /// A background job finished.
    pub fn success(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let style = Style::builder().foreground(Color::Green).build();
        message.style(style).to_string()
    }
}
