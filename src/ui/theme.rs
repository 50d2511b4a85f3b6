use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Colors used by the terminal UI, configurable under `[theme]`.
///
/// Values are anything ratatui parses as a color: a name (`"Red"`,
/// `"DarkGray"`), a hex string (`"#e42313"`) or a 256-color index (`"160"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,

    /// Borders, header and highlights
    pub primary: String,

    /// Filled heart
    pub heart: String,

    /// Count badge background
    pub badge: String,

    pub success: String,
    pub warning: String,
    pub error: String,
    pub text: String,
    pub text_muted: String,
    pub border_focused: String,
    pub border_normal: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            primary: "Cyan".to_string(),
            heart: "Red".to_string(),
            badge: "Red".to_string(),
            success: "Green".to_string(),
            warning: "Yellow".to_string(),
            error: "Red".to_string(),
            text: "White".to_string(),
            text_muted: "Gray".to_string(),
            border_focused: "Cyan".to_string(),
            border_normal: "DarkGray".to_string(),
        }
    }
}

impl Theme {
    /// Unknown colors fall back to the terminal default.
    pub fn parse_color(color_str: &str) -> Color {
        color_str.trim().parse::<Color>().unwrap_or(Color::Reset)
    }

    pub fn primary(&self) -> Color {
        Self::parse_color(&self.primary)
    }

    pub fn heart(&self) -> Color {
        Self::parse_color(&self.heart)
    }

    pub fn badge(&self) -> Color {
        Self::parse_color(&self.badge)
    }

    pub fn success(&self) -> Color {
        Self::parse_color(&self.success)
    }

    pub fn warning(&self) -> Color {
        Self::parse_color(&self.warning)
    }

    pub fn error(&self) -> Color {
        Self::parse_color(&self.error)
    }

    pub fn text(&self) -> Color {
        Self::parse_color(&self.text)
    }

    pub fn text_muted(&self) -> Color {
        Self::parse_color(&self.text_muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::parse_color(&self.border_focused))
        } else {
            Style::default().fg(Self::parse_color(&self.border_normal))
        }
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.warning())
            .add_modifier(Modifier::BOLD)
    }

    /// Telkom red on a dark terminal.
    pub fn telkom() -> Self {
        Self {
            name: "telkom".to_string(),
            primary: "#e42313".to_string(),
            heart: "#ff4d5a".to_string(),
            badge: "#e42313".to_string(),
            success: "#4caf50".to_string(),
            warning: "#f9c74f".to_string(),
            error: "#ff6b6b".to_string(),
            text: "#f1f1f1".to_string(),
            text_muted: "#9e9e9e".to_string(),
            border_focused: "#e42313".to_string(),
            border_normal: "#4a4a4a".to_string(),
        }
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "telkom" => Some(Self::telkom()),
            _ => None,
        }
    }

    /// A theme table that sets nothing but a preset name expands to that
    /// preset. Explicit colors are kept as written.
    pub fn resolved(self) -> Self {
        let defaults = Theme::default();
        let only_named = Theme {
            name: defaults.name.clone(),
            ..self.clone()
        } == defaults;

        match Theme::from_preset(&self.name) {
            Some(preset) if only_named => preset,
            _ => self,
        }
    }
}
