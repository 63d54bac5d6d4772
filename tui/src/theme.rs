//! Color themes for the portfolio terminal.
//!
//! A theme names a color per span kind; the renderer asks it for a ratatui
//! style. Themes are serializable so they can ship in configuration files.

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};
use termfolio_core::line::SpanStyle;


/// A named color, backend-independent and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// The terminal's own foreground.
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    Rgb(u8, u8, u8),
}

impl Color {
    /// The ratatui color, or `None` for the terminal default.
    pub fn to_term(self) -> Option<ratatui::style::Color> {
        use ratatui::style::Color as C;
        match self {
            Color::Default => None,
            Color::Black => Some(C::Black),
            Color::Red => Some(C::Red),
            Color::Green => Some(C::Green),
            Color::Yellow => Some(C::Yellow),
            Color::Blue => Some(C::Blue),
            Color::Magenta => Some(C::Magenta),
            Color::Cyan => Some(C::Cyan),
            Color::Gray => Some(C::Gray),
            Color::DarkGray => Some(C::DarkGray),
            Color::White => Some(C::White),
            Color::BrightRed => Some(C::LightRed),
            Color::BrightGreen => Some(C::LightGreen),
            Color::BrightYellow => Some(C::LightYellow),
            Color::BrightBlue => Some(C::LightBlue),
            Color::Rgb(r, g, b) => Some(C::Rgb(r, g, b)),
        }
    }

    fn fg(self) -> Style {
        match self.to_term() {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }
}


/// A complete color theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub text: Color,
    pub prompt: Color,
    pub heading: Color,
    pub dim: Color,
    pub warning: Color,
    pub info: Color,
    pub link: Color,
    pub border: Color,
    pub title: Color,
}

impl Theme {
    /// Dark terminal theme -- the default.
    pub fn default_dark() -> Self {
        Theme {
            name: "dark".to_string(),
            text: Color::Default,
            prompt: Color::BrightBlue,
            heading: Color::White,
            dim: Color::DarkGray,
            warning: Color::BrightYellow,
            info: Color::Cyan,
            link: Color::BrightBlue,
            border: Color::DarkGray,
            title: Color::Gray,
        }
    }

    /// Light terminal theme.
    pub fn default_light() -> Self {
        Theme {
            name: "light".to_string(),
            text: Color::Default,
            prompt: Color::Blue,
            heading: Color::Black,
            dim: Color::Gray,
            warning: Color::Yellow,
            info: Color::Cyan,
            link: Color::Blue,
            border: Color::Gray,
            title: Color::DarkGray,
        }
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "dark" => Some(Theme::default_dark()),
            "light" => Some(Theme::default_light()),
            _ => None,
        }
    }

    /// The ratatui style for a span kind.
    pub fn span_style(&self, kind: SpanStyle) -> Style {
        match kind {
            SpanStyle::Plain => self.text.fg(),
            SpanStyle::Heading => self.heading.fg().add_modifier(Modifier::BOLD),
            SpanStyle::Underline => self.text.fg().add_modifier(Modifier::UNDERLINED),
            SpanStyle::Dim => self.dim.fg(),
            SpanStyle::Warning => self.warning.fg(),
            SpanStyle::Info => self.info.fg(),
            SpanStyle::Prompt => self.prompt.fg().add_modifier(Modifier::BOLD),
        }
    }

    /// The style for labeled links.
    pub fn link_style(&self) -> Style {
        self.link.fg().add_modifier(Modifier::UNDERLINED)
    }

    /// The style for the surrounding border.
    pub fn border_style(&self) -> Style {
        self.border.fg()
    }

    /// The style for the window title.
    pub fn title_style(&self) -> Style {
        self.title.fg()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_resolves_built_ins() {
        assert_eq!(Theme::by_name("dark").unwrap().name, "dark");
        assert_eq!(Theme::by_name("light").unwrap().name, "light");
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn default_color_maps_to_no_fg() {
        assert_eq!(Color::Default.to_term(), None);
        assert_eq!(
            Color::Rgb(10, 20, 30).to_term(),
            Some(ratatui::style::Color::Rgb(10, 20, 30))
        );
    }

    #[test]
    fn heading_is_bold() {
        let theme = Theme::default_dark();
        let style = theme.span_style(SpanStyle::Heading);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn links_are_underlined() {
        let theme = Theme::default_dark();
        assert!(theme.link_style().add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn theme_serde_round_trip() {
        let theme = Theme::default_light();
        let yaml = serde_yaml::to_string(&theme).unwrap();
        let back: Theme = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.name, theme.name);
        assert_eq!(back.prompt, theme.prompt);
    }
}
