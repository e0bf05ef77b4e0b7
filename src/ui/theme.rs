// ui/theme.rs - Theme system for UI styling

use log::warn;
use ratatui::style::Color;

use crate::config::ThemeConfig;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_highlight_bg: Color,
    pub menu_highlight_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub border_fg: Color,
    pub scrollbar_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            menu_bg: Color::Gray,
            menu_fg: Color::Black,
            menu_highlight_bg: Color::Blue,
            menu_highlight_fg: Color::White,
            selection_bg: Color::Green,
            selection_fg: Color::Black,
            border_fg: Color::DarkGray,
            scrollbar_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Default theme with the configured colour overrides applied.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Theme::default();
        let ui = &mut theme.ui;
        override_color(&mut ui.selection_bg, &config.selection_bg);
        override_color(&mut ui.selection_fg, &config.selection_fg);
        override_color(&mut ui.status_bar_bg, &config.status_bar_bg);
        override_color(&mut ui.status_bar_fg, &config.status_bar_fg);
        override_color(&mut ui.menu_bg, &config.menu_bg);
        override_color(&mut ui.menu_fg, &config.menu_fg);
        theme
    }
}

fn override_color(slot: &mut Color, value: &Option<String>) {
    let Some(name) = value else { return };
    match name.parse::<Color>() {
        Ok(color) => *slot = color,
        Err(_) => warn!("ignoring unknown colour '{}' in theme config", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_colors() {
        let theme = Theme::default();
        assert_eq!(theme.ui.selection_bg, Color::Green);
        assert_eq!(theme.ui.selection_fg, Color::Black);
    }

    #[test]
    fn test_config_overrides() {
        let config = ThemeConfig {
            selection_bg: Some("yellow".to_string()),
            status_bar_bg: Some("#102030".to_string()),
            menu_fg: Some("not-a-colour".to_string()),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.ui.selection_bg, Color::Yellow);
        assert_eq!(theme.ui.status_bar_bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.ui.menu_fg, UiTheme::default().menu_fg);
    }
}
