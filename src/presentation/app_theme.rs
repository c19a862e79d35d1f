use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn flat_button(
    background: Color,
    text_color: Color,
    border_color: Color,
    snap: bool,
) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => {
            let blue = Color::from_rgb(0.2, 0.45, 0.85);
            flat_button(blue, Color::WHITE, blue, false)
        }
        button::Status::Hovered => {
            let blue = Color::from_rgb(0.27, 0.53, 0.93);
            flat_button(blue, Color::WHITE, blue, false)
        }
        button::Status::Pressed => {
            let blue = Color::from_rgb(0.15, 0.36, 0.7);
            flat_button(blue, Color::WHITE, blue, true)
        }
        button::Status::Disabled => flat_button(
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => flat_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.7, 0.7, 0.7),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
        button::Status::Hovered => flat_button(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.9, 0.9, 0.9),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
        button::Status::Pressed => flat_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.35, 0.35, 0.35),
            true,
        ),
        button::Status::Disabled => flat_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.4, 0.4, 0.4),
            Color::from_rgb(0.3, 0.3, 0.3),
            false,
        ),
    }
}

pub fn result_pane_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.06,
            ..palette.text
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn window_background_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_light_mode() {
        let palette = get_theme(&ThemeMode::Light).palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_get_theme_dark_mode_has_light_text() {
        let palette = get_theme(&ThemeMode::Dark).palette();

        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.95));
    }

    #[test]
    fn test_primary_button_style_active_is_blue_with_white_text() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.2, 0.45, 0.85));
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_disabled_buttons_use_muted_text() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Disabled);
        let secondary = secondary_button_style(&Theme::Dark, button::Status::Disabled);

        assert_eq!(primary.text_color, Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(secondary.text_color, Color::from_rgb(0.4, 0.4, 0.4));
    }

    #[test]
    fn test_pressed_buttons_snap() {
        assert!(primary_button_style(&Theme::Dark, button::Status::Pressed).snap);
        assert!(secondary_button_style(&Theme::Light, button::Status::Pressed).snap);
    }
}
