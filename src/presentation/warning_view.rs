use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::core::models::ThemeMode;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum WarningMessage {
    Acknowledge,
}

pub struct WarningView {
    message: String,
}

impl WarningView {
    pub fn build(message: String) -> Self {
        log::debug!("[WARNING_VIEW] Showing warning: {}", message);
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render_ui(&self, theme_mode: &ThemeMode) -> Element<'_, WarningMessage> {
        let theme = app_theme::get_theme(theme_mode);
        let warning_color = theme.palette().warning;

        let heading = text("⚠ Warning")
            .size(18)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(warning_color),
            });

        let ok_btn = button(text("OK").size(14))
            .padding([8, 32])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press(WarningMessage::Acknowledge);

        let content = column![heading, text(self.message()).size(14), ok_btn]
            .spacing(14)
            .padding(20)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme| app_theme::window_background_style(&theme))
            .into()
    }
}
