use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Color, Element, Font, Length};

use crate::core::models::{SearchResult, ThemeMode};
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    TermChanged(String),
    Submit,
    CopyResult,
    OpenInBrowser,
    ToggleTheme,
    Exit,
}

/// Main form: one entry, one search button and a scrollable result pane.
pub struct SearchView {
    search_term: String,
    current_result: Option<SearchResult>,
    display_text: String,
    status: String,
    is_searching: bool,
}

impl SearchView {
    pub fn build() -> Self {
        Self {
            search_term: String::new(),
            current_result: None,
            display_text: String::new(),
            status: global_constants::STATUS_READY.to_string(),
            is_searching: false,
        }
    }

    pub fn update(&mut self, message: SearchViewMessage) {
        match message {
            SearchViewMessage::TermChanged(term) => {
                self.search_term = term;
            }
            SearchViewMessage::CopyResult => {
                if self.display_text.is_empty() {
                    return;
                }
                if let Err(e) = arboard::Clipboard::new()
                    .and_then(|mut clipboard| clipboard.set_text(&self.display_text))
                {
                    log::error!("[SEARCH_VIEW] Failed to copy to clipboard: {}", e);
                    self.status = format!("Failed to copy: {}", e);
                } else {
                    log::info!("[SEARCH_VIEW] Result copied to clipboard");
                    self.status = "Copied to clipboard".to_string();
                }
            }
            SearchViewMessage::OpenInBrowser => {
                let Some(url) = self.page_url() else {
                    return;
                };
                log::info!("[SEARCH_VIEW] Opening {} in browser", url);
                if let Err(e) = open::that(url) {
                    log::error!("[SEARCH_VIEW] Failed to open browser: {}", e);
                    self.status = format!("Failed to open browser: {}", e);
                }
            }
            SearchViewMessage::Submit | SearchViewMessage::ToggleTheme | SearchViewMessage::Exit => {}
        }
    }

    /// Trimmed entry contents, or `None` when there is nothing to search for.
    pub fn submitted_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        }
    }

    pub fn begin_search(&mut self) {
        self.display_text.clear();
        self.current_result = None;
        self.status = global_constants::STATUS_SEARCHING.to_string();
        self.is_searching = true;
    }

    pub fn show_result(&mut self, result: SearchResult) {
        self.display_text = result.render_display_text();
        self.status = global_constants::STATUS_READY.to_string();
        self.current_result = Some(result);
        self.is_searching = false;
    }

    pub fn show_error(&mut self, error: String) {
        self.status = format!("Error: {}", error);
        self.is_searching = false;
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn page_url(&self) -> Option<&str> {
        self.current_result
            .as_ref()
            .filter(|result| result.is_page_result())
            .map(|result| result.url.as_str())
    }

    pub fn render_ui(
        &self,
        theme_mode: &ThemeMode,
        accepts_input: bool,
    ) -> Element<'_, SearchViewMessage> {
        let theme = app_theme::get_theme(theme_mode);
        let can_search = accepts_input && !self.is_searching();

        let title = text(global_constants::APPLICATION_TITLE)
            .size(28)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            });

        let mut search_input =
            text_input(global_constants::SEARCH_INPUT_PLACEHOLDER, &self.search_term)
                .size(16)
                .padding(10)
                .width(Length::Fill);
        if can_search {
            search_input = search_input
                .on_input(SearchViewMessage::TermChanged)
                .on_submit(SearchViewMessage::Submit);
        }

        let search_btn = button(text("Search").size(16))
            .padding([10, 24])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press_maybe(can_search.then_some(SearchViewMessage::Submit));

        let search_row = row![search_input, search_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let result_pane = container(
            scrollable(
                container(text(self.display_text()).size(15))
                    .padding(12)
                    .width(Length::Fill),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(app_theme::result_pane_style);

        let status_line = text(self.status())
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            });

        let copy_btn = button(text("Copy").size(14))
            .padding([8, 18])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press_maybe(
                (accepts_input && !self.display_text.is_empty())
                    .then_some(SearchViewMessage::CopyResult),
            );

        let browser_btn = button(text("Open in browser").size(14))
            .padding([8, 18])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press_maybe(
                self.page_url()
                    .filter(|_| accepts_input)
                    .map(|_| SearchViewMessage::OpenInBrowser),
            );

        let theme_label = match theme_mode {
            ThemeMode::Dark => "Light theme",
            ThemeMode::Light => "Dark theme",
        };
        let theme_btn = button(text(theme_label).size(14))
            .padding([8, 18])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press_maybe(accepts_input.then_some(SearchViewMessage::ToggleTheme));

        let exit_btn = button(text("Exit").size(14))
            .padding([8, 18])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press_maybe(accepts_input.then_some(SearchViewMessage::Exit));

        let footer = row![
            status_line,
            Space::new().width(Length::Fill),
            copy_btn,
            browser_btn,
            theme_btn,
            exit_btn,
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let content = column![title, search_row, result_pane, footer]
            .spacing(14)
            .padding(20)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| app_theme::window_background_style(&theme))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_starts_ready_and_empty() {
        let view = SearchView::build();

        assert_eq!(view.status(), global_constants::STATUS_READY);
        assert!(view.display_text().is_empty());
        assert!(!view.is_searching());
    }

    #[test]
    fn test_submitted_term_trims_and_rejects_blank_input() {
        let mut view = SearchView::build();
        assert!(view.submitted_term().is_none());

        view.update(SearchViewMessage::TermChanged("   \t ".to_string()));
        assert!(view.submitted_term().is_none());

        view.update(SearchViewMessage::TermChanged("  Lisboa ".to_string()));
        assert_eq!(view.submitted_term().as_deref(), Some("Lisboa"));
    }

    #[test]
    fn test_begin_search_clears_previous_result() {
        let mut view = SearchView::build();
        view.show_result(SearchResult::not_found("old"));

        view.begin_search();

        assert!(view.display_text().is_empty());
        assert!(view.is_searching());
        assert!(view.page_url().is_none());
        assert_eq!(view.status(), global_constants::STATUS_SEARCHING);
    }

    #[test]
    fn test_show_result_renders_record() {
        let mut view = SearchView::build();
        view.begin_search();

        view.show_result(SearchResult::found(
            "Lisboa".to_string(),
            "https://pt.wikipedia.org/wiki/Lisboa".to_string(),
            "Capital.".to_string(),
        ));

        assert_eq!(
            view.display_text(),
            "Title: Lisboa\nURL: https://pt.wikipedia.org/wiki/Lisboa\n\nSummary:\nCapital."
        );
        assert_eq!(view.page_url(), Some("https://pt.wikipedia.org/wiki/Lisboa"));
        assert!(!view.is_searching());
    }

    #[test]
    fn test_non_page_result_has_no_browser_url() {
        let mut view = SearchView::build();

        view.show_result(SearchResult::ambiguous("Mercury", &["Mercury (planet)".to_string()]));

        assert!(view.page_url().is_none());
    }

    #[test]
    fn test_show_error_reports_status_and_stops_searching() {
        let mut view = SearchView::build();
        view.begin_search();

        view.show_error("timed out".to_string());

        assert!(view.status().contains("timed out"));
        assert!(!view.is_searching());
        assert!(view.display_text().is_empty());
    }
}
