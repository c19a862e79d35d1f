use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::text;
use iced::window::{self, Id};
use iced::{Element, Size, Task, Theme};

use crate::core::interfaces::adapters::SummaryLookupService;
use crate::core::models::{SearchResult, ThemeMode, UserSettings};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{SearchView, SearchViewMessage, WarningMessage, WarningView};

pub enum AppWindow {
    Main(SearchView),
    Warning(WarningView),
}

pub struct AppOrchestrator {
    lookup_service: Arc<dyn SummaryLookupService>,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    warning_window_id: Option<Id>,
    pending_lookup: Option<String>,
    settings: UserSettings,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    SearchViewMsg(Id, SearchViewMessage),
    LookupCompleted(Id, Result<SearchResult, String>),
    ShowWarning(String),
    WarningMsg(Id, WarningMessage),
    WindowClosed(Id),
}

/// Runs one lookup, converting failures and timeouts into display strings.
pub async fn run_lookup(
    lookup_service: Arc<dyn SummaryLookupService>,
    term: String,
    timeout: Duration,
) -> Result<SearchResult, String> {
    match tokio::time::timeout(timeout, lookup_service.fetch_summary(&term)).await {
        Ok(Ok(result)) => {
            log::info!("[ORCHESTRATOR] Lookup for '{}' completed", term);
            Ok(result)
        }
        Ok(Err(e)) => {
            log::error!("[ORCHESTRATOR] Lookup for '{}' failed: {:#}", term, e);
            Err(format!("Lookup failed: {}", e))
        }
        Err(_) => {
            log::error!(
                "[ORCHESTRATOR] Lookup for '{}' timed out after {} seconds",
                term,
                timeout.as_secs()
            );
            Err(format!(
                "Lookup timed out after {} seconds",
                timeout.as_secs()
            ))
        }
    }
}

impl AppOrchestrator {
    pub fn build(lookup_service: Arc<dyn SummaryLookupService>, settings: UserSettings) -> Self {
        Self {
            lookup_service,
            windows: HashMap::new(),
            main_window_id: None,
            warning_window_id: None,
            pending_lookup: None,
            settings,
        }
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::Warning(_)) => global_constants::WARNING_WINDOW_TITLE.to_string(),
            _ => global_constants::APPLICATION_TITLE.to_string(),
        }
    }

    pub fn get_theme(&self, _window_id: Id) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::SearchViewMsg(window_id, msg) => {
                self.handle_search_view_message(window_id, msg)
            }
            OrchestratorMessage::LookupCompleted(window_id, result) => {
                self.handle_lookup_completed(window_id, result)
            }
            OrchestratorMessage::ShowWarning(warning) => self.handle_show_warning(warning),
            OrchestratorMessage::WarningMsg(window_id, WarningMessage::Acknowledge) => {
                log::debug!("[ORCHESTRATOR] Warning acknowledged");
                window::close(window_id)
            }
            OrchestratorMessage::WindowClosed(window_id) => self.handle_window_closed(window_id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        match self.windows.get(&window_id) {
            Some(AppWindow::Main(search_view)) => search_view
                .render_ui(&self.settings.theme_mode, self.warning_window_id.is_none())
                .map(move |msg| OrchestratorMessage::SearchViewMsg(window_id, msg)),
            Some(AppWindow::Warning(warning_view)) => warning_view
                .render_ui(&self.settings.theme_mode)
                .map(move |msg| OrchestratorMessage::WarningMsg(window_id, msg)),
            None => text("Loading...").into(),
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.main_window_id {
            log::warn!("[ORCHESTRATOR] Main window already open");
            return window::gain_focus(id);
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(
                global_constants::MAIN_WINDOW_WIDTH,
                global_constants::MAIN_WINDOW_HEIGHT,
            ),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main(SearchView::build()));
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);

        task.discard()
    }

    fn handle_search_view_message(
        &mut self,
        window_id: Id,
        msg: SearchViewMessage,
    ) -> Task<OrchestratorMessage> {
        if self.warning_window_id.is_some() {
            log::debug!("[ORCHESTRATOR] Warning open, ignoring {:?}", msg);
            return Task::none();
        }

        match msg {
            SearchViewMessage::Submit => self.handle_submit(window_id),
            SearchViewMessage::ToggleTheme => self.handle_toggle_theme(),
            SearchViewMessage::Exit => {
                log::info!("[ORCHESTRATOR] Exit requested");
                iced::exit()
            }
            other => {
                if let Some(AppWindow::Main(view)) = self.windows.get_mut(&window_id) {
                    view.update(other);
                }
                Task::none()
            }
        }
    }

    fn handle_submit(&mut self, window_id: Id) -> Task<OrchestratorMessage> {
        if self.pending_lookup.is_some() {
            log::debug!("[ORCHESTRATOR] Lookup already in flight, ignoring submit");
            return Task::none();
        }

        let Some(AppWindow::Main(view)) = self.windows.get_mut(&window_id) else {
            log::warn!("[ORCHESTRATOR] Submit from unknown window {:?}", window_id);
            return Task::none();
        };

        let Some(term) = view.submitted_term() else {
            log::info!("[ORCHESTRATOR] Empty search term, showing warning");
            return self.update(OrchestratorMessage::ShowWarning(
                global_constants::USER_MESSAGE_EMPTY_TERM.to_string(),
            ));
        };

        log::info!("[ORCHESTRATOR] Starting lookup for '{}'", term);
        view.begin_search();
        self.pending_lookup = Some(term.clone());

        let lookup_service = Arc::clone(&self.lookup_service);
        let timeout = self.settings.request_timeout();

        Task::future(async move {
            let result = run_lookup(lookup_service, term, timeout).await;
            OrchestratorMessage::LookupCompleted(window_id, result)
        })
    }

    fn handle_lookup_completed(
        &mut self,
        window_id: Id,
        result: Result<SearchResult, String>,
    ) -> Task<OrchestratorMessage> {
        self.pending_lookup = None;

        let Some(AppWindow::Main(view)) = self.windows.get_mut(&window_id) else {
            log::debug!("[ORCHESTRATOR] Lookup finished after its window closed");
            return Task::none();
        };

        match result {
            Ok(search_result) => view.show_result(search_result),
            Err(e) => view.show_error(e),
        }

        Task::none()
    }

    fn handle_show_warning(&mut self, warning: String) -> Task<OrchestratorMessage> {
        if let Some(id) = self.warning_window_id {
            self.windows.insert(id, AppWindow::Warning(WarningView::build(warning)));
            return window::gain_focus(id);
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(
                global_constants::WARNING_WINDOW_WIDTH,
                global_constants::WARNING_WINDOW_HEIGHT,
            ),
            position: window::Position::Centered,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        });

        self.warning_window_id = Some(id);
        self.windows.insert(id, AppWindow::Warning(WarningView::build(warning)));

        task.discard()
    }

    fn handle_toggle_theme(&mut self) -> Task<OrchestratorMessage> {
        self.settings.theme_mode = match self.settings.theme_mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        log::info!("[ORCHESTRATOR] Theme switched to {}", self.settings.theme_mode);

        if let Err(e) = self.settings.save() {
            log::error!("[ORCHESTRATOR] Failed to save theme setting: {}", e);
        }

        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);
        self.windows.remove(&id);

        if Some(id) == self.warning_window_id {
            self.warning_window_id = None;
            return Task::none();
        }

        if Some(id) == self.main_window_id {
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            self.main_window_id = None;
            return iced::exit();
        }

        Task::none()
    }
}
