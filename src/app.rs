use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task, Theme};

use crate::adapters::{MediaWikiClient, WikipediaSummaryService};
use crate::core::interfaces::adapters::{EncyclopediaClient, SummaryLookupService};
use crate::core::models::{PageLookup, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

/// Stands in for the MediaWiki client when it cannot be constructed, so the
/// window still opens and reports the problem on every lookup.
struct UnavailableEncyclopediaClient {
    reason: String,
}

#[async_trait::async_trait]
impl EncyclopediaClient for UnavailableEncyclopediaClient {
    async fn lookup_page(&self, _term: &str) -> anyhow::Result<PageLookup> {
        anyhow::bail!("Encyclopedia client unavailable: {}", self.reason)
    }
}

pub struct FastSearchApp {
    orchestrator: AppOrchestrator,
}

impl FastSearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let encyclopedia_client: Arc<dyn EncyclopediaClient> =
            match MediaWikiClient::build(&settings.language, settings.auto_suggest) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    log::error!("[APP] Failed to initialize Wikipedia client: {:#}", e);
                    Arc::new(UnavailableEncyclopediaClient {
                        reason: e.to_string(),
                    })
                }
            };

        let lookup_service: Arc<dyn SummaryLookupService> =
            Arc::new(WikipediaSummaryService::new(encyclopedia_client));

        let orchestrator = AppOrchestrator::build(lookup_service, settings);

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn window_theme(&self, window_id: Id) -> Theme {
        self.orchestrator.get_theme(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })
    }
}
