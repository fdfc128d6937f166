//! Gateway state
//!
//! Application state shared by all command handlers.

use crate::broadcast::SessionNotifier;
use crate::connection::{Session, SessionManager};
use crate::protocol::ServerMessage;
use crate::tables::InMemoryTableRegistry;
use std::sync::Arc;
use table_common::AppConfig;
use table_core::UserId;
use table_service::ServiceContext;
use tokio::sync::mpsc;

/// Gateway application state
///
/// Holds all shared dependencies for the gateway.
#[derive(Clone)]
pub struct GatewayState {
    /// Service context with the registry, notifier, and typing settings
    service_context: Arc<ServiceContext>,
    /// Live sessions
    sessions: Arc<SessionManager>,
    /// Live tables
    tables: Arc<InMemoryTableRegistry>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl GatewayState {
    /// Wire a gateway with an empty session manager and table registry
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionManager::new_shared();
        let tables = Arc::new(InMemoryTableRegistry::new());
        let notifier = Arc::new(SessionNotifier::new(Arc::clone(&sessions)));
        let service_context = ServiceContext::new(tables.clone(), notifier, &config.typing);

        tracing::info!(
            app = %config.app.name,
            typing_delay_ms = config.typing.delay_ms,
            "Gateway state initialized"
        );

        Self {
            service_context: Arc::new(service_context),
            sessions,
            tables,
            config: Arc::new(config),
        }
    }

    /// Register a new session and return the receiving end of its outbound queue
    pub fn open_session(
        &self,
        session_id: impl Into<String>,
        user_id: UserId,
        username: impl Into<String>,
    ) -> (Arc<Session>, mpsc::Receiver<ServerMessage>) {
        let (tx, rx) = mpsc::channel(self.config.session.outbound_buffer);
        let session = Session::new(session_id, user_id, username, tx);
        self.sessions.add_session(Arc::clone(&session));
        (session, rx)
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the session manager
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Get the table registry
    pub fn tables(&self) -> &InMemoryTableRegistry {
        &self.tables
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("sessions", &self.sessions)
            .field("tables", &self.tables)
            .field("config", &"AppConfig")
            .finish()
    }
}
