//! Service context - dependency container for services
//!
//! Holds the table registry, the typing notifier, and the typing configuration.

use std::sync::Arc;
use std::time::Duration;

use table_common::TypingConfig;
use table_core::traits::{TableRegistry, TypingNotifier};

/// Service context containing all dependencies
///
/// Cheap to clone; delayed tasks carry their own clone.
#[derive(Clone)]
pub struct ServiceContext {
    registry: Arc<dyn TableRegistry>,
    notifier: Arc<dyn TypingNotifier>,
    typing_delay: Duration,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        registry: Arc<dyn TableRegistry>,
        notifier: Arc<dyn TypingNotifier>,
        typing: &TypingConfig,
    ) -> Self {
        Self {
            registry,
            notifier,
            typing_delay: typing.delay(),
        }
    }

    /// Get the table registry
    pub fn registry(&self) -> &dyn TableRegistry {
        self.registry.as_ref()
    }

    /// Get the typing notifier
    pub fn notifier(&self) -> &dyn TypingNotifier {
        self.notifier.as_ref()
    }

    /// Quiet period before a participant is considered to have stopped typing
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("typing_delay", &self.typing_delay)
            .finish()
    }
}
