//! Typing service
//!
//! Debounces the chat typing indicator of table participants.
//!
//! Every keystroke refreshes the participant's `last_typed` instant and arms
//! its own delayed check. A check only clears the flag when the full delay has
//! passed since the latest keystroke, so superseded checks are harmless no-ops
//! and the check armed by the final keystroke of a burst is the one that
//! reports "stopped typing". Scheduling and the quiet-period threshold use the
//! same delay.

use std::sync::Arc;

use table_core::{DomainError, Table, TableState, UserId};
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, instrument, trace};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Effect of a keystroke on the typing indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingTransition {
    /// Participant went from idle to typing; others were notified
    Started,
    /// Participant was already typing; only `last_typed` moved
    Refreshed,
}

/// Result of a delayed typing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The table was destroyed or replaced by another instance
    TableGone,
    /// The participant left or may no longer chat at this table
    Ineligible,
    /// Someone already cleared the flag
    AlreadyIdle,
    /// A newer keystroke arrived; a later check owns the clearing
    StillTyping,
    /// Flag cleared and "stopped typing" sent
    Stopped,
}

/// Typing service
pub struct TypingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TypingService<'a> {
    /// Create a new TypingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a keystroke from `user_id` at `table`
    ///
    /// Acquires the table lock for the duration of the update.
    pub fn start_typing(
        &self,
        table: &Arc<Table>,
        user_id: UserId,
        now: Instant,
    ) -> ServiceResult<TypingTransition> {
        let mut state = table.lock();
        self.start_typing_locked(table, &mut state, user_id, now)
    }

    /// Handle a keystroke for a caller that already holds the table lock
    #[instrument(skip(self, table, state), fields(table_id = %table.id()))]
    pub fn start_typing_locked(
        &self,
        table: &Arc<Table>,
        state: &mut TableState,
        user_id: UserId,
        now: Instant,
    ) -> ServiceResult<TypingTransition> {
        let seat = table.check_chat_eligibility(state, user_id)?;
        let runtime = Handle::try_current().map_err(|_| ServiceError::NoRuntime)?;

        let participant = state
            .participant_mut(seat)
            .ok_or(DomainError::ParticipantNotFound {
                table_id: table.id(),
                user_id,
            })?;

        let transition = if participant.record_keystroke(now) {
            let name = participant.name.clone();
            debug!(name = %name, "Participant started typing");
            self.ctx
                .notifier()
                .notify_chat_typing(table, state, &name, true);
            TypingTransition::Started
        } else {
            trace!("Typing refreshed");
            TypingTransition::Refreshed
        };

        // Fire and forget; a stale check is a no-op.
        let ctx = self.ctx.clone();
        let table = Arc::clone(table);
        let deadline = now + ctx.typing_delay();
        runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            TypingService::new(&ctx).reconcile_after_delay(&table, user_id);
        });

        Ok(transition)
    }

    /// Delayed check armed by `start_typing`, evaluated at the current instant
    pub fn reconcile_after_delay(&self, table: &Table, user_id: UserId) -> ReconcileOutcome {
        self.reconcile_at(table, user_id, Instant::now())
    }

    /// Clear the typing flag of `user_id` if they have been quiet since `now - delay`
    ///
    /// `table` is the instance captured when the check was armed. Nothing
    /// happens if the registry no longer holds that exact instance.
    #[instrument(skip(self, table), fields(table_id = %table.id()))]
    pub fn reconcile_at(&self, table: &Table, user_id: UserId, now: Instant) -> ReconcileOutcome {
        let current = match self.ctx.registry().get_table(table.id()) {
            Some(current) if current.is_same_instance(table) => current,
            _ => {
                trace!("Table gone before typing check");
                return ReconcileOutcome::TableGone;
            }
        };

        let mut state = current.lock();

        // A participant who left had their indicator removed by the leave path.
        let seat = match current.check_chat_eligibility(&state, user_id) {
            Ok(seat) => seat,
            Err(e) => {
                trace!(reason = %e, "Participant no longer eligible for typing check");
                return ReconcileOutcome::Ineligible;
            }
        };

        let participant = match state.participant_mut(seat) {
            Some(participant) => participant,
            None => return ReconcileOutcome::Ineligible,
        };

        if !participant.typing {
            return ReconcileOutcome::AlreadyIdle;
        }

        if !participant.stop_typing_if_quiet(now, self.ctx.typing_delay()) {
            trace!("Newer keystroke pending, keeping typing indicator");
            return ReconcileOutcome::StillTyping;
        }

        let name = participant.name.clone();
        debug!(name = %name, "Participant stopped typing");
        self.ctx
            .notifier()
            .notify_chat_typing(&current, &state, &name, false);

        ReconcileOutcome::Stopped
    }
}
