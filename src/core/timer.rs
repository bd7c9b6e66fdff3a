//! The ticket timer: new → running → stopped → (saved | cancelled) → new.
//!
//! The machine owns the only pending session. Durations are always taken
//! from the two wall-clock timestamps at stop time; the monotonic reading
//! only feeds the ticking display.

use crate::config::{Config, SaveFailurePolicy};
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::notice::{Notice, NoticeKind, SAVE_FAILED, TICKET_NAME_REQUIRED};
use crate::models::step::Step;
use crate::models::ticket::{NewTicket, Ticket};
use crate::store::TicketStore;
use crate::utils::time::format_duration;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct TimerSettings {
    pub save_failure_policy: SaveFailurePolicy,
    pub notice_timeout: Duration,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            save_failure_policy: SaveFailurePolicy::default(),
            notice_timeout: Duration::from_secs(3),
        }
    }
}

impl From<&Config> for TimerSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            save_failure_policy: cfg.save_failure_policy,
            notice_timeout: Duration::from_secs(cfg.notice_timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    New,
    Running {
        /// Wall clock at start, stored in the record.
        start_time: i64,
        /// Monotonic reference for the display.
        started: Duration,
    },
    Stopped {
        candidate: NewTicket,
    },
}

/// Result of [`TimerMachine::save`]. A store failure is not an `Err`: it
/// is reported to the user through the notice slot and here.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(Ticket),
    Failed { retained: bool, reason: String },
}

pub struct TimerMachine<C: Clock> {
    clock: C,
    settings: TimerSettings,
    ticket_name: String,
    phase: Phase,
    elapsed_ms: i64,
    notice: Option<Notice>,
}

impl<C: Clock> TimerMachine<C> {
    pub fn new(clock: C, settings: TimerSettings) -> Self {
        Self {
            clock,
            settings,
            ticket_name: String::new(),
            phase: Phase::New,
            elapsed_ms: 0,
            notice: None,
        }
    }

    pub fn step(&self) -> Step {
        match self.phase {
            Phase::New => Step::New,
            Phase::Running { .. } => Step::Running,
            Phase::Stopped { .. } => Step::Stopped,
        }
    }

    pub fn ticket_name(&self) -> &str {
        &self.ticket_name
    }

    /// The name can only be edited before the timer starts.
    pub fn set_ticket_name(&mut self, name: &str) -> AppResult<()> {
        self.require(Step::New, "rename the ticket")?;
        self.ticket_name = name.to_string();
        Ok(())
    }

    /// Start timing. A blank name raises a notice and returns `Ok(false)`
    /// without leaving `new`.
    pub fn start(&mut self) -> AppResult<bool> {
        self.require(Step::New, "start")?;

        if self.ticket_name.trim().is_empty() {
            self.raise(NoticeKind::Error, TICKET_NAME_REQUIRED);
            return Ok(false);
        }

        self.phase = Phase::Running {
            start_time: self.clock.now_ms(),
            started: self.clock.monotonic(),
        };
        self.elapsed_ms = 0;
        self.notice = None;
        log::debug!("timer started for '{}'", self.ticket_name.trim());
        Ok(true)
    }

    /// Stop timing and hold the resulting record as the candidate.
    pub fn stop(&mut self) -> AppResult<NewTicket> {
        let Phase::Running { start_time, .. } = self.phase else {
            return Err(self.invalid("stop"));
        };

        let candidate = NewTicket::from_span(&self.ticket_name, start_time, self.clock.now_ms());
        self.ticket_name = candidate.name.clone();
        self.elapsed_ms = candidate.duration_ms;
        self.notice = None;
        log::debug!("timer stopped after {} ms", candidate.duration_ms);

        self.phase = Phase::Stopped {
            candidate: candidate.clone(),
        };
        Ok(candidate)
    }

    /// Write the candidate to `store`. On failure the configured
    /// [`SaveFailurePolicy`] decides whether the candidate survives.
    pub fn save(&mut self, store: &mut dyn TicketStore) -> AppResult<SaveOutcome> {
        let Phase::Stopped { candidate } = &self.phase else {
            return Err(self.invalid("save"));
        };

        match store.insert(candidate) {
            Ok(id) => {
                let saved = candidate.clone().with_id(id);
                self.reset();
                Ok(SaveOutcome::Saved(saved))
            }
            Err(e) => {
                log::error!("Failed to save ticket: {e}");
                let retained = match self.settings.save_failure_policy {
                    SaveFailurePolicy::Retain => true,
                    SaveFailurePolicy::Discard => {
                        log::warn!("discarding unsaved ticket '{}'", self.ticket_name);
                        self.reset();
                        false
                    }
                };
                self.raise(NoticeKind::Error, SAVE_FAILED);
                Ok(SaveOutcome::Failed {
                    retained,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Throw the candidate away without writing it. Returns what was dropped.
    pub fn cancel(&mut self) -> AppResult<NewTicket> {
        let Phase::Stopped { candidate } = &self.phase else {
            return Err(self.invalid("cancel"));
        };
        let dropped = candidate.clone();
        self.reset();
        Ok(dropped)
    }

    /// Refresh the elapsed display and expire a stale notice.
    /// Returns the elapsed milliseconds.
    pub fn tick(&mut self) -> i64 {
        let now = self.clock.monotonic();
        if let Phase::Running { started, .. } = self.phase {
            self.elapsed_ms = now.saturating_sub(started).as_millis() as i64;
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.settings.notice_timeout))
        {
            self.notice = None;
        }
        self.elapsed_ms
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.elapsed_ms
    }

    pub fn candidate(&self) -> Option<&NewTicket> {
        match &self.phase {
            Phase::Stopped { candidate } => Some(candidate),
            _ => None,
        }
    }

    /// The current notice, unless it has already timed out.
    pub fn notice(&self) -> Option<&Notice> {
        let now = self.clock.monotonic();
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(now, self.settings.notice_timeout))
    }

    /// What the big timer display shows in the current step.
    pub fn display_duration(&self) -> String {
        match &self.phase {
            Phase::New => format_duration(0),
            Phase::Running { .. } => format_duration(self.elapsed_ms),
            Phase::Stopped { candidate } => format_duration(candidate.duration_ms),
        }
    }

    fn reset(&mut self) {
        self.ticket_name.clear();
        self.phase = Phase::New;
        self.elapsed_ms = 0;
        self.notice = None;
    }

    fn raise(&mut self, kind: NoticeKind, text: &str) {
        self.notice = Some(Notice::new(kind, text, self.clock.monotonic()));
    }

    fn require(&self, step: Step, operation: &'static str) -> AppResult<()> {
        if self.step() == step {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> AppError {
        AppError::InvalidTransition {
            operation,
            state: self.step().as_str(),
        }
    }
}
