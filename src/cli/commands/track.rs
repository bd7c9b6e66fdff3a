//! Interactive timer on the terminal.
//!
//! One loop owns the `TimerMachine` and the store. A stdin reader thread
//! and the display ticker only send `Input` messages into its channel.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::history::HistoryView;
use crate::core::ticker::Ticker;
use crate::core::timer::{SaveOutcome, TimerMachine, TimerSettings};
use crate::errors::AppResult;
use crate::models::step::Step;
use crate::store::SqliteStore;
use crate::ui::messages::{self, header, info, success, warning};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, format_started};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// How many history rows are echoed after a save.
const HISTORY_PREVIEW: usize = 5;

enum Input {
    Line(String),
    Eof,
    Tick,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { name } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let (tx, rx) = mpsc::channel();
        spawn_stdin_reader(tx.clone());

        let mut session = TrackSession {
            cfg,
            machine: TimerMachine::new(SystemClock::new(), TimerSettings::from(cfg)),
            history: HistoryView::attach(&mut store)?,
            store,
            tx,
            rx,
        };
        session.run(name.as_deref())?;
    }
    Ok(())
}

/// Forward stdin lines to the loop. The thread is detached: it may stay
/// blocked on a read after the loop is gone, which ends with the process.
fn spawn_stdin_reader(tx: Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let msg = match line {
                Ok(l) => Input::Line(l),
                Err(e) => {
                    log::warn!("stdin read failed: {e}");
                    break;
                }
            };
            if tx.send(msg).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

struct TrackSession<'a> {
    cfg: &'a Config,
    machine: TimerMachine<SystemClock>,
    store: SqliteStore,
    history: HistoryView,
    tx: Sender<Input>,
    rx: Receiver<Input>,
}

impl TrackSession<'_> {
    fn run(&mut self, name: Option<&str>) -> AppResult<()> {
        header("ticktrack");
        info(format!("{} ticket(s) in history.", self.history.tickets().len()));

        if !self.start(name)? {
            return Ok(());
        }
        if !self.run_clock()? {
            return Ok(());
        }
        self.decide()
    }

    /// Collect a name until the timer starts. `false` when input ran out.
    fn start(&mut self, mut name: Option<&str>) -> AppResult<bool> {
        loop {
            let line = match name.take() {
                Some(n) => n.to_string(),
                None => {
                    prompt("Ticket name: ")?;
                    match self.next_line() {
                        Some(l) => l,
                        None => return Ok(false),
                    }
                }
            };

            self.machine.set_ticket_name(&line)?;
            if self.machine.start()? {
                return Ok(true);
            }
            if let Some(n) = self.machine.notice() {
                messages::notice(n);
            }
        }
    }

    /// Show the ticking clock until Enter. `false` when input ran out and
    /// the session was discarded.
    fn run_clock(&mut self) -> AppResult<bool> {
        println!(
            "⏱  Timing {} (press Enter to stop)",
            bold(self.machine.ticket_name())
        );

        let interval = Duration::from_millis(self.cfg.tick_interval_ms.max(10));
        let mut ticker = Ticker::spawn(interval, self.tx.clone(), || Input::Tick);

        let stopped_by_user = loop {
            match self.rx.recv() {
                Ok(Input::Tick) => {
                    self.machine.tick();
                    print!("\r   {}", self.machine.display_duration());
                    io::stdout().flush()?;
                }
                Ok(Input::Line(_)) => break true,
                Ok(Input::Eof) | Err(_) => break false,
            }
        };
        ticker.cancel();
        println!();

        let candidate = self.machine.stop()?;
        if !stopped_by_user {
            self.machine.cancel()?;
            warning(format!("Input closed; '{}' was not saved.", candidate.name));
            return Ok(false);
        }

        info(format!(
            "Stopped {} after {}",
            bold(&candidate.name),
            format_duration(candidate.duration_ms)
        ));
        Ok(true)
    }

    /// Save or cancel the stopped session.
    fn decide(&mut self) -> AppResult<()> {
        while self.machine.step() == Step::Stopped {
            prompt("[s]ave / [c]ancel: ")?;
            let Some(answer) = self.next_line() else {
                let dropped = self.machine.cancel()?;
                warning(format!("Input closed; '{}' was not saved.", dropped.name));
                return Ok(());
            };

            match answer.trim().to_lowercase().as_str() {
                "s" | "save" => self.save()?,
                "c" | "cancel" => {
                    let dropped = self.machine.cancel()?;
                    info(format!("Cancelled; '{}' was not saved.", dropped.name));
                }
                _ => warning("Type s to save or c to cancel."),
            }
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        match self.machine.save(&mut self.store)? {
            SaveOutcome::Saved(t) => {
                success(format!(
                    "Saved #{} {} ({})",
                    t.id,
                    t.name,
                    format_duration(t.duration_ms)
                ));
                if self.history.refresh(&self.store)? {
                    self.print_history();
                }
            }
            SaveOutcome::Failed { retained, reason } => {
                if let Some(n) = self.machine.notice() {
                    messages::notice(n);
                }
                messages::error(reason);
                if !retained {
                    warning("The session was discarded.");
                }
            }
        }
        Ok(())
    }

    fn print_history(&self) {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Ticket", 30),
            Column::new("Started", 22),
            Column::new("Duration", 8),
        ]);
        for t in self.history.tickets().iter().take(HISTORY_PREVIEW) {
            table.add_row(vec![
                t.id.to_string(),
                t.name.clone(),
                format_started(t.start_time, &self.cfg.date_format, &self.cfg.time_format),
                format_duration(t.duration_ms),
            ]);
        }
        println!("\nHistory:\n{}", table.render());
    }

    /// Next input line, skipping stale ticks. `None` on end of input.
    fn next_line(&mut self) -> Option<String> {
        loop {
            match self.rx.recv() {
                Ok(Input::Line(l)) => return Some(l),
                Ok(Input::Tick) => {
                    self.machine.tick();
                }
                Ok(Input::Eof) | Err(_) => return None,
            }
        }
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}
