//! Dashboard runtime - owns the terminal, runs the event loop, executes
//! effects.
//!
//! All side effects happen here; the reducer stays pure and produces
//! effects. The loop is fully synchronous: the dashboard has no network
//! or background work, so events are terminal input plus a render tick.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use mdeck_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while the user is interacting (~60fps).
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Nothing animates on its own, so a longer
/// timeout just saves CPU.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen dashboard runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct DashboardRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl DashboardRuntime {
    /// Creates a new runtime: installs the panic hook, enters the
    /// alternate screen, seeds the state.
    pub fn new(config: Config) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config);

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        tracing::debug!("dashboard loop started");

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Initial render.

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Prepend the Frame event with the current terminal size so
            // scroll housekeeping runs before input is processed.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers a render; input batches until the
                // next tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        tracing::debug!("dashboard loop finished");
        Ok(())
    }

    /// Collects pending terminal events, emitting a Tick when due.
    ///
    /// Polls fast while the user is actively typing (so renders track
    /// input closely) and slowly when idle.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if recent_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due; wake early on input.
        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => self.state.tui.should_quit = true,
            }
        }
    }
}

impl Drop for DashboardRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
