use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use growthcast_api::{ForecastClient, YearlySummary};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, notification_bar::NotificationBar, status_bar::StatusBar,
};
use crate::screens::{parameters::ParametersScreen, summary::SummaryPanel};
use crate::state::AppState;
use crate::worker::{ApiRequest, ApiResponse, ApiWorker};

/// How long the event loop waits for input before pumping the worker and
/// the notification timer again.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Hook invoked with the forecast summary after each accepted submission.
pub type SummaryCallback = Box<dyn FnMut(&YearlySummary)>;

pub struct App {
    pub(crate) state: AppState,
    pub(crate) worker: ApiWorker,
    parameters_screen: ParametersScreen,
    summary_panel: SummaryPanel,
    status_bar: StatusBar,
    notification_bar: NotificationBar,
    on_parameters_updated: Option<SummaryCallback>,
}

impl App {
    pub fn new(client: ForecastClient) -> Self {
        Self {
            state: AppState::default(),
            worker: ApiWorker::new(client),
            parameters_screen: ParametersScreen::new(),
            summary_panel: SummaryPanel::new(),
            status_bar: StatusBar::new(),
            notification_bar: NotificationBar::new(),
            on_parameters_updated: None,
        }
    }

    /// Install a hook that receives the yearly summary of every accepted
    /// submission. Called at most once per submission.
    pub fn on_parameters_updated(mut self, callback: SummaryCallback) -> Self {
        self.on_parameters_updated = Some(callback);
        self
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        // Load the stored parameters once at startup. A failure is logged
        // by the response handler and the defaults stand.
        self.worker.send(ApiRequest::FetchParameters);

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;

            while let Some(response) = self.worker.try_recv() {
                self.handle_response(response);
            }
            self.state.notification.tick(Instant::now());

            if event::poll(TICK_RATE)?
                && let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
            }
        }

        if self.state.dirty {
            tracing::warn!("exiting with unsubmitted parameter edits");
        }
        self.worker.shutdown();
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Form and summary
                Constraint::Length(1), // Notification banner
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[0]);

        self.parameters_screen.render(frame, columns[0], &self.state);
        self.summary_panel.render(frame, columns[1], &self.state);
        self.notification_bar.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // An open edit buffer gets every key, including 'q'.
        if self.state.form.editing.is_some() {
            self.parameters_screen.handle_key(key_event, &mut self.state);
            return;
        }

        if self.notification_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            KeyCode::F(10) => {
                self.submit();
                return;
            }
            _ => {}
        }

        self.parameters_screen.handle_key(key_event, &mut self.state);
    }

    /// Send the current parameter set to the service for recomputation.
    ///
    /// Ignored while a submission is already in flight. The worker gets a
    /// snapshot, so edits made while waiting apply to the next submission.
    pub(crate) fn submit(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;
        let snapshot = self.state.params.clone();
        if !self.worker.send(ApiRequest::Submit(snapshot)) {
            self.state.submitting = false;
            self.state
                .notification
                .show_error("An error occurred while updating parameters");
        }
    }

    pub(crate) fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::ParametersLoaded(Ok(Some(params))) => {
                tracing::info!("loaded stored parameters from the service");
                self.state.params = params;
            }
            ApiResponse::ParametersLoaded(Ok(None)) => {
                tracing::info!("service has no stored parameters; keeping defaults");
            }
            ApiResponse::ParametersLoaded(Err(err)) => {
                // Silent for the user: the defaults remain in effect.
                tracing::error!("error fetching parameters: {err}");
            }
            ApiResponse::SubmitFinished(result) => {
                self.state.submitting = false;
                match result {
                    Ok(response) if response.is_success() => {
                        self.state
                            .notification
                            .show_success("Parameters updated successfully!");
                        self.state.dirty = false;
                        if let Some(summary) = response.yearly_summary {
                            if let Some(callback) = self.on_parameters_updated.as_mut() {
                                callback(&summary);
                            }
                            self.state.last_summary = Some(summary);
                        }
                    }
                    Ok(response) => {
                        self.state.notification.show_error(
                            response
                                .message
                                .as_deref()
                                .unwrap_or("Failed to update parameters"),
                        );
                    }
                    Err(err) => {
                        tracing::error!("error updating parameters: {err}");
                        self.state
                            .notification
                            .show_error("An error occurred while updating parameters");
                    }
                }
            }
        }
    }
}
