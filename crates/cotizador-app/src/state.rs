// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{EventLog, FolioCounter, QuotationForm, folio};

/// One user session: the form being edited, the folio sequence, and the
/// append-only event log. Lives for the duration of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSession {
    pub form: QuotationForm,
    pub counter: FolioCounter,
    pub log: EventLog,
}

impl QuoteSession {
    pub fn new(seed: u32) -> Self {
        Self {
            form: QuotationForm::new(),
            counter: FolioCounter::new(seed),
            log: EventLog::new(),
        }
    }

    /// Current display folio, derived from the selected model and counter.
    pub fn folio(&self) -> String {
        folio(self.form.model, self.counter.get())
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new(crate::DEFAULT_FOLIO_SEED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    EnterEditMode,
    ExitToNav,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::EnterEditMode => {
                self.mode = AppMode::Edit;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ExitToNav => {
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }
}
