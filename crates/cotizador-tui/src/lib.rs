// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use cotizador_app::{
    AppCommand, AppMode, AppState, CapacityKind, DeliveryTerm, LogSeverity, QuoteSession,
    TUNLAND_VERSIONS, VehicleModel, Warranty,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

const LOG_PANE_ROWS: u16 = 8;
const CURSOR_MARK: &str = "▌";

/// Result of one successful document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuote {
    pub path: PathBuf,
    pub folio: String,
}

/// Seam between the form UI and the generation pipeline. The CLI wires in
/// the PDF runtime; tests substitute a fake.
pub trait AppRuntime {
    fn generate(&mut self, session: &mut QuoteSession) -> Result<GeneratedQuote>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Client,
    Model,
    Version,
    VehicleType,
    Year,
    Length,
    Width,
    Height,
    GrossWeight,
    CapacityKind,
    CapacityValue,
    Warranty,
    Price,
    Discount,
    Delivery,
    DeliveryOther,
}

impl FieldId {
    pub const ALL: [Self; 16] = [
        Self::Client,
        Self::Model,
        Self::Version,
        Self::VehicleType,
        Self::Year,
        Self::Length,
        Self::Width,
        Self::Height,
        Self::GrossWeight,
        Self::CapacityKind,
        Self::CapacityValue,
        Self::Warranty,
        Self::Price,
        Self::Discount,
        Self::Delivery,
        Self::DeliveryOther,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Client => "cliente",
            Self::Model => "modelo",
            Self::Version => "versión",
            Self::VehicleType => "tipo",
            Self::Year => "año",
            Self::Length => "largo (m)",
            Self::Width => "ancho (m)",
            Self::Height => "altura (m)",
            Self::GrossWeight => "PBV (kg)",
            Self::CapacityKind => "capacidad",
            Self::CapacityValue => "capacidad valor",
            Self::Warranty => "garantía",
            Self::Price => "precio",
            Self::Discount => "descuento",
            Self::Delivery => "fecha de entrega",
            Self::DeliveryOther => "otra fecha",
        }
    }

    /// Choice fields cycle with left/right instead of free text entry.
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            Self::Model | Self::Version | Self::CapacityKind | Self::Warranty | Self::Delivery
        )
    }

    /// Version participates only for Tunland; the free-text delivery date
    /// only when "Otro" is selected.
    pub fn is_active(self, session: &QuoteSession) -> bool {
        match self {
            Self::Version => session.form.model.has_versions(),
            Self::DeliveryOther => session.form.delivery == DeliveryTerm::Other,
            _ => true,
        }
    }

    pub fn value(self, session: &QuoteSession) -> String {
        let form = &session.form;
        match self {
            Self::Client => form.client.clone(),
            Self::Model => form.model.as_str().to_owned(),
            Self::Version => form.version.clone(),
            Self::VehicleType => form.vehicle_type.clone(),
            Self::Year => form.year.clone(),
            Self::Length => form.length_m.clone(),
            Self::Width => form.width_m.clone(),
            Self::Height => form.height_m.clone(),
            Self::GrossWeight => form.gross_weight_kg.clone(),
            Self::CapacityKind => form.capacity_kind_label().to_owned(),
            Self::CapacityValue => form.capacity_value.clone(),
            Self::Warranty => form.warranty.label().to_owned(),
            Self::Price => form.price.clone(),
            Self::Discount => form.discount.clone(),
            Self::Delivery => form.delivery.label().to_owned(),
            Self::DeliveryOther => form.delivery_other.clone(),
        }
    }

    fn text_slot(self, session: &mut QuoteSession) -> Option<&mut String> {
        let form = &mut session.form;
        match self {
            Self::Client => Some(&mut form.client),
            Self::Version => Some(&mut form.version),
            Self::VehicleType => Some(&mut form.vehicle_type),
            Self::Year => Some(&mut form.year),
            Self::Length => Some(&mut form.length_m),
            Self::Width => Some(&mut form.width_m),
            Self::Height => Some(&mut form.height_m),
            Self::GrossWeight => Some(&mut form.gross_weight_kg),
            Self::CapacityValue => Some(&mut form.capacity_value),
            Self::Price => Some(&mut form.price),
            Self::Discount => Some(&mut form.discount),
            Self::DeliveryOther => Some(&mut form.delivery_other),
            Self::Model | Self::CapacityKind | Self::Warranty | Self::Delivery => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ViewData {
    field_index: usize,
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    session: &mut QuoteSession,
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    session.log.append("session started");

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, session, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, session, runtime, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns true when the app should exit.
fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    session: &mut QuoteSession,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
        trigger_generate(state, session, runtime);
        return false;
    }

    match state.mode {
        AppMode::Nav => handle_nav_key(state, session, view_data, key),
        AppMode::Edit => handle_edit_key(state, session, view_data, key),
    }
}

fn handle_nav_key(
    state: &mut AppState,
    session: &mut QuoteSession,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Down | KeyCode::Char('j') => {
            move_field_cursor(view_data, 1);
            state.dispatch(AppCommand::ClearStatus);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_field_cursor(view_data, -1);
            state.dispatch(AppCommand::ClearStatus);
        }
        KeyCode::Left | KeyCode::Char('h') => cycle_choice(state, session, view_data, -1),
        KeyCode::Right | KeyCode::Char('l') => cycle_choice(state, session, view_data, 1),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
            let field = selected_field(view_data);
            if field.is_choice() {
                cycle_choice(state, session, view_data, 1);
            } else if field.is_active(session) {
                state.dispatch(AppCommand::EnterEditMode);
            } else {
                emit_status(state, inactive_field_hint(field));
            }
        }
        _ => {}
    }
    false
}

fn handle_edit_key(
    state: &mut AppState,
    session: &mut QuoteSession,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    let field = selected_field(view_data);
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.dispatch(AppCommand::ExitToNav);
            session.log.append(format!(
                "field updated: {} = {}",
                field.label(),
                field.value(session),
            ));
        }
        KeyCode::Backspace => {
            if let Some(slot) = field.text_slot(session) {
                slot.pop();
            }
        }
        KeyCode::Char(ch) => {
            if let Some(slot) = field.text_slot(session) {
                slot.push(ch);
            }
        }
        _ => {}
    }
    false
}

fn selected_field(view_data: &ViewData) -> FieldId {
    FieldId::ALL[view_data.field_index.min(FieldId::ALL.len() - 1)]
}

fn move_field_cursor(view_data: &mut ViewData, delta: isize) {
    let len = FieldId::ALL.len() as isize;
    let next = (view_data.field_index as isize + delta).rem_euclid(len) as usize;
    view_data.field_index = next;
}

fn inactive_field_hint(field: FieldId) -> String {
    match field {
        FieldId::Version => "versión only applies to TUNLAND".to_owned(),
        FieldId::DeliveryOther => "select \"Otro\" first to enter a custom date".to_owned(),
        other => format!("{} is not editable right now", other.label()),
    }
}

fn emit_status(state: &mut AppState, message: impl Into<String>) {
    state.dispatch(AppCommand::SetStatus(message.into()));
}

/// Step the selected choice field. Text fields are left untouched.
fn cycle_choice(
    state: &mut AppState,
    session: &mut QuoteSession,
    view_data: &ViewData,
    delta: isize,
) {
    let field = selected_field(view_data);
    if !field.is_active(session) {
        emit_status(state, inactive_field_hint(field));
        return;
    }

    let form = &mut session.form;
    match field {
        FieldId::Model => {
            let index = VehicleModel::ALL
                .iter()
                .position(|model| *model == form.model)
                .unwrap_or(0) as isize;
            let len = VehicleModel::ALL.len() as isize;
            form.model = VehicleModel::ALL[(index + delta).rem_euclid(len) as usize];
        }
        FieldId::Version => {
            let index = TUNLAND_VERSIONS
                .iter()
                .position(|version| *version == form.version)
                .map(|found| found as isize)
                .unwrap_or(-delta);
            let len = TUNLAND_VERSIONS.len() as isize;
            form.version = TUNLAND_VERSIONS[(index + delta).rem_euclid(len) as usize].to_owned();
        }
        FieldId::CapacityKind => {
            // None participates in the cycle as the leading blank choice.
            let index = match form.capacity_kind {
                None => 0,
                Some(kind) => {
                    CapacityKind::ALL
                        .iter()
                        .position(|candidate| *candidate == kind)
                        .unwrap_or(0) as isize
                        + 1
                }
            };
            let len = CapacityKind::ALL.len() as isize + 1;
            let next = (index + delta).rem_euclid(len) as usize;
            form.capacity_kind = if next == 0 {
                None
            } else {
                Some(CapacityKind::ALL[next - 1])
            };
        }
        FieldId::Warranty => {
            let index = Warranty::ALL
                .iter()
                .position(|warranty| *warranty == form.warranty)
                .unwrap_or(0) as isize;
            let len = Warranty::ALL.len() as isize;
            form.warranty = Warranty::ALL[(index + delta).rem_euclid(len) as usize];
        }
        FieldId::Delivery => {
            let index = DeliveryTerm::ALL
                .iter()
                .position(|term| *term == form.delivery)
                .unwrap_or(0) as isize;
            let len = DeliveryTerm::ALL.len() as isize;
            let next = DeliveryTerm::ALL[(index + delta).rem_euclid(len) as usize];
            form.set_delivery(next);
        }
        _ => return,
    }

    session.log.append(format!(
        "field updated: {} = {}",
        field.label(),
        field.value(session),
    ));
}

/// Generate action: every outcome lands on the status line, success and
/// failure alike. The runtime owns the log entries for the attempt itself.
fn trigger_generate<R: AppRuntime>(
    state: &mut AppState,
    session: &mut QuoteSession,
    runtime: &mut R,
) {
    match runtime.generate(session) {
        Ok(generated) => {
            emit_status(
                state,
                format!("{} saved to {}", generated.folio, generated.path.display()),
            );
        }
        Err(error) => {
            emit_status(state, format!("generation failed: {error:#}"));
        }
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    session: &QuoteSession,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(LOG_PANE_ROWS),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(format!(
        "Folio: {}    Fecha: {}",
        session.folio(),
        session.form.quote_date,
    ))
    .block(Block::default().title("cotizador").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    render_form(frame, layout[1], state, session, view_data);

    let log = Paragraph::new(render_log_text(session, LOG_PANE_ROWS as usize - 2))
        .block(Block::default().title("eventos").borders(Borders::ALL));
    frame.render_widget(log, layout[2]);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);
}

fn render_form(
    frame: &mut ratatui::Frame<'_>,
    area: ratatui::layout::Rect,
    state: &AppState,
    session: &QuoteSession,
    view_data: &ViewData,
) {
    let rows: Vec<Row> = FieldId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let selected = index == view_data.field_index;
            let mut value = field.value(session);
            if selected && state.mode == AppMode::Edit {
                value.push_str(CURSOR_MARK);
            }

            let style = if !field.is_active(session) {
                Style::default().fg(Color::DarkGray)
            } else if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![field.label().to_owned(), value]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(1)])
        .block(Block::default().title("cotización").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn render_log_text(session: &QuoteSession, max_rows: usize) -> String {
    let entries = session.log.entries();
    let skip = entries.len().saturating_sub(max_rows);
    entries[skip..]
        .iter()
        .map(|entry| {
            let mark = match entry.severity {
                LogSeverity::Info => " ",
                LogSeverity::Error => "!",
            };
            format!("{} {} {}", entry.timestamp, mark, entry.message)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn status_text(state: &AppState) -> String {
    match (&state.status_line, state.mode) {
        (Some(status), _) => status.clone(),
        (None, AppMode::Nav) => {
            "j/k move · h/l choices · enter edit · ctrl-g generate PDF · q quit".to_owned()
        }
        (None, AppMode::Edit) => "typing · enter/esc done".to_owned(),
    }
}
