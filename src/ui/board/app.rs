//! Interactive board: event loop and input state.
//!
//! The loop is synchronous: every keypress mutates the application state
//! through its controller methods (which persist before returning) and the
//! next frame re-renders from that state. No business state lives here.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{App, Selection};
use crate::config::Config;
use crate::date;
use crate::error::Result;
use crate::storage::FileStore;

use super::view;

const EVENT_POLL_MS: u64 = 120;

#[derive(Clone, Copy)]
pub(crate) enum StatusKind {
    Error,
    Info,
}

/// Input state: what the next keypress means.
pub(crate) enum Mode {
    Normal,
    AddTeammate { input: String },
    AssignText { input: String },
    AssignDue { text: String, input: String },
    SelectTeammate { index: usize },
    ConfirmReset,
}

pub struct BoardApp {
    pub(crate) app: App<FileStore>,
    pub(crate) settings: Config,
    pub(crate) mode: Mode,
    pub(crate) cursor: usize,
    pub(crate) show_help: bool,
    status: Option<(String, StatusKind)>,
}

impl BoardApp {
    fn new(app: App<FileStore>, settings: Config) -> Self {
        Self {
            app,
            settings,
            mode: Mode::Normal,
            cursor: 0,
            show_help: false,
            status: None,
        }
    }

    /// Display rows of the board as (group index, task index) pairs.
    pub(crate) fn rows(&self) -> Vec<(usize, usize)> {
        let mut rows = Vec::new();
        for (group_idx, group) in self.app.board().groups().iter().enumerate() {
            for task_idx in 0..group.tasks.len() {
                rows.push((group_idx, task_idx));
            }
        }
        rows
    }

    pub(crate) fn status_line(&self) -> Option<&(String, StatusKind)> {
        self.status.as_ref()
    }

    pub(crate) fn selector_label(&self) -> &str {
        self.app
            .selection()
            .name()
            .unwrap_or(self.settings.board.placeholder.as_str())
    }

    pub(crate) fn counts_summary(&self) -> String {
        let total = self.app.board().total_tasks();
        let completed: usize = self
            .app
            .board()
            .groups()
            .iter()
            .flat_map(|group| &group.tasks)
            .filter(|task| task.completed)
            .count();
        format!(
            "teammates: {}  tasks: {}  completed: {}",
            self.app.roster().len(),
            total,
            completed
        )
    }

    pub(crate) fn footer_hint(&self) -> String {
        match &self.mode {
            Mode::AddTeammate { .. } | Mode::AssignText { .. } | Mode::AssignDue { .. } => {
                "type value  enter confirm  esc cancel".to_string()
            }
            Mode::SelectTeammate { .. } => "j/k move  enter choose  esc cancel".to_string(),
            Mode::ConfirmReset => "y confirm reset  esc cancel".to_string(),
            Mode::Normal => {
                "j/k move  space toggle  a add  s select  n new task  c clear  R reset  ? help  q quit"
                    .to_string()
            }
        }
    }

    /// Selector options: the placeholder first, then the roster in order.
    pub(crate) fn selector_options(&self) -> Vec<String> {
        let mut options = vec![self.settings.board.placeholder.clone()];
        options.extend(self.app.roster().names().iter().cloned());
        options
    }

    fn info(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), StatusKind::Info));
    }

    fn error(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), StatusKind::Error));
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn clamp_cursor(&mut self) {
        let rows = self.rows().len();
        if rows == 0 {
            self.cursor = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let rows = self.rows().len();
        if rows == 0 {
            return;
        }
        let current = self.cursor as isize;
        let next = (current + delta).clamp(0, rows as isize - 1);
        self.cursor = next as usize;
    }

    fn toggle_at_cursor(&mut self) {
        let Some(&(group_idx, task_idx)) = self.rows().get(self.cursor) else {
            return;
        };
        let teammate = self.app.board().groups()[group_idx].teammate.clone();
        match self.app.toggle_task(&teammate, task_idx + 1) {
            Ok(true) => self.info("task completed"),
            Ok(false) => self.info("task reopened"),
            Err(err) => self.error(err.to_string()),
        }
    }

    /// Initial highlight for the selector: the remembered choice, found by
    /// name, or the placeholder.
    fn selector_start(&self) -> usize {
        match self.app.selection() {
            Selection::Placeholder => 0,
            Selection::Teammate(name) => self
                .app
                .roster()
                .names()
                .iter()
                .position(|existing| existing == name)
                .map(|idx| idx + 1)
                .unwrap_or(0),
        }
    }
}

pub fn run(app: App<FileStore>, settings: Config) -> Result<()> {
    let mut board = BoardApp::new(app, settings);
    run_terminal(&mut board)
}

fn run_terminal(board: &mut BoardApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, board);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: &mut BoardApp,
) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| view::render(frame, board))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(board, key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Handle one keypress; returns true when the loop should exit.
fn handle_key(board: &mut BoardApp, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match board.mode {
        Mode::Normal => handle_normal_key(board, key),
        Mode::AddTeammate { .. } => {
            handle_add_key(board, key);
            false
        }
        Mode::AssignText { .. } | Mode::AssignDue { .. } => {
            handle_assign_key(board, key);
            false
        }
        Mode::SelectTeammate { .. } => {
            handle_selector_key(board, key);
            false
        }
        Mode::ConfirmReset => {
            handle_confirm_key(board, key);
            false
        }
    }
}

fn handle_normal_key(board: &mut BoardApp, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if board.show_help {
                board.show_help = false;
                return false;
            }
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => board.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => board.move_cursor(-1),
        KeyCode::Char(' ') => board.toggle_at_cursor(),
        KeyCode::Char('a') => {
            board.clear_status();
            board.mode = Mode::AddTeammate {
                input: String::new(),
            };
        }
        KeyCode::Char('n') => {
            board.clear_status();
            if board.app.selection().name().is_none() {
                board.error("no teammate selected (press s)");
            } else {
                board.mode = Mode::AssignText {
                    input: String::new(),
                };
            }
        }
        KeyCode::Char('s') => {
            board.clear_status();
            if board.app.roster().is_empty() {
                board.error("no teammates yet (press a)");
            } else {
                board.mode = Mode::SelectTeammate {
                    index: board.selector_start(),
                };
            }
        }
        KeyCode::Char('c') => match board.app.clear_completed() {
            Ok(0) => board.info("no completed tasks"),
            Ok(removed) => {
                board.info(format!("removed {removed} completed task(s)"));
                board.clamp_cursor();
            }
            Err(err) => board.error(err.to_string()),
        },
        KeyCode::Char('R') => {
            board.clear_status();
            board.mode = Mode::ConfirmReset;
        }
        KeyCode::Char('?') => board.show_help = !board.show_help,
        _ => {}
    }
    false
}

fn handle_add_key(board: &mut BoardApp, key: KeyEvent) {
    let Mode::AddTeammate { input } = &mut board.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc => board.mode = Mode::Normal,
        KeyCode::Enter => {
            let name = input.clone();
            match board.app.add_teammate(&name) {
                Ok(stored) => {
                    board.info(format!("added \"{stored}\""));
                    board.mode = Mode::Normal;
                }
                Err(err) => board.error(err.to_string()),
            }
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(ch) => input.push(ch),
        _ => {}
    }
}

fn handle_assign_key(board: &mut BoardApp, key: KeyEvent) {
    match &mut board.mode {
        Mode::AssignText { input } => match key.code {
            KeyCode::Esc => board.mode = Mode::Normal,
            KeyCode::Enter => {
                let text = input.clone();
                // Due date prompt starts prefilled with today.
                board.mode = Mode::AssignDue {
                    text,
                    input: date::format_day(date::today()),
                };
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(ch) => input.push(ch),
            _ => {}
        },
        Mode::AssignDue { text, input } => match key.code {
            KeyCode::Esc => board.mode = Mode::Normal,
            KeyCode::Enter => {
                let text = text.clone();
                let raw_due = input.clone();
                let outcome = date::parse_day(&raw_due)
                    .and_then(|due| board.app.assign_selected(&text, due));
                match outcome {
                    Ok(()) => {
                        board.info(format!("assigned \"{}\"", text.trim()));
                        board.mode = Mode::Normal;
                        board.clamp_cursor();
                    }
                    Err(err) => board.error(err.to_string()),
                }
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(ch) => input.push(ch),
            _ => {}
        },
        _ => {}
    }
}

fn handle_selector_key(board: &mut BoardApp, key: KeyEvent) {
    let options = board.selector_options().len();
    let Mode::SelectTeammate { index } = &mut board.mode else {
        return;
    };
    match key.code {
        KeyCode::Esc => board.mode = Mode::Normal,
        KeyCode::Char('j') | KeyCode::Down => {
            if *index + 1 < options {
                *index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *index = index.saturating_sub(1);
        }
        KeyCode::Enter => {
            let choice = *index;
            let outcome = if choice == 0 {
                board.app.deselect();
                Ok(())
            } else {
                let name = board.app.roster().names()[choice - 1].clone();
                board.app.select(&name)
            };
            match outcome {
                Ok(()) => board.mode = Mode::Normal,
                Err(err) => board.error(err.to_string()),
            }
        }
        _ => {}
    }
}

fn handle_confirm_key(board: &mut BoardApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => match board.app.reset() {
            Ok(()) => {
                board.cursor = 0;
                board.info("board reset");
                board.mode = Mode::Normal;
            }
            Err(err) => {
                board.error(err.to_string());
                board.mode = Mode::Normal;
            }
        },
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
            board.mode = Mode::Normal;
        }
        _ => {}
    }
}
