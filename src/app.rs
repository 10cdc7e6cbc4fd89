//! Application controller
//!
//! One `App` owns all business state: the roster, the board, the selector
//! state, and the store handle. Every mutation goes through a method here
//! and ends in `sync()`, which recomputes the empty-state indicator and
//! overwrites the persisted snapshot, so the store never lags behind memory.
//! Front-ends (CLI, TUI) render from this state and hold none of their own.

use chrono::NaiveDate;

use tracing::warn;

use crate::board::Board;
use crate::date;
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::snapshot::{self, STORE_KEY};
use crate::storage::KeyValue;

/// Selector state: no explicit choice yet, or a teammate remembered by name.
///
/// Keying on the name keeps the choice stable across the re-sorts that
/// later additions trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Placeholder,
    Teammate(String),
}

impl Selection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Placeholder => None,
            Selection::Teammate(name) => Some(name),
        }
    }
}

/// The application state and its mutation methods.
#[derive(Debug)]
pub struct App<S: KeyValue> {
    roster: Roster,
    board: Board,
    selection: Selection,
    empty: bool,
    store: S,
}

impl<S: KeyValue> App<S> {
    /// Start from the empty initial state without touching the store.
    pub fn new(store: S) -> Self {
        Self {
            roster: Roster::new(),
            board: Board::new(),
            selection: Selection::Placeholder,
            empty: true,
            store,
        }
    }

    /// Rebuild state from the persisted snapshot.
    ///
    /// A missing payload is a normal empty start. A payload that fails to
    /// decode or restore is logged and also treated as an empty start; it is
    /// never fatal.
    pub fn load(store: S) -> Result<Self> {
        let mut app = Self::new(store);
        let raw = match app.store.get(STORE_KEY)? {
            Some(raw) => raw,
            None => return Ok(app),
        };

        match snapshot::decode(&raw).and_then(|snapshot| snapshot::restore(&snapshot)) {
            Ok((roster, board)) => {
                app.roster = roster;
                app.board = board;
                app.empty = app.board.is_empty();
            }
            Err(err) => {
                warn!(%err, "discarding unreadable snapshot, starting empty");
            }
        }
        Ok(app)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The empty-state indicator: true when no tasks exist across all
    /// groups. Recomputed by every mutation and by `load`.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Add a teammate and persist. Returns the stored name.
    pub fn add_teammate(&mut self, name: &str) -> Result<String> {
        let stored = self.roster.add(name)?.to_string();
        self.sync()?;
        Ok(stored)
    }

    /// Remember an explicit selector choice, matching case-insensitively
    /// against the roster.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let stored = self.resolve_teammate(name)?;
        self.selection = Selection::Teammate(stored);
        Ok(())
    }

    /// Drop the selector back to the placeholder.
    pub fn deselect(&mut self) {
        self.selection = Selection::Placeholder;
    }

    /// Assign a task to a named teammate and persist.
    pub fn assign(&mut self, teammate: &str, text: &str, due: NaiveDate) -> Result<()> {
        let stored = self.resolve_teammate(teammate)?;
        self.board.assign(&stored, text, due, date::today())?;
        self.sync()
    }

    /// Assign a task to the currently selected teammate and persist.
    pub fn assign_selected(&mut self, text: &str, due: NaiveDate) -> Result<()> {
        let teammate = self
            .selection
            .name()
            .ok_or_else(|| Error::Validation("no teammate selected".to_string()))?
            .to_string();
        self.board.assign(&teammate, text, due, date::today())?;
        self.sync()
    }

    /// Toggle the completion flag of a task and persist. Returns the new
    /// flag.
    pub fn toggle_task(&mut self, teammate: &str, index: usize) -> Result<bool> {
        let stored = self.resolve_teammate(teammate)?;
        let completed = self.board.toggle(&stored, index)?;
        self.sync()?;
        Ok(completed)
    }

    /// Remove all completed tasks, prune empty groups, persist. Returns the
    /// removed count. The roster is untouched.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.board.clear_completed();
        self.sync()?;
        Ok(removed)
    }

    /// Wipe the roster and the board back to the initial empty state and
    /// persist. Confirmation is the caller's responsibility.
    pub fn reset(&mut self) -> Result<()> {
        self.board.clear();
        self.roster.clear();
        self.selection = Selection::Placeholder;
        self.sync()
    }

    fn resolve_teammate(&self, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("no teammate selected".to_string()));
        }
        self.roster
            .resolve(trimmed)
            .map(str::to_string)
            .ok_or_else(|| Error::Validation(format!("unknown teammate \"{trimmed}\"")))
    }

    /// Re-derive the persisted snapshot and the empty-state indicator from
    /// the live state. Called after every mutation.
    fn sync(&mut self) -> Result<()> {
        self.empty = self.board.is_empty();
        let snapshot = snapshot::capture(&self.roster, &self.board);
        let raw = snapshot::encode(&snapshot)?;
        self.store.set(STORE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Duration;

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new())
    }

    fn reload(app: App<MemoryStore>) -> App<MemoryStore> {
        let App { store, .. } = app;
        App::load(store).expect("load")
    }

    #[test]
    fn duplicate_add_keeps_one_entry() {
        let mut app = app();
        app.add_teammate("Zoe").expect("add");
        let err = app.add_teammate("zoe").expect_err("duplicate");
        assert!(matches!(err, Error::Duplicate(_)));
        assert_eq!(app.roster().names(), ["Zoe"]);
    }

    #[test]
    fn assign_requires_known_teammate() {
        let mut app = app();
        let err = app
            .assign("Leo", "Draft spec", date::today())
            .expect_err("unknown");
        assert!(matches!(err, Error::Validation(_)));

        let err = app
            .assign("  ", "Draft spec", date::today())
            .expect_err("no selection");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn assign_yesterday_fails_today_succeeds() {
        let mut app = app();
        app.add_teammate("Leo").expect("add");

        let yesterday = date::today() - Duration::days(1);
        let err = app
            .assign("Leo", "Draft spec", yesterday)
            .expect_err("past date");
        assert!(matches!(err, Error::PastDate { .. }));
        assert!(app.is_empty());

        app.assign("Leo", "Draft spec", date::today()).expect("assign");
        assert!(!app.is_empty());
    }

    #[test]
    fn selection_survives_roster_resorts() {
        let mut app = app();
        app.add_teammate("Mia").expect("add");
        app.select("Mia").expect("select");

        // "Anna" sorts ahead of "Mia"; the choice is keyed by name and
        // stays put.
        app.add_teammate("Anna").expect("add");
        assert_eq!(app.selection().name(), Some("Mia"));
    }

    #[test]
    fn assign_selected_requires_a_choice() {
        let mut app = app();
        app.add_teammate("Leo").expect("add");

        let err = app
            .assign_selected("Draft spec", date::today())
            .expect_err("placeholder");
        assert!(matches!(err, Error::Validation(_)));

        app.select("leo").expect("select");
        app.assign_selected("Draft spec", date::today()).expect("assign");
        assert_eq!(app.board().group("Leo").expect("group").tasks.len(), 1);
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let mut app = app();
        app.add_teammate("Zoe").expect("add");
        app.add_teammate("Leo").expect("add");
        app.assign("Leo", "Draft spec", date::today()).expect("assign");
        app.toggle_task("Leo", 1).expect("toggle");

        let reloaded = reload(app);
        assert_eq!(reloaded.roster().names(), ["Leo", "Zoe"]);
        let group = reloaded.board().group("Leo").expect("group");
        assert!(group.tasks[0].completed);
        assert!(!reloaded.is_empty());
    }

    #[test]
    fn unreadable_snapshot_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(STORE_KEY, "{broken").expect("seed");
        let app = App::load(store).expect("load");
        assert!(app.roster().is_empty());
        assert!(app.is_empty());
    }

    #[test]
    fn missing_snapshot_is_an_empty_start() {
        let app = App::load(MemoryStore::new()).expect("load");
        assert!(app.roster().is_empty());
        assert!(app.is_empty());
    }

    #[test]
    fn full_scenario_end_to_end() {
        let mut app = app();
        app.add_teammate("Zoe").expect("add");
        app.add_teammate("Leo").expect("add");
        app.add_teammate("Mia").expect("add");
        assert_eq!(app.roster().names(), ["Leo", "Mia", "Zoe"]);

        let today = date::today();
        let tomorrow = today + Duration::days(1);
        app.assign("Leo", "Draft spec", today).expect("assign");
        assert_eq!(app.board().group("Leo").expect("group").tasks.len(), 1);

        app.assign("Leo", "Review", tomorrow).expect("assign");
        let texts: Vec<String> = app
            .board()
            .group("Leo")
            .expect("group")
            .tasks
            .iter()
            .map(|task| task.text.clone())
            .collect();
        assert_eq!(texts, ["Draft spec", "Review"]);

        app.toggle_task("Leo", 1).expect("toggle");
        app.clear_completed().expect("clear");
        let texts: Vec<String> = app
            .board()
            .group("Leo")
            .expect("group")
            .tasks
            .iter()
            .map(|task| task.text.clone())
            .collect();
        assert_eq!(texts, ["Review"]);

        app.reset().expect("reset");
        assert!(app.roster().is_empty());
        assert!(app.board().groups().is_empty());
        assert!(app.is_empty());
        assert_eq!(*app.selection(), Selection::Placeholder);
    }
}
