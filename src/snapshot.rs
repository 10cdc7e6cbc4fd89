//! View synchronizer
//!
//! The persisted form is one JSON document holding the full roster and every
//! teammate's tasks, ordered by teammate name:
//!
//! ```json
//! {
//!   "teammates": [
//!     { "name": "Leo", "tasks": [ { "text": "Draft spec", "due": "2025-06-01", "completed": false } ] }
//!   ]
//! }
//! ```
//!
//! `capture` derives the snapshot from live state after every mutation;
//! `restore` rebuilds live state from a loaded snapshot. A payload that does
//! not decode cleanly is reported as `StorageParse` and the caller falls
//! back to the empty initial state.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Task};
use crate::date;
use crate::error::{Error, Result};
use crate::roster::Roster;

/// Store key holding the persisted snapshot.
pub const STORE_KEY: &str = "todo-app-v1";

/// Persisted form of the whole application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub teammates: Vec<TeammateEntry>,
}

/// One teammate with their tasks, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeammateEntry {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

/// Persisted form of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub text: String,
    pub due: String,
    pub completed: bool,
}

/// Derive a snapshot from the live roster and board.
///
/// Teammates with no tasks appear with an empty task list; each group's
/// tasks carry their current due-date order and completion flags.
pub fn capture(roster: &Roster, board: &Board) -> Snapshot {
    let teammates = roster
        .names()
        .iter()
        .map(|name| {
            let tasks = board
                .group(name)
                .map(|group| {
                    group
                        .tasks
                        .iter()
                        .map(|task| TaskEntry {
                            text: task.text.clone(),
                            due: date::format_day(task.due),
                            completed: task.completed,
                        })
                        .collect()
                })
                .unwrap_or_default();
            TeammateEntry {
                name: name.clone(),
                tasks,
            }
        })
        .collect();

    Snapshot { teammates }
}

/// Rebuild live state from a snapshot.
///
/// Names are re-sorted ascending; groups are only created for teammates with
/// a non-empty task list, each re-sorted by due date with completion flags
/// restored verbatim. Structural problems (duplicate names, unparseable
/// days) invalidate the whole payload.
pub fn restore(snapshot: &Snapshot) -> Result<(Roster, Board)> {
    let mut roster = Roster::new();
    let mut board = Board::new();

    for entry in &snapshot.teammates {
        let name = roster
            .add(&entry.name)
            .map_err(|err| Error::StorageParse(err.to_string()))?
            .to_string();

        let mut tasks = Vec::with_capacity(entry.tasks.len());
        for task in &entry.tasks {
            let due = date::parse_day(&task.due)
                .map_err(|_| Error::StorageParse(format!("bad due date \"{}\"", task.due)))?;
            tasks.push(Task {
                text: task.text.clone(),
                due,
                completed: task.completed,
            });
        }
        board.insert_group(&name, tasks);
    }

    Ok((roster, board))
}

/// Serialize a snapshot for the store.
pub fn encode(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Parse a stored payload.
pub fn decode(raw: &str) -> Result<Snapshot> {
    serde_json::from_str(raw).map_err(|err| Error::StorageParse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> (Roster, Board) {
        let mut roster = Roster::new();
        roster.add("Zoe").expect("add");
        roster.add("Leo").expect("add");
        roster.add("Mia").expect("add");

        let today = date::parse_day("2025-06-01").expect("date");
        let mut board = Board::new();
        board
            .assign("Leo", "Review", date::parse_day("2025-06-05").expect("date"), today)
            .expect("assign");
        board.assign("Leo", "Draft spec", today, today).expect("assign");
        board.toggle("Leo", 1).expect("toggle");
        (roster, board)
    }

    #[test]
    fn capture_orders_by_name_and_keeps_taskless_teammates() {
        let (roster, board) = seeded_state();
        let snapshot = capture(&roster, &board);

        let names: Vec<&str> = snapshot
            .teammates
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["Leo", "Mia", "Zoe"]);

        assert_eq!(snapshot.teammates[0].tasks.len(), 2);
        assert!(snapshot.teammates[1].tasks.is_empty());
        assert!(snapshot.teammates[2].tasks.is_empty());

        let first = &snapshot.teammates[0].tasks[0];
        assert_eq!(first.text, "Draft spec");
        assert_eq!(first.due, "2025-06-01");
        assert!(first.completed);
    }

    #[test]
    fn capture_then_restore_round_trips() {
        let (roster, board) = seeded_state();
        let snapshot = capture(&roster, &board);

        let raw = encode(&snapshot).expect("encode");
        let decoded = decode(&raw).expect("decode");
        let (restored_roster, restored_board) = restore(&decoded).expect("restore");

        assert_eq!(restored_roster, roster);
        assert_eq!(restored_board, board);
    }

    #[test]
    fn restore_skips_groups_for_taskless_teammates() {
        let snapshot = Snapshot {
            teammates: vec![
                TeammateEntry {
                    name: "Mia".to_string(),
                    tasks: Vec::new(),
                },
                TeammateEntry {
                    name: "Leo".to_string(),
                    tasks: vec![TaskEntry {
                        text: "Plan".to_string(),
                        due: "2025-06-03".to_string(),
                        completed: false,
                    }],
                },
            ],
        };

        let (roster, board) = restore(&snapshot).expect("restore");
        assert_eq!(roster.names(), ["Leo", "Mia"]);
        assert!(board.group("Leo").is_some());
        assert!(board.group("Mia").is_none());
    }

    #[test]
    fn restore_resorts_tasks_by_due_date() {
        let snapshot = Snapshot {
            teammates: vec![TeammateEntry {
                name: "Leo".to_string(),
                tasks: vec![
                    TaskEntry {
                        text: "Later".to_string(),
                        due: "2025-06-09".to_string(),
                        completed: false,
                    },
                    TaskEntry {
                        text: "Sooner".to_string(),
                        due: "2025-06-02".to_string(),
                        completed: true,
                    },
                ],
            }],
        };

        let (_, board) = restore(&snapshot).expect("restore");
        let tasks = &board.group("Leo").expect("group").tasks;
        assert_eq!(tasks[0].text, "Sooner");
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].text, "Later");
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert!(matches!(decode("not json"), Err(Error::StorageParse(_))));
        assert!(matches!(
            decode("{\"teammates\": 7}"),
            Err(Error::StorageParse(_))
        ));
    }

    #[test]
    fn restore_rejects_bad_due_dates() {
        let snapshot = Snapshot {
            teammates: vec![TeammateEntry {
                name: "Leo".to_string(),
                tasks: vec![TaskEntry {
                    text: "Plan".to_string(),
                    due: "someday".to_string(),
                    completed: false,
                }],
            }],
        };
        assert!(matches!(restore(&snapshot), Err(Error::StorageParse(_))));
    }

    #[test]
    fn missing_tasks_field_defaults_to_empty() {
        let decoded = decode("{\"teammates\":[{\"name\":\"Leo\"}]}").expect("decode");
        assert!(decoded.teammates[0].tasks.is_empty());
    }
}
