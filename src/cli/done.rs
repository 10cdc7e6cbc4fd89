//! crew done command implementation

use crate::app::App;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct DoneReport {
    teammate: String,
    index: usize,
    completed: bool,
}

pub fn run(
    app: &mut App<FileStore>,
    teammate: &str,
    index: usize,
    options: OutputOptions,
) -> Result<()> {
    let completed = app.toggle_task(teammate, index)?;
    let stored = app
        .roster()
        .resolve(teammate)
        .unwrap_or(teammate)
        .to_string();

    let report = DoneReport {
        teammate: stored.clone(),
        index,
        completed,
    };

    let state = if completed { "completed" } else { "reopened" };
    let mut human = HumanOutput::new(format!("crew done: task #{index} of {stored} {state}"));
    if completed {
        human.push_next_step("crew clear".to_string());
    }

    emit_success(options, "done", &report, Some(&human))
}
