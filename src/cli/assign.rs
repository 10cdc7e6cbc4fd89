//! crew assign command implementation

use crate::app::App;
use crate::date;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct AssignReport {
    teammate: String,
    text: String,
    due: String,
    tasks: usize,
}

pub fn run(
    app: &mut App<FileStore>,
    teammate: &str,
    text: &str,
    due: &str,
    options: OutputOptions,
) -> Result<()> {
    let due_day = date::parse_day(due)?;
    app.assign(teammate, text, due_day)?;

    // Resolve after the fact for the report: assignment validated the name.
    let stored = app
        .roster()
        .resolve(teammate)
        .unwrap_or(teammate)
        .to_string();
    let tasks = app
        .board()
        .group(&stored)
        .map(|group| group.tasks.len())
        .unwrap_or(0);

    let report = AssignReport {
        teammate: stored.clone(),
        text: text.trim().to_string(),
        due: date::format_day(due_day),
        tasks,
    };

    let mut human = HumanOutput::new(format!(
        "crew assign: \"{}\" -> {stored}",
        text.trim()
    ));
    human.push_summary("due", date::format_day(due_day));
    human.push_summary("tasks", tasks.to_string());
    human.push_next_step("crew status".to_string());

    emit_success(options, "assign", &report, Some(&human))
}
