//! crew clear command implementation

use crate::app::App;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct ClearReport {
    removed: usize,
    remaining: usize,
}

pub fn run(app: &mut App<FileStore>, options: OutputOptions) -> Result<()> {
    let removed = app.clear_completed()?;

    let report = ClearReport {
        removed,
        remaining: app.board().total_tasks(),
    };

    let header = if removed == 0 {
        "crew clear: nothing to do".to_string()
    } else {
        format!("crew clear: removed {removed} completed task(s)")
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("remaining", report.remaining.to_string());

    emit_success(options, "clear", &report, Some(&human))
}
