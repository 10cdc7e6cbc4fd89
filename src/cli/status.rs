//! crew status command implementation
//!
//! Render-only: rebuilds the displayed board from the application state,
//! mutating nothing.

use crate::app::App;
use crate::config::Config;
use crate::date;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::snapshot;
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct StatusReport {
    teammates: Vec<String>,
    board: snapshot::Snapshot,
    total_tasks: usize,
    empty: bool,
}

pub fn run(app: &App<FileStore>, settings: &Config, options: OutputOptions) -> Result<()> {
    let report = StatusReport {
        teammates: app.roster().names().to_vec(),
        board: snapshot::capture(app.roster(), app.board()),
        total_tasks: app.board().total_tasks(),
        empty: app.is_empty(),
    };

    let mut human = HumanOutput::new("crew status");
    human.push_summary("teammates", app.roster().len().to_string());
    human.push_summary("tasks", report.total_tasks.to_string());
    human.push_summary(
        "selected",
        app.selection()
            .name()
            .unwrap_or(settings.board.placeholder.as_str())
            .to_string(),
    );

    if app.is_empty() {
        human.push_detail("no tasks on the board".to_string());
        if app.roster().is_empty() {
            human.push_next_step("crew add <name>".to_string());
        } else {
            human.push_next_step("crew assign <teammate> <task> --due <YYYY-MM-DD>".to_string());
        }
    } else {
        for group in app.board().groups() {
            human.push_detail(format!("{}:", group.teammate));
            for (position, task) in group.tasks.iter().enumerate() {
                let mark = if task.completed { "x" } else { " " };
                human.push_detail(format!(
                    "  {}. [{mark}] {}  due {}",
                    position + 1,
                    task.text,
                    date::format_day(task.due)
                ));
            }
        }
    }

    emit_success(options, "status", &report, Some(&human))
}
