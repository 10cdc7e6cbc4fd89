//! crew reset command implementation
//!
//! Reset wipes every teammate and task, so it is gated behind a yes/no
//! confirmation unless `--yes` is passed.

use std::io::{self, BufRead, Write};

use crate::app::App;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct ResetReport {
    confirmed: bool,
}

pub fn run(app: &mut App<FileStore>, yes: bool, options: OutputOptions) -> Result<()> {
    if !yes && !confirm()? {
        let report = ResetReport { confirmed: false };
        let human = HumanOutput::new("crew reset: cancelled");
        return emit_success(options, "reset", &report, Some(&human));
    }

    app.reset()?;

    let report = ResetReport { confirmed: true };
    let mut human = HumanOutput::new("crew reset: board is empty");
    human.push_next_step("crew add <name>".to_string());

    emit_success(options, "reset", &report, Some(&human))
}

fn confirm() -> Result<bool> {
    eprint!("Remove every teammate and task? [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
