//! crew add command implementation

use crate::app::App;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::FileStore;

#[derive(serde::Serialize)]
struct AddReport {
    name: String,
    roster: Vec<String>,
}

pub fn run(app: &mut App<FileStore>, name: &str, options: OutputOptions) -> Result<()> {
    let stored = app.add_teammate(name)?;

    let report = AddReport {
        name: stored.clone(),
        roster: app.roster().names().to_vec(),
    };

    let mut human = HumanOutput::new(format!("crew add: added \"{stored}\""));
    human.push_summary("teammates", app.roster().len().to_string());
    human.push_next_step(format!("crew assign \"{stored}\" \"<task>\" --due <YYYY-MM-DD>"));

    emit_success(options, "add", &report, Some(&human))
}
