//! crew board command implementation

use crate::app::App;
use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStore;
use crate::ui;

pub fn run(app: App<FileStore>, settings: Config) -> Result<()> {
    ui::board::run(app, settings)
}
