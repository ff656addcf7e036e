//! Terminal client: argument parsing, the prompt loop and rendering. This is
//! the only part of the crate that reads stdin or writes stdout.

mod line;
mod render;
mod session;
mod setup;

use clap::Parser;
use line::{Editor, Piped};
use otto::api::AssistantApi;
use otto::config::AssistantConfig;
use otto::error::Result;
use otto::store::fs::FileStore;
use session::Session;
use setup::Cli;
use std::io::{self, IsTerminal};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose);

    let data_dir = setup::resolve_data_dir(&cli)?;
    debug!(data_dir = %data_dir.display(), "using data directory");
    let config = AssistantConfig::load(&data_dir)?;

    let store = FileStore::new(
        config.contacts_path(&data_dir),
        config.notes_path(&data_dir),
    );
    let api = AssistantApi::open(store)?.with_birthday_window(config.birthday_window_days);

    let stdin = io::stdin();
    if stdin.is_terminal() {
        debug!("interactive input, using the line editor");
        Session::new(api, Editor::new(), io::stdout()).run()
    } else {
        Session::new(api, Piped::new(stdin.lock()), io::stdout().lock()).run()
    }
}
