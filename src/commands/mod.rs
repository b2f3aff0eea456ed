mod add;
mod config_cmd;
mod delete;
mod edit;
mod list;
mod shell;

use clap::ValueEnum;
use std::io::{self, Write};

use todo_list::synchronizer::{ItemListSynchronizer, Outcome};
use todo_list::RemoteStore;

pub use add::AddCommand;
pub use config_cmd::ConfigCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use shell::ShellCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Asks a yes/no question on stdin. Anything but `y` is a no.
pub(crate) fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Loads the list for a one-shot command, turning a failure into an error.
pub(crate) async fn load<S: RemoteStore>(
    sync: &mut ItemListSynchronizer<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    match sync.load().await {
        Outcome::Failed(_) => Err(error_notice(sync).into()),
        _ => Ok(()),
    }
}

/// The error notice currently shown, for printing on the way out.
pub(crate) fn error_notice<S: RemoteStore>(sync: &ItemListSynchronizer<S>) -> String {
    sync.notices()
        .error()
        .unwrap_or("Request to the todo API failed")
        .to_string()
}
