//! Text rendering of the todo page.

use crate::store::RemoteStore;
use crate::synchronizer::ItemListSynchronizer;

const BANNER: &str = "Todo List";

/// Renders the whole page: notices, items, and the commands that are
/// currently available.
///
/// The item under edit shows its pending values. While an edit is open the
/// hint line only offers the edit commands.
pub fn render<S: RemoteStore>(sync: &ItemListSynchronizer<S>) -> String {
    let session = sync.edit_session();

    let mut out = format!("{}\n{}\n", BANNER, "=".repeat(BANNER.len()));
    if let Some(message) = sync.notices().success() {
        out.push_str(&format!("✓ {}\n", message));
    }
    out.push('\n');

    if sync.items().is_empty() {
        out.push_str("No tasks.\n");
    }

    for item in sync.items() {
        let lines = match session {
            Some(edit) if edit.id == item.id => format!(
                "* [{}] (editing)\n    title: {}\n    desc:  {}\n",
                item.id, edit.title, edit.description
            ),
            _ => format!("- [{}] {}\n    {}\n", item.id, item.title, item.description),
        };
        out.push_str(&lines);
    }

    if let Some(message) = sync.notices().error() {
        out.push_str(&format!("\n! {}\n", message));
    }

    out.push_str(&format!("\n{}\n", hint_line(session.is_some())));
    out
}

/// The commands a user may type right now.
pub fn hint_line(editing: bool) -> &'static str {
    if editing {
        "Commands: title <text>, desc <text>, save, cancel"
    } else {
        "Commands: add <title> | <description>, edit <id>, delete <id>, reload, help, quit"
    }
}
