//! Interactive todo page.
//!
//! Loads the list, renders it, then reads one command per line and
//! re-renders after each. Edit and delete are refused while an edit is open,
//! the same way the page hides those buttons during an edit.

use clap::Args;
use std::io::{self, Write};

use todo_list::{view, ItemListSynchronizer, RemoteStore};

/// Interactive todo page
#[derive(Args, Default)]
pub struct ShellCommand {}

/// One parsed line of shell input.
#[derive(Debug, PartialEq)]
enum Input {
    Add { title: String, description: String },
    Edit(String),
    Title(String),
    Desc(String),
    Save,
    Cancel,
    Delete(String),
    Reload,
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    let input = match word {
        "" => Input::Empty,
        "add" => {
            let (title, description) = rest
                .split_once('|')
                .ok_or("usage: add <title> | <description>")?;
            Input::Add {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            }
        }
        "edit" => Input::Edit(required_id(rest, "edit")?),
        "delete" | "rm" => Input::Delete(required_id(rest, "delete")?),
        "title" => Input::Title(rest.to_string()),
        "desc" | "description" => Input::Desc(rest.to_string()),
        "save" => Input::Save,
        "cancel" => Input::Cancel,
        "reload" => Input::Reload,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("unknown command '{}', type 'help'", other)),
    };
    Ok(input)
}

fn required_id(rest: &str, command: &str) -> Result<String, String> {
    let id = rest.trim();
    if id.is_empty() {
        return Err(format!("usage: {} <id>", command));
    }
    Ok(id.to_string())
}

impl ShellCommand {
    pub async fn run<S: RemoteStore>(
        &self,
        sync: &mut ItemListSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        sync.load().await;
        print!("{}", view::render(sync));

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }

            let input = match parse_line(&line) {
                Ok(input) => input,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            };

            match input {
                Input::Quit => break,
                Input::Help => {
                    println!("{}", view::hint_line(sync.is_editing()));
                    continue;
                }
                Input::Empty => {}
                Input::Add { title, description } => {
                    sync.create(&title, &description).await;
                }
                Input::Edit(id) => {
                    if let Err(e) = sync.begin_edit(&id) {
                        println!("{}", e);
                        continue;
                    }
                }
                Input::Title(title) => {
                    if let Err(e) = sync.set_edit_title(title) {
                        println!("{}", e);
                        continue;
                    }
                }
                Input::Desc(description) => {
                    if let Err(e) = sync.set_edit_description(description) {
                        println!("{}", e);
                        continue;
                    }
                }
                Input::Save => {
                    if let Err(e) = sync.commit_edit().await {
                        println!("{}", e);
                        continue;
                    }
                }
                Input::Cancel => sync.cancel_edit(),
                Input::Delete(id) => {
                    if sync.is_editing() {
                        println!("Finish or cancel the current edit first.");
                        continue;
                    }
                    let result = sync
                        .delete(&id, |item| {
                            super::confirm(&format!(
                                "Are you sure you want to delete '{}'?",
                                item.title
                            ))
                        })
                        .await;
                    if let Err(e) = result {
                        println!("{}", e);
                        continue;
                    }
                }
                Input::Reload => {
                    sync.load().await;
                }
            }

            print!("{}", view::render(sync));
        }

        Ok(())
    }
}
