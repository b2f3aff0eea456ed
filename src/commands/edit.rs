use clap::Args;

use todo_list::{ItemListSynchronizer, Outcome, RemoteStore};

/// Edit a todo item
#[derive(Args)]
pub struct EditCommand {
    /// Item ID
    id: String,

    /// New title (keeps the current one if omitted)
    #[arg(long, short)]
    title: Option<String>,

    /// New description (keeps the current one if omitted)
    #[arg(long, short)]
    description: Option<String>,
}

impl EditCommand {
    pub async fn run<S: RemoteStore>(
        &self,
        sync: &mut ItemListSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.title.is_none() && self.description.is_none() {
            return Err("Nothing to change: pass --title and/or --description".into());
        }

        super::load(sync).await?;

        sync.begin_edit(&self.id)?;
        if let Some(title) = &self.title {
            sync.set_edit_title(title.as_str())?;
        }
        if let Some(description) = &self.description {
            sync.set_edit_description(description.as_str())?;
        }

        match sync.commit_edit().await? {
            Outcome::Applied => {
                if let Some(item) = sync.item(&self.id) {
                    println!("Updated [{}] {}", item.id, item);
                }
                Ok(())
            }
            Outcome::Skipped => Err("Title and description must not be empty".into()),
            Outcome::Failed(_) => Err(super::error_notice(sync).into()),
        }
    }
}
