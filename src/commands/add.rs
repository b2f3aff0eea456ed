use clap::Args;

use todo_list::{ItemListSynchronizer, Outcome, RemoteStore};

/// Add a todo item
#[derive(Args)]
pub struct AddCommand {
    /// Title of the new item
    title: String,

    /// Description of the new item
    description: String,
}

impl AddCommand {
    pub async fn run<S: RemoteStore>(
        &self,
        sync: &mut ItemListSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        super::load(sync).await?;

        match sync.create(&self.title, &self.description).await {
            Outcome::Applied => {
                if let Some(item) = sync.items().last() {
                    println!("Created [{}] {}", item.id, item);
                }
                Ok(())
            }
            Outcome::Skipped => Err("Title and description must not be empty".into()),
            Outcome::Failed(_) => Err(super::error_notice(sync).into()),
        }
    }
}
