use clap::Args;

use todo_list::{ItemListSynchronizer, Outcome, RemoteStore};

/// Delete a todo item
#[derive(Args)]
pub struct DeleteCommand {
    /// Item ID
    id: String,

    /// Skip confirmation prompt
    #[arg(long, short)]
    force: bool,
}

impl DeleteCommand {
    pub async fn run<S: RemoteStore>(
        &self,
        sync: &mut ItemListSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        super::load(sync).await?;

        let force = self.force;
        let outcome = sync
            .delete(&self.id, |item| {
                force || super::confirm(&format!("Delete todo '{}'?", item.title))
            })
            .await?;

        match outcome {
            Outcome::Applied => {
                println!("Deleted todo: {}", self.id);
                Ok(())
            }
            Outcome::Skipped => {
                println!("Deletion cancelled.");
                Ok(())
            }
            Outcome::Failed(e) => Err(format!("Unable to delete Todo item: {}", e).into()),
        }
    }
}
