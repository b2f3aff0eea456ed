use clap::Args;

use todo_list::{ItemListSynchronizer, RemoteStore};

use super::OutputFormat;

/// List all todo items
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ListCommand {
    pub async fn run<S: RemoteStore>(
        &self,
        sync: &mut ItemListSynchronizer<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        super::load(sync).await?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(sync.items())?);
            }
            OutputFormat::Text => {
                if sync.items().is_empty() {
                    println!("No tasks.");
                }
                for item in sync.items() {
                    println!("[{}] {}", item.id, item);
                }
            }
        }
        Ok(())
    }
}
