use clap::Parser;
use task_chat_lib::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    rolling_logger::init_logger(&cli.log_dir, "TaskChat")?;

    if let Err(e) = task_chat_lib::run(cli).await {
        log::error!("Server stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}
