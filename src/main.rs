//! backup-console - terminal client for triggering database backups.

mod api;
mod app;
mod auth;
mod backup;
mod cli;
mod config;
mod error;
mod launcher;
mod ui;

use api::BackupClient;
use app::App;
use backup::{ActivityLog, BackupRequester};
use clap::Parser;
use cli::Args;
use std::rc::Rc;

#[tokio::main]
async fn main() -> error::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Some(token) = args.save_token {
        auth::save_token(args.token_file.as_deref(), &token)?;
        println!("Token saved.");
        return Ok(());
    }

    tracing::debug!("Starting backup-console");

    let client = BackupClient::new(&args.host, args.port);
    let endpoint = client.endpoint();
    let store = auth::open_store(args.token_file);
    let activity = Rc::new(ActivityLog::new(config::ACTIVITY_CAPACITY));
    let requester = BackupRequester::new(client, store, activity.clone());
    let app = App::new(requester, activity, endpoint);

    launcher::start(app).await
}
