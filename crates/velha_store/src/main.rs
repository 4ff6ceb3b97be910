//! Velha - command-line client and local store for 4x4 tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use velha_core::GameResult;
use velha_store::{ClientConfig, GameClient, GameStore, HttpGameStore, MemoryStore, stub};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::Serve { port, host } = cli.command {
        return run_stub(host, port).await;
    }

    let config = ClientConfig::resolve(cli.config.as_deref(), cli.endpoint)?;
    run_client(config, cli.command).await
}

/// Run the local store endpoint
#[instrument]
async fn run_stub(host: String, port: u16) -> Result<()> {
    info!("Starting game store stub on http://{}:{}/", host, port);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    stub::serve(listener, Arc::new(MemoryStore::new())).await?;
    Ok(())
}

/// Run a client command against the configured store
#[instrument(skip(config), fields(endpoint = %config.endpoint()))]
async fn run_client(config: ClientConfig, command: Command) -> Result<()> {
    let store = HttpGameStore::from_config(&config)?;
    let mut client = GameClient::connect(store)
        .await
        .with_match_id(config.match_id().clone());

    match command {
        Command::Play { index } => {
            client.play(index).await?;
        }
        Command::Restart => client.restart().await,
        Command::Show | Command::Serve { .. } => {}
    }

    print_game(&client);
    if let Some(error) = client.last_error() {
        anyhow::bail!("Store not updated: {}", error);
    }
    Ok(())
}

fn print_game<S: GameStore>(client: &GameClient<S>) {
    let state = client.state();
    println!("{}\n", state.board());
    match client.result() {
        GameResult::Undecided => println!("Turn: {}", state.current_player()),
        GameResult::Winner(player) => println!("Vencedor: {}", player),
        GameResult::Draw => println!("Deu Empate!"),
    }
    println!("Placar: {}", state.scores());
}
