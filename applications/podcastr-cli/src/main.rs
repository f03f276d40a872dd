//! Podcastr - listen through an episode catalogue from the terminal
use anyhow::Context;
use clap::Parser;
use podcastr_cli::{config::CliConfig, session::Session};
use podcastr_player::{Episode, PlayerHandle};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Terminal front-end for the Podcastr episode player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Episode catalogue (JSON), overrides the configured file
    #[arg(short, long, env = "PODCASTR_EPISODES")]
    episodes: Option<PathBuf>,

    /// Start with shuffle enabled
    #[arg(long)]
    shuffle: bool,

    /// Start with looping enabled
    #[arg(long = "loop")]
    looping: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr=info,podcastr_cli=info,podcastr_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(episodes) = cli.episodes {
        config.episodes_file = episodes;
    }
    config.player.shuffling |= cli.shuffle;
    config.player.looping |= cli.looping;
    config.validate()?;

    let catalogue = Episode::load_list(&config.episodes_file).with_context(|| {
        format!(
            "Failed to load episodes from {}",
            config.episodes_file.display()
        )
    })?;
    tracing::info!(
        "Loaded {} episodes from {}",
        catalogue.len(),
        config.episodes_file.display()
    );

    let player = PlayerHandle::new(&config.player);
    let mut session = Session::new(catalogue, player);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout, config.show_prompt)
        .context("Session error occurred")
}
