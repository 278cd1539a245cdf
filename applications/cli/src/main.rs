/// Podcastr - listen to podcast episodes from the terminal
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use podcastr_cli::{
    config::PodcastrConfig,
    error::CliError,
    interactive,
    output::SimulatedOutput,
    render::{render_episode, render_listing},
    start::StartAt,
};
use podcastr_client::{EpisodeClient, EpisodeListing, Section};
use podcastr_playback::{PlaybackSession, Player};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Listen to Podcastr episodes from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PODCASTR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest releases and all episodes
    List {
        /// Print the episodes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play the episode list interactively
    Play {
        /// Queue position to start at, as numbered by `list`
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Count `--index` as a row of this section instead
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
        /// Start at the episode with this id
        #[arg(short, long, conflicts_with_all = ["index", "section"])]
        episode: Option<String>,
        /// Start with shuffle on
        #[arg(long)]
        shuffle: bool,
        /// Start with loop on
        #[arg(long = "loop")]
        looping: bool,
        /// Seed for shuffle picks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a single episode
    Episode {
        /// Episode id
        id: String,
        /// Print the episode as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionArg {
    Latest,
    All,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Latest => Section::Latest,
            SectionArg::All => Section::All,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "podcastr=info,podcastr_cli=info,podcastr_client=info,podcastr_playback=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config =
        PodcastrConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    let client = EpisodeClient::new(config.api_config()?)?;
    tracing::debug!(url = client.base_url(), "Episodes API");

    match cli.command {
        Commands::List { json } => {
            list(&config, &client, json).await?;
        }
        Commands::Play {
            index,
            section,
            episode,
            shuffle,
            looping,
            seed,
        } => {
            let start = match (episode, section) {
                (Some(id), _) => StartAt::Episode(id),
                (None, Some(section)) => StartAt::Row(section.into(), index),
                (None, None) => StartAt::Position(index),
            };
            let options = PlayOptions {
                start,
                shuffle,
                looping,
                seed,
            };
            play(&config, &client, options).await?;
        }
        Commands::Episode { id, json } => {
            show_episode(&client, &id, json).await?;
        }
    }

    Ok(())
}

struct PlayOptions {
    start: StartAt,
    shuffle: bool,
    looping: bool,
    seed: Option<u64>,
}

async fn fetch_listing(
    config: &PodcastrConfig,
    client: &EpisodeClient,
) -> anyhow::Result<EpisodeListing> {
    let episodes = client
        .fetch_episodes(&config.filters())
        .await
        .context("Failed to fetch episodes")?;

    Ok(EpisodeListing::split(episodes, config.display.latest_count))
}

async fn list(config: &PodcastrConfig, client: &EpisodeClient, json: bool) -> anyhow::Result<()> {
    let listing = fetch_listing(config, client).await?;

    if json {
        let sections = serde_json::json!({
            "latest": listing.latest,
            "all": listing.all,
        });
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else {
        print!("{}", render_listing(&listing));
    }
    Ok(())
}

async fn show_episode(client: &EpisodeClient, id: &str, json: bool) -> anyhow::Result<()> {
    let episode = client
        .fetch_episode(id)
        .await
        .with_context(|| format!("Failed to fetch episode {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&episode)?);
    } else {
        print!("{}", render_episode(&episode));
    }
    Ok(())
}

async fn play(
    config: &PodcastrConfig,
    client: &EpisodeClient,
    options: PlayOptions,
) -> anyhow::Result<()> {
    let listing = fetch_listing(config, client).await?;

    let (queue, start_index) = match (options.start.resolve(&listing)?, &options.start) {
        (Some(index), _) => (listing.queue(), index),
        // Not on the home page; play it on its own
        (None, StartAt::Episode(id)) => (vec![client.fetch_episode(id).await?], 0),
        (None, _) => return Err(CliError::NoEpisodes.into()),
    };

    let output = SimulatedOutput::for_episodes(&queue);
    let session = PlaybackSession::new(config.session_config(
        options.seed,
        options.looping,
        options.shuffle,
    ));
    let mut player = Player::new(session, output, config.player_config());

    tracing::info!(
        episodes = queue.len(),
        start_index,
        "Starting playback"
    );
    player.play_list(queue, start_index)?;

    println!("{}", interactive::HELP);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    interactive::run(&mut player, stdin, &mut stdout, config.tick()).await?;

    Ok(())
}
