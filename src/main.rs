use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotdiff::{cli, config::Config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// List the tracks of one playlist
    Tracks(TracksOptions),

    #[clap(about = "Compare two playlists by track id")]
    Diff(CompareOptions),

    #[clap(about = "Compare two playlists by title/artist similarity")]
    Similar(CompareOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Filter playlists by name
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist name or id
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompareOptions {
    /// First playlist, by name or id
    pub first: String,

    /// Second playlist, by name or id
    pub second: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let config = match Config::load().await {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(&config, Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::list_playlists(&config, opt.search).await,
        Command::Tracks(opt) => cli::tracks(&config, opt.playlist).await,
        Command::Diff(opt) => cli::diff(&config, opt.first, opt.second).await,
        Command::Similar(opt) => cli::similar(&config, opt.first, opt.second).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
