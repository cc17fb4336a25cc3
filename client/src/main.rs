mod cli;

use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use client::{replay, run_session, ClientOptions};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(play_args) => {
            let options = load_options(&play_args.config)?;

            run_session(stdin().lock(), &mut stdout().lock(), options)?
        }
        Commands::Replay(replay_args) => {
            let mut options = load_options(&replay_args.config)?;
            options.json |= replay_args.json;

            let outcome = replay(&replay_args.moves, &mut stdout().lock(), options)?;
            info!("Replay finished: {}", outcome);
        }
    }

    Ok(())
}

fn load_options(config: &str) -> Result<ClientOptions> {
    let config_path = config.relative_to_cwd()?;
    let config = ConfigLoader::new_or_empty(config_path, "play")?;

    config.load()
}
