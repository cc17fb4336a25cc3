use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "connect4")]
#[clap(about = "Two player Connect Four in the terminal", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Replay(ReplayCommand),
}

#[derive(Args)]
#[clap(about = "Reads commands from stdin, one per line. Type 'help' for the list.", long_about = None)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(about = "Plays a list of 1-based columns into a new game and prints the result.", long_about = None)]
pub struct ReplayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Print a JSON snapshot after every move instead of text.
    #[clap(long)]
    pub json: bool,

    #[clap(required = true)]
    pub moves: Vec<String>,
}
