pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogline")]
#[command(version)]
#[command(about = "An accessibility-first blog API", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "blogline.toml", env = "BLOGLINE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run migrations and start the HTTP API
    Serve {
        #[arg(short = 'H', long, env = "BLOGLINE_HOST")]
        host: Option<String>,
        #[arg(short, long, env = "BLOGLINE_PORT")]
        port: Option<u16>,
        /// Skip inserting sample posts into an empty database
        #[arg(long)]
        no_seed: bool,
    },
    /// Apply pending database migrations
    Migrate,
    /// Insert sample posts if the database is empty
    Seed,
}
