//! DhruvaMaze - Micromouse Controller
//!
//! Runs as a child process of the mms simulator and talks to it over
//! stdin/stdout. A run has three phases:
//!
//! - **Explore**: frontier-based mapping, sensing walls in every reachable
//!   cell and leaving the goal cells for last
//! - **Return**: cardinal moves back to the start cell
//! - **Speed run**: A* over the fully known maze with diagonal hops,
//!   compiled into 45° gaits
//!
//! Logs go to stderr; stdout belongs to the simulator protocol.

mod api;
mod config;
mod error;
mod exploration;
mod runner;

use api::{MmsClient, MouseApi};
use config::DhruvaConfig;
use error::Result;
use runner::MazeRunner;

use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dhruva_maze=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let mut config = if args.len() > 1 {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        DhruvaConfig::load(config_path)?
    } else if Path::new("dhruva-maze.toml").exists() {
        info!("Loading configuration from dhruva-maze.toml");
        DhruvaConfig::load(Path::new("dhruva-maze.toml"))?
    } else {
        info!("Using default configuration");
        DhruvaConfig::default()
    };

    info!("DhruvaMaze v{}", env!("CARGO_PKG_VERSION"));
    info!("Mouse: {}", config.mouse.name);

    let mut api = MmsClient::stdio();

    // The simulator's maze wins over the configured size
    let (cols, rows) = (api.maze_width()?, api.maze_height()?);
    if (cols, rows) != (config.maze.cols, config.maze.rows) {
        warn!(
            "Simulator maze is {}x{}, config says {}x{}; using the simulator's",
            cols, rows, config.maze.cols, config.maze.rows
        );
        config.maze.cols = cols;
        config.maze.rows = rows;
        config.maze.validate()?;
    }

    let mut runner = MazeRunner::new(api, &config)?;
    runner.run()?;

    info!("Run complete");
    Ok(())
}
