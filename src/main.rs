use anyhow::Result;
use clap::Parser;
use snake_game::game::GameConfig;
use snake_game::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Number of cells along each side of the grid
    #[arg(long, default_value = "50")]
    grid_size: usize,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.grid_size, cli.tick_ms);

    let mut mode = HumanMode::new(config)?;
    mode.run().await
}
