use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_log::AsTrace;

use crate::prompt::Prompt;
use crate::render::TerminalRenderer;
use crate::session::{GameOptions, play_game};

mod prompt;
mod render;
mod session;

const WELCOME: &str = "Welcome to Minesweeper!\n\
    Please input the number of rows, number of columns, and the number of mines to get started.";

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows, asked for when missing
    #[arg(short, long)]
    rows: Option<u32>,

    /// Number of columns, asked for when missing
    #[arg(short, long)]
    cols: Option<u32>,

    /// Number of mines, asked for when missing
    #[arg(short, long)]
    mines: Option<u32>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the whole board before the first move
    #[arg(long)]
    peek: bool,

    /// Disable colored cells
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn game_options(&self) -> GameOptions {
        GameOptions {
            rows: self.rows,
            cols: self.cols,
            mines: self.mines,
            peek: self.peek,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.verbose.log_level_filter().as_trace())
        .init();
    log::debug!("args: {:?}", args);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let mut renderer = TerminalRenderer::new(io::stdout(), !args.no_color);
    let options = args.game_options();

    prompt.say(WELCOME)?;
    loop {
        match play_game(&options, &mut rng, &mut prompt, &mut renderer)? {
            Some(outcome) => log::info!("Game finished: {:?}", outcome),
            None => break,
        }

        if !prompt.ask_yes_no("Do you want to play again (Y)es/(N)o?")? {
            break;
        }
    }

    log::debug!("Exiting");
    Ok(())
}
