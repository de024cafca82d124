use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use treasure_hunt::build_info;
use treasure_hunt::constants::INPUT_POLL_MS;
use treasure_hunt::input::{handle_key, InputResult, Screens};
use treasure_hunt::logging;
use treasure_hunt::report::GameReport;
use treasure_hunt::ui::draw_ui;
use treasure_hunt::{Game, ScoringRule};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ScoringArg {
    /// +3 strong and quick, +1 survived, otherwise gold is lost
    Tiered,
    /// +2 healthy, +1 otherwise
    Flat,
}

impl From<ScoringArg> for ScoringRule {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Tiered => ScoringRule::Tiered,
            ScoringArg::Flat => ScoringRule::Flat,
        }
    }
}

/// Treasure Hunt - a multiplayer island adventure in the terminal
#[derive(Parser, Debug)]
#[command(name = "treasure-hunt", disable_version_flag = true)]
struct Cli {
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Bonus table for the journey back
    #[arg(long, value_enum, default_value = "tiered")]
    scoring: ScoringArg,

    /// Print the final standings as JSON after quitting
    #[arg(long)]
    json: bool,

    /// Log file (default: ~/.treasure-hunt/treasure-hunt.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_string());
        return Ok(());
    }

    let log_path =
        logging::init(cli.log_file.as_deref()).context("Failed to initialize logging")?;
    tracing::info!(log = %log_path.display(), seed = ?cli.seed, "treasure hunt starting");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(cli.scoring.into());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run(&mut terminal, &mut game, &mut rng);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result?;

    if cli.json {
        match GameReport::from_game(&game) {
            Some(report) => println!("{}", report.to_json()?),
            None => eprintln!("No finished game to report."),
        }
    }

    tracing::info!("treasure hunt exiting");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut screens = Screens::new();

    loop {
        terminal.draw(|frame| draw_ui(frame, game, &screens.setup, &screens.form))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(key_event, game, &mut screens, rng) == InputResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}
