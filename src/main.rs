use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::Minimax;
use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, GameSession, Player};
use connect_four::ui::App;

/// Play Connect Four between humans and minimax bots.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against humans or minimax bots")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override player one's name
    #[arg(long)]
    p1_name: Option<String>,

    /// Override player one's mode: 0 human, 1-3 bot difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    p1_mode: Option<u8>,

    /// Override player two's name
    #[arg(long)]
    p2_name: Option<String>,

    /// Override player two's mode: 0 human, 1-3 bot difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    p2_mode: Option<u8>,

    /// Seed the bots for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Play bot against bot on stdout, no TUI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.p1_name {
        config.player_one.name = name;
    }
    if let Some(mode) = cli.p1_mode {
        config.player_one.mode = mode;
    }
    if let Some(name) = cli.p2_name {
        config.player_two.name = name;
    }
    if let Some(mode) = cli.p2_mode {
        config.player_two.mode = mode;
    }
    if cli.seed.is_some() {
        config.search.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let (player_one, player_two) = config.players().context("setting up players")?;
    info!(
        "{} ({}) vs {} ({})",
        player_one.name(),
        player_one.kind(),
        player_two.name(),
        player_two.kind()
    );

    if cli.headless {
        run_headless(player_one, player_two, config.search.seed)
    } else {
        run_tui(App::new(player_one, player_two, config.ui.clone(), config.search.seed))
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let env = env_logger::Env::default().filter_or("CONNECT4_LOG", "warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Play a bot-only game, printing the board after every move.
fn run_headless(player_one: Player, player_two: Player, seed: Option<u64>) -> Result<()> {
    if !player_one.is_bot() || !player_two.is_bot() {
        bail!("headless mode needs two bots (set both modes to 1-3)");
    }

    let mut search = match seed {
        Some(seed) => Minimax::with_seed(seed),
        None => Minimax::new(),
    };
    let mut session = GameSession::new(player_one, player_two);
    println!("{}\n", session.board());

    while session.outcome().is_none() {
        let name = session.current().name().to_string();
        let col = search
            .minimax_strategy(&session)
            .filter(|&col| session.board().is_column_playable(col))
            .or_else(|| session.board().legal_columns().first().copied())
            .with_context(|| format!("{name} has no move"))?;
        session
            .submit_move(col)
            .with_context(|| format!("{name} played column {col}"))?;
        println!("{name} plays column {col}\n{}\n", session.board());
    }

    match session.outcome() {
        Some(GameOutcome::Winner(piece)) => {
            println!(
                "{} wins after {} moves",
                session.player(piece).name(),
                session.move_count()
            );
        }
        _ => println!("Draw after {} moves", session.move_count()),
    }
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the game loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
