use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_showdown::deck::DeckKind;
use holdem_showdown::display::showdown_report;
use holdem_showdown::table::TableConfig;
use holdem_showdown::tui::{app::AppState, controller};
use log::info;
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about = "Deal Texas Hold'em hands and settle the showdown")]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 6)]
    players: usize,
    /// Deck to deal from: standard (52 cards) or extended (65, with sardines).
    #[clap(long, short, default_value = "standard")]
    deck: DeckKind,
    /// Seed for reproducible shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print showdown reports instead of starting the viewer.
    #[clap(long)]
    plain: bool,
    /// Hands to deal in plain mode.
    #[clap(long, short = 'n', default_value_t = 1)]
    hands: u32,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_plain(config: &TableConfig, hands: u32) -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .parse_default_env()
        .init();

    info!("dealing {hands} hands at {} players, {} deck", config.players, config.deck);
    let mut rng = config.rng();
    for n in 0..hands {
        let deal = config.deal_with(&mut rng)?;
        let showdown = deal.showdown()?;
        if n > 0 {
            println!();
        }
        println!("Hand #{}", n + 1);
        print!("{}", showdown_report(&deal, &showdown));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = TableConfig { players: cli.players, deck: cli.deck, seed: cli.seed };
    config.validate()?;

    if cli.plain || !io::stdout().is_terminal() {
        return run_plain(&config, cli.hands);
    }

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
