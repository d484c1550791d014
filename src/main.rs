use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use folio::app::App;
use folio::config::AppConfig;
use folio::content::SiteContent;
use folio::sections::Section;

/// folio — a vim-flavored terminal portfolio.
///
/// Navigate with h/l between sections and j/k inside lists; type `:help`
/// for the full command reference.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Content TOML file replacing the built-in portfolio
    #[arg(value_name = "FILE")]
    content: Option<PathBuf>,

    /// Section to open at startup: me, projects, diggin, connect, help
    #[arg(short = 's', long = "section")]
    section: Option<String>,

    /// Monochrome output (no colors)
    #[arg(short = 'M', long = "monochrome")]
    monochrome: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // A content file on the command line must load; one named in the config
    // file degrades to the built-in portfolio.
    let content = match &cli.content {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("Failed to load content file: {}", path.display()))?,
        None => match &config.content.path {
            Some(path) => SiteContent::load(path).unwrap_or_default(),
            None => SiteContent::default(),
        },
    };

    let monochrome = cli.monochrome || config.display.monochrome;
    let mut app = App::new(content, config, monochrome);

    if let Some(ref token) = cli.section {
        match Section::parse(&token.to_lowercase()) {
            Some(section) => app.set_section(section),
            None => anyhow::bail!(
                "Unknown section: {token}\nValid sections: me, projects, diggin, connect, help"
            ),
        }
    }

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit {
            break;
        }

        // Expire toasts between events
        app.tick();

        // Poll with a small timeout so toast dismissal stays responsive
        // even without input. Key events are handled serially; resizes
        // redraw on the next loop iteration.
        if event::poll(Duration::from_millis(50))? {
            let evt = event::read()?;
            if matches!(evt, Event::Key(_)) {
                app.handle_event(evt);
            }
        }
    }

    Ok(())
}
