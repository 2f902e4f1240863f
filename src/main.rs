use replybar::app::App;
use replybar::handlers::keyboard::{handle_key_event, KeyAction};
use replybar::handlers::mouse::handle_mouse_event;
use replybar::ui;

use std::io;
use std::io::IsTerminal;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<()> {
    // Check if we're in a proper terminal
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("replybar must be run in an interactive terminal");
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal (always try to restore even on error)
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Resolve expired toasts and pending long presses
        app.tick(Instant::now());

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with a timeout so press timers resolve without input
        if poll(Duration::from_millis(50))? {
            match read()? {
                Event::Key(key) => {
                    if handle_key_event(app, key) == KeyAction::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse);
                }
                // The pointer is gone as far as any held press is concerned
                Event::FocusLost => app.cancel_press(),
                Event::Resize(_, _) => app.cancel_press(),
                _ => {}
            }
        }
    }
}
