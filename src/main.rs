//! # Quickpick CLI Entry Point
//!
//! Quickpick shows a searchable selection overlay over the terminal and
//! prints the chosen entry's value to stdout, making it usable as a menu
//! step in shell pipelines.
//!
//! ## Usage
//!
//! ```bash
//! # Pick from a JSON entry file
//! quickpick menu.json
//!
//! # Pick with a specific theme
//! quickpick --theme "Nord" menu.json
//!
//! # Debug mode - print the parsed entry tree and exit
//! quickpick --debug menu.json
//! ```
//!
//! ## Interaction
//!
//! - Type to filter; items match on their value or display label, groups
//!   stay visible while any of their items match
//! - `Backspace` edits the query, `Ctrl+u` (or clicking `[x]`) clears it
//! - Click an item to select it - its value is printed and quickpick exits 0
//! - Click an item's `[?]` badge to flash its help text (does not select)
//! - Click outside the popup or press `Esc` to dismiss - quickpick exits 1

use quickpick::entry::{self, Entry};
use quickpick::ui::{SelectorWidget, Theme, WidgetEvent};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Position, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read input event")?))
        } else {
            Ok(None)
        }
    }
}

/// Quickpick - a searchable selection overlay for the terminal
#[derive(Parser, Debug)]
#[command(name = "quickpick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick an entry from a searchable overlay", long_about = None)]
struct Args {
    /// Path to the JSON entry file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Popup title
    #[arg(short, long, default_value = "Select")]
    title: String,

    /// Theme name (see built-in themes); persisted as the new default
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the parsed entry tree and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let selected = run_application(args).await;

    let _ = panic::take_hook();

    match selected? {
        Some(item) => {
            println!("{}", item.value);
            Ok(())
        }
        None => std::process::exit(1),
    }
}

async fn run_application(args: Args) -> Result<Option<entry::Item>> {
    let entries = entry::load_entries(&args.file)?;
    if entries.is_empty() {
        return Err(anyhow!(
            "Entry file is empty: {}",
            args.file.display()
        ));
    }

    // Debug mode: print parsed entries and exit
    if args.debug {
        println!("=== Parsed Entries ===");
        print_entries(&entries, 0);
        let leaves: usize = entries.iter().map(Entry::leaf_count).sum();
        println!("\nTotal: {} top-level entries, {} selectable items", entries.len(), leaves);
        return Ok(None);
    }

    let theme = resolve_theme(args.theme.as_deref())?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut widget = SelectorWidget::new(args.title, &entries, theme);

    // Run the widget and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_widget(&mut terminal, &mut widget, &mut event_reader);

    let cleanup_result = cleanup_terminal(&mut terminal);

    let selected = run_result?;
    cleanup_result?;

    Ok(selected)
}

/// Resolve the active theme: `--theme` (persisted on success) wins over the
/// config file, which falls back to the default.
fn resolve_theme(requested: Option<&str>) -> Result<Theme> {
    let mut config = quickpick::ui::config::Config::load();

    if let Some(name) = requested {
        let theme = Theme::by_name(name).ok_or_else(|| {
            let known: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            anyhow!("Unknown theme '{}'. Built-in themes: {}", name, known.join(", "))
        })?;
        config.theme = theme.name.to_string();
        if let Err(e) = config.save() {
            eprintln!("Warning: could not persist theme choice: {e}");
        }
        return Ok(theme.clone());
    }

    Ok(Theme::by_name(&config.theme)
        .unwrap_or_else(Theme::default_theme)
        .clone())
}

fn print_entries(entries: &[Entry], depth: usize) {
    let pad = "  ".repeat(depth + 1);
    for e in entries {
        match e {
            Entry::Item(item) => {
                let help = if item.help.is_some() { " [help]" } else { "" };
                println!("{pad}{} ({}){help}", item.label(), item.value);
            }
            Entry::Group(group) => {
                println!("{pad}{}/", group.label);
                print_entries(&group.items, depth + 1);
            }
        }
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Drive the widget until it reaches a terminal state. Returns the selected
/// item, or `None` on dismissal.
fn run_widget(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    widget: &mut SelectorWidget,
    event_reader: &mut dyn EventReader,
) -> Result<Option<entry::Item>> {
    loop {
        terminal
            .draw(|f| widget.render(f))
            .context("Failed to draw terminal UI")?;

        // End of tick: run the deferred focus/arming actions.
        widget.after_draw();

        let Some(event) = event_reader.read_event(Duration::from_millis(100))? else {
            continue;
        };

        match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => {
                    widget.remove();
                    return Ok(None);
                }
                KeyCode::Backspace => {
                    widget.set_footer(None);
                    widget.pop_query_char();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    widget.set_footer(None);
                    widget.clear_search();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    widget.set_footer(None);
                    widget.push_query_char(c);
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let pos = Position::new(mouse.column, mouse.row);
                    match widget.handle_click(pos) {
                        Some(WidgetEvent::Selection(item)) => return Ok(Some(item)),
                        Some(WidgetEvent::Dismissed) => return Ok(None),
                        Some(WidgetEvent::Help(text)) => {
                            widget.set_footer(Some(text));
                        }
                        None => {}
                    }
                }
            }
            _ => {}
        }
    }
}
