//! Streaming Demo: Feed tokens into the console and paint the scroll-back.
//!
//! The console core never draws anything itself; this demo plays the part
//! of the host, measuring with fixed-cell metrics sized to the terminal and
//! repainting the newest-first lines bottom-up after every chunk.
//!
//! Press 'q' or Escape to quit.

use backscroll::{Console, MonospaceMetrics};
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Sample text to stream, chunked to simulate token arrival.
const SAMPLE_TEXT: &str = "Backscroll is the storage half of an on-screen console. \
Text streams in, possibly mid-line, and explicit newlines start fresh lines. \
Anything wider than the display wraps at character granularity against the \
measurement oracle, and once the scroll-back is full the oldest lines fall away.\n\
Watch long lines wrap:\n\
0123456789012345678901234567890123456789012345678901234567890123456789\
0123456789012345678901234567890123456789012345678901234567890123456789\n\
That is the whole trick. Press 'q' to quit.\n";

fn main() -> io::Result<()> {
    env_logger::init();

    let (cols, rows) = terminal::size()?;
    let metrics = MonospaceMetrics::new(1.0, 1.0);

    let mut console = Console::new();
    console
        .reconfigure(f32::from(cols), f32::from(rows) - 1.0, metrics)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut console, rows);

    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(console: &mut Console<MonospaceMetrics>, rows: u16) -> io::Result<()> {
    // Stream in small chunks, ~60 tokens/s.
    let chunks: Vec<&str> = SAMPLE_TEXT
        .as_bytes()
        .chunks(7)
        .map(|c| std::str::from_utf8(c).expect("sample is ASCII"))
        .collect();

    for chunk in chunks {
        console
            .write(chunk)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        paint(console, rows)?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }
    }

    // Streaming finished; wait for quit.
    loop {
        if let Event::Key(key) = event::read()? {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}

/// Paint newest-first lines bottom-up so the newest line hugs the bottom.
fn paint(console: &Console<MonospaceMetrics>, rows: u16) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, Clear(ClearType::All))?;

    let bottom = rows.saturating_sub(1);
    for (offset, line) in console.lines().enumerate() {
        let Some(row) = bottom.checked_sub(u16::try_from(offset).unwrap_or(u16::MAX)) else {
            break;
        };
        queue!(stdout, cursor::MoveTo(0, row))?;
        stdout.write_all(line.as_bytes())?;
    }
    stdout.flush()
}
