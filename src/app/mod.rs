use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Difficulty;
use crate::game::Command;
use crate::ui::draw_game;
use crate::Game;

type Term = Terminal<CrosstermBackend<Stdout>>;

// Input poll timeout; also the frame cadence when no keys arrive.
const FRAME_POLL_MS: u64 = 16;

pub fn run() -> Result<()> {
    let difficulty = parse_difficulty_arg()?;
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), difficulty)
}

/// The difficulty name is shell-side configuration; the engine only ever
/// sees the resolved interval.
fn parse_difficulty_arg() -> Result<Difficulty> {
    match std::env::args().nth(1) {
        None => Ok(Difficulty::Normal),
        Some(name) => match Difficulty::from_name(&name) {
            Some(difficulty) => Ok(difficulty),
            None => bail!("unknown difficulty {name:?} (easy, normal, hard, demon, impossible)"),
        },
    }
}

fn run_loop(terminal: &mut Term, difficulty: Difficulty) -> Result<()> {
    let mut game = Game::new(difficulty.drop_interval_ms());
    let mut last_frame = Instant::now();

    loop {
        // Render every frame regardless of status.
        terminal.draw(|frame| draw_game(frame, &game, difficulty))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    if let Some(cmd) = command_for_key(key.code) {
                        game.dispatch(cmd);
                    }
                }
            }
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        game.tick(elapsed.as_millis() as u64);
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Rotate),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}
