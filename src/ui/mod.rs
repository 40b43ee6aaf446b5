use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::config::Difficulty;
use crate::game::{Cell, PieceKind, Status};
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

/// Fixed 7-color palette keyed by piece kind. Rendering-only concern; the
/// board never stores a color.
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb(0, 255, 255),
        PieceKind::O => Color::Rgb(255, 255, 0),
        PieceKind::L => Color::Rgb(255, 140, 0),
        PieceKind::J => Color::Rgb(0, 0, 255),
        PieceKind::S => Color::Rgb(0, 255, 0),
        PieceKind::Z => Color::Rgb(255, 0, 0),
        PieceKind::T => Color::Rgb(128, 0, 128),
    }
}

pub fn draw_game(frame: &mut Frame, game: &Game, difficulty: Difficulty) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 6).max(30)),
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, game, play_rect);
    draw_sidebar(frame, game, difficulty, cols[1]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![(' ', Color::Reset); PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = ('┌', Color::Reset);
    grid[0][PLAY_W - 1] = ('┐', Color::Reset);
    for x in 1..PLAY_W - 1 {
        grid[0][x] = ('─', Color::Reset);
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = ('│', Color::Reset);
        grid[y][PLAY_W - 1] = ('│', Color::Reset);
    }
    grid[PLAY_H - 1][0] = ('└', Color::Reset);
    grid[PLAY_H - 1][PLAY_W - 1] = ('┘', Color::Reset);
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = ('═', Color::Reset);
    }

    // Helper to plot a filled block in the inner area.
    let plot_block = |grid: &mut [Vec<(char, Color)>], bx: usize, by: usize, color: Color| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = ('█', color);
            grid[gy][gx + 1] = ('█', color);
        }
    };

    // Locked cells.
    for y in 0..game.board.height {
        for x in 0..game.board.width {
            if let Cell::Filled(kind) = game.board.get(x, y) {
                plot_block(&mut grid, x, y, kind_color(kind));
            }
        }
    }

    // Active piece, drawn in every state so the losing spawn stays visible.
    for (x, y, kind) in game.current.cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < game.board.width && yu < game.board.height {
                plot_block(&mut grid, xu, yu, kind_color(kind));
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&(ch, color)| Span::styled(ch.to_string(), Style::default().fg(color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    match game.status {
        Status::GameOver => draw_overlay(frame, play_rect, "GAME OVER\nr restart / q quit"),
        Status::Paused => draw_overlay(frame, play_rect, "PAUSED\nspace resume"),
        Status::Running => {}
    }
}

fn draw_overlay(frame: &mut Frame, play_rect: Rect, text: &str) {
    let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
    let overlay_h = 4u16;
    let popup = Rect {
        x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
        y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w,
        height: overlay_h,
    };
    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(overlay, popup);
}

fn draw_sidebar(frame: &mut Frame, game: &Game, difficulty: Difficulty, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(1), Constraint::Length(9)].as_ref())
        .split(area);

    let status = match game.status {
        Status::Running => "RUNNING",
        Status::Paused => "PAUSED",
        Status::GameOver => "OVER",
    };

    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nLINES\n{}\n\nSPEED\n{}\n\nSTATUS\n{}",
        game.score,
        game.lines_cleared,
        difficulty.label(),
        status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(
        "←/a →/d move\n↑/w rotate\n↓/s soft drop\nspace pause\nr restart\nq quit",
    )
    .block(Block::default().title("CONTROLS").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
