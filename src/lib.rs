pub mod app;
pub mod config;
pub mod game;
pub mod ui;

pub use config::{
    Difficulty, BOARD_H, BOARD_W, CELL_W, CLEAR_COOLDOWN_MS, INPUT_DEBOUNCE_MS, MIN_PANE_WIDTH,
    PLAY_H, PLAY_W,
};
pub use game::{Board, Cell, Command, Game, Piece, PieceKind, Status};
