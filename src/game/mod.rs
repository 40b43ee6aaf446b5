pub mod board;
pub mod piece;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{random_kind, Piece, PieceKind};
pub use state::{Command, Game, Status};
