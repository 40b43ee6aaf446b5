use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::game::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

/// The active falling piece: its shape matrix in the current rotation state
/// plus an (x, y) offset into board coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Vec<Vec<Cell>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Canonical orientation, centered at the top of a `board_width` well.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let matrix = canonical_matrix(kind);
        let x = (board_width / 2) as i32 - (matrix[0].len() / 2) as i32;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.matrix[0].len()
    }

    /// Board coordinates of every filled cell in the current orientation.
    pub fn cells(&self) -> Vec<(i32, i32, PieceKind)> {
        let mut out = Vec::new();
        for (my, row) in self.matrix.iter().enumerate() {
            for (mx, cell) in row.iter().enumerate() {
                if let Cell::Filled(kind) = cell {
                    out.push((self.x + mx as i32, self.y + my as i32, *kind));
                }
            }
        }
        out
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }

    /// Quarter turn: transpose, then reverse each row for clockwise or the
    /// row order for counter-clockwise.
    pub fn rotated(&self, dir: i32) -> Self {
        let mut next = self.clone();
        let n = next.matrix.len();
        for y in 0..n {
            for x in 0..y {
                let below = next.matrix[y][x];
                let above = next.matrix[x][y];
                next.matrix[y][x] = above;
                next.matrix[x][y] = below;
            }
        }
        if dir > 0 {
            for row in &mut next.matrix {
                row.reverse();
            }
        } else {
            next.matrix.reverse();
        }
        next
    }
}

pub fn random_kind() -> PieceKind {
    let mut rng = thread_rng();
    *ALL_KINDS.choose(&mut rng).unwrap_or(&PieceKind::I)
}

/// Literal shape layouts. I is 4x4, O is 2x2, the rest 3x3.
pub fn canonical_matrix(kind: PieceKind) -> Vec<Vec<Cell>> {
    let f = Cell::Filled(kind);
    let e = Cell::Empty;
    match kind {
        PieceKind::I => vec![
            vec![e, e, e, e],
            vec![f, f, f, f],
            vec![e, e, e, e],
            vec![e, e, e, e],
        ],
        PieceKind::O => vec![vec![f, f], vec![f, f]],
        PieceKind::T => vec![vec![e, f, e], vec![f, f, f], vec![e, e, e]],
        PieceKind::S => vec![vec![e, f, f], vec![f, f, e], vec![e, e, e]],
        PieceKind::Z => vec![vec![f, f, e], vec![e, f, f], vec![e, e, e]],
        PieceKind::J => vec![vec![f, e, e], vec![f, f, f], vec![e, e, e]],
        PieceKind::L => vec![vec![e, e, f], vec![f, f, f], vec![e, e, e]],
    }
}
