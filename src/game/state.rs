use crate::config::{BOARD_H, BOARD_W, CLEAR_COOLDOWN_MS, INPUT_DEBOUNCE_MS};
use crate::game::{random_kind, Board, Cell, Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// Input commands, decoupled from any input source. Keyboard, buttons and
/// gestures all funnel through `Game::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Restart,
}

pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub status: Status,
    pub score: u64,
    pub lines_cleared: u64,
    /// Milliseconds accumulated since the last drop; resets on every drop.
    pub drop_counter_ms: u64,
    drop_interval_ms: u64,
    since_input_ms: u64,
    clear_cooldown_ms: u64,
}

impl Game {
    pub fn new(drop_interval_ms: u64) -> Self {
        let board = Board::new(BOARD_W, BOARD_H);
        let current = Piece::spawn(random_kind(), board.width);
        Self {
            board,
            current,
            status: Status::Running,
            score: 0,
            lines_cleared: 0,
            drop_counter_ms: 0,
            drop_interval_ms,
            since_input_ms: INPUT_DEBOUNCE_MS,
            clear_cooldown_ms: 0,
        }
    }

    /// Sole legality check for movement, rotation, gravity and spawn.
    /// Off the left/right/bottom edges counts as occupied; rows above the
    /// well are never produced since pieces spawn at y = 0.
    pub fn can_place(&self, piece: &Piece) -> bool {
        for (x, y, _) in piece.cells() {
            if x < 0 || y < 0 {
                return false;
            }
            let (xu, yu) = (x as usize, y as usize);
            if xu >= self.board.width || yu >= self.board.height {
                return false;
            }
            if self.board.get(xu, yu).is_filled() {
                return false;
            }
        }
        true
    }

    /// Tentative shift, reverted on collision. Either the move or a no-op.
    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let next = self.current.shifted(dx, dy);
        if self.can_place(&next) {
            self.current = next;
            true
        } else {
            false
        }
    }

    /// Rotate with the wall-kick search: the rotated piece is tried at x
    /// offsets +1, -2, +3, -4, ... until it fits. When the next trial offset
    /// exceeds the shape width the rotation is abandoned as a no-op.
    pub fn rotate_current(&mut self, dir: i32) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let mut next = self.current.rotated(dir);
        let mut kick: i32 = 1;
        while !self.can_place(&next) {
            next.x += kick;
            kick = -(kick + kick.signum());
            if kick > next.width() as i32 {
                return false;
            }
        }
        self.current = next;
        true
    }

    /// One downward step; gravity and soft drop share this path. A blocked
    /// step locks the piece, sweeps, and spawns the next one. Either way the
    /// gravity counter restarts. Returns whether the piece landed.
    pub fn player_drop(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let landed = !self.move_current(0, 1);
        if landed {
            self.merge_current();
            self.sweep();
            self.spawn_next();
        }
        self.drop_counter_ms = 0;
        landed
    }

    fn merge_current(&mut self) {
        for (x, y, kind) in self.current.cells() {
            if x >= 0 && y >= 0 {
                let (xu, yu) = (x as usize, y as usize);
                if xu < self.board.width && yu < self.board.height {
                    self.board.set(xu, yu, Cell::Filled(kind));
                }
            }
        }
    }

    /// Remove full rows bottom-up, re-examining the same index after each
    /// removal since the rows above slide down into it. Row 0 is never
    /// swept. Each row in one sweep doubles the per-row award: 10, 20, 40...
    pub fn sweep(&mut self) -> usize {
        let width = self.board.width;
        let mut cleared = 0usize;
        let mut row_score: u64 = 10;
        let mut y = self.board.height - 1;
        while y > 0 {
            if !self.board.row_full(y) {
                y -= 1;
                continue;
            }
            let start = y * width;
            self.board.cells.drain(start..start + width);
            for _ in 0..width {
                self.board.cells.insert(0, Cell::Empty);
            }
            self.score += row_score;
            row_score *= 2;
            self.lines_cleared += 1;
            cleared += 1;
        }
        if cleared > 0 {
            self.clear_cooldown_ms = CLEAR_COOLDOWN_MS;
        }
        cleared
    }

    pub fn spawn_next(&mut self) {
        self.spawn_piece(random_kind());
    }

    /// Fresh canonical orientation at the centered spawn offset. Spawning
    /// into an occupied footprint is the terminal condition.
    pub fn spawn_piece(&mut self, kind: PieceKind) {
        self.current = Piece::spawn(kind, self.board.width);
        if !self.can_place(&self.current) {
            self.status = Status::GameOver;
        }
    }

    /// Single entry point for every input source. Piece commands pass the
    /// debounce and post-clear gates; pause and restart bypass both.
    pub fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            piece_cmd => self.dispatch_piece_command(piece_cmd),
        }
    }

    fn dispatch_piece_command(&mut self, cmd: Command) {
        if self.status != Status::Running || !self.input_gate_open() {
            return;
        }
        self.since_input_ms = 0;
        match cmd {
            Command::MoveLeft => {
                self.move_current(-1, 0);
            }
            Command::MoveRight => {
                self.move_current(1, 0);
            }
            Command::SoftDrop => {
                self.player_drop();
            }
            Command::Rotate => {
                self.rotate_current(1);
            }
            Command::TogglePause | Command::Restart => {}
        }
    }

    fn input_gate_open(&self) -> bool {
        self.clear_cooldown_ms == 0 && self.since_input_ms >= INPUT_DEBOUNCE_MS
    }

    fn toggle_pause(&mut self) {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver => Status::GameOver,
        };
    }

    /// Full in-place reinitialization; the one transition out of GameOver.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.drop_counter_ms = 0;
        self.since_input_ms = INPUT_DEBOUNCE_MS;
        self.clear_cooldown_ms = 0;
        self.status = Status::Running;
        self.spawn_next();
    }

    /// Advance the engine by one frame. At most one forced drop per tick,
    /// no catch-up loop: a near-zero interval drops exactly once per frame.
    /// Pausing freezes every timer; rendering is the caller's concern and
    /// happens every frame regardless of status.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.status != Status::Running {
            return;
        }
        self.since_input_ms = self.since_input_ms.saturating_add(elapsed_ms);
        self.clear_cooldown_ms = self.clear_cooldown_ms.saturating_sub(elapsed_ms);
        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > self.drop_interval_ms {
            self.player_drop();
        }
    }
}
