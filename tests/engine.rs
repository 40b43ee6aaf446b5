//! End-to-end engine scenarios: full drop cycles driven through the public
//! command/tick surface, checking board contents afterwards.

use blockfall::{Cell, Command, Game, Piece, PieceKind, Status, BOARD_H, BOARD_W};

fn filled(game: &Game, x: usize, y: usize) -> bool {
    game.board.get(x, y).is_filled()
}

#[test]
fn o_piece_falls_to_the_floor_and_locks_centered() {
    let mut game = Game::new(1000);
    game.spawn_piece(PieceKind::O);
    assert_eq!(game.current.x, 5);
    assert_eq!(game.current.y, 0);

    // Drive gravity until the piece lands; the drop counter restarts on
    // every forced drop.
    let mut drops = 0;
    loop {
        game.tick(1001);
        assert_eq!(game.drop_counter_ms, 0);
        drops += 1;
        assert!(drops <= BOARD_H, "piece never landed");
        // Landing merges the O and spawns a successor at the top.
        if filled(&game, 5, BOARD_H - 1) {
            break;
        }
    }
    assert_eq!(drops, BOARD_H - 1);

    for y in [BOARD_H - 2, BOARD_H - 1] {
        assert_eq!(game.board.get(5, y), Cell::Filled(PieceKind::O));
        assert_eq!(game.board.get(6, y), Cell::Filled(PieceKind::O));
        assert_eq!(game.board.get(4, y), Cell::Empty);
        assert_eq!(game.board.get(7, y), Cell::Empty);
    }
    assert_eq!(game.status, Status::Running);
}

#[test]
fn completing_the_bottom_row_sweeps_it_for_ten_points() {
    let mut game = Game::new(1000);
    // Bottom row full except column 0.
    for x in 1..BOARD_W {
        game.board.set(x, BOARD_H - 1, Cell::Filled(PieceKind::J));
    }

    // A vertical I hugging the left wall plugs the hole when it lands.
    let mut piece = Piece::spawn(PieceKind::I, BOARD_W);
    piece = piece.rotated(1); // filled column 2 of the matrix
    piece.x = -2;
    piece.y = (BOARD_H - 4) as i32;
    game.current = piece;

    assert!(game.player_drop()); // blocked by the floor: merge, sweep, respawn
    assert_eq!(game.score, 10);
    assert_eq!(game.lines_cleared, 1);

    // The swept row vanished; the rest of the I column slid down one row.
    for y in (BOARD_H - 3)..BOARD_H {
        assert_eq!(game.board.get(0, y), Cell::Filled(PieceKind::I), "y={y}");
    }
    for x in 1..BOARD_W {
        assert_eq!(game.board.get(x, BOARD_H - 1), Cell::Empty, "x={x}");
    }
    for x in 0..BOARD_W {
        assert_eq!(game.board.get(x, 0), Cell::Empty, "x={x}");
    }
}

#[test]
fn stacking_to_the_spawn_point_ends_the_game() {
    let mut game = Game::new(1000);
    for y in 0..2 {
        for x in 0..BOARD_W {
            game.board.set(x, y, Cell::Filled(PieceKind::S));
        }
    }
    game.spawn_piece(PieceKind::T);
    assert_eq!(game.status, Status::GameOver);

    // Terminal state: gravity and piece commands are inert, restart is not.
    game.tick(10_000);
    assert_eq!(game.status, Status::GameOver);
    game.dispatch(Command::SoftDrop);
    assert_eq!(game.status, Status::GameOver);
    game.dispatch(Command::Restart);
    assert_eq!(game.status, Status::Running);
    assert!(game.board.cells.iter().all(|c| *c == Cell::Empty));
}

#[test]
fn commands_steer_the_piece_between_ticks() {
    let mut game = Game::new(1000);
    game.spawn_piece(PieceKind::O);
    let x = game.current.x;

    game.dispatch(Command::MoveLeft);
    game.tick(200);
    game.dispatch(Command::MoveLeft);
    game.tick(200);
    game.dispatch(Command::MoveRight);
    assert_eq!(game.current.x, x - 1);

    game.tick(200);
    game.dispatch(Command::SoftDrop);
    assert_eq!(game.current.y, 1);
    assert_eq!(game.drop_counter_ms, 0);
}
