extern crate common;
extern crate engine;

use common::{Board, MoveOutcome, PieceColour, PieceKind, Square};
use engine::game::{Game, Phase};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn play(game: &mut Game, from: (u8, u8), to: (u8, u8)) -> MoveOutcome {
    game.attempt_move(sq(from.0, from.1), sq(to.0, to.1)).unwrap()
}

#[test]
fn a_new_game_starts_with_white_on_the_initial_position() {
    let game = Game::new();
    assert_eq!(game.turn(), PieceColour::White);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(*game.board(), Board::initial());
    assert_eq!(game.checked_king().unwrap(), None);
}

#[test]
fn turns_alternate_and_rejections_change_nothing() {
    let mut game = Game::new();

    assert_eq!(play(&mut game, (6, 4), (4, 4)), MoveOutcome::AppliedContinue);
    assert_eq!(game.turn(), PieceColour::Black);

    // black may not move a white piece, and rejection keeps the turn
    let before = game.state_change();
    assert_eq!(play(&mut game, (6, 3), (5, 3)), MoveOutcome::Rejected);
    assert_eq!(play(&mut game, (1, 4), (4, 4)), MoveOutcome::Rejected);
    assert_eq!(game.state_change(), before);
    assert_eq!(game.turn(), PieceColour::Black);

    assert_eq!(play(&mut game, (1, 4), (3, 4)), MoveOutcome::AppliedContinue);
    assert_eq!(game.turn(), PieceColour::White);
}

#[test]
fn pawns_capture_diagonally_only_when_a_target_is_there() {
    let mut game = Game::new();

    assert_eq!(play(&mut game, (6, 4), (5, 4)), MoveOutcome::AppliedContinue);
    assert_eq!(play(&mut game, (1, 3), (3, 3)), MoveOutcome::AppliedContinue);

    // nothing on (4,3) yet, so the diagonal is rejected
    assert_eq!(play(&mut game, (5, 4), (4, 3)), MoveOutcome::Rejected);

    assert_eq!(play(&mut game, (6, 0), (5, 0)), MoveOutcome::AppliedContinue);
    assert_eq!(play(&mut game, (3, 3), (4, 3)), MoveOutcome::AppliedContinue);

    // now the black pawn stands on (4,3) and the capture is legal
    assert_eq!(play(&mut game, (5, 4), (4, 3)), MoveOutcome::AppliedContinue);
    assert_eq!(
        game.piece_at(sq(4, 3)).map(|p| (p.kind, p.colour)),
        Some((PieceKind::Pawn, PieceColour::White))
    );
}

#[test]
fn delivering_check_ends_the_game_immediately() {
    // the fool's mate pattern; under the simplified end rule the queen's
    // arrival already finishes the game
    let mut game = Game::new();
    assert_eq!(play(&mut game, (6, 5), (5, 5)), MoveOutcome::AppliedContinue);
    assert_eq!(play(&mut game, (1, 4), (3, 4)), MoveOutcome::AppliedContinue);
    assert_eq!(play(&mut game, (6, 6), (4, 6)), MoveOutcome::AppliedContinue);
    assert_eq!(
        play(&mut game, (0, 3), (4, 7)),
        MoveOutcome::AppliedGameOver(PieceColour::Black)
    );
    assert_eq!(game.phase(), Phase::GameOver);
    // the loser's king is reported for display even though the turn
    // stayed with the winner
    assert_eq!(game.turn(), PieceColour::Black);
    assert_eq!(game.checked_king().unwrap(), Some(sq(7, 4)));
}

#[test]
fn a_finished_game_resets_before_the_next_move() {
    let mut game = Game::new();
    play(&mut game, (6, 5), (5, 5));
    play(&mut game, (1, 4), (3, 4));
    play(&mut game, (6, 6), (4, 6));
    assert_eq!(
        play(&mut game, (0, 3), (4, 7)),
        MoveOutcome::AppliedGameOver(PieceColour::Black)
    );

    // next request runs on a fresh board, white to move
    assert_eq!(play(&mut game, (6, 0), (5, 0)), MoveOutcome::AppliedContinue);
    assert_eq!(game.turn(), PieceColour::Black);
    assert_eq!(
        game.piece_at(sq(6, 5)).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn clicks_drive_the_selection_state_machine() {
    let mut game = Game::new();

    // empty square and opposing piece do not select
    assert_eq!(game.click(sq(4, 4)).unwrap(), None);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.click(sq(1, 0)).unwrap(), None);
    assert_eq!(game.phase(), Phase::AwaitingSelection);

    // own piece selects; an illegal target spends the selection
    assert_eq!(game.click(sq(6, 4)).unwrap(), None);
    assert_eq!(game.phase(), Phase::PieceSelected(sq(6, 4)));
    assert_eq!(game.click(sq(2, 4)).unwrap(), Some(MoveOutcome::Rejected));
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(*game.board(), Board::initial());
    assert_eq!(game.turn(), PieceColour::White);

    // select again and make a legal move
    assert_eq!(game.click(sq(6, 4)).unwrap(), None);
    assert_eq!(
        game.click(sq(4, 4)).unwrap(),
        Some(MoveOutcome::AppliedContinue)
    );
    assert_eq!(game.turn(), PieceColour::Black);
}

#[test]
fn a_game_over_click_starts_a_new_game() {
    let mut game = Game::new();
    play(&mut game, (6, 5), (5, 5));
    play(&mut game, (1, 4), (3, 4));
    play(&mut game, (6, 6), (4, 6));
    play(&mut game, (0, 3), (4, 7));
    assert_eq!(game.phase(), Phase::GameOver);

    assert_eq!(game.click(sq(0, 0)).unwrap(), None);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(*game.board(), Board::initial());
    assert_eq!(game.turn(), PieceColour::White);
    // the highlight clears with the new game
    assert_eq!(game.checked_king().unwrap(), None);
}
