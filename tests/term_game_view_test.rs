use blockfall::core::{EngineConfig, GameState, SequenceRandom};
use blockfall::term::{piece_color, FrameBuffer, GameView, Overlay, Viewport};
use blockfall::types::{ColorId, GameEvent, PieceKind};

fn o_game() -> GameState<SequenceRandom> {
    let config = EngineConfig::default().with_pieces(&[PieceKind::O]);
    GameState::new(config, SequenceRandom::constant(0)).unwrap()
}

// Board frame (22 wide) + gap + panel exactly fills 42 columns, so the frame sits at (0, 0).
const VP: Viewport = Viewport {
    width: 42,
    height: 22,
};

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&o_game().snapshot(), None, VP);
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut game = o_game();
    game.grid_mut().paint(0, 19, ColorId(5));
    let fb = GameView::default().render(&game.snapshot(), None, VP);

    for x in [1, 2] {
        let glyph = fb.get(x, 20).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, piece_color(ColorId(5)));
    }
}

#[test]
fn term_view_follows_the_falling_piece() {
    let mut game = o_game();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&game.snapshot(), None, VP, &mut fb);
    assert_eq!(fb.get(1 + 4 * 2, 1).unwrap().ch, '█');

    game.tick();
    game.tick();
    view.render_into(&game.snapshot(), None, VP, &mut fb);
    assert_ne!(fb.get(1 + 4 * 2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 4 * 2, 3).unwrap().ch, '█');
}

#[test]
fn term_view_shows_game_over_banner_from_event() {
    let mut game = o_game();
    for y in 2..20 {
        game.grid_mut().paint(4, y, ColorId(9));
    }
    game.tick();

    let Some(GameEvent::GameOver { score, lines, level }) = game.take_last_event() else {
        panic!("expected a game over event");
    };
    let overlay = Overlay::GameOver { score, lines, level };
    let fb = GameView::default().render(&game.snapshot(), Some(&overlay), Viewport::new(80, 24));
    let found = (0..fb.height()).any(|y| fb.row_text(y).contains("GAME OVER"));
    assert!(found);
}
