//! Terminal view tests - scene rendering into a framebuffer

use tui_2048::core::{slide_without_spawn, Board, GameState};
use tui_2048::engine::{Presenter, StateAnimation};
use tui_2048::term::{encode_diff_into, GameView, HudView, TileScene, Viewport};
use tui_2048::types::Direction;

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

// Default 29x14 board frame centred in 80x24.
const START_X: u16 = 25;
const START_Y: u16 = 5;

fn single_tile_scene() -> (GameState, TileScene) {
    let state = GameState::from_board(Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
    let mut scene = TileScene::new();
    scene.begin(&state);
    (state, scene)
}

#[test]
fn test_border_corners() {
    let (_, scene) = single_tile_scene();
    let fb = GameView::default().render(&scene, &HudView::default(), VIEWPORT);

    assert_eq!(fb.get(START_X, START_Y).map(|c| c.ch), Some('┌'));
    assert_eq!(fb.get(START_X + 28, START_Y).map(|c| c.ch), Some('┐'));
    assert_eq!(fb.get(START_X, START_Y + 13).map(|c| c.ch), Some('└'));
    assert_eq!(fb.get(START_X + 28, START_Y + 13).map(|c| c.ch), Some('┘'));
}

#[test]
fn test_unsettled_tile_is_dim_until_settled() {
    let (state, mut scene) = single_tile_scene();
    let view = GameView::default();

    // Tile (0,0) spans x 26..32, y 6..9; its digit sits mid-row.
    let digit = (START_X + 1 + 2, START_Y + 1 + 1);

    let fb = view.render(&scene, &HudView::default(), VIEWPORT);
    let cell = fb.get(digit.0, digit.1).expect("in bounds");
    assert_eq!(cell.ch, '2');
    assert!(cell.style.dim);

    assert!(StateAnimation::new(&state).frame(0, &mut scene));
    let fb = view.render(&scene, &HudView::default(), VIEWPORT);
    let cell = fb.get(digit.0, digit.1).expect("in bounds");
    assert!(!cell.style.dim);
    assert!(cell.style.bold);
}

#[test]
fn test_game_over_overlay_and_hud() {
    let (_, scene) = single_tile_scene();
    let hud = HudView {
        moves: 17,
        best: 256,
        game_over: true,
    };
    let fb = GameView::default().render(&scene, &hud, VIEWPORT);

    assert!(fb.row_text(START_Y + 7).contains("GAME OVER"));
    let panel: String = (START_Y..START_Y + 5).map(|y| fb.row_text(y)).collect();
    assert!(panel.contains("MOVES"));
    assert!(panel.contains("17"));
    assert!(panel.contains("BEST"));
    assert!(panel.contains("256"));
}

#[test]
fn test_animation_frames_produce_diffs() {
    let state = GameState::from_board(Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]));
    let next = slide_without_spawn(&state, Direction::Left).expect("tile can move");
    let anim = StateAnimation::new(&next);
    let view = GameView::default();
    let mut scene = TileScene::new();
    scene.begin(&next);

    anim.frame(0, &mut scene);
    let before = view.render(&scene, &HudView::default(), VIEWPORT);
    anim.frame(1, &mut scene);
    anim.frame(2, &mut scene);
    anim.frame(3, &mut scene);
    let after = view.render(&scene, &HudView::default(), VIEWPORT);

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).expect("encode to vec");
    assert!(!out.is_empty());

    let mut same = Vec::new();
    encode_diff_into(&after, &after, &mut same).expect("encode to vec");
    assert!(same.len() < out.len());
}
