//! Smoke scenarios against the live deployment.
//!
//! These need a local Chrome install and network access to the configured
//! `base_url`; run them explicitly with `cargo test -- --ignored`.

mod common;

use checkers_e2e::Space;

#[tokio::test]
#[ignore = "requires Chrome and a reachable checkers deployment"]
async fn application_loads_successfully() {
    let (page, _config) = common::open_game().await;

    let message = page.read_message().await.expect("message text");
    assert_eq!(message, "Select an orange piece to move.");
}

#[tokio::test]
#[ignore = "requires Chrome and a reachable checkers deployment"]
async fn fresh_game_has_twelve_pieces_a_side() {
    let (page, _config) = common::open_game().await;

    let scan = page.wait_for_settled().await.expect("board settles");
    assert_eq!(scan.user, 12, "orange pieces on a fresh board");
    assert_eq!(scan.computer, 12, "blue pieces on a fresh board");
    assert_eq!(scan.unknown, 0, "every cell renders a known glyph");

    let from: Space = "space62".parse().unwrap();
    assert!(page.has_orange_piece(from).await.unwrap());
}
