//! Shared setup for the live scenario suite.

use checkers_e2e::{
    CheckersPage, ChromeConfig, ChromeDriver, HarnessConfig, load_config, setup_logging,
};

/// Launches Chrome, opens the configured deployment, and returns the page
/// object once the game is ready for input.
pub async fn open_game() -> (CheckersPage<ChromeDriver>, HarnessConfig) {
    let config = load_config(None).expect("harness configuration should load");
    let _ = setup_logging(&config.global.log_level); // idempotent across tests

    let driver = ChromeDriver::launch(&ChromeConfig::from(&config.browser))
        .await
        .expect("Chrome should launch");
    let page = CheckersPage::new(driver, config.wait);
    page.open(&config.global.base_url)
        .await
        .expect("game should load and reach a ready prompt");
    (page, config)
}
