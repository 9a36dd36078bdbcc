//! The interaction and synchronization controller.
//!
//! `CheckersPage` owns the driver session and guarantees one thing to its
//! callers: control only returns once the asynchronous, animation-driven UI
//! has reached a state that is safe to read. Both the user's move and the
//! computer's reply animate client-side, so every mutating operation ends in
//! a bounded poll over fresh full-board scans.

use crate::board::{BoardReader, BoardScan, Space};
use crate::glyph::Glyph;
use crate::message::Phrase;
use crate::selectors;
use checkers_core::{WaitError, WaitSettings, poll_until};
use checkers_interfaces::{ApiError, PageDriver};
use log::debug;

/// Condition names quoted in timeout failures.
const READY_CONDITION: &str = "game message to settle to a known prompt";
const SETTLED_CONDITION: &str = "all pieces to finish animating";

/// Page object for one checkers session. One instance per scenario; the
/// driver handle is owned, never ambient, so independent scenarios can run
/// concurrently against independent sessions.
#[derive(Debug)]
pub struct CheckersPage<D: PageDriver> {
    driver: D,
    waits: WaitSettings,
}

impl<D: PageDriver> CheckersPage<D> {
    pub fn new(driver: D, waits: WaitSettings) -> Self {
        Self { driver, waits }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Tears the page object apart, handing the session back to the caller.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Navigates to the game and waits until it is ready for input. The
    /// message region is the last part of the page to load, so readiness of
    /// the message implies readiness of the board.
    pub async fn open(&self, url: &str) -> Result<(), ApiError> {
        debug!("opening checkers game at {}", url);
        self.driver.goto(url).await?;
        self.wait_for_ready().await
    }

    /// The current game message, verbatim.
    pub async fn read_message(&self) -> Result<String, ApiError> {
        self.driver.text(selectors::MESSAGE).await
    }

    /// Blocks until the game message matches one of the awaiting-input
    /// phrasings. A message that never stabilizes to a recognized prompt
    /// (load failure, unknown UI state) surfaces as a timeout naming this
    /// condition.
    pub async fn wait_for_ready(&self) -> Result<(), ApiError> {
        poll_until(self.waits.ready(), READY_CONDITION, || self.ready_probe())
            .await
            .map_err(flatten_wait)
    }

    /// Blocks until zero pieces are in the animating visual state across
    /// the whole board. This is the core synchronization primitive: any
    /// board read taken before this settles is unreliable.
    pub async fn wait_for_settled(&self) -> Result<BoardScan, ApiError> {
        poll_until(self.waits.settle(), SETTLED_CONDITION, || {
            self.settled_probe()
        })
        .await
        .map_err(flatten_wait)
    }

    /// Clicks `from`, then `to`, then waits for the board to settle. The
    /// game silently ignores illegal attempts, so the post-condition here is
    /// only "animation settled", never "move succeeded".
    pub async fn move_piece(&self, from: Space, to: Space) -> Result<BoardScan, ApiError> {
        debug!("move {} -> {}", from, to);
        self.driver.click(&from.selector()).await?;
        self.driver.click(&to.selector()).await?;
        self.wait_for_settled().await
    }

    /// Triggers the restart control and waits out the full reset, so the
    /// caller observes the initial state rather than a transitional one.
    pub async fn restart(&self) -> Result<BoardScan, ApiError> {
        debug!("restarting game");
        self.driver.click(selectors::RESTART).await?;
        self.wait_for_ready().await?;
        self.wait_for_settled().await
    }

    /// One fresh full-board scan. Meaningful to assert against only after a
    /// settling wait.
    pub async fn scan(&self) -> Result<BoardScan, ApiError> {
        self.reader().scan().await
    }

    pub async fn glyph_at(&self, space: Space) -> Result<Glyph, ApiError> {
        self.reader().glyph_at(space).await
    }

    pub async fn has_orange_piece(&self, space: Space) -> Result<bool, ApiError> {
        Ok(self.glyph_at(space).await?.is_user_piece())
    }

    pub async fn has_blue_piece(&self, space: Space) -> Result<bool, ApiError> {
        Ok(self.glyph_at(space).await?.is_computer_piece())
    }

    pub async fn is_empty(&self, space: Space) -> Result<bool, ApiError> {
        Ok(self.glyph_at(space).await?.is_empty())
    }

    pub async fn is_king(&self, space: Space) -> Result<bool, ApiError> {
        Ok(self.glyph_at(space).await?.is_king())
    }

    fn reader(&self) -> BoardReader<'_, D> {
        BoardReader::new(&self.driver)
    }

    /// Ready means the message classifies as awaiting input. While the page
    /// is still loading the message element may not exist yet; that reads
    /// as "not ready yet", not as a failure.
    async fn ready_probe(&self) -> Result<Option<()>, ApiError> {
        let text = match self.driver.text(selectors::MESSAGE).await {
            Ok(text) => text,
            Err(ApiError::ElementNotFound { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        let phrase = Phrase::classify(&text);
        debug!("message {:?} -> {:?}", text, phrase);
        Ok(phrase.is_awaiting_input().then_some(()))
    }

    async fn settled_probe(&self) -> Result<Option<BoardScan>, ApiError> {
        let scan = self.reader().scan().await?;
        Ok(scan.settled().then_some(scan))
    }
}

fn flatten_wait(err: WaitError<ApiError>) -> ApiError {
    match err {
        WaitError::TimedOut { condition, waited } => ApiError::Timeout {
            condition,
            waited_ms: waited.as_millis() as u64,
        },
        WaitError::Probe(err) => err,
    }
}
