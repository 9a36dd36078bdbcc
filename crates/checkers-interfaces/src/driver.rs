use crate::error::ApiError;
use std::fmt::Debug;

/// The browser-automation transport consumed by the page object.
///
/// The harness treats the browser as a black box reachable through exactly
/// these operations: navigation, element lookup + click dispatch, and
/// text/attribute extraction. Anything richer (animation tracking, retrying,
/// game semantics) is built on top of this trait, never inside it.
///
/// Selectors are CSS. Implementations resolve a selector freshly on every
/// call; handles are never cached across calls, because the quantities the
/// harness observes are exactly the ones that change between calls.
#[async_trait::async_trait]
pub trait PageDriver: Send + Sync + Debug {
    /// Navigates the session to the given URL.
    ///
    /// Returns once navigation has been initiated; readiness of the page is
    /// the caller's concern (the page object polls for it).
    async fn goto(&self, url: &str) -> Result<(), ApiError>;

    /// Dispatches a click on the first element matching `selector`.
    ///
    /// # Returns
    /// - `Ok(())` once the click has been dispatched.
    /// - `Err(ApiError::ElementNotFound)` if nothing matches the selector.
    async fn click(&self, selector: &str) -> Result<(), ApiError>;

    /// Extracts the rendered text of the first element matching `selector`.
    ///
    /// # Returns
    /// - `Ok(String)` with the element's text, verbatim.
    /// - `Err(ApiError::ElementNotFound)` if nothing matches the selector.
    async fn text(&self, selector: &str) -> Result<String, ApiError>;

    /// Reads an attribute of the first element matching `selector`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` when the element exists and carries the attribute.
    /// - `Ok(None)` when the element or the attribute is absent. Absence is
    ///   an ordinary observation here, not a failure: board reads classify
    ///   it, they do not abort on it.
    /// - `Err(ApiError)` only for transport-level failures.
    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, ApiError>;
}
