use crate::config::ChromeConfig;
use crate::error::ChromeError;
use checkers_interfaces::{ApiError, PageDriver};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use log::debug;
use std::fmt;
use std::path::Path;
use tokio::task::JoinHandle;

/// One Chrome session holding one page. The CDP event handler runs on a
/// background task for the session's lifetime; dropping the driver without
/// calling [`ChromeDriver::close`] leaves teardown to the browser process
/// exiting with the test.
pub struct ChromeDriver {
    browser: Browser,
    page: Page,
    event_pump: JoinHandle<()>,
}

impl fmt::Debug for ChromeDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChromeDriver").finish_non_exhaustive()
    }
}

impl ChromeDriver {
    pub async fn launch(cfg: &ChromeConfig) -> Result<Self, ChromeError> {
        debug!("launching Chrome (headless: {})", cfg.headless);

        let mut builder = BrowserConfig::builder().window_size(cfg.window.0, cfg.window.1);
        if !cfg.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &cfg.executable_path {
            builder = builder.chrome_executable(Path::new(path));
        }
        for arg in &cfg.args {
            builder = builder.arg(arg.clone());
        }
        let browser_config = builder.build().map_err(ChromeError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|err| ChromeError::Launch(err.to_string()))?;

        let event_pump = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!("CDP handler stopped: {err}");
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        Ok(Self {
            browser,
            page,
            event_pump,
        })
    }

    /// Closes the browser and stops the event pump.
    pub async fn close(mut self) -> Result<(), ChromeError> {
        self.browser.close().await?;
        self.event_pump.abort();
        Ok(())
    }
}

#[async_trait::async_trait]
impl PageDriver for ChromeDriver {
    async fn goto(&self, url: &str) -> Result<(), ApiError> {
        debug!("goto {url}");
        self.page
            .goto(url)
            .await
            .map_err(|err| ApiError::ConnectionFailed(err.to_string()))?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), ApiError> {
        debug!("click {selector}");
        let element =
            self.page
                .find_element(selector)
                .await
                .map_err(|_| ApiError::ElementNotFound {
                    selector: selector.to_string(),
                })?;
        element
            .click()
            .await
            .map_err(|err| ApiError::Driver(err.to_string()))?;
        Ok(())
    }

    async fn text(&self, selector: &str) -> Result<String, ApiError> {
        let element =
            self.page
                .find_element(selector)
                .await
                .map_err(|_| ApiError::ElementNotFound {
                    selector: selector.to_string(),
                })?;
        let text = element
            .inner_text()
            .await
            .map_err(|err| ApiError::Driver(err.to_string()))?;
        Ok(text.unwrap_or_default())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, ApiError> {
        // Element absence is an ordinary observation for board reads.
        let element = match self.page.find_element(selector).await {
            Ok(element) => element,
            Err(_) => return Ok(None),
        };
        element
            .attribute(name)
            .await
            .map_err(|err| ApiError::Driver(err.to_string()))
    }
}
