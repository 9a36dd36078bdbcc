use checkers_core::BrowserSettings;

/// Launch options for the local Chrome session.
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    pub executable_path: Option<String>,
    pub headless: bool,
    pub args: Vec<String>,
    pub window: (u32, u32),
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            executable_path: None,
            headless: true,
            args: vec![],
            window: (1280, 720),
        }
    }
}

impl From<&BrowserSettings> for ChromeConfig {
    fn from(settings: &BrowserSettings) -> Self {
        Self {
            executable_path: settings.executable_path.clone(),
            headless: settings.headless,
            args: settings.args.clone(),
            ..Self::default()
        }
    }
}
