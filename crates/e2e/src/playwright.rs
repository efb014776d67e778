//! Playwright browser automation
//!
//! UI checks are compiled into a single Node script and run with `node`.
//! Elements are located by XPath.

use std::fmt;
use std::process::{Command, Stdio};
use std::str::FromStr;

use tokio::process::Command as TokioCommand;
use tracing::{debug, info};

use crate::config::DEFAULT_PAGE_URL;
use crate::error::{E2eError, E2eResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chromium" => Ok(Browser::Chromium),
            "firefox" => Ok(Browser::Firefox),
            "webkit" => Ok(Browser::Webkit),
            other => Err(format!(
                "unknown browser '{}' (expected chromium, firefox or webkit)",
                other
            )),
        }
    }
}

/// A single browser step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiStep {
    /// Load an absolute URL
    Navigate { url: String },

    /// Click an element; fails if it is not clickable within the timeout
    Click { xpath: String },

    /// Fail unless the element becomes visible within the timeout
    AssertVisible { xpath: String },
}

impl UiStep {
    pub fn name(&self) -> String {
        match self {
            UiStep::Navigate { url } => format!("navigate:{}", url),
            UiStep::Click { xpath } => format!("click:{}", xpath),
            UiStep::AssertVisible { xpath } => format!("assert_visible:{}", xpath),
        }
    }
}

/// Configuration for Playwright
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    /// Page the UI scenario opens
    pub page_url: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub browser: Browser,
    pub headless: bool,
    /// Per-step wait budget
    pub timeout_ms: u64,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            viewport_width: 1280,
            viewport_height: 720,
            browser: Browser::Chromium,
            headless: true,
            timeout_ms: 5000,
        }
    }
}

/// Playwright browser handle
pub struct PlaywrightHandle {
    config: PlaywrightConfig,
}

impl PlaywrightHandle {
    /// Create a handle, verifying Playwright is installed
    pub fn new(config: PlaywrightConfig) -> E2eResult<Self> {
        Self::check_playwright_installed()?;
        Ok(Self::unchecked(config))
    }

    /// Create a handle without probing for Playwright
    pub fn unchecked(config: PlaywrightConfig) -> Self {
        Self { config }
    }

    fn check_playwright_installed() -> E2eResult<()> {
        let output = Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Build the Node script for a sequence of steps
    pub fn build_script(&self, steps: &[UiStep]) -> String {
        let mut script = String::new();

        script.push_str(&format!(
            r#"
const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  const timeout = {timeout};

  try {{
"#,
            browser = self.config.browser.as_str(),
            headless = self.config.headless,
            width = self.config.viewport_width,
            height = self.config.viewport_height,
            timeout = self.config.timeout_ms,
        ));

        for (i, step) in steps.iter().enumerate() {
            script.push_str(&format!("\n    // Step {}: {}\n", i + 1, step.name()));
            script.push_str(&self.step_to_js(step));
            script.push('\n');
        }

        script.push_str(
            r#"
    console.log(JSON.stringify({ success: true }));
  } catch (error) {
    console.error(JSON.stringify({ success: false, error: error.message, stack: error.stack }));
    process.exit(1);
  } finally {
    await browser.close();
  }
})();
"#,
        );

        script
    }

    fn step_to_js(&self, step: &UiStep) -> String {
        match step {
            UiStep::Navigate { url } => {
                format!("    await page.goto({});", js_string(url))
            }
            UiStep::Click { xpath } => {
                format!(
                    "    await page.locator({}).click({{ timeout }});",
                    js_string(&format!("xpath={}", xpath))
                )
            }
            UiStep::AssertVisible { xpath } => {
                format!(
                    "    await page.locator({}).waitFor({{ state: 'visible', timeout }});",
                    js_string(&format!("xpath={}", xpath))
                )
            }
        }
    }

    /// Run steps in one browser session
    pub async fn run(&self, steps: &[UiStep]) -> E2eResult<()> {
        for step in steps {
            debug!("UI step: {}", step.name());
        }
        let script = self.build_script(steps);
        self.run_script(&script).await?;
        info!("{} UI step(s) passed", steps.len());
        Ok(())
    }

    /// Execute a script via Node
    pub async fn run_script(&self, script: &str) -> E2eResult<()> {
        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("ui-check.js");
        std::fs::write(&script_path, script)?;

        debug!("Running Playwright script: {}", script_path.display());

        let output = TokioCommand::new("node")
            .arg(&script_path)
            .current_dir(temp_dir.path())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(E2eError::Playwright(format!(
                "Script failed:\nstdout: {}\nstderr: {}",
                stdout, stderr
            )));
        }

        Ok(())
    }
}

/// Quote a value as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
