//! System browser integration.
//!
//! Opens article links in the user's web browser.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Program and leading arguments used to open a URL.
///
/// # Arguments
/// * `browser_env` - Value of `$BROWSER`, if set
///
/// # Details
/// `$BROWSER` wins when set and non-empty. Otherwise the platform opener is
/// used: `open` on macOS, `cmd /C start` on Windows, `xdg-open` elsewhere.
pub fn browser_command(browser_env: Option<&str>) -> (String, Vec<String>) {
    if let Some(browser) = browser_env.map(str::trim).filter(|b| !b.is_empty()) {
        return (browser.to_string(), Vec::new());
    }
    if cfg!(target_os = "macos") {
        ("open".to_string(), Vec::new())
    } else if cfg!(target_os = "windows") {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), "start".to_string(), String::new()],
        )
    } else {
        ("xdg-open".to_string(), Vec::new())
    }
}

/// Open `url` in the system browser.
///
/// # Details
/// The browser is spawned detached with its output discarded so it cannot
/// draw over the terminal UI.
pub fn open_in_browser(url: &str) -> Result<()> {
    let browser_env = std::env::var("BROWSER").ok();
    let (program, args) = browser_command(browser_env.as_deref());

    Command::new(&program)
        .args(&args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open {} with {}", url, program))?;

    Ok(())
}
