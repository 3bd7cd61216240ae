use headless_chrome::{Browser, LaunchOptions};
use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::process::Command;
use std::ffi::OsStr;
use crate::config::{USER_AGENT, CHROME_PATHS};

fn find_chromium_path() -> Result<PathBuf> {
    for candidate in CHROME_PATHS {
        let p = PathBuf::from(candidate);
        if p.exists() { return Ok(p); }
    }

    for name in ["chromium", "chromium-browser", "google-chrome"] {
        if let Ok(output) = Command::new("which").arg(name).output() {
            if output.status.success() {
                let s = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !s.is_empty() { return Ok(PathBuf::from(s)); }
            }
        }
    }
    Err(anyhow!("Chromium binary not found. Install chromium or google-chrome."))
}

pub fn launch_browser() -> Result<Browser> {
    let chrome_path = find_chromium_path()?;
    let ua_arg = format!("--user-agent={}", USER_AGENT);

    // Throwaway profile so stale sessions never leak into a run
    let random_id: u32 = rand::random();
    let temp_dir = std::env::temp_dir().join(format!("chrome_wallpaper_verify_{}", random_id));
    let user_data_arg = format!("--user-data-dir={}", temp_dir.to_string_lossy());

    let args_vec = vec![
        "--no-sandbox",
        "--disable-setuid-sandbox",
        "--disable-dev-shm-usage",
        "--disable-gpu",
        "--window-size=1280,720",
        "--disable-default-apps",
        "--disable-extensions",
        "--disable-sync",
        "--no-first-run",
        &user_data_arg,
        &ua_arg,
    ];

    let options = LaunchOptions {
        headless: true,
        sandbox: false,
        path: Some(chrome_path),
        window_size: Some((1280, 720)),
        enable_gpu: false,
        args: args_vec.iter().map(|s| OsStr::new(s)).collect(),
        ..Default::default()
    };

    match Browser::new(options) {
        Ok(b) => Ok(b),
        Err(e) => Err(anyhow!("Browser Launch Failed: {}. \nTip: snap-packaged chromium can fail headless; prefer a distro or google-chrome build.", e)),
    }
}
