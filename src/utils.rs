use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::config::SHOT_DIR;

pub fn setup_env() {
    let path = Path::new(SHOT_DIR);
    if !path.exists() {
        fs::create_dir_all(path).expect("Failed to create verification directory");
    }
}

pub fn log_info(msg: &str) {
    println!("{} {}", "[INFO]".green().bold(), msg);
}

pub fn log_warn(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn log_error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

pub fn save_screenshot(png: Vec<u8>, folder: &str, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(folder)?;
    let path = Path::new(folder).join(format!("{}.png", name));
    fs::write(&path, png)?;
    Ok(path)
}

pub fn save_html(html: String, folder: &str, name: &str) {
    if fs::create_dir_all(folder).is_ok() {
        let path = Path::new(folder).join(format!("{}.html", name));
        let _ = fs::write(path, html);
    }
}
