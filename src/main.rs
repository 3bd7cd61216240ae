mod browser;
mod chatapp;
mod config;
mod drive;
mod utils;

use std::thread;
use std::time::Duration;

use browser::launch_browser;
use chatapp::ChatAppBot;
use config::{ADMIN_EMAIL, ADMIN_PASSWORD, CHAT_PATH, DRIVE_LINK, SHOT_DIR, SHOT_NAME};
use drive::convert_to_direct_link;
use utils::{log_error, log_info, log_warn, setup_env};

fn main() {
    setup_env();

    let browser = match launch_browser() {
        Ok(b) => b,
        Err(e) => {
            log_error(&format!("{}", e));
            return;
        }
    };

    let bot = match ChatAppBot::new(&browser) {
        Ok(bot) => bot,
        Err(e) => {
            log_error(&format!("Tab Creation Failed: {}", e));
            return;
        }
    };

    // 1. Login as Admin and set a Drive-link wallpaper
    if let Err(e) = bot.login(ADMIN_EMAIL, ADMIN_PASSWORD) {
        log_error(&format!("Admin Login failed: {}. Skipping wallpaper set.", e));
        return;
    }

    thread::sleep(Duration::from_secs(2));

    if let Err(e) = bot.set_wallpaper(DRIVE_LINK) {
        log_error(&format!("Setting wallpaper failed: {}", e));
    }

    // 2. Go to Chat
    if let Err(e) = bot.open_chat(CHAT_PATH) {
        log_error(&format!("Chat navigation failed: {}", e));
    }

    // 3. Check the background carries the converted link
    let expected = convert_to_direct_link(DRIVE_LINK);
    match bot.wallpaper_in_dom() {
        Ok(Some(found)) if found == expected => {
            log_info(&format!("PASS: wallpaper URL rewritten to {}", found));
        }
        Ok(Some(found)) => {
            log_warn(&format!("FAIL: wallpaper URL is {} (expected {})", found, expected));
        }
        Ok(None) => {
            log_warn("FAIL: no background-image found in the chat view.");
        }
        Err(e) => {
            log_error(&format!("DOM check failed: {}", e));
        }
    }

    // 4. Screenshot for manual inspection either way
    match bot.snapshot(SHOT_DIR, SHOT_NAME) {
        Ok(path) => log_info(&format!("Screenshot taken: {}", path.display())),
        Err(e) => log_error(&format!("{}", e)),
    }
}
