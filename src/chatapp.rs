use headless_chrome::{Browser, Tab, Element};
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::thread;
use anyhow::{Result, anyhow};
use crate::config::*;
use crate::utils::{log_info, save_screenshot, save_html};

pub struct ChatAppBot<'a> {
    _browser: &'a Browser,
    tab: Arc<Tab>,
}

impl<'a> ChatAppBot<'a> {
    pub fn new(browser: &'a Browser) -> Result<Self> {
        let tab = browser.new_tab()?;
        Ok(Self { _browser: browser, tab })
    }

    fn smart_find(&self, css: &str, xpath: &str) -> Result<Element<'_>> {
        if let Ok(el) = self.tab.find_element(css) { return Ok(el); }
        if let Ok(el) = self.tab.find_element_by_xpath(xpath) { return Ok(el); }
        Err(anyhow!("Element not found: {}", css))
    }

    pub fn snapshot(&self, folder: &str, name: &str) -> Result<std::path::PathBuf> {
        match self.tab.capture_screenshot(headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Png, None, None, true) {
            Ok(png) => save_screenshot(png, folder, name),
            Err(e) => {
                // Screenshot path failed; keep an HTML dump so the run still leaves evidence
                if let Ok(c) = self.tab.get_content() { save_html(c, folder, name); }
                Err(anyhow!("Screenshot failed: {}", e))
            }
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        log_info("Navigating to login as Admin...");
        self.tab.navigate_to(&format!("{}/login", BASE_URL))?;

        if self.tab.wait_for_element_with_custom_timeout(EMAIL_CSS, Duration::from_secs(5)).is_err() {
            let _ = self.snapshot(ERROR_DIR, "missing_login_form");
            return Err(anyhow!("Login form did not appear within 5s"));
        }

        log_info("Inputting Credentials...");
        let email_el = self.smart_find(EMAIL_CSS, EMAIL_XPATH)?;
        email_el.click()?;
        email_el.type_into(email)?;

        let pass_el = self.smart_find(PASS_CSS, PASS_XPATH)?;
        pass_el.click()?;
        pass_el.type_into(password)?;

        if let Ok(btn) = self.tab.find_element_by_xpath(LOGIN_BTN_XPATH) {
            btn.click()?;
        } else {
            self.tab.press_key("Enter")?;
        }

        // Landing on the chat list is the login landmark
        let start_time = Instant::now();
        loop {
            if self.tab.find_element_by_xpath(CHATS_XPATH).is_ok() {
                log_info("Admin Login successful.");
                return Ok(());
            }
            if start_time.elapsed() > Duration::from_secs(15) {
                let _ = self.snapshot(ERROR_DIR, "login_timeout");
                return Err(anyhow!("Chats view did not appear within 15s"));
            }
            thread::sleep(Duration::from_millis(500));
        }
    }

    pub fn set_wallpaper(&self, link: &str) -> Result<()> {
        let panel_btn = self.tab.find_element_by_xpath(ADMIN_CONTROLS_XPATH)
            .map_err(|_| anyhow!("Admin Controls not visible"))?;
        panel_btn.click()?;
        thread::sleep(Duration::from_secs(1));

        let input = self.tab.wait_for_element_with_custom_timeout(WALLPAPER_INPUT_CSS, Duration::from_secs(5))?;
        input.click()?;
        input.type_into(link)?;
        // The preview relies on a state update triggered by typing
        thread::sleep(Duration::from_secs(1));

        self.tab.find_element_by_xpath(SAVE_BTN_XPATH)?.click()?;
        thread::sleep(Duration::from_secs(2));

        if let Ok(close) = self.tab.find_element_by_xpath(PANEL_CLOSE_XPATH) {
            let _ = close.click();
        }
        log_info("Wallpaper set with Drive Link.");
        Ok(())
    }

    pub fn open_chat(&self, path: &str) -> Result<()> {
        log_info("Navigating to chat...");
        self.tab.navigate_to(&format!("{}{}", BASE_URL, path))?;
        thread::sleep(Duration::from_secs(3));
        Ok(())
    }

    /// Reads the wallpaper URL out of the chat view's background-image style.
    /// The sample Drive ID is fake, so the image never renders, but the
    /// rewritten URL must still be present in the DOM.
    pub fn wallpaper_in_dom(&self) -> Result<Option<String>> {
        let js = r#"
            (function() {
                for (const el of document.querySelectorAll('div')) {
                    const bg = getComputedStyle(el).backgroundImage;
                    if (bg && bg !== 'none') {
                        const m = bg.match(/url\(["']?([^"')]+)["']?\)/);
                        if (m) return m[1];
                    }
                }
                return '';
            })()
        "#;
        let res = self.tab.evaluate(js, false)?;
        let url = res.value
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or_default();
        if url.is_empty() { Ok(None) } else { Ok(Some(url)) }
    }
}
