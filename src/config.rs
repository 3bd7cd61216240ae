// Browser Identity (Desktop Mode)
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

// Chromium Path Candidates
pub const CHROME_PATHS: &[&str] = &[
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome",
];

// --- Target Application ---
pub const BASE_URL: &str = "http://localhost:5173";
pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_PASSWORD: &str = "password123";
pub const CHAT_PATH: &str = "/chat/some-user-id";

// Example Drive Link format: https://drive.google.com/file/d/123456789/view
pub const DRIVE_LINK: &str = "https://drive.google.com/file/d/123456789/view?usp=sharing";

// --- Directory Configuration ---
pub const SHOT_DIR: &str = "./verification";
pub const SHOT_NAME: &str = "wallpaper_drive_fix";
pub const ERROR_DIR: &str = "./verification/errors";

// --- Selectors ---
// 1. Login Form Strategies
pub const EMAIL_CSS: &str = r#"input[placeholder="Email"]"#;
pub const EMAIL_XPATH: &str = "//input[@placeholder='Email' or @type='email']";
pub const PASS_CSS: &str = r#"input[placeholder="Password"]"#;
pub const PASS_XPATH: &str = "//input[@type='password']";
pub const LOGIN_BTN_XPATH: &str = "//button[contains(text(), 'Login')]";

// 2. Post-Login Landmark
pub const CHATS_XPATH: &str = "//*[text()='Chats']";

// 3. Admin Settings Panel
pub const ADMIN_CONTROLS_XPATH: &str = "//*[contains(text(), 'Admin Controls')]";
pub const WALLPAPER_INPUT_CSS: &str = r#"input[placeholder="https://..."]"#;
pub const SAVE_BTN_XPATH: &str = "//button[contains(text(), 'Save Settings')]";
pub const PANEL_CLOSE_XPATH: &str = "//*[text()='\u{2715}']";
