/// DOM contract and effect timings for the page wiring.
///
/// Ids and class names must match the portfolio markup; timings are in
/// milliseconds as passed to `setTimeout`/`setInterval`.
// Theme
pub const THEME_TOGGLE_ID: &str = "darkModeToggle";
pub const DARK_MODE_CLASS: &str = "dark-mode";

// Snippet copy
pub const TERMINAL_SELECTOR: &str = ".terminal";
pub const COPY_BUTTON_SELECTOR: &str = ".copy-btn";
pub const COMMAND_SELECTOR: &str = ".terminal-command";
pub const COMMAND_ATTR: &str = "data-cmd";
pub const COPY_CONFIRM_MS: i32 = 1000;

// Targeting overlay
pub const CURSOR_CLASS: &str = "terminator-cursor";
pub const TARGET_CLASS: &str = "terminator-target";
pub const SCAN_LINE_CLASS: &str = "terminator-scan-line";
pub const CROSSHAIR_CLASS: &str = "terminator-crosshair";
pub const HUD_CLASS: &str = "terminator-hud";
pub const PARTICLE_CLASS: &str = "terminator-particle";
pub const HUD_MARKUP: &str = r#"<div class="hud-coords">X: 0 Y: 0</div><div class="hud-target">TARGET: NONE</div><div class="hud-status">SYSTEMS: ONLINE</div>"#;
pub const PARTICLE_BASE_STYLE: &str = "position: fixed; background-color: rgba(255, 50, 50, 0.7); border-radius: 50%; pointer-events: none; z-index: 9997; transform: translate(-50%, -50%); box-shadow: 0 0 5px 1px rgba(255, 0, 0, 0.8);";

// Console nav
pub const NAV_LINK_SELECTOR: &str = ".terminator-link";
pub const NAV_STATUS_SELECTOR: &str = ".terminator-link-status";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const SYSTEM_STATUS_SELECTOR: &str = ".terminator-status";
pub const GLITCH_SHADOW: &str = "0 0 8px rgba(255, 0, 0, 0.8)";
pub const GLITCH_MS: i32 = 100;
pub const CLICK_PULSE_TRANSFORM: &str = "scale(0.95)";
pub const CLICK_PULSE_MS: i32 = 200;
pub const PROCESSING_TEXT: &str = "> PROCESSING...";
pub const PROCESSING_MS: i32 = 500;
pub const STATUS_FLICKER_INTERVAL_MS: i32 = 5000;
pub const STATUS_FLICKER_MS: i32 = 1000;

// Typing animation
pub const TYPING_OUTPUT_ID: &str = "typing-output";
pub const TYPING_CURSOR_SELECTOR: &str = ".typing-cursor";
pub const TYPING_BLINK_ANIMATION: &str = "term-blink 1s step-end infinite";
