/// DOM ids expected on the host page.
pub const CANVAS_ID: &str = "gameCanvas";
pub const AUDIO_ID: &str = "successAudio";
pub const SCORE_ID: &str = "score";
pub const RESET_BTN_ID: &str = "resetShapes";
pub const CLEAR_BTN_ID: &str = "clearScore";

/// Target outline style.
pub const OUTLINE_COLOR: &str = "gray";
pub const OUTLINE_WIDTH: f64 = 3.0;
