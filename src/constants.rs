// Web front-end wiring constants.
//
// Element ids, the default dot-map location and timer periods for the
// browser host. Motion tuning lives in `portrait_core::constants`.

// DOM hooks
pub const CANVAS_ID: &str = "portrait-canvas";
pub const LOADING_ID: &str = "portrait-loading";
pub const LOADING_HIDDEN_CLASS: &str = "hidden";
pub const DOT_MAP_ATTR: &str = "data-dot-map";
pub const DEFAULT_DOT_MAP_URL: &str = "/dot-map.json";

// Timers (milliseconds)
pub const BREATHING_INTERVAL_MS: i32 = 16;
pub const BURST_ROLL_INTERVAL_MS: i32 = 2500;
pub const BURST_DURATION_MS: i32 = 2000;
