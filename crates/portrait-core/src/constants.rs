// Tuning constants for the portrait. Values are aesthetic.

// Dot map filtering (exclusive bounds; strips the bars at the image edges)
pub const FILTER_MIN_X: f32 = 85.0;
pub const FILTER_MAX_X: f32 = 400.0;

// Foreground dots render smaller than the sampled radius
pub const FOREGROUND_RADIUS_SCALE: f32 = 0.6;
pub const FOREGROUND_DEPTH: f32 = 1.0;

// Background synthesis
pub const BACKGROUND_RATIO: f64 = 0.7; // background count = floor(ratio * primary count)
pub const BACKGROUND_JITTER: f32 = 15.0; // full width of the position jitter window
pub const BACKGROUND_MAX_DEPTH: f32 = 0.5; // exclusive
pub const BACKGROUND_RADIUS_SCALE: f32 = 0.4;
pub const BACKGROUND_RADIUS_BASE: f32 = 0.3;
pub const BACKGROUND_RADIUS_DEPTH: f32 = 0.4;
pub const DARKEN_BASE: f32 = 0.6;
pub const DARKEN_DEPTH: f32 = 0.4;

// Breathing
pub const BREATHE_Y_FREQ: f32 = 1.3;
pub const BREATHE_TICK_SEC: f32 = 0.016; // added by the 16 ms interval

// Pointer
pub const POINTER_PARKED: [f32; 2] = [-100.0, -100.0];
pub const REPULSION_MAX_DISTANCE: f32 = 150.0;
pub const REPULSION_STRENGTH: f32 = 35.0;
pub const HOVER_DISTANCE: f32 = 10.0;
pub const HOVER_JITTER: f32 = 5.0; // jitter in [-HOVER_JITTER, HOVER_JITTER) * depth
pub const HOVER_SIZE_MULTIPLIER: f32 = 1.3;

// Organic bursts
pub const BURST_PROBABILITY: f32 = 0.2;
pub const BURST_PHASE_RATE: f32 = 0.1;
pub const BURST_AMPLITUDE: f32 = 1.5;

// Spring integration
pub const SPRING_RATE: f32 = 6.0;
pub const SPRING_RATE_HOVERED: f32 = 4.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Rendering
pub const ALPHA_BASE: f32 = 0.7;
pub const ALPHA_DEPTH: f32 = 0.3;
