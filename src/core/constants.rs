use glam::Vec2;

// Tuning constants for the DOM-free effect logic.

// Targeting overlay
pub const OVERLAY_MIN_VIEWPORT_WIDTH: f64 = 768.0; // logical px; narrower viewports keep the system cursor
pub const RING_EASE: f32 = 0.1; // fraction of remaining distance the ring closes per frame
pub const SCAN_PERIOD_FRAMES: u32 = 50; // scan line wraps after this many frames
pub const SCAN_SWEEP_PX: f32 = 40.0; // vertical travel of the scan line around the pointer
pub const HUD_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

// Particles spawned on pointer movement
pub const PARTICLE_SPAWN_PROBABILITY: f64 = 0.2;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_MIN: f32 = 1.0; // px per tick
pub const PARTICLE_SPEED_MAX: f32 = 3.0;
pub const PARTICLE_LIFE_MIN: f32 = 50.0; // ticks
pub const PARTICLE_LIFE_MAX: f32 = 100.0;
pub const PARTICLE_POOL_CAPACITY: usize = 256;

// Console nav
pub const GLITCH_PROBABILITY: f64 = 0.3;
pub const STATUS_FLICKER_PROBABILITY: f64 = 0.2;

// Typing animation (ms)
pub const TYPING_DELAY_MIN_MS: u32 = 30;
pub const TYPING_DELAY_MAX_MS: u32 = 80; // exclusive
pub const TYPING_SETTLE_MS: u32 = 700;
pub const TYPING_CARET_EVERY: usize = 3;
pub const TYPING_CARET: char = '_';
