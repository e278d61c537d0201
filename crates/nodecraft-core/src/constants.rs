use std::time::Duration;

// Shared tuning constants for the site front-end.

// Viewport breakpoints
pub const SMALL_VIEWPORT_MAX_WIDTH: f32 = 768.0; // at or below: mobile layout, no custom cursor
pub const LOW_POWER_CORE_THRESHOLD: u32 = 4; // fewer logical cores halves the particle count

// Particle field
pub const PARTICLES_WIDE: usize = 50;
pub const PARTICLES_NARROW: usize = 25;
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // per axis, per reference frame
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const PARTICLE_RGB: [u8; 3] = [0, 217, 255];
pub const PARTICLE_GLOW_BLUR: f32 = 10.0;
pub const PARTICLE_GLOW_COLOR: &str = "#00d9ff";

// Velocities are expressed per reference frame; dt is converted to frames.
pub const REFERENCE_FRAME: Duration = Duration::from_micros(16_667);
pub const MAX_CATCHUP_FRAMES: f32 = 3.0;

// Cursor
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_REST_SCALE: f32 = 1.0;

// Loading screen
pub const LOADING_TICK_MS: i32 = 100;
pub const LOADING_STEP_MAX: f32 = 15.0; // percent per tick
pub const LOADING_HIDE_DELAY_MS: i32 = 500;
pub const LOADING_FALLBACK_MS: i32 = 3000;
pub const LOADING_REMOVE_DELAY_MS: i32 = 1000;

// Hero and stats
pub const HERO_STAGGER_MS: i32 = 200;
pub const STATS_DURATION_MS: f32 = 2000.0;
pub const STATS_TICK_MS: i32 = 16;

// Navigation
pub const HEADER_SCROLLED_AT: f64 = 100.0;
pub const HEADER_HIDE_AFTER: f64 = 200.0;
pub const SECTION_ACTIVE_BAND: f64 = 200.0;
pub const HEADER_HEIGHT_FALLBACK: f64 = 80.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

// Gallery
pub const PORTFOLIO_SHOW_DELAY_MS: i32 = 100;
pub const PORTFOLIO_HIDE_DELAY_MS: i32 = 300;

// Contact form
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SUBMIT_SIMULATED_MS: i32 = 2000;

// Notifications
pub const TOAST_ENTER_DELAY_MS: i32 = 100;
pub const TOAST_DISMISS_MS: i32 = 6000;
pub const TOAST_EXIT_MS: i32 = 400;

// Showreel modal
pub const MODAL_FADE_MS: i32 = 300;
pub const SHOWREEL_TOAST_DELAY_MS: i32 = 500;
