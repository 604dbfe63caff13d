/// Page-effect tuning constants.
///
/// Scroll thresholds and offsets are in CSS pixels, delays in milliseconds
/// unless the name says otherwise. Class names live here too so the shell and
/// the stylesheet agree on one spelling.
// Scroll thresholds
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0;
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.3;

// Scroll reveal: element counts as in view when its top is above innerHeight / divisor
pub const REVEAL_VIEWPORT_DIVISOR: f64 = 1.25;

// Fade-in observer
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_IN_CHILD_STAGGER_MS: u32 = 100;
pub const FADE_IN_SELECTOR: &str = ".service-card, .portfolio-item, .about-content, .contact-content, .services-grid, .portfolio-grid";

// Portfolio filter timing
pub const FILTER_STAGGER_MS: u32 = 50;
pub const FILTER_SETTLE_MS: u32 = 300;
pub const FILTER_SHOW_DELAY_MS: u32 = 50;
pub const FILTER_ALL: &str = "all";

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_DURATION_MIN_SEC: f64 = 2.0;
pub const PARTICLE_DURATION_SPAN_SEC: f64 = 3.0;
pub const PARTICLE_DELAY_MAX_SEC: f64 = 2.0;

// Mouse trail
pub const MOUSE_TRAIL_CAPACITY: usize = 10;
pub const TRAIL_FADE_MS: u32 = 500;

// Contact form
pub const SIMULATED_SEND_MS: u32 = 2000;
pub const SUBMIT_PULSE_MS: u32 = 200;

// Notifications
pub const TOAST_ENTER_DELAY_MS: u32 = 100;
pub const TOAST_VISIBLE_MS: u32 = 5000;
pub const TOAST_EXIT_MS: u32 = 400;

// Loader
pub const LOADER_HOLD_MS: u32 = 1000;
pub const LOADER_FADE_MS: u32 = 500;

// Hero title entrance (seconds, fed to CSS animation delay)
pub const TITLE_LINE_BASE_DELAY_SEC: f64 = 0.5;
pub const TITLE_LINE_STAGGER_SEC: f64 = 0.3;

// Presentation markers
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_HIDE: &str = "hide";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_LOADED: &str = "loaded";
