// Page-wide constants. Everything here is fixed at compile time; the optional
// behaviours are switched with cargo features instead of runtime settings.

/// Scroll offset (px) after which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Header height compensation used when deciding which section is current.
pub const SECTION_HEADER_COMPENSATION: f64 = 150.0;

/// Fixed header height subtracted from smooth-scroll destinations.
pub const SMOOTH_SCROLL_HEADER_OFFSET: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const TYPING_WORDS: &[&str] = &[
    "Beautiful Spaces",
    "Creative Solutions",
    "Modern Designs",
    "Your Vision",
];
pub const TYPING_START_DELAY_MS: u32 = 1500;
pub const TYPING_CHAR_DELAY_MS: u32 = 100;
pub const TYPING_DELETE_DELAY_MS: u32 = 50;
pub const TYPING_FULL_WORD_PAUSE_MS: u32 = 2000;
pub const TYPING_NEXT_WORD_PAUSE_MS: u32 = 500;

pub const LIGHTBOX_FADE_MS: u32 = 200;

pub const NOTIFICATION_DISMISS_MS: u32 = 5000;
pub const NOTIFICATION_SLIDE_OUT_MS: u32 = 300;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

/// Below this viewport width the hero background stays still.
pub const PARALLAX_MIN_VIEWPORT: f64 = 768.0;
pub const PARALLAX_FACTOR: f64 = 0.4;

#[cfg(feature = "preloader")]
pub const PRELOADER_HOLD_MS: u32 = 500;
#[cfg(feature = "preloader")]
pub const PRELOADER_FADE_MS: u32 = 500;

pub const CONTACT_EMAIL: &str = "gilputlangtri@gmail.com";

pub fn mailto_handoff_enabled() -> bool {
    cfg!(feature = "mailto-handoff")
}
