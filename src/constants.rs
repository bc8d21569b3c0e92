// Page wiring constants: selectors, timer periods and class names.
// Scene and widget math lives in `plexus_core::constants`.

// Backdrop
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const LOADED_CLASS: &str = "loaded";
pub const GLITCH_ACTIVE_CLASS: &str = "glitch-active";
pub const RIPPLE_CLASS: &str = "ripple";
pub const INDICATOR_CLASS: &str = "indicator";

// Navigation
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINK: &str = ".nav-link";
pub const NAVBAR: &str = ".navbar";
pub const DROPDOWN_MENU_CLASS: &str = "dropdown-menu";
pub const NAV_ITEM_DROPDOWN: &str = ".nav-item-dropdown";
pub const DROPDOWN_SUBMENU: &str = ".dropdown-submenu";
pub const DROPDOWN_SUBMENU_LINK: &str = ".dropdown-submenu > a";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

// FAQ
pub const FAQ_QUESTION: &str = ".faq-question";
pub const FAQ_ITEM: &str = ".faq-item";

// Carousel
pub const CAROUSEL_TRACK: &str = ".carousel-track";
pub const CAROUSEL_SLIDE: &str = ".gallery-slide";
pub const CAROUSEL_PREV: &str = ".prev-btn";
pub const CAROUSEL_NEXT: &str = ".next-btn";
pub const CAROUSEL_INDICATORS: &str = ".carousel-indicators";
pub const CAROUSEL_CONTAINER: &str = ".gallery-carousel";
pub const CAROUSEL_AUTOPLAY_MS: i32 = 5000;

// Reveal-on-scroll
pub const REVEAL_TARGETS: &str =
    ".service-card, .tech-item, .feature-item, .stat-number, .gallery-item, .partner-item";
pub const STAT_NUMBER_CLASS: &str = "stat-number";
pub const STAT_TARGET_ATTR: &str = "data-target";
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const COUNTER_TICK_MS: i32 = 16;

// Effects
pub const GLITCH: &str = ".glitch";
pub const GLITCH_INTERVAL_MS: i32 = 200;
pub const GLITCH_ACTIVE_MS: i32 = 100;
pub const HERO_CONTENT: &str = ".hero-content";
pub const BUTTON: &str = ".btn";
pub const RIPPLE_LIFETIME_MS: i32 = 600;

// Cursor trail overlay
pub const TRAIL_Z_INDEX: &str = "9999";
