pub mod accordion;
pub mod carousel;
pub mod counter;
pub mod effects;
pub mod nav;
pub mod trail;

pub use accordion::Accordion;
pub use carousel::{carousel_step_for_key, Carousel, SlideStep};
pub use counter::{format_grouped, parse_target, Counter};
pub use effects::{glitch_fires, hero_parallax, navbar_scrolled, ripple_origin, HeroParallax};
pub use nav::{submenu_toggles_at, Dropdowns, NavMenu};
pub use trail::{TrailArena, TrailParticle};
