use crate::constants::*;
use rand::Rng;

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub translate_y: f64,
    pub opacity: f64,
}

pub fn hero_parallax(scroll_y: f64) -> HeroParallax {
    HeroParallax {
        translate_y: scroll_y * HERO_PARALLAX_RATE,
        opacity: (1.0 - scroll_y / HERO_FADE_DISTANCE_PX).clamp(0.0, 1.0),
    }
}

/// Ripple position inside a button from page coordinates.
#[inline]
pub fn ripple_origin(page_x: f64, page_y: f64, offset_left: f64, offset_top: f64) -> [f64; 2] {
    [page_x - offset_left, page_y - offset_top]
}

/// One glitch roll; true roughly one time in fifty.
#[inline]
pub fn glitch_fires<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f64>() > GLITCH_CHANCE_ABOVE
}
