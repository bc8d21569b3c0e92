use crate::constants::SWIPE_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStep {
    Prev,
    Next,
}

#[inline]
pub fn carousel_step_for_key(key: &str) -> Option<SlideStep> {
    match key {
        "ArrowLeft" => Some(SlideStep::Prev),
        "ArrowRight" => Some(SlideStep::Next),
        _ => None,
    }
}

/// Slide index bounded to `[0, total)`, plus the auto-play pause flag.
#[derive(Clone, Debug, Default)]
pub struct Carousel {
    index: usize,
    total: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total,
            paused: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Jump to slide `index`; ignored when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.total {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.total {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self, step: SlideStep) -> bool {
        match step {
            SlideStep::Prev => self.prev(),
            SlideStep::Next => self.next(),
        }
    }

    /// Auto-play tick: advance, wrapping to the first slide after the last.
    pub fn auto_advance(&mut self) -> bool {
        if self.paused || self.total == 0 {
            return false;
        }
        if !self.next() {
            self.index = 0;
        }
        true
    }

    /// Horizontal swipe from `start_x` to `end_x`. Left swipes advance.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        let diff = start_x - end_x;
        if diff.abs() > SWIPE_THRESHOLD_PX {
            if diff > 0.0 {
                self.next()
            } else {
                self.prev()
            }
        } else {
            false
        }
    }

    /// Pixels the track shifts left to show the current slide.
    #[inline]
    pub fn track_offset(&self, slide_width: f64) -> f64 {
        self.index as f64 * slide_width
    }

    #[inline]
    pub fn indicator_active(&self, indicator: usize) -> bool {
        indicator == self.index
    }

    #[inline]
    pub fn prev_button_opacity(&self) -> f32 {
        if self.index == 0 {
            0.5
        } else {
            1.0
        }
    }

    #[inline]
    pub fn next_button_opacity(&self) -> f32 {
        if self.index + 1 == self.total {
            0.5
        } else {
            1.0
        }
    }
}
