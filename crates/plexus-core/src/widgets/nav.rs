use crate::constants::MOBILE_BREAKPOINT_PX;
use fnv::FnvHashSet;

/// Mobile navigation menu open/closed state.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Submenus only toggle on click at mobile widths; desktop uses hover.
#[inline]
pub fn submenu_toggles_at(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX
}

/// Which dropdowns and submenus are currently expanded, by index.
#[derive(Clone, Debug, Default)]
pub struct Dropdowns {
    open: FnvHashSet<usize>,
}

impl Dropdowns {
    pub fn toggle(&mut self, id: usize) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    #[inline]
    pub fn is_open(&self, id: usize) -> bool {
        self.open.contains(&id)
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Close everything; returns the ids that were open.
    pub fn close_all(&mut self) -> Vec<usize> {
        self.open.drain().collect()
    }
}
