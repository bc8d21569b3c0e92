/// FAQ accordion: at most one item is open at a time.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[inline]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    /// Clicking an open item closes it; clicking any other opens it alone.
    pub fn toggle(&mut self, item: usize) {
        if item >= self.len {
            return;
        }
        self.open = if self.open == Some(item) {
            None
        } else {
            Some(item)
        };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}
