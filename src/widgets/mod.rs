pub mod carousel;
pub mod effects;
pub mod faq;
pub mod nav;
pub mod reveal;
pub mod trail;
