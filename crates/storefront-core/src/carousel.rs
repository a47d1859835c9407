//! Carousel position and autoplay.

use std::time::Duration;

/// Delay between automatic slide changes.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// One hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub cta_href: &'static str,
}

/// Home page hero banners.
pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        title: "PREMIUM SUPPLEMENTS",
        subtitle: "Fuel your workouts with high-quality ingredients",
        cta: "SHOP NOW",
        cta_href: "/products",
    },
    Slide {
        title: "ADVANCED PROTEIN FORMULA",
        subtitle: "30g protein per serving with zero added sugar",
        cta: "EXPLORE",
        cta_href: "/category/protein",
    },
];

/// Looping carousel over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl Carousel {
    /// Autoplay starts on.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
    }

    /// Autoplay timer fired. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay || self.len < 2 {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_tick_respects_autoplay() {
        let mut c = Carousel::new(HERO_SLIDES.len());
        assert!(c.tick());
        assert_eq!(c.current(), 1);
        c.toggle_autoplay();
        assert!(!c.tick());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.select(3);
        assert!(!c.tick());
        assert_eq!(c.current(), 0);
        assert!(c.is_empty());
    }
}
