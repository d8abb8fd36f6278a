use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
}

/// Cyclic pointer over a fixed, non-empty list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Jumps straight to `index`, clamped to the last slide.
    pub fn go_to(&mut self, index: usize) {
        self.active = index.min(self.len - 1);
    }

    pub fn apply(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
            SwipeDirection::None => {}
        }
    }

    /// Width of the slide strip as a percentage of the viewport.
    pub fn strip_width_percent(&self) -> f64 {
        self.len as f64 * 100.0
    }

    /// Translation of the strip as a percentage of its own width.
    pub fn strip_offset_percent(&self) -> f64 {
        self.active as f64 / self.len as f64 * 100.0
    }

    pub fn strip_style(&self) -> String {
        format!(
            "width: {}%; transform: translateX(-{:.4}%);",
            self.strip_width_percent(),
            self.strip_offset_percent()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
    None,
}

/// Horizontal touch gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Swipe {
    start: Option<f64>,
    end: Option<f64>,
}

impl Swipe {
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn track(&mut self, x: f64) {
        self.end = Some(x);
    }

    /// Ends the gesture and resets for the next one.
    ///
    /// Dragging left (start to the right of end) advances, dragging right goes
    /// back. A gesture that never moved is a tap and maps to nothing.
    pub fn finish(&mut self, threshold: f64) -> SwipeDirection {
        let direction = match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let delta = start - end;
                if delta > threshold {
                    SwipeDirection::Next
                } else if delta < -threshold {
                    SwipeDirection::Previous
                } else {
                    SwipeDirection::None
                }
            }
            _ => SwipeDirection::None,
        };
        *self = Self::default();
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 150.0;

    fn swipe(start: f64, end: f64) -> SwipeDirection {
        let mut swipe = Swipe::default();
        swipe.begin(start);
        swipe.track(end);
        swipe.finish(THRESHOLD)
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_next_wraps_around() {
        for len in 1..8 {
            for start in 0..len {
                let mut carousel = Carousel::new(len).unwrap();
                carousel.go_to(start);
                for _ in 0..len {
                    carousel.next();
                    assert!(carousel.active() < len);
                }
                assert_eq!(carousel.active(), start);
            }
        }
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut carousel = Carousel::new(6).unwrap();
        carousel.previous();
        assert_eq!(carousel.active(), 5);
        carousel.previous();
        assert_eq!(carousel.active(), 4);

        let mut single = Carousel::new(1).unwrap();
        single.previous();
        assert_eq!(single.active(), 0);
        single.next();
        assert_eq!(single.active(), 0);
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        let mut carousel = Carousel::new(3).unwrap();
        let moves = [true, true, false, true, false, false, false, true, true, true];
        for forward in moves {
            if forward {
                carousel.next();
            } else {
                carousel.previous();
            }
            assert!(carousel.active() < carousel.len());
        }
        // net +2 over ten moves
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(2);
        assert_eq!(carousel.active(), 2);
        carousel.go_to(40);
        assert_eq!(carousel.active(), 3);
        assert!(carousel.is_active(3));
    }

    #[test]
    fn test_swipe_direction_mapping() {
        assert_eq!(swipe(500.0, 300.0), SwipeDirection::Next);
        assert_eq!(swipe(300.0, 500.0), SwipeDirection::Previous);
        assert_eq!(swipe(350.0, 300.0), SwipeDirection::None);
        // exactly on the threshold does nothing
        assert_eq!(swipe(450.0, 300.0), SwipeDirection::None);
    }

    #[test]
    fn test_swipe_applies_exactly_once() {
        let mut carousel = Carousel::new(6).unwrap();
        carousel.apply(swipe(500.0, 300.0));
        assert_eq!(carousel.active(), 1);
        carousel.apply(swipe(300.0, 500.0));
        carousel.apply(swipe(300.0, 500.0));
        assert_eq!(carousel.active(), 5);
        carousel.apply(swipe(300.0, 350.0));
        assert_eq!(carousel.active(), 5);
    }

    #[test]
    fn test_tap_after_swipe_is_ignored() {
        let mut gesture = Swipe::default();
        gesture.begin(500.0);
        gesture.track(300.0);
        assert_eq!(gesture.finish(THRESHOLD), SwipeDirection::Next);

        // no touchmove this time, the previous end point must not leak in
        gesture.begin(500.0);
        assert_eq!(gesture.finish(THRESHOLD), SwipeDirection::None);
    }

    #[test]
    fn test_strip_offset() {
        let mut carousel = Carousel::new(4).unwrap();
        assert_eq!(carousel.strip_offset_percent(), 0.0);
        carousel.go_to(1);
        assert_eq!(carousel.strip_offset_percent(), 25.0);
        carousel.go_to(3);
        assert_eq!(carousel.strip_offset_percent(), 75.0);
        assert_eq!(carousel.strip_width_percent(), 400.0);
        assert!(carousel.strip_style().contains("translateX(-75.0000%)"));
    }
}
