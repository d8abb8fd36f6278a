//! One-shot entrance animations.
//!
//! A group of elements starts offset by a [`Motion`] and eases back to rest the
//! first time its [`Trigger`] is satisfied. The DOM wiring lives in
//! `app::reveal`; everything here is plain state so it can be reasoned about
//! (and tested) without a browser.

/// When a group is considered visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fire as soon as the group is mounted.
    Mount,
    /// Fire once the top of the group crosses this fraction of the viewport
    /// height, measured from the top ("top 80%" is `Viewport(0.8)`).
    Viewport(f64),
}

impl Trigger {
    pub fn is_crossed(&self, element_top: f64, viewport_height: f64) -> bool {
        match self {
            Trigger::Mount => true,
            Trigger::Viewport(start) => element_top <= viewport_height * start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Fired,
}

impl RevealState {
    /// Feeds one visibility sample. Returns `true` only on the transition to
    /// [`RevealState::Fired`].
    pub fn observe(&mut self, visible: bool) -> bool {
        match self {
            RevealState::Pending if visible => {
                *self = RevealState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(self, RevealState::Fired)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Power2Out,
    Power3Out,
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        }
    }
}

/// Offset an element starts from before easing to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Motion {
    pub const REST: Motion = Motion {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn fade_up(y: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y,
            scale: 1.0,
        }
    }

    pub const fn fade_down(y: f64) -> Self {
        Self::fade_up(-y)
    }

    pub const fn fade_left(x: f64) -> Self {
        Self {
            opacity: 0.0,
            x: -x,
            y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn pop(scale: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub trigger: Trigger,
    pub from: Motion,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub easing: Easing,
}

impl RevealSpec {
    /// Page titles: slide up on mount.
    pub const fn heading() -> Self {
        Self {
            trigger: Trigger::Mount,
            from: Motion::fade_up(50.0),
            duration_ms: 800,
            delay_ms: 0,
            stagger_ms: 400,
            easing: Easing::Power3Out,
        }
    }

    /// Cards and list items further down the page.
    pub const fn cards(start: f64) -> Self {
        Self {
            trigger: Trigger::Viewport(start),
            from: Motion::fade_up(50.0),
            duration_ms: 800,
            delay_ms: 0,
            stagger_ms: 200,
            easing: Easing::Power3Out,
        }
    }

    pub const fn with_motion(mut self, from: Motion) -> Self {
        self.from = from;
        self
    }

    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start offset of the `index`th sibling.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms * index as u32
    }

    /// Inline style for sibling `index`, either parked at the start offset or
    /// transitioning to rest.
    pub fn style(&self, fired: bool, index: usize) -> String {
        if fired {
            format!(
                "opacity: {}; transform: {}; transition: opacity {}ms {ease} {delay}ms, transform {}ms {ease} {delay}ms;",
                Motion::REST.opacity,
                Motion::REST.transform(),
                self.duration_ms,
                self.duration_ms,
                ease = self.easing.css(),
                delay = self.delay_for(index),
            )
        } else {
            format!(
                "opacity: {}; transform: {};",
                self.from.opacity,
                self.from.transform()
            )
        }
    }
}

/// Window listeners owned by one registered group.
///
/// Moves `Unregistered -> Active -> Disposed` and never back, so a group is
/// registered at most once and its handles are released at most once.
#[derive(Debug)]
pub enum ListenerSlot<H> {
    Unregistered,
    Active(Vec<H>),
    Disposed,
}

impl<H> Default for ListenerSlot<H> {
    fn default() -> Self {
        ListenerSlot::Unregistered
    }
}

impl<H> ListenerSlot<H> {
    /// Stores the handles built by `attach`. Refused (and `attach` never
    /// called) unless the slot is still unregistered.
    pub fn register(&mut self, attach: impl FnOnce() -> Vec<H>) -> bool {
        match self {
            ListenerSlot::Unregistered => {
                *self = ListenerSlot::Active(attach());
                true
            }
            _ => false,
        }
    }

    /// Marks the slot disposed and hands back whatever still needs removing.
    pub fn take_for_dispose(&mut self) -> Vec<H> {
        match std::mem::replace(self, ListenerSlot::Disposed) {
            ListenerSlot::Active(handles) => handles,
            _ => Vec::new(),
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, ListenerSlot::Disposed)
    }
}

/// Whole-number counter that runs from zero up to `target`, used by the stat
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl CountUp {
    pub const fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: 2000,
            delay_ms: 0,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Value to show `elapsed_ms` after the counter was started. Eases in and
    /// out (quadratic) and snaps to whole numbers.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        let t = ((elapsed_ms - self.delay_ms as f64) / self.duration_ms.max(1) as f64)
            .clamp(0.0, 1.0);
        let eased = if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
        };
        ((eased * self.target as f64).round() as u32).min(self.target)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= (self.delay_ms + self.duration_ms) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_trigger() {
        let trigger = Trigger::Viewport(0.8);
        assert!(!trigger.is_crossed(900.0, 1000.0));
        assert!(trigger.is_crossed(800.0, 1000.0));
        assert!(trigger.is_crossed(-200.0, 1000.0));
        assert!(Trigger::Mount.is_crossed(5000.0, 1000.0));
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(state.is_fired());

        // scrolled away and back again
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.is_fired());
    }

    #[test]
    fn test_remount_fires_again() {
        let mut first = RevealState::default();
        assert!(first.observe(true));

        // a fresh mount starts from a fresh state
        let mut second = RevealState::default();
        assert!(second.observe(true));
    }

    #[test]
    fn test_stagger_is_strictly_ordered() {
        let spec = RevealSpec::cards(0.7).with_delay(600).with_stagger(100);
        let delays = (0..5).map(|i| spec.delay_for(i)).collect::<Vec<_>>();
        assert_eq!(delays, vec![600, 700, 800, 900, 1000]);
    }

    #[test]
    fn test_style_before_and_after() {
        let spec = RevealSpec::heading();
        let pending = spec.style(false, 0);
        assert!(pending.contains("opacity: 0;"));
        assert!(pending.contains("translate3d(0px, 50px, 0)"));

        let fired = spec.style(true, 1);
        assert!(fired.contains("opacity: 1;"));
        assert!(fired.contains("scale(1)"));
        assert!(fired.contains("800ms"));
        assert!(fired.contains("400ms;"));
    }

    #[test]
    fn test_motion_presets() {
        assert_eq!(Motion::fade_down(20.0).y, -20.0);
        assert_eq!(Motion::fade_left(20.0).x, -20.0);
        assert_eq!(Motion::pop(0.8).scale, 0.8);
        assert_eq!(Motion::pop(0.8).opacity, 0.0);
    }

    #[test]
    fn test_listener_slot_registers_once() {
        let mut slot = ListenerSlot::default();
        assert!(slot.register(|| vec!["scroll", "resize"]));

        let mut attached_again = false;
        assert!(!slot.register(|| {
            attached_again = true;
            vec!["scroll"]
        }));
        assert!(!attached_again);
    }

    #[test]
    fn test_listener_slot_disposes_once() {
        let mut slot = ListenerSlot::default();
        slot.register(|| vec![1, 2]);
        assert_eq!(slot.take_for_dispose(), vec![1, 2]);
        assert!(slot.is_disposed());
        assert!(slot.take_for_dispose().is_empty());

        // an effect re-run after teardown must not attach anything
        assert!(!slot.register(|| vec![3]));
        assert!(slot.take_for_dispose().is_empty());
    }

    #[test]
    fn test_dispose_before_register() {
        let mut slot = ListenerSlot::<u8>::default();
        assert!(slot.take_for_dispose().is_empty());
        assert!(!slot.register(|| vec![1]));
    }

    #[test]
    fn test_count_up_endpoints() {
        let count = CountUp::new(50).with_delay(500);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(500.0), 0);
        assert_eq!(count.value_at(1500.0), 25);
        assert_eq!(count.value_at(2500.0), 50);
        assert_eq!(count.value_at(10_000.0), 50);
        assert!(!count.is_done(2499.0));
        assert!(count.is_done(2500.0));
    }

    #[test]
    fn test_count_up_never_goes_backwards() {
        let count = CountUp::new(95);
        let values = (0..=2100).step_by(16).map(|ms| count.value_at(ms as f64));
        let mut previous = 0;
        for value in values {
            assert!(value >= previous);
            assert!(value <= 95);
            previous = value;
        }
        assert_eq!(previous, 95);
    }
}
