//! Looping carousel controller.
//!
//! [`CarouselController`] is the only component that mutates a
//! [`CarouselState`]. It owns its [`AutoplayScheduler`] and
//! [`GestureInterpreter`], and reports every index change to a single
//! observer. Everything runs on the caller's thread; time only moves when
//! the driver calls [`CarouselController::advance_time`].

use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    config::CarouselConfig,
    gesture::GestureInterpreter,
    state::{CarouselState, Direction},
    timeline::AutoplayScheduler,
    Result, ShowcaseError,
};

/// Notification emitted after every successful index mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub index: usize,
    pub direction: Direction,
}

/// Receiver of [`IndexChange`] notifications.
pub trait IndexObserver {
    fn index_changed(&mut self, change: IndexChange);
}

impl<F> IndexObserver for F
where
    F: FnMut(IndexChange),
{
    fn index_changed(&mut self, change: IndexChange) {
        self(change)
    }
}

/// Coarse playback mode. Navigation is accepted in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Autoplaying,
    Paused,
}

pub struct CarouselController<T> {
    items: Vec<T>,
    state: CarouselState,
    scheduler: AutoplayScheduler,
    gestures: GestureInterpreter,
    observer: Option<Box<dyn IndexObserver>>,
    reset_on_navigate: bool,
    torn_down: bool,
}

impl<T> CarouselController<T> {
    /// Builds a controller with the default five second interval and swipe
    /// threshold.
    pub fn new(items: Vec<T>) -> Result<Self> {
        Self::with_config(items, &CarouselConfig::default())
    }

    pub fn with_config(items: Vec<T>, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;
        let mut state = CarouselState::new(items.len())?;
        let gestures = GestureInterpreter::new(config.swipe_threshold)?;

        let mut scheduler = AutoplayScheduler::new();
        scheduler.start(config.autoplay_interval())?;
        if !config.autoplay {
            scheduler.pause();
            state.set_playing(false);
        }

        debug!(
            items = items.len(),
            interval_ms = config.autoplay_interval_ms,
            autoplay = config.autoplay,
            "carousel created"
        );

        Ok(Self {
            items,
            state,
            scheduler,
            gestures,
            observer: None,
            reset_on_navigate: config.reset_autoplay_on_navigate,
            torn_down: false,
        })
    }

    /// Installs the index-changed observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl IndexObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty collections. Present to
    /// pair with `len` for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn current(&self) -> &T {
        &self.items[self.state.index()]
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn mode(&self) -> PlaybackMode {
        if self.state.is_playing() {
            PlaybackMode::Autoplaying
        } else {
            PlaybackMode::Paused
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Forward);
    }

    pub fn previous(&mut self) {
        self.navigate(Direction::Backward);
    }

    /// Jumps straight to item `k`, as an indicator dot would.
    pub fn go_to(&mut self, k: usize) -> Result<()> {
        if k >= self.len() {
            warn!(index = k, len = self.len(), "rejected carousel jump");
            return Err(ShowcaseError::IndexOutOfRange {
                index: k,
                len: self.len(),
            });
        }

        let direction = if k > self.state.index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if !self.torn_down {
            self.apply(k, direction);
            self.after_manual_navigation();
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.torn_down || !self.state.is_playing() {
            return;
        }
        self.scheduler.pause();
        self.state.set_playing(false);
    }

    pub fn resume(&mut self) {
        if self.torn_down || self.state.is_playing() {
            return;
        }
        self.scheduler.resume();
        self.state.set_playing(true);
    }

    /// Interprets a drag release. Returns the direction taken, if any.
    pub fn on_gesture(&mut self, offset: f64, velocity: f64) -> Option<Direction> {
        if self.torn_down {
            return None;
        }
        let direction = self.gestures.interpret(offset, velocity)?;
        debug!(offset, velocity, ?direction, "swipe committed");
        self.navigate(direction);
        Some(direction)
    }

    /// Feeds elapsed time to the autoplay timer and performs one forward
    /// step per completed interval. Returns the number of steps taken.
    pub fn advance_time(&mut self, delta: Duration) -> u32 {
        if self.torn_down {
            return 0;
        }

        let fires = self.scheduler.advance(delta);
        for _ in 0..fires {
            self.step(Direction::Forward);
        }
        fires
    }

    /// Cancels autoplay permanently and drops the observer. Afterwards every
    /// command is a no-op and no notification is delivered.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.scheduler.stop();
        self.state.set_playing(false);
        self.observer = None;
        self.torn_down = true;
        debug!("carousel torn down");
    }

    fn navigate(&mut self, direction: Direction) {
        if self.torn_down {
            return;
        }
        self.step(direction);
        self.after_manual_navigation();
    }

    fn step(&mut self, direction: Direction) {
        let index = self.state.advance(direction.delta());
        self.apply(index, direction);
    }

    fn apply(&mut self, index: usize, direction: Direction) {
        self.state.set(index, direction);
        debug!(index, ?direction, "carousel index changed");

        if let Some(observer) = self.observer.as_mut() {
            observer.index_changed(IndexChange { index, direction });
        }
    }

    fn after_manual_navigation(&mut self) {
        if self.reset_on_navigate && self.state.is_playing() {
            self.scheduler.restart_interval();
        }
    }
}

impl<T> Drop for CarouselController<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T> std::fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("len", &self.items.len())
            .field("state", &self.state)
            .field("scheduler", &self.scheduler)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::timeline::MAX_FIRES_PER_ADVANCE;

    type Log = Rc<RefCell<Vec<IndexChange>>>;

    fn observed(len: usize, config: &CarouselConfig) -> (CarouselController<usize>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut carousel = CarouselController::with_config((0..len).collect(), config).unwrap();
        let sink = log.clone();
        carousel.set_observer(move |change: IndexChange| sink.borrow_mut().push(change));
        (carousel, log)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn empty_collection_is_invalid() {
        let err = CarouselController::<u8>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidConfiguration(_)));
    }

    #[test]
    fn zero_interval_is_invalid() {
        let config = CarouselConfig {
            autoplay_interval_ms: 0,
            ..Default::default()
        };
        let err = CarouselController::with_config(vec![1, 2], &config).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidConfiguration(_)));
    }

    #[test]
    fn walks_and_wraps_three_items() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        assert_eq!(carousel.index(), 0);

        carousel.next();
        assert_eq!(carousel.index(), 1);
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);

        let indices: Vec<_> = log.borrow().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 0, 2]);
    }

    #[test]
    fn index_stays_in_range_for_mixed_navigation() {
        for len in 1..=5 {
            let (mut carousel, _log) = observed(len, &CarouselConfig::default());
            let mut seed = 17_u32;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if seed & 0x100 == 0 {
                    carousel.next();
                } else {
                    carousel.previous();
                }
                assert!(carousel.index() < len);
            }
        }
    }

    #[test]
    fn go_to_sets_index_and_direction() {
        let (mut carousel, log) = observed(5, &CarouselConfig::default());

        carousel.go_to(3).unwrap();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.direction(), Direction::Forward);

        carousel.go_to(1).unwrap();
        assert_eq!(carousel.direction(), Direction::Backward);

        carousel.go_to(1).unwrap();
        assert_eq!(carousel.direction(), Direction::Backward);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn go_to_out_of_range_fails_without_notifying() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        carousel.next();

        let err = carousel.go_to(3).unwrap_err();
        assert!(matches!(
            err,
            ShowcaseError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(carousel.index(), 1);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());

        assert_eq!(carousel.advance_time(ms(4_999)), 0);
        assert_eq!(carousel.advance_time(ms(1)), 1);
        assert_eq!(carousel.advance_time(ms(10_000)), 2);
        assert_eq!(carousel.index(), 0);

        let changes = log.borrow();
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|c| c.direction == Direction::Forward));
    }

    #[test]
    fn paused_carousel_ignores_time() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        carousel.pause();
        assert_eq!(carousel.mode(), PlaybackMode::Paused);
        assert!(!carousel.state().is_playing());

        assert_eq!(carousel.advance_time(ms(15_000)), 0);
        assert!(log.borrow().is_empty());

        carousel.resume();
        assert_eq!(carousel.mode(), PlaybackMode::Autoplaying);
        assert_eq!(carousel.advance_time(ms(5_000)), 1);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn autoplay_disabled_in_config_starts_paused() {
        let config = CarouselConfig {
            autoplay: false,
            ..Default::default()
        };
        let (mut carousel, log) = observed(2, &config);
        assert_eq!(carousel.mode(), PlaybackMode::Paused);
        carousel.advance_time(ms(20_000));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn manual_navigation_keeps_playback_mode() {
        let (mut carousel, _log) = observed(4, &CarouselConfig::default());
        carousel.next();
        carousel.go_to(3).unwrap();
        assert_eq!(carousel.mode(), PlaybackMode::Autoplaying);

        carousel.pause();
        carousel.previous();
        carousel.on_gesture(-200.0, -200.0);
        assert_eq!(carousel.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn manual_navigation_shares_the_autoplay_timer_by_default() {
        let (mut carousel, log) = observed(5, &CarouselConfig::default());
        carousel.advance_time(ms(4_900));
        carousel.next();
        assert_eq!(carousel.advance_time(ms(100)), 1);
        assert_eq!(carousel.index(), 2);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn manual_navigation_can_restart_the_timer() {
        let config = CarouselConfig {
            reset_autoplay_on_navigate: true,
            ..Default::default()
        };
        let (mut carousel, _log) = observed(5, &config);
        carousel.advance_time(ms(4_900));
        carousel.next();
        assert_eq!(carousel.advance_time(ms(100)), 0);
        assert_eq!(carousel.advance_time(ms(4_900)), 1);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn gestures_navigate_like_buttons() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());

        assert_eq!(
            carousel.on_gesture(-50.0, -300.0),
            Some(Direction::Forward)
        );
        assert_eq!(carousel.index(), 1);

        assert_eq!(carousel.on_gesture(5.0, 10.0), None);
        assert_eq!(carousel.index(), 1);

        assert_eq!(
            carousel.on_gesture(80.0, 400.0),
            Some(Direction::Backward)
        );
        assert_eq!(carousel.index(), 0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn non_finite_swipe_leaves_the_index_alone() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        assert_eq!(carousel.on_gesture(50.0, f64::INFINITY), None);
        assert_eq!(carousel.on_gesture(f64::NEG_INFINITY, -1.0), None);
        assert_eq!(carousel.index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn huge_elapsed_time_is_capped_not_fatal() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        assert_eq!(carousel.advance_time(ms(2_500)), 0);

        let fires = carousel.advance_time(Duration::MAX);
        assert_eq!(fires, MAX_FIRES_PER_ADVANCE);
        assert_eq!(log.borrow().len(), MAX_FIRES_PER_ADVANCE as usize);
        assert_eq!(carousel.index(), MAX_FIRES_PER_ADVANCE as usize % 3);
    }

    #[test]
    fn teardown_silences_everything() {
        let (mut carousel, log) = observed(3, &CarouselConfig::default());
        carousel.advance_time(ms(2_500));
        carousel.teardown();

        assert_eq!(carousel.advance_time(ms(15_000)), 0);
        carousel.resume();
        carousel.next();
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.on_gesture(-500.0, -500.0), None);
        assert!(carousel.is_torn_down());
        assert_eq!(carousel.index(), 0);
        assert_eq!(log.borrow().len(), 0);
    }

    #[test]
    fn one_notification_per_mutation() {
        let (mut carousel, log) = observed(2, &CarouselConfig::default());
        carousel.next();
        carousel.next();
        carousel.advance_time(ms(5_000));
        carousel.pause();
        carousel.resume();
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn current_tracks_the_index() {
        let mut carousel = CarouselController::new(vec!["a", "b", "c"]).unwrap();
        carousel.previous();
        assert_eq!(*carousel.current(), "c");
    }
}
