//! Full-screen menu state and the page scroll lock it holds while open.

/// Something that can stop and restore page scrolling.
pub trait ScrollLockTarget {
    fn lock(&self);
    fn unlock(&self);
}

/// Scroll lock held for as long as this guard lives.
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLock<T: ScrollLockTarget> {
    target: T,
}

impl<T: ScrollLockTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.lock();
        Self { target }
    }
}

impl<T: ScrollLockTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.unlock();
    }
}

/// `overflow` on `document.body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

impl BodyOverflow {
    fn set(value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = body {
                if let Err(err) = body.style().set_property("overflow", value) {
                    tracing::warn!(?err, value, "could not set body overflow");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    }
}

impl ScrollLockTarget for BodyOverflow {
    fn lock(&self) {
        Self::set("hidden");
    }

    fn unlock(&self) {
        Self::set("unset");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    /// Closed, with the close animation still playing.
    Closing,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Overlay animation class for this state.
    pub fn animation_class(self) -> &'static str {
        match self {
            MenuState::Closed => "",
            MenuState::Open => "open-anim",
            MenuState::Closing => "close-anim",
        }
    }
}

/// Menu state machine that owns the scroll lock.
///
/// The lock is acquired on entering [`MenuState::Open`] and released on
/// leaving it, on [`teardown`](Self::teardown), or when the controller is
/// dropped.
pub struct MenuController<T: ScrollLockTarget + Clone> {
    state: MenuState,
    target: T,
    lock: Option<ScrollLock<T>>,
}

impl<T: ScrollLockTarget + Clone> MenuController<T> {
    pub fn new(target: T) -> Self {
        Self {
            state: MenuState::Closed,
            target,
            lock: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn toggle(&mut self) -> MenuState {
        let next = match self.state {
            MenuState::Open => MenuState::Closing,
            MenuState::Closed | MenuState::Closing => MenuState::Open,
        };
        self.transition(next)
    }

    /// Close if open; otherwise nothing happens.
    pub fn close(&mut self) -> MenuState {
        if self.state.is_open() {
            self.transition(MenuState::Closing)
        } else {
            self.state
        }
    }

    /// The close animation ended.
    pub fn animation_finished(&mut self) -> MenuState {
        if self.state == MenuState::Closing {
            self.transition(MenuState::Closed)
        } else {
            self.state
        }
    }

    /// Owner is going away: drop straight to closed and unlock.
    pub fn teardown(&mut self) {
        self.transition(MenuState::Closed);
    }

    fn transition(&mut self, next: MenuState) -> MenuState {
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "menu transition");
            self.state = next;
        }
        if next.is_open() {
            if self.lock.is_none() {
                self.lock = Some(ScrollLock::acquire(self.target.clone()));
            }
        } else {
            self.lock = None;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody {
        locked: Rc<Cell<bool>>,
        locks: Rc<Cell<u32>>,
    }

    impl ScrollLockTarget for FakeBody {
        fn lock(&self) {
            self.locked.set(true);
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
        }
    }

    #[test]
    fn toggle_open_then_closed() {
        let body = FakeBody::default();
        let mut menu = MenuController::new(body.clone());
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!body.locked.get());

        assert_eq!(menu.toggle(), MenuState::Open);
        assert!(body.locked.get());

        assert_eq!(menu.toggle(), MenuState::Closing);
        assert!(!menu.state().is_open());
        assert!(!body.locked.get());

        assert_eq!(menu.animation_finished(), MenuState::Closed);
        assert!(!body.locked.get());
    }

    #[test]
    fn dropping_while_open_releases_lock() {
        let body = FakeBody::default();
        let mut menu = MenuController::new(body.clone());
        menu.toggle();
        assert!(body.locked.get());

        drop(menu);
        assert!(!body.locked.get());
    }

    #[test]
    fn teardown_while_open_releases_lock() {
        let body = FakeBody::default();
        let mut menu = MenuController::new(body.clone());
        menu.toggle();
        menu.teardown();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!body.locked.get());
        assert!(!menu.is_locked());
    }

    #[test]
    fn reopening_during_close_animation_relocks_once() {
        let body = FakeBody::default();
        let mut menu = MenuController::new(body.clone());
        menu.toggle();
        menu.toggle();
        assert_eq!(menu.toggle(), MenuState::Open);
        assert!(body.locked.get());
        assert_eq!(body.locks.get(), 2);

        // A stale animation end from the earlier close does nothing.
        assert_eq!(menu.animation_finished(), MenuState::Open);
        assert!(body.locked.get());
    }

    #[test]
    fn close_is_noop_unless_open() {
        let body = FakeBody::default();
        let mut menu = MenuController::new(body.clone());
        assert_eq!(menu.close(), MenuState::Closed);
        assert_eq!(body.locks.get(), 0);

        menu.toggle();
        assert_eq!(menu.close(), MenuState::Closing);
        assert_eq!(menu.close(), MenuState::Closing);
    }

    #[test]
    fn animation_class_depends_only_on_state() {
        assert_eq!(MenuState::Closed.animation_class(), "");
        assert_eq!(MenuState::Open.animation_class(), "open-anim");
        assert_eq!(MenuState::Closing.animation_class(), "close-anim");
    }
}
