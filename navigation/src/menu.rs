use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::scheduler::Scheduler;

/// Default time the toggle icon stays rotated after the menu closes.
/// Matches the slide-out exit animation.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Menu visibility plus the state of the toggle icon that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub is_open: bool,
    pub is_rotated: bool,
}

impl MenuState {
    pub fn glyph(&self) -> &'static str {
        if self.is_rotated {
            "×"
        } else {
            "☰"
        }
    }

    /// Translation key for the toggle button's accessible label.
    pub fn toggle_label_key(&self) -> &'static str {
        if self.is_open {
            "nav.close_menu"
        } else {
            "nav.open_menu"
        }
    }
}

/// Slide-out menu controller.
///
/// Opening rotates the icon immediately. Closing through [`toggle`] keeps the
/// icon rotated for the settle delay so it does not snap back before the menu
/// has finished its exit animation; closing through [`close`] resets both at
/// once.
///
/// [`toggle`]: MenuController::toggle
/// [`close`]: MenuController::close
pub struct MenuController<S: Scheduler> {
    state: Rc<Cell<MenuState>>,
    generation: Rc<Cell<u64>>,
    pending_reset: RefCell<Option<S::Task>>,
    scheduler: S,
    settle_delay: Duration,
    on_change: Rc<dyn Fn(MenuState)>,
}

impl<S: Scheduler> MenuController<S> {
    pub fn new(
        scheduler: S,
        settle_delay: Duration,
        on_change: impl Fn(MenuState) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(Cell::new(MenuState::default())),
            generation: Rc::new(Cell::new(0)),
            pending_reset: RefCell::new(None),
            scheduler,
            settle_delay,
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open
    }

    pub fn is_rotated(&self) -> bool {
        self.state.get().is_rotated
    }

    /// Flip the menu open or closed.
    pub fn toggle(&self) -> MenuState {
        let generation = self.supersede();

        let next = if self.is_open() {
            self.schedule_icon_reset(generation);
            MenuState {
                is_open: false,
                is_rotated: true,
            }
        } else {
            MenuState {
                is_open: true,
                is_rotated: true,
            }
        };

        log::debug!("menu toggled, open={}", next.is_open);
        self.apply(next);
        next
    }

    /// Close the menu and reset the icon in one step. Idempotent.
    pub fn close(&self) -> MenuState {
        self.supersede();
        let next = MenuState::default();
        if self.state.get() != next {
            log::debug!("menu closed");
            self.apply(next);
        }
        next
    }

    /// Drop any pending reset and invalidate resets that are already queued.
    fn supersede(&self) -> u64 {
        self.pending_reset.borrow_mut().take();
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        generation
    }

    fn schedule_icon_reset(&self, generation: u64) {
        let state = Rc::downgrade(&self.state);
        let current = Rc::downgrade(&self.generation);
        let on_change = Rc::downgrade(&self.on_change);

        let task = self.scheduler.schedule(
            self.settle_delay,
            Box::new(move || {
                let (Some(state), Some(current), Some(on_change)) =
                    (state.upgrade(), current.upgrade(), on_change.upgrade())
                else {
                    log::trace!("icon reset fired after the menu was dropped");
                    return;
                };
                if current.get() != generation {
                    return;
                }
                let settled = state.get();
                if settled.is_open || !settled.is_rotated {
                    return;
                }
                let next = MenuState {
                    is_open: false,
                    is_rotated: false,
                };
                state.set(next);
                on_change(next);
            }),
        );

        *self.pending_reset.borrow_mut() = Some(task);
    }

    fn apply(&self, next: MenuState) {
        self.state.set(next);
        (self.on_change)(next);
    }
}

impl<S: Scheduler> Drop for MenuController<S> {
    fn drop(&mut self) {
        if self.pending_reset.get_mut().take().is_some() {
            log::trace!("pending icon reset cancelled on teardown");
        }
    }
}
