use std::time::Duration;

/// Source of delayed, cancellable callbacks.
///
/// The returned task owns the scheduled callback: dropping it before the
/// delay elapses cancels the callback. Implementations run callbacks on the
/// same thread that scheduled them.
pub trait Scheduler {
    type Task;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Task;
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fires_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = fired.clone();
        let _task = scheduler.schedule(
            Duration::from_millis(300),
            Box::new(move || log.borrow_mut().push("reset")),
        );

        scheduler.advance(Duration::from_millis(299));
        assert!(fired.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*fired.borrow(), vec!["reset"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropping_task_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();
        let task = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || *flag.borrow_mut() = true),
        );
        assert_eq!(scheduler.pending(), 1);

        drop(task);
        scheduler.advance(Duration::from_secs(1));
        assert!(!*fired.borrow());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let late = fired.clone();
        let early = fired.clone();
        let _a = scheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || late.borrow_mut().push(20)),
        );
        let _b = scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || early.borrow_mut().push(5)),
        );

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*fired.borrow(), vec![5, 20]);
    }
}
