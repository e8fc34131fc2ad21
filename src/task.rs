//! Cancellable simulated work tied to a page's lifetime
//!
//! Pages fake backend latency with timers. Every timer runs inside an
//! [`Abortable`] registered with the page's [`TaskScope`]; when the page is
//! torn down the scope aborts them, so a completion callback never touches a
//! disposed page.

use futures::future::{AbortHandle, Abortable, FutureExt};
use gloo_timers::future::sleep;
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TaskHandle {
    abort: AbortHandle,
    /// Set once the wrapped future has resolved, whether it completed or was aborted
    settled: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Acquire)
    }

    /// Neither cancelled nor finished
    pub fn is_pending(&self) -> bool {
        !self.is_cancelled() && !self.is_settled()
    }
}

/// Wrap `work` so it can be aborted. The returned future resolves to `true`
/// when `work` ran to completion and `false` when it was aborted first.
pub fn cancellable<F>(work: F) -> (TaskHandle, impl Future<Output = bool>)
where
    F: Future<Output = ()>,
{
    let (abort, registration) = AbortHandle::new_pair();
    let settled = Arc::new(AtomicBool::new(false));
    let flag = settled.clone();
    let fut = Abortable::new(work, registration).map(move |res| {
        flag.store(true, Ordering::Release);
        res.is_ok()
    });
    (TaskHandle { abort, settled }, fut)
}

/// Run `f` once `timer` resolves, unless cancelled first.
pub fn deferred<T, F>(timer: T, f: F) -> (TaskHandle, impl Future<Output = bool>)
where
    T: Future<Output = ()>,
    F: FnOnce(),
{
    cancellable(async move {
        timer.await;
        f();
    })
}

/// The set of pending tasks owned by one page.
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    handles: Arc<Mutex<Vec<TaskHandle>>>,
}

impl TaskScope {
    /// Create a scope that cancels its tasks when the current reactive owner
    /// is cleaned up. Call from a component body.
    pub fn new() -> Self {
        let scope = Self::default();
        let on_teardown = scope.clone();
        on_cleanup(move || on_teardown.cancel_all());
        scope
    }

    pub fn track(&self, handle: TaskHandle) {
        let mut handles = self.handles.lock();
        handles.retain(TaskHandle::is_pending);
        handles.push(handle);
    }

    /// Drop handles whose tasks have finished or were cancelled.
    pub fn prune(&self) {
        self.handles.lock().retain(TaskHandle::is_pending);
    }

    pub fn pending(&self) -> usize {
        self.handles.lock().iter().filter(|h| h.is_pending()).count()
    }

    pub fn cancel_all(&self) {
        for handle in self.handles.lock().drain(..) {
            handle.cancel();
        }
    }

    /// Run `f` once after `delay`.
    pub fn spawn_after<F>(&self, delay: Duration, f: F) -> TaskHandle
    where
        F: FnOnce() + 'static,
    {
        self.spawn_after_with(sleep(delay), f)
    }

    /// Run `f` once `timer` resolves.
    pub fn spawn_after_with<T, F>(&self, timer: T, f: F) -> TaskHandle
    where
        T: Future<Output = ()> + 'static,
        F: FnOnce() + 'static,
    {
        let (handle, fut) = deferred(timer, f);
        self.track(handle.clone());
        let scope = self.clone();
        spawn_local(async move {
            if !fut.await {
                tracing::debug!("Simulated task cancelled before completion");
            }
            scope.prune();
        });
        handle
    }

    /// Run `f` every `period` until cancelled.
    pub fn spawn_every<F>(&self, period: Duration, f: F) -> TaskHandle
    where
        F: Fn() + 'static,
    {
        let (handle, fut) = cancellable(async move {
            loop {
                sleep(period).await;
                f();
            }
        });
        self.track(handle.clone());
        spawn_local(async move {
            fut.await;
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ReportPhase;
    use crate::types::SymptomForm;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn symptom_form() -> SymptomForm {
        SymptomForm {
            age: "34".to_string(),
            symptoms: "Headache".to_string(),
            medical_history: "None".to_string(),
            travel_history: "none".to_string(),
            allergies: "None".to_string(),
        }
    }

    /// A timer the test fires by hand
    fn manual_timer() -> (oneshot::Sender<()>, impl Future<Output = ()>) {
        let (tx, rx) = oneshot::channel::<()>();
        (tx, rx.map(|_| ()))
    }

    #[test]
    fn test_completed_task_runs_callback() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let (handle, fut) = cancellable(async move { flag.set(true) });

        assert!(block_on(fut));
        assert!(ran.get());
        assert!(!handle.is_cancelled());
        assert!(handle.is_settled());
    }

    #[test]
    fn test_cancelled_task_never_runs_callback() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let (handle, fut) = cancellable(async move { flag.set(true) });

        handle.cancel();

        assert!(!block_on(fut));
        assert!(!ran.get());
    }

    #[test]
    fn test_scope_cancels_everything_it_tracks() {
        let scope = TaskScope::default();
        let (first, first_fut) = cancellable(async {});
        let (second, second_fut) = cancellable(async {});
        scope.track(first.clone());
        scope.track(second.clone());
        assert_eq!(scope.pending(), 2);

        scope.cancel_all();

        assert!(first.is_cancelled() && second.is_cancelled());
        assert_eq!(scope.pending(), 0);
        assert!(!block_on(first_fut));
        assert!(!block_on(second_fut));
    }

    #[test]
    fn test_track_prunes_cancelled_handles() {
        let scope = TaskScope::default();
        let (old, _) = cancellable(async {});
        scope.track(old.clone());
        old.cancel();

        let (fresh, _) = cancellable(async {});
        scope.track(fresh);

        assert_eq!(scope.handles.lock().len(), 1);
    }

    #[test]
    fn test_finished_tasks_are_not_pending() {
        let scope = TaskScope::default();
        for _ in 0..100 {
            let (handle, fut) = cancellable(async {});
            scope.track(handle);
            assert!(block_on(fut));
        }

        assert_eq!(scope.pending(), 0);
        assert!(scope.handles.lock().len() <= 1);

        scope.prune();
        assert!(scope.handles.lock().is_empty());
    }

    #[test]
    fn test_report_ready_only_after_timer_fires() {
        let phase = Rc::new(RefCell::new(ReportPhase::default()));
        phase.borrow_mut().submit(&symptom_form()).expect("should submit");
        assert_eq!(*phase.borrow(), ReportPhase::Loading);

        let (fire, timer) = manual_timer();
        let target = phase.clone();
        let (handle, fut) = deferred(timer, move || {
            target.borrow_mut().finish();
        });
        let mut fut = Box::pin(fut);

        // Timer not fired yet: still loading.
        assert!(fut.as_mut().now_or_never().is_none());
        assert_eq!(*phase.borrow(), ReportPhase::Loading);
        assert!(handle.is_pending());

        fire.send(()).expect("timer should be waiting");
        assert!(block_on(fut));
        assert_eq!(*phase.borrow(), ReportPhase::Ready);
        assert!(!handle.is_pending());
    }

    #[test]
    fn test_edit_before_timer_keeps_report_from_finishing() {
        let phase = Rc::new(RefCell::new(ReportPhase::default()));
        phase.borrow_mut().submit(&symptom_form()).expect("should submit");

        let (fire, timer) = manual_timer();
        let target = phase.clone();
        let (handle, fut) = deferred(timer, move || {
            target.borrow_mut().finish();
        });
        let mut fut = Box::pin(fut);
        assert!(fut.as_mut().now_or_never().is_none());

        handle.cancel();
        phase.borrow_mut().edit();
        let _ = fire.send(());

        assert!(!block_on(fut));
        assert_eq!(*phase.borrow(), ReportPhase::Collecting);
    }
}
