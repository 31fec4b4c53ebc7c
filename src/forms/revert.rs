use gloo_timers::callback::Timeout;

use crate::forms::panel::{PanelView, SuccessBehavior};

/// Runs a callback once after a delay. Dropping the handle cancels it.
pub trait RevertScheduler {
    type Handle;

    fn schedule(&self, after_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl RevertScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, after_ms: u32, fire: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(after_ms, fire)
    }
}

/// Arms the success-view revert when the panel is showing Success and its
/// behavior reverts. `on_expire` receives the view to switch to.
pub fn schedule_revert<S, F>(
    shown: PanelView,
    behavior: SuccessBehavior,
    scheduler: &S,
    on_expire: F,
) -> Option<S::Handle>
where
    S: RevertScheduler,
    F: FnOnce(PanelView) + 'static,
{
    match (shown, behavior.revert_delay()) {
        (PanelView::Success, Some(after_ms)) => Some(scheduler.schedule(
            after_ms,
            Box::new(move || on_expire(PanelView::Success.expire())),
        )),
        _ => None,
    }
}
