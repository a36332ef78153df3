use tokio::sync::mpsc;
use tracing::debug;

use crate::loader::state::{LoadResult, Trigger};

/// Presentation-side callbacks for the load lifecycle.
///
/// Callbacks are made without the controller's lock held, so a listener
/// may query or trigger the controller from inside one. A newer run can
/// start between a run settling and its `loading_finished` being
/// delivered; compare `run` with [`LoadController::current_run`] to tell.
///
/// [`LoadController::current_run`]: crate::loader::LoadController::current_run
pub trait LoadListener {
    /// Run `run` was started; show a busy indicator.
    fn loading_started(&self, run: u64, trigger: &Trigger);

    /// Run `run` settled as the current run, or the pre-flight connectivity
    /// check failed while `run` was current.
    fn loading_finished(&self, run: u64, trigger: &Trigger, result: &LoadResult);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Started(u64, Trigger),
    Finished(u64, Trigger, LoadResult),
}

impl LoadEvent {
    pub fn run(&self) -> u64 {
        match self {
            LoadEvent::Started(run, _) | LoadEvent::Finished(run, _, _) => *run,
        }
    }

    /// A `Finished` whose run was overtaken before the event was handled.
    pub fn is_stale(&self, current_run: u64) -> bool {
        matches!(self, LoadEvent::Finished(run, _, _) if *run < current_run)
    }
}

/// Listener that forwards every callback as a [`LoadEvent`] over a channel.
#[derive(Clone)]
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<LoadEvent>,
}

impl ChannelListener {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: LoadEvent) {
        if self.tx.send(event).is_err() {
            debug!("Load event dropped; receiver is gone");
        }
    }
}

impl LoadListener for ChannelListener {
    fn loading_started(&self, run: u64, trigger: &Trigger) {
        self.send(LoadEvent::Started(run, trigger.clone()));
    }

    fn loading_finished(&self, run: u64, trigger: &Trigger, result: &LoadResult) {
        self.send(LoadEvent::Finished(run, trigger.clone(), result.clone()));
    }
}
