//! Cancellable scheduled tasks.
//!
//! Background tasks never touch game state. They only post [`GameEvent`]s
//! onto the channel drained by the event loop. Every task is owned through a
//! [`ScheduledTask`] handle which aborts it when cancelled or dropped.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::data::LoadOutcome;

/// Events delivered to the game from scheduled tasks.
#[derive(Debug)]
pub enum GameEvent {
    /// One second of countdown has passed.
    Tick { generation: u64 },
    /// The result display delay after an answer has elapsed.
    AutoAdvance { generation: u64 },
    /// A question load finished.
    QuestionsLoaded(LoadOutcome),
}

/// Handle to a running task. Aborts the task on drop.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns tasks that report back over the game event channel.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl Scheduler {
    /// Create a scheduler and the receiving end of its event channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Post `make_event()` every `period`, first after one full period.
    pub fn every<F>(&self, period: Duration, make_event: F) -> ScheduledTask
    where
        F: Fn() -> GameEvent + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(make_event()).is_err() {
                    break;
                }
            }
        });
        ScheduledTask { handle }
    }

    /// Post `event` once after `delay`.
    pub fn after(&self, delay: Duration, event: GameEvent) -> ScheduledTask {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(event);
        });
        ScheduledTask { handle }
    }

    /// Run `work` in the background and post whatever event it resolves to.
    pub fn run<F>(&self, work: F) -> ScheduledTask
    where
        F: Future<Output = GameEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let event = work.await;
            let _ = tx.send(event);
        });
        ScheduledTask { handle }
    }
}
