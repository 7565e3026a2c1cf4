//! Countdown timer for a game session.

use std::time::Duration;

use crate::scheduler::{GameEvent, ScheduledTask, Scheduler};

const TICK_PERIOD: Duration = Duration::from_secs(1);
const DANGER_THRESHOLD_SECS: u32 = 10;
const WARNING_THRESHOLD_SECS: u32 = 30;

/// How urgent the remaining time looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSeverity {
    Normal,
    Warning,
    Danger,
}

impl TimerSeverity {
    pub fn from_remaining(remaining_secs: u32) -> Self {
        if remaining_secs <= DANGER_THRESHOLD_SECS {
            Self::Danger
        } else if remaining_secs <= WARNING_THRESHOLD_SECS {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Result of feeding a tick into the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale or inactive tick; nothing changed.
    Ignored,
    /// One second was taken off.
    Ticked,
    /// Remaining time just reached zero. Reported once.
    Expired,
}

/// A one-second countdown driven by a scheduled ticker.
///
/// The ticker only runs while the countdown is active and has time left.
/// Each restart bumps the generation stamped on tick events, so ticks
/// queued by a cancelled ticker are ignored.
#[derive(Debug)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
    expired: bool,
    generation: u64,
    ticker: Option<ScheduledTask>,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration: duration_secs,
            remaining: duration_secs,
            active: false,
            expired: false,
            generation: 0,
            ticker: None,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn severity(&self) -> TimerSeverity {
        TimerSeverity::from_remaining(self.remaining)
    }

    /// Remaining time as `m:ss`.
    pub fn display(&self) -> String {
        crate::scoreboard::format_clock(self.remaining)
    }

    /// Start ticking from the current remaining time.
    pub fn activate(&mut self, scheduler: &Scheduler) {
        self.active = true;
        self.restart_ticker(scheduler);
    }

    /// Stop ticking, keeping the remaining time.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.stop_ticker();
    }

    /// Put the full duration back on the clock.
    pub fn reset(&mut self, scheduler: &Scheduler) {
        self.remaining = self.duration;
        self.expired = false;
        self.restart_ticker(scheduler);
    }

    pub fn set_duration(&mut self, duration_secs: u32, scheduler: &Scheduler) {
        self.duration = duration_secs;
        self.reset(scheduler);
    }

    /// Apply a tick event stamped with `generation`.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.active || generation != self.generation || self.remaining == 0 {
            return TickOutcome::Ignored;
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return TickOutcome::Ticked;
        }

        self.expired = true;
        self.deactivate();
        TickOutcome::Expired
    }

    fn restart_ticker(&mut self, scheduler: &Scheduler) {
        self.stop_ticker();
        if !self.active || self.remaining == 0 {
            return;
        }

        let generation = self.generation;
        self.ticker = Some(scheduler.every(TICK_PERIOD, move || GameEvent::Tick { generation }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::time;

    use super::*;

    fn drain(countdown: &mut Countdown, rx: &mut UnboundedReceiver<GameEvent>) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let GameEvent::Tick { generation } = event {
                outcomes.push(countdown.tick(generation));
            }
        }
        outcomes
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(TimerSeverity::from_remaining(60), TimerSeverity::Normal);
        assert_eq!(TimerSeverity::from_remaining(31), TimerSeverity::Normal);
        assert_eq!(TimerSeverity::from_remaining(30), TimerSeverity::Warning);
        assert_eq!(TimerSeverity::from_remaining(11), TimerSeverity::Warning);
        assert_eq!(TimerSeverity::from_remaining(10), TimerSeverity::Danger);
        assert_eq!(TimerSeverity::from_remaining(0), TimerSeverity::Danger);
    }

    #[test]
    fn test_inactive_countdown_ignores_ticks() {
        let mut countdown = Countdown::new(60);
        assert_eq!(countdown.tick(countdown.generation()), TickOutcome::Ignored);
        assert_eq!(countdown.remaining(), 60);
        assert_eq!(countdown.display(), "1:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_once_after_full_duration() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut countdown = Countdown::new(60);
        countdown.activate(&scheduler);

        let mut outcomes = Vec::new();
        time::sleep(Duration::from_millis(500)).await;
        for _ in 0..70 {
            time::sleep(Duration::from_secs(1)).await;
            outcomes.extend(drain(&mut countdown, &mut rx));
        }

        let expired = outcomes.iter().filter(|o| **o == TickOutcome::Expired).count();
        let ticked = outcomes.iter().filter(|o| **o == TickOutcome::Ticked).count();
        assert_eq!(expired, 1);
        assert_eq!(ticked, 59);
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_expired());
        assert!(!countdown.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_preserves_remaining_time() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut countdown = Countdown::new(60);
        countdown.activate(&scheduler);

        time::sleep(Duration::from_millis(5500)).await;
        drain(&mut countdown, &mut rx);
        assert_eq!(countdown.remaining(), 55);

        countdown.deactivate();
        time::sleep(Duration::from_secs(10)).await;
        drain(&mut countdown, &mut rx);
        assert_eq!(countdown.remaining(), 55);

        countdown.activate(&scheduler);
        time::sleep(Duration::from_millis(3500)).await;
        drain(&mut countdown, &mut rx);
        assert_eq!(countdown.remaining(), 52);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_duration_and_drops_stale_ticks() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut countdown = Countdown::new(20);
        countdown.activate(&scheduler);
        let stale = countdown.generation();

        time::sleep(Duration::from_millis(4500)).await;
        drain(&mut countdown, &mut rx);
        assert_eq!(countdown.remaining(), 16);

        countdown.reset(&scheduler);
        assert_eq!(countdown.remaining(), 20);
        assert!(countdown.is_active());
        assert_eq!(countdown.tick(stale), TickOutcome::Ignored);
        assert_eq!(countdown.remaining(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_duration_resets_clock() {
        let (scheduler, _rx) = Scheduler::new();
        let mut countdown = Countdown::new(60);
        countdown.set_duration(90, &scheduler);
        assert_eq!(countdown.duration(), 90);
        assert_eq!(countdown.remaining(), 90);
        assert_eq!(countdown.severity(), TimerSeverity::Normal);
    }
}
