//! Countdown tick subscriptions.
//!
//! Each mounted countdown owns one tokio task that sends [`Action::Tick`]
//! once per period. The task lives exactly as long as its [`TimerGuard`].

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

use crate::state::{Action, TimerKey};

/// Owner of one tick task. Dropping the guard aborts the task.
#[derive(Debug)]
pub struct TimerGuard {
    handle: JoinHandle<()>,
}

impl TimerGuard {
    /// Start ticking `key` every `period`, first tick one period from now.
    pub fn spawn(key: TimerKey, period: Duration, tx: mpsc::UnboundedSender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(Action::Tick(key.clone())).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The live set of countdown timers.
#[derive(Debug)]
pub struct TimerSet {
    period: Duration,
    tx: mpsc::UnboundedSender<Action>,
    guards: HashMap<TimerKey, TimerGuard>,
}

impl TimerSet {
    pub fn new(period: Duration, tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            period,
            tx,
            guards: HashMap::new(),
        }
    }

    /// Release timers no longer required and acquire the missing ones.
    pub fn sync(&mut self, required: &HashSet<TimerKey>) {
        self.guards.retain(|key, _| {
            let keep = required.contains(key);
            if !keep {
                trace!(market_id = %key.market_id, "Releasing countdown timer");
            }
            keep
        });

        for key in required {
            if !self.guards.contains_key(key) {
                trace!(market_id = %key.market_id, "Acquiring countdown timer");
                let guard = TimerGuard::spawn(key.clone(), self.period, self.tx.clone());
                self.guards.insert(key.clone(), guard);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn contains(&self, key: &TimerKey) -> bool {
        self.guards.contains_key(key)
    }

    /// Drop every timer.
    pub fn clear(&mut self) {
        self.guards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerScope;
    use chrono::{TimeZone, Utc};

    fn key(id: &str, end_secs: i64) -> TimerKey {
        TimerKey {
            scope: TimerScope::Card,
            market_id: id.to_string(),
            end: Utc.timestamp_opt(end_secs, 0).unwrap(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_ticks_each_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _guard = TimerGuard::spawn(key("1", 100), Duration::from_secs(1), tx);

        tokio::time::advance(Duration::from_millis(1_001)).await;
        match rx.recv().await {
            Some(Action::Tick(k)) => assert_eq!(k, key("1", 100)),
            other => panic!("expected a tick, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dropped_guard_stops_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let guard = TimerGuard::spawn(key("1", 100), Duration::from_millis(5), tx);
        drop(guard);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_sync_acquires_and_releases() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timers = TimerSet::new(Duration::from_secs(1), tx);

        let required: HashSet<_> = [key("1", 100), key("2", 100)].into_iter().collect();
        timers.sync(&required);
        assert_eq!(timers.len(), 2);

        // A changed end time is a different timer.
        let required: HashSet<_> = [key("1", 200)].into_iter().collect();
        timers.sync(&required);
        assert_eq!(timers.len(), 1);
        assert!(timers.contains(&key("1", 200)));
        assert!(!timers.contains(&key("1", 100)));

        timers.sync(&HashSet::new());
        assert!(timers.is_empty());
    }

    #[tokio::test]
    async fn test_cleared_set_closes_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = TimerSet::new(Duration::from_millis(5), tx);
        timers.sync(&[key("1", 100)].into_iter().collect());

        drop(timers);
        while let Some(action) = rx.recv().await {
            assert!(matches!(action, Action::Tick(_)));
        }
    }
}
