//! Per-item dispatch: ordering, formatting and live refresh
//!
//! A [`SourceSlot`] sits between one data source and the output sink. It
//! formats each accepted snapshot exactly once, refuses snapshots older
//! than the last accepted one, and owns the repeat timer of items that ask
//! for periodic re-rendering.

use barline_types::Snapshot;
use chrono::{DateTime, Utc};
use log::{debug, trace, warn};
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};

use crate::error::FormatResult;
use crate::formatter::{BoxedFormatter, FormatContext, ItemFormatter};
use crate::repeat::RepeatTask;
use crate::sink::OutputSink;

/// Source of "now" for formatting
pub type Clock = fn() -> DateTime<Utc>;

/// Outcome of delivering a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Formatted and published
    Published,
    /// Older than the last accepted snapshot; ignored
    Stale,
}

/// Dispatch state of one bar item
pub struct SourceSlot {
    item: usize,
    formatter: Arc<dyn ItemFormatter>,
    sink: Arc<dyn OutputSink>,
    clock: Clock,
    last_at: Option<DateTime<Utc>>,
    /// Bumped on every accepted snapshot; repeat ticks from an older
    /// generation publish nothing
    generation: Arc<Mutex<u64>>,
    repeat: Option<RepeatTask>,
}

impl SourceSlot {
    pub fn new(item: usize, formatter: BoxedFormatter, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            item,
            formatter: Arc::from(formatter),
            sink,
            clock: Utc::now,
            last_at: None,
            generation: Arc::new(Mutex::new(0)),
            repeat: None,
        }
    }

    /// Use a different clock for formatting (tests, replays)
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn item(&self) -> usize {
        self.item
    }

    pub fn formatter(&self) -> &dyn ItemFormatter {
        self.formatter.as_ref()
    }

    /// Whether a repeat timer is currently running
    pub fn is_repeating(&self) -> bool {
        self.repeat.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Deliver a snapshot taken at `at`.
    ///
    /// Must be called from within a tokio runtime when the formatter may
    /// request a refresh interval. A formatting error removes the item from
    /// the bar and is returned to the caller.
    pub fn deliver(&mut self, at: DateTime<Utc>, snapshot: Snapshot) -> FormatResult<Delivery> {
        if let Some(last) = self.last_at {
            if at < last {
                debug!(
                    "Dropping stale {} snapshot for item {} ({} < {})",
                    snapshot.kind(),
                    self.item,
                    at,
                    last
                );
                return Ok(Delivery::Stale);
            }
        }
        self.last_at = Some(at);
        self.stop_repeat();

        let generation = {
            let mut guard = self.generation.lock().unwrap_or_else(|e| e.into_inner());
            *guard += 1;
            *guard
        };

        let ctx = FormatContext::at((self.clock)());
        let output = match self.formatter.format(&snapshot, &ctx) {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to format item {} ({}): {}", self.item, self.formatter.id(), e);
                self.sink.publish(self.item, None);
                return Err(e);
            }
        };
        let present = output.is_some();
        self.sink.publish(self.item, output);

        if present {
            if let Some(every) = self.formatter.refresh_interval(&snapshot) {
                debug!("Item {} refreshing every {:?}", self.item, every);
                self.repeat = Some(self.spawn_repeat(every, generation, snapshot));
            }
        }
        Ok(Delivery::Published)
    }

    fn spawn_repeat(&self, every: std::time::Duration, generation: u64, snapshot: Snapshot) -> RepeatTask {
        let item = self.item;
        let formatter = self.formatter.clone();
        let sink = self.sink.clone();
        let current = self.generation.clone();
        let clock = self.clock;
        RepeatTask::spawn(every, move |_| {
            let guard = current.lock().unwrap_or_else(|e| e.into_inner());
            if *guard != generation {
                return ControlFlow::Break(());
            }
            let ctx = FormatContext::at(clock());
            match formatter.format(&snapshot, &ctx) {
                Ok(output) => sink.publish(item, output),
                Err(e) => {
                    warn!("Failed to refresh item {} ({}): {}", item, formatter.id(), e);
                    sink.publish(item, None);
                    return ControlFlow::Break(());
                }
            }
            if formatter.refresh_interval(&snapshot).is_some() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
    }

    /// Cancel the repeat timer, if any
    pub fn stop_repeat(&mut self) {
        if let Some(task) = self.repeat.take() {
            trace!("Cancelling refresh of item {}", self.item);
            task.cancel();
        }
    }
}

impl Drop for SourceSlot {
    fn drop(&mut self) {
        self.stop_repeat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::formatter::kind_mismatch;
    use crate::sink::{ChannelSink, ItemUpdate};
    use barline_types::{CommandOutput, SourceKind, StyledOutput};
    use chrono::TimeZone;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Echoes shell output; "live" output asks for a refresh, empty output
    /// is absent, "boom" is malformed
    struct Echo;

    impl ItemFormatter for Echo {
        fn id(&self) -> &str {
            "echo"
        }

        fn kind(&self) -> SourceKind {
            SourceKind::Shell
        }

        fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
            match snapshot {
                Snapshot::Shell(out) if out.stdout == "boom" => {
                    Err(FormatError::malformed(SourceKind::Shell, "boom"))
                }
                Snapshot::Shell(out) if out.stdout.is_empty() => Ok(None),
                Snapshot::Shell(out) => Ok(Some(StyledOutput::text(out.stdout.clone()))),
                other => Err(kind_mismatch(self.kind(), other)),
            }
        }

        fn refresh_interval(&self, snapshot: &Snapshot) -> Option<Duration> {
            match snapshot {
                Snapshot::Shell(out) if out.stdout == "live" => Some(Duration::from_secs(1)),
                _ => None,
            }
        }
    }

    fn shell(text: &str) -> Snapshot {
        Snapshot::Shell(CommandOutput {
            stdout: text.to_string(),
        })
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap() + chrono::Duration::seconds(secs as i64)
    }

    fn slot() -> (SourceSlot, UnboundedReceiver<ItemUpdate>) {
        let (sink, rx) = ChannelSink::new();
        (SourceSlot::new(3, Box::new(Echo), Arc::new(sink)), rx)
    }

    fn drain(rx: &mut UnboundedReceiver<ItemUpdate>) -> Vec<ItemUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    #[tokio::test]
    async fn test_publishes_formatted_output() {
        let (mut slot, mut rx) = slot();
        assert_eq!(slot.deliver(at(0), shell("hello")).unwrap(), Delivery::Published);
        let updates = drain(&mut rx);
        assert_eq!(
            updates,
            vec![ItemUpdate {
                item: 3,
                output: Some(StyledOutput::text("hello"))
            }]
        );
    }

    #[tokio::test]
    async fn test_stale_snapshot_dropped() {
        let (mut slot, mut rx) = slot();
        slot.deliver(at(10), shell("new")).unwrap();
        assert_eq!(slot.deliver(at(5), shell("old")).unwrap(), Delivery::Stale);
        // Same timestamp is not stale
        assert_eq!(slot.deliver(at(10), shell("again")).unwrap(), Delivery::Published);
        let texts: Vec<String> = drain(&mut rx)
            .into_iter()
            .filter_map(|u| u.output.map(|o| o.plain_text()))
            .collect();
        assert_eq!(texts, vec!["new", "again"]);
    }

    #[tokio::test]
    async fn test_absent_output_published_as_none() {
        let (mut slot, mut rx) = slot();
        slot.deliver(at(0), shell("")).unwrap();
        assert_eq!(drain(&mut rx), vec![ItemUpdate { item: 3, output: None }]);
    }

    #[tokio::test]
    async fn test_format_error_removes_item() {
        let (mut slot, mut rx) = slot();
        let err = slot.deliver(at(0), shell("boom")).unwrap_err();
        assert!(matches!(err, FormatError::MalformedSnapshot { .. }));
        assert_eq!(drain(&mut rx), vec![ItemUpdate { item: 3, output: None }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_runs_until_next_snapshot() {
        let (mut slot, mut rx) = slot();
        slot.deliver(at(0), shell("live")).unwrap();
        assert!(slot.is_repeating());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        // initial publish plus two refreshes
        assert_eq!(drain(&mut rx).len(), 3);

        slot.deliver(at(3), shell("still")).unwrap();
        assert!(!slot.is_repeating());
        tokio::time::sleep(Duration::from_secs(5)).await;
        let updates = drain(&mut rx);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output.as_ref().map(|o| o.plain_text()), Some("still".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_refresh() {
        let (mut slot, mut rx) = slot();
        slot.deliver(at(0), shell("live")).unwrap();
        drop(slot);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(drain(&mut rx).len(), 1);
    }
}
