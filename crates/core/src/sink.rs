//! Output sink: where formatted items go

use barline_types::StyledOutput;
use log::trace;
use tokio::sync::mpsc;

/// New output for one bar item. `output: None` removes the item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub item: usize,
    pub output: Option<StyledOutput>,
}

/// Receiver of formatted item output (the renderer side).
///
/// `publish` is called from the dispatch path and from repeat timers, so it
/// must not block.
pub trait OutputSink: Send + Sync {
    fn publish(&self, item: usize, output: Option<StyledOutput>);
}

/// Sink forwarding updates over an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ItemUpdate>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ItemUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl OutputSink for ChannelSink {
    fn publish(&self, item: usize, output: Option<StyledOutput>) {
        if self.tx.send(ItemUpdate { item, output }).is_err() {
            trace!("Dropping update for item {}: receiver closed", item);
        }
    }
}
