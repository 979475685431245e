//! The bar: one slot per configured item plus the latest output of each

use anyhow::{anyhow, Result};
use barline_core::{ChannelSink, Delivery, FormatterRegistry, ItemUpdate, OutputSink, SourceSlot};
use barline_render::{join_bar, render, IconSet, MarkupMode};
use barline_types::{Snapshot, StyledOutput};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::BarConfig;

/// A snapshot addressed to one bar item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEvent {
    /// Index into the configured items
    pub item: usize,
    /// When the snapshot was taken
    pub at: DateTime<Utc>,
    pub snapshot: Snapshot,
}

/// Dispatch slots and current output for every item of a bar
pub struct Bar {
    /// `None` where the item's formatter could not be built
    slots: Vec<Option<SourceSlot>>,
    outputs: Vec<Option<StyledOutput>>,
    icons: IconSet,
    markup: MarkupMode,
    separator: String,
}

impl Bar {
    /// Build the bar for `config`. Updates published by the slots arrive on
    /// the returned receiver and are folded in with [`Bar::apply`].
    ///
    /// Items whose formatter can not be created are logged and left empty.
    pub fn new(config: &BarConfig, registry: &FormatterRegistry) -> (Self, UnboundedReceiver<ItemUpdate>) {
        let (sink, updates) = ChannelSink::new();
        let sink: Arc<dyn OutputSink> = Arc::new(sink);
        let scheme = Arc::new(config.colors.clone());

        let slots: Vec<Option<SourceSlot>> = config
            .items
            .iter()
            .enumerate()
            .map(|(index, spec)| match registry.create(spec, Arc::clone(&scheme)) {
                Ok(formatter) => {
                    debug!("Item {}: {} ({})", index, formatter.id(), spec.describe());
                    Some(SourceSlot::new(index, formatter, Arc::clone(&sink)))
                }
                Err(e) => {
                    warn!("Item {} disabled: {}", index, e);
                    None
                }
            })
            .collect();

        info!(
            "Bar ready with {} of {} items",
            slots.iter().filter(|s| s.is_some()).count(),
            slots.len()
        );

        let outputs = vec![None; slots.len()];
        let bar = Self {
            slots,
            outputs,
            icons: config.icons.clone().merged_with_defaults(),
            markup: config.markup,
            separator: config.separator.clone(),
        };
        (bar, updates)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Route a snapshot to its item's slot.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, event: SnapshotEvent) -> Result<Delivery> {
        let slot = self
            .slots
            .get_mut(event.item)
            .ok_or_else(|| anyhow!("No item at index {}", event.item))?
            .as_mut()
            .ok_or_else(|| anyhow!("Item {} is disabled", event.item))?;
        let delivery = slot.deliver(event.at, event.snapshot)?;
        Ok(delivery)
    }

    /// Record new output for an item. Returns whether the bar changed.
    pub fn apply(&mut self, update: ItemUpdate) -> bool {
        match self.outputs.get_mut(update.item) {
            Some(current) if *current != update.output => {
                *current = update.output;
                true
            }
            Some(_) => false,
            None => {
                warn!("Update for unknown item {}", update.item);
                false
            }
        }
    }

    /// Apply every update already waiting on `updates`
    pub fn apply_pending(&mut self, updates: &mut UnboundedReceiver<ItemUpdate>) -> bool {
        let mut changed = false;
        while let Ok(update) = updates.try_recv() {
            changed |= self.apply(update);
        }
        changed
    }

    pub fn output(&self, item: usize) -> Option<&StyledOutput> {
        self.outputs.get(item).and_then(Option::as_ref)
    }

    /// Current bar line; absent items are left out
    pub fn render_line(&self) -> String {
        let rendered = self
            .outputs
            .iter()
            .flatten()
            .map(|output| render(output, &self.icons, self.markup));
        join_bar(rendered, &self.separator)
    }
}
