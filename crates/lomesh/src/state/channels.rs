// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-capacity channel table.
//!
//! Array-like collection of [`MAX_NUM_CHANNELS`] entries indexed by position.
//! Index 0 is the primary channel. Callers validate indices before touching
//! the table; the table re-checks on writes and rejects out-of-range entries
//! without mutating anything.

use crate::config::{MAX_NUM_CHANNELS, PRIMARY_CHANNEL_INDEX};
use crate::proto::{Channel, ChannelRole};
use crate::{Error, Result};

/// The node's channel table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTable {
    slots: Vec<Channel>,
}

impl ChannelTable {
    /// Table with the primary channel enabled at index 0 and every other slot
    /// disabled.
    #[must_use]
    pub fn new() -> Self {
        let slots = (0..MAX_NUM_CHANNELS)
            .map(|i| Channel {
                index: i as i32,
                role: if i as i32 == PRIMARY_CHANNEL_INDEX {
                    ChannelRole::Primary
                } else {
                    ChannelRole::Disabled
                },
                ..Channel::default()
            })
            .collect();
        Self { slots }
    }

    /// Whether `index` refers to a slot of this table.
    #[must_use]
    pub fn contains_index(index: i32) -> bool {
        index >= 0 && (index as usize) < MAX_NUM_CHANNELS
    }

    /// Entry at `index`, or `None` when the index is out of range.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&Channel> {
        self.slots.get(index as usize)
    }

    /// Install `entry` at its own index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelIndex`] when the entry's index is
    /// outside `[0, MAX_NUM_CHANNELS)`; the table is left unmodified.
    pub fn set(&mut self, entry: Channel) -> Result<()> {
        if !Self::contains_index(entry.index) {
            return Err(Error::InvalidChannelIndex(entry.index));
        }
        let index = entry.index as usize;
        self.slots[index] = entry;
        Ok(())
    }

    /// The primary channel (index 0).
    #[must_use]
    pub fn primary(&self) -> &Channel {
        &self.slots[PRIMARY_CHANNEL_INDEX as usize]
    }

    /// Number of slots (always [`MAX_NUM_CHANNELS`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; present for container-API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over all slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.slots.iter()
    }
}

impl Default for ChannelTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::ChannelSettings;

    fn named(index: i32, name: &str) -> Channel {
        Channel {
            index,
            role: ChannelRole::Secondary,
            settings: ChannelSettings {
                name: name.to_string(),
                ..ChannelSettings::default()
            },
        }
    }

    #[test]
    fn test_new_table_geometry() {
        let table = ChannelTable::new();
        assert_eq!(table.len(), MAX_NUM_CHANNELS);
        assert_eq!(table.primary().index, PRIMARY_CHANNEL_INDEX);
        assert_eq!(table.primary().role, ChannelRole::Primary);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut table = ChannelTable::new();
        table.set(named(3, "alpine")).expect("index 3 is valid");
        assert_eq!(table.get(3).map(|c| c.settings.name.as_str()), Some("alpine"));
    }

    #[test]
    fn test_set_out_of_range_leaves_table_unmodified() {
        let mut table = ChannelTable::new();
        let before = table.clone();

        let err = table.set(named(MAX_NUM_CHANNELS as i32, "over")).unwrap_err();
        assert!(matches!(err, Error::InvalidChannelIndex(_)));
        assert_eq!(table, before);

        let err = table.set(named(-1, "under")).unwrap_err();
        assert!(matches!(err, Error::InvalidChannelIndex(-1)));
        assert_eq!(table, before);
    }

    #[test]
    fn test_get_out_of_range() {
        let table = ChannelTable::new();
        assert!(table.get(MAX_NUM_CHANNELS as u32).is_none());
    }

    #[test]
    fn test_random_out_of_range_indices_rejected() {
        let mut table = ChannelTable::new();
        let before = table.clone();
        for _ in 0..64 {
            let index = fastrand::i32(MAX_NUM_CHANNELS as i32..i32::MAX);
            assert!(table.set(named(index, "x")).is_err());
        }
        assert_eq!(table, before);
    }
}
