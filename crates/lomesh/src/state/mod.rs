// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide node configuration state.
//!
//! Owner, radio configuration, module settings and the channel table live here
//! for the node's entire uptime. The store is created once at start-up and
//! injected into the admin dispatcher; administration processing is
//! run-to-completion, so no mutation of the store interleaves with another
//! admin request.

pub mod channels;

use crate::proto::{
    CannedMessageConfig, ExtNotificationConfig, MqttConfig, Owner, RadioConfig, RangeTestConfig,
    SerialConfig, StoreForwardConfig, TelemetryConfig,
};
use channels::ChannelTable;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to the node store.
///
/// The lock expresses shared ownership between the admin dispatcher and the
/// rest of the firmware; it is not a license for concurrent admin processing.
pub type SharedStore = Arc<RwLock<NodeStore>>;

/// Current values for every feature-module configuration family.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSettings {
    pub mqtt: MqttConfig,
    pub serial: SerialConfig,
    pub ext_notification: ExtNotificationConfig,
    pub store_forward: StoreForwardConfig,
    pub range_test: RangeTestConfig,
    pub telemetry: TelemetryConfig,
    pub canned_message: CannedMessageConfig,
}

/// The node's long-lived configuration state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    pub owner: Owner,
    pub radio: RadioConfig,
    pub modules: ModuleSettings,
    pub channels: ChannelTable,
}

impl NodeStore {
    /// Fresh store with an empty owner, default preferences and a default
    /// channel table (primary channel at index 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing with the dispatcher and the firmware.
    #[must_use]
    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }
}
