// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # lomesh - Administration control plane for mesh-radio nodes
//!
//! A pure Rust implementation of the administration surface of a LoRa
//! mesh-radio node: structured requests arrive over the mesh transport, are
//! validated and applied against the node's configuration state, and produce
//! at most one structured reply each.
//!
//! ## Quick Start
//!
//! ```rust
//! use lomesh::admin::{AdminModule, NodeServices};
//! use lomesh::proto::{AdminRequest, PacketMeta};
//! use lomesh::state::NodeStore;
//!
//! struct Firmware;
//!
//! impl NodeServices for Firmware {
//!     fn reload_owner(&mut self) { /* broadcast + persist */ }
//!     fn reload_config(&mut self) { /* radio reconfiguration */ }
//!     fn channels_changed(&mut self) { /* notify the radio */ }
//!     fn persist_channels(&mut self) { /* write channel table */ }
//! }
//!
//! let store = NodeStore::new().shared();
//! let mut admin = AdminModule::new(store, Firmware);
//!
//! let meta = PacketMeta { from: 0x10, to: 0x01, id: 1, channel: 0, want_response: true };
//! let outcome = admin.handle_request(&meta, AdminRequest::GetOwner);
//! assert!(outcome.reply.is_some());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |                         Mesh Transport                            |
//! |         decode wire bytes -> AdminRequest + PacketMeta            |
//! +-------------------------------------------------------------------+
//! |                        Admin Dispatcher                           |
//! |  bounds validation | getters | setters | lifecycle | fallback     |
//! +-------------------------------------------------------------------+
//! |                          Node Store                               |
//! |      Owner | RadioConfig | ModuleSettings | ChannelTable          |
//! +-------------------------------------------------------------------+
//! |                     Firmware Collaborators                        |
//! |   reload owner/config | radio notify | persistence | timer loop   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`admin::AdminModule`] | Top-level request router, owns the reply slot |
//! | [`proto::AdminRequest`] | Tagged-union administration request |
//! | [`proto::AdminResponse`] | Tagged-union administration response |
//! | [`state::NodeStore`] | Process-wide configuration state |
//! | [`admin::lifecycle::LifecycleScheduler`] | Delayed reboot/shutdown deadlines |
//! | [`admin::fallback::AdminHandler`] | Feature-module fallback capability |
//!
//! ## Modules Overview
//!
//! - [`admin`] - Dispatcher, handlers, redaction, lifecycle, delegation
//! - [`proto`] - Wire-facing request/response structures
//! - [`state`] - Node store and channel table
//! - [`config`] - Constants and defaults
//! - [`loaders`] - YAML bootstrap loading (feature `config-loaders`)
//!
//! Processing is single-threaded and run-to-completion: one inbound request
//! is fully handled before the next is considered. Transport encoding,
//! persistence and the timer loop that acts on lifecycle deadlines are
//! external collaborators reached through the seams in [`admin`].

/// Administration dispatcher, handlers, redaction, lifecycle and delegation.
pub mod admin;
/// Node-wide constants and defaults.
pub mod config;
/// Bootstrap configuration loaders (YAML).
#[cfg(feature = "config-loaders")]
pub mod loaders;
/// Administration wire structures.
pub mod proto;
/// Process-wide node configuration state.
pub mod state;

pub use admin::{AdminModule, DispatchOutcome, NodeServices};
pub use proto::{AdminRequest, AdminResponse, OutboundReply, PacketMeta};
pub use state::NodeStore;

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the admin core and the bootstrap loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Channel index outside `[0, MAX_NUM_CHANNELS)`.
    InvalidChannelIndex(i32),
    /// Bootstrap configuration file could not be read.
    ConfigFileNotFound(String),
    /// Bootstrap configuration content is malformed.
    ConfigParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidChannelIndex(index) => write!(
                f,
                "Invalid channel index: {} (must be 0-{})",
                index,
                config::MAX_NUM_CHANNELS - 1
            ),
            Error::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            Error::ConfigParse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Convenient alias for API results using the public [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
