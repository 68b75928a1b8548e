// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Administration wire structures.
//!
//! Tagged-union request/response messages exchanged over the admin channel,
//! the configuration record types they carry, and the transport-facing packet
//! metadata and reply envelopes. Encoding and decoding of these structures to
//! wire bytes lives in the transport layer, not here.

mod admin;
mod packet;
mod types;

pub use admin::{
    AdminRequest, AdminResponse, ConfigKind, ConfigPayload, ModuleConfigKind, ModuleConfigPayload,
};
pub use packet::{OutboundReply, PacketMeta, ReplyPayload, RouteError};
pub use types::{
    CannedMessageConfig, Channel, ChannelRole, ChannelSettings, DeviceConfig, DisplayConfig,
    ExtNotificationConfig, GpsConfig, LoraConfig, MqttConfig, Owner, PowerConfig, RadioConfig,
    RadioPreferences, RangeTestConfig, SerialConfig, StoreForwardConfig, TelemetryConfig,
    WifiConfig,
};
