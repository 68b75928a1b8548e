// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Administration request/response tagged unions.
//!
//! Exactly one variant is active per message. Requests either target state
//! this core owns (owner, radio, per-family config, channels, lifecycle) or
//! belong to a feature module and are resolved via fallback delegation.

use super::types::{
    CannedMessageConfig, Channel, DeviceConfig, DisplayConfig, ExtNotificationConfig, GpsConfig,
    LoraConfig, MqttConfig, Owner, PowerConfig, RadioConfig, RangeTestConfig, SerialConfig,
    StoreForwardConfig, TelemetryConfig, WifiConfig,
};

// ============================================================================
// Configuration family discriminants
// ============================================================================

/// Device-configuration families addressable by get-config / set-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Device,
    Gps,
    Power,
    Wifi,
    Display,
    Lora,
}

/// Module-configuration families addressable by get/set-module-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleConfigKind {
    Mqtt,
    Serial,
    ExtNotification,
    StoreForward,
    RangeTest,
    Telemetry,
    CannedMessage,
}

// ============================================================================
// Configuration payloads (family discriminant + content)
// ============================================================================

/// Device-configuration payload, one variant per family.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigPayload {
    Device(DeviceConfig),
    Gps(GpsConfig),
    Power(PowerConfig),
    Wifi(WifiConfig),
    Display(DisplayConfig),
    Lora(LoraConfig),
}

impl ConfigPayload {
    /// Family discriminant of this payload.
    #[must_use]
    pub fn kind(&self) -> ConfigKind {
        match self {
            ConfigPayload::Device(_) => ConfigKind::Device,
            ConfigPayload::Gps(_) => ConfigKind::Gps,
            ConfigPayload::Power(_) => ConfigKind::Power,
            ConfigPayload::Wifi(_) => ConfigKind::Wifi,
            ConfigPayload::Display(_) => ConfigKind::Display,
            ConfigPayload::Lora(_) => ConfigKind::Lora,
        }
    }

    /// Payload for `kind` with default-initialized content.
    ///
    /// Used for getter responses that only communicate the family
    /// discriminant.
    #[must_use]
    pub fn default_for(kind: ConfigKind) -> Self {
        match kind {
            ConfigKind::Device => ConfigPayload::Device(DeviceConfig::default()),
            ConfigKind::Gps => ConfigPayload::Gps(GpsConfig::default()),
            ConfigKind::Power => ConfigPayload::Power(PowerConfig::default()),
            ConfigKind::Wifi => ConfigPayload::Wifi(WifiConfig::default()),
            ConfigKind::Display => ConfigPayload::Display(DisplayConfig::default()),
            ConfigKind::Lora => ConfigPayload::Lora(LoraConfig::default()),
        }
    }
}

/// Module-configuration payload, one variant per family.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleConfigPayload {
    Mqtt(MqttConfig),
    Serial(SerialConfig),
    ExtNotification(ExtNotificationConfig),
    StoreForward(StoreForwardConfig),
    RangeTest(RangeTestConfig),
    Telemetry(TelemetryConfig),
    CannedMessage(CannedMessageConfig),
}

impl ModuleConfigPayload {
    /// Family discriminant of this payload.
    #[must_use]
    pub fn kind(&self) -> ModuleConfigKind {
        match self {
            ModuleConfigPayload::Mqtt(_) => ModuleConfigKind::Mqtt,
            ModuleConfigPayload::Serial(_) => ModuleConfigKind::Serial,
            ModuleConfigPayload::ExtNotification(_) => ModuleConfigKind::ExtNotification,
            ModuleConfigPayload::StoreForward(_) => ModuleConfigKind::StoreForward,
            ModuleConfigPayload::RangeTest(_) => ModuleConfigKind::RangeTest,
            ModuleConfigPayload::Telemetry(_) => ModuleConfigKind::Telemetry,
            ModuleConfigPayload::CannedMessage(_) => ModuleConfigKind::CannedMessage,
        }
    }

    /// Payload for `kind` with default-initialized content.
    #[must_use]
    pub fn default_for(kind: ModuleConfigKind) -> Self {
        match kind {
            ModuleConfigKind::Mqtt => ModuleConfigPayload::Mqtt(MqttConfig::default()),
            ModuleConfigKind::Serial => ModuleConfigPayload::Serial(SerialConfig::default()),
            ModuleConfigKind::ExtNotification => {
                ModuleConfigPayload::ExtNotification(ExtNotificationConfig::default())
            }
            ModuleConfigKind::StoreForward => {
                ModuleConfigPayload::StoreForward(StoreForwardConfig::default())
            }
            ModuleConfigKind::RangeTest => {
                ModuleConfigPayload::RangeTest(RangeTestConfig::default())
            }
            ModuleConfigKind::Telemetry => {
                ModuleConfigPayload::Telemetry(TelemetryConfig::default())
            }
            ModuleConfigKind::CannedMessage => {
                ModuleConfigPayload::CannedMessage(CannedMessageConfig::default())
            }
        }
    }
}

// ============================================================================
// Requests and responses
// ============================================================================

/// Administration request, exactly one active variant per message.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminRequest {
    /// Read the owner record.
    GetOwner,
    /// Read the full radio configuration.
    GetRadio,
    /// Read the selected device-configuration family.
    GetConfig(ConfigKind),
    /// Read the selected module-configuration family.
    GetModuleConfig(ModuleConfigKind),
    /// Read the channel-table entry at this index.
    GetChannel(u32),
    /// Merge fields into the owner record.
    SetOwner(Owner),
    /// Replace the radio configuration wholesale.
    SetRadio(RadioConfig),
    /// Apply a device-configuration family.
    SetConfig(ConfigPayload),
    /// Apply a module-configuration family.
    SetModuleConfig(ModuleConfigPayload),
    /// Install a channel-table entry.
    SetChannel(Channel),
    /// Schedule a reboot `secs` from now; negative clears the deadline.
    RebootSeconds(i32),
    /// Schedule a shutdown `secs` from now; negative clears the deadline.
    ShutdownSeconds(i32),
    /// Terminate the simulated node immediately.
    #[cfg(feature = "simulator")]
    ExitSimulator,
    /// Read the canned-message list. Owned by the canned-message module and
    /// resolved via fallback delegation.
    GetCannedMessages,
    /// Replace the canned-message list. Owned by the canned-message module.
    SetCannedMessages(String),
}

/// Administration response, mirroring the get-* requests.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminResponse {
    Owner(Owner),
    Radio(RadioConfig),
    Config(ConfigPayload),
    ModuleConfig(ModuleConfigPayload),
    Channel(Channel),
    CannedMessages(String),
}
