// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Configuration record types carried by administration messages.
//!
//! These are the long-lived node state records (owner, radio, channels) and
//! the per-family configuration payloads. All of them are plain data; the
//! merge/overwrite rules applied when a setter arrives live in
//! [`crate::admin`].

use crate::config::{DEFAULT_LS_SECS, DEFAULT_PHONE_TIMEOUT_SECS};

// ============================================================================
// Owner
// ============================================================================

/// Identity record of the node's owner.
///
/// On a set-owner request, an empty string in any of the three string fields
/// means "leave unchanged". The `is_licensed` flag has no such sentinel and is
/// always overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    /// Full display name, e.g. shown on other nodes' screens.
    pub long_name: String,
    /// Short name, at most a few characters, used where space is tight.
    pub short_name: String,
    /// Globally unique node id string.
    pub id: String,
    /// Licensed amateur-radio operator flag.
    pub is_licensed: bool,
}

// ============================================================================
// Radio configuration
// ============================================================================

/// Link, power and connectivity preferences owned exclusively by this node.
///
/// Replaced wholesale on a set-radio request; there is no per-field merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioPreferences {
    /// Access point to join. Readable over the wire (only minimally private,
    /// and useful for users to know the current provisioning).
    pub wifi_ssid: String,
    /// Access point password. Sensitive: never leaves the node in plaintext,
    /// see [`crate::admin::secret`].
    pub wifi_password: String,
    /// Light-sleep interval in seconds; 0 means "use default".
    pub ls_secs: u32,
    /// Phone-connection timeout in seconds; 0 means "use default".
    pub phone_timeout_secs: u32,
    /// Interval between position broadcasts, in seconds.
    pub position_broadcast_secs: u32,
    /// Number of position broadcasts between owner re-broadcasts.
    pub send_owner_interval: u32,
    /// Node acts as an always-on router.
    pub is_router: bool,
    /// Aggressive power saving enabled.
    pub is_low_power: bool,
}

impl RadioPreferences {
    /// Operative light-sleep interval, resolving the "0 means default"
    /// convention to the concrete number the node is actually using.
    #[must_use]
    pub fn effective_ls_secs(&self) -> u32 {
        if self.ls_secs == 0 {
            DEFAULT_LS_SECS
        } else {
            self.ls_secs
        }
    }

    /// Operative phone-connection timeout, resolving "0 means default".
    #[must_use]
    pub fn effective_phone_timeout_secs(&self) -> u32 {
        if self.phone_timeout_secs == 0 {
            DEFAULT_PHONE_TIMEOUT_SECS
        } else {
            self.phone_timeout_secs
        }
    }
}

/// Full radio configuration record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioConfig {
    pub preferences: RadioPreferences,
}

// ============================================================================
// Channels
// ============================================================================

/// Role a channel-table entry plays on this node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelRole {
    /// Slot is unused.
    #[default]
    Disabled,
    /// The distinguished index-0 channel carrying device-preference coupling.
    Primary,
    /// Any other active channel.
    Secondary,
}

/// Per-channel radio settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSettings {
    /// Human-readable channel name ("" for the default channel).
    pub name: String,
    /// Pre-shared key; empty means unencrypted.
    pub psk: Vec<u8>,
    /// Messages received on this channel are forwarded to MQTT.
    pub uplink_enabled: bool,
    /// Messages from MQTT are transmitted on this channel.
    pub downlink_enabled: bool,
}

/// One entry of the node's fixed-capacity channel table.
///
/// `index` is signed because that is its wire representation; every path into
/// the channel table validates it against `[0, MAX_NUM_CHANNELS)` first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub index: i32,
    pub role: ChannelRole,
    pub settings: ChannelSettings,
}

// ============================================================================
// Per-family device configuration payloads
// ============================================================================

/// Device-domain settings (serial console, debug output).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceConfig {
    pub serial_enabled: bool,
    pub debug_log_enabled: bool,
}

/// GPS receiver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpsConfig {
    pub enabled: bool,
    pub update_interval_secs: u32,
}

/// Power management settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerConfig {
    pub charge_current_ma: u32,
    pub on_battery_shutdown_secs: u32,
}

/// WiFi radio settings (distinct from the credentials kept in
/// [`RadioPreferences`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiConfig {
    pub enabled: bool,
    pub ap_mode: bool,
}

/// Screen and UI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub screen_on_secs: u32,
    pub auto_carousel_secs: u32,
}

/// LoRa modem settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoraConfig {
    pub hop_limit: u32,
    pub tx_power: i32,
    pub tx_disabled: bool,
}

// ============================================================================
// Per-family feature-module configuration payloads
// ============================================================================

/// MQTT gateway module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MqttConfig {
    pub address: String,
    pub username: String,
    pub encryption_enabled: bool,
}

/// Serial bridge module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialConfig {
    pub enabled: bool,
    pub baud: u32,
}

/// External notification (buzzer/LED) module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtNotificationConfig {
    pub enabled: bool,
    pub output_ms: u32,
}

/// Store-and-forward module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreForwardConfig {
    pub enabled: bool,
    pub records: u32,
}

/// Range-test module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTestConfig {
    pub enabled: bool,
    pub sender_secs: u32,
}

/// Telemetry module settings.
///
/// The only module-config family whose current payload is copied into getter
/// responses end-to-end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub device_update_interval_secs: u32,
    pub environment_update_interval_secs: u32,
    pub environment_measurement_enabled: bool,
}

/// Canned-message module settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CannedMessageConfig {
    pub enabled: bool,
    pub allow_input_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_ls_secs_resolves_default() {
        let mut prefs = RadioPreferences::default();
        assert_eq!(prefs.effective_ls_secs(), DEFAULT_LS_SECS);

        prefs.ls_secs = 120;
        assert_eq!(prefs.effective_ls_secs(), 120);
    }

    #[test]
    fn test_effective_phone_timeout_resolves_default() {
        let mut prefs = RadioPreferences::default();
        assert_eq!(
            prefs.effective_phone_timeout_secs(),
            DEFAULT_PHONE_TIMEOUT_SECS
        );

        prefs.phone_timeout_secs = 60;
        assert_eq!(prefs.effective_phone_timeout_secs(), 60);
    }

    #[test]
    fn test_channel_role_defaults_disabled() {
        assert_eq!(Channel::default().role, ChannelRole::Disabled);
    }
}
