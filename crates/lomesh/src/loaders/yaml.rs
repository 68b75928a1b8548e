// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML bootstrap loader.
//!
//! Provides YAML-based node bootstrap with a clean, human-friendly format.
//!
//! # Example YAML
//!
//! ```yaml
//! # node.yaml
//! owner:
//!   long_name: Summit Relay
//!   short_name: SR
//!   id: "!aabbccdd"
//!
//! radio:
//!   wifi_ssid: basecamp
//!   wifi_password: hunter2
//!   ls_secs: 120
//!   is_router: true
//!
//! channels:
//!   - index: 0
//!     role: PRIMARY
//!     name: main
//!     psk: d4f1bb3a20290759f0bcffabcf4e6901
//!   - index: 3
//!     name: remote
//! ```

use crate::proto::{Channel, ChannelRole, ChannelSettings, Owner, RadioPreferences};
use crate::state::NodeStore;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// YAML node bootstrap loader.
pub struct YamlLoader;

/// Root YAML document structure.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlNodeDocument {
    /// Owner record (optional).
    pub owner: Option<YamlOwner>,

    /// Radio preferences (optional).
    pub radio: Option<YamlRadioPreferences>,

    /// Channel-table entries; omitted slots keep their defaults.
    pub channels: Vec<YamlChannel>,
}

/// Owner record in YAML format.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlOwner {
    pub long_name: String,
    pub short_name: String,
    pub id: String,
    pub is_licensed: bool,
}

/// Radio preferences in YAML format.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct YamlRadioPreferences {
    pub wifi_ssid: String,
    pub wifi_password: String,
    /// 0 keeps the "use default" convention.
    pub ls_secs: u32,
    /// 0 keeps the "use default" convention.
    pub phone_timeout_secs: u32,
    pub position_broadcast_secs: u32,
    pub send_owner_interval: u32,
    pub is_router: bool,
    pub is_low_power: bool,
}

/// A single channel-table entry in YAML format.
#[derive(Debug, Deserialize)]
pub struct YamlChannel {
    pub index: i32,

    /// PRIMARY, SECONDARY or DISABLED (case-insensitive). Defaults to
    /// PRIMARY for index 0 and SECONDARY otherwise.
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Pre-shared key as a hex string; omitted means unencrypted.
    #[serde(default)]
    pub psk: Option<String>,

    #[serde(default)]
    pub uplink_enabled: bool,

    #[serde(default)]
    pub downlink_enabled: bool,
}

impl YamlLoader {
    /// Load a node store from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFileNotFound`] when the file can not be read,
    /// [`Error::ConfigParse`] for malformed content, and
    /// [`Error::InvalidChannelIndex`] for channel entries outside the table.
    pub fn load_store<P: AsRef<Path>>(path: P) -> Result<NodeStore> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path)
            .map_err(|e| Error::ConfigFileNotFound(format!("{}: {}", path.display(), e)))?;
        let doc = Self::parse_yaml(&yaml_content)?;
        Self::document_to_store(&doc)
    }

    /// Parse YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed YAML.
    pub fn parse_yaml(yaml_content: &str) -> Result<YamlNodeDocument> {
        serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Convert a parsed document to a node store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelIndex`] or [`Error::ConfigParse`] for
    /// invalid channel entries.
    pub fn document_to_store(doc: &YamlNodeDocument) -> Result<NodeStore> {
        let mut store = NodeStore::new();

        if let Some(ref owner) = doc.owner {
            store.owner = Owner {
                long_name: owner.long_name.clone(),
                short_name: owner.short_name.clone(),
                id: owner.id.clone(),
                is_licensed: owner.is_licensed,
            };
        }

        if let Some(ref radio) = doc.radio {
            store.radio.preferences = RadioPreferences {
                wifi_ssid: radio.wifi_ssid.clone(),
                wifi_password: radio.wifi_password.clone(),
                ls_secs: radio.ls_secs,
                phone_timeout_secs: radio.phone_timeout_secs,
                position_broadcast_secs: radio.position_broadcast_secs,
                send_owner_interval: radio.send_owner_interval,
                is_router: radio.is_router,
                is_low_power: radio.is_low_power,
            };
        }

        for entry in &doc.channels {
            store.channels.set(Self::channel_from_yaml(entry)?)?;
        }

        Ok(store)
    }

    fn channel_from_yaml(entry: &YamlChannel) -> Result<Channel> {
        let role = match entry.role {
            Some(ref role) => match role.to_uppercase().as_str() {
                "PRIMARY" => ChannelRole::Primary,
                "SECONDARY" => ChannelRole::Secondary,
                "DISABLED" => ChannelRole::Disabled,
                other => {
                    return Err(Error::ConfigParse(format!(
                        "invalid channel role: {}",
                        other
                    )))
                }
            },
            None if entry.index == 0 => ChannelRole::Primary,
            None => ChannelRole::Secondary,
        };

        let psk = match entry.psk {
            Some(ref hex) => hex_decode(hex)
                .map_err(|()| Error::ConfigParse(format!("invalid channel psk hex: {}", hex)))?,
            None => Vec::new(),
        };

        Ok(Channel {
            index: entry.index,
            role,
            settings: ChannelSettings {
                name: entry.name.clone(),
                psk,
                uplink_enabled: entry.uplink_enabled,
                downlink_enabled: entry.downlink_enabled,
            },
        })
    }
}

fn hex_decode(s: &str) -> std::result::Result<Vec<u8>, ()> {
    if s.len() % 2 != 0 {
        return Err(());
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| ()))
        .collect()
}
