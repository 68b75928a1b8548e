// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read-only snapshot handlers.
//!
//! Every getter is a no-op unless the request asked for a response; the
//! dispatcher still invokes it so the log shows the attempt.

use super::secret::hide_secret;
use crate::proto::{
    AdminResponse, ConfigKind, ConfigPayload, ModuleConfigKind, ModuleConfigPayload, PacketMeta,
};
use crate::state::NodeStore;

/// Owner record, verbatim.
pub(super) fn get_owner(store: &NodeStore, meta: &PacketMeta) -> Option<AdminResponse> {
    if !meta.want_response {
        return None;
    }
    Some(AdminResponse::Owner(store.owner.clone()))
}

/// Full radio configuration with sleep/timeout preferences patched to their
/// operative values and the WiFi password redacted.
pub(super) fn get_radio(store: &NodeStore, meta: &PacketMeta) -> Option<AdminResponse> {
    if !meta.want_response {
        return None;
    }

    let mut radio = store.radio.clone();

    // Companion apps need the operative sleep values to predict node
    // behavior, so the internal "0 means default" convention is resolved
    // before the snapshot leaves the node. Old apps keep working with new
    // device loads.
    radio.preferences.ls_secs = store.radio.preferences.effective_ls_secs();
    radio.preferences.phone_timeout_secs = store.radio.preferences.effective_phone_timeout_secs();

    // The SSID stays readable; only the password is withheld.
    hide_secret(&mut radio.preferences.wifi_password);

    Some(AdminResponse::Radio(radio))
}

/// Response carrying the requested family discriminant.
///
/// The payload content for the selected family is default-initialized; only
/// the discriminant round-trips.
pub(super) fn get_config(meta: &PacketMeta, kind: ConfigKind) -> Option<AdminResponse> {
    if !meta.want_response {
        return None;
    }
    log::debug!("[admin] getting config: {:?}", kind);
    Some(AdminResponse::Config(ConfigPayload::default_for(kind)))
}

/// Response carrying the requested module-config family discriminant.
///
/// Telemetry is the one family whose current payload is copied into the
/// response; every other family answers with default content.
pub(super) fn get_module_config(
    store: &NodeStore,
    meta: &PacketMeta,
    kind: ModuleConfigKind,
) -> Option<AdminResponse> {
    if !meta.want_response {
        return None;
    }
    log::debug!("[admin] getting module config: {:?}", kind);

    let payload = match kind {
        ModuleConfigKind::Telemetry => {
            ModuleConfigPayload::Telemetry(store.modules.telemetry.clone())
        }
        other => ModuleConfigPayload::default_for(other),
    };
    Some(AdminResponse::ModuleConfig(payload))
}

/// Channel-table entry at `index`, by value. The dispatcher has already
/// validated the index.
pub(super) fn get_channel(
    store: &NodeStore,
    meta: &PacketMeta,
    index: u32,
) -> Option<AdminResponse> {
    if !meta.want_response {
        return None;
    }
    debug_assert!(store.channels.get(index).is_some());
    store
        .channels
        .get(index)
        .cloned()
        .map(AdminResponse::Channel)
}
