// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mutation handlers.
//!
//! Setters apply validated mutations to the node store and invoke the
//! appropriate reload/persist collaborator. None of them produce a response;
//! acknowledgments are the transport layer's concern.

use super::secret::write_secret;
use super::NodeServices;
use crate::config::PRIMARY_CHANNEL_INDEX;
use crate::proto::{Channel, ConfigPayload, ModuleConfigPayload, Owner, RadioConfig};
use crate::state::NodeStore;

/// Merge `o` into the stored owner record.
///
/// Empty strings mean "leave unchanged"; the licensed flag is always written.
/// The reload/broadcast side effect only fires when at least one field's
/// value actually changed.
pub(super) fn set_owner<S: NodeServices>(store: &mut NodeStore, services: &mut S, o: Owner) {
    let owner = &mut store.owner;
    let mut changed = false;

    if !o.long_name.is_empty() {
        changed |= owner.long_name != o.long_name;
        owner.long_name = o.long_name;
    }
    if !o.short_name.is_empty() {
        changed |= owner.short_name != o.short_name;
        owner.short_name = o.short_name;
    }
    if !o.id.is_empty() {
        changed |= owner.id != o.id;
        owner.id = o.id;
    }
    if owner.is_licensed != o.is_licensed {
        changed = true;
        owner.is_licensed = o.is_licensed;
    }

    // If nothing really changed, don't broadcast on the network or write to
    // flash.
    if changed {
        services.reload_owner();
    }
}

/// Replace the stored radio configuration wholesale.
///
/// A sentinel-valued WiFi password is swapped for the currently stored one
/// first, so a client echoing back a redacted snapshot does not wipe the real
/// secret. The reload collaborator runs unconditionally.
pub(super) fn set_radio<S: NodeServices>(store: &mut NodeStore, services: &mut S, mut r: RadioConfig) {
    write_secret(
        &mut r.preferences.wifi_password,
        &store.radio.preferences.wifi_password,
    );
    store.radio = r;

    services.reload_config();
}

/// Apply a device-configuration family.
///
/// The family branch exists for observability; application of the content is
/// delegated wholesale to the reload collaborator, which runs unconditionally.
pub(super) fn set_config<S: NodeServices>(services: &mut S, payload: ConfigPayload) {
    log::debug!("[admin] setting config: {:?}", payload.kind());
    services.reload_config();
}

/// Apply a module-configuration family. Same pattern as [`set_config`].
pub(super) fn set_module_config<S: NodeServices>(services: &mut S, payload: ModuleConfigPayload) {
    log::debug!("[admin] setting module config: {:?}", payload.kind());
    services.reload_config();
}

/// Install `cc` into the channel table. The dispatcher has already validated
/// the index.
///
/// The primary channel carries bundled device preferences, so installing it
/// takes the full reload path; other channels only need the radio notified
/// and the table persisted.
pub(super) fn set_channel<S: NodeServices>(store: &mut NodeStore, services: &mut S, cc: Channel) {
    let is_primary = cc.index == PRIMARY_CHANNEL_INDEX;

    if store.channels.set(cc).is_err() {
        debug_assert!(false, "dispatcher passed an unvalidated channel index");
        return;
    }

    if is_primary {
        services.reload_config();
    } else {
        services.channels_changed();
        services.persist_channels();
    }
}
