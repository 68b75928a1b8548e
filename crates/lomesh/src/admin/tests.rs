// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dispatcher behavior tests.
//!
//! Exercises the full request path: routing, bounds validation, merge and
//! redaction semantics, lifecycle scheduling and fallback delegation, with a
//! recording stub standing in for the firmware side-effect collaborators.

use super::fallback::{AdminHandleResult, AdminHandler};
use super::{AdminModule, NodeServices};
use crate::config::{
    DEFAULT_LS_SECS, DEFAULT_PHONE_TIMEOUT_SECS, MAX_NUM_CHANNELS, SECRET_RESERVED,
};
use crate::proto::{
    AdminRequest, AdminResponse, Channel, ChannelRole, ChannelSettings, ConfigKind, ConfigPayload,
    DeviceConfig, ModuleConfigKind, ModuleConfigPayload, Owner, PacketMeta, RadioConfig,
    ReplyPayload, RouteError, SerialConfig, TelemetryConfig,
};
use crate::state::{NodeStore, SharedStore};
use parking_lot::Mutex;
use std::sync::Arc;

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ServiceCalls {
    reload_owner: u32,
    reload_config: u32,
    channels_changed: u32,
    persist_channels: u32,
}

/// Records every side-effect collaborator invocation.
#[derive(Clone, Default)]
struct RecordingServices {
    calls: Arc<Mutex<ServiceCalls>>,
}

impl RecordingServices {
    fn calls(&self) -> ServiceCalls {
        self.calls.lock().clone()
    }
}

impl NodeServices for RecordingServices {
    fn reload_owner(&mut self) {
        self.calls.lock().reload_owner += 1;
    }

    fn reload_config(&mut self) {
        self.calls.lock().reload_config += 1;
    }

    fn channels_changed(&mut self) {
        self.calls.lock().channels_changed += 1;
    }

    fn persist_channels(&mut self) {
        self.calls.lock().persist_channels += 1;
    }
}

/// Minimal canned-message module for delegation tests.
struct CannedMessagesHandler {
    messages: String,
}

impl AdminHandler for CannedMessagesHandler {
    fn name(&self) -> &'static str {
        "canned-messages"
    }

    fn handle_admin(&mut self, _meta: &PacketMeta, req: &AdminRequest) -> AdminHandleResult {
        match req {
            AdminRequest::GetCannedMessages => AdminHandleResult::HandledWithResponse(
                AdminResponse::CannedMessages(self.messages.clone()),
            ),
            AdminRequest::SetCannedMessages(messages) => {
                self.messages = messages.clone();
                AdminHandleResult::Handled
            }
            _ => AdminHandleResult::NotHandled,
        }
    }
}

fn setup() -> (AdminModule<RecordingServices>, SharedStore, RecordingServices) {
    let store = NodeStore::new().shared();
    let services = RecordingServices::default();
    let module = AdminModule::new(store.clone(), services.clone());
    (module, store, services)
}

fn meta(want_response: bool) -> PacketMeta {
    PacketMeta {
        from: 0x0a,
        to: 0x01,
        id: 42,
        channel: 0,
        want_response,
    }
}

fn admin_payload(reply: crate::proto::OutboundReply) -> AdminResponse {
    match reply.payload {
        ReplyPayload::Admin(response) => response,
        other => panic!("expected admin payload, got {:?}", other),
    }
}

fn secondary(index: i32, name: &str) -> Channel {
    Channel {
        index,
        role: ChannelRole::Secondary,
        settings: ChannelSettings {
            name: name.to_string(),
            ..ChannelSettings::default()
        },
    }
}

// ============================================================================
// Getters
// ============================================================================

#[test]
fn test_get_owner_returns_record() {
    let (mut module, store, _) = setup();
    store.write().owner = Owner {
        long_name: "Summit Relay".to_string(),
        short_name: "SR".to_string(),
        id: "!aabbccdd".to_string(),
        is_licensed: true,
    };

    let outcome = module.handle_request(&meta(true), AdminRequest::GetOwner);

    let reply = outcome.reply.expect("owner reply");
    assert_eq!(reply.to, 0x0a);
    assert_eq!(reply.request_id, 42);
    match admin_payload(reply) {
        AdminResponse::Owner(owner) => assert_eq!(owner.long_name, "Summit Relay"),
        other => panic!("expected owner response, got {:?}", other),
    }
}

#[test]
fn test_get_owner_without_want_response() {
    let (mut module, _, _) = setup();
    let outcome = module.handle_request(&meta(false), AdminRequest::GetOwner);
    assert!(outcome.reply.is_none());
}

#[test]
fn test_get_radio_redacts_wifi_password() {
    let (mut module, store, _) = setup();
    store.write().radio.preferences.wifi_password = "hunter2".to_string();

    let outcome = module.handle_request(&meta(true), AdminRequest::GetRadio);

    match admin_payload(outcome.reply.expect("radio reply")) {
        AdminResponse::Radio(radio) => {
            assert_eq!(radio.preferences.wifi_password, SECRET_RESERVED);
        }
        other => panic!("expected radio response, got {:?}", other),
    }
    // The stored secret is untouched.
    assert_eq!(store.read().radio.preferences.wifi_password, "hunter2");
}

#[test]
fn test_get_radio_redacts_empty_password_too() {
    let (mut module, _, _) = setup();

    let outcome = module.handle_request(&meta(true), AdminRequest::GetRadio);

    match admin_payload(outcome.reply.expect("radio reply")) {
        AdminResponse::Radio(radio) => {
            assert_eq!(radio.preferences.wifi_password, SECRET_RESERVED);
        }
        other => panic!("expected radio response, got {:?}", other),
    }
}

#[test]
fn test_get_radio_patches_effective_sleep_values() {
    let (mut module, store, _) = setup();

    let outcome = module.handle_request(&meta(true), AdminRequest::GetRadio);

    match admin_payload(outcome.reply.expect("radio reply")) {
        AdminResponse::Radio(radio) => {
            assert_eq!(radio.preferences.ls_secs, DEFAULT_LS_SECS);
            assert_eq!(
                radio.preferences.phone_timeout_secs,
                DEFAULT_PHONE_TIMEOUT_SECS
            );
        }
        other => panic!("expected radio response, got {:?}", other),
    }
    // Only the snapshot is patched; the store keeps the 0 convention.
    assert_eq!(store.read().radio.preferences.ls_secs, 0);

    store.write().radio.preferences.ls_secs = 120;
    let outcome = module.handle_request(&meta(true), AdminRequest::GetRadio);
    match admin_payload(outcome.reply.expect("radio reply")) {
        AdminResponse::Radio(radio) => assert_eq!(radio.preferences.ls_secs, 120),
        other => panic!("expected radio response, got {:?}", other),
    }
}

#[test]
fn test_get_config_reports_requested_family() {
    let (mut module, _, _) = setup();

    let outcome = module.handle_request(&meta(true), AdminRequest::GetConfig(ConfigKind::Lora));

    match admin_payload(outcome.reply.expect("config reply")) {
        AdminResponse::Config(payload) => assert_eq!(payload.kind(), ConfigKind::Lora),
        other => panic!("expected config response, got {:?}", other),
    }
}

#[test]
fn test_get_module_config_telemetry_copies_payload() {
    let (mut module, store, _) = setup();
    let telemetry = TelemetryConfig {
        device_update_interval_secs: 600,
        environment_update_interval_secs: 300,
        environment_measurement_enabled: true,
    };
    store.write().modules.telemetry = telemetry.clone();

    let outcome = module.handle_request(
        &meta(true),
        AdminRequest::GetModuleConfig(ModuleConfigKind::Telemetry),
    );

    match admin_payload(outcome.reply.expect("module config reply")) {
        AdminResponse::ModuleConfig(ModuleConfigPayload::Telemetry(config)) => {
            assert_eq!(config, telemetry);
        }
        other => panic!("expected telemetry response, got {:?}", other),
    }
}

#[test]
fn test_get_module_config_other_families_report_discriminant_only() {
    let (mut module, store, _) = setup();
    // Customized store content is deliberately not echoed for families other
    // than telemetry.
    store.write().modules.serial = SerialConfig {
        enabled: true,
        baud: 115_200,
    };

    let outcome = module.handle_request(
        &meta(true),
        AdminRequest::GetModuleConfig(ModuleConfigKind::Serial),
    );

    match admin_payload(outcome.reply.expect("module config reply")) {
        AdminResponse::ModuleConfig(payload) => {
            assert_eq!(payload.kind(), ModuleConfigKind::Serial);
            assert_eq!(
                payload,
                ModuleConfigPayload::Serial(SerialConfig::default())
            );
        }
        other => panic!("expected module config response, got {:?}", other),
    }
}

#[test]
fn test_get_channel_returns_entry_by_value() {
    let (mut module, store, _) = setup();
    store
        .write()
        .channels
        .set(secondary(2, "alpine"))
        .expect("valid index");

    let outcome = module.handle_request(&meta(true), AdminRequest::GetChannel(2));

    match admin_payload(outcome.reply.expect("channel reply")) {
        AdminResponse::Channel(channel) => {
            assert_eq!(channel.index, 2);
            assert_eq!(channel.settings.name, "alpine");
        }
        other => panic!("expected channel response, got {:?}", other),
    }
}

#[test]
fn test_get_channel_out_of_range_is_bad_request() {
    let (mut module, store, services) = setup();
    let before = store.read().clone();

    let outcome =
        module.handle_request(&meta(true), AdminRequest::GetChannel(MAX_NUM_CHANNELS as u32));

    let reply = outcome.reply.expect("error reply");
    assert_eq!(reply.payload, ReplyPayload::Error(RouteError::BadRequest));
    assert_eq!(*store.read(), before);
    assert_eq!(services.calls(), ServiceCalls::default());
}

#[test]
fn test_get_channel_out_of_range_error_ignores_want_response() {
    // Bounds validation runs before the want_response gate; the error reply
    // is produced either way.
    let (mut module, _, _) = setup();
    let outcome = module.handle_request(&meta(false), AdminRequest::GetChannel(99));
    assert_eq!(
        outcome.reply.expect("error reply").payload,
        ReplyPayload::Error(RouteError::BadRequest)
    );
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_owner_merges_nonempty_fields() {
    let (mut module, store, services) = setup();
    store.write().owner = Owner {
        long_name: "Summit Relay".to_string(),
        short_name: "SR".to_string(),
        id: "!aabbccdd".to_string(),
        is_licensed: false,
    };

    let update = Owner {
        long_name: String::new(),
        short_name: "SX".to_string(),
        id: String::new(),
        is_licensed: false,
    };
    let outcome = module.handle_request(&meta(true), AdminRequest::SetOwner(update));

    assert!(outcome.reply.is_none());
    let owner = store.read().owner.clone();
    assert_eq!(owner.long_name, "Summit Relay");
    assert_eq!(owner.short_name, "SX");
    assert_eq!(owner.id, "!aabbccdd");
    assert_eq!(services.calls().reload_owner, 1);
}

#[test]
fn test_set_owner_idempotent_update_skips_reload() {
    let (mut module, store, services) = setup();
    store.write().owner = Owner {
        long_name: "Summit Relay".to_string(),
        short_name: "SR".to_string(),
        id: "!aabbccdd".to_string(),
        is_licensed: true,
    };

    // All-empty strings plus an unchanged flag: nothing to do.
    let update = Owner {
        long_name: String::new(),
        short_name: String::new(),
        id: String::new(),
        is_licensed: true,
    };
    module.handle_request(&meta(false), AdminRequest::SetOwner(update));
    assert_eq!(services.calls().reload_owner, 0);

    // Same values written again: still no reload.
    let update = Owner {
        long_name: "Summit Relay".to_string(),
        short_name: "SR".to_string(),
        id: "!aabbccdd".to_string(),
        is_licensed: true,
    };
    module.handle_request(&meta(false), AdminRequest::SetOwner(update));
    assert_eq!(services.calls().reload_owner, 0);
}

#[test]
fn test_set_owner_changed_field_reloads_exactly_once() {
    let (mut module, store, services) = setup();
    store.write().owner.long_name = "Summit Relay".to_string();

    let update = Owner {
        long_name: "Valley Relay".to_string(),
        ..Owner::default()
    };
    module.handle_request(&meta(false), AdminRequest::SetOwner(update));

    assert_eq!(store.read().owner.long_name, "Valley Relay");
    assert_eq!(services.calls().reload_owner, 1);
}

#[test]
fn test_set_owner_licensed_flag_always_written() {
    let (mut module, store, services) = setup();
    store.write().owner.is_licensed = false;

    let update = Owner {
        is_licensed: true,
        ..Owner::default()
    };
    module.handle_request(&meta(false), AdminRequest::SetOwner(update));

    assert!(store.read().owner.is_licensed);
    assert_eq!(services.calls().reload_owner, 1);
}

#[test]
fn test_set_radio_sentinel_preserves_stored_password() {
    let (mut module, store, services) = setup();
    store.write().radio.preferences.wifi_password = "hunter2".to_string();

    let mut update = RadioConfig::default();
    update.preferences.wifi_password = SECRET_RESERVED.to_string();
    update.preferences.ls_secs = 120;
    module.handle_request(&meta(false), AdminRequest::SetRadio(update));

    let prefs = store.read().radio.preferences.clone();
    assert_eq!(prefs.wifi_password, "hunter2");
    assert_eq!(prefs.ls_secs, 120);
    assert_eq!(services.calls().reload_config, 1);
}

#[test]
fn test_set_radio_overwrites_password() {
    let (mut module, store, _) = setup();
    store.write().radio.preferences.wifi_password = "hunter2".to_string();

    let mut update = RadioConfig::default();
    update.preferences.wifi_password = "correct horse".to_string();
    module.handle_request(&meta(false), AdminRequest::SetRadio(update));

    assert_eq!(
        store.read().radio.preferences.wifi_password,
        "correct horse"
    );
}

#[test]
fn test_set_radio_is_wholesale_and_always_reloads() {
    let (mut module, store, services) = setup();
    store.write().radio.preferences.ls_secs = 120;

    // Identical content still reloads; a field absent from the update (its
    // default) is overwritten rather than merged.
    module.handle_request(&meta(false), AdminRequest::SetRadio(RadioConfig::default()));

    assert_eq!(store.read().radio.preferences.ls_secs, 0);
    assert_eq!(services.calls().reload_config, 1);
}

#[test]
fn test_set_config_reloads_unconditionally() {
    let (mut module, _, services) = setup();

    let outcome = module.handle_request(
        &meta(true),
        AdminRequest::SetConfig(ConfigPayload::Device(DeviceConfig::default())),
    );

    assert!(outcome.reply.is_none());
    assert_eq!(services.calls().reload_config, 1);
}

#[test]
fn test_set_module_config_reloads_unconditionally() {
    let (mut module, _, services) = setup();

    module.handle_request(
        &meta(false),
        AdminRequest::SetModuleConfig(ModuleConfigPayload::Serial(SerialConfig::default())),
    );

    assert_eq!(services.calls().reload_config, 1);
}

#[test]
fn test_set_channel_primary_takes_full_reload_path() {
    let (mut module, store, services) = setup();

    let mut channel = secondary(0, "main");
    channel.role = ChannelRole::Primary;
    module.handle_request(&meta(false), AdminRequest::SetChannel(channel));

    assert_eq!(store.read().channels.primary().settings.name, "main");
    let calls = services.calls();
    assert_eq!(calls.reload_config, 1);
    assert_eq!(calls.channels_changed, 0);
    assert_eq!(calls.persist_channels, 0);
}

#[test]
fn test_set_channel_secondary_takes_narrow_path() {
    let (mut module, store, services) = setup();

    module.handle_request(&meta(false), AdminRequest::SetChannel(secondary(3, "remote")));

    assert_eq!(
        store.read().channels.get(3).map(|c| c.settings.name.clone()),
        Some("remote".to_string())
    );
    let calls = services.calls();
    assert_eq!(calls.reload_config, 0);
    assert_eq!(calls.channels_changed, 1);
    assert_eq!(calls.persist_channels, 1);
}

#[test]
fn test_set_channel_out_of_range_is_bad_request() {
    let (mut module, store, services) = setup();
    let before = store.read().clone();

    for index in [MAX_NUM_CHANNELS as i32, -1] {
        let outcome =
            module.handle_request(&meta(true), AdminRequest::SetChannel(secondary(index, "x")));
        assert_eq!(
            outcome.reply.expect("error reply").payload,
            ReplyPayload::Error(RouteError::BadRequest)
        );
    }

    assert_eq!(*store.read(), before);
    assert_eq!(services.calls(), ServiceCalls::default());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_reboot_deadline_set_and_cleared() {
    let (mut module, _, _) = setup();
    let scheduler = module.scheduler();

    module.handle_request(&meta(false), AdminRequest::RebootSeconds(30));
    assert!(scheduler.reboot_at_ms().is_some());

    module.handle_request(&meta(false), AdminRequest::RebootSeconds(-1));
    assert_eq!(scheduler.reboot_at_ms(), None);
}

#[test]
fn test_reboot_deadline_arithmetic() {
    let (mut module, _, _) = setup();
    let scheduler = module.scheduler();

    let before = scheduler.now_ms();
    module.handle_request(&meta(false), AdminRequest::RebootSeconds(10));
    let after = scheduler.now_ms();

    let at = scheduler.reboot_at_ms().expect("deadline armed");
    assert!(at >= before + 10_000);
    assert!(at <= after + 10_000);
}

#[test]
fn test_shutdown_deadline_is_independent_slot() {
    let (mut module, _, _) = setup();
    let scheduler = module.scheduler();

    module.handle_request(&meta(false), AdminRequest::ShutdownSeconds(20));
    module.handle_request(&meta(false), AdminRequest::RebootSeconds(-1));

    assert!(scheduler.shutdown_at_ms().is_some());
    assert_eq!(scheduler.reboot_at_ms(), None);
}

// ============================================================================
// Fallback delegation
// ============================================================================

#[test]
fn test_unrecognized_request_without_handlers_is_silently_dropped() {
    let (mut module, store, services) = setup();
    let before = store.read().clone();

    let outcome = module.handle_request(&meta(false), AdminRequest::GetCannedMessages);

    assert!(outcome.reply.is_none());
    assert!(!outcome.consumed);
    assert_eq!(*store.read(), before);
    assert_eq!(services.calls(), ServiceCalls::default());
}

#[test]
fn test_unrecognized_request_wanting_response_gets_none() {
    // Loggable condition, not a failure: no reply and no error reply.
    let (mut module, _, _) = setup();
    let outcome = module.handle_request(&meta(true), AdminRequest::GetCannedMessages);
    assert!(outcome.reply.is_none());
    assert!(!outcome.consumed);
}

#[test]
fn test_fallback_response_is_queued_as_reply() {
    let (mut module, _, _) = setup();
    module.register_fallback(Box::new(CannedMessagesHandler {
        messages: "ack|nack|omw".to_string(),
    }));

    let outcome = module.handle_request(&meta(true), AdminRequest::GetCannedMessages);

    assert!(outcome.consumed);
    match admin_payload(outcome.reply.expect("delegated reply")) {
        AdminResponse::CannedMessages(messages) => assert_eq!(messages, "ack|nack|omw"),
        other => panic!("expected canned messages, got {:?}", other),
    }
}

#[test]
fn test_fallback_handled_without_response() {
    let (mut module, _, _) = setup();
    module.register_fallback(Box::new(CannedMessagesHandler {
        messages: String::new(),
    }));

    let outcome = module.handle_request(
        &meta(true),
        AdminRequest::SetCannedMessages("ack|omw".to_string()),
    );

    assert!(outcome.consumed);
    assert!(outcome.reply.is_none());

    // The module kept the new list: a follow-up get returns it.
    let outcome = module.handle_request(&meta(true), AdminRequest::GetCannedMessages);
    match admin_payload(outcome.reply.expect("delegated reply")) {
        AdminResponse::CannedMessages(messages) => assert_eq!(messages, "ack|omw"),
        other => panic!("expected canned messages, got {:?}", other),
    }
}

// ============================================================================
// Dispatch reporting
// ============================================================================

#[test]
fn test_explicit_cases_are_not_consumed() {
    // Matched getters and setters still report "not specially handled" so
    // other modules may observe the same message afterwards.
    let (mut module, _, _) = setup();

    let outcome = module.handle_request(&meta(true), AdminRequest::GetOwner);
    assert!(!outcome.consumed);

    let outcome = module.handle_request(&meta(false), AdminRequest::SetOwner(Owner::default()));
    assert!(!outcome.consumed);
}

#[test]
fn test_setters_never_reply() {
    let (mut module, _, _) = setup();
    let outcome = module.handle_request(
        &meta(true),
        AdminRequest::SetRadio(RadioConfig::default()),
    );
    assert!(outcome.reply.is_none());
}
