// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transport-facing packet metadata and reply envelopes.
//!
//! The mesh transport decodes an inbound packet into an
//! [`AdminRequest`](super::AdminRequest) plus a [`PacketMeta`]; the dispatcher
//! hands back at most one [`OutboundReply`] per request for the transport to
//! deliver.

use super::admin::AdminResponse;

// ============================================================================
// Reply status codes
// ============================================================================

/// Routing status codes carried by error replies.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    None = 0x00,
    NoRoute = 0x01,
    GotNak = 0x02,
    Timeout = 0x03,
    NoInterface = 0x04,
    MaxRetransmit = 0x05,
    NoChannel = 0x06,
    TooLarge = 0x07,
    NoResponse = 0x08,
    BadRequest = 0x20,
    NotAuthorized = 0x21,
}

impl RouteError {
    /// Decode a wire status byte.
    #[must_use]
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0x00 => Some(RouteError::None),
            0x01 => Some(RouteError::NoRoute),
            0x02 => Some(RouteError::GotNak),
            0x03 => Some(RouteError::Timeout),
            0x04 => Some(RouteError::NoInterface),
            0x05 => Some(RouteError::MaxRetransmit),
            0x06 => Some(RouteError::NoChannel),
            0x07 => Some(RouteError::TooLarge),
            0x08 => Some(RouteError::NoResponse),
            0x20 => Some(RouteError::BadRequest),
            0x21 => Some(RouteError::NotAuthorized),
            _ => None,
        }
    }

    /// Wire status byte for this code.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// Packet metadata
// ============================================================================

/// Metadata of the transport packet that carried an administration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketMeta {
    /// Originating node.
    pub from: u32,
    /// Destination node (this node, or [`crate::config::BROADCAST_ADDR`]).
    pub to: u32,
    /// Transport-level packet id; replies reference it.
    pub id: u32,
    /// Channel-table index the packet arrived on.
    pub channel: u8,
    /// The sender asked for a response to this request.
    pub want_response: bool,
}

// ============================================================================
// Outgoing replies
// ============================================================================

/// Payload of an outgoing reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPayload {
    /// A regular administration response.
    Admin(AdminResponse),
    /// A distinguished error reply (e.g. BAD_REQUEST for an out-of-range
    /// channel index).
    Error(RouteError),
}

/// One reply packet, addressed back to the requester.
///
/// At most one is produced per inbound request; the dispatcher owns the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundReply {
    pub to: u32,
    /// Packet id of the request this replies to.
    pub request_id: u32,
    pub channel: u8,
    pub payload: ReplyPayload,
}

impl OutboundReply {
    /// Build a data reply to `meta`'s sender.
    #[must_use]
    pub fn data(meta: &PacketMeta, response: AdminResponse) -> Self {
        Self {
            to: meta.from,
            request_id: meta.id,
            channel: meta.channel,
            payload: ReplyPayload::Admin(response),
        }
    }

    /// Build an error reply to `meta`'s sender.
    #[must_use]
    pub fn error(meta: &PacketMeta, error: RouteError) -> Self {
        Self {
            to: meta.from,
            request_id: meta.id,
            channel: meta.channel,
            payload: ReplyPayload::Error(error),
        }
    }
}
