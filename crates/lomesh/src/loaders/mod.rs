// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bootstrap configuration loaders.
//!
//! On host and simulator builds the initial node state can be loaded from a
//! configuration file instead of flash. Gated behind the `config-loaders`
//! feature (enabled by default).

mod yaml;

pub use yaml::{YamlChannel, YamlLoader, YamlNodeDocument, YamlOwner, YamlRadioPreferences};
