// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SDDC Manager API types
//!
//! Typed views of the JSON documents returned by the SDDC Manager REST API
//! (`/v1/tasks`, `/v1/*/validations`, `/v1/license-keys`).
//!
//! Request payloads (domain specs, host commission specs, license specs) are
//! deliberately *not* modelled here: they are opaque documents that callers
//! load from disk and pass through unmodified.
//!
//! Documents that callers may want to echo back verbatim (license keys,
//! tasks) keep unrecognised fields in an `extra` map so nothing is lost when
//! they are printed as JSON.

pub mod types;

pub use types::*;
