// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API type definitions organized by resource

pub mod common;
pub mod license;
pub mod task;
pub mod validation;

pub use common::*;
pub use license::*;
pub use task::*;
pub use validation::*;
