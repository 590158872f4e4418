// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Hue light control.
//!
//! This module provides type-safe representations of the values a Hue bridge
//! accepts. Each type ensures values are within their valid ranges at
//! construction time, preventing rejected commands at runtime.
//!
//! # Types
//!
//! - [`Brightness`] - Brightness level (0-254)
//! - [`XyColor`] - Color point in CIE xy space (both axes 0.0-1.0)
//! - [`TransitionTime`] - Transition duration in deciseconds
//! - [`GroupId`] - Numeric address of a light group (0 = all lights)

mod brightness;
mod group;
mod transition;
mod xy;

pub use brightness::Brightness;
pub use group::GroupId;
pub use transition::TransitionTime;
pub use xy::XyColor;
