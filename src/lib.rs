// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Lumen` Lib - A Rust library to control Philips Hue lights.
//!
//! This library provides async APIs to control Hue light groups through a
//! local bridge: power, CIE xy color, brightness, and transition times.
//! Symbolic labels (`"RED"`, `"BRIGHT"`, `"SHORT"`) are resolved to the
//! numeric values the bridge expects through a JSON settings document.
//!
//! # Supported Features
//!
//! - **Power control**: Turn light groups on and off with transitions
//! - **Lighting control**: CIE xy color, brightness 0-254, transition times
//! - **Label resolution**: Settings-backed lookup with silent defaults
//! - **Group queries**: Read back a group's current state
//!
//! # Configuration
//!
//! Settings are loaded once from a JSON document and are read-only
//! afterwards. Loading fails fast on a bad path or malformed document;
//! label lookups after that never fail, they fall back to defaults.
//!
//! ```json
//! {
//!     "bridge_ip": "192.168.1.2",
//!     "app_key": "lumen-app-key",
//!     "color_coordinates": { "RED": [0.675, 0.322] },
//!     "brightness_levels": { "DIM": 100, "BRIGHT": 200 },
//!     "default_brightness": 150,
//!     "transition_times": { "NONE": 0, "SHORT": 4 }
//! }
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use lumen_lib::types::GroupId;
//! use lumen_lib::{Bridge, LightController, Settings};
//!
//! #[tokio::main]
//! async fn main() -> lumen_lib::Result<()> {
//!     // Fatal on a bad path or malformed JSON
//!     let settings = Settings::load("config.json")?;
//!
//!     let bridge = Bridge::from_settings(&settings)?;
//!     let controller = LightController::new(&settings, bridge);
//!
//!     controller.turn_on(GroupId::all()).await?;
//!     controller
//!         .set_lighting(GroupId::all(), "RED", "BRIGHT", "SHORT")
//!         .await?;
//!     controller.turn_off(GroupId::all()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Driving the Bridge Directly
//!
//! The typed command layer is available without the label translation:
//!
//! ```no_run
//! use lumen_lib::command::GroupAction;
//! use lumen_lib::types::{Brightness, GroupId, TransitionTime, XyColor};
//! use lumen_lib::Bridge;
//!
//! #[tokio::main]
//! async fn main() -> lumen_lib::Result<()> {
//!     let bridge = Bridge::http("192.168.1.2", "lumen-app-key").build()?;
//!
//!     let action = GroupAction::turn_on()
//!         .with_xy(XyColor::new(0.675, 0.322)?)
//!         .with_brightness(Brightness::new(200)?)
//!         .with_transition(TransitionTime::from_decis(4));
//!     bridge.set_group(GroupId::all(), &action).await?;
//!
//!     Ok(())
//! }
//! ```

mod bridge;
pub mod command;
mod controller;
pub mod error;
pub mod protocol;
pub mod response;
pub mod settings;
pub mod types;

pub use bridge::{Bridge, BridgeBuilder};
pub use command::{Command, CommandMethod, GroupAction, GroupCommand};
pub use controller::LightController;
pub use error::{ApiError, ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{BridgeResponse, HttpClient, HttpClientBuilder, HttpConfig};
pub use response::BridgeReply;
pub use settings::Settings;
pub use types::{Brightness, GroupId, TransitionTime, XyColor};
