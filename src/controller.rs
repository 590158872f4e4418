// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Label-driven light control.
//!
//! The [`LightController`] is the translation layer between symbolic labels
//! and the numeric fields the bridge expects: it resolves each labeled
//! parameter through the [`Settings`] store and issues exactly one network
//! write per logical action. There are no retries and no partial-failure
//! handling beyond what the bridge protocol offers natively.

use crate::bridge::Bridge;
use crate::command::GroupAction;
use crate::error::Error;
use crate::protocol::{HttpClient, Protocol};
use crate::response::BridgeReply;
use crate::settings::{DEFAULT_BRIGHTNESS_LABEL, Settings};
use crate::types::GroupId;

/// Default transition label for turning lights on and changing settings.
pub const DEFAULT_TRANSITION_LABEL: &str = "SHORT";
/// Default transition label for turning lights off.
pub const OFF_TRANSITION_LABEL: &str = "NONE";

/// Translates labeled lighting intents into bridge commands.
///
/// Borrows the settings store and exclusively owns the bridge handle. The
/// controller is the only collaborator that writes to the bridge.
///
/// # Examples
///
/// ```no_run
/// use lumen_lib::types::GroupId;
/// use lumen_lib::{Bridge, LightController, Settings};
///
/// # async fn example() -> lumen_lib::Result<()> {
/// let settings = Settings::load("config.json")?;
/// let bridge = Bridge::from_settings(&settings)?;
/// let controller = LightController::new(&settings, bridge);
///
/// controller.turn_on(GroupId::all()).await?;
/// controller
///     .set_lighting(GroupId::all(), "RED", "VERY_BRIGHT", "VERY_SHORT")
///     .await?;
/// controller.turn_off(GroupId::all()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LightController<'s, P: Protocol = HttpClient> {
    settings: &'s Settings,
    bridge: Bridge<P>,
}

impl<'s, P: Protocol> LightController<'s, P> {
    /// Creates a controller over the given settings and bridge.
    #[must_use]
    pub fn new(settings: &'s Settings, bridge: Bridge<P>) -> Self {
        Self { settings, bridge }
    }

    /// Returns the settings store.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Returns the bridge handle.
    #[must_use]
    pub fn bridge(&self) -> &Bridge<P> {
        &self.bridge
    }

    /// Turns on a group of lights with the default `"SHORT"` transition.
    ///
    /// # Errors
    ///
    /// Returns error if the network write fails or the bridge rejects it.
    pub async fn turn_on(&self, group: GroupId) -> Result<BridgeReply, Error> {
        self.turn_on_with(group, DEFAULT_TRANSITION_LABEL).await
    }

    /// Turns on a group of lights with a labeled transition time.
    ///
    /// An unknown label resolves to an instant transition.
    ///
    /// # Errors
    ///
    /// Returns error if the network write fails or the bridge rejects it.
    pub async fn turn_on_with(
        &self,
        group: GroupId,
        transition_label: &str,
    ) -> Result<BridgeReply, Error> {
        let transition = self.settings.transition_time(transition_label);
        tracing::info!(group = %group, %transition, "Turning lights on");
        self.bridge
            .set_group(group, &GroupAction::turn_on().with_transition(transition))
            .await
    }

    /// Turns off a group of lights with the default `"NONE"` transition.
    ///
    /// # Errors
    ///
    /// Returns error if the network write fails or the bridge rejects it.
    pub async fn turn_off(&self, group: GroupId) -> Result<BridgeReply, Error> {
        self.turn_off_with(group, OFF_TRANSITION_LABEL).await
    }

    /// Turns off a group of lights with a labeled transition time.
    ///
    /// # Errors
    ///
    /// Returns error if the network write fails or the bridge rejects it.
    pub async fn turn_off_with(
        &self,
        group: GroupId,
        transition_label: &str,
    ) -> Result<BridgeReply, Error> {
        let transition = self.settings.transition_time(transition_label);
        tracing::info!(group = %group, %transition, "Turning lights off");
        self.bridge
            .set_group(group, &GroupAction::turn_off().with_transition(transition))
            .await
    }

    /// Applies labeled color, brightness, and transition settings to a
    /// group in one write.
    ///
    /// An unknown brightness label falls back to the configured default
    /// brightness and an unknown transition label to an instant transition;
    /// an undefined color is a configuration error.
    ///
    /// # Errors
    ///
    /// Returns error if the color is not defined, the network write fails,
    /// or the bridge rejects it.
    pub async fn set_lighting(
        &self,
        group: GroupId,
        color_label: &str,
        brightness_label: &str,
        transition_label: &str,
    ) -> Result<BridgeReply, Error> {
        let action = GroupAction::new()
            .with_xy(self.settings.color_coordinates(color_label)?)
            .with_brightness(self.settings.brightness(brightness_label))
            .with_transition(self.settings.transition_time(transition_label));

        tracing::info!(
            group = %group,
            color = color_label,
            brightness = brightness_label,
            transition = transition_label,
            "Applying lighting settings"
        );
        self.bridge.set_group(group, &action).await
    }

    /// Applies a labeled color with the default brightness and transition.
    ///
    /// # Errors
    ///
    /// Returns error if the color is not defined, the network write fails,
    /// or the bridge rejects it.
    pub async fn set_color(
        &self,
        group: GroupId,
        color_label: &str,
    ) -> Result<BridgeReply, Error> {
        self.set_lighting(
            group,
            color_label,
            DEFAULT_BRIGHTNESS_LABEL,
            DEFAULT_TRANSITION_LABEL,
        )
        .await
    }

    /// Sets a group's brightness from a raw 0-254 level.
    ///
    /// The level is snapped to the nearest configured threshold label and
    /// the label's brightness is sent with the default transition. This
    /// matches slider-style input, where the raw value selects a named
    /// level rather than being forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns error if the network write fails or the bridge rejects it.
    pub async fn set_brightness_level(
        &self,
        group: GroupId,
        level: u8,
    ) -> Result<BridgeReply, Error> {
        let label = self.settings.brightness_label_for(level);
        let action = GroupAction::new()
            .with_brightness(self.settings.brightness(label))
            .with_transition(self.settings.transition_time(DEFAULT_TRANSITION_LABEL));

        tracing::info!(group = %group, level, label, "Setting brightness level");
        self.bridge.set_group(group, &action).await
    }
}
