// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light group commands.
//!
//! A [`GroupAction`] is the ephemeral state-change payload for a group of
//! lights. It is constructed fresh for every user action, carries only the
//! fields that action touches, and has no identity beyond the single
//! network call it parameterizes.

use serde::Serialize;

use crate::command::{Command, CommandMethod};
use crate::types::{Brightness, GroupId, TransitionTime, XyColor};

/// A state change to apply to every light in a group.
///
/// Fields that are not set are omitted from the wire payload, so the bridge
/// leaves the corresponding light attributes untouched.
///
/// # Examples
///
/// ```
/// use lumen_lib::command::GroupAction;
/// use lumen_lib::types::{Brightness, TransitionTime, XyColor};
///
/// // Turn on over 400 ms
/// let on = GroupAction::turn_on().with_transition(TransitionTime::from_decis(4));
/// assert_eq!(on.on(), Some(true));
///
/// // Recolor without touching the power state
/// let recolor = GroupAction::new()
///     .with_xy(XyColor::new(0.675, 0.322).unwrap())
///     .with_brightness(Brightness::new(200).unwrap());
/// assert_eq!(recolor.on(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xy: Option<XyColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitiontime: Option<TransitionTime>,
}

impl GroupAction {
    /// Creates an empty action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an action that turns the group on.
    #[must_use]
    pub fn turn_on() -> Self {
        Self::new().with_on(true)
    }

    /// Creates an action that turns the group off.
    #[must_use]
    pub fn turn_off() -> Self {
        Self::new().with_on(false)
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Sets the color point.
    #[must_use]
    pub fn with_xy(mut self, xy: XyColor) -> Self {
        self.xy = Some(xy);
        self
    }

    /// Sets the brightness.
    #[must_use]
    pub fn with_brightness(mut self, bri: Brightness) -> Self {
        self.bri = Some(bri);
        self
    }

    /// Sets the transition time.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionTime) -> Self {
        self.transitiontime = Some(transition);
        self
    }

    /// Returns the power state, if set.
    #[must_use]
    pub fn on(&self) -> Option<bool> {
        self.on
    }

    /// Returns the color point, if set.
    #[must_use]
    pub fn xy(&self) -> Option<XyColor> {
        self.xy
    }

    /// Returns the brightness, if set.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.bri
    }

    /// Returns the transition time, if set.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionTime> {
        self.transitiontime
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on.is_none()
            && self.xy.is_none()
            && self.bri.is_none()
            && self.transitiontime.is_none()
    }
}

/// Command to control or query a light group.
///
/// # Examples
///
/// ```
/// use lumen_lib::command::{Command, GroupAction, GroupCommand};
/// use lumen_lib::types::GroupId;
///
/// let cmd = GroupCommand::set(GroupId::all(), GroupAction::turn_on());
/// assert_eq!(cmd.path(), "groups/0/action");
///
/// let query = GroupCommand::query(GroupId::new(3));
/// assert_eq!(query.path(), "groups/3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCommand {
    /// Query group attributes and state.
    Get {
        /// The group to query.
        group: GroupId,
    },
    /// Apply an action to the group's lights.
    Set {
        /// The group to control.
        group: GroupId,
        /// The state change to apply.
        action: GroupAction,
    },
}

impl GroupCommand {
    /// Creates a command applying an action to a group.
    #[must_use]
    pub fn set(group: GroupId, action: GroupAction) -> Self {
        Self::Set { group, action }
    }

    /// Creates a command querying a group's state.
    #[must_use]
    pub const fn query(group: GroupId) -> Self {
        Self::Get { group }
    }
}

impl Command for GroupCommand {
    fn path(&self) -> String {
        match self {
            Self::Get { group } => format!("groups/{group}"),
            Self::Set { group, .. } => format!("groups/{group}/action"),
        }
    }

    fn method(&self) -> CommandMethod {
        match self {
            Self::Get { .. } => CommandMethod::Get,
            Self::Set { .. } => CommandMethod::Put,
        }
    }

    fn body(&self) -> Option<serde_json::Value> {
        match self {
            Self::Get { .. } => None,
            // Serialization of plain option fields cannot fail
            Self::Set { action, .. } => serde_json::to_value(action).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_omits_unset_fields() {
        let action = GroupAction::turn_on();
        assert_eq!(serde_json::to_value(&action).unwrap(), json!({"on": true}));
    }

    #[test]
    fn action_full_payload() {
        let action = GroupAction::new()
            .with_on(true)
            .with_xy(XyColor::new(0.675, 0.322).unwrap())
            .with_brightness(Brightness::new(200).unwrap())
            .with_transition(TransitionTime::from_decis(4));

        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "on": true,
                "xy": [0.675, 0.322],
                "bri": 200,
                "transitiontime": 4
            })
        );
    }

    #[test]
    fn action_is_empty() {
        assert!(GroupAction::new().is_empty());
        assert!(!GroupAction::turn_off().is_empty());
    }

    #[test]
    fn action_accessors() {
        let action = GroupAction::turn_off().with_transition(TransitionTime::ZERO);
        assert_eq!(action.on(), Some(false));
        assert_eq!(action.transition(), Some(TransitionTime::ZERO));
        assert_eq!(action.xy(), None);
        assert_eq!(action.brightness(), None);
    }

    #[test]
    fn set_command_body_matches_action() {
        let cmd = GroupCommand::set(
            GroupId::all(),
            GroupAction::turn_off().with_transition(TransitionTime::from_decis(4)),
        );
        assert_eq!(
            cmd.body().unwrap(),
            json!({"on": false, "transitiontime": 4})
        );
    }
}
