// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hue bridge command definitions.
//!
//! This module provides typed representations of the REST calls the bridge
//! accepts. A command names a resource path below the application root
//! (`/api/<app key>/`), an HTTP method, and an optional JSON body.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example |
//! |-------------|---------|---------|
//! | [`GroupCommand`] | Control or query a light group | Set `on`/`xy`/`bri` |
//!
//! # Examples
//!
//! ```
//! use lumen_lib::command::{Command, CommandMethod, GroupAction, GroupCommand};
//! use lumen_lib::types::{GroupId, TransitionTime};
//!
//! let cmd = GroupCommand::set(
//!     GroupId::all(),
//!     GroupAction::turn_on().with_transition(TransitionTime::from_decis(4)),
//! );
//!
//! assert_eq!(cmd.path(), "groups/0/action");
//! assert_eq!(cmd.method(), CommandMethod::Put);
//! ```

mod group;

pub use group::{GroupAction, GroupCommand};

/// HTTP method a command is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMethod {
    /// Read a resource.
    Get,
    /// Write a resource.
    Put,
}

/// A command that can be sent to a Hue bridge.
///
/// Commands are serialized to the bridge's REST format for transmission over
/// HTTP.
pub trait Command {
    /// Returns the resource path relative to the application root.
    ///
    /// For example, `"groups/0/action"` or `"groups/3"`.
    fn path(&self) -> String;

    /// Returns the HTTP method for this command.
    fn method(&self) -> CommandMethod;

    /// Returns the JSON body, if any.
    ///
    /// Query commands carry no body.
    fn body(&self) -> Option<serde_json::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupId;

    #[test]
    fn set_command_shape() {
        let cmd = GroupCommand::set(GroupId::new(2), GroupAction::turn_off());
        assert_eq!(cmd.path(), "groups/2/action");
        assert_eq!(cmd.method(), CommandMethod::Put);
        assert!(cmd.body().is_some());
    }

    #[test]
    fn query_command_shape() {
        let cmd = GroupCommand::query(GroupId::all());
        assert_eq!(cmd.path(), "groups/0");
        assert_eq!(cmd.method(), CommandMethod::Get);
        assert!(cmd.body().is_none());
    }
}
