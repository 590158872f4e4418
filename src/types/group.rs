// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light group addressing.

use std::fmt;

/// Numeric address of a light group on the bridge.
///
/// Group 0 is the bridge's built-in group containing every light.
///
/// # Examples
///
/// ```
/// use lumen_lib::types::GroupId;
///
/// let all = GroupId::all();
/// assert!(all.is_all_lights());
///
/// let living_room = GroupId::new(3);
/// assert_eq!(living_room.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u16);

impl GroupId {
    /// Creates a group id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the group addressing every light connected to the bridge.
    #[must_use]
    pub const fn all() -> Self {
        Self(0)
    }

    /// Returns the numeric group address.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns true if this is the all-lights group.
    #[must_use]
    pub const fn is_all_lights(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for GroupId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_all_lights() {
        assert!(GroupId::all().is_all_lights());
        assert!(!GroupId::new(1).is_all_lights());
    }

    #[test]
    fn group_display() {
        assert_eq!(GroupId::new(7).to_string(), "7");
    }
}
