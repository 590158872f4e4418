// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition time for light state changes.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Duration of a light state transition, in deciseconds.
///
/// The bridge's `transitiontime` field counts in multiples of 100 ms. A
/// value of 4 (the bridge default) is 400 ms; 0 switches instantly.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lumen_lib::types::TransitionTime;
///
/// let t = TransitionTime::from_decis(15);
/// assert_eq!(t.as_duration(), Duration::from_millis(1500));
///
/// assert_eq!(TransitionTime::ZERO.decis(), 0);
/// assert_eq!(TransitionTime::from_duration(Duration::from_secs(2)).decis(), 20);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TransitionTime(u16);

impl TransitionTime {
    /// An instant transition.
    pub const ZERO: Self = Self(0);

    /// Creates a transition time from deciseconds.
    #[must_use]
    pub const fn from_decis(decis: u16) -> Self {
        Self(decis)
    }

    /// Creates a transition time from a duration, rounded up to the next
    /// decisecond and saturating at the bridge maximum.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_duration(duration: Duration) -> Self {
        let decis = duration.as_millis().div_ceil(100).min(u128::from(u16::MAX));
        // Safe: capped at u16::MAX above
        Self(decis as u16)
    }

    /// Returns the transition time in deciseconds.
    #[must_use]
    pub const fn decis(&self) -> u16 {
        self.0
    }

    /// Returns the transition time as a duration.
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.0) * 100)
    }

    /// Returns true if the transition is instant.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TransitionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ds", self.0)
    }
}

impl From<u16> for TransitionTime {
    fn from(decis: u16) -> Self {
        Self(decis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_from_decis() {
        assert_eq!(TransitionTime::from_decis(4).decis(), 4);
        assert_eq!(TransitionTime::ZERO.decis(), 0);
    }

    #[test]
    fn transition_from_duration() {
        assert_eq!(
            TransitionTime::from_duration(Duration::from_millis(400)).decis(),
            4
        );
        assert_eq!(
            TransitionTime::from_duration(Duration::from_millis(450)).decis(),
            5
        );
        assert_eq!(
            TransitionTime::from_duration(Duration::from_secs(86400)).decis(),
            u16::MAX
        );
    }

    #[test]
    fn transition_as_duration() {
        assert_eq!(
            TransitionTime::from_decis(15).as_duration(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn transition_is_instant() {
        assert!(TransitionTime::ZERO.is_instant());
        assert!(!TransitionTime::from_decis(1).is_instant());
    }

    #[test]
    fn transition_serializes_as_number() {
        let t = TransitionTime::from_decis(10);
        assert_eq!(serde_json::to_value(t).unwrap(), serde_json::json!(10));
    }

    #[test]
    fn transition_display() {
        assert_eq!(TransitionTime::from_decis(4).to_string(), "4ds");
    }
}
