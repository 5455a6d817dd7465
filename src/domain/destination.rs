// SPDX-License-Identifier: MPL-2.0
//! The result payload handed from the coordinate entry screen to its caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw latitude/longitude pair exactly as the user typed it.
///
/// The two fields are the external contract of the entry screen: their serde
/// names (`latitude`, `longitude`) are stable keys the caller relies on. The
/// strings are never parsed, trimmed, or validated here; interpreting them is
/// the receiver's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationFields {
    pub latitude: String,
    pub longitude: String,
}

impl fmt::Display for DestinationFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
