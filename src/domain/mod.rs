// SPDX-License-Identifier: MPL-2.0
//! Domain types shared between screens.

pub mod destination;

pub use destination::DestinationFields;
