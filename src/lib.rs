// SPDX-License-Identifier: MPL-2.0
//! `iced_waypoint` is a small destination picker built with the Iced GUI framework.
//!
//! It provides a coordinate entry screen that hands the entered latitude and
//! longitude back to the home screen as raw text, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
