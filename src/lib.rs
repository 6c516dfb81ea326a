// SPDX-License-Identifier: MPL-2.0
//! `bannerboard` manages promotional banners and shows them to visitors,
//! built with the Iced GUI framework.
//!
//! The admin panel creates, edits, activates and deletes banner records kept
//! in a hosted table and object store; the user panel renders the active
//! ones as an auto-advancing slider. Translations use Fluent and user
//! preferences are kept in a small TOML file.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
