// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Panels
//!
//! - [`pages`] - Admin and user page shells
//! - [`banner_list`] - Admin list with activate/edit/delete actions
//! - [`banner_form`] - Create/edit form with media upload
//! - [`slider`] - Auto-advancing public slider
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Panel switch, language picker, theme toggle and logout
//! - [`dialog`] - Modal confirmation dialog
//! - [`media_cache`] - Downloaded banner images
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod banner_form;
pub mod banner_list;
pub mod design_tokens;
pub mod dialog;
pub mod header;
pub mod media_cache;
pub mod notifications;
pub mod pages;
pub mod slider;
pub mod styles;
pub mod theming;
