// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and the store port.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`banners`]: Banner use cases driven by the admin and public views
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer calls the use cases through `iced::Task`
//!
//! # Example
//!
//! ```ignore
//! use bannerboard::application::banners;
//! use bannerboard::infrastructure::MemoryStore;
//!
//! let store = MemoryStore::with_demo_content();
//! let active = banners::load_banners(&store, true).await?;
//! ```

pub mod banners;
pub mod port;
