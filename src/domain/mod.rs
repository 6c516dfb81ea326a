// SPDX-License-Identifier: MPL-2.0
//! Domain layer - banner records and their write payloads.
//!
//! These types carry no UI or transport dependencies beyond the serde
//! derives needed to match the store's JSON rows.
//!
//! # Modules
//!
//! - [`banner`]: [`Banner`](banner::Banner), [`BannerRecord`](banner::BannerRecord),
//!   [`BannerPatch`](banner::BannerPatch), [`MediaType`](banner::MediaType)

pub mod banner;

pub use banner::{
    Banner, BannerId, BannerPatch, BannerRecord, MediaType, VideoSource, DEFAULT_ORDER_INDEX,
};
