// SPDX-License-Identifier: MPL-2.0
//! Local media files picked for upload.
//!
//! Naming of uploaded objects, content-type detection and file-dialog
//! filters for the banner form.

use crate::domain::MediaType;
use std::path::Path;
use uuid::Uuid;

/// Folder inside the media bucket holding banner uploads.
pub const UPLOAD_FOLDER: &str = "banners";

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi"];
}

fn raw_extension(path: &Path) -> Option<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

/// Extension of `path`, lowercased. `None` when the file name has no dot.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    raw_extension(path).map(str::to_ascii_lowercase)
}

/// Object path for a new upload: `banners/<uuid>.<ext>`.
///
/// The extension keeps its original case. Files without an extension are
/// stored as `banners/<uuid>`.
#[must_use]
pub fn upload_path(file: &Path) -> String {
    let id = Uuid::new_v4();
    match raw_extension(file) {
        Some(ext) => format!("{UPLOAD_FOLDER}/{id}.{ext}"),
        None => format!("{UPLOAD_FOLDER}/{id}"),
    }
}

/// MIME type sent with an upload, derived from the file extension.
#[must_use]
pub fn content_type(file: &Path) -> &'static str {
    match extension_of(file).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("mp4" | "m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}

/// Extensions offered by the file dialog for `media_type`.
#[must_use]
pub fn dialog_extensions(media_type: MediaType) -> &'static [&'static str] {
    match media_type {
        MediaType::Image => extensions::IMAGE_EXTENSIONS,
        MediaType::Video => extensions::VIDEO_EXTENSIONS,
    }
}

/// Whether `path` looks like an image the UI can preview.
#[must_use]
pub fn is_previewable_image(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn upload_path_keeps_original_extension() {
        let path = upload_path(&PathBuf::from("/tmp/Promo.PNG"));
        assert!(path.starts_with("banners/"));
        assert!(path.ends_with(".PNG"));
        let stem = path
            .trim_start_matches("banners/")
            .trim_end_matches(".PNG");
        assert!(Uuid::parse_str(stem).is_ok());
        assert_eq!(content_type(Path::new("/tmp/Promo.PNG")), "image/png");
    }

    #[test]
    fn upload_path_without_extension_has_no_dot() {
        let path = upload_path(&PathBuf::from("/tmp/README"));
        let name = path.trim_start_matches("banners/");
        assert!(!name.contains('.'));
        assert!(Uuid::parse_str(name).is_ok());
    }

    #[test]
    fn upload_paths_are_unique() {
        let file = PathBuf::from("a.jpg");
        assert_ne!(upload_path(&file), upload_path(&file));
    }

    #[test]
    fn content_type_from_extension() {
        assert_eq!(content_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(content_type(Path::new("clip.mov")), "video/quicktime");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    #[test]
    fn dialog_filters_follow_media_type() {
        assert!(dialog_extensions(MediaType::Image).contains(&"png"));
        assert!(dialog_extensions(MediaType::Video).contains(&"webm"));
        assert!(!dialog_extensions(MediaType::Video).contains(&"png"));
    }

    #[test]
    fn only_images_are_previewable() {
        assert!(is_previewable_image(Path::new("x.webp")));
        assert!(!is_previewable_image(Path::new("x.mp4")));
        assert!(!is_previewable_image(Path::new("x")));
    }
}
