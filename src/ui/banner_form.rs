// SPDX-License-Identifier: MPL-2.0
//! Create/edit form for a single banner.
//!
//! Field values live in a plain [`Draft`] so the submit rules can be checked
//! without a renderer; the multiline description additionally keeps an Iced
//! editor buffer in sync with it. Submitting turns the draft into a
//! [`SaveRequest`] that the parent runs against the store. While that
//! request is in flight the form is `saving` and ignores further submits.

use crate::application::banners::{SaveError, SaveRequest, SaveTarget};
use crate::config::{RECOMMENDED_BANNER_HEIGHT, RECOMMENDED_BANNER_WIDTH};
use crate::domain::{Banner, BannerId, BannerRecord, MediaType, VideoSource, DEFAULT_ORDER_INDEX};
use crate::i18n::I18n;
use crate::media;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, radio, text_editor, text_input, toggler, Column, Container, Row, Space, Text,
};
use iced::{alignment::Vertical, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Validation failure keys.
pub const MEDIA_REQUIRED: &str = "form-error-media-required";
pub const VIDEO_LINK_REQUIRED: &str = "form-error-video-link-required";

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionEdited(text_editor::Action),
    MediaTypeSelected(MediaType),
    VideoSourceSelected(VideoSource),
    VideoLinkChanged(String),
    ActiveToggled(bool),
    PickFile,
    FilePicked(Option<PathBuf>),
    PreviewLoaded {
        path: PathBuf,
        result: Result<Vec<u8>, String>,
    },
    Submit,
    Cancel,
    Saved(Result<Banner, SaveError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Open a native file dialog filtered for `MediaType`.
    OpenFileDialog(MediaType),
    /// A file was picked; `load_preview` asks the parent to read it for display.
    FileChosen { path: PathBuf, load_preview: bool },
    /// The draft was rejected before anything was sent.
    Invalid(&'static str),
    Save(SaveRequest),
    Saved,
    SaveFailed(SaveError),
    Closed,
}

/// Plain field values of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub media_type: MediaType,
    pub video_source: VideoSource,
    pub video_link: String,
    pub is_active: bool,
    /// File picked in this session, uploaded on submit.
    pub picked_file: Option<PathBuf>,
    /// Media already stored for the banner being edited.
    pub existing_media_url: String,
    pub order_index: i32,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            media_type: MediaType::Image,
            video_source: VideoSource::Upload,
            video_link: String::new(),
            is_active: true,
            picked_file: None,
            existing_media_url: String::new(),
            order_index: DEFAULT_ORDER_INDEX,
        }
    }
}

impl Draft {
    /// Draft seeded from a stored banner.
    #[must_use]
    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            title: banner.title.clone().unwrap_or_default(),
            description: banner.description.clone().unwrap_or_default(),
            media_type: banner.media_type,
            video_source: banner.video_source(),
            video_link: banner.video_url.clone().unwrap_or_default(),
            is_active: banner.is_active,
            picked_file: None,
            existing_media_url: banner.media_url.clone(),
            order_index: banner.order_index,
        }
    }

    /// Whether the current mode stores its media in the bucket.
    #[must_use]
    pub fn needs_file(&self) -> bool {
        self.media_type == MediaType::Image || self.video_source == VideoSource::Upload
    }

    /// Turns the draft into a save request, or the i18n key of the problem.
    pub fn build_request(
        &self,
        target: SaveTarget,
        now: DateTime<Utc>,
    ) -> Result<SaveRequest, &'static str> {
        let (upload, video_url) = if self.needs_file() {
            if self.picked_file.is_none() && self.existing_media_url.is_empty() {
                return Err(MEDIA_REQUIRED);
            }
            (self.picked_file.clone(), None)
        } else {
            let link = self.video_link.trim();
            if link.is_empty() {
                return Err(VIDEO_LINK_REQUIRED);
            }
            (None, Some(link.to_string()))
        };

        Ok(SaveRequest {
            target,
            upload,
            record: BannerRecord {
                title: non_blank(&self.title),
                description: non_blank(&self.description),
                media_url: self.existing_media_url.clone(),
                media_type: self.media_type,
                video_url,
                is_active: self.is_active,
                order_index: self.order_index,
                updated_at: now,
            },
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What the preview area shows for a picked file.
#[derive(Debug, Clone)]
enum Preview {
    Image(Handle),
    File(String),
}

pub struct State {
    editing: Option<BannerId>,
    draft: Draft,
    description: text_editor::Content,
    preview: Option<Preview>,
    saving: bool,
    error_key: Option<&'static str>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("editing", &self.editing)
            .field("draft", &self.draft)
            .field("saving", &self.saving)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Empty form for a new banner.
    #[must_use]
    pub fn create() -> Self {
        Self {
            editing: None,
            draft: Draft::default(),
            description: text_editor::Content::new(),
            preview: None,
            saving: false,
            error_key: None,
        }
    }

    /// Form seeded from `banner`; saving updates it in place.
    #[must_use]
    pub fn edit(banner: &Banner) -> Self {
        let draft = Draft::from_banner(banner);
        Self {
            editing: Some(banner.id.clone()),
            description: text_editor::Content::with_text(&draft.description),
            draft,
            preview: None,
            saving: false,
            error_key: None,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    fn target(&self) -> SaveTarget {
        self.editing
            .clone()
            .map_or(SaveTarget::Create, SaveTarget::Update)
    }

    fn clear_picked_file(&mut self) {
        self.draft.picked_file = None;
        self.preview = None;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TitleChanged(title) => {
                self.draft.title = title;
                Event::None
            }
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                let text = self.description.text();
                self.draft.description = text.strip_suffix('\n').unwrap_or(&text).to_string();
                Event::None
            }
            Message::MediaTypeSelected(media_type) => {
                if media_type != self.draft.media_type {
                    self.draft.media_type = media_type;
                    self.clear_picked_file();
                    self.error_key = None;
                }
                Event::None
            }
            Message::VideoSourceSelected(source) => {
                if source != self.draft.video_source {
                    self.draft.video_source = source;
                    self.clear_picked_file();
                    self.error_key = None;
                }
                Event::None
            }
            Message::VideoLinkChanged(link) => {
                self.draft.video_link = link;
                Event::None
            }
            Message::ActiveToggled(is_active) => {
                self.draft.is_active = is_active;
                Event::None
            }
            Message::PickFile => {
                if self.saving {
                    Event::None
                } else {
                    Event::OpenFileDialog(self.draft.media_type)
                }
            }
            Message::FilePicked(None) => Event::None,
            Message::FilePicked(Some(path)) => {
                let load_preview =
                    self.draft.media_type == MediaType::Image && media::is_previewable_image(&path);
                self.preview = if load_preview {
                    None
                } else {
                    Some(Preview::File(file_name(&path)))
                };
                self.draft.picked_file = Some(path.clone());
                self.error_key = None;
                Event::FileChosen { path, load_preview }
            }
            Message::PreviewLoaded { path, result } => {
                if self.draft.picked_file.as_deref() != Some(path.as_path()) {
                    return Event::None;
                }
                self.preview = Some(match result {
                    Ok(bytes) => Preview::Image(Handle::from_bytes(bytes)),
                    Err(err) => {
                        log::warn!("cannot preview {}: {err}", path.display());
                        Preview::File(file_name(&path))
                    }
                });
                Event::None
            }
            Message::Submit => {
                if self.saving {
                    return Event::None;
                }
                match self.draft.build_request(self.target(), Utc::now()) {
                    Ok(request) => {
                        self.saving = true;
                        self.error_key = None;
                        Event::Save(request)
                    }
                    Err(key) => {
                        self.error_key = Some(key);
                        Event::Invalid(key)
                    }
                }
            }
            Message::Cancel => {
                if self.saving {
                    Event::None
                } else {
                    Event::Closed
                }
            }
            Message::Saved(result) => {
                self.saving = false;
                match result {
                    Ok(_) => Event::Saved,
                    Err(err) => Event::SaveFailed(err),
                }
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads a picked image so it can be shown before upload.
pub async fn read_preview(path: PathBuf) -> Result<Vec<u8>, String> {
    tokio::fs::read(&path).await.map_err(|e| e.to_string())
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let draft = &self.draft;

        let heading_key = if self.editing.is_some() {
            "edit-banner"
        } else {
            "add-banner"
        };

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr(heading_key))
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary),
            )
            .push(labelled(
                i18n.tr("title-optional"),
                text_input(&i18n.tr("title-optional"), &draft.title)
                    .on_input(Message::TitleChanged)
                    .padding(spacing::XS)
                    .into(),
            ))
            .push(labelled(
                i18n.tr("description-optional"),
                text_editor(&self.description)
                    .placeholder(i18n.tr("description-optional"))
                    .on_action(Message::DescriptionEdited)
                    .height(Length::Fixed(sizing::DESCRIPTION_EDITOR_HEIGHT))
                    .into(),
            ));

        let media_types = [MediaType::Image, MediaType::Video].into_iter().fold(
            Row::new().spacing(spacing::LG),
            |row, media_type| {
                row.push(
                    radio(
                        i18n.tr(media_type.i18n_key()),
                        media_type,
                        Some(draft.media_type),
                        Message::MediaTypeSelected,
                    )
                    .text_size(typography::BODY),
                )
            },
        );
        form = form.push(labelled(i18n.tr("media-type"), media_types.into()));

        if draft.media_type == MediaType::Video {
            let sources = Row::new()
                .spacing(spacing::LG)
                .push(
                    radio(
                        i18n.tr("upload-video"),
                        VideoSource::Upload,
                        Some(draft.video_source),
                        Message::VideoSourceSelected,
                    )
                    .text_size(typography::BODY),
                )
                .push(
                    radio(
                        i18n.tr("video-link"),
                        VideoSource::Link,
                        Some(draft.video_source),
                        Message::VideoSourceSelected,
                    )
                    .text_size(typography::BODY),
                );
            form = form.push(labelled(i18n.tr("video-option"), sources.into()));
        }

        if draft.needs_file() {
            form = form.push(self.file_section(i18n));
        } else {
            form = form.push(labelled(
                i18n.tr("video-link"),
                text_input(&i18n.tr("video-url-placeholder"), &draft.video_link)
                    .on_input(Message::VideoLinkChanged)
                    .padding(spacing::XS)
                    .into(),
            ));
        }

        form = form.push(
            toggler(draft.is_active)
                .label(i18n.tr("active"))
                .on_toggle(Message::ActiveToggled),
        );

        if let Some(key) = self.error_key {
            form = form.push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY_SM))
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::container::inline_warning),
            );
        }

        let save_label = if self.saving { "saving" } else { "save-banner" };
        let mut cancel_button = button(Text::new(i18n.tr("cancel")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);
        let mut save_button = button(Text::new(i18n.tr(save_label)).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);
        if !self.saving {
            cancel_button = cancel_button.on_press(Message::Cancel);
            save_button = save_button.on_press(Message::Submit);
        }

        form = form.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill))
                .push(cancel_button)
                .push(save_button),
        );

        Container::new(form)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }

    fn file_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let draft = &self.draft;
        let label_key = if draft.media_type == MediaType::Image {
            "upload-image"
        } else {
            "upload-video"
        };

        let mut choose_button = button(Text::new(i18n.tr("choose-file")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);
        if !self.saving {
            choose_button = choose_button.on_press(Message::PickFile);
        }

        let status = match (&draft.picked_file, draft.existing_media_url.is_empty()) {
            (Some(path), _) => file_name(path),
            (None, false) => i18n.tr("current-media"),
            (None, true) => i18n.tr("no-file-selected"),
        };

        let picker = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(choose_button)
            .push(
                Text::new(status)
                    .size(typography::BODY_SM)
                    .style(styles::text::secondary),
            );

        let mut section = Column::new().spacing(spacing::XS).push(picker);

        if draft.media_type == MediaType::Image {
            let width = RECOMMENDED_BANNER_WIDTH.to_string();
            let height = RECOMMENDED_BANNER_HEIGHT.to_string();
            section = section.push(
                Text::new(i18n.tr_with_args(
                    "recommended-size",
                    &[("width", width.as_str()), ("height", height.as_str())],
                ))
                .size(typography::CAPTION)
                .style(styles::text::secondary),
            );
        }

        match &self.preview {
            Some(Preview::Image(handle)) => {
                section = section.push(
                    Image::new(handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                        .content_fit(ContentFit::Cover),
                );
            }
            Some(Preview::File(name)) => {
                section = section.push(
                    Container::new(Text::new(format!("▶ {name}")).size(typography::BODY_SM))
                        .width(Length::Fill)
                        .padding(spacing::SM)
                        .style(styles::container::placeholder),
                );
            }
            None => {}
        }

        labelled(i18n.tr(label_key), section.into())
    }
}

fn labelled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .style(styles::text::secondary),
        )
        .push(field)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(media_type: MediaType, video_url: Option<&str>) -> Banner {
        Banner {
            id: BannerId::new("b1"),
            title: Some("Promo".into()),
            description: None,
            media_url: "memory://media/banners/old.png".into(),
            media_type,
            video_url: video_url.map(String::from),
            is_active: false,
            order_index: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn new_image_without_file_is_rejected() {
        let draft = Draft::default();
        assert_eq!(
            draft.build_request(SaveTarget::Create, Utc::now()),
            Err(MEDIA_REQUIRED)
        );
    }

    #[test]
    fn blank_text_fields_become_none() {
        let draft = Draft {
            title: "   ".into(),
            description: "\n".into(),
            picked_file: Some(PathBuf::from("/tmp/a.png")),
            ..Draft::default()
        };
        let request = draft
            .build_request(SaveTarget::Create, Utc::now())
            .expect("valid");
        assert!(request.record.title.is_none());
        assert!(request.record.description.is_none());
        assert_eq!(request.record.order_index, DEFAULT_ORDER_INDEX);
        assert!(request.record.is_active);
    }

    #[test]
    fn image_banner_never_carries_video_url() {
        let mut draft = Draft::from_banner(&stored(MediaType::Video, Some("https://v.example/1")));
        draft.media_type = MediaType::Image;

        let request = draft
            .build_request(SaveTarget::Update(BannerId::new("b1")), Utc::now())
            .expect("existing media is kept");
        assert!(request.record.video_url.is_none());
        assert!(request.upload.is_none());
        assert_eq!(request.record.media_url, "memory://media/banners/old.png");
    }

    #[test]
    fn link_mode_skips_upload() {
        let draft = Draft {
            media_type: MediaType::Video,
            video_source: VideoSource::Link,
            video_link: " https://v.example/2 ".into(),
            picked_file: Some(PathBuf::from("/tmp/ignored.mp4")),
            ..Draft::default()
        };
        let request = draft
            .build_request(SaveTarget::Create, Utc::now())
            .expect("valid");
        assert!(request.upload.is_none());
        assert_eq!(request.record.video_url.as_deref(), Some("https://v.example/2"));
    }

    #[test]
    fn link_mode_requires_a_link() {
        let draft = Draft {
            media_type: MediaType::Video,
            video_source: VideoSource::Link,
            ..Draft::default()
        };
        assert_eq!(
            draft.build_request(SaveTarget::Create, Utc::now()),
            Err(VIDEO_LINK_REQUIRED)
        );
    }

    #[test]
    fn editing_keeps_order_and_targets_the_row() {
        let state = State::edit(&stored(MediaType::Image, None));
        let request = state
            .draft()
            .build_request(state.target(), Utc::now())
            .expect("valid");
        assert_eq!(request.target, SaveTarget::Update(BannerId::new("b1")));
        assert_eq!(request.record.order_index, 4);
        assert!(!request.record.is_active);
    }

    #[test]
    fn submit_while_saving_is_ignored() {
        let mut state = State::create();
        state.update(Message::FilePicked(Some(PathBuf::from("/tmp/clip.mp4"))));

        assert!(matches!(state.update(Message::Submit), Event::Save(_)));
        assert!(state.is_saving());
        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.update(Message::Cancel), Event::None);

        let failed = state.update(Message::Saved(Err(SaveError::Read("gone".into()))));
        assert_eq!(failed, Event::SaveFailed(SaveError::Read("gone".into())));
        assert!(!state.is_saving());
    }

    #[test]
    fn invalid_submit_reports_key_without_saving() {
        let mut state = State::create();
        assert_eq!(state.update(Message::Submit), Event::Invalid(MEDIA_REQUIRED));
        assert_eq!(state.error_key(), Some(MEDIA_REQUIRED));
        assert!(!state.is_saving());
    }

    #[test]
    fn switching_media_type_discards_picked_file() {
        let mut state = State::create();
        let event = state.update(Message::FilePicked(Some(PathBuf::from("/tmp/a.png"))));
        assert_eq!(
            event,
            Event::FileChosen {
                path: PathBuf::from("/tmp/a.png"),
                load_preview: true
            }
        );

        state.update(Message::MediaTypeSelected(MediaType::Video));
        assert!(state.draft().picked_file.is_none());
    }

    #[test]
    fn stale_preview_is_ignored() {
        let mut state = State::create();
        state.update(Message::FilePicked(Some(PathBuf::from("/tmp/b.png"))));
        state.update(Message::PreviewLoaded {
            path: PathBuf::from("/tmp/a.png"),
            result: Ok(vec![1]),
        });
        assert!(state.preview.is_none());
    }

    #[test]
    fn pick_file_uses_current_media_type() {
        let mut state = State::create();
        state.update(Message::MediaTypeSelected(MediaType::Video));
        assert_eq!(
            state.update(Message::PickFile),
            Event::OpenFileDialog(MediaType::Video)
        );
    }
}
