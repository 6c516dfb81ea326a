// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what they need through events and actions; the
//! handlers here turn those into store calls, file dialogs, persistence and
//! toasts. Every store call runs once as an `iced::Task` and reports back
//! through a component message.

use super::persisted_state::AppState;
use super::{persistence, Message, Screen};
use crate::application::banners::{self, SaveError, SaveRequest};
use crate::application::port::{BannerStore, StoreError};
use crate::domain::{BannerId, MediaType};
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::AnyStore;
use crate::media;
use crate::ui::banner_form::{self, Event as BannerFormEvent};
use crate::ui::banner_list::{self, Action as BannerListAction};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::media_cache::MediaCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::slider;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub store: &'a AnyStore,
    pub theme_mode: &'a mut ThemeMode,
    pub logout_dialog_open: &'a mut bool,
    pub banner_list: &'a mut Option<banner_list::State>,
    pub banner_form: &'a mut Option<banner_form::State>,
    pub slider: &'a mut Option<slider::State>,
    pub refresh_token: &'a mut u64,
    pub media: &'a mut MediaCache,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

// =============================================================================
// Panels
// =============================================================================

/// Switches to `screen`, unmounting the other panel's components.
///
/// Dropping the slider drops its autoplay timer; late responses addressed
/// to an unmounted component are ignored.
pub fn enter_screen(ctx: &mut UpdateContext<'_>, screen: Screen) -> Task<Message> {
    *ctx.screen = screen;
    *ctx.banner_form = None;
    match screen {
        Screen::Admin => {
            *ctx.slider = None;
            let mut list = banner_list::State::new();
            let action = list.refresh(*ctx.refresh_token);
            *ctx.banner_list = Some(list);
            run_list_action(ctx, action)
        }
        Screen::User => {
            *ctx.banner_list = None;
            *ctx.slider = Some(slider::State::new());
            fetch_banners(ctx.store, true)
        }
    }
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.logout_dialog_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::TogglePanel => {
            let next = ctx.screen.toggled();
            enter_screen(ctx, next)
        }
        HeaderEvent::LanguageSelected(language) => {
            ctx.i18n.set_language(language);
            persistence::persist_preferences(language, *ctx.theme_mode, ctx.notifications);
            Task::none()
        }
        HeaderEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            let language = ctx.i18n.language();
            persistence::persist_preferences(language, *ctx.theme_mode, ctx.notifications);
            Task::none()
        }
        HeaderEvent::LoggedOut => {
            log::info!("logout confirmed");
            Task::none()
        }
    }
}

// =============================================================================
// Banner list
// =============================================================================

pub fn handle_banner_list_message(
    ctx: &mut UpdateContext<'_>,
    message: banner_list::Message,
) -> Task<Message> {
    let Some(list) = ctx.banner_list.as_mut() else {
        return Task::none();
    };
    let loaded = matches!(message, banner_list::Message::Loaded(Ok(_)));
    let action = list.update(message);

    let downloads = if loaded {
        let urls = ctx.media.request(list.banners());
        download_media(ctx.store, urls)
    } else {
        Task::none()
    };

    Task::batch([run_list_action(ctx, action), downloads])
}

fn run_list_action(ctx: &mut UpdateContext<'_>, action: BannerListAction) -> Task<Message> {
    match action {
        BannerListAction::None => Task::none(),
        BannerListAction::Fetch => fetch_banners(ctx.store, false),
        BannerListAction::SetActive { id, is_active } => set_active(ctx.store, id, is_active),
        BannerListAction::Delete(id) => delete_banner(ctx.store, id),
        BannerListAction::Deleted => {
            ctx.notifications.push(Notification::success("banner-deleted"));
            fetch_banners(ctx.store, false)
        }
        BannerListAction::Edit(banner) => {
            *ctx.banner_form = Some(banner_form::State::edit(&banner));
            Task::none()
        }
        BannerListAction::Add => {
            *ctx.banner_form = Some(banner_form::State::create());
            Task::none()
        }
        BannerListAction::Failed(err) => {
            report_store_error(ctx.notifications, err);
            Task::none()
        }
    }
}

// =============================================================================
// Banner form
// =============================================================================

pub fn handle_banner_form_message(
    ctx: &mut UpdateContext<'_>,
    message: banner_form::Message,
) -> Task<Message> {
    let Some(form) = ctx.banner_form.as_mut() else {
        // The form was unmounted while its save was in flight.
        return match message {
            banner_form::Message::Saved(Ok(_)) => banner_saved(ctx),
            banner_form::Message::Saved(Err(err)) => {
                report_save_error(ctx.notifications, &err);
                Task::none()
            }
            _ => Task::none(),
        };
    };

    match form.update(message) {
        BannerFormEvent::None => Task::none(),
        BannerFormEvent::OpenFileDialog(media_type) => {
            open_media_dialog(ctx.i18n, media_type, ctx.persisted.last_upload_directory.clone())
        }
        BannerFormEvent::FileChosen { path, load_preview } => {
            ctx.persisted.set_last_upload_directory_from_file(&path);
            persistence::persist_app_state(ctx.persisted, ctx.notifications);
            if load_preview {
                load_preview_task(path)
            } else {
                Task::none()
            }
        }
        BannerFormEvent::Invalid(key) => {
            ctx.notifications.push(Notification::warning(key));
            Task::none()
        }
        BannerFormEvent::Save(request) => save_banner(ctx.store, request),
        BannerFormEvent::Saved => {
            *ctx.banner_form = None;
            banner_saved(ctx)
        }
        BannerFormEvent::SaveFailed(err) => {
            report_save_error(ctx.notifications, &err);
            Task::none()
        }
        BannerFormEvent::Closed => {
            *ctx.banner_form = None;
            Task::none()
        }
    }
}

/// Announces a stored banner and refetches the list if it is mounted.
fn banner_saved(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.push(Notification::success("banner-saved"));
    *ctx.refresh_token += 1;
    let token = *ctx.refresh_token;
    let action = ctx
        .banner_list
        .as_mut()
        .map_or(BannerListAction::None, |list| list.refresh(token));
    run_list_action(ctx, action)
}

fn report_save_error(notifications: &mut notifications::Manager, err: &SaveError) {
    log::error!("failed to save banner: {err}");
    notifications.push(Notification::error("error-occurred"));
}

fn open_media_dialog(
    i18n: &I18n,
    media_type: MediaType,
    last_directory: Option<PathBuf>,
) -> Task<Message> {
    let filter_name = i18n.tr(media_type.i18n_key());
    let extensions = media::dialog_extensions(media_type);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter_name, extensions);

            // Use last upload directory if available
            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        |path| Message::BannerForm(banner_form::Message::FilePicked(path)),
    )
}

fn load_preview_task(path: PathBuf) -> Task<Message> {
    let target = path.clone();
    Task::perform(banner_form::read_preview(path), move |result| {
        Message::BannerForm(banner_form::Message::PreviewLoaded {
            path: target,
            result,
        })
    })
}

// =============================================================================
// Slider
// =============================================================================

pub fn handle_slider_message(
    ctx: &mut UpdateContext<'_>,
    message: slider::Message,
) -> Task<Message> {
    let Some(slider) = ctx.slider.as_mut() else {
        return Task::none();
    };
    let loaded = matches!(message, slider::Message::Loaded(Ok(_)));
    slider.update(message);

    if loaded {
        let urls = ctx.media.request(slider.banners());
        download_media(ctx.store, urls)
    } else {
        Task::none()
    }
}

// =============================================================================
// Store tasks
// =============================================================================

/// Lists banners for the admin list (`only_active = false`) or the slider.
fn fetch_banners(store: &AnyStore, only_active: bool) -> Task<Message> {
    let store = store.clone();
    Task::perform(
        async move { banners::load_banners(&store, only_active).await },
        move |result| {
            if only_active {
                Message::Slider(slider::Message::Loaded(result))
            } else {
                Message::BannerList(banner_list::Message::Loaded(result))
            }
        },
    )
}

fn set_active(store: &AnyStore, id: BannerId, is_active: bool) -> Task<Message> {
    let store = store.clone();
    let target = id.clone();
    Task::perform(
        async move { banners::set_active(&store, target, is_active).await },
        move |result| {
            Message::BannerList(banner_list::Message::ToggleFinished {
                id,
                result,
            })
        },
    )
}

fn delete_banner(store: &AnyStore, id: BannerId) -> Task<Message> {
    let store = store.clone();
    let target = id.clone();
    Task::perform(
        async move { banners::delete_banner(&store, target).await },
        move |result| {
            Message::BannerList(banner_list::Message::DeleteFinished {
                id,
                result,
            })
        },
    )
}

fn save_banner(store: &AnyStore, request: SaveRequest) -> Task<Message> {
    let store = store.clone();
    Task::perform(
        async move { banners::save_banner(&store, request).await },
        |result| Message::BannerForm(banner_form::Message::Saved(result)),
    )
}

fn download_media(store: &AnyStore, urls: Vec<String>) -> Task<Message> {
    Task::batch(urls.into_iter().map(|url| {
        let store = store.clone();
        Task::perform(
            async move {
                let result = store.download(&url).await;
                (url, result)
            },
            |(url, result)| Message::MediaLoaded { url, result },
        )
    }))
}

fn report_store_error(notifications: &mut notifications::Manager, err: StoreError) {
    log::error!("store request failed: {err}");
    notifications.push(Notification::error(Error::from(err).i18n_key()));
}
