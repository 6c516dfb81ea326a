// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the admin and user panels.
//!
//! The `App` struct wires together the store, localization, preferences and
//! the panel components, and translates messages into side effects like
//! store calls, config persistence or toasts.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, StoreConfig};
use crate::i18n::{self, I18n};
use crate::infrastructure::{AnyStore, MemoryStore, RestStore};
use crate::ui::banner_form;
use crate::ui::banner_list;
use crate::ui::media_cache::MediaCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::slider;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    store: AnyStore,
    theme_mode: ThemeMode,
    logout_dialog_open: bool,
    /// Mounted while the admin panel is shown.
    banner_list: Option<banner_list::State>,
    /// Open create/edit form, replacing the list on the admin panel.
    banner_form: Option<banner_form::State>,
    /// Bumped after every successful save so the list refetches.
    refresh_token: u64,
    /// Mounted while the user panel is shown.
    slider: Option<slider::State>,
    media: MediaCache,
    /// Persisted application state (last upload directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("form_open", &self.banner_form.is_some())
            .field("refresh_token", &self.refresh_token)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the store adapter for this run.
///
/// A hosted store that cannot even be configured falls back to an empty
/// in-memory one so the UI still starts; the problem is logged.
fn connect_store(demo: bool) -> AnyStore {
    if demo {
        log::info!("running against the in-memory demo store");
        return MemoryStore::with_demo_content().into();
    }

    let store_config = StoreConfig::from_env();
    match RestStore::new(&store_config) {
        Ok(store) => store.into(),
        Err(err) => {
            log::error!("cannot configure the banner store: {err}");
            MemoryStore::new().into()
        }
    }
}

impl App {
    /// Builds an app around `store` with default preferences, nothing mounted.
    fn with_store(store: AnyStore, i18n: I18n, theme_mode: ThemeMode) -> Self {
        Self {
            i18n,
            screen: Screen::default(),
            store,
            theme_mode,
            logout_dialog_open: false,
            banner_list: None,
            banner_form: None,
            refresh_token: 0,
            slider: None,
            media: MediaCache::new(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Initializes application state and mounts the starting panel based on
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let language = i18n::resolve_language(
            flags.lang.as_deref(),
            config.general.language.as_deref(),
        );

        let mut app = Self::with_store(
            connect_store(flags.demo),
            I18n::new(language),
            config.general.theme_mode,
        );

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let screen = if flags.admin {
            Screen::Admin
        } else {
            Screen::User
        };
        let task = update::enter_screen(&mut app.update_context(), screen);
        (app, task)
    }

    fn title(&self) -> String {
        let panel = self.i18n.tr(self.screen.i18n_key());
        self.i18n
            .tr_with_args("window-title", &[("panel", panel.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_notification_tick(self.notifications.has_notifications()),
            subscription::create_slider_subscription(self.slider.as_ref()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            store: &self.store,
            theme_mode: &mut self.theme_mode,
            logout_dialog_open: &mut self.logout_dialog_open,
            banner_list: &mut self.banner_list,
            banner_form: &mut self.banner_form,
            slider: &mut self.slider,
            refresh_token: &mut self.refresh_token,
            media: &mut self.media,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => update::handle_header_message(&mut self.update_context(), msg),
            Message::BannerList(msg) => {
                update::handle_banner_list_message(&mut self.update_context(), msg)
            }
            Message::BannerForm(msg) => {
                update::handle_banner_form_message(&mut self.update_context(), msg)
            }
            Message::Slider(msg) => update::handle_slider_message(&mut self.update_context(), msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::MediaLoaded { url, result } => {
                self.media.complete(url, result);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            logout_dialog_open: self.logout_dialog_open,
            banner_list: self.banner_list.as_ref(),
            banner_form: self.banner_form.as_ref(),
            slider: self.slider.as_ref(),
            media: &self.media,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::banners::SaveError;
    use crate::application::port::StoreError;
    use crate::domain::{Banner, BannerId, MediaType};
    use crate::i18n::Language;
    use crate::ui::header;
    use chrono::Utc;

    fn app_on(screen: Screen) -> App {
        let mut app = App::with_store(
            MemoryStore::new().into(),
            I18n::new(Language::En),
            ThemeMode::Light,
        );
        let _ = update::enter_screen(&mut app.update_context(), screen);
        app
    }

    fn banner(id: &str) -> Banner {
        Banner {
            id: BannerId::new(id),
            title: None,
            description: None,
            media_url: format!("memory://media/banners/{id}.png"),
            media_type: MediaType::Image,
            video_url: None,
            is_active: true,
            order_index: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn panel_toggle_swaps_mounted_components() {
        let mut app = app_on(Screen::User);
        assert!(app.slider.is_some());
        assert!(app.banner_list.is_none());

        let _ = app.update(Message::Header(header::Message::TogglePanel));
        assert_eq!(app.screen, Screen::Admin);
        assert!(app.slider.is_none());
        assert!(app.banner_list.as_ref().is_some_and(|l| l.is_loading()));
    }

    #[test]
    fn window_title_names_the_panel() {
        let app = app_on(Screen::Admin);
        assert_eq!(app.title(), "Bannerboard - Admin Panel");
    }

    #[test]
    fn slider_responses_after_unmount_are_ignored() {
        let mut app = app_on(Screen::Admin);
        let _ = app.update(Message::Slider(slider::Message::Loaded(Ok(vec![banner("a")]))));
        assert!(app.slider.is_none());
        assert!(app.media.is_empty());
    }

    #[test]
    fn loaded_list_requests_thumbnails() {
        let mut app = app_on(Screen::Admin);
        let _ = app.update(Message::BannerList(banner_list::Message::Loaded(Ok(vec![
            banner("a"),
            banner("b"),
        ]))));
        assert_eq!(app.media.len(), 2);
    }

    #[test]
    fn failed_fetch_shows_error_toast() {
        let mut app = app_on(Screen::Admin);
        let _ = app.update(Message::BannerList(banner_list::Message::Loaded(Err(
            StoreError::Network("offline".into()),
        ))));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn successful_save_closes_form_and_bumps_refresh_token() {
        let mut app = app_on(Screen::Admin);
        let _ = app.update(Message::BannerList(banner_list::Message::Add));
        assert!(app.banner_form.is_some());

        let _ = app.update(Message::BannerForm(banner_form::Message::Saved(Ok(banner("new")))));
        assert!(app.banner_form.is_none());
        assert_eq!(app.refresh_token, 1);
        assert!(app.banner_list.as_ref().is_some_and(|l| l.is_loading()));
    }

    fn submit_new_banner(app: &mut App) {
        let _ = app.update(Message::BannerList(banner_list::Message::Add));
        let _ = app.update(Message::BannerForm(banner_form::Message::FilePicked(Some(
            std::path::PathBuf::from("/tmp/promo.png"),
        ))));
        let _ = app.update(Message::BannerForm(banner_form::Message::Submit));
        assert!(app.banner_form.as_ref().is_some_and(|f| f.is_saving()));
    }

    #[test]
    fn save_failure_after_leaving_panel_still_notifies() {
        let mut app = app_on(Screen::Admin);
        submit_new_banner(&mut app);

        let _ = app.update(Message::Header(header::Message::TogglePanel));
        assert!(app.banner_form.is_none());
        assert!(!app.notifications.has_notifications());

        let _ = app.update(Message::BannerForm(banner_form::Message::Saved(Err(
            SaveError::Store(StoreError::Network("offline".into())),
        ))));
        assert!(app.notifications.has_notifications());
        assert_eq!(app.refresh_token, 0);
    }

    #[test]
    fn save_success_after_leaving_panel_bumps_refresh_token() {
        let mut app = app_on(Screen::Admin);
        submit_new_banner(&mut app);
        let _ = app.update(Message::Header(header::Message::TogglePanel));

        let _ = app.update(Message::BannerForm(banner_form::Message::Saved(Ok(banner("new")))));
        assert!(app.notifications.has_notifications());
        assert_eq!(app.refresh_token, 1);
    }

    #[test]
    fn cancelled_form_does_not_refetch() {
        let mut app = app_on(Screen::Admin);
        let _ = app.update(Message::BannerList(banner_list::Message::Loaded(Ok(vec![]))));
        let _ = app.update(Message::BannerList(banner_list::Message::Add));
        let _ = app.update(Message::BannerForm(banner_form::Message::Cancel));

        assert!(app.banner_form.is_none());
        assert_eq!(app.refresh_token, 0);
        assert!(app.banner_list.as_ref().is_some_and(|l| !l.is_loading()));
    }

    #[test]
    fn theme_toggle_flips_explicit_mode() {
        let mut app = app_on(Screen::User);
        let _ = app.update(Message::Header(header::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn language_selection_retranslates() {
        let mut app = app_on(Screen::User);
        let _ = app.update(Message::Header(header::Message::SelectLanguage(Language::Es)));
        assert_eq!(app.i18n.language(), Language::Es);
    }

    #[test]
    fn logout_confirmation_closes_dialog() {
        let mut app = app_on(Screen::User);
        let _ = app.update(Message::Header(header::Message::RequestLogout));
        assert!(app.logout_dialog_open);
        let _ = app.update(Message::Header(header::Message::ConfirmLogout));
        assert!(!app.logout_dialog_open);
        assert_eq!(app.screen, Screen::User);
    }
}
