// SPDX-License-Identifier: MPL-2.0
//! End-to-end admin flows driven through the components and use cases,
//! against the in-memory store.

use bannerboard::application::banners::{self, SaveTarget};
use bannerboard::application::port::{BannerStore, StoreError, MEDIA_BUCKET};
use bannerboard::domain::{BannerId, MediaType, VideoSource};
use bannerboard::infrastructure::memory_store::CallCounts;
use bannerboard::infrastructure::MemoryStore;
use bannerboard::ui::banner_form::{self, Draft};
use bannerboard::ui::banner_list::{self, Action};
use bannerboard::ui::slider;
use chrono::Utc;
use std::path::PathBuf;
use tempfile::tempdir;

/// Runs the store call a list action asks for and feeds the result back.
async fn settle(store: &MemoryStore, list: &mut banner_list::State, action: Action) -> Action {
    match action {
        Action::Fetch | Action::Deleted => {
            let result = banners::load_banners(store, false).await;
            list.update(banner_list::Message::Loaded(result))
        }
        Action::SetActive { id, is_active } => {
            let result = banners::set_active(store, id.clone(), is_active).await;
            list.update(banner_list::Message::ToggleFinished { id, result })
        }
        Action::Delete(id) => {
            let result = banners::delete_banner(store, id.clone()).await;
            list.update(banner_list::Message::DeleteFinished { id, result })
        }
        other => other,
    }
}

/// Drives `action` until the list has nothing left to do.
async fn drain(store: &MemoryStore, list: &mut banner_list::State, mut action: Action) -> Action {
    loop {
        match action {
            Action::Fetch | Action::Deleted | Action::SetActive { .. } | Action::Delete(_) => {
                action = settle(store, list, action).await;
            }
            other => return other,
        }
    }
}

async fn mounted_list(store: &MemoryStore) -> banner_list::State {
    let mut list = banner_list::State::new();
    let action = list.refresh(0);
    drain(store, &mut list, action).await;
    list
}

#[tokio::test]
async fn toggling_twice_restores_active_flag() {
    let store = MemoryStore::with_demo_content();
    let mut list = mounted_list(&store).await;
    let id = list.banners()[0].id.clone();
    let original = list.banners()[0].is_active;

    for _ in 0..2 {
        let action = list.update(banner_list::Message::ToggleActive(id.clone()));
        drain(&store, &mut list, action).await;
    }

    let row = list.banners().iter().find(|b| b.id == id).expect("row");
    assert_eq!(row.is_active, original);
    assert_eq!(store.calls().update, 2);
}

#[tokio::test]
async fn declined_delete_issues_no_store_calls() {
    let store = MemoryStore::with_demo_content();
    let mut list = mounted_list(&store).await;
    let before = store.calls();
    let id = list.banners()[0].id.clone();

    let action = list.update(banner_list::Message::RequestDelete(id));
    assert_eq!(drain(&store, &mut list, action).await, Action::None);
    let action = list.update(banner_list::Message::CancelDelete);
    assert_eq!(drain(&store, &mut list, action).await, Action::None);

    assert_eq!(store.calls(), before);
    assert_eq!(store.banners().len(), 3);
}

#[tokio::test]
async fn confirmed_delete_removes_row_and_refetches() {
    let store = MemoryStore::with_demo_content();
    let mut list = mounted_list(&store).await;
    let id = list.banners()[1].id.clone();

    list.update(banner_list::Message::RequestDelete(id.clone()));
    let action = list.update(banner_list::Message::ConfirmDelete);
    assert_eq!(action, Action::Delete(id.clone()));
    drain(&store, &mut list, action).await;

    assert_eq!(list.banners().len(), 2);
    assert!(list.banners().iter().all(|b| b.id != id));
    assert_eq!(store.calls().list, 2);
}

#[tokio::test]
async fn failed_toggle_keeps_list_and_reports_error() {
    let store = MemoryStore::with_demo_content();
    let mut list = mounted_list(&store).await;
    let id = list.banners()[0].id.clone();

    store.fail_next(StoreError::Network("offline".into()));
    let action = list.update(banner_list::Message::ToggleActive(id.clone()));
    let outcome = drain(&store, &mut list, action).await;

    assert_eq!(outcome, Action::Failed(StoreError::Network("offline".into())));
    assert_eq!(list.banners().len(), 3);
    assert!(!list.is_busy(&id));
}

#[tokio::test]
async fn new_image_banner_is_uploaded_then_inserted() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("summer.png");
    std::fs::write(&file, b"\x89PNG fake").expect("write file");

    let store = MemoryStore::new();
    let mut form = banner_form::State::create();
    form.update(banner_form::Message::TitleChanged("  Summer  ".into()));
    form.update(banner_form::Message::FilePicked(Some(file)));

    let banner_form::Event::Save(request) = form.update(banner_form::Message::Submit) else {
        panic!("form should submit");
    };
    let result = banners::save_banner(&store, request).await;
    assert_eq!(
        form.update(banner_form::Message::Saved(result)),
        banner_form::Event::Saved
    );

    let stored = store.banners();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title.as_deref(), Some("Summer"));
    assert!(stored[0].media_url.starts_with("memory://media/banners/"));
    assert!(stored[0].media_url.ends_with(".png"));
    assert_eq!(store.object_count(), 1);
    assert_eq!(store.calls().insert, 1);
}

#[tokio::test]
async fn video_link_banner_skips_upload() {
    let store = MemoryStore::new();
    let draft = Draft {
        media_type: MediaType::Video,
        video_source: VideoSource::Link,
        video_link: "https://videos.example/watch?v=42".into(),
        ..Draft::default()
    };
    let request = draft
        .build_request(SaveTarget::Create, Utc::now())
        .expect("valid draft");

    let banner = banners::save_banner(&store, request).await.expect("saved");
    assert_eq!(banner.display_url(), "https://videos.example/watch?v=42");
    assert_eq!(store.calls().upload, 0);
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn editing_an_image_clears_a_stale_video_link() {
    let store = MemoryStore::new();
    store.seed_object(MEDIA_BUCKET, "banners/old.png", vec![1]);
    let original = banners::save_banner(
        &store,
        Draft {
            media_type: MediaType::Video,
            video_source: VideoSource::Link,
            video_link: "https://videos.example/1".into(),
            existing_media_url: store.public_url(MEDIA_BUCKET, "banners/old.png"),
            ..Draft::default()
        }
        .build_request(SaveTarget::Create, Utc::now())
        .expect("valid"),
    )
    .await
    .expect("created");

    let mut form = banner_form::State::edit(&original);
    form.update(banner_form::Message::MediaTypeSelected(MediaType::Image));
    let banner_form::Event::Save(request) = form.update(banner_form::Message::Submit) else {
        panic!("existing media should satisfy the form");
    };
    assert_eq!(request.target, SaveTarget::Update(original.id.clone()));

    let updated = banners::save_banner(&store, request).await.expect("updated");
    assert_eq!(updated.media_type, MediaType::Image);
    assert!(updated.video_url.is_none());
    assert_eq!(store.banners().len(), 1);
}

#[tokio::test]
async fn image_without_file_is_rejected_before_any_call() {
    let store = MemoryStore::new();
    let mut form = banner_form::State::create();

    assert_eq!(
        form.update(banner_form::Message::Submit),
        banner_form::Event::Invalid(banner_form::MEDIA_REQUIRED)
    );
    assert_eq!(store.calls(), CallCounts::default());
}

#[tokio::test]
async fn failed_upload_writes_no_row() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("promo.png");
    std::fs::write(&file, [0u8; 4]).expect("write file");

    let store = MemoryStore::new();
    store.fail_next(StoreError::Status {
        code: 413,
        message: "too large".into(),
    });
    let request = Draft {
        picked_file: Some(file),
        ..Draft::default()
    }
    .build_request(SaveTarget::Create, Utc::now())
    .expect("valid");

    assert!(banners::save_banner(&store, request).await.is_err());
    assert!(store.banners().is_empty());
    assert_eq!(store.calls().insert, 0);
}

#[tokio::test]
async fn missing_file_fails_without_upload() {
    let store = MemoryStore::new();
    let request = Draft {
        picked_file: Some(PathBuf::from("/definitely/not/here.png")),
        ..Draft::default()
    }
    .build_request(SaveTarget::Create, Utc::now())
    .expect("valid");

    assert!(matches!(
        banners::save_banner(&store, request).await,
        Err(banners::SaveError::Read(_))
    ));
    assert_eq!(store.calls().upload, 0);
}

#[tokio::test]
async fn slider_shows_only_active_banners_in_order() {
    let store = MemoryStore::with_demo_content();
    let mut state = slider::State::new();
    let result = banners::load_banners(&store, true).await;
    state.update(slider::Message::Loaded(result));

    assert_eq!(state.banners().len(), 2);
    assert!(state.banners().iter().all(|b| b.is_active));
    assert!(state
        .banners()
        .windows(2)
        .all(|pair| pair[0].order_index <= pair[1].order_index));
    assert!(state.shows_controls());
    assert!(state.timer().is_some());
}

#[tokio::test]
async fn deleting_unknown_banner_reports_not_found() {
    let store = MemoryStore::new();
    assert_eq!(
        banners::delete_banner(&store, BannerId::new("ghost")).await,
        Err(StoreError::NotFound)
    );
}
