// SPDX-License-Identifier: MPL-2.0
//! Public banner slider.
//!
//! Shows active banners one at a time and advances on its own every
//! [`AUTOPLAY_INTERVAL`] while playing. The running timer is represented by
//! an [`AutoplayTimer`] carrying a generation number: the subscription is
//! keyed by it, so re-arming replaces the previous timer and ticks from an
//! older generation are dropped. Manual navigation never touches the timer.

use crate::application::port::StoreError;
use crate::config::AUTOPLAY_INTERVAL;
use crate::domain::{Banner, MediaType};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::media_cache::{MediaCache, MediaSlot};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    time,
    widget::{button, image::Image, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length, Subscription,
};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Banner>, StoreError>),
    Previous,
    Next,
    Jump(usize),
    TogglePlay,
    /// Timer tick tagged with the generation that produced it.
    AutoAdvance(u64),
}

/// Handle of the single running autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    generation: u64,
}

impl AutoplayTimer {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// How a video slide is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSurface {
    pub url: String,
    pub muted: bool,
    pub looped: bool,
    pub autoplay: bool,
}

impl VideoSurface {
    /// Slides play their video muted, looped and without user action.
    #[must_use]
    pub fn for_banner(banner: &Banner) -> Self {
        Self {
            url: banner.display_url().to_string(),
            muted: true,
            looped: true,
            autoplay: true,
        }
    }
}

#[derive(Debug)]
pub struct State {
    banners: Vec<Banner>,
    loading: bool,
    current_index: usize,
    is_playing: bool,
    timer: Option<AutoplayTimer>,
    next_generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            banners: Vec::new(),
            loading: true,
            current_index: 0,
            is_playing: true,
            timer: None,
            next_generation: 0,
        }
    }
}

impl State {
    /// A freshly mounted slider, waiting for its fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> Option<&Banner> {
        self.banners.get(self.current_index)
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn timer(&self) -> Option<AutoplayTimer> {
        self.timer
    }

    /// Arrows, play/pause and indicators only make sense with two or more slides.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        self.banners.len() > 1
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded(result) => self.banners_loaded(result),
            Message::Previous => self.previous(),
            Message::Next => self.next(),
            Message::Jump(index) => self.jump(index),
            Message::TogglePlay => self.toggle_play(),
            Message::AutoAdvance(generation) => self.on_autoplay_tick(generation),
        }
    }

    fn banners_loaded(&mut self, result: Result<Vec<Banner>, StoreError>) {
        self.loading = false;
        self.banners = match result {
            Ok(banners) => banners,
            Err(err) => {
                log::error!("failed to load slider banners: {err}");
                Vec::new()
            }
        };
        if self.current_index >= self.banners.len() {
            self.current_index = 0;
        }
        self.rearm();
    }

    pub fn next(&mut self) {
        let count = self.banners.len();
        if count > 0 {
            self.current_index = (self.current_index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.banners.len();
        if count > 0 {
            self.current_index = (self.current_index + count - 1) % count;
        }
    }

    /// Shows slide `index`; out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.banners.len() {
            self.current_index = index;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        self.rearm();
    }

    fn on_autoplay_tick(&mut self, generation: u64) {
        if self.timer.map(AutoplayTimer::generation) == Some(generation) {
            self.next();
        }
    }

    /// Replaces the running timer according to the current play state.
    fn rearm(&mut self) {
        self.timer = if self.is_playing && self.shows_controls() {
            self.next_generation += 1;
            Some(AutoplayTimer {
                generation: self.next_generation,
            })
        } else {
            None
        };
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.timer {
            Some(timer) => time::every(AUTOPLAY_INTERVAL)
                .with(timer.generation)
                .map(|(generation, _)| Message::AutoAdvance(generation)),
            None => Subscription::none(),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(banner) = self.current() else {
            let key = if self.loading { "loading" } else { "no-banners" };
            return Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .style(styles::text::secondary),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDER_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into();
        };

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDER_HEIGHT))
            .push(slide(banner, &ctx));

        if banner.has_caption() {
            layers = layers.push(caption(banner));
        }
        if self.shows_controls() {
            layers = layers.push(self.controls(&ctx));
        }

        layers.into()
    }

    fn controls<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let arrows = Row::new()
            .padding(spacing::MD)
            .align_y(Vertical::Center)
            .height(Length::Fill)
            .push(arrow("‹", Message::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow("›", Message::Next));

        let play_key = if self.is_playing { "slider-pause" } else { "slider-play" };
        let play_glyph = if self.is_playing { "❚❚" } else { "▶" };
        let play_button = button(
            Text::new(format!("{play_glyph} {}", ctx.i18n.tr(play_key))).size(typography::BODY_SM),
        )
        .on_press(Message::TogglePlay)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay);

        let indicators = (0..self.banners.len()).fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, index| {
                let current = index == self.current_index;
                let width = if current {
                    sizing::INDICATOR_ACTIVE_WIDTH
                } else {
                    sizing::INDICATOR_DOT
                };
                row.push(
                    button(Space::new())
                        .on_press(Message::Jump(index))
                        .width(Length::Fixed(width))
                        .height(Length::Fixed(sizing::INDICATOR_DOT))
                        .style(styles::button::indicator(current)),
                )
            },
        );

        let top = Row::new()
            .padding(spacing::MD)
            .push(Space::new().width(Length::Fill))
            .push(play_button);
        let bottom = Container::new(indicators)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(arrows)
            .push(
                Column::new()
                    .height(Length::Fill)
                    .push(top)
                    .push(Space::new().height(Length::Fill))
                    .push(bottom),
            )
            .into()
    }
}

fn arrow<'a>(glyph: &'static str, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::SLIDER_ARROW))
    .height(Length::Fixed(sizing::SLIDER_ARROW))
    .style(styles::button::overlay)
    .into()
}

fn slide<'a>(banner: &'a Banner, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match banner.media_type {
        MediaType::Image => match ctx.media.get(&banner.media_url) {
            Some(MediaSlot::Ready(handle)) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            Some(MediaSlot::Failed) => placeholder(Text::new("▣").size(typography::TITLE_LG)),
            _ => placeholder(
                Text::new(ctx.i18n.tr("loading"))
                    .size(typography::BODY)
                    .style(styles::text::secondary),
            ),
        },
        MediaType::Video => {
            let surface = VideoSurface::for_banner(banner);
            let label = ctx.i18n.tr_with_args("video-surface", &[("url", surface.url.as_str())]);
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new("▶").size(typography::TITLE_LG))
                    .push(Text::new(label).size(typography::BODY_SM)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::video_surface)
            .into()
        }
    }
}

fn placeholder<'a>(content: Text<'a>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn caption<'a>(banner: &'a Banner) -> Element<'a, Message> {
    let mut text = Column::new().spacing(spacing::XXS);
    if let Some(title) = banner.title.as_deref().filter(|t| !t.is_empty()) {
        text = text.push(Text::new(title).size(typography::TITLE_MD));
    }
    if let Some(description) = banner.description.as_deref().filter(|d| !d.is_empty()) {
        text = text.push(Text::new(description).size(typography::BODY));
    }

    Column::new()
        .height(Length::Fill)
        .push(Space::new().height(Length::Fill))
        .push(
            Container::new(text)
                .width(Length::Fill)
                .padding([spacing::MD, spacing::LG])
                .style(styles::container::caption),
        )
        .into()
}
