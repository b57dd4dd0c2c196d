// SPDX-License-Identifier: MPL-2.0
//! Landing screen after login: greeting, favorites and log out.
//!
//! Favorites removed here keep their row (with an inactive star) until the
//! screen is reopened, so an accidental removal can be undone in place.

use crate::favorites::{FavoriteIndicators, FavoriteToggle};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, text_input, tooltip, Column, Container, Row};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleFavorite(String),
    NewFavoriteChanged(String),
    AddFavorite,
    /// Asks for confirmation before logging out.
    Logout,
    CancelLogout,
    ConfirmLogout,
}

/// What the application should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Toggle(String),
    /// Favorite `id` unless it already is one.
    Add(String),
    Logout,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    /// `None` while the name is being looked up.
    pub display_name: Option<String>,
    pub indicators: FavoriteIndicators,
    pub new_favorite: String,
    /// The log out confirmation is open.
    pub confirming_logout: bool,
}

impl State {
    #[must_use]
    pub fn new(display_name: Option<String>, favorites: &[String]) -> Self {
        Self {
            display_name,
            indicators: FavoriteIndicators::initialize(favorites.iter().cloned(), favorites),
            new_favorite: String::new(),
            confirming_logout: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleFavorite(id) => Event::Toggle(id),
            Message::NewFavoriteChanged(value) => {
                self.new_favorite = value;
                Event::None
            }
            Message::AddFavorite => {
                let id = self.new_favorite.trim().to_string();
                if id.is_empty() {
                    return Event::None;
                }
                self.new_favorite.clear();
                if !self.indicators.list.iter().any(|t| t.fav_id == id) {
                    self.indicators.list.push(FavoriteToggle::new(id.clone()));
                }
                Event::Add(id)
            }
            Message::Logout => {
                self.confirming_logout = true;
                Event::None
            }
            Message::CancelLogout => {
                self.confirming_logout = false;
                Event::None
            }
            Message::ConfirmLogout => {
                self.confirming_logout = false;
                Event::Logout
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let greeting = match &self.display_name {
            Some(name) => i18n.tr_with_args("home-greeting", &[("name", name.as_str())]),
            None => i18n.tr("home-greeting-loading"),
        };

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                text(greeting)
                    .size(typography::TITLE_LG)
                    .width(Length::Fill),
            )
            .push(
                button(text(i18n.tr("home-logout")).size(typography::BODY))
                    .style(styles::button::link)
                    .on_press(Message::Logout),
            );

        let list: Element<'a, Message> = if self.indicators.list.is_empty() {
            text(i18n.tr("home-favorites-empty"))
                .size(typography::BODY)
                .into()
        } else {
            let rows = self.indicators.list.iter().map(|toggle| favorite_row(toggle, i18n));
            scrollable(Column::with_children(rows).spacing(spacing::XS))
                .height(Length::Fill)
                .into()
        };

        let placeholder = i18n.tr("home-add-placeholder");
        let add_row = Row::new()
            .spacing(spacing::XS)
            .push(
                text_input(placeholder.as_str(), &self.new_favorite)
                    .on_input(Message::NewFavoriteChanged)
                    .on_submit(Message::AddFavorite)
                    .padding(spacing::XS),
            )
            .push(
                button(text(i18n.tr("home-add")))
                    .padding(spacing::XS)
                    .style(styles::button::primary)
                    .on_press(Message::AddFavorite),
            );

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(text(i18n.tr("home-favorites-title")).size(typography::TITLE_MD))
            .push(add_row)
            .push(list);

        Container::new(
            Container::new(content)
                .width(Length::Fixed(sizing::HOME_WIDTH))
                .height(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
    }
}

fn favorite_row<'a>(toggle: &'a FavoriteToggle, i18n: &'a I18n) -> Element<'a, Message> {
    let star = if toggle.active { "★" } else { "☆" };
    let star_button = button(text(star).size(typography::TITLE_MD))
        .padding([0, 6])
        .style(styles::button::favorite(toggle.active))
        .on_press(Message::ToggleFavorite(toggle.fav_id.clone()));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(tooltip(
            star_button,
            text(toggle.title()).size(typography::CAPTION),
            tooltip::Position::Right,
        ))
        .push(
            text(i18n.tr_with_args("home-favorite-item", &[("id", toggle.fav_id.as_str())]))
                .size(typography::BODY),
        )
        .into()
}
