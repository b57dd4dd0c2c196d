// SPDX-License-Identifier: MPL-2.0
//! Auth screen layout: brand pane with the rotating phrase next to the
//! active form card.

use crate::auth::{AuthController, Message, RegisterField, DOCUMENT_TYPES, USER_TYPES};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, checkbox, container, pick_list, text, text_input, Column, Container, Row, Space,
};
use iced::{alignment, Color, Element, Font, Length};
use std::time::Instant;

/// Renders the auth screen; the particle canvas is layered underneath by
/// the caller.
pub fn view<'a>(auth: &'a AuthController, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let form = if auth.register_active() {
        register_form(auth, i18n)
    } else {
        login_form(auth, i18n)
    };

    let card = Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card);

    Container::new(
        Row::new()
            .spacing(spacing::XXL)
            .align_y(alignment::Vertical::Center)
            .push(brand_pane(auth, i18n, now))
            .push(card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::XL)
    .into()
}

fn brand_pane<'a>(auth: &'a AuthController, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    // The phrase stays hidden during the intro animation.
    let alpha = if auth.is_initial() {
        0.0
    } else {
        auth.phrases().opacity(now)
    };

    let title = text(i18n.tr("login-brand"))
        .size(typography::DISPLAY)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(palette::BRAND_300);

    let phrase = text(auth.phrases().current())
        .size(typography::PHRASE)
        .color(Color {
            a: alpha,
            ..palette::WHITE
        });

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(title)
        .push(phrase)
        .into()
}

fn submit_label(auth: &AuthController, i18n: &I18n, key: &str) -> String {
    if auth.is_submitting() {
        i18n.tr("auth-submitting")
    } else {
        i18n.tr(key)
    }
}

fn login_form<'a>(auth: &'a AuthController, i18n: &'a I18n) -> Element<'a, Message> {
    let form = auth.login_form();
    let username_placeholder = i18n.tr("login-username-placeholder");
    let password_placeholder = i18n.tr("login-password-placeholder");

    let submit = button(text(submit_label(auth, i18n, "login-submit")).center())
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::primary)
        .on_press_maybe((!auth.is_submitting()).then_some(Message::SubmitLogin));

    Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("login-title")).size(typography::TITLE_LG))
        .push(
            text_input(username_placeholder.as_str(), &form.username)
                .on_input(Message::LoginUsernameChanged)
                .on_submit(Message::SubmitLogin)
                .padding(spacing::XS),
        )
        .push(
            text_input(password_placeholder.as_str(), &form.password)
                .secure(true)
                .on_input(Message::LoginPasswordChanged)
                .on_submit(Message::SubmitLogin)
                .padding(spacing::XS),
        )
        .push(submit)
        .push(switch_link(
            i18n.tr("login-no-account"),
            i18n.tr("login-go-register"),
            Message::ShowRegister,
        ))
        .into()
}

fn register_form<'a>(auth: &'a AuthController, i18n: &'a I18n) -> Element<'a, Message> {
    let form = auth.register_form();

    let input = |key: &str, value: &'a str, field: RegisterField| {
        let placeholder = i18n.tr(key);
        let secure = matches!(field, RegisterField::Password | RegisterField::Confirm);
        text_input(placeholder.as_str(), value)
            .secure(secure)
            .on_input(move |v| Message::RegisterInput(field, v))
            .on_submit(Message::SubmitRegister)
            .padding(spacing::XS)
    };

    let document_types: Vec<String> = DOCUMENT_TYPES.iter().map(ToString::to_string).collect();
    let user_types: Vec<String> = USER_TYPES.iter().map(ToString::to_string).collect();

    let document_row = Row::new()
        .spacing(spacing::XS)
        .push(
            pick_list(
                document_types,
                form.tipo_documento.clone(),
                Message::DocumentTypeSelected,
            )
            .placeholder(i18n.tr("register-tipo-documento"))
            .padding(spacing::XS),
        )
        .push(input("register-documento", &form.documento, RegisterField::Documento));

    let user_type = pick_list(user_types, form.tipo_usuario.clone(), Message::UserTypeSelected)
        .placeholder(i18n.tr("register-tipo-usuario"))
        .padding(spacing::XS)
        .width(Length::Fill);

    let terms = checkbox(form.terms_accepted)
        .label(i18n.tr("register-terms"))
        .on_toggle(Message::TermsToggled);

    let submit = button(text(submit_label(auth, i18n, "register-submit")).center())
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::primary)
        .on_press_maybe((!auth.is_submitting()).then_some(Message::SubmitRegister));

    Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("register-title")).size(typography::TITLE_LG))
        .push(input("register-nombre", &form.nombre, RegisterField::Nombre))
        .push(document_row)
        .push(input("register-ficha", &form.ficha, RegisterField::Ficha))
        .push(input("register-correo", &form.correo, RegisterField::Correo))
        .push(input("register-telefono", &form.telefono, RegisterField::Telefono))
        .push(user_type)
        .push(input("register-username", &form.username, RegisterField::Username))
        .push(input("register-password", &form.password, RegisterField::Password))
        .push(input("register-confirm", &form.confirm, RegisterField::Confirm))
        .push(terms)
        .push(submit)
        .push(switch_link(
            i18n.tr("register-have-account"),
            i18n.tr("register-go-login"),
            Message::ShowLogin,
        ))
        .into()
}

fn switch_link<'a>(prompt: String, action: String, message: Message) -> Element<'a, Message> {
    container(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(text(prompt).size(typography::CAPTION))
            .push(
                button(text(action).size(typography::CAPTION))
                    .padding(0)
                    .style(styles::button::link)
                    .on_press(message),
            )
            .push(Space::new().width(Length::Fill)),
    )
    .width(Length::Fill)
    .into()
}
