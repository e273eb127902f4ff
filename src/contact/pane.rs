// SPDX-License-Identifier: MPL-2.0
//! Contact pane: the three-field form with inline errors and a status line.

use crate::contact::component::{Message, State};
use crate::contact::form::SubmitStatus;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let errors = state.errors();

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Get in touch").size(typography::TITLE_LG))
        .push(
            text_input("Your name", &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS),
        );

    if let Some(error) = errors.name {
        form = form.push(error_line(error));
    }

    form = form.push(
        text_input("Email address", &state.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS),
    );
    if let Some(error) = errors.email {
        form = form.push(error_line(error));
    }

    form = form.push(
        text_input("How can we help?", &state.message)
            .on_input(Message::MessageChanged)
            .padding(spacing::XS),
    );
    if let Some(error) = errors.message {
        form = form.push(error_line(error));
    }

    let sending = matches!(state.status(), SubmitStatus::Sending);
    let submit = button(Text::new("Send message").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let submit = if sending {
        submit
    } else {
        submit.on_press(Message::Submit)
    };
    form = form.push(submit);

    let status_label = state.status().label();
    if !status_label.is_empty() {
        let color = match state.status() {
            SubmitStatus::Failed(_) => palette::ERROR_500,
            SubmitStatus::Sent => palette::SUCCESS_500,
            _ => palette::GRAY_400,
        };
        form = form.push(Text::new(status_label.to_owned()).size(typography::BODY).color(color));
    }

    Container::new(
        Container::new(form)
            .padding(spacing::LG)
            .max_width(sizing::FORM_MAX_WIDTH)
            .style(styles::container::card),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .into()
}

fn error_line(error: &str) -> Element<'_, Message> {
    Text::new(error)
        .size(typography::BODY_SM)
        .color(palette::ERROR_500)
        .into()
}
