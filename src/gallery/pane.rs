// SPDX-License-Identifier: MPL-2.0
//! Gallery pane: the thumbnail grid with its reveal-driven opacity, and the
//! lightbox overlay stacked on top when open.
//!
//! The overlay is one shared surface: backdrop, image slot, dismiss,
//! previous/next, caption, and counter exist once and only change content.
//! Controls sit above the backdrop in the stack and capture their own
//! presses, so activating one never also reaches the backdrop handler.

use crate::gallery::component::{Message, State, GRID_PADDING, SCROLLABLE_ID};
use crate::gallery::lightbox;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::wheel_blocking_scrollable;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Element, Length,
};

pub fn view(state: &State) -> Element<'_, Message> {
    let base = grid_view(state);

    if state.is_lightbox_open() {
        lightbox_overlay(state, base)
    } else {
        base
    }
}

fn grid_view(state: &State) -> Element<'_, Message> {
    if state.image_set().is_empty() {
        let label = if state.is_scanning() {
            "Loading the gallery…"
        } else {
            "No photos to show yet."
        };

        return Container::new(Text::new(label).size(typography::TITLE_SM))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    let layout = state.layout();
    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0usize;

    for (index, entry) in state.image_set().iter().enumerate() {
        let progress = state.reveal_progress(index);

        let cell_image: Element<'_, Message> = match (&entry.thumbnail, entry.decode_failed) {
            (Some(thumbnail), _) => image::Image::new(thumbnail.handle.clone())
                .width(Length::Fill)
                .opacity(progress)
                .into(),
            (None, true) => placeholder_cell("Unavailable"),
            (None, false) => placeholder_cell(""),
        };

        let caption = Text::new(entry.caption.clone()).size(typography::CAPTION);

        let cell = Column::new()
            .spacing(spacing::XXS)
            .push(cell_image)
            .push(caption);

        let cell_button = button(cell)
            .on_press(Message::Lightbox(lightbox::Message::Open(index)))
            .padding(0)
            .width(Length::Fixed(layout.cell_width))
            .style(styles::button::thumbnail);

        row = row.push(cell_button);
        in_row += 1;

        if in_row == layout.columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    let scrollable = Scrollable::new(Container::new(grid).padding(GRID_PADDING))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::GridScrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    wheel_blocking_scrollable(scrollable, state.grid_scroll_locked()).into()
}

fn placeholder_cell<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(160.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail_placeholder)
        .into()
}

fn lightbox_overlay<'a>(state: &'a State, base: Element<'a, Message>) -> Element<'a, Message> {
    let total = state.image_set().len();
    let Some(current) = state.lightbox_index() else {
        return base;
    };

    let mut stack = Stack::new().push(base);

    // Backdrop: a full-surface press target. Pressing it (and nothing
    // stacked above it) closes the lightbox.
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Lightbox(lightbox::Message::BackdropPressed));
    stack = stack.push(backdrop);

    // Image slot, centered. Its own press target so a click on the image
    // never falls through to the backdrop.
    let slot: Element<'_, Message> = match state.lightbox_image() {
        Some(data) => image::Image::new(data.handle.clone())
            .width(Length::Shrink)
            .into(),
        None => Text::new("Loading…").size(typography::TITLE_SM).into(),
    };
    let slot = mouse_area(Container::new(slot).padding(spacing::XXL))
        .on_press(Message::Lightbox(lightbox::Message::ImagePressed));
    stack = stack.push(
        Container::new(slot)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    // Dismiss control, top right.
    let dismiss = button(Text::new("✕").size(typography::TITLE_MD))
        .on_press(Message::Lightbox(lightbox::Message::Dismiss))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));
    stack = stack.push(
        Container::new(dismiss)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right),
    );

    // Previous / next controls, vertically centered at the edges.
    let previous = button(Text::new("◀").size(typography::TITLE_MD))
        .on_press(Message::Lightbox(lightbox::Message::Previous))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));
    stack = stack.push(
        Container::new(previous)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Center),
    );

    let next = button(Text::new("▶").size(typography::TITLE_MD))
        .on_press(Message::Lightbox(lightbox::Message::Next))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));
    stack = stack.push(
        Container::new(next)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center),
    );

    // Caption and position counter, bottom center.
    let caption = state
        .image_set()
        .get(current)
        .map(|entry| entry.caption.clone())
        .unwrap_or_default();

    let caption_line = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(caption).size(typography::BODY))
        .push(Text::new(format!("{}/{}", current + 1, total)).size(typography::CAPTION));

    let caption_bar = Container::new(caption_line)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::LG));

    stack = stack.push(
        Container::new(caption_bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
    );

    stack.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PrefetchConfig;
    use std::path::PathBuf;

    fn scanned_state(paths: &[&str]) -> State {
        let (mut state, _task) =
            State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
        let paths = paths.iter().map(PathBuf::from).collect();
        let _ = state.handle(crate::gallery::Message::ScanCompleted(Ok(paths)));
        state
    }

    #[test]
    fn empty_gallery_renders() {
        let (state, _task) = State::new(PathBuf::from("/nowhere"), PrefetchConfig::default());
        let _element = view(&state);
    }

    #[test]
    fn grid_renders_with_images() {
        let state = scanned_state(&["/g/a.jpg", "/g/b.jpg", "/g/c.jpg"]);
        let _element = view(&state);
    }

    #[test]
    fn overlay_renders_while_open() {
        let mut state = scanned_state(&["/g/a.jpg", "/g/b.jpg"]);
        let _ = state.handle(crate::gallery::Message::Lightbox(lightbox::Message::Open(0)));
        let _element = view(&state);
    }
}
