// SPDX-License-Identifier: MPL-2.0
//! Shop pane: fallback card or listing cards, plus a refresh control.

use crate::shop::component::{Message, State};
use crate::shop::client::Listing;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub fn view(state: &State) -> Element<'_, Message> {
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("Used equipment").size(typography::TITLE_LG))
        .push(refresh_button(state));

    let body: Element<'_, Message> = match state.listings() {
        Some(payload) if !payload.items.is_empty() => listings_grid(&payload.items),
        Some(_) => empty_card(),
        None => fallback_card(state.seller()),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(heading)
        .push(body);

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn refresh_button(state: &State) -> Element<'_, Message> {
    let label = if state.is_fetching() {
        "Refreshing…"
    } else {
        "Refresh"
    };

    let refresh = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let refresh = if state.is_fetching() {
        refresh
    } else {
        refresh.on_press(Message::Refresh)
    };

    refresh.into()
}

/// Static content shown until the first successful fetch: a card pointing
/// at the seller's marketplace profile.
fn fallback_card(seller: &str) -> Element<'_, Message> {
    let card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Browse our current second-hand stock").size(typography::TITLE_SM))
        .push(
            Text::new(format!(
                "Find us on eBay as \"{seller}\" for filters, pumps, tanks and more."
            ))
            .size(typography::BODY),
        )
        .push(
            Text::new(format!("ebay.co.uk/usr/{seller}"))
                .size(typography::BODY_SM),
        );

    Container::new(card)
        .padding(spacing::LG)
        .max_width(sizing::FORM_MAX_WIDTH)
        .style(styles::container::card)
        .into()
}

fn empty_card<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Nothing listed at the moment. Check back soon!").size(typography::BODY))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn listings_grid(items: &[Listing]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0usize;

    // Fixed-width cards, three per row.
    const CARDS_PER_ROW: usize = 3;

    for listing in items {
        row = row.push(listing_card(listing));
        in_row += 1;

        if in_row == CARDS_PER_ROW {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    grid.into()
}

fn listing_card(listing: &Listing) -> Element<'_, Message> {
    let mut card = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(listing.title.clone()).size(typography::TITLE_SM))
        .push(Text::new(listing.price_label()).size(typography::BODY));

    let mut detail_parts = Vec::new();
    if let Some(condition) = &listing.condition {
        detail_parts.push(condition.clone());
    }
    if let Some(location) = &listing.location {
        detail_parts.push(location.clone());
    }
    if !detail_parts.is_empty() {
        card = card.push(Text::new(detail_parts.join(" · ")).size(typography::BODY_SM));
    }

    if let Some(url) = &listing.url {
        card = card.push(Text::new(url.clone()).size(typography::CAPTION));
    }

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::LISTING_CARD_WIDTH))
        .align_x(Horizontal::Left)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::client::SellerItems;
    use crate::shop::component;

    #[test]
    fn fallback_view_renders() {
        let state = State::new("http://localhost:8787".into(), "calico-aquatics".into(), 24);
        let _element = view(&state);
    }

    #[test]
    fn listings_view_renders() {
        let mut state = State::new("http://localhost:8787".into(), "calico-aquatics".into(), 24);
        let _ = state.fetch_if_needed();
        let _ = state.handle(component::Message::Fetched {
            generation: 1,
            result: Ok(SellerItems {
                seller: "calico-aquatics".to_owned(),
                count: 1,
                items: vec![Listing {
                    id: "1".into(),
                    title: "Heater".into(),
                    url: Some("https://example.com/itm/1".into()),
                    price: Some("12.50".into()),
                    currency: Some("GBP".into()),
                    image: None,
                    location: Some("Norwich".into()),
                    condition: Some("Used".into()),
                    listing_type: Some("FixedPrice".into()),
                }],
            }),
        });

        let _element = view(&state);
    }
}
