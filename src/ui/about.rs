// SPDX-License-Identifier: MPL-2.0
//! About screen: shop blurb, weekly opening hours, and the live status chip.

use crate::hours::{ShopStatus, WeeklySchedule};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Renders the about screen.
///
/// `status` is computed by the app from the system clock and refreshed once
/// a minute while this screen is shown.
pub fn view<Message: 'static>(
    schedule: &WeeklySchedule,
    status: ShopStatus,
) -> Element<'static, Message> {
    let chip = Container::new(Text::new(status.label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::status_chip(status == ShopStatus::Open));

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(Text::new("Visit the shop").size(typography::TITLE_LG))
        .push(chip);

    let blurb = Text::new(
        "Calico Aquatics is a family-run aquatics shop stocking tropical \
         and coldwater fish, shrimp, live plants, and hardscape. Come and \
         see the display tanks in person.",
    )
    .size(typography::BODY);

    let mut hours = Column::new()
        .spacing(spacing::XS)
        .push(Text::new("Opening hours").size(typography::TITLE_SM));

    for (day, label) in schedule.table_rows() {
        hours = hours.push(
            Row::new()
                .push(
                    Container::new(Text::new(day).size(typography::BODY))
                        .width(Length::Fixed(120.0)),
                )
                .push(Text::new(label).size(typography::BODY)),
        );
    }

    let address = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Find us").size(typography::TITLE_SM))
        .push(Text::new("Unit 4, Riverside Trading Estate").size(typography::BODY))
        .push(Text::new("Calico Lane, Norwich NR3 2QZ").size(typography::BODY))
        .push(
            Text::new("Livestock delivery available within 12 miles of the shop.")
                .size(typography::BODY_SM),
        );

    let card = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(blurb)
        .push(hours)
        .push(address);

    Container::new(
        Container::new(card)
            .padding(spacing::LG)
            .max_width(sizing::FORM_MAX_WIDTH)
            .style(styles::container::card),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_renders_open_and_closed() {
        let schedule = WeeklySchedule::default();
        let _open: Element<'_, ()> = view(&schedule, ShopStatus::Open);
        let _closed: Element<'_, ()> = view(&schedule, ShopStatus::Closed);
    }
}
