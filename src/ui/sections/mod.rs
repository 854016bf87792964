// SPDX-License-Identifier: MPL-2.0
//! Portfolio screens.
//!
//! - [`home`] - Hero, introduction and skills
//! - [`projects`] - Project cards, active card highlighted while scrolling
//! - [`experience`] - Experience timeline, active entry highlighted while scrolling
//! - [`contact`] - Contact form
//!
//! Scrolling screens lay their rows out with fixed heights so a
//! [`TrackedList`] can derive each row's geometry from the scroll offset.

pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;

use crate::ui::activity::{StackedLayout, Tracker};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::Viewport;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Padding around scrollable section content.
pub const LIST_PADDING: f32 = spacing::LG;

/// Gap between the header and rows of a scrollable section.
pub const LIST_SPACING: f32 = spacing::MD;

/// Distance from the top of the scrollable content to its first row.
const LIST_LEADING: f32 = LIST_PADDING + sizing::SECTION_HEADER_HEIGHT + LIST_SPACING;

/// Scroll state and active-row tracking for one scrollable section.
#[derive(Debug, Clone)]
pub struct TrackedList {
    layout: StackedLayout,
    tracker: Tracker,
}

impl TrackedList {
    /// A list of `count` rows of `row_height`, laid out by [`list_view`].
    #[must_use]
    pub fn new(count: usize, row_height: f32, viewport_height: f32, threshold: Option<f32>) -> Self {
        Self {
            layout: StackedLayout::uniform(count, row_height, LIST_SPACING)
                .with_leading(LIST_LEADING)
                .with_viewport_height(viewport_height),
            tracker: Tracker::new(threshold),
        }
    }

    /// Starts tracking from the top of the list. The scrollable shown on
    /// entry is snapped to the top to match, see [`projects::SCROLLABLE_ID`] and
    /// [`experience::SCROLLABLE_ID`].
    pub fn attach(&mut self) {
        self.layout.set_scroll_offset(0.0);
        self.tracker.attach();
    }

    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.tracker.is_attached()
    }

    /// Applies a scrollable viewport report.
    pub fn on_scroll(&mut self, viewport: &Viewport) {
        if self.layout.update(viewport.bounds(), viewport.absolute_offset()) {
            self.tracker.on_resize();
        }
        self.tracker.on_scroll();
    }

    /// Applies a new visible height for the scrollable.
    pub fn on_resize(&mut self, viewport_height: f32) {
        self.layout.set_viewport_height(viewport_height);
        self.tracker.on_resize();
    }

    /// Runs a pending recomputation. Returns `true` if the active row changed.
    pub fn on_frame(&mut self) -> bool {
        self.tracker
            .on_frame(self.layout.rows(), self.layout.viewport_height())
    }

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.tracker.needs_frame()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.tracker.active_index()
    }

    #[must_use]
    pub fn layout(&self) -> &StackedLayout {
        &self.layout
    }
}

/// Screen heading with a fixed height, so row offsets stay predictable.
pub fn header<'a, M: 'a>(title: &'a str, subtitle: &'a str) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(subtitle)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        )
        .push(Text::new(title).size(typography::TITLE_LG));

    Container::new(column)
        .height(Length::Fixed(sizing::SECTION_HEADER_HEIGHT))
        .align_y(alignment::Vertical::Bottom)
        .into()
}

/// Column of fixed-height rows below a [`header`], matching [`TrackedList`] geometry.
pub fn list_view<'a, M: 'a>(
    header: Element<'a, M>,
    rows: impl IntoIterator<Item = Element<'a, M>>,
    row_height: f32,
) -> Column<'a, M> {
    rows.into_iter().fold(
        Column::new()
            .spacing(LIST_SPACING)
            .padding(LIST_PADDING)
            .width(Length::Fill)
            .push(header),
        |column, row| {
            column.push(
                Container::new(row)
                    .width(Length::Fill)
                    .height(Length::Fixed(row_height)),
            )
        },
    )
}
