use iced::widget::{
    Column, Row, Scrollable, Space, column, container, row, scrollable, svg,
    text,
};
use iced::{Color, Element, Length, Theme, alignment};

use crate::catalog::model::{
    CatalogSnapshot, FeaturedManga, MangaSummary, RecentUpdate,
};
use crate::components::primitive::cover_tile::{self, CoverTileProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{IconResolver, ids};
use crate::shared::ui::style::{
    badge_style, card_style, hidden_scroll_style, surface_style,
};
use crate::shared::ui::theme::{ThemeProps, accents};

const SCREEN_PADDING: f32 = 16.0;
const HEADER_TITLE_SIZE: f32 = 24.0;
const HEADER_ICON_SIZE: f32 = 24.0;
const SECTION_SPACING: f32 = 24.0;
const SECTION_TITLE_SIZE: f32 = 18.0;
const SECTION_TITLE_GAP: f32 = 12.0;

const FEATURED_COVER_HEIGHT: f32 = 200.0;
const FEATURED_COVER_WIDTH: f32 = 140.0;
const FEATURED_TITLE_SIZE: f32 = 22.0;
const FEATURED_PADDING: f32 = 16.0;
const BADGE_TEXT_SIZE: f32 = 12.0;

const STRIP_ITEM_WIDTH: f32 = 120.0;
const STRIP_COVER_HEIGHT: f32 = 180.0;
const STRIP_SPACING: f32 = 12.0;
const STRIP_TITLE_SIZE: f32 = 14.0;
const STRIP_CHAPTER_SIZE: f32 = 12.0;

const RECENT_COVER_WIDTH: f32 = 60.0;
const RECENT_COVER_HEIGHT: f32 = 80.0;
const RECENT_PADDING: f32 = 12.0;
const RECENT_TITLE_SIZE: f32 = 16.0;
const RECENT_CHAPTER_SIZE: f32 = 14.0;
const RECENT_TIME_SIZE: f32 = 12.0;
const RECENT_TIME_COLOR: Color = Color::from_rgb8(0x99, 0x99, 0x99);

/// Props for the library home screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LibraryProps<'a> {
    pub(crate) catalog: &'a CatalogSnapshot,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a dyn IconResolver,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the library: featured title, popular strip and recent updates.
pub(crate) fn view<'a, Message: 'a>(
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let mut sections = Column::new()
        .push(header(props))
        .spacing(SECTION_SPACING)
        .padding([SCREEN_PADDING, 0.0]);

    if let Some(featured) = props.catalog.featured.as_ref() {
        sections = sections.push(section(
            "Featured",
            featured_card(featured, props),
            props,
        ));
    }

    if !props.catalog.popular.is_empty() {
        sections = sections.push(section(
            "Popular",
            popular_strip(&props.catalog.popular, props),
            props,
        ));
    }

    if !props.catalog.recently_updated.is_empty() {
        sections = sections.push(section(
            "Recently Updated",
            recent_list(&props.catalog.recently_updated, props),
            props,
        ));
    }

    let colors = *props.theme.colors();
    container(
        Scrollable::new(sections)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(hidden_scroll_style()),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(surface_style(colors))
    .into()
}

/// Glyph color of the header search icon.
pub(crate) fn header_icon_color(is_dark: bool) -> Color {
    if is_dark { Color::WHITE } else { Color::BLACK }
}

fn header<'a, Message: 'a>(
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let icon_color =
        header_icon_color(props.theme.theme.scheme().is_dark());
    let search_icon = svg::Svg::new(svg::Handle::from_memory(
        props.icons.resolve(ids::SEARCH),
    ))
    .width(Length::Fixed(HEADER_ICON_SIZE))
    .height(Length::Fixed(HEADER_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    row![
        text("Hikari Reader")
            .size(HEADER_TITLE_SIZE)
            .font(props.fonts.bold()),
        Space::new().width(Length::Fill),
        search_icon,
    ]
    .align_y(alignment::Vertical::Center)
    .padding([0.0, SCREEN_PADDING])
    .into()
}

fn section<'a, Message: 'a>(
    title: &'a str,
    body: Element<'a, Message, Theme, iced::Renderer>,
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let heading = container(
        text(title)
            .size(SECTION_TITLE_SIZE)
            .font(props.fonts.semibold()),
    )
    .padding([0.0, SCREEN_PADDING]);

    column![heading, body]
        .spacing(SECTION_TITLE_GAP)
        .width(Length::Fill)
        .into()
}

/// Chapter line under the featured title.
pub(crate) fn featured_chapter_label(featured: &FeaturedManga) -> String {
    format!("Chapter {} • Read Now", featured.latest_chapter)
}

fn featured_card<'a, Message: 'a>(
    featured: &'a FeaturedManga,
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let colors = *props.theme.colors();

    let cover = cover_tile::view(CoverTileProps {
        title: &featured.title,
        width: FEATURED_COVER_WIDTH,
        height: FEATURED_COVER_HEIGHT,
        radius: 8.0,
    });

    let mut info = Column::new().spacing(6.0).width(Length::Fill);
    if featured.is_new {
        info = info.push(
            container(text("New Chapter").size(BADGE_TEXT_SIZE))
                .padding([4.0, 8.0])
                .style(badge_style()),
        );
    }
    info = info
        .push(
            text(featured.title.as_str())
                .size(FEATURED_TITLE_SIZE)
                .font(props.fonts.bold()),
        )
        .push(
            text(format!("by {}", featured.author)).color(colors.muted_text),
        )
        .push(
            text(featured_chapter_label(featured))
                .font(props.fonts.semibold())
                .color(accents::LINK),
        );

    container(
        row![cover, info]
            .spacing(FEATURED_PADDING)
            .align_y(alignment::Vertical::Center),
    )
    .padding(FEATURED_PADDING)
    .width(Length::Fill)
    .style(card_style(colors))
    .into()
}

/// Chapter caption used by strips and lists.
pub(crate) fn chapter_caption(chapter: &str) -> String {
    format!("Ch. {chapter}")
}

fn popular_strip<'a, Message: 'a>(
    items: &'a [MangaSummary],
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let colors = *props.theme.colors();
    let strip = items
        .iter()
        .fold(Row::new().spacing(STRIP_SPACING), |strip, item| {
            let entry = column![
                cover_tile::view(CoverTileProps {
                    title: &item.title,
                    width: STRIP_ITEM_WIDTH,
                    height: STRIP_COVER_HEIGHT,
                    radius: 8.0,
                }),
                text(item.title.as_str())
                    .size(STRIP_TITLE_SIZE)
                    .width(Length::Fixed(STRIP_ITEM_WIDTH))
                    .wrapping(text::Wrapping::None),
                text(chapter_caption(&item.chapter))
                    .size(STRIP_CHAPTER_SIZE)
                    .font(props.fonts.semibold())
                    .color(colors.muted_text),
            ]
            .spacing(4.0)
            .width(Length::Fixed(STRIP_ITEM_WIDTH));
            strip.push(entry)
        })
        .padding([0.0, SCREEN_PADDING]);

    Scrollable::with_direction(
        strip,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .style(hidden_scroll_style())
    .into()
}

fn recent_list<'a, Message: 'a>(
    items: &'a [RecentUpdate],
    props: LibraryProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let colors = *props.theme.colors();
    items
        .iter()
        .fold(Column::new(), |list, item| {
            let meta = row![
                text(chapter_caption(&item.summary.chapter))
                    .size(RECENT_CHAPTER_SIZE)
                    .color(colors.muted_text),
                Space::new().width(Length::Fill),
                text(item.updated_label.as_str())
                    .size(RECENT_TIME_SIZE)
                    .color(RECENT_TIME_COLOR),
            ]
            .align_y(alignment::Vertical::Center);

            let info = column![
                text(item.summary.title.as_str()).size(RECENT_TITLE_SIZE),
                meta,
            ]
            .spacing(4.0)
            .width(Length::Fill);

            let entry = row![
                cover_tile::view(CoverTileProps {
                    title: &item.summary.title,
                    width: RECENT_COVER_WIDTH,
                    height: RECENT_COVER_HEIGHT,
                    radius: 6.0,
                }),
                info,
            ]
            .spacing(RECENT_PADDING)
            .align_y(alignment::Vertical::Center)
            .padding(RECENT_PADDING);

            list.push(entry).push(divider(colors.divider))
        })
        .width(Length::Fill)
        .into()
}

fn divider<'a, Message: 'a>(
    color: Color,
) -> Element<'a, Message, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{chapter_caption, featured_chapter_label, header_icon_color};
    use crate::catalog::model::FeaturedManga;

    #[test]
    fn given_featured_title_when_labeled_then_chapter_and_call_to_action_are_shown()
     {
        let featured = FeaturedManga {
            id: String::from("1"),
            title: String::from("One Piece"),
            author: String::from("Eiichiro Oda"),
            cover_url: String::new(),
            latest_chapter: String::from("1090"),
            is_new: true,
        };

        assert_eq!(
            featured_chapter_label(&featured),
            "Chapter 1090 • Read Now"
        );
    }

    #[test]
    fn given_chapter_number_when_captioned_then_short_prefix_is_used() {
        assert_eq!(chapter_caption("221"), "Ch. 221");
    }

    #[test]
    fn given_color_scheme_when_tinting_search_icon_then_it_contrasts_background()
     {
        assert_eq!(header_icon_color(true), Color::WHITE);
        assert_eq!(header_icon_color(false), Color::BLACK);
    }
}
