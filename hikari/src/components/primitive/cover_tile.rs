use iced::widget::{container, text};
use iced::{Border, Color, Element, Length, alignment};

/// Props for a cover placeholder tile.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CoverTileProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) radius: f32,
}

const PLACEHOLDER_HUES: [Color; 6] = [
    Color::from_rgb8(0x4F, 0xA6, 0xED),
    Color::from_rgb8(0xE0, 0x6C, 0x75),
    Color::from_rgb8(0x98, 0xC3, 0x79),
    Color::from_rgb8(0xC6, 0x78, 0xDD),
    Color::from_rgb8(0xE5, 0xC0, 0x7B),
    Color::from_rgb8(0x56, 0xB6, 0xC2),
];

/// Render a colored tile with the title's initials in place of cover art.
pub(crate) fn view<'a, Message: 'a>(
    props: CoverTileProps<'a>,
) -> Element<'a, Message> {
    let background = placeholder_color(props.title);
    let radius = props.radius;
    let label_size = (props.width / 3.0).clamp(12.0, 48.0);

    container(text(initials(props.title)).size(label_size).color(Color::WHITE))
        .width(Length::Fixed(props.width))
        .height(Length::Fixed(props.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// Up to two uppercase initials from the first words of `title`.
pub(crate) fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|ch| ch.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn placeholder_color(title: &str) -> Color {
    let sum = title.bytes().fold(0usize, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(usize::from(byte))
    });
    PLACEHOLDER_HUES[sum % PLACEHOLDER_HUES.len()]
}

#[cfg(test)]
mod tests {
    use super::{initials, placeholder_color};

    #[test]
    fn given_multi_word_title_when_abbreviated_then_two_initials_are_used() {
        assert_eq!(initials("Attack on Titan"), "AO");
        assert_eq!(initials("one piece"), "OP");
    }

    #[test]
    fn given_single_word_title_when_abbreviated_then_one_initial_is_used() {
        assert_eq!(initials("Berserk"), "B");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn given_same_title_when_colored_twice_then_color_is_stable() {
        assert_eq!(
            placeholder_color("Chainsaw Man"),
            placeholder_color("Chainsaw Man")
        );
    }
}
