use crate::widgets::sidebar::PANEL_WIDTH;

/// Share of the window width the drawer may cover on narrow windows.
const DRAWER_MAX_WIDTH_RATIO: f32 = 0.75;

/// Width of the drawer panel for a window of `window_width`.
pub(crate) fn drawer_panel_width(window_width: f32) -> f32 {
    (window_width * DRAWER_MAX_WIDTH_RATIO).clamp(0.0, PANEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::drawer_panel_width;

    #[test]
    fn given_wide_window_when_sizing_drawer_then_nominal_width_is_used() {
        assert_eq!(drawer_panel_width(1024.0), 300.0);
    }

    #[test]
    fn given_narrow_window_when_sizing_drawer_then_three_quarters_are_used() {
        assert_eq!(drawer_panel_width(320.0), 240.0);
    }

    #[test]
    fn given_collapsed_window_when_sizing_drawer_then_width_is_zero() {
        assert_eq!(drawer_panel_width(0.0), 0.0);
        assert_eq!(drawer_panel_width(-10.0), 0.0);
    }
}
