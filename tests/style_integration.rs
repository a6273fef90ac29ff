// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style resolution against the design tokens.

#[cfg(test)]
mod tests {
    use iced::Color;
    use iced_toast::config::defaults;
    use iced_toast::toast::{Position, Style, ToastFont};
    use iced_toast::ui::design_tokens::{motion, palette, radius, spacing, typography};
    use std::time::Duration;

    #[test]
    fn defaults_come_from_design_tokens() {
        assert_eq!(defaults::DEFAULT_POSITION, Position::Bottom(spacing::SCREEN_EDGE));
        assert_eq!(defaults::DEFAULT_DURATION, motion::HOLD);
        assert_eq!(defaults::DEFAULT_BACKGROUND_COLOR, palette::GRAY_500);
        assert_eq!(defaults::DEFAULT_CORNER_RADIUS, radius::TOAST);
        assert_eq!(defaults::DEFAULT_TEXT_COLOR, palette::WHITE);
        assert_eq!(defaults::DEFAULT_FONT.size, typography::HEADLINE);
    }

    #[test]
    fn unset_style_resolves_to_documented_values() {
        let resolved = Style::default().resolve();

        assert_eq!(resolved.position, Position::Bottom(20.0));
        assert_eq!(resolved.duration, Duration::from_secs(3));
        assert_eq!(resolved.background_color, Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(resolved.corner_radius, 10.0);
        assert_eq!(resolved.text_color, Color::WHITE);
    }

    #[test]
    fn each_field_overrides_alone() {
        let base = Style::default().resolve();

        let resolved = Style::new().with_duration(Duration::from_secs(9)).resolve();
        assert_eq!(resolved.duration, Duration::from_secs(9));
        assert_eq!(resolved.position, base.position);

        let resolved = Style::new().with_font(ToastFont::sized(12.0)).resolve();
        assert_eq!(resolved.font.size, 12.0);
        assert_eq!(resolved.text_color, base.text_color);

        let resolved = Style::new().with_background_color(Color::BLACK).resolve();
        assert_eq!(resolved.background_color, Color::BLACK);
        assert_eq!(resolved.corner_radius, base.corner_radius);
    }

    #[test]
    fn fade_is_three_tenths_of_a_second() {
        assert_eq!(motion::FADE, Duration::from_millis(300));
        assert_eq!(motion::SPRING_DAMPING, 1.0);
    }
}
