//! Rose theme
//! Light blush mode by default, with a deep wine dark mode

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const GRADIENT_TOP: Color = color!(0x2a0a14);
    pub const GRADIENT_BOTTOM: Color = color!(0x4c0519);
    pub const SURFACE: Color = color!(0x1f0a12);
    pub const TITLE: Color = color!(0xffe4e6);
    pub const TEXT_MUTED: Color = color!(0xd4a5b0);
}

// Light mode colors
mod light {
    use super::*;
    pub const GRADIENT_TOP: Color = color!(0xfff1f2);
    pub const GRADIENT_BOTTOM: Color = color!(0xffd6dc);
    pub const SURFACE: Color = color!(0xffffff);
    pub const TITLE: Color = color!(0x881337);
    pub const TEXT_MUTED: Color = color!(0x9f5b6b);
}

/// Main rose accent (buttons, popup, banner)
pub const ROSE_PRIMARY: Color = color!(0xe0245e);
/// Secondary rose accent (subtitle, dialog message)
pub const ROSE_ACCENT: Color = color!(0xf43f5e);
/// Pale rose for hover backgrounds
pub const ROSE_LIGHT: Color = color!(0xffe4e6);
pub const WHITE: Color = Color::WHITE;

/// Colors a confetti piece can take
pub const CONFETTI_PALETTE: [Color; 8] = [
    ROSE_PRIMARY,
    ROSE_ACCENT,
    color!(0xffd700),
    color!(0xff69b4),
    color!(0xffc0cb),
    color!(0xff1493),
    color!(0xdc143c),
    color!(0xff6b9d),
];

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Heading color
pub fn title(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TITLE
    } else {
        light::TITLE
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Same color with a different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// ============================================================================
// Container styles
// ============================================================================

/// Full-screen rose gradient behind both screens
pub fn background_gradient(theme: &Theme) -> container::Style {
    let (top, bottom) = if is_dark(theme) {
        (dark::GRADIENT_TOP, dark::GRADIENT_BOTTOM)
    } else {
        (light::GRADIENT_TOP, light::GRADIENT_BOTTOM)
    };
    container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI)) // Top to Bottom
                .add_stop(0.0, top)
                .add_stop(1.0, bottom),
        ))),
        ..Default::default()
    }
}

/// Rounded rose card used by the feedback popup
pub fn popup_card(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(ROSE_PRIMARY, 0.95 * opacity))),
        border: Border {
            radius: 24.0.into(),
            width: 4.0,
            color: with_alpha(WHITE, 0.3 * opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        text_color: Some(with_alpha(WHITE, opacity)),
        ..Default::default()
    }
}

/// Frame around the accepted-screen picture
pub fn picture_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 24.0.into(),
            width: 4.0,
            color: with_alpha(ROSE_PRIMARY, 0.3),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Bottom love-message banner
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(0.0)) // Bottom to Top
                .add_stop(0.0, with_alpha(ROSE_PRIMARY, 0.95))
                .add_stop(1.0, with_alpha(ROSE_PRIMARY, 0.8)),
        ))),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Celebration dialog box
pub fn dialog(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(surface(theme), 0.95 * opacity))),
        border: Border {
            radius: 24.0.into(),
            width: 4.0,
            color: with_alpha(ROSE_PRIMARY, 0.3 * opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * opacity),
            offset: Vector::new(0.0, 16.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the dialog
pub fn backdrop(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            0.5 * opacity,
        ))),
        ..Default::default()
    }
}

/// Look-alike of an outline button for the No control (it has no press action)
pub fn decoy_button(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(WHITE, 0.8))),
        border: Border {
            radius: 999.0.into(),
            width: 4.0,
            color: with_alpha(text_muted(theme), 0.5),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 16.0,
        },
        text_color: Some(light::TEXT_MUTED),
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Filled rose pill (the Yes button)
pub fn primary_pill(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(ROSE_PRIMARY, 0.9),
        _ => ROSE_PRIMARY,
    };
    let shadow_blur = match status {
        button::Status::Hovered => 28.0,
        _ => 18.0,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: Border {
            radius: 999.0.into(),
            width: 4.0,
            color: with_alpha(WHITE, 0.5),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: shadow_blur,
        },
        ..Default::default()
    }
}

/// Round ghost button (dialog close)
pub fn ghost_round(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => ROSE_LIGHT,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_muted(theme),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
