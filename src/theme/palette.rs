use ratatui::style::Color;

/// Relative luminance of an `Rgb` color, 0.0 (black) to 1.0 (white).
/// Plain Rec. 601 weights; good enough to pick a contrast direction.
#[must_use]
pub fn luminance(c: Color) -> f32 {
    if let Color::Rgb(r, g, b) = c {
        (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0
    } else {
        0.5
    }
}

/// Blend `a` toward `b` by `factor` (0.0 = `a`, 1.0 = `b`), channel-wise.
/// Returns `a` unchanged unless both colors are `Rgb`.
#[must_use]
pub fn mix(a: Color, b: Color, factor: f32) -> Color {
    let t = factor.clamp(0.0, 1.0);
    if let (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) = (a, b) {
        let ch = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t) as u8;
        Color::Rgb(ch(ar, br), ch(ag, bg), ch(ab, bb))
    } else {
        a
    }
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Used to derive subtle background tints for selected rows. Non-Rgb `Color`
/// variants are returned as-is.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}

/// Derives the menu's border/highlight color from its background and
/// foreground: a mid-contrast blend that reads as a border against the
/// background on both dark and light themes. Falls back to the foreground
/// when either color has no RGB channels to blend.
#[must_use]
pub fn border_color(background: Color, foreground: Color) -> Color {
    match (background, foreground) {
        (Color::Rgb(..), Color::Rgb(..)) => {
            // Lean further toward the foreground on low-contrast themes so
            // the border never washes out.
            let spread = (luminance(background) - luminance(foreground)).abs();
            let factor = if spread < 0.3 { 0.75 } else { 0.5 };
            mix(background, foreground, factor)
        }
        _ => foreground,
    }
}
