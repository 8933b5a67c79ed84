//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub border: Color,
    pub header_fg: Color,
    pub expression_fg: Color,
    pub preview_fg: Color,
    pub error_fg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub operator_fg: Color,
    pub action_fg: Color,
    pub equals_bg: Color,
    pub muted_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    let env = |name: &str| std::env::var(name).ok();
    color_support_from(
        env("ZCALC_COLOR_SUPPORT").as_deref(),
        env("COLORTERM").as_deref(),
        env("TERM").as_deref(),
    )
}

/// `ZCALC_COLOR_SUPPORT` wins when it names a known level; otherwise
/// `COLORTERM`/`TERM` are sniffed.
pub fn color_support_from(
    override_value: Option<&str>,
    colorterm: Option<&str>,
    term: Option<&str>,
) -> TerminalColorSupport {
    if let Some(value) = override_value {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = colorterm.unwrap_or_default().to_ascii_lowercase();
    let term = term.unwrap_or_default().to_ascii_lowercase();
    let is_direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if is_direct(&colorterm) || is_direct(&term) {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),         // DarkGray
            header_fg: Color::Indexed(6),      // Cyan
            expression_fg: Color::Indexed(15), // White
            preview_fg: Color::Indexed(8),
            error_fg: Color::Indexed(1), // Red
            button_fg: Color::Indexed(15),
            button_bg: Color::Reset,
            operator_fg: Color::Indexed(3), // Yellow
            action_fg: Color::Indexed(9),   // LightRed
            equals_bg: Color::Rgb(0x1F, 0x6F, 0xEB),
            muted_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for slot in self.slots_mut() {
            *slot = map_color_for_support(*slot, support);
        }
    }

    /// Invalid color strings are logged and leave the current color in place.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            &settings.border,
            &settings.header_fg,
            &settings.expression_fg,
            &settings.preview_fg,
            &settings.error_fg,
            &settings.button_fg,
            &settings.button_bg,
            &settings.operator_fg,
            &settings.action_fg,
            &settings.equals_bg,
            &settings.muted_fg,
        ];
        for (slot, value) in self.slots_mut().into_iter().zip(overrides) {
            let Some(value) = value else { continue };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(color = %value, "ignoring unknown theme color"),
            }
        }
    }

    // Same order as the fields of `ThemeSettings`.
    fn slots_mut(&mut self) -> [&mut Color; 11] {
        [
            &mut self.border,
            &mut self.header_fg,
            &mut self.expression_fg,
            &mut self.preview_fg,
            &mut self.error_fg,
            &mut self.button_fg,
            &mut self.button_bg,
            &mut self.operator_fg,
            &mut self.action_fg,
            &mut self.equals_bg,
            &mut self.muted_fg,
        ]
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index((0u8..=255).map(|i| (i, ansi256_index_to_rgb(i))), (r, g, b))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index((0u8..).zip(ANSI16_RGB.iter().copied()), (r, g, b))
}

fn nearest_index(palette: impl Iterator<Item = (u8, (u8, u8, u8))>, target: (u8, u8, u8)) -> u8 {
    palette
        .min_by_key(|(_, rgb)| color_distance_sq(*rgb, target))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" | "dark_grey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
