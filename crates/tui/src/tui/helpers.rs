use std::cmp::min;

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Priority;

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(59, 130, 246);
pub const FG_MUTED: Color = Color::Rgb(100, 116, 139);
pub const FG_SUCCESS: Color = Color::Rgb(16, 185, 129);
pub const FG_WARNING: Color = Color::Rgb(245, 158, 11);
pub const FG_DANGER: Color = Color::Rgb(239, 68, 68);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Rect of `width` x `height` anchored to the bottom-right corner of `area`.
pub fn bottom_right_rect(width: u16, height: u16, margin: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w + margin).min(area.width - w),
        y: area.y + area.height.saturating_sub(h + margin).min(area.height - h),
        width: w,
        height: h,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => FG_DANGER,
        Priority::Medium => FG_WARNING,
        Priority::Low => FG_SUCCESS,
    }
}

pub fn tab_icon(route_name: &str) -> &'static str {
    match route_name {
        "Focused" => "◎",
        "Backlogs" => "☰",
        "Goals" => "⚑",
        "Progress" => "◔",
        _ => "☰",
    }
}

/// The FAB shows a plus that turns into a cross past half of its rotation.
pub fn fab_glyph(rotation_degrees: f32) -> &'static str {
    if rotation_degrees >= 22.5 {
        "✕"
    } else {
        "+"
    }
}

/// Rows a toast sits below its resting position for a given slide offset.
pub fn toast_drop(offset: f32, travel_rows: u16) -> u16 {
    let hidden = -crate::interaction::toast::TOAST_HIDDEN_OFFSET;
    let fraction = (-offset / hidden).clamp(0.0, 1.0);
    (fraction * f32::from(travel_rows)).round() as u16
}

pub fn format_due(value: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = (*value).into();
    local.format("%Y-%m-%d").to_string()
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1 2 3 4", "Open Focused, Backlogs, Goals, Progress"),
        ("Tab / Shift+Tab or → / ←", "Cycle tabs"),
        ("Alt+1..4 or L", "Long-press a tab to show its name"),
        ("j / k or ↓ / ↑", "Move through tasks or categories"),
        ("Space / Enter", "Toggle task completion (Focused)"),
        ("+ / a", "Open quick add (Backlogs)"),
        ("r / c", "Regular or recurring task (quick add open)"),
        ("Esc", "Close overlays"),
        ("h / ?", "Toggle this help overlay"),
        ("q", "Quit"),
    ]
}

/// Text bar `width` cells wide with `percentage` of it filled.
pub fn progress_bar(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}
