use std::cmp::min;
use std::time::Instant;

use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::interaction::{tab_label, FabAction, NavigationHost};
use crate::tui::constants::*;
use crate::tui::helpers::{
    accent_title, bottom_right_rect, build_help_lines, centered_rect, fab_glyph, format_due,
    priority_color, progress_bar, tab_icon, toast_drop, BG_ACCENT, BG_BASE, BG_PANEL, FG_ACCENT,
    FG_DANGER, FG_MUTED, FG_SUCCESS, FG_WARNING,
};

use super::{App, InputMode, Screen};

const TOAST_TRAVEL_ROWS: u16 = 2;
// Highlight symbol, name, count and percentage columns around a category bar.
const CATEGORY_FIXED_COLUMNS: usize = 2 + 16 + 7 + 5;

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        self.draw_at(f, Instant::now(), Utc::now());
    }

    /// `now` drives animations; `today` decides which due dates are overdue.
    pub(crate) fn draw_at(&mut self, f: &mut Frame<'_>, now: Instant, today: DateTime<Utc>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(4),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        match self.current_screen() {
            Screen::Focused => self.draw_focused(f, chunks[1], today),
            Screen::Backlogs => {
                draw_placeholder(f, chunks[1], BACKLOGS_TITLE, BACKLOGS_SUBTITLE);
                self.draw_fab(f, chunks[1], now);
            }
            Screen::Goals => draw_placeholder(f, chunks[1], GOALS_TITLE, GOALS_SUBTITLE),
            Screen::Progress => self.draw_progress(f, chunks[1]),
        }
        self.draw_tab_bar(f, chunks[2]);
        self.draw_toast(f, chunks[1], now);
        self.draw_footer(f, chunks[3]);

        if self.input_mode == InputMode::Help {
            self.draw_help_overlay(f, size);
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" focusboard v{} ", APP_VERSION),
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("h for help", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_focused(&mut self, f: &mut Frame<'_>, area: Rect, today: DateTime<Utc>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3)])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                FOCUSED_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} tasks", self.focused.tasks.len()),
                Style::default().fg(FG_MUTED),
            ),
        ]);
        f.render_widget(Paragraph::new(header), rows[0]);

        let items: Vec<ListItem> = self
            .focused
            .tasks
            .iter()
            .map(|task| {
                let text_style = if task.completed {
                    Style::default()
                        .fg(FG_MUTED)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                let mark = if task.completed { "☑" } else { "☐" };

                let mut footer = vec![Span::styled(
                    task.category.clone(),
                    Style::default().fg(FG_ACCENT),
                )];
                if let Some(due) = &task.due_at {
                    let due_style = if task.is_overdue(today) {
                        Style::default().fg(FG_DANGER)
                    } else {
                        Style::default().fg(FG_MUTED)
                    };
                    footer.push(Span::raw("  "));
                    footer.push(Span::styled(format!("Due: {}", format_due(due)), due_style));
                }

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", mark), text_style),
                        Span::styled(
                            task.title.clone(),
                            text_style.add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            format!(" {} ", task.priority),
                            Style::default()
                                .fg(Color::Black)
                                .bg(priority_color(task.priority)),
                        ),
                    ]),
                    Line::from(Span::styled(format!("  {}", task.description), text_style)),
                    Line::from(
                        std::iter::once(Span::raw("  "))
                            .chain(footer)
                            .collect::<Vec<_>>(),
                    ),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .highlight_style(Style::default().bg(BG_ACCENT))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, rows[1], &mut self.focused.list_state);
    }

    fn draw_progress(&mut self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.progress.stats();
        let categories = self.progress.category_stats();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    PROGRESS_TITLE,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(PROGRESS_SUBTITLE, Style::default().fg(FG_MUTED))),
            ]),
            rows[0],
        );

        let circle = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{}%", stats.progress_percentage),
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Complete", Style::default().fg(FG_MUTED))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FG_ACCENT))
                .style(Style::default().bg(BG_PANEL)),
        );
        f.render_widget(circle, centered_rect(20, 4, rows[1]));

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[2]);
        let card_values = [
            ("Total Tasks", stats.total, "All tasks", FG_ACCENT),
            ("Completed", stats.completed, "Finished tasks", FG_SUCCESS),
            ("Pending", stats.pending, "Remaining tasks", FG_WARNING),
        ];
        for ((title, value, subtitle, color), area) in card_values.into_iter().zip(cards.iter()) {
            draw_stat_card(f, *area, title, value, subtitle, color);
        }

        let section = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(CATEGORY_SECTION_TITLE))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner_width = section.inner(rows[3]).width as usize;
        let bar_width = inner_width.saturating_sub(CATEGORY_FIXED_COLUMNS);

        let items: Vec<ListItem> = categories
            .iter()
            .map(|category| {
                let color = if category.is_complete() {
                    FG_SUCCESS
                } else {
                    FG_ACCENT
                };
                let count = format!("{}/{}", category.completed, category.total);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<16}", category.category),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>6} ", count),
                        Style::default().fg(FG_MUTED),
                    ),
                    Span::styled(
                        progress_bar(category.percentage, bar_width),
                        Style::default().fg(color),
                    ),
                    Span::styled(
                        format!(" {:>3}%", category.percentage),
                        Style::default().fg(color),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(section)
            .highlight_style(Style::default().bg(BG_ACCENT))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, rows[3], &mut self.progress.category_state);
    }

    fn draw_fab(&self, f: &mut Frame<'_>, area: Rect, now: Instant) {
        let mut icon_style = Style::default()
            .fg(Color::White)
            .bg(FG_ACCENT)
            .add_modifier(Modifier::BOLD);
        if self.fab.icon_scale(now) > 1.05 {
            icon_style = icon_style.add_modifier(Modifier::REVERSED);
        }
        let button = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", fab_glyph(self.fab.icon_rotation(now))),
            icon_style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FG_ACCENT)),
        );
        let button_area = bottom_right_rect(7, 3, 1, area);
        f.render_widget(Clear, button_area);
        f.render_widget(button, button_area);

        let actions = self.fab.visible_actions();
        if actions.is_empty() {
            return;
        }

        let width = min(area.width.saturating_sub(4), 40);
        let menu_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height.saturating_sub(actions.len() as u16 + 3),
            width,
            height: min(actions.len() as u16 + 2, area.height),
        };
        let lines: Vec<Line> = actions
            .iter()
            .enumerate()
            .map(|(idx, action)| {
                let (icon, color, key) = match action {
                    FabAction::RegularTask => ("☑", FG_ACCENT, "r"),
                    FabAction::RecurringTask => ("↻", FG_SUCCESS, "c"),
                };
                let mut style = Style::default().fg(Color::White);
                if idx == self.fab_cursor {
                    style = style.bg(BG_ACCENT).add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                    Span::styled(format!("{:<24}", action.label()), style),
                    Span::styled(format!("[{}]", key), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        f.render_widget(Clear, menu_area);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Quick add"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            ),
            menu_area,
        );
    }

    fn draw_tab_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let state = self.navigator.state();
        if state.routes.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = state
            .routes
            .iter()
            .map(|_| Constraint::Ratio(1, state.routes.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (idx, (route, cell)) in state.routes.iter().zip(cells.iter()).enumerate() {
            let focused = state.is_focused(idx);
            let color = if focused { FG_ACCENT } else { FG_MUTED };
            let indicator = if focused { "•" } else { " " };
            let tab = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", tab_icon(&route.name), idx + 1),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(indicator, Style::default().fg(FG_ACCENT))),
            ])
            .alignment(Alignment::Center);
            f.render_widget(tab, *cell);
        }
    }

    fn draw_toast(&self, f: &mut Frame<'_>, body: Rect, now: Instant) {
        let toast = self.tab_bar.toast();
        let Some(label) = toast.label() else {
            return;
        };
        let lift = toast_drop(toast.offset(now), TOAST_TRAVEL_ROWS);
        if lift >= TOAST_TRAVEL_ROWS || body.height < TOAST_TRAVEL_ROWS + 3 {
            return;
        }

        let width = min(label.chars().count() as u16 + 6, body.width);
        let area = Rect {
            x: body.x + (body.width.saturating_sub(width)) / 2,
            y: body.y + (TOAST_TRAVEL_ROWS - lift),
            width,
            height: 3,
        };
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(Color::Rgb(30, 41, 59))),
            ),
            area,
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            let route = self
                .navigator
                .state()
                .focused_route()
                .map(|route| tab_label(&route.name).to_string())
                .unwrap_or_default();
            Line::from(vec![Span::raw(route)])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let help = match self.input_mode {
            InputMode::Normal => match self.current_screen() {
                Screen::Focused => {
                    "tabs: 1-4 | tab/shift+tab cycle | L name | j/k move | space toggle ✅ | h help | q quit"
                }
                Screen::Backlogs => {
                    "tabs: 1-4 | tab/shift+tab cycle | L name | + quick add ✚ | h help | q quit"
                }
                Screen::Goals => "tabs: 1-4 | tab/shift+tab cycle | L name | h help | q quit",
                Screen::Progress => {
                    "tabs: 1-4 | tab/shift+tab cycle | L name | j/k scroll categories | h help | q quit"
                }
            },
            InputMode::FabMenu => "r regular • c recurring • ↑/↓ + Enter choose • Esc close",
            InputMode::Help => "Enter/Esc to close ❔",
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                help,
                Style::default().fg(Color::DarkGray),
            ))),
            lines[1],
        );
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let entries = build_help_lines();
        let width = min(area.width.saturating_sub(8), 72);
        let height = min(entries.len() as u16 + 2, area.height);
        let popup = centered_rect(width, height, area);

        let lines: Vec<Line> = entries
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<26}", keys),
                        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(description),
                ])
            })
            .collect();

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Keyboard"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            ),
            popup,
        );
    }
}

fn draw_placeholder(f: &mut Frame<'_>, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(FG_MUTED),
        )),
    ];
    let content = centered_rect(area.width, lines.len() as u16, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content,
    );
}

fn draw_stat_card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    value: usize,
    subtitle: &str,
    color: Color,
) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(title.to_string(), Style::default().fg(color))),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(FG_MUTED),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(BG_PANEL)),
    );
    f.render_widget(card, area);
}
