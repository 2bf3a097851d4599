//! Drawing the routine screen

use super::app::{App, Focus};
use crate::domain::{JournalField, JOURNAL_HEADING};
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const CHECKED_BG: Color = Color::Rgb(0x2E, 0x7D, 0x32);
pub const UNCHECKED_BG: Color = Color::Rgb(0x42, 0x42, 0x42);

const AFFIRMATION_BUTTON: &str = "[ 🧘 Zobraz afirmaci ]";
const INPUT_PREFIX: &str = "  › ";
const HELP: &str = "Tab/↑↓ přesun · Mezerník přepnout · a afirmace · Esc konec";

/// Content lines with the focus target each one maps to
struct Content<'a> {
    lines: Vec<Line<'a>>,
    targets: Vec<Option<Focus>>,
}

impl<'a> Content<'a> {
    fn push(&mut self, line: Line<'a>, target: Option<Focus>) {
        self.lines.push(line);
        self.targets.push(target);
    }

    fn blank(&mut self) {
        self.push(Line::default(), None);
    }

    /// Line that must be visible while `focus` is focused
    fn line_of(&self, focus: Focus) -> Option<usize> {
        // Journal fields own a label and an input line; the input is the last one
        self.targets.iter().rposition(|t| *t == Some(focus))
    }
}

fn build_content(app: &App, width: u16) -> Content<'_> {
    let mut content = Content {
        lines: Vec::new(),
        targets: Vec::new(),
    };
    let focus = app.focus();
    let routine = app.routine();

    content.push(
        Line::from(Span::styled(
            app.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None,
    );
    content.push(
        Line::from(Span::styled(
            format!(
                "{} · {}/{} hotovo",
                app.today().format("%-d. %-m. %Y"),
                routine.checklist().completed(),
                routine.entries().len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        None,
    );
    content.blank();

    for (index, entry) in routine.entries().iter().enumerate() {
        let focused = focus == Focus::Entry(index);
        let bg = if entry.checked { CHECKED_BG } else { UNCHECKED_BG };
        let mut style = Style::default().bg(bg).fg(Color::White);
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let checkbox = if entry.checked { "[x]" } else { "[ ]" };
        let mut line = Line::from(vec![
            Span::raw(if focused { "›" } else { " " }),
            Span::raw(checkbox),
            Span::raw(" "),
            Span::raw(entry.label.as_str()),
        ]);
        // Background spans the whole row, not just the label
        let pad = usize::from(width).saturating_sub(line.width());
        if pad > 0 {
            line.spans.push(Span::raw(" ".repeat(pad)));
        }
        content.push(line.style(style), Some(Focus::Entry(index)));
    }
    content.blank();

    let button_style = if focus == Focus::AffirmationButton {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    content.push(
        Line::from(Span::styled(AFFIRMATION_BUTTON, button_style)),
        Some(Focus::AffirmationButton),
    );
    content.push(
        Line::from(Span::styled(
            routine.selected_affirmation(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        None,
    );
    content.blank();

    content.push(
        Line::from(Span::styled(
            JOURNAL_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None,
    );
    for field in JournalField::ALL {
        let target = Some(Focus::Journal(field));
        let focused = focus == Focus::Journal(field);
        let label_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        content.push(Line::from(Span::styled(field.label(), label_style)), target);
        content.push(
            Line::from(vec![
                Span::styled(INPUT_PREFIX, label_style),
                Span::raw(visible_tail(app.journal().get(field), input_room(width))),
            ]),
            target,
        );
    }
    content.blank();
    content.push(
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        None,
    );

    content
}

/// Columns left for journal text after the prefix and the cursor cell
fn input_room(width: u16) -> usize {
    usize::from(width).saturating_sub(INPUT_PREFIX.width() + 1)
}

/// Longest suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Smallest scroll change that keeps `line` inside a window of `height` lines
fn scroll_to_show(current: u16, line: usize, height: u16, total: usize) -> u16 {
    if height == 0 {
        return 0;
    }
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    let mut scroll = current;
    if line < scroll {
        scroll = line;
    } else if line >= scroll.saturating_add(height) {
        scroll = line + 1 - height;
    }
    let max = u16::try_from(total)
        .unwrap_or(u16::MAX)
        .saturating_sub(height);
    scroll.min(max)
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area().inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    let content = build_content(app, area.width);
    let focus = app.focus();
    let focus_line = content.line_of(focus).unwrap_or(0);
    // The first row pulls the title back into view
    let anchor = if focus == Focus::Entry(0) { 0 } else { focus_line };
    let scroll = scroll_to_show(app.scroll, anchor, area.height, content.lines.len());

    let cursor = match focus {
        Focus::Journal(field) => {
            let shown = visible_tail(app.journal().get(field), input_room(area.width));
            cursor_position(area, scroll, focus_line, shown)
        }
        _ => None,
    };

    let targets = content.targets;
    frame.render_widget(Paragraph::new(content.lines).scroll((scroll, 0)), area);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }

    app.scroll = scroll;
    app.viewport = area;
    app.line_targets = targets;
}

fn cursor_position(area: Rect, scroll: u16, line: usize, text: &str) -> Option<(u16, u16)> {
    let row = u16::try_from(line).ok()?.checked_sub(scroll)?;
    if row >= area.height || area.width == 0 {
        return None;
    }
    let width = INPUT_PREFIX.width() + text.width();
    let x = area.x + u16::try_from(width).unwrap_or(u16::MAX).min(area.width - 1);
    Some((x, area.y + row))
}
