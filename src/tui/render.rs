use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::composer::Composer;
use crate::kernel::Block;

const GUTTER: &str = "▌ ";
const GUTTER_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPlacement {
    /// Absolute line within the rendered thread.
    pub line: usize,
    pub col: usize,
}

/// Thread lines plus where the cursor of the focused block lands.
pub fn thread_lines(composer: &Composer) -> (Vec<Line<'static>>, Option<CursorPlacement>) {
    let state = composer.store().state();
    let config = composer.config();
    let focused = composer.focused_block();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor = None;

    for (index, block) in state.blocks().iter().enumerate() {
        if index > 0 {
            for _ in 0..config.block_gap {
                lines.push(Line::raw(""));
            }
        }

        let is_focused = focused == Some(block.id());
        let is_selected = state.is_selected(block.id());
        let gutter_style = if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let body_style = if is_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        lines.push(header_line(block, config.show_handles, gutter_style));

        let content_start = lines.len();
        for text in block.content().split('\n') {
            lines.push(Line::from(vec![
                Span::styled(GUTTER, gutter_style),
                Span::styled(text.to_string(), body_style),
            ]));
        }

        if is_focused {
            let surface = composer
                .registry()
                .get(block.id())
                .and_then(|handle| composer.surfaces().get(handle));
            if let Some(surface) = surface {
                let (line, col) = surface.cursor_line_col();
                cursor = Some(CursorPlacement {
                    line: content_start + line,
                    col,
                });
            }
        }
    }

    (lines, cursor)
}

fn header_line(block: &Block, show_handle: bool, gutter_style: Style) -> Line<'static> {
    let initial = block
        .display_name()
        .chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_default();
    let mut spans = vec![
        Span::styled(GUTTER, gutter_style),
        Span::styled(format!("({initial}) "), Style::default().fg(Color::Blue)),
        Span::styled(
            block.display_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if show_handle {
        spans.push(Span::styled(
            format!(" @{}", block.handle()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn status_line(composer: &Composer) -> Line<'static> {
    let state = composer.store().state();
    let selected = state.selection().len();
    let mut text = format!(" {} block(s)", state.len());
    if selected > 0 {
        text.push_str(&format!(" · {} selected", selected));
    }
    text.push_str(" · Enter×2 split · Ctrl+A×2 select all · Ctrl+Q quit");
    Line::styled(text, Style::default().fg(Color::Black).bg(Color::Gray))
}

pub fn render(composer: &Composer, frame: &mut Frame) {
    let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let (lines, cursor) = thread_lines(composer);
    let scroll = cursor.map_or(0, |c| scroll_for(c.line, body.height));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
    frame.render_widget(Paragraph::new(status_line(composer)), status);

    if let Some(c) = cursor {
        if let Some(pos) = cursor_position(body, c, scroll) {
            frame.set_cursor_position(pos);
        }
    }
}

fn scroll_for(line: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    let scroll = line.saturating_sub(height - 1);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn cursor_position(area: Rect, cursor: CursorPlacement, scroll: u16) -> Option<Position> {
    let row = cursor.line.checked_sub(scroll as usize)?;
    let row = u16::try_from(row).ok()?;
    if row >= area.height {
        return None;
    }
    let col = u16::try_from(cursor.col).ok()?.saturating_add(GUTTER_WIDTH);
    let col = col.min(area.width.saturating_sub(1));
    Some(Position::new(area.x + col, area.y + row))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;
