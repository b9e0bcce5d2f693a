use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::state::ToastState;
use crate::game::NotificationKind;
use crate::ui::theme::{HEADER_TEXT, STATUS_WARNING};

const TOAST_HEIGHT: u16 = 3;
const TOAST_MARGIN: u16 = 1;

/// Draw live toasts stacked from the top-right corner of `area`, newest on top.
pub fn render_toasts(frame: &mut Frame<'_>, state: &ToastState, area: Rect) {
    let mut y = area.y + TOAST_MARGIN;
    for toast in state.toasts().collect::<Vec<_>>().into_iter().rev() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }

        let (icon, color) = match toast.kind {
            NotificationKind::Warning => ("⚠", STATUS_WARNING),
        };
        let text_width = toast.message.chars().count() as u16 + 4;
        let width = text_width.saturating_add(2).min(area.width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width + TOAST_MARGIN),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(toast.message.clone(), Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );

        y += TOAST_HEIGHT;
    }
}
