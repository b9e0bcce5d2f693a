use crate::game::{Status, MAX_ATTEMPTS};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    attempts_remaining: u8,
    status: Status,
}

impl Header {
    pub fn new(attempts_remaining: u8, status: Status) -> Self {
        Self {
            attempts_remaining,
            status,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = match self.status {
            Status::Playing => ("Playing", ACCENT),
            Status::Won => ("Won", STATUS_OK),
            Status::Lost => ("Lost", STATUS_ERROR),
        };

        let hearts: String = (0..MAX_ATTEMPTS)
            .map(|i| if i < self.attempts_remaining { '●' } else { '○' })
            .collect();

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Guess Number",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Attempts ", text_style),
            Span::styled(hearts, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
