use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    restart_offered: bool,
}

impl Footer {
    pub fn new(restart_offered: bool) -> Self {
        Self { restart_offered }
    }

    pub fn hints(&self) -> &'static str {
        if self.restart_offered {
            " Enter/R: Play again │ Esc: Quit"
        } else {
            " 0-9: Type │ Enter: Guess │ Backspace: Delete │ Esc: Quit"
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);
        let gap = spacer(area.width, &[hints, &version]);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(gap, text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Blank run that pushes the last part flush right inside a bordered row.
fn spacer(row_width: u16, parts: &[&str]) -> String {
    let inner = usize::from(row_width.saturating_sub(2));
    let taken: usize = parts.iter().map(|part| part.chars().count()).sum();
    " ".repeat(inner.saturating_sub(taken))
}
