use std::time::Instant;

use crate::game::MessageKind;
use crate::ui::app::App;
use crate::ui::confetti::ConfettiLayer;
use crate::ui::footer::Footer;
use crate::ui::form::GuessFormState;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, layout_regions};
use crate::ui::screen::Alert;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, INPUT_BORDER, STATUS_ERROR, STATUS_OK,
};
use crate::ui::toast::render_toasts;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DESCRIPTION: &str = "Guess the number is a game in which you have to guess the number \
given by the computer between 0 and 10. Use as few tries as possible. Good luck!";
const PLACEHOLDER: &str = "Enter the number";
const COLUMN_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.game().session();
    let screen = app.screen();

    frame.render_widget(
        Header::new(session.attempts_remaining(), session.status()).widget(),
        header,
    );
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    frame.render_widget(Footer::new(screen.restart_offered()).widget(footer), footer);

    if let Some(field) = screen.confetti() {
        frame.render_widget(ConfettiLayer::new(field), body);
    }
    render_toasts(frame, screen.toasts(), area);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let screen = app.screen();
    let column = centered_column(body, COLUMN_WIDTH);
    let description_lines = wrapped_height(DESCRIPTION, column.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(description_lines),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(DESCRIPTION)
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    if !screen.form().is_removed() {
        draw_input(frame, screen.form(), rows[3]);
    }

    if let Some(alert) = screen.alert() {
        draw_alert(frame, alert, rows[4]);
    }

    if screen.restart_offered() {
        let button = Line::from(Span::styled(
            "  Play again?  ",
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), rows[5]);
    }
}

fn draw_input(frame: &mut Frame<'_>, form: &GuessFormState, area: Rect) {
    let (border, title) = match form.cooldown() {
        Some(cooldown) => {
            let secs = cooldown.remaining(Instant::now()).as_secs_f32().ceil() as u64;
            (STATUS_ERROR, format!(" Locked {}s ", secs.max(1)))
        }
        None => (INPUT_BORDER, " Your guess ".to_string()),
    };

    let content = if form.input().is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(HEADER_SEPARATOR))
    } else {
        Span::styled(form.input().to_string(), Style::default().fg(HEADER_TEXT))
    };

    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );

    if form.accepts_input() && area.width > 2 && area.height > 2 {
        let offset = form.input().chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_alert(frame: &mut Frame<'_>, alert: &Alert, area: Rect) {
    let color = match alert.kind {
        MessageKind::Error | MessageKind::Lost => STATUS_ERROR,
        MessageKind::Success => STATUS_OK,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            alert.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}

/// Rough line count for `text` wrapped at `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let chars = text.chars().count() as u16;
    chars.div_ceil(width) + 1
}
