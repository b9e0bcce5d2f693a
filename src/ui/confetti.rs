use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::confetti::{ConfettiField, SHAPE_COUNT};
use crate::ui::theme::CONFETTI_COLORS;

const SHAPES: [&str; SHAPE_COUNT] = ["▪", "•", "▴", "◆"];

/// Paints a running confetti burst over whatever is already in the buffer.
pub struct ConfettiLayer<'a> {
    field: &'a ConfettiField,
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(field: &'a ConfettiField) -> Self {
        Self { field }
    }
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for particle in self.field.particles() {
            let (nx, ny) = particle.position();
            if !(0.0..1.0).contains(&nx) || !(0.0..1.0).contains(&ny) {
                continue;
            }
            let x = area.x + (nx * f64::from(area.width)) as u16;
            let y = area.y + (ny * f64::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(SHAPES[particle.shape % SHAPE_COUNT])
                    .set_style(Style::default().fg(CONFETTI_COLORS[particle.color % CONFETTI_COLORS.len()]));
            }
        }
    }
}
