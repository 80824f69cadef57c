// Top bar rendering: page title on the left, one toggle control on the
// right. At/above the breakpoint the toggle collapses the sidebar; below it
// the toggle opens the drawer.

use ratatui::{prelude::*, widgets::*};

/// Draw the top bar and return the toggle control's hit region.
pub fn draw_topbar(frame: &mut Frame, area: Rect, narrow: bool) -> Rect {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Dashboard",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    // Hamburger collapses the sidebar on wide terminals; the grid glyph
    // opens the drawer on narrow ones.
    let glyph = if narrow { "▦" } else { "≡" };
    let toggle = Rect::new(
        inner.right().saturating_sub(4).max(inner.x),
        inner.y,
        3.min(inner.width),
        1,
    );
    frame.render_widget(
        Paragraph::new(glyph).alignment(Alignment::Center),
        toggle,
    );
    toggle
}
