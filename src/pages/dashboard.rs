// Dashboard landing page.

use ratatui::{prelude::*, widgets::*};

use super::Page;

pub struct DashboardPage;

impl Page for DashboardPage {
    fn title(&self) -> &'static str {
        "Welcome to the Dashboard"
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let inner = area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        let text = vec![
            Line::from(Span::styled(
                self.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Here is your dashboard content..."),
        ];

        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    }
}
