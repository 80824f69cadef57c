// Account settings page.

use ratatui::{prelude::*, widgets::*};

use super::Page;

pub struct AccountSettingsPage;

impl Page for AccountSettingsPage {
    fn title(&self) -> &'static str {
        "Account Settings"
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
            Line::from("Here you can change your account settings."),
        ];

        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    }
}
