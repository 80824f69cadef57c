// UI module for rendering the shell.
// Picks the in-flow or drawer layout from the terminal width, draws the
// sidebar, top bar, and content slot, and records hit regions for the
// event loop.

mod sidebar;
mod topbar;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::nav::NavRow;

/// Screen regions recorded by the last draw, used to hit-test mouse events.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// The sidebar area (in-flow or drawer). None when hidden.
    pub sidebar: Option<Rect>,
    /// Top bar collapse toggle (at/above the breakpoint).
    pub collapse_toggle: Option<Rect>,
    /// Top bar drawer toggle (below the breakpoint).
    pub drawer_toggle: Option<Rect>,
    /// Drawer close button.
    pub drawer_close: Option<Rect>,
    /// Dimmed region that dismisses the drawer on click.
    pub overlay: Option<Rect>,
    /// Activatable nav rows in render order.
    pub rows: Vec<(NavRow, Rect)>,
}

/// Main draw function that renders the entire shell.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.viewport_width = area.width;

    let mut hits = HitRegions::default();

    if area.width >= app.config.breakpoint {
        // In-flow sidebar: wide when effectively expanded, icon-only otherwise.
        let width = if app.shell.effective_expanded() {
            app.config.sidebar_width
        } else {
            app.config.collapsed_width
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(1)])
            .split(area);

        let render =
            sidebar::draw_sidebar(frame, app, chunks[0], app.shell.effective_expanded(), false);
        hits.sidebar = Some(chunks[0]);
        hits.rows = render.rows;

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(chunks[1]);
        hits.collapse_toggle = Some(topbar::draw_topbar(frame, right[0], false));
        draw_content(frame, app, right[1]);
    } else {
        // Narrow viewport: content takes the full width, the sidebar only
        // appears as the drawer overlay.
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);
        hits.drawer_toggle = Some(topbar::draw_topbar(frame, chunks[0], true));
        draw_content(frame, app, chunks[1]);

        if app.shell.drawer_open {
            // Dim everything, then draw the drawer on top of the left edge.
            frame
                .buffer_mut()
                .set_style(area, Style::default().add_modifier(Modifier::DIM));

            let width = app.config.sidebar_width.min(area.width);
            let drawer = Rect::new(area.x, area.y, width, area.height);
            frame.render_widget(Clear, drawer);

            let render = sidebar::draw_sidebar(frame, app, drawer, true, true);
            hits.sidebar = Some(drawer);
            hits.rows = render.rows;
            hits.drawer_close = render.close;

            if area.width > width {
                hits.overlay = Some(Rect::new(
                    area.x + width,
                    area.y,
                    area.width - width,
                    area.height,
                ));
            }
        }
    }

    // Keep the keyboard highlight inside the visible rows.
    app.selected = match app.selected {
        Some(_) if hits.rows.is_empty() => None,
        Some(i) => Some(i.min(hits.rows.len() - 1)),
        None => None,
    };

    app.hits = hits;
}

/// Render the registered page for the current path, or the empty state.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.pages.get(app.router.path()) {
        Some(page) => page.draw(frame, area),
        None => {
            let text = vec![
                Line::from(Span::styled(
                    "Nothing to show here yet",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    app.router.path().to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text).alignment(Alignment::Center),
                area.inner(Margin {
                    horizontal: 2,
                    vertical: 1,
                }),
            );
        }
    }
}
