// Sidebar rendering, shared by the in-flow desktop presentation and the
// off-canvas drawer. Records the screen region of every activatable row so
// the event loop can hit-test mouse clicks against the drawn layout.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::nav::{self, DASHBOARD_ITEMS, NavRow, SubItem};

/// Hit regions produced by one sidebar draw.
pub struct SidebarRender {
    /// Activatable rows in render order, with their one-line regions.
    pub rows: Vec<(NavRow, Rect)>,
    /// The drawer close button, when shown.
    pub close: Option<Rect>,
}

/// Draw the sidebar into `area`.
///
/// `expanded` gates labels, the section title, the chevron, and the submenu;
/// when false only icons render. The drawer always passes `expanded = true`,
/// collapse is a desktop-only presentation.
pub fn draw_sidebar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    expanded: bool,
    show_close: bool,
) -> SidebarRender {
    let outer = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    draw_brand(frame, chunks[0], expanded);

    let close = if show_close {
        Some(draw_close_button(frame, area))
    } else {
        None
    };

    let rows = draw_menu(frame, app, chunks[1], expanded);

    SidebarRender { rows, close }
}

/// Brand header. Hidden entirely (text and separator) when collapsed.
fn draw_brand(frame: &mut Frame, area: Rect, expanded: bool) {
    if !expanded {
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(
            "VEL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "ZON",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(brand).alignment(Alignment::Center),
        inner,
    );
}

/// Close button in the drawer's top-right corner.
fn draw_close_button(frame: &mut Frame, area: Rect) -> Rect {
    let rect = Rect::new(
        area.right().saturating_sub(3).max(area.x),
        area.y,
        3.min(area.width),
        1,
    );
    frame.render_widget(
        Paragraph::new("✕")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
        rect,
    );
    rect
}

/// Menu section: title, Dashboards group, submenu, Apps link. Row order
/// comes from [`nav::visible_rows`], the same projection the event loop
/// drives keyboard selection over.
fn draw_menu(frame: &mut Frame, app: &App, area: Rect, expanded: bool) -> Vec<(NavRow, Rect)> {
    let mut lines: Vec<Line> = Vec::new();
    let mut rows: Vec<(NavRow, Rect)> = Vec::new();
    let path = app.router.path();

    if expanded {
        lines.push(Line::from(Span::styled(
            " MENU",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    for row in nav::visible_rows(expanded, app.shell.submenu_open) {
        let selected = app.selected == Some(rows.len());
        let line = match row {
            NavRow::DashboardsToggle => {
                dashboards_line(area.width, expanded, app.shell.submenu_open, selected)
            }
            NavRow::Submenu(i) => submenu_line(&DASHBOARD_ITEMS[i], path, selected),
            NavRow::Apps => {
                lines.push(Line::default());
                item_line(" ▦ Apps", "▦", expanded, selected)
            }
        };
        rows.push((row, row_rect(area, lines.len())));
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Rows that fell below the visible area are not clickable.
    rows.retain(|(_, rect)| rect.y < area.bottom());
    rows
}

/// A submenu entry row. The active link is the one whose target equals the
/// current path exactly.
fn submenu_line(item: &SubItem, path: &str, selected: bool) -> Line<'static> {
    let style = if nav::link_active(item, path) {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut line = Line::from(vec![
        Span::raw("   "),
        Span::styled("⋯ ", Style::default().fg(Color::DarkGray)),
        Span::styled(item.label, style),
    ]);
    if selected {
        line = line.style(Style::default().bg(Color::DarkGray));
    }
    line
}

/// The Dashboards group header row, with a right-aligned chevron when expanded.
fn dashboards_line(width: u16, expanded: bool, open: bool, selected: bool) -> Line<'static> {
    let mut line = if expanded {
        let chevron = if open { "▾" } else { "▸" };
        let used = " ◉ Dashboards".chars().count() + 2;
        let pad = (width as usize).saturating_sub(used);
        Line::from(vec![
            Span::styled(" ◉ ", Style::default().fg(Color::White)),
            Span::styled("Dashboards", Style::default().fg(Color::White)),
            Span::raw(" ".repeat(pad)),
            Span::styled(chevron, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled("◉", Style::default().fg(Color::White)))
            .alignment(Alignment::Center)
    };
    if selected {
        line = line.style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    }
    line
}

/// A flat link row: full label when expanded, centered icon otherwise.
fn item_line(label: &'static str, icon: &'static str, expanded: bool, selected: bool) -> Line<'static> {
    let mut line = if expanded {
        Line::from(Span::styled(label, Style::default().fg(Color::White)))
    } else {
        Line::from(Span::styled(icon, Style::default().fg(Color::White)))
            .alignment(Alignment::Center)
    };
    if selected {
        line = line.style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    }
    line
}

fn row_rect(area: Rect, line_index: usize) -> Rect {
    Rect {
        x: area.x,
        y: area.y.saturating_add(line_index as u16),
        width: area.width,
        height: 1,
    }
}
