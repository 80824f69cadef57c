// App state and main event loop.
// Owns the shell view-state, the router, and the page registry; translates
// key and mouse events into state transitions.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use ratatui::prelude::*;

use crate::config::Config;
use crate::nav::{self, APPS_ROUTE, DASHBOARD_ITEMS, NavRow};
use crate::pages::PageRegistry;
use crate::router::Router;
use crate::state::ShellState;
use crate::ui::{self, HitRegions};

/// Main application state.
pub struct App {
    /// Layout configuration (breakpoint, sidebar widths).
    pub config: Config,
    /// Router collaborator providing the current path.
    pub router: Router,
    /// Registered content pages.
    pub pages: PageRegistry,
    /// The shell's view-state flags.
    pub shell: ShellState,
    /// Keyboard highlight across the visible nav rows.
    pub selected: Option<usize>,
    /// Hit regions recorded by the last draw.
    pub hits: HitRegions,
    /// Terminal width seen by the last draw.
    pub viewport_width: u16,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, initial_route: impl Into<String>, collapsed: bool) -> Self {
        let router = Router::new(initial_route);
        let mut shell = ShellState::new(collapsed);
        // Starting on an active route opens the submenu, same as navigating
        // into the section.
        shell.route_changed(false, nav::section_active(router.path()));

        Self {
            config,
            router,
            pages: PageRegistry::with_defaults(),
            shell,
            selected: None,
            hits: HitRegions::default(),
            viewport_width: 0,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Whether the last-drawn viewport is below the layout breakpoint.
    fn narrow(&self) -> bool {
        self.viewport_width < self.config.breakpoint
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') if !self.narrow() => self.shell.toggle_collapsed(),
            KeyCode::Char('m') if self.narrow() => self.shell.toggle_drawer(),
            KeyCode::Esc => self.shell.close_drawer(),
            KeyCode::Backspace => self.navigate_back(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter => {
                let row = self
                    .selected
                    .and_then(|i| self.hits.rows.get(i))
                    .map(|&(row, _)| row);
                if let Some(row) = row {
                    self.activate(row);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let over = self.hits.sidebar.is_some_and(|rect| rect.contains(pos));
                self.shell.set_hovered(over);
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(pos),
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) {
        if self.hits.drawer_close.is_some_and(|rect| rect.contains(pos)) {
            self.shell.close_drawer();
            return;
        }
        if self
            .hits
            .collapse_toggle
            .is_some_and(|rect| rect.contains(pos))
        {
            self.shell.toggle_collapsed();
            return;
        }
        if self
            .hits
            .drawer_toggle
            .is_some_and(|rect| rect.contains(pos))
        {
            self.shell.toggle_drawer();
            return;
        }
        let row = self
            .hits
            .rows
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|&(row, _)| row);
        if let Some(row) = row {
            self.activate(row);
            return;
        }
        if self.hits.overlay.is_some_and(|rect| rect.contains(pos)) {
            self.shell.close_drawer();
        }
    }

    /// Activate a nav row: toggle the submenu or follow a link.
    pub fn activate(&mut self, row: NavRow) {
        tracing::debug!(?row, "activate nav row");
        match row {
            NavRow::DashboardsToggle => self.shell.toggle_submenu(),
            NavRow::Submenu(i) => {
                if let Some(item) = DASHBOARD_ITEMS.get(i) {
                    self.follow_link(item.target);
                }
            }
            NavRow::Apps => self.follow_link(APPS_ROUTE),
        }
    }

    /// Navigate to a link target; below the breakpoint this also dismisses
    /// the drawer.
    fn follow_link(&mut self, target: &str) {
        self.navigate(target);
        if self.narrow() {
            self.shell.close_drawer();
        }
    }

    /// Navigate to a path and apply the route-change synchronization.
    pub fn navigate(&mut self, to: &str) {
        self.sync_route(|router| router.navigate(to));
    }

    /// Go back in history and apply the route-change synchronization.
    pub fn navigate_back(&mut self) {
        self.sync_route(Router::back);
    }

    /// Run a navigation primitive, then feed the active-section transition
    /// into the shell state. Runs only when the path actually changed.
    fn sync_route(&mut self, navigate: impl FnOnce(&mut Router) -> bool) {
        let prev_active = nav::section_active(self.router.path());
        if navigate(&mut self.router) {
            let curr_active = nav::section_active(self.router.path());
            self.shell.route_changed(prev_active, curr_active);
        }
    }

    /// Move the keyboard highlight to the next visible row.
    fn select_next(&mut self) {
        let len = self.hits.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 >= len => i, // Stay at end
            Some(i) => i + 1,
            None => 0,
        };
        self.selected = Some(i);
    }

    /// Move the keyboard highlight to the previous visible row.
    fn select_prev(&mut self) {
        let len = self.hits.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(i.min(len - 1));
    }
}
