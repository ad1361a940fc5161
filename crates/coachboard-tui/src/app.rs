//! TUI application state and key routing

use coachboard_core::catalog::Tone;
use coachboard_core::nav::{NavRow, NavState};
use coachboard_core::{AppConfig, ColorScheme, DataStore, Page};
use crossterm::event::KeyCode;
use tracing::debug;

use crate::components::ToastStack;
use crate::pages::PageState;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// TUI application state
pub struct App {
    pub store: &'static DataStore,
    pub config: AppConfig,
    pub scheme: ColorScheme,
    pub page: Page,
    pub nav: NavState,
    pub page_state: PageState,
    pub focus: Focus,
    pub toasts: ToastStack,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: &'static DataStore, config: AppConfig) -> Self {
        let scheme = config.preferences.color_scheme;
        let page = Page::Dashboard;
        let page_state = PageState::build(&page, store);
        Self {
            store,
            config,
            scheme,
            page,
            nav: NavState::new(),
            page_state,
            focus: Focus::Sidebar,
            toasts: ToastStack::default(),
            should_quit: false,
        }
    }

    /// Navigate to a page, rebuilding its state and revealing it in the
    /// sidebar. Filter and selection state does not survive navigation.
    pub fn navigate(&mut self, page: Page) {
        debug!(path = %page.path(), "navigate");
        self.nav.reveal(&page);
        self.page_state = PageState::build(&page, self.store);
        self.page = page;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        // Text input owns the keyboard while the search bar is active.
        if self.page_state.searching() {
            if let Some(feedback) = self.page_state.handle_key(key) {
                self.toasts.push(feedback.message, feedback.tone);
            }
            return;
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_scheme();
                return;
            }
            KeyCode::Esc => {
                if self.page != Page::Dashboard {
                    self.navigate(Page::Dashboard);
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content => {
                if let Some(feedback) = self.page_state.handle_key(key) {
                    self.toasts.push(feedback.message, feedback.tone);
                }
            }
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyCode) {
        let rows = self.nav.rows(&self.page);
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.nav.move_cursor(-1, rows.len()),
            KeyCode::Down | KeyCode::Char('j') => self.nav.move_cursor(1, rows.len()),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                match rows.get(self.nav.cursor).copied() {
                    Some(NavRow::SectionHeader { title, .. }) => {
                        if key == KeyCode::Enter || !self.nav.is_open(title) {
                            self.nav.toggle(title);
                        }
                    }
                    Some(row) => {
                        if let Some(path) = row.target() {
                            self.navigate(Page::parse(path));
                            self.focus = Focus::Content;
                        }
                    }
                    None => {}
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(NavRow::SectionHeader { title, open: true, .. }) =
                    rows.get(self.nav.cursor).copied()
                {
                    self.nav.toggle(title);
                }
            }
            _ => {}
        }
    }

    fn toggle_scheme(&mut self) {
        self.scheme = self.scheme.toggled();
        self.config.preferences.color_scheme = self.scheme;
        if let Some(dir) = coachboard_core::config::config_dir() {
            if let Err(e) = self.config.preferences.save(&dir) {
                debug!(error = %e, "failed to persist preferences");
            }
        }
        self.toasts.push(
            match self.scheme {
                ColorScheme::Dark => "Dark theme",
                ColorScheme::Light => "Light theme",
            },
            Tone::Info,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coachboard_core::seed;

    fn app() -> App {
        App::new(seed::store(), AppConfig::default())
    }

    #[test]
    fn test_navigation_rebuilds_page_state() {
        let mut app = app();
        app.navigate(Page::CheckinsSubmitted);
        assert_eq!(app.page, Page::CheckinsSubmitted);
        assert!(app.nav.is_open("Client Check-ins"));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Sidebar);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_escape_returns_to_dashboard() {
        let mut app = app();
        app.navigate(Page::Leads);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_sidebar_enter_opens_section_then_leaf() {
        let mut app = app();
        // Cursor row 1 is the "Clients" section header.
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert!(app.nav.is_open("Clients"));

        // Next row is now the "All Clients" leaf.
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.page, Page::Clients);
        assert_eq!(app.focus, Focus::Content);
    }
}
