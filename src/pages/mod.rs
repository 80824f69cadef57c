// Content pages rendered inside the shell's content slot.
// The shell imposes no contract on a page beyond drawing into its area.

mod account;
mod dashboard;

use ratatui::prelude::*;

pub use account::AccountSettingsPage;
pub use dashboard::DashboardPage;

/// An opaque content renderable. The shell draws whatever the page draws,
/// unchanged, into the content slot.
pub trait Page {
    fn title(&self) -> &'static str;
    fn draw(&self, frame: &mut Frame, area: Rect);
}

/// Maps exact paths to page implementations.
pub struct PageRegistry {
    entries: Vec<(&'static str, Box<dyn Page>)>,
}

impl PageRegistry {
    /// Registry with the two built-in content pages.
    pub fn with_defaults() -> Self {
        Self {
            entries: vec![
                ("/dashboard", Box::new(DashboardPage)),
                (
                    "/dashboard/settings/account",
                    Box::new(AccountSettingsPage),
                ),
            ],
        }
    }

    /// Look up the page registered for an exact path.
    pub fn get(&self, path: &str) -> Option<&dyn Page> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == path)
            .map(|(_, page)| page.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = PageRegistry::with_defaults();
        assert_eq!(
            registry.get("/dashboard").map(|p| p.title()),
            Some("Welcome to the Dashboard")
        );
        assert_eq!(
            registry.get("/dashboard/settings/account").map(|p| p.title()),
            Some("Account Settings")
        );
        assert!(registry.get("/dashboard/crm").is_none());
        assert!(registry.get("/unknown").is_none());
    }
}
