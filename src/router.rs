// In-process router collaborator.
// Owns the current navigation path and a back history; the shell reads the
// path and requests navigation, it never mutates the path directly.

/// Client-side navigation state.
#[derive(Debug, Clone)]
pub struct Router {
    path: String,
    history: Vec<String>,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: initial.into(),
            history: Vec::new(),
        }
    }

    /// The current navigation path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Navigate to a target path. Returns false (and records nothing) when
    /// already there.
    pub fn navigate(&mut self, to: &str) -> bool {
        if self.path == to {
            return false;
        }
        tracing::debug!(from = %self.path, to, "navigate");
        self.history.push(std::mem::replace(&mut self.path, to.to_string()));
        true
    }

    /// Return to the previous path. Returns false when the history is empty.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                tracing::debug!(from = %self.path, to = %prev, "navigate back");
                self.path = prev;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::new("/dashboard");
        assert_eq!(router.path(), "/dashboard");

        assert!(router.navigate("/dashboard/crm"));
        assert_eq!(router.path(), "/dashboard/crm");

        assert!(router.navigate("/apps"));
        assert_eq!(router.path(), "/apps");

        assert!(router.back());
        assert_eq!(router.path(), "/dashboard/crm");
        assert!(router.back());
        assert_eq!(router.path(), "/dashboard");

        // Nothing left to pop.
        assert!(!router.back());
        assert_eq!(router.path(), "/dashboard");
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut router = Router::new("/dashboard");
        assert!(!router.navigate("/dashboard"));
        assert!(!router.back());
    }
}
