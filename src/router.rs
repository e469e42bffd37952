//! Router collaborator: the nav emits navigation requests by path and reads
//! a current-path signal; it does not own a route table or route syntax.

/// Sink for navigation requests. The application's route state implements
/// it; tests can substitute a recording fake.
pub trait Router {
    fn navigate(&mut self, path: &str);
}

/// Minimal route state: the current path string.
#[derive(Debug, Clone)]
pub struct RouteState {
    current: String,
}

impl RouteState {
    pub fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }
}

impl Router for RouteState {
    fn navigate(&mut self, path: &str) {
        self.current = path.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_current_path() {
        let mut route = RouteState::new("/");
        route.navigate("/hooks-core/useState");
        assert_eq!(route.current_path(), "/hooks-core/useState");
    }
}
