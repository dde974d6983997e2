//! Two-destination navigation stack.

/// Named screen destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add => "add",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            _ => None,
        }
    }
}

/// Navigation stack rooted at the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    /// Pushes `route` unless it is already on top.
    pub fn push(&mut self, route: Route) {
        if self.current() != route {
            self.stack.push(route);
        }
    }

    /// Pops one screen. The root list screen is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Route};

    #[test]
    fn back_never_pops_root() {
        let mut nav = Navigator::new();
        assert!(!nav.back());
        nav.push(Route::Add);
        nav.push(Route::Add);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::List);
        assert!(!nav.back());
    }

    #[test]
    fn route_names_round_trip() {
        for route in [Route::List, Route::Add] {
            assert_eq!(Route::from_name(route.name()), Some(route));
        }
        assert_eq!(Route::from_name("settings"), None);
    }
}
