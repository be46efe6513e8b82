//! Named route registry.

use std::collections::HashMap;

use crate::reverse::{Reverse, ReverseError};

const PLACEHOLDER: &str = "{}";

/// Route name → path pattern with positional `{}` placeholders.
///
/// ```
/// use iframed::reverse::{NamedRoutes, Reverse};
///
/// let routes = NamedRoutes::new().route("test", "/appname/viewname/{}");
/// assert_eq!(routes.reverse("test", &["param"]).unwrap(), "/appname/viewname/param");
/// ```
#[derive(Debug, Clone)]
pub struct NamedRoutes {
    script_prefix: String,
    routes: HashMap<String, String>,
}

impl NamedRoutes {
    pub fn new() -> Self {
        Self {
            script_prefix: "/".to_string(),
            routes: HashMap::new(),
        }
    }

    /// Prefix the application is mounted under; prepended to every reversed path.
    pub fn with_script_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.script_prefix = prefix.into();
        self
    }

    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }
}

impl Default for NamedRoutes {
    fn default() -> Self {
        Self::new()
    }
}

impl Reverse for NamedRoutes {
    fn reverse(&self, name: &str, args: &[&str]) -> Result<String, ReverseError> {
        let pattern = self.routes.get(name).ok_or_else(|| ReverseError::NoMatch {
            name: name.to_string(),
        })?;

        let expected = pattern.matches(PLACEHOLDER).count();
        if expected != args.len() {
            return Err(ReverseError::ArgumentCount {
                name: name.to_string(),
                expected,
                got: args.len(),
            });
        }

        let mut pieces = pattern.split(PLACEHOLDER);
        let mut path = String::from(self.script_prefix.trim_end_matches('/'));
        path.push_str(pieces.next().unwrap_or_default());
        for (arg, piece) in args.iter().zip(pieces) {
            path.push_str(arg);
            path.push_str(piece);
        }
        Ok(path)
    }
}
