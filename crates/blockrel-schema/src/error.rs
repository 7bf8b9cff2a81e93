use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// ErrorTree
///
/// Aggregated validation failures keyed by route (dotted node path).
/// The empty route holds messages local to the node under validation;
/// merging into a parent re-keys them under the parent's route.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Add a message at the local (empty) route.
    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.entry(String::new()).or_default().push(message.into());
    }

    /// Add a message at an explicit route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(route.into()).or_default().push(message.into());
    }

    /// Merge another tree, prefixing its routes with `route`.
    pub fn merge_at(&mut self, route: &str, other: Self) {
        for (child_route, messages) in other.errors {
            let key = match (route.is_empty(), child_route.is_empty()) {
                (true, _) => child_route,
                (false, true) => route.to_string(),
                (false, false) => format!("{route}.{child_route}"),
            };
            self.errors.entry(key).or_default().extend(messages);
        }
    }

    /// Merge another tree at the local route.
    pub fn merge(&mut self, other: Self) {
        self.merge_at("", other);
    }

    /// Collapse into a `Result`, consuming the tree.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Iterate `(route, message)` pairs in route order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().flat_map(|(route, messages)| {
            messages.iter().map(move |m| (route.as_str(), m.as_str()))
        })
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
