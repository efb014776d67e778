//! Assertion pipe
//!
//! A named registry of comparators between an expected value and an
//! observed one. A scenario starts from a baseline pipe, drops the checks
//! that do not apply to it, and runs the rest as a batch:
//!
//! ```
//! use petcheck_common::{check, AssertPipe};
//!
//! let pipe = AssertPipe::<i64, i64>::new()
//!     .register("equal", |req, res| check::equals(req, res))
//!     .register("positive", |_, res| {
//!         if *res > 0 { Ok(()) } else { Err(format!("{} is not positive", res)) }
//!     })
//!     .exclude("positive");
//!
//! assert!(pipe.run(&3, &3).is_ok());
//! assert!(pipe.run(&3, &4).is_err());
//! ```
//!
//! Comparators are stored in a hash map, so the order they run in is
//! unspecified and none may depend on another having run first.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::{AssertionFailure, PipeFailure, Result};

type Comparator<Req, Res> = Box<dyn Fn(&Req, &Res) -> std::result::Result<(), String>>;

/// Named comparators between a request-side and a response-side value
pub struct AssertPipe<Req, Res> {
    comparators: HashMap<String, Comparator<Req, Res>>,
}

impl<Req, Res> AssertPipe<Req, Res> {
    pub fn new() -> Self {
        Self {
            comparators: HashMap::new(),
        }
    }

    /// Register a comparator, replacing any previous one with the same name
    #[must_use]
    pub fn register<F>(mut self, name: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(&Req, &Res) -> std::result::Result<(), String> + 'static,
    {
        self.comparators.insert(name.into(), Box::new(comparator));
        self
    }

    /// Remove a comparator; unknown names are ignored
    #[must_use]
    pub fn exclude(mut self, name: &str) -> Self {
        self.comparators.remove(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.comparators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.comparators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Invoke every registered comparator once with the same pair.
    ///
    /// A failing comparator does not stop the others; all failures are
    /// returned together.
    pub fn run(&self, expected: &Req, observed: &Res) -> Result<()> {
        debug!("Running {} comparator(s)", self.comparators.len());

        let mut failures = Vec::new();
        for (name, comparator) in &self.comparators {
            if let Err(message) = comparator(expected, observed) {
                warn!("Assertion '{}' failed: {}", name, message);
                failures.push(AssertionFailure::new(name.as_str(), message));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PipeFailure { failures })
        }
    }

    /// Like [`run`](Self::run), but panics with every failure listed
    pub fn assert_run(&self, expected: &Req, observed: &Res) {
        if let Err(failure) = self.run(expected, observed) {
            panic!("{}", failure);
        }
    }
}

impl<Req, Res> Default for AssertPipe<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> fmt::Debug for AssertPipe<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertPipe")
            .field("comparators", &self.names())
            .finish()
    }
}
