//! Utilities used in tests in multiple crates within the workspace.

use std::{cell::RefCell, fmt::Debug, rc::Rc};

use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};

/// Collects payloads emitted by a model signal, so that tests can assert on what was emitted
/// and in which order.
///
/// Clones share the same underlying record.
#[derive(Debug)]
pub struct Recorder<T>(Rc<RefCell<Vec<T>>>);

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a matcher against any error type with a `kind()` method, that matches the inner
/// matcher against the kind.
pub fn has_kind<E, K, M>(kind_of: fn(&E) -> K, inner: M) -> HasKind<E, K, M> {
    HasKind { kind_of, inner }
}

pub struct HasKind<E, K, M> {
    kind_of: fn(&E) -> K,
    inner: M,
}

impl<E, K, M> MatcherBase for HasKind<E, K, M> {}

impl<'a, E, K, M> Matcher<&'a E> for HasKind<E, K, M>
where
    E: Debug,
    K: Copy + Debug,
    M: Matcher<K>,
{
    fn matches(&self, actual: &'a E) -> MatcherResult {
        self.inner.matches((self.kind_of)(actual))
    }

    fn explain_match(&self, actual: &'a E) -> Description {
        let kind = (self.kind_of)(actual);
        Description::new()
            .text(format!("which has kind {kind:?}"))
            .nested(self.inner.explain_match(kind))
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => format!(
                "has a kind which {}",
                self.inner.describe(MatcherResult::Match)
            )
            .into(),
            MatcherResult::NoMatch => format!(
                "has a kind which {}",
                self.inner.describe(MatcherResult::NoMatch)
            )
            .into(),
        }
    }
}

pub trait DefaultForTest {
    fn default_for_test() -> Self;
}

/// Adapts [anyhow::Error] to [std::error::Error], so that code returning [anyhow::Result] can
/// be called with `?` from [googletest] tests.
#[derive(Debug)]
pub struct WrappedError(anyhow::Error);

pub trait WrapError<T> {
    fn wrap_error(self) -> std::result::Result<T, WrappedError>;
}

impl<T> WrapError<T> for anyhow::Result<T> {
    fn wrap_error(self) -> std::result::Result<T, WrappedError> {
        self.map_err(WrappedError::from)
    }
}

impl std::fmt::Display for WrappedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl std::error::Error for WrappedError {}

impl From<anyhow::Error> for WrappedError {
    fn from(value: anyhow::Error) -> Self {
        Self(value)
    }
}
