//! Advisory side channel for decode failures.
//!
//! Decoders never surface errors to their caller; instead every failure is
//! described as a [`Diagnostic`] and handed to the sink the caller injected.
//! What a sink does with it never changes the decoded value.

use std::fmt;
use std::sync::Mutex;

use crate::DecodeError;

/// Where in a message a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticScope {
    /// The whole message; the caller got `None` or the sentinel.
    Message,
    /// One repeated entry, dropped while its siblings were kept.
    Entry { field: &'static str, index: usize },
    /// An optional nested message, resolved to `None`.
    Nested { field: &'static str },
}

impl fmt::Display for DiagnosticScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticScope::Message => write!(f, "message"),
            DiagnosticScope::Entry { field, index } => write!(f, "{field}[{index}]"),
            DiagnosticScope::Nested { field } => write!(f, "{field}"),
        }
    }
}

/// One decode failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short family name, e.g. `network_status`.
    pub family: &'static str,
    pub scope: DiagnosticScope,
    pub error: DecodeError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.family, self.scope, self.error)
    }
}

/// Receiver for decode diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            family = diagnostic.family,
            scope = %diagnostic.scope,
            error = %diagnostic.error,
            "telemetry decode failed"
        );
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory, in report order.
///
/// # Examples
/// ```
/// use wirelens_core::{CollectingSink, Normalizer};
///
/// let normalizer = Normalizer::with_sink(CollectingSink::default());
/// assert!(normalizer.network_status(&[]).is_none());
/// assert_eq!(normalizer.sink().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
