use prost::Message;

use crate::diagnostics::{Diagnostic, DiagnosticScope, DiagnosticSink};
use crate::{DecodeError, MessageFamily};

/// Decode a top-level payload. An empty payload is never a valid message.
pub(crate) fn read_payload<M: Message + Default>(payload: &[u8]) -> Result<M, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(M::decode(payload)?)
}

/// Decodes embedded entries one at a time, reporting and skipping the ones
/// that fail.
///
/// Unlike a top-level payload, an empty entry is a valid all-default message.
pub(crate) struct EntryReader<'a> {
    family: MessageFamily,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> EntryReader<'a> {
    pub(crate) fn new(family: MessageFamily, sink: &'a dyn DiagnosticSink) -> Self {
        Self { family, sink }
    }

    /// Decode every entry of a repeated field, in order, dropping failures.
    pub(crate) fn read_entries<M, T>(
        &self,
        field: &'static str,
        raw: &[Vec<u8>],
        build: impl Fn(M) -> T,
    ) -> Vec<T>
    where
        M: Message + Default,
    {
        raw.iter()
            .enumerate()
            .filter_map(|(index, bytes)| match M::decode(bytes.as_slice()) {
                Ok(entry) => Some(build(entry)),
                Err(err) => {
                    self.report(DiagnosticScope::Entry { field, index }, err.into());
                    None
                }
            })
            .collect()
    }

    /// Decode an optional embedded message; a failure resolves to `None`.
    pub(crate) fn read_nested<M, T>(
        &self,
        field: &'static str,
        raw: Option<&[u8]>,
        build: impl FnOnce(M) -> T,
    ) -> Option<T>
    where
        M: Message + Default,
    {
        match M::decode(raw?) {
            Ok(entry) => Some(build(entry)),
            Err(err) => {
                self.report(DiagnosticScope::Nested { field }, err.into());
                None
            }
        }
    }

    fn report(&self, scope: DiagnosticScope, error: DecodeError) {
        self.sink.report(Diagnostic {
            family: self.family.name(),
            scope,
            error,
        });
    }
}
