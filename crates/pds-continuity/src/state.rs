//! Continuity state machine
//!
//! Two states: no current result, or exactly one current result. Transitions
//! are pure functions of the history; the caller swaps the state in.

use crate::metadata::MetaDataDecoder;
use crate::result::ScanResult;

/// Current-result slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContinuityState {
    /// No baseline selected
    #[default]
    NoCurrent,
    /// Baseline selected
    HasCurrent(ScanResult),
}

impl ContinuityState {
    /// First former result, if any
    #[must_use]
    pub fn first_of(history: &[ScanResult]) -> Self {
        history
            .first()
            .map_or(Self::NoCurrent, |r| Self::HasCurrent(r.clone()))
    }

    /// First former result whose metadata holds `key = value`
    ///
    /// Results without metadata or with malformed metadata never match.
    /// No match yields [`ContinuityState::NoCurrent`].
    #[must_use]
    pub fn first_matching(
        history: &[ScanResult],
        decoder: &dyn MetaDataDecoder,
        key: &str,
        value: &str,
    ) -> Self {
        history
            .iter()
            .find(|result| {
                result
                    .metadata()
                    .and_then(|raw| decoder.decode(raw))
                    .is_some_and(|metadata| metadata.has_value(key, value))
            })
            .map_or(Self::NoCurrent, |r| Self::HasCurrent(r.clone()))
    }

    /// Current result, if any
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&ScanResult> {
        match self {
            Self::NoCurrent => None,
            Self::HasCurrent(result) => Some(result),
        }
    }

    /// Check if a result is selected
    #[inline]
    #[must_use]
    pub fn has_current(&self) -> bool {
        matches!(self, Self::HasCurrent(_))
    }
}
