//! Per-resource load state.
//!
//! Replaces the loosely coordinated per-resource booleans of a typical
//! fetch-and-render page with one explicit value: a resource is pending,
//! loaded with its payload, or failed with a message. Flags never move
//! back to `Pending` except by rebuilding the page on navigation.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resource<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(String),
}

/// Aggregate view over a page's required resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase<'a> {
    /// A required resource is still in flight; draw only the spinner.
    Loading,
    /// A required resource failed; draw only the error panel.
    Failed(&'a str),
    /// All required resources settled successfully.
    Ready,
}

impl<T> Resource<T> {
    /// Fold a finished request into a resource state.
    pub fn settle<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resource::Loaded(value),
            Err(err) => Resource::Failed(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Resource::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Resource::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Phase of a page whose only required resource is this one.
    pub fn phase(&self) -> PagePhase<'_> {
        match self {
            Resource::Pending => PagePhase::Loading,
            Resource::Failed(message) => PagePhase::Failed(message),
            Resource::Loaded(_) => PagePhase::Ready,
        }
    }
}

/// Combine two required resources: any failure wins over pending, so a
/// page shows its error as soon as the first required fetch fails, even
/// while the other is still in flight.
pub fn phase2<'a, A, B>(a: &'a Resource<A>, b: &'a Resource<B>) -> PagePhase<'a> {
    if let Some(message) = a.failure() {
        return PagePhase::Failed(message);
    }
    if let Some(message) = b.failure() {
        return PagePhase::Failed(message);
    }
    if a.is_pending() || b.is_pending() {
        return PagePhase::Loading;
    }
    PagePhase::Ready
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_maps_ok_and_err() {
        let ok: Resource<u32> = Resource::settle(Ok::<_, String>(5));
        assert_eq!(ok, Resource::Loaded(5));

        let err: Resource<u32> = Resource::settle(Err::<u32, _>("boom"));
        assert_eq!(err, Resource::Failed("boom".to_string()));
    }

    #[test]
    fn single_resource_phase() {
        assert_eq!(Resource::<u32>::Pending.phase(), PagePhase::Loading);
        assert_eq!(Resource::Loaded(1).phase(), PagePhase::Ready);
        assert_eq!(
            Resource::<u32>::Failed("x".into()).phase(),
            PagePhase::Failed("x")
        );
    }

    #[test]
    fn failure_wins_over_pending_in_combined_phase() {
        let pending: Resource<u32> = Resource::Pending;
        let failed: Resource<u32> = Resource::Failed("404".into());
        assert_eq!(phase2(&pending, &failed), PagePhase::Failed("404"));
        assert_eq!(phase2(&failed, &pending), PagePhase::Failed("404"));
    }

    #[test]
    fn combined_phase_pending_until_both_loaded() {
        let pending: Resource<u32> = Resource::Pending;
        let loaded: Resource<u32> = Resource::Loaded(1);
        assert_eq!(phase2(&loaded, &pending), PagePhase::Loading);
        assert_eq!(phase2(&loaded, &loaded), PagePhase::Ready);
    }
}
