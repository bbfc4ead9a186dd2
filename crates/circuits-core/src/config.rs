//! Enumeration settings.
use serde::Serialize;

/// How repeated arcs between the same ordered pair of vertices are traversed.
///
/// The vertex sequences reported are the same under both policies; only the
/// number of times each one is recorded differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiArcPolicy {
    /// Visit each distinct successor once, in order of first occurrence.
    ///
    /// A duplicate arc never changes any statistic: every elementary circuit
    /// is recorded exactly once.
    #[default]
    Collapse,
    /// Traverse every arc occurrence.
    ///
    /// A successor reached through a repeated arc is re-entered once the
    /// previous traversal has unblocked it, and a repeated closing arc into
    /// the root records the circuit once per occurrence. Counts therefore
    /// carry arc multiplicity.
    Multiplicity,
}

impl MultiArcPolicy {
    /// Stable lowercase name, as used on the command line and in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            MultiArcPolicy::Collapse => "collapse",
            MultiArcPolicy::Multiplicity => "multiplicity",
        }
    }
}

/// Settings for one enumeration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Treatment of repeated arcs. Default [`MultiArcPolicy::Collapse`].
    pub multi_arcs: MultiArcPolicy,
    /// Worker threads for [`enumerate_parallel`](crate::engine::enumerate_parallel).
    ///
    /// `0` selects the available parallelism of the host. Ignored by the
    /// sequential drivers.
    pub threads: usize,
}

impl EnumerationConfig {
    /// Returns a copy with the given multi-arc policy.
    pub fn with_multi_arcs(mut self, multi_arcs: MultiArcPolicy) -> Self {
        self.multi_arcs = multi_arcs;
        self
    }

    /// Returns a copy with the given worker-thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_collapses_multi_arcs() {
        let config = EnumerationConfig::default();
        assert_eq!(config.multi_arcs, MultiArcPolicy::Collapse);
        assert_eq!(config.threads, 0);
    }

    #[test]
    fn builders_set_fields() {
        let config = EnumerationConfig::default()
            .with_multi_arcs(MultiArcPolicy::Multiplicity)
            .with_threads(3);
        assert_eq!(config.multi_arcs, MultiArcPolicy::Multiplicity);
        assert_eq!(config.threads, 3);
    }

    #[test]
    fn policy_names_are_lowercase() {
        assert_eq!(MultiArcPolicy::Collapse.as_str(), "collapse");
        assert_eq!(MultiArcPolicy::Multiplicity.as_str(), "multiplicity");
    }
}
