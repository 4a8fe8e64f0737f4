/// Measurement dimension of a perf payload. One payload carries a single
/// kind shared by all of its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerfKind {
    Latency,
    Throughput,
    Compute,
    Memory,
    Storage,
}

impl PerfKind {
    /// Parse the wire string. Unrecognized kinds map to `None`; the plot
    /// falls back to zero values and a generic axis label.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "latency" => Some(PerfKind::Latency),
            "throughput" => Some(PerfKind::Throughput),
            "compute" => Some(PerfKind::Compute),
            "memory" => Some(PerfKind::Memory),
            "storage" => Some(PerfKind::Storage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerfKind::Latency => "latency",
            PerfKind::Throughput => "throughput",
            PerfKind::Compute => "compute",
            PerfKind::Memory => "memory",
            PerfKind::Storage => "storage",
        }
    }

    /// Fixed y-axis label per kind.
    pub fn axis_label(&self) -> &'static str {
        match self {
            PerfKind::Latency => "↑ Nanoseconds (ns)",
            PerfKind::Throughput => "↑ Events per unit time",
            PerfKind::Compute => "↑ Average CPU",
            PerfKind::Memory => "↑ Average memory",
            PerfKind::Storage => "↑ Average storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_string() {
        for kind in [
            PerfKind::Latency,
            PerfKind::Throughput,
            PerfKind::Compute,
            PerfKind::Memory,
            PerfKind::Storage,
        ] {
            assert_eq!(PerfKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unrecognized_kind_is_none() {
        assert_eq!(PerfKind::from_str("bandwidth"), None);
        assert_eq!(PerfKind::from_str(""), None);
        assert_eq!(PerfKind::from_str("Latency"), None);
    }
}
