//! Aggregation of impact lists into ImpactStatistics.

use ontograph_core::impact::{Impact, ImpactStatistics};

/// Aggregate the three impact lists of one assessment.
///
/// `node_count`/`edge_count` describe the snapshot before mutation and are the
/// denominator of `percentage_of_graph`.
pub fn aggregate(
    direct: &[Impact],
    indirect: &[Impact],
    ripple: &[Impact],
    node_count: usize,
    edge_count: usize,
) -> ImpactStatistics {
    let mut stats = ImpactStatistics {
        node_count,
        edge_count,
        ..Default::default()
    };

    for impact in direct.iter().chain(indirect).chain(ripple) {
        stats.total_affected += 1;
        *stats.by_type.entry(impact.impact_type).or_insert(0) += 1;
        *stats.by_severity.entry(impact.severity).or_insert(0) += 1;
        if impact.severity.is_critical_path() {
            stats.critical_paths.push(impact.chain());
        }
    }

    stats.max_depth = ripple.iter().filter_map(|i| i.depth).max().unwrap_or(0);

    let elements = node_count + edge_count;
    stats.percentage_of_graph = if elements == 0 {
        0.0
    } else {
        (stats.total_affected as f64 / elements as f64 * 100.0).clamp(0.0, 100.0)
    };

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_core::graph::ElementKind;
    use ontograph_core::impact::{ImpactType, Severity};

    #[test]
    fn counts_types_severities_and_paths() {
        let direct = vec![Impact::new(
            ImpactType::EntityDeleted,
            "e2",
            ElementKind::Entity,
            Severity::High,
            1.0,
        )];
        let indirect = vec![Impact::new(
            ImpactType::RippleEffect,
            "e1",
            ElementKind::Entity,
            Severity::Medium,
            0.8,
        )
        .caused_by("e2")];
        let ripple = vec![Impact::new(
            ImpactType::RippleEffect,
            "e0",
            ElementKind::Entity,
            Severity::High,
            0.64,
        )
        .caused_by("e1")
        .at_depth(1)];

        let stats = aggregate(&direct, &indirect, &ripple, 3, 1);
        assert_eq!(stats.total_affected, 3);
        assert_eq!(stats.count_of(ImpactType::RippleEffect), 2);
        assert_eq!(stats.count_with_severity(Severity::High), 2);
        assert_eq!(stats.max_depth, 1);
        assert!((stats.percentage_of_graph - 75.0).abs() < 1e-9);
        assert_eq!(
            stats.critical_paths,
            vec![vec!["e2".to_string()], vec!["e1".to_string(), "e0".to_string()]]
        );
    }

    #[test]
    fn empty_graph_has_zero_percentage() {
        let stats = aggregate(&[], &[], &[], 0, 0);
        assert_eq!(stats.percentage_of_graph, 0.0);
        assert_eq!(stats.max_depth, 0);
    }
}
