//! Ripple propagation: multi-source, cycle-safe BFS with decaying confidence.

use std::collections::{BTreeMap, HashSet, VecDeque};

use ontograph_core::config::AssessmentConfig;
use ontograph_core::errors::ConfigError;
use ontograph_core::graph::ElementKind;
use ontograph_core::impact::{Impact, ImpactType, Severity};

use crate::graph::IndexedGraph;

/// A starting point for ripple propagation.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleSeed {
    pub element_id: String,
    /// Confidence carried into the first hop.
    pub confidence: f64,
    /// Propagation chain ending at this seed.
    pub path: Vec<String>,
}

impl RippleSeed {
    /// A seed at full confidence whose path is just itself.
    pub fn new(element_id: impl Into<String>) -> Self {
        let element_id = element_id.into();
        Self {
            path: vec![element_id.clone()],
            element_id,
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}

/// Ripple impacts bucketed by depth (1-indexed).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RippleResult {
    pub by_depth: BTreeMap<usize, Vec<Impact>>,
    /// Greatest depth that produced an impact.
    pub max_depth_reached: usize,
}

impl RippleResult {
    pub fn len(&self) -> usize {
        self.by_depth.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_depth.is_empty()
    }

    /// Flatten into one list, shallowest depth first.
    pub fn into_impacts(self) -> Vec<Impact> {
        self.by_depth.into_values().flatten().collect()
    }
}

/// One frontier entry.
struct Frontier {
    id: String,
    depth: usize,
    confidence: f64,
    path: Vec<String>,
}

/// Breadth-first ripple propagation over the undirected relationship graph.
#[derive(Debug, Clone)]
pub struct RippleCalculator {
    decay_factor: f64,
    track_paths: bool,
}

impl RippleCalculator {
    /// Fails if `config` would let confidence stay flat or grow across a hop.
    pub fn new(config: &AssessmentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            decay_factor: config.decay_factor,
            track_paths: config.track_paths,
        })
    }

    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }

    pub fn track_paths(&self) -> bool {
        self.track_paths
    }

    /// Propagate from every seed at once, sharing `visited` across seeds.
    ///
    /// A node reachable from several seeds is attributed to whichever frontier
    /// reaches it first; ties within a depth go to the earlier seed. Seeds are
    /// marked visited and never reported. Seeds absent from `graph` are ignored.
    pub fn calculate_ripples(
        &self,
        graph: &IndexedGraph,
        seeds: &[RippleSeed],
        max_depth: usize,
        visited: &mut HashSet<String>,
    ) -> RippleResult {
        let mut result = RippleResult::default();
        let mut queue = VecDeque::new();

        for seed in seeds {
            if !graph.contains(&seed.element_id) {
                continue;
            }
            visited.insert(seed.element_id.clone());
            queue.push_back(Frontier {
                id: seed.element_id.clone(),
                depth: 0,
                confidence: seed.confidence,
                path: seed.path.clone(),
            });
        }

        while let Some(current) = queue.pop_front() {
            // Level order: everything left in the queue is at least this deep.
            if current.depth >= max_depth {
                break;
            }

            for neighbor in graph.neighbors(&current.id) {
                if !visited.insert(neighbor.to_string()) {
                    continue;
                }

                let depth = current.depth + 1;
                let confidence = current.confidence * self.decay_factor;
                let mut impact = Impact::new(
                    ImpactType::RippleEffect,
                    neighbor,
                    ElementKind::Entity,
                    Severity::for_ripple_depth(depth),
                    confidence,
                )
                .caused_by(current.id.as_str())
                .at_depth(depth);

                let path = if self.track_paths {
                    let mut path = current.path.clone();
                    path.push(neighbor.to_string());
                    impact = impact.with_path(path.clone());
                    path
                } else {
                    Vec::new()
                };

                result.max_depth_reached = result.max_depth_reached.max(depth);
                result.by_depth.entry(depth).or_default().push(impact);
                queue.push_back(Frontier {
                    id: neighbor.to_string(),
                    depth,
                    confidence,
                    path,
                });
            }
        }

        result
    }

    /// Propagate from bare ids at full confidence with a fresh visited set.
    pub fn ripples_from(
        &self,
        graph: &IndexedGraph,
        seed_ids: &[&str],
        max_depth: usize,
    ) -> BTreeMap<usize, Vec<Impact>> {
        let seeds: Vec<RippleSeed> = seed_ids.iter().map(|id| RippleSeed::new(*id)).collect();
        let mut visited = HashSet::new();
        self.calculate_ripples(graph, &seeds, max_depth, &mut visited)
            .by_depth
    }
}

impl Default for RippleCalculator {
    fn default() -> Self {
        let config = AssessmentConfig::default();
        Self {
            decay_factor: config.decay_factor,
            track_paths: config.track_paths,
        }
    }
}
