/// Ontograph version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on ripple traversal depth, regardless of configuration.
pub const MAX_RIPPLE_DEPTH: usize = 50;

/// Maximum allowed width of a confidence uncertainty range.
pub const MAX_CONFIDENCE_RANGE_WIDTH: f64 = 0.25;

/// Severity and confidence of direct impacts, per operation.
pub mod direct {
    /// `ENTITY_DELETED` and `EDGE_CASCADE_DELETE` are certain.
    pub const DELETE_CONFIDENCE: f64 = 1.0;
    /// `ENTITY_MODIFIED` for an entity update.
    pub const ENTITY_UPDATE_CONFIDENCE: f64 = 0.9;
    /// `EDGE_VALIDITY_CHANGE` for edges incident to an updated entity.
    pub const EDGE_VALIDITY_CONFIDENCE: f64 = 0.8;
    /// `EDGE_MODIFIED` for an edge deletion.
    pub const EDGE_DELETE_CONFIDENCE: f64 = 1.0;
    /// `EDGE_MODIFIED` for an edge update.
    pub const EDGE_UPDATE_CONFIDENCE: f64 = 0.9;
}

/// Reserved keys in an update payload that patch entity/edge fields instead of attributes.
pub mod reserved_keys {
    pub const NAME: &str = "name";
    pub const ENTITY_TYPE: &str = "entity_type";
    pub const RELATION_TYPE: &str = "relation_type";
}
