//! SpatialIndex: region quadtree over dataset points.
//!
//! Each node covers a rectangular [`Region`] and holds up to
//! `max_points_per_node` points. When a leaf overflows it splits into four
//! equal quadrants and pushes its points down; nodes at `max_depth` keep
//! accumulating instead of splitting.
//!
//! Every point lives in exactly one node, so range queries never return
//! duplicates.

use super::error::IndexError;
use super::point::{IndexedPoint, Point};
use super::region::Region;

/// Default node capacity before subdividing.
pub const DEFAULT_MAX_POINTS_PER_NODE: usize = 6;

/// Default maximum tree depth (root is depth 0).
pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Tuning parameters for a [`SpatialIndex`].
///
/// # Example
///
/// ```
/// use coverlayer::geo_index::IndexConfig;
///
/// let config = IndexConfig::default().with_max_depth(8);
/// assert_eq!(config.max_points_per_node, 6);
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub max_points_per_node: usize,
    pub max_depth: u32,
}

impl IndexConfig {
    pub fn new(max_points_per_node: usize, max_depth: u32) -> Self {
        Self {
            max_points_per_node,
            max_depth,
        }
    }

    pub fn with_max_points_per_node(mut self, max_points_per_node: usize) -> Self {
        self.max_points_per_node = max_points_per_node;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_points_per_node: DEFAULT_MAX_POINTS_PER_NODE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A single quadtree node.
#[derive(Debug)]
struct Node {
    region: Region,
    depth: u32,
    /// Points held directly; empty once the node has children.
    points: Vec<IndexedPoint>,
    /// Child quadrants (SW, SE, NW, NE), created lazily on overflow.
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn new(region: Region, depth: u32) -> Self {
        Self {
            region,
            depth,
            points: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, entry: IndexedPoint, config: &IndexConfig) {
        let quadrant = self.region.quadrant_of(entry.x(), entry.y());
        if let Some(children) = self.children.as_mut() {
            children[quadrant].insert(entry, config);
            return;
        }

        if self.points.len() < config.max_points_per_node || self.depth >= config.max_depth {
            self.points.push(entry);
            return;
        }

        self.subdivide(config);
        if let Some(children) = self.children.as_mut() {
            children[quadrant].insert(entry, config);
        }
    }

    fn subdivide(&mut self, config: &IndexConfig) {
        let depth = self.depth + 1;
        let mut children = Box::new(self.region.quadrants().map(|r| Node::new(r, depth)));

        for entry in std::mem::take(&mut self.points) {
            let quadrant = self.region.quadrant_of(entry.x(), entry.y());
            children[quadrant].insert(entry, config);
        }

        self.children = Some(children);
    }

    fn query<'a>(&'a self, rect: &Region, out: &mut Vec<&'a IndexedPoint>) {
        if !self.region.intersects(rect) {
            return;
        }

        out.extend(
            self.points
                .iter()
                .filter(|entry| rect.contains(entry.x(), entry.y())),
        );

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(rect, out);
            }
        }
    }

    fn depth_reached(&self) -> u32 {
        match &self.children {
            Some(children) => children
                .iter()
                .map(Node::depth_reached)
                .max()
                .unwrap_or(self.depth),
            None => self.depth,
        }
    }
}

/// Region quadtree answering axis-aligned range queries over [`Point`]s.
///
/// # Example
///
/// ```
/// use coverlayer::geo_index::{Point, Region, SpatialIndex};
///
/// let mut index = SpatialIndex::build(Region::new(0.0, 0.0, 10.0, 10.0), 2, 6).unwrap();
/// index.insert(Point::new(1.0, 1.0));
/// index.insert(Point::new(2.0, 2.0));
/// index.insert(Point::new(9.0, 9.0));
///
/// let hits = index.query_range(&Region::new(0.0, 0.0, 3.0, 3.0));
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug)]
pub struct SpatialIndex {
    root: Node,
    config: IndexConfig,
    len: usize,
    next_sequence: u64,
    max_radius: Option<f64>,
}

impl SpatialIndex {
    /// Create an empty index rooted at `region`.
    ///
    /// Fails if the region has no area or the node capacity is zero.
    pub fn build(
        region: Region,
        max_points_per_node: usize,
        max_depth: u32,
    ) -> Result<Self, IndexError> {
        Self::with_config(region, IndexConfig::new(max_points_per_node, max_depth))
    }

    /// Create an empty index rooted at `region` with the given tuning.
    pub fn with_config(region: Region, config: IndexConfig) -> Result<Self, IndexError> {
        if !region.has_area() {
            return Err(IndexError::InvalidRegion {
                width: region.width(),
                height: region.height(),
            });
        }
        if config.max_points_per_node == 0 {
            return Err(IndexError::InvalidCapacity(config.max_points_per_node));
        }

        Ok(Self {
            root: Node::new(region, 0),
            config,
            len: 0,
            next_sequence: 0,
            max_radius: None,
        })
    }

    /// Insert a point.
    ///
    /// Points outside the root region are dropped.
    pub fn insert(&mut self, point: Point) {
        if !self.root.region.contains(point.x(), point.y()) {
            tracing::trace!(
                lat = point.y(),
                lng = point.x(),
                region = %self.root.region,
                "Dropping point outside index region"
            );
            return;
        }

        let entry = IndexedPoint {
            point,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        if let Some(radius) = point.radius {
            self.max_radius = Some(self.max_radius.map_or(radius, |m| m.max(radius)));
        }
        self.root.insert(entry, &self.config);
        self.len += 1;
    }

    /// All stored points inside `rect` (inclusive on every edge).
    ///
    /// Results are ordered by insertion sequence.
    pub fn query_range(&self, rect: &Region) -> Vec<&IndexedPoint> {
        let mut out = Vec::new();
        self.root.query(rect, &mut out);
        out.sort_unstable_by_key(|entry| entry.sequence);
        out
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root region.
    pub fn region(&self) -> &Region {
        &self.root.region
    }

    /// Largest explicit radius among stored points.
    pub fn max_radius(&self) -> Option<f64> {
        self.max_radius
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Deepest level currently holding nodes (0 while the root is a leaf).
    pub fn depth(&self) -> u32 {
        self.root.depth_reached()
    }
}

impl Extend<Point> for SpatialIndex {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}
