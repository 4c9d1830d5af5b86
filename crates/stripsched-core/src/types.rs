use serde::{Deserialize, Serialize};

/// A job to be scheduled: width is its resource footprint, height its runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub width: u32,
    pub height: u32,
}

impl Item {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// An item with a concrete placement, carried through the search as the
/// mutable working sequence and frozen into the incumbent on improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedItem {
    pub fn top(&self) -> u32 {
        self.y + self.height
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Whether this item's open rectangle overlaps another's.
    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Immutable problem instance: a strip of fixed width, a set of jobs, and
/// whether 90-degree rotation is permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub strip_width: u32,
    pub items: Vec<Item>,
    #[serde(default)]
    pub rotation: bool,
}

impl Instance {
    /// Validates the instance per the w >= 1, h >= 1, w <= W (or, with
    /// rotation, min(w, h) <= W) constraints and rejects infeasible input
    /// before it ever reaches the engine.
    pub fn new(strip_width: u32, items: Vec<Item>, rotation: bool) -> Result<Self, SolverError> {
        if strip_width < 1 {
            return Err(SolverError::InvalidInstance(
                "strip width must be at least 1".to_string(),
            ));
        }
        for (idx, item) in items.iter().enumerate() {
            if item.width < 1 || item.height < 1 {
                return Err(SolverError::InvalidInstance(format!(
                    "item {idx} has a non-positive dimension ({}x{})",
                    item.width, item.height
                )));
            }
            let fits_unrotated = item.width <= strip_width;
            let fits_rotated = rotation && item.height <= strip_width;
            if !fits_unrotated && !fits_rotated {
                return Err(SolverError::InvalidInstance(format!(
                    "item {idx} ({}x{}) cannot fit in a strip of width {strip_width} in any allowed orientation",
                    item.width, item.height
                )));
            }
        }
        Ok(Self {
            strip_width,
            items,
            rotation,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    #[error("numeric overflow while computing a lower bound")]
    NumericOverflow,
}

pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_width_strip() {
        assert!(Instance::new(0, vec![Item::new(1, 1)], false).is_err());
    }

    #[test]
    fn rejects_item_wider_than_strip_without_rotation() {
        assert!(Instance::new(4, vec![Item::new(5, 1)], false).is_err());
    }

    #[test]
    fn accepts_item_that_only_fits_rotated() {
        assert!(Instance::new(3, vec![Item::new(1, 3)], true).is_ok());
    }

    #[test]
    fn rejects_item_that_fits_in_no_orientation() {
        assert!(Instance::new(3, vec![Item::new(5, 5)], true).is_err());
    }

    #[test]
    fn overlap_detection() {
        let a = PlacedItem {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        };
        let b = PlacedItem {
            x: 1,
            y: 1,
            width: 2,
            height: 2,
        };
        let c = PlacedItem {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
        };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
