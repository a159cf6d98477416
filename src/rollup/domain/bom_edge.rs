use super::PartId;
use serde::Deserialize;

/// One edge of the assembly tree as delivered by the BoM API
///
/// Reads as "one unit of `parent_part_id` requires `quantity` units of `part_id`".
/// Every field is optional on the wire; missing values are tolerated here and
/// rejected by the roll-up when the edge is actually walked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BomEdge {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub part_id: Option<PartId>,
    #[serde(default)]
    pub parent_part_id: Option<PartId>,
    #[serde(default)]
    pub quantity: Option<u64>,
}

impl BomEdge {
    pub fn new(id: u64, parent_part_id: Option<u64>, part_id: u64, quantity: u64) -> Self {
        Self {
            id: Some(id),
            part_id: Some(PartId::new(part_id)),
            parent_part_id: parent_part_id.map(PartId::new),
            quantity: Some(quantity),
        }
    }

    /// Parent of this edge, treating both `null` and `0` as "attached to the root"
    pub fn parent(&self) -> Option<PartId> {
        self.parent_part_id.filter(|parent| parent.value() != 0)
    }

    /// Drops the record id; it carries no meaning for the roll-up
    pub fn to_child(&self) -> ChildPart {
        ChildPart {
            part_id: self.part_id,
            quantity: self.quantity,
        }
    }
}

/// A child entry of the parent index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPart {
    pub part_id: Option<PartId>,
    pub quantity: Option<u64>,
}
