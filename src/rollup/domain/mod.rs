pub mod bom_edge;
pub mod part;
pub mod parts_by_parent;
pub mod required_quantities;

pub use bom_edge::{BomEdge, ChildPart};
pub use part::{PartId, PartNumber, PartRecord};
pub use parts_by_parent::{ParentKey, PartsByParent};
pub use required_quantities::RequiredQuantities;
