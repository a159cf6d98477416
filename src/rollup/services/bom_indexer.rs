use crate::rollup::domain::{BomEdge, ParentKey, PartsByParent};

/// BomIndexer service for turning the flat edge list into a parent index
///
/// Pure function of its input: no I/O and no validation. Edges with missing
/// fields are filed unchanged and only rejected once the roll-up walks them.
pub struct BomIndexer;

impl BomIndexer {
    /// Groups BoM edges by their parent part
    ///
    /// # Arguments
    /// * `edges` - Edges as returned by the BoM API, in any order
    ///
    /// # Returns
    /// A PartsByParent index. Top-level parts (no parent) are filed under
    /// `ParentKey::Root`; children keep their input order.
    pub fn group_by_parent(edges: &[BomEdge]) -> PartsByParent {
        let mut index = PartsByParent::new();

        for edge in edges {
            index.insert(ParentKey::from(edge.parent()), edge.to_child());
        }

        index
    }
}
