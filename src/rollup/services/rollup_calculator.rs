use crate::rollup::domain::{ChildPart, ParentKey, PartId, PartNumber, PartsByParent, RequiredQuantities};
use crate::shared::error::RollupError;
use crate::shared::Result;
use std::collections::HashSet;

/// RollupCalculator service for the multiply-and-accumulate traversal
///
/// The calculator owns no state. The part-number lookup is injected as a
/// closure so the algorithm stays free of I/O; the application layer wires it
/// to a `PartCatalog`.
pub struct RollupCalculator;

impl RollupCalculator {
    /// Computes the quantities needed to build one unit of the whole assembly
    ///
    /// Equivalent to `calc_parts_required` from the root with multiplier 1.
    pub fn roll_up<F>(index: &PartsByParent, resolve: &mut F) -> Result<RequiredQuantities>
    where
        F: FnMut(PartId) -> Result<PartNumber>,
    {
        let mut required = RequiredQuantities::new();
        Self::calc_parts_required(index, ParentKey::Root, 1, &mut required, resolve)?;
        Ok(required)
    }

    /// Walks the children of `parent` depth-first and accumulates their totals
    ///
    /// # Arguments
    /// * `index` - Parent index built by `BomIndexer`
    /// * `parent` - Node whose subtree is walked
    /// * `multiplier` - Units of `parent` being built
    /// * `required` - Accumulator, summed into (never overwritten)
    /// * `resolve` - Maps an internal part id to its display part number
    ///
    /// # Errors
    /// * `RollupError::MalformedEdge` - a walked edge has no part id or quantity
    /// * `RollupError::CyclicBom` - a part appears again on its own path
    /// * `RollupError::QuantityOverflow` - a product or running total does not fit in `u64`
    /// * any error returned by `resolve`
    pub fn calc_parts_required<F>(
        index: &PartsByParent,
        parent: ParentKey,
        multiplier: u64,
        required: &mut RequiredQuantities,
        resolve: &mut F,
    ) -> Result<()>
    where
        F: FnMut(PartId) -> Result<PartNumber>,
    {
        let mut path = HashSet::new();
        if let ParentKey::Part(id) = parent {
            path.insert(id);
        }
        Self::walk(index, parent, multiplier, required, resolve, &mut path)
    }

    fn walk<F>(
        index: &PartsByParent,
        parent: ParentKey,
        multiplier: u64,
        required: &mut RequiredQuantities,
        resolve: &mut F,
        path: &mut HashSet<PartId>,
    ) -> Result<()>
    where
        F: FnMut(PartId) -> Result<PartNumber>,
    {
        for child in index.children_of(parent) {
            let (part_id, quantity) = Self::unpack(parent, child)?;

            let total = multiplier
                .checked_mul(quantity)
                .ok_or(RollupError::QuantityOverflow {
                    part_id: part_id.value(),
                })?;

            let part_number = resolve(part_id)?;
            required
                .add(part_number, total)
                .ok_or(RollupError::QuantityOverflow {
                    part_id: part_id.value(),
                })?;

            // Only the current path counts as a cycle; reuse across sibling subtrees is fine
            if !path.insert(part_id) {
                return Err(RollupError::CyclicBom {
                    part_id: part_id.value(),
                }
                .into());
            }
            Self::walk(index, ParentKey::Part(part_id), total, required, resolve, path)?;
            path.remove(&part_id);
        }

        Ok(())
    }

    fn unpack(parent: ParentKey, child: &ChildPart) -> Result<(PartId, u64)> {
        match (child.part_id, child.quantity) {
            (Some(part_id), Some(quantity)) => Ok((part_id, quantity)),
            (None, _) => Err(RollupError::MalformedEdge {
                details: format!("edge under parent {} has no part_id", parent),
            }
            .into()),
            (Some(part_id), None) => Err(RollupError::MalformedEdge {
                details: format!("part {} under parent {} has no quantity", part_id, parent),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollup::domain::BomEdge;
    use crate::rollup::services::BomIndexer;
    use std::collections::HashMap;

    fn number_by_id(numbers: &[(u64, &str)]) -> HashMap<PartId, PartNumber> {
        numbers
            .iter()
            .map(|(id, number)| (PartId::new(*id), PartNumber::new(*number)))
            .collect()
    }

    fn roll_up_with(edges: &[BomEdge], numbers: &HashMap<PartId, PartNumber>) -> Result<RequiredQuantities> {
        let index = BomIndexer::group_by_parent(edges);
        let mut resolve = |id: PartId| -> Result<PartNumber> {
            Ok(numbers.get(&id).cloned().unwrap_or_else(|| PartNumber::from(id)))
        };
        RollupCalculator::roll_up(&index, &mut resolve)
    }

    #[test]
    fn test_chain_multiplies_quantities() {
        let edges = vec![
            BomEdge::new(0, None, 1, 2),
            BomEdge::new(1, Some(1), 2, 3),
            BomEdge::new(2, Some(2), 3, 5),
        ];
        let numbers = number_by_id(&[(1, "A"), (2, "B"), (3, "C")]);

        let required = roll_up_with(&edges, &numbers).unwrap();

        assert_eq!(required.get("A"), 2);
        assert_eq!(required.get("B"), 6);
        assert_eq!(required.get("C"), 30);
    }

    #[test]
    fn test_root_child_contributes_its_quantity() {
        let edges = vec![BomEdge::new(0, None, 7, 4)];
        let required = roll_up_with(&edges, &HashMap::new()).unwrap();
        assert_eq!(required.get("7"), 4);
        assert_eq!(required.len(), 1);
    }

    #[test]
    fn test_shared_part_number_is_summed() {
        let edges = vec![
            BomEdge::new(0, None, 1, 1),
            BomEdge::new(1, Some(1), 2, 3),
            BomEdge::new(2, Some(1), 3, 4),
        ];
        let numbers = number_by_id(&[(1, "TOP"), (2, "BOLT"), (3, "BOLT")]);

        let required = roll_up_with(&edges, &numbers).unwrap();

        assert_eq!(required.get("BOLT"), 7);
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_long_part_numbers_sharing_a_prefix_stay_distinct() {
        let prefix = "P".repeat(255);
        let first = format!("{}-A", prefix);
        let second = format!("{}-B", prefix);
        let edges = vec![BomEdge::new(0, None, 1, 2), BomEdge::new(1, None, 2, 3)];
        let numbers = HashMap::from([
            (PartId::new(1), PartNumber::new(first.clone())),
            (PartId::new(2), PartNumber::new(second.clone())),
        ]);

        let required = roll_up_with(&edges, &numbers).unwrap();

        assert_eq!(required.len(), 2);
        assert_eq!(required.get(&first), 2);
        assert_eq!(required.get(&second), 3);
    }

    #[test]
    fn test_diamond_reuse_is_counted_per_occurrence() {
        // 10 and 20 both contain part 30
        let edges = vec![
            BomEdge::new(0, None, 10, 1),
            BomEdge::new(1, None, 20, 2),
            BomEdge::new(2, Some(10), 30, 3),
            BomEdge::new(3, Some(20), 30, 3),
        ];

        let required = roll_up_with(&edges, &HashMap::new()).unwrap();

        assert_eq!(required.get("30"), 3 + 6);
    }

    #[test]
    fn test_row_order_follows_first_accumulation() {
        let edges = vec![
            BomEdge::new(0, None, 1, 1),
            BomEdge::new(1, Some(1), 2, 1),
            BomEdge::new(2, Some(2), 3, 1),
            BomEdge::new(3, Some(1), 4, 1),
        ];

        let required = roll_up_with(&edges, &HashMap::new()).unwrap();

        let order: Vec<String> = required.iter().map(|(number, _)| number.to_string()).collect();
        assert_eq!(order, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let edges = vec![
            BomEdge::new(0, None, 1, 1),
            BomEdge::new(1, Some(1), 2, 1),
            BomEdge::new(2, Some(2), 1, 1),
        ];

        let err = roll_up_with(&edges, &HashMap::new()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RollupError>(),
            Some(RollupError::CyclicBom { part_id: 1 })
        ));
    }

    #[test]
    fn test_missing_quantity_is_malformed() {
        let edges = vec![BomEdge {
            id: Some(0),
            part_id: Some(PartId::new(5)),
            parent_part_id: None,
            quantity: None,
        }];

        let err = roll_up_with(&edges, &HashMap::new()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RollupError>(),
            Some(RollupError::MalformedEdge { .. })
        ));
        assert!(err.to_string().contains("no quantity"));
    }

    #[test]
    fn test_missing_part_id_is_malformed() {
        let edges = vec![BomEdge {
            id: Some(0),
            part_id: None,
            parent_part_id: None,
            quantity: Some(1),
        }];

        let err = roll_up_with(&edges, &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("no part_id"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let edges = vec![
            BomEdge::new(0, None, 1, u64::MAX),
            BomEdge::new(1, Some(1), 2, 2),
        ];

        let err = roll_up_with(&edges, &HashMap::new()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RollupError>(),
            Some(RollupError::QuantityOverflow { part_id: 2 })
        ));
    }

    #[test]
    fn test_summation_overflow_is_reported() {
        let edges = vec![
            BomEdge::new(0, None, 1, u64::MAX),
            BomEdge::new(1, None, 2, 1),
        ];
        let numbers = number_by_id(&[(1, "SHARED"), (2, "SHARED")]);

        let err = roll_up_with(&edges, &numbers).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RollupError>(),
            Some(RollupError::QuantityOverflow { part_id: 2 })
        ));
    }

    #[test]
    fn test_resolver_error_aborts() {
        let index = BomIndexer::group_by_parent(&[BomEdge::new(0, None, 1, 1)]);
        let mut resolve = |_id: PartId| -> Result<PartNumber> { anyhow::bail!("catalog offline") };

        let err = RollupCalculator::roll_up(&index, &mut resolve).unwrap_err();
        assert!(err.to_string().contains("catalog offline"));
    }

    #[test]
    fn test_subtree_with_multiplier() {
        let edges = vec![
            BomEdge::new(0, None, 1, 2),
            BomEdge::new(1, Some(1), 2, 3),
        ];
        let index = BomIndexer::group_by_parent(&edges);
        let mut required = RequiredQuantities::new();
        let mut resolve = |id: PartId| -> Result<PartNumber> { Ok(PartNumber::from(id)) };

        RollupCalculator::calc_parts_required(
            &index,
            ParentKey::Part(PartId::new(1)),
            10,
            &mut required,
            &mut resolve,
        )
        .unwrap();

        assert_eq!(required.get("2"), 30);
        assert_eq!(required.get("1"), 0);
    }

    #[test]
    fn test_reindexing_gives_identical_totals() {
        let edges = vec![
            BomEdge::new(0, None, 1, 2),
            BomEdge::new(1, Some(1), 2, 3),
            BomEdge::new(2, Some(1), 3, 1),
        ];

        let first = roll_up_with(&edges, &HashMap::new()).unwrap();
        let second = roll_up_with(&edges, &HashMap::new()).unwrap();

        assert_eq!(first, second);
    }
}
