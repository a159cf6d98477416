use bom_rollup::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock PartCatalog for testing
pub struct MockPartCatalog {
    pub edges: Vec<BomEdge>,
    pub part_numbers: HashMap<u64, String>,
    pub should_fail: bool,
    pub resolve_calls: RefCell<Vec<u64>>,
}

impl MockPartCatalog {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            part_numbers: HashMap::new(),
            should_fail: false,
            resolve_calls: RefCell::new(Vec::new()),
        }
    }

    /// Adds an edge; `parent` of `None` attaches the part to the root
    pub fn with_edge(mut self, parent: Option<u64>, part_id: u64, quantity: u64) -> Self {
        let id = self.edges.len() as u64;
        self.edges.push(BomEdge::new(id, parent, part_id, quantity));
        self
    }

    pub fn with_part_number(mut self, part_id: u64, part_number: &str) -> Self {
        self.part_numbers.insert(part_id, part_number.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn resolve_count(&self) -> usize {
        self.resolve_calls.borrow().len()
    }
}

impl Default for MockPartCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PartCatalog for MockPartCatalog {
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>> {
        if self.should_fail {
            return Err(RollupError::Transport {
                path: "http://bom.test/bom/".to_string(),
                details: "Mock part catalog failure".to_string(),
            }
            .into());
        }
        Ok(self.edges.clone())
    }

    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord> {
        self.resolve_calls.borrow_mut().push(part_id.value());
        Ok(PartRecord::new(
            part_id,
            self.part_numbers.get(&part_id.value()).cloned(),
        ))
    }
}
