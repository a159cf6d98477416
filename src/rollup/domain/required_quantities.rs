use super::PartNumber;
use std::collections::HashMap;

/// RequiredQuantities accumulator: part number to total required quantity
///
/// Iteration follows the order in which each part number was first accumulated,
/// which is also the row order of the written report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredQuantities {
    entries: Vec<(PartNumber, u64)>,
    positions: HashMap<PartNumber, usize>,
}

impl RequiredQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the running total of `part_number`
    ///
    /// Returns the new total, or `None` if it would overflow `u64`. On overflow
    /// the stored total is left unchanged.
    pub fn add(&mut self, part_number: PartNumber, quantity: u64) -> Option<u64> {
        match self.positions.get(&part_number) {
            Some(&position) => {
                let total = self.entries[position].1.checked_add(quantity)?;
                self.entries[position].1 = total;
                Some(total)
            }
            None => {
                self.positions.insert(part_number.clone(), self.entries.len());
                self.entries.push((part_number, quantity));
                Some(quantity)
            }
        }
    }

    /// Total for `part_number`, zero when it was never accumulated
    pub fn get(&self, part_number: &str) -> u64 {
        self.positions
            .get(part_number)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PartNumber, u64)> {
        self.entries.iter().map(|(number, quantity)| (number, *quantity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all part numbers, saturating at `u64::MAX`
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, (_, quantity)| sum.saturating_add(*quantity))
    }

    /// Snapshot as an unordered map, convenient for comparisons
    pub fn to_map(&self) -> HashMap<String, u64> {
        self.entries
            .iter()
            .map(|(number, quantity)| (number.to_string(), *quantity))
            .collect()
    }
}
