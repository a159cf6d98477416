use bom_rollup::prelude::*;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock ReportWriter for testing that captures the written rows
#[derive(Default)]
pub struct MockReportWriter {
    pub rows: RefCell<Option<Vec<(String, u64)>>>,
    pub destination: RefCell<Option<PathBuf>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_rows(&self) -> Option<Vec<(String, u64)>> {
        self.rows.borrow().clone()
    }

    pub fn was_written(&self) -> bool {
        self.rows.borrow().is_some()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()> {
        *self.rows.borrow_mut() = Some(
            required
                .iter()
                .map(|(number, quantity)| (number.to_string(), quantity))
                .collect(),
        );
        *self.destination.borrow_mut() = Some(destination.to_path_buf());
        Ok(())
    }
}
