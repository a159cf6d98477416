mod bom_indexer;
mod rollup_calculator;

pub use bom_indexer::BomIndexer;
pub use rollup_calculator::RollupCalculator;
