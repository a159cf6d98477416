use clap::Parser;
use std::path::PathBuf;

/// Compute the total quantity of every part needed to build one unit of the top-level assembly
#[derive(Parser, Debug)]
#[command(name = "bom-rollup")]
#[command(version)]
#[command(about = "Roll up a bill of materials into total part quantities", long_about = None)]
pub struct Args {
    /// Report file to write (.xlsx or .csv). Defaults to the config file value, then roll_up_output.xlsx
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
