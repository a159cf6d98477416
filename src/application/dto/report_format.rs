use std::path::Path;

/// Report format enumeration for the roll-up output
///
/// Both formats carry the same two columns; the format is picked from the
/// destination's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Excel workbook (default)
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl ReportFormat {
    /// Detects the format from a destination path
    ///
    /// `.csv` (any case) selects CSV; every other extension, or none, selects XLSX.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ReportFormat::Csv,
            _ => ReportFormat::Xlsx,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Xlsx => write!(f, "xlsx"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_csv() {
        assert_eq!(ReportFormat::from_path(Path::new("out.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("OUT.CSV")), ReportFormat::Csv);
    }

    #[test]
    fn test_from_path_defaults_to_xlsx() {
        assert_eq!(ReportFormat::from_path(Path::new("out.xlsx")), ReportFormat::Xlsx);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Xlsx);
        assert_eq!(ReportFormat::from_path(Path::new("out.txt")), ReportFormat::Xlsx);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportFormat::Xlsx.to_string(), "xlsx");
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
    }
}
