use serde::{Deserialize, Serialize};

/// NewType wrapper for the internal part identifier used by the BoM API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u64);

impl PartId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for the human-readable part number shown in reports
///
/// Several internal part ids may map onto the same part number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartNumber(String);

impl PartNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for PartNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Falls back to the decimal id when the catalog has no part number
impl From<PartId> for PartNumber {
    fn from(id: PartId) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PartNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Part record returned by the catalog for a single part id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartRecord {
    pub id: PartId,
    #[serde(default)]
    pub part_number: Option<String>,
}

impl PartRecord {
    pub fn new(id: PartId, part_number: Option<String>) -> Self {
        Self { id, part_number }
    }

    /// Returns the display part number, or the raw id when the catalog omitted it
    pub fn display_number(&self) -> PartNumber {
        match self.part_number.as_deref() {
            Some(number) if !number.is_empty() => PartNumber::new(number),
            _ => PartNumber::from(self.id),
        }
    }
}
