//! Launch record dataset — CSV loading and read-only filtering.
//!
//! The table is loaded once at start-up and never mutated afterwards; every
//! query is a read-only filter producing a transient view that figure
//! building consumes directly.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Dropdown sentinel meaning "all sites".
pub const ALL_SITES: &str = "ALL";

// ============================================================
// Errors
// ============================================================

/// Errors raised while loading the dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// The file could not be opened or read.
    Io(String),
    /// A row failed to parse against the expected columns.
    Parse(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(msg) => write!(f, "dataset I/O error: {msg}"),
            DatasetError::Parse(msg) => write!(f, "dataset parse error: {msg}"),
        }
    }
}

impl std::error::Error for DatasetError {}

// ============================================================
// Records
// ============================================================

/// One row of the dataset: a single launch attempt and its outcome.
///
/// Column names follow the CSV boundary contract; columns beyond these four
/// are ignored on load.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name.
    #[serde(rename = "Launch Site")]
    pub site: String,
    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub outcome: u8,
    /// Booster version category (e.g. "FT", "v1.1").
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Whether this launch succeeded (outcome class 1).
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

// ============================================================
// Site selection
// ============================================================

/// Dropdown selection: a specific site, or the `ALL` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. `"ALL"` selects every site; anything else is
    /// treated as a site name, whether the dataset knows it or not.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether `record` passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }
}

// ============================================================
// Payload range
// ============================================================

/// Inclusive [min, max] payload-mass filter from the range slider.
///
/// An inverted range (min > max) matches nothing. The bounds are applied
/// without validating their order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl PayloadRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        Self { min_kg, max_kg }
    }

    /// Whether `payload_kg` lies within the inclusive bounds.
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.min_kg && payload_kg <= self.max_kg
    }
}

// ============================================================
// Table
// ============================================================

/// Immutable in-memory table of launch records.
#[derive(Debug)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    /// Load the table from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DatasetError::Io(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// Load the table from any CSV reader. A header row is required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for (idx, row) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
            // +2: one for the header line, one for 1-based numbering.
            let record = row.map_err(|e| DatasetError::Parse(format!("line {}: {e}", idx + 2)))?;
            records.push(record);
        }
        debug!(rows = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-appearance order (dropdown options).
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.site.as_str()) {
                sites.push(&record.site);
            }
        }
        sites
    }

    /// (min, max) payload mass over all rows. `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut payloads = self.records.iter().map(|r| r.payload_mass_kg);
        let first = payloads.next()?;
        let mut bounds = (first, first);
        for payload in payloads {
            bounds.0 = bounds.0.min(payload);
            bounds.1 = bounds.1.max(payload);
        }
        Some(bounds)
    }

    /// Rows passing the site selection, in table order.
    pub fn filter_by_site<'a>(
        &'a self,
        selection: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records.iter().filter(move |r| selection.matches(r))
    }

    /// Rows passing both filters, in table order. The payload range is
    /// applied first, then the site selection.
    pub fn filter<'a>(
        &'a self,
        selection: &'a SiteSelection,
        range: PayloadRange,
    ) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records
            .iter()
            .filter(move |r| range.contains(r.payload_mass_kg) && selection.matches(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0,v1.0
2,CCAFS LC-40,0,525,v1.0
3,VAFB SLC-4E,1,500,v1.1
4,KSC LC-39A,1,5300,FT
5,CCAFS LC-40,1,3136,FT
6,VAFB SLC-4E,0,9600,B4
";

    fn sample_table() -> LaunchTable {
        LaunchTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn load_ignores_extra_columns() {
        let table = sample_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table.records()[0].site, "CCAFS LC-40");
        assert_eq!(table.records()[0].payload_mass_kg, 0.0);
        assert!(!table.records()[0].is_success());
        assert_eq!(table.records()[3].booster_category, "FT");
        assert!(table.records()[3].is_success());
    }

    #[test]
    fn sites_are_distinct_in_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            table.sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn payload_bounds_span_the_data() {
        let table = sample_table();
        assert_eq!(table.payload_bounds(), Some((0.0, 9600.0)));

        let empty = LaunchTable::from_reader(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n".as_bytes(),
        )
        .unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.payload_bounds(), None);
    }

    #[test]
    fn range_filter_bounds_are_inclusive() {
        let table = sample_table();
        let range = PayloadRange::new(500.0, 5300.0);
        let payloads: Vec<f64> = table
            .filter(&SiteSelection::All, range)
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(payloads, vec![525.0, 500.0, 5300.0, 3136.0]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let table = sample_table();
        let range = PayloadRange::new(5300.0, 500.0);
        assert_eq!(table.filter(&SiteSelection::All, range).count(), 0);
    }

    #[test]
    fn site_filter_matches_exactly() {
        let table = sample_table();
        let selection = SiteSelection::from_value("VAFB SLC-4E");
        let rows: Vec<&LaunchRecord> = table.filter_by_site(&selection).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.site == "VAFB SLC-4E"));

        // Unknown sites are not an error — they just match nothing.
        let unknown = SiteSelection::from_value("Boca Chica");
        assert_eq!(table.filter_by_site(&unknown).count(), 0);
    }

    #[test]
    fn all_sentinel_selects_everything() {
        let table = sample_table();
        assert_eq!(SiteSelection::from_value(ALL_SITES), SiteSelection::All);
        assert_eq!(table.filter_by_site(&SiteSelection::All).count(), 6);
    }

    #[test]
    fn malformed_rows_fail_with_line_context() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,yes,500,v1.0\n";
        let err = LaunchTable::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::Parse(msg) => assert!(msg.contains("line 2")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let table = LaunchTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = LaunchTable::from_path("/nonexistent/launches.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
