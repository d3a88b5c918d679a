//! The canonical export row and the fixed column schema the downstream
//! inventory system consumes.

/// How a row entered the reconciled set.
///
/// A single accessioned specimen can legitimately appear twice: once as its
/// own bare record and once inside each aliquot chain that resolves to it.
/// The tag is not a schema column; it exists so a downstream consumer can
/// deduplicate deliberately instead of inheriting the duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RecordOrigin {
    /// A bare accessioning record, exported as-is.
    Standalone,
    /// An aliquot chain: aliquot joined to its QC measurement and to the
    /// parent accessioning record.
    DerivedFromAliquot,
}

/// The reconciled superset row, before projection onto the export schema.
///
/// Field values are already canonical (vocabulary mapped, units normalized,
/// ids zero-padded); dates are still raw source text and are formatted only
/// at projection time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportRecord {
    pub origin: RecordOrigin,
    pub specimen_id: String,
    pub current_status: String,
    pub parent_specimen_id: Option<String>,
    pub analysis_type: Option<String>,
    pub specimen_type: Option<String>,
    pub container_type: Option<String>,
    pub created_date: Option<String>,
    pub collection_date: Option<String>,
    pub collection_time: Option<String>,
    pub received_date: Option<String>,
    pub origination_facility: Option<String>,
    pub destination_facility: Option<String>,
    pub randomization_id: Option<String>,
    pub screening_id: Option<String>,
    pub site_id: Option<String>,
    pub comments: Option<String>,
    pub study_number: Option<String>,
    pub visit: Option<String>,
    pub concentration: Option<String>,
    pub volume: Option<String>,
    pub nucleic_yield: Option<String>,
    pub purity: Option<String>,
    pub stored_date: Option<String>,
    pub shipped_date: Option<String>,
    pub terminal_date: Option<String>,
}

/// The fixed, ordered export schema. Several columns are permanently empty
/// because the source systems never populate them; the consumer requires
/// them present regardless.
pub const EXPORT_COLUMNS: &[&str] = &[
    "Analysis Type",
    "Assay",
    "Biopsy Accession ID",
    "Biopsy Anatomic Location",
    "Biopsy Collection Method",
    "Collection Date",
    "Created Date",
    "Current Status",
    "Destination Facility",
    "Fixation Method",
    "Lesion Type",
    "Nucleic Acid Concentration",
    "Nucleic Acid Volume",
    "Nucleic Acid Yield",
    "Origination Facility",
    "Parent Specimen ID",
    "Pre/Post Treatment",
    "Randomization ID",
    "Received Date",
    "Screening ID",
    "Shipped Date",
    "Site ID",
    "Slide Thickness",
    "Slides Sectioned Date",
    "Specimen Comments",
    "Specimen Fixation Date",
    "Specimen ID",
    "Specimen Tissue Category",
    "Specimen Type",
    "Study Number",
    "Terminal Date",
    "Terminal Date_su",
    "Vendor",
    "Vendor Specimen ID",
    "Visit",
    "Diagnosis Confirmed",
    "Biopsy Lesion Injection Status",
    "Time from Tissue Excision to Immersion in Fixative",
    "Fixation Time",
    "Institutional Block or Slide ID",
    "Time Specimen Placed in Fixative",
    "Number of Slides Submitted",
    "Collection Time",
    "Purity",
    "Type of Biopsy Sample Taken",
    "Container Type",
];

/// A formatted export partition: rows of textual cells in `EXPORT_COLUMNS`
/// order. Missing values are empty strings by the time a table exists.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportTable {
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn columns() -> &'static [&'static str] {
        EXPORT_COLUMNS
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), EXPORT_COLUMNS.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
