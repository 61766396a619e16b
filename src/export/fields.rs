//! Output column configuration
//!
//! The field mapping is an explicit ordered table pairing an output
//! column header with the library's internal field key. Its order
//! determines both header and data column order, and must stay stable
//! across runs for output compatibility.

/// Library field key holding the track duration in milliseconds
pub const TOTAL_TIME_KEY: &str = "Total Time";

/// Library field key holding the track's file location URI
pub const LOCATION_KEY: &str = "Location";

/// One output column: header text and the library key it reads from
#[derive(Debug, Clone)]
pub struct FieldColumn {
    /// Human-readable column header
    pub header: String,

    /// Library field key the column value comes from
    pub source: String,
}

impl FieldColumn {
    pub fn new(header: &str, source: &str) -> Self {
        Self {
            header: header.to_string(),
            source: source.to_string(),
        }
    }
}

/// Ordered table of output columns
#[derive(Debug, Clone)]
pub struct FieldMapping {
    columns: Vec<FieldColumn>,
}

impl FieldMapping {
    /// Create a mapping from an explicit column list
    pub fn new(columns: Vec<FieldColumn>) -> Self {
        Self { columns }
    }

    /// The standard column table
    ///
    /// Headers and order match the text exports produced by the
    /// iTunes/Music application itself; a handful of columns read
    /// from a differently-named library key.
    pub fn standard() -> Self {
        let columns = [
            ("Name", "Name"),
            ("Artist", "Artist"),
            ("Composer", "Composer"),
            ("Album", "Album"),
            ("Grouping", "Grouping"),
            ("Work", "Work"),
            ("Movement Number", "Movement Number"),
            ("Movement Count", "Movement Count"),
            ("Movement Name", "Movement Name"),
            ("Genre", "Genre"),
            ("Size", "Size"),
            ("Time", TOTAL_TIME_KEY),
            ("Disc Number", "Disc Number"),
            ("Disc Count", "Disc Count"),
            ("Track Number", "Track Number"),
            ("Track Count", "Track Count"),
            ("Year", "Year"),
            ("Date Modified", "Date Modified"),
            ("Date Added", "Date Added"),
            ("Bit Rate", "Bit Rate"),
            ("Sample Rate", "Sample Rate"),
            ("Volume Adjustment", "Volume Adjustment"),
            ("Kind", "Kind"),
            ("Equaliser", "Equalizer"),
            ("Comments", "Comments"),
            ("Plays", "Play Count"),
            ("Last Played", "Play Date UTC"),
            ("Skips", "Skip Count"),
            ("Last Skipped", "Skip Date"),
            ("My Rating", "Rating"),
            ("Location", LOCATION_KEY),
        ]
        .iter()
        .map(|(header, source)| FieldColumn::new(header, source))
        .collect();

        Self { columns }
    }

    /// The columns, in output order
    pub fn columns(&self) -> &[FieldColumn] {
        &self.columns
    }

    /// The tab-separated header line (without line terminator)
    pub fn header_line(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.header.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_mapping_shape() {
        let mapping = FieldMapping::standard();
        assert_eq!(mapping.columns().len(), 31);

        // First and last columns anchor the table order
        assert_eq!(mapping.columns()[0].header, "Name");
        assert_eq!(mapping.columns()[30].header, "Location");

        // Renamed columns read from the library's own key
        let time = mapping.columns().iter().find(|c| c.header == "Time").unwrap();
        assert_eq!(time.source, TOTAL_TIME_KEY);
        let plays = mapping.columns().iter().find(|c| c.header == "Plays").unwrap();
        assert_eq!(plays.source, "Play Count");
    }

    #[test]
    fn test_header_line() {
        let mapping = FieldMapping::new(vec![
            FieldColumn::new("Name", "Name"),
            FieldColumn::new("Time", TOTAL_TIME_KEY),
        ]);
        assert_eq!(mapping.header_line(), "Name\tTime");
    }
}
