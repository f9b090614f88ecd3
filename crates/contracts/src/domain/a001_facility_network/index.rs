//! Facility Data Index: municipality code → facility names per category.

use std::collections::HashMap;

use super::aggregate::{FacilityCategory, FacilityRecord};
use crate::domain::common::normalize;
use crate::shared::config::FacilityColumns;

#[derive(Debug, Clone, Default)]
pub struct FacilityIndex {
    records: HashMap<String, FacilityRecord>,
}

impl FacilityIndex {
    /// Parse the facility CSV.
    ///
    /// Best effort: malformed records and rows without a municipality code are
    /// skipped, a missing column reads as absent, duplicate codes keep the
    /// last row.
    pub fn from_csv(csv_text: &str, columns: &FacilityColumns) -> Self {
        let mut records = HashMap::new();

        // Strip UTF-8 BOM if present
        let text = csv_text.trim_start_matches('\u{FEFF}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = match reader.headers() {
            Ok(h) => h.clone(),
            Err(e) => {
                log::debug!("Facility CSV has no readable header: {}", e);
                return Self { records };
            }
        };

        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let code_idx = position(columns.code_column.as_str());
        let category_idx: Vec<(FacilityCategory, Option<usize>)> = FacilityCategory::all()
            .into_iter()
            .map(|c| (c, position(columns.column(c))))
            .collect();

        let Some(code_idx) = code_idx else {
            log::debug!("Facility CSV lacks code column '{}'", columns.code_column);
            return Self { records };
        };

        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::debug!("Skipping malformed facility record: {}", e);
                    continue;
                }
            };

            let code = normalize(record.get(code_idx).unwrap_or_default());
            if code.is_empty() {
                continue;
            }

            let mut facility = FacilityRecord::default();
            for (category, idx) in &category_idx {
                let value = idx
                    .and_then(|i| record.get(i))
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
                facility.set(*category, value);
            }
            records.insert(code, facility);
        }

        Self { records }
    }

    /// Lookup by an already normalized municipality code
    pub fn get(&self, code: &str) -> Option<&FacilityRecord> {
        self.records.get(code)
    }

    /// Facility name of `category` for a municipality, `None` when absent
    pub fn value(&self, code: &str, category: FacilityCategory) -> Option<&str> {
        self.get(code).and_then(|r| r.get(category))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    fn columns() -> FacilityColumns {
        load_config(None).unwrap().facilities
    }

    #[test]
    fn test_parses_rows_and_absent_values() {
        let csv = "MpCodigo,EMO,ECIS,PCL\n05001,IPS Uno,,PCL Norte\n91001, ,Clínica Sur,\n";
        let index = FacilityIndex::from_csv(csv, &columns());

        assert_eq!(index.len(), 2);
        assert_eq!(index.value("05001", FacilityCategory::Emo), Some("IPS Uno"));
        assert_eq!(index.value("05001", FacilityCategory::Ecis), None);
        assert_eq!(index.value("05001", FacilityCategory::Pcl), Some("PCL Norte"));
        assert_eq!(index.value("91001", FacilityCategory::Emo), None);
        assert_eq!(index.value("91001", FacilityCategory::Ecis), Some("Clínica Sur"));
    }

    #[test]
    fn test_drops_rows_without_code_and_keeps_last_duplicate() {
        let csv = "\u{FEFF}MpCodigo,EMO,ECIS,PCL\n,IPS Huérfana,,\n  ,x,y,z\n\n05001,Primera,,\n05001,Segunda,,\n";
        let index = FacilityIndex::from_csv(csv, &columns());

        assert_eq!(index.len(), 1);
        assert_eq!(index.value("05001", FacilityCategory::Emo), Some("Segunda"));
    }

    #[test]
    fn test_short_rows_and_missing_columns_read_as_absent() {
        let csv = "MpCodigo,EMO\n05001,IPS Uno\n05002\n";
        let index = FacilityIndex::from_csv(csv, &columns());

        assert_eq!(index.len(), 2);
        assert_eq!(index.value("05001", FacilityCategory::Emo), Some("IPS Uno"));
        assert_eq!(index.value("05001", FacilityCategory::Pcl), None);
        assert_eq!(index.get("05002"), Some(&FacilityRecord::default()));
    }

    #[test]
    fn test_missing_code_column_yields_empty_index() {
        let csv = "Codigo,EMO,ECIS,PCL\n05001,IPS Uno,,\n";
        assert!(FacilityIndex::from_csv(csv, &columns()).is_empty());
        assert!(FacilityIndex::from_csv("", &columns()).is_empty());
    }
}
