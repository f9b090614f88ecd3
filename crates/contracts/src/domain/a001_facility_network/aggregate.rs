use serde::{Deserialize, Serialize};

// ============================================================================
// Facility category
// ============================================================================

/// Категория учреждения сети SST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityCategory {
    /// Evaluaciones médicas ocupacionales
    Emo,
    /// Evaluación de condiciones de salud
    Ecis,
    /// Pérdida de capacidad laboral
    Pcl,
}

impl FacilityCategory {
    /// Код категории, используемый в легенде и подсказках
    pub fn code(&self) -> &'static str {
        match self {
            FacilityCategory::Emo => "EMO",
            FacilityCategory::Ecis => "ECIS",
            FacilityCategory::Pcl => "PCL",
        }
    }

    /// All categories in legend order
    pub fn all() -> [FacilityCategory; 3] {
        [FacilityCategory::Emo, FacilityCategory::Ecis, FacilityCategory::Pcl]
    }

    #[cfg(test)]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EMO" => Some(FacilityCategory::Emo),
            "ECIS" => Some(FacilityCategory::Ecis),
            "PCL" => Some(FacilityCategory::Pcl),
            _ => None,
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            FacilityCategory::Emo => 0,
            FacilityCategory::Ecis => 1,
            FacilityCategory::Pcl => 2,
        }
    }
}

impl std::fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Facility record
// ============================================================================

/// Facility names serving one municipality, one optional value per category.
///
/// `None` means the category has no facility there; it is never stored as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub emo: Option<String>,
    pub ecis: Option<String>,
    pub pcl: Option<String>,
}

impl FacilityRecord {
    pub fn get(&self, category: FacilityCategory) -> Option<&str> {
        match category {
            FacilityCategory::Emo => self.emo.as_deref(),
            FacilityCategory::Ecis => self.ecis.as_deref(),
            FacilityCategory::Pcl => self.pcl.as_deref(),
        }
    }

    pub fn set(&mut self, category: FacilityCategory, value: Option<String>) {
        match category {
            FacilityCategory::Emo => self.emo = value,
            FacilityCategory::Ecis => self.ecis = value,
            FacilityCategory::Pcl => self.pcl = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_round_trip() {
        for category in FacilityCategory::all() {
            assert_eq!(FacilityCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(FacilityCategory::from_code("emo"), None);
    }

    #[test]
    fn test_record_get_set() {
        let mut record = FacilityRecord::default();
        record.set(FacilityCategory::Ecis, Some("IPS Central".to_string()));
        assert_eq!(record.get(FacilityCategory::Ecis), Some("IPS Central"));
        assert_eq!(record.get(FacilityCategory::Emo), None);
    }
}
