use serde::{Deserialize, Serialize};

use crate::domain::a001_facility_network::FacilityCategory;

/// Option value of the "all departments" entry in the department select
pub const ALL_DEPARTMENTS: &str = "__ALL__";
/// Option value of the "all groups" entry in the group select
pub const ALL_GROUPS: &str = "__ETC_ALL__";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepartmentSelection {
    #[default]
    All,
    Key(String),
}

impl DepartmentSelection {
    /// Parse a department `<select>` value
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_DEPARTMENTS || value.is_empty() {
            DepartmentSelection::All
        } else {
            DepartmentSelection::Key(value.to_string())
        }
    }

    pub fn option_value(&self) -> String {
        match self {
            DepartmentSelection::All => ALL_DEPARTMENTS.to_string(),
            DepartmentSelection::Key(key) => key.clone(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            DepartmentSelection::All => None,
            DepartmentSelection::Key(key) => Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupFilter {
    #[default]
    All,
    Value(String),
}

impl GroupFilter {
    /// Parse a group `<select>` value
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_GROUPS {
            GroupFilter::All
        } else {
            GroupFilter::Value(value.to_string())
        }
    }

    pub fn option_value(&self) -> String {
        match self {
            GroupFilter::All => ALL_GROUPS.to_string(),
            GroupFilter::Value(v) => v.clone(),
        }
    }

    pub fn matches(&self, group: &str) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Value(v) => v == group,
        }
    }
}

/// Состояние чекбоксов категорий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacilityToggles {
    pub emo: bool,
    pub ecis: bool,
    pub pcl: bool,
}

impl FacilityToggles {
    pub fn is_enabled(&self, category: FacilityCategory) -> bool {
        match category {
            FacilityCategory::Emo => self.emo,
            FacilityCategory::Ecis => self.ecis,
            FacilityCategory::Pcl => self.pcl,
        }
    }

    pub fn set(&mut self, category: FacilityCategory, enabled: bool) {
        match category {
            FacilityCategory::Emo => self.emo = enabled,
            FacilityCategory::Ecis => self.ecis = enabled,
            FacilityCategory::Pcl => self.pcl = enabled,
        }
    }

    /// Enabled categories in legend order
    pub fn enabled(&self) -> impl Iterator<Item = FacilityCategory> + '_ {
        FacilityCategory::all().into_iter().filter(move |c| self.is_enabled(*c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub department: DepartmentSelection,
    pub group: GroupFilter,
    pub toggles: FacilityToggles,
}

/// UI events that drive the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Department `<select>` changed
    DepartmentChanged(DepartmentSelection),
    /// Group `<select>` changed
    GroupChanged(GroupFilter),
    /// One of the facility checkboxes changed
    FacilityToggled(FacilityCategory, bool),
    /// Department polygon clicked on the map
    DepartmentClicked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_values() {
        assert_eq!(DepartmentSelection::from_option_value("__ALL__"), DepartmentSelection::All);
        assert_eq!(
            DepartmentSelection::from_option_value("amazonas"),
            DepartmentSelection::Key("amazonas".to_string())
        );
        assert_eq!(GroupFilter::from_option_value("__ETC_ALL__"), GroupFilter::All);
        assert_eq!(GroupFilter::Value("Sur".to_string()).option_value(), "Sur");
    }

    #[test]
    fn test_enabled_toggles_in_order() {
        let toggles = FacilityToggles { emo: false, ecis: true, pcl: true };
        let enabled: Vec<FacilityCategory> = toggles.enabled().collect();
        assert_eq!(enabled, vec![FacilityCategory::Ecis, FacilityCategory::Pcl]);
    }
}
