//! Legend/Option Renderer: legend entries from what is currently visible.
//!
//! Sorting here is display-only. Colors are read from the registries without
//! assigning, so the legend never changes first-seen color order.

use serde::Serialize;

use crate::domain::a001_facility_network::FacilityCategory;
use crate::domain::common::collate;
use crate::shared::palette::ColorRegistries;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Group (ETC) section
    pub groups: Vec<LegendItem>,
    /// Facility (IPS) section, labels `"<CATEGORY>: <name>"`
    pub facilities: Vec<LegendItem>,
}

impl Legend {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.facilities.is_empty()
    }
}

/// Build the legend.
///
/// `groups` are the visible group values; `facilities` holds, per enabled
/// category, the facility names visible in that category's overlay.
pub fn build_legend(
    groups: &[String],
    facilities: &[(FacilityCategory, Vec<String>)],
    registries: &ColorRegistries,
) -> Legend {
    let mut group_values: Vec<&String> = groups.iter().collect();
    group_values.sort_by(|a, b| collate(a, b));
    group_values.dedup();

    let group_items = group_values
        .into_iter()
        .map(|g| LegendItem {
            label: g.clone(),
            color: registries.group.get(g).unwrap_or_default().to_string(),
        })
        .collect();

    let mut facility_items = Vec::new();
    for category in FacilityCategory::all() {
        let Some((_, names)) = facilities.iter().find(|(c, _)| *c == category) else {
            continue;
        };
        let mut names: Vec<&String> = names.iter().collect();
        names.sort_by(|a, b| collate(a, b));
        names.dedup();
        let registry = registries.facility(category);
        facility_items.extend(names.into_iter().map(|name| LegendItem {
            label: format!("{}: {}", category.code(), name),
            color: registry.get(name).unwrap_or_default().to_string(),
        }));
    }

    Legend {
        groups: group_items,
        facilities: facility_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::PaletteConfig;

    fn registries() -> ColorRegistries {
        let palette: Vec<String> = ["#a", "#b", "#c"].iter().map(|s| s.to_string()).collect();
        ColorRegistries::new(&PaletteConfig { group: palette.clone(), facility: palette })
    }

    #[test]
    fn test_empty_legend() {
        let legend = build_legend(&[], &[], &registries());
        assert!(legend.is_empty());
    }

    #[test]
    fn test_sorted_for_display_without_reassigning_colors() {
        let mut regs = registries();
        regs.group.color_for("Sur");
        regs.group.color_for("Norte");
        regs.facility_mut(FacilityCategory::Pcl).color_for("Zeta IPS");
        regs.facility_mut(FacilityCategory::Pcl).color_for("Alfa IPS");

        let legend = build_legend(
            &["Sur".to_string(), "Norte".to_string()],
            &[(FacilityCategory::Pcl, vec!["Zeta IPS".to_string(), "Alfa IPS".to_string()])],
            &regs,
        );

        assert_eq!(
            legend.groups,
            vec![
                LegendItem { label: "Norte".into(), color: "#b".into() },
                LegendItem { label: "Sur".into(), color: "#a".into() },
            ]
        );
        assert_eq!(
            legend.facilities,
            vec![
                LegendItem { label: "PCL: Alfa IPS".into(), color: "#b".into() },
                LegendItem { label: "PCL: Zeta IPS".into(), color: "#a".into() },
            ]
        );
        // first-seen order untouched
        let order: Vec<&str> = regs.group.assignments().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["Sur", "Norte"]);
    }

    #[test]
    fn test_facility_sections_follow_category_order() {
        let mut regs = registries();
        regs.facility_mut(FacilityCategory::Emo).color_for("Uno");
        regs.facility_mut(FacilityCategory::Pcl).color_for("Dos");
        let legend = build_legend(
            &[],
            &[
                (FacilityCategory::Pcl, vec!["Dos".to_string()]),
                (FacilityCategory::Emo, vec!["Uno".to_string()]),
            ],
            &regs,
        );
        let labels: Vec<&str> = legend.facilities.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["EMO: Uno", "PCL: Dos"]);
        assert!(!legend.is_empty());
    }
}
