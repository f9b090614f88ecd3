//! Color Assignment Registry.
//!
//! A value gets its color on first lookup and keeps it for good:
//! `palette[count % palette.len()]`, where `count` is the number of values
//! seen before. Assignment order follows data iteration order and is never
//! sorted.

use std::collections::HashMap;

use crate::domain::a001_facility_network::FacilityCategory;
use crate::shared::config::PaletteConfig;

#[derive(Debug, Clone)]
pub struct ColorRegistry {
    palette: Vec<String>,
    /// Assignments in first-seen order
    assigned: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl ColorRegistry {
    /// `palette` must be non-empty; config validation guarantees it.
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            assigned: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Color for `value`, assigning the next palette slot on first sight
    pub fn color_for(&mut self, value: &str) -> String {
        if let Some(&pos) = self.positions.get(value) {
            return self.assigned[pos].1.clone();
        }
        let color = if self.palette.is_empty() {
            String::new()
        } else {
            self.palette[self.assigned.len() % self.palette.len()].clone()
        };
        self.positions.insert(value.to_string(), self.assigned.len());
        self.assigned.push((value.to_string(), color.clone()));
        color
    }

    /// Read-only lookup; never assigns
    pub fn get(&self, value: &str) -> Option<&str> {
        self.positions
            .get(value)
            .map(|&pos| self.assigned[pos].1.as_str())
    }

    /// `(value, color)` pairs in first-seen order
    #[cfg(test)]
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assigned.iter().map(|(v, c)| (v.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// One registry for network groups and one per facility category
#[derive(Debug, Clone)]
pub struct ColorRegistries {
    pub group: ColorRegistry,
    facilities: [ColorRegistry; 3],
}

impl ColorRegistries {
    pub fn new(palette: &PaletteConfig) -> Self {
        Self {
            group: ColorRegistry::new(palette.group.clone()),
            facilities: [
                ColorRegistry::new(palette.facility.clone()),
                ColorRegistry::new(palette.facility.clone()),
                ColorRegistry::new(palette.facility.clone()),
            ],
        }
    }

    pub fn facility(&self, category: FacilityCategory) -> &ColorRegistry {
        &self.facilities[category.slot()]
    }

    pub fn facility_mut(&mut self, category: FacilityCategory) -> &mut ColorRegistry {
        &mut self.facilities[category.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("#00000{}", i)).collect()
    }

    #[test]
    fn test_color_is_stable() {
        let mut reg = ColorRegistry::new(palette(3));
        let first = reg.color_for("Antioquia");
        reg.color_for("Boyacá");
        assert_eq!(reg.color_for("Antioquia"), first);
        assert_eq!(reg.get("Antioquia"), Some(first.as_str()));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_distinct_values_get_distinct_colors_until_wrap() {
        let mut reg = ColorRegistry::new(palette(3));
        let a = reg.color_for("a");
        let b = reg.color_for("b");
        let c = reg.color_for("c");
        assert!(a != b && b != c && a != c);
        // fourth value wraps to the first slot
        assert_eq!(reg.color_for("d"), a);
    }

    #[test]
    fn test_assignment_follows_first_seen_order() {
        let mut reg = ColorRegistry::new(palette(5));
        for v in ["zeta", "alfa", "zeta", "beta"] {
            reg.color_for(v);
        }
        let order: Vec<&str> = reg.assignments().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["zeta", "alfa", "beta"]);
        assert_eq!(reg.get("zeta"), Some("#000000"));
        assert_eq!(reg.get("gamma"), None);
    }

    #[test]
    fn test_facility_registries_are_independent() {
        let config = PaletteConfig { group: palette(4), facility: palette(4) };
        let mut regs = ColorRegistries::new(&config);
        regs.facility_mut(FacilityCategory::Emo).color_for("IPS Uno");
        let ecis = regs.facility_mut(FacilityCategory::Ecis).color_for("IPS Dos");
        assert_eq!(ecis, "#000000");
        assert!(regs.facility(FacilityCategory::Pcl).is_empty());
        assert!(regs.group.is_empty());
    }
}
