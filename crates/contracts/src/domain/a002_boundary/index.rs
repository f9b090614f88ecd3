//! Boundary Index: departments by join key and municipalities grouped under
//! their department key.

use std::collections::HashMap;

use geojson::Feature;

use super::aggregate::{DepartmentBoundary, JoinStrategy, MunicipalityFeature};
use crate::shared::bounds::Bounds;
use crate::shared::config::JoinConfig;

#[derive(Debug, Clone)]
pub struct BoundaryIndex {
    strategy: JoinStrategy,
    /// Every department feature in file order, keyed or not
    departments: Vec<DepartmentBoundary>,
    /// key → position in `departments`; a later duplicate overwrites silently
    department_by_key: HashMap<String, usize>,
    municipalities: HashMap<String, Vec<MunicipalityFeature>>,
    all_bounds: Option<Bounds>,
}

impl BoundaryIndex {
    pub fn build(departments: Vec<Feature>, municipalities: Vec<Feature>, join: &JoinConfig) -> Self {
        let strategy = JoinStrategy::from_config(join);

        let departments: Vec<DepartmentBoundary> = departments
            .into_iter()
            .map(|f| DepartmentBoundary::from_feature(f, strategy, join))
            .collect();

        let mut department_by_key = HashMap::new();
        for (pos, dept) in departments.iter().enumerate() {
            if let Some(key) = &dept.key {
                department_by_key.insert(key.clone(), pos);
            }
        }

        let all_bounds = Bounds::union_all(departments.iter().filter_map(|d| d.bounds.as_ref()));

        let mut by_department: HashMap<String, Vec<MunicipalityFeature>> = HashMap::new();
        let mut unjoined = 0usize;
        for feature in municipalities {
            let Some(key) = strategy.municipality_key(feature.properties.as_ref(), join) else {
                unjoined += 1;
                continue;
            };
            by_department
                .entry(key)
                .or_default()
                .push(MunicipalityFeature::from_feature(feature, join));
        }

        log::debug!(
            "Boundary index built: {} departments ({} keyed), {} department groups of municipalities, {} municipalities without join key",
            departments.len(),
            department_by_key.len(),
            by_department.len(),
            unjoined
        );

        Self {
            strategy,
            departments,
            department_by_key,
            municipalities: by_department,
            all_bounds,
        }
    }

    pub fn join_strategy(&self) -> JoinStrategy {
        self.strategy
    }

    /// Department registered under `key` (last one wins on duplicates)
    pub fn department(&self, key: &str) -> Option<&DepartmentBoundary> {
        self.department_position(key).map(|pos| &self.departments[pos])
    }

    /// Position of the department registered under `key` in [`Self::departments`]
    pub fn department_position(&self, key: &str) -> Option<usize> {
        self.department_by_key.get(key).copied()
    }

    /// All department features in file order
    pub fn departments(&self) -> &[DepartmentBoundary] {
        &self.departments
    }

    /// Municipalities of a department in file order; empty for unknown keys
    pub fn municipalities(&self, key: &str) -> &[MunicipalityFeature] {
        self.municipalities
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Union of all department boundaries, for the overview framing
    pub fn all_bounds(&self) -> Option<Bounds> {
        self.all_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use geojson::{Geometry, Value};
    use serde_json::json;

    fn feature(props: serde_json::Value, x: f64, y: f64) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![vec![
                vec![x, y],
                vec![x + 1.0, y],
                vec![x + 1.0, y + 1.0],
                vec![x, y],
            ]]))),
            id: None,
            properties: props.as_object().cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn test_groups_municipalities_by_department_in_order() {
        let join = load_config(None).unwrap().join;
        let depts = vec![
            feature(json!({ "DeNombre": "Antioquia" }), -76.0, 6.0),
            feature(json!({ "DeNombre": "Amazonas" }), -71.0, -2.0),
        ];
        let munis = vec![
            feature(json!({ "Depto": "ANTIOQUIA", "MpNombre": "Medellín" }), -75.6, 6.2),
            feature(json!({ "Depto": "Amazonas", "MpNombre": "Leticia" }), -70.0, -4.0),
            feature(json!({ "Depto": "antioquia ", "MpNombre": "Bello" }), -75.5, 6.3),
            feature(json!({ "MpNombre": "Sin departamento" }), 0.0, 0.0),
        ];
        let index = BoundaryIndex::build(depts, munis, &join);

        let names: Vec<&str> = index.municipalities("antioquia").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Medellín", "Bello"]);
        assert_eq!(index.municipalities("amazonas").len(), 1);
        assert!(index.municipalities("").is_empty());
        assert!(index.municipalities("choco").is_empty());
    }

    #[test]
    fn test_duplicate_department_key_last_write_wins() {
        let join = load_config(None).unwrap().join;
        let depts = vec![
            feature(json!({ "DeNombre": "Cesar", "id": 1 }), -74.0, 9.0),
            feature(json!({ "DeNombre": "CÉSAR", "id": 2 }), -73.0, 10.0),
        ];
        let index = BoundaryIndex::build(depts, vec![], &join);

        assert_eq!(index.departments().len(), 2);
        assert_eq!(index.department_position("cesar"), Some(1));
        assert_eq!(index.department("cesar").unwrap().label, "CÉSAR");
    }

    #[test]
    fn test_union_bounds_covers_all_departments() {
        let join = load_config(None).unwrap().join;
        let depts = vec![
            feature(json!({ "DeNombre": "A" }), -76.0, 6.0),
            feature(json!({}), -70.0, -4.0),
        ];
        let index = BoundaryIndex::build(depts, vec![], &join);
        let b = index.all_bounds().unwrap();
        assert_eq!(b, Bounds { south: -4.0, west: -76.0, north: 7.0, east: -69.0 });
    }

    #[test]
    fn test_code_join_strategy() {
        let mut join = load_config(None).unwrap().join;
        join.use_code_link = true;
        let depts = vec![feature(json!({ "DeNombre": "Amazonas", "DPTO": "91" }), -71.0, -2.0)];
        let munis = vec![feature(json!({ "COD_DEP": 91, "MpCodigo": "91001" }), -70.0, -4.0)];
        let index = BoundaryIndex::build(depts, munis, &join);

        assert_eq!(index.join_strategy(), JoinStrategy::Code);
        assert!(index.department("91").is_some());
        assert_eq!(index.municipalities("91").len(), 1);
        assert!(index.municipalities("amazonas").is_empty());
    }
}
