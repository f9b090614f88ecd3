use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::a002_boundary::BoundaryIndex;
use crate::domain::common::collate;

/// Entry of the department select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentOption {
    pub key: String,
    pub label: String,
}

/// Department select entries.
///
/// One entry per join key, sorted by label with the key as tie-break.
///
/// Features sharing a key may carry different labels; the first one in
/// `collate` order is shown, so the list does not depend on file order.
pub fn department_options(index: &BoundaryIndex) -> Vec<DepartmentOption> {
    let mut labels: HashMap<&str, &str> = HashMap::new();
    for d in index.departments() {
        let Some(key) = d.key.as_deref() else {
            continue;
        };
        labels
            .entry(key)
            .and_modify(|label| {
                if collate(&d.label, *label) == Ordering::Less {
                    *label = d.label.as_str();
                }
            })
            .or_insert(d.label.as_str());
    }

    let mut items: Vec<DepartmentOption> = labels
        .into_iter()
        .map(|(key, label)| DepartmentOption {
            key: key.to_string(),
            label: label.to_string(),
        })
        .collect();
    items.sort_by(|a, b| collate(&a.label, &b.label).then_with(|| a.key.cmp(&b.key)));
    items
}

/// Group select entries: distinct, non-empty, sorted for display
pub fn group_options<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut items: Vec<String> = values
        .into_iter()
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect();
    items.sort_by(|a, b| collate(a, b));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use geojson::Feature;
    use serde_json::json;

    fn dept(props: serde_json::Value) -> Feature {
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: props.as_object().cloned(),
            foreign_members: None,
        }
    }

    fn sample() -> Vec<Feature> {
        vec![
            dept(json!({ "DeNombre": "Vichada" })),
            dept(json!({ "DeNombre": "Atlántico" })),
            dept(json!({ "DeNombre": "Bolívar" })),
            dept(json!({ "DeNombre": "ATLANTICO" })),
            dept(json!({ "OTRO": "sin nombre" })),
        ]
    }

    #[test]
    fn test_department_options_dedup_and_sort() {
        let join = load_config(None).unwrap().join;
        let index = BoundaryIndex::build(sample(), vec![], &join);
        let options = department_options(&index);

        let pairs: Vec<(&str, &str)> = options.iter().map(|o| (o.key.as_str(), o.label.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("atlantico", "ATLANTICO"), ("bolivar", "Bolívar"), ("vichada", "Vichada")]
        );
    }

    #[test]
    fn test_department_options_independent_of_feature_order() {
        let join = load_config(None).unwrap().join;
        let features = vec![
            dept(json!({ "DeNombre": "Vichada" })),
            dept(json!({ "DeNombre": "Atlántico" })),
            dept(json!({ "DeNombre": "Bolívar" })),
            dept(json!({ "DeNombre": "ATLANTICO" })),
            dept(json!({ "DeNombre": "bolivar" })),
        ];
        let mut reversed = features.clone();
        reversed.reverse();

        let a = department_options(&BoundaryIndex::build(features, vec![], &join));
        let b = department_options(&BoundaryIndex::build(reversed, vec![], &join));
        assert_eq!(a, b);
        let pairs: Vec<(&str, &str)> = a.iter().map(|o| (o.key.as_str(), o.label.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("atlantico", "ATLANTICO"), ("bolivar", "Bolívar"), ("vichada", "Vichada")]
        );
        // built twice from the same index
        let index = BoundaryIndex::build(sample(), vec![], &join);
        assert_eq!(department_options(&index), department_options(&index));
    }

    #[test]
    fn test_group_options() {
        let groups = group_options(["Sur", "", "Norte", "Sur", "Ñuble", "Centro"]);
        assert_eq!(groups, vec!["Centro", "Norte", "Ñuble", "Sur"]);
    }
}
