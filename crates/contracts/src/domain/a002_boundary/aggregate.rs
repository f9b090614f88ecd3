use geojson::{Feature, JsonObject};
use serde::{Deserialize, Serialize};

use crate::domain::common::{normalize, pick_first_prop};
use crate::shared::bounds::Bounds;
use crate::shared::config::JoinConfig;

// ============================================================================
// Join strategy
// ============================================================================

/// How municipalities are attached to their department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinStrategy {
    /// Normalized department display name
    Name,
    /// Normalized administrative department code
    Code,
}

impl JoinStrategy {
    pub fn from_config(join: &JoinConfig) -> Self {
        if join.use_code_link {
            JoinStrategy::Code
        } else {
            JoinStrategy::Name
        }
    }

    /// Join key of a department feature; `None` when all candidates are empty
    pub fn department_key(&self, props: Option<&JsonObject>, join: &JoinConfig) -> Option<String> {
        let candidates = match self {
            JoinStrategy::Name => &join.department_name_fields,
            JoinStrategy::Code => &join.department_code_fields,
        };
        non_empty_key(pick_first_prop(props, candidates))
    }

    /// Join key of a municipality feature, normalized like the department one
    pub fn municipality_key(&self, props: Option<&JsonObject>, join: &JoinConfig) -> Option<String> {
        let candidates = match self {
            JoinStrategy::Name => &join.municipality_department_name_fields,
            JoinStrategy::Code => &join.municipality_department_code_fields,
        };
        non_empty_key(pick_first_prop(props, candidates))
    }
}

fn non_empty_key(raw: Option<String>) -> Option<String> {
    raw.map(|s| normalize(&s)).filter(|k| !k.is_empty())
}

// ============================================================================
// Department boundary
// ============================================================================

/// Department polygon as loaded, with its derived join key and label
#[derive(Debug, Clone)]
pub struct DepartmentBoundary {
    /// `None` when the configured join fields are all empty
    pub key: Option<String>,
    pub label: String,
    pub bounds: Option<Bounds>,
    pub feature: Feature,
}

impl DepartmentBoundary {
    pub fn from_feature(feature: Feature, strategy: JoinStrategy, join: &JoinConfig) -> Self {
        let props = feature.properties.as_ref();
        let key = strategy.department_key(props, join);
        let label = pick_first_prop(props, &join.department_name_fields)
            .unwrap_or_else(|| join.department_label_fallback.clone());
        let bounds = Bounds::of_feature(&feature);
        Self { key, label, bounds, feature }
    }
}

// ============================================================================
// Municipality feature
// ============================================================================

/// Municipality polygon with the attributes the viewer reads from it
#[derive(Debug, Clone)]
pub struct MunicipalityFeature {
    pub name: String,
    /// Normalized code joined against the facility table
    pub facility_code: String,
    /// Group (ETC) value, fallback value when the property is missing
    pub group: String,
    pub bounds: Option<Bounds>,
    pub feature: Feature,
}

impl MunicipalityFeature {
    pub fn from_feature(feature: Feature, join: &JoinConfig) -> Self {
        let props = feature.properties.as_ref();
        let name = pick_first_prop(props, &join.municipality_name_fields)
            .unwrap_or_else(|| join.municipality_label_fallback.clone());
        let facility_code = pick_first_prop(props, &join.municipality_facility_code_fields)
            .map(|s| normalize(&s))
            .unwrap_or_default();
        // only a missing/null property falls back; an empty string stays empty
        let group = props
            .and_then(|p| p.get(&join.group_field))
            .and_then(crate::domain::common::value_to_string)
            .unwrap_or_else(|| join.group_fallback.clone());
        let bounds = Bounds::of_feature(&feature);
        Self { name, facility_code, group, bounds, feature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use serde_json::json;

    fn feature(props: serde_json::Value) -> Feature {
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: props.as_object().cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn test_department_key_by_name_and_code() {
        let join = load_config(None).unwrap().join;
        let f = feature(json!({ "DeNombre": " Bogotá ", "DPTO": "11" }));
        let props = f.properties.as_ref();
        assert_eq!(JoinStrategy::Name.department_key(props, &join), Some("bogota".to_string()));
        assert_eq!(JoinStrategy::Code.department_key(props, &join), Some("11".to_string()));

        let unnamed = feature(json!({ "DeNombre": "   " }));
        assert_eq!(JoinStrategy::Name.department_key(unnamed.properties.as_ref(), &join), None);
    }

    #[test]
    fn test_department_label_fallback() {
        let join = load_config(None).unwrap().join;
        let d = DepartmentBoundary::from_feature(feature(json!({ "DPTO": 5 })), JoinStrategy::Name, &join);
        assert_eq!(d.key, None);
        assert_eq!(d.label, "Departamento");
        assert_eq!(d.bounds, None);
    }

    #[test]
    fn test_municipality_attributes() {
        let join = load_config(None).unwrap().join;
        let m = MunicipalityFeature::from_feature(
            feature(json!({ "MPIO_CNMBR": "Leticia", "MpCodigo": 91001, "ETC": "Amazonas" })),
            &join,
        );
        assert_eq!(m.name, "Leticia");
        assert_eq!(m.facility_code, "91001");
        assert_eq!(m.group, "Amazonas");

        let bare = MunicipalityFeature::from_feature(feature(json!({ "ETC": null })), &join);
        assert_eq!(bare.name, "Municipio");
        assert_eq!(bare.facility_code, "");
        assert_eq!(bare.group, "Sin_ETC");
    }
}
