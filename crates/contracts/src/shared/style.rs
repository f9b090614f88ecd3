use serde::Serialize;

/// Leaflet path options (`color`, `weight`, `fillColor`, `fillOpacity`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: String,
    pub weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl PathStyle {
    fn new(color: &str, weight: f64, fill_color: &str, fill_opacity: f64) -> Self {
        Self {
            color: color.to_string(),
            weight,
            fill_color: fill_color.to_string(),
            fill_opacity,
        }
    }

    pub fn department_default() -> Self {
        Self::new("#007d6e", 1.0, "#4dd0b3", 0.25)
    }

    pub fn department_dimmed() -> Self {
        Self::new("#007d6e", 1.0, "#4dd0b3", 0.06)
    }

    pub fn department_highlight() -> Self {
        Self::new("#003d38", 2.0, "#a8ead9", 0.35)
    }

    /// Municipality colored by its group
    pub fn municipality(group_color: &str) -> Self {
        Self::new(group_color, 1.0, group_color, 0.25)
    }

    /// Municipality colored by the facility serving it
    pub fn facility(facility_color: &str) -> Self {
        Self::new(facility_color, 2.0, facility_color, 0.5)
    }
}

/// How a department boundary is drawn in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepartmentTone {
    Default,
    Dimmed,
    Highlight,
}

impl DepartmentTone {
    pub fn style(&self) -> PathStyle {
        match self {
            DepartmentTone::Default => PathStyle::department_default(),
            DepartmentTone::Dimmed => PathStyle::department_dimmed(),
            DepartmentTone::Highlight => PathStyle::department_highlight(),
        }
    }
}
