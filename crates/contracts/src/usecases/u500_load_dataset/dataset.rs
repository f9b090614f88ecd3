use geojson::{Feature, GeoJson};

use crate::domain::a001_facility_network::FacilityIndex;
use crate::domain::a002_boundary::BoundaryIndex;
use crate::shared::config::ViewerConfig;
use crate::shared::error::LoadError;

/// Everything loaded at startup; read-only afterwards
#[derive(Debug, Clone)]
pub struct Dataset {
    pub boundaries: BoundaryIndex,
    pub facilities: FacilityIndex,
}

impl Dataset {
    /// Build both indexes from the three fetched documents.
    ///
    /// Invalid GeoJSON fails the whole load. The facility table never fails:
    /// unreadable rows are dropped.
    pub fn from_sources(
        departments_geojson: &str,
        municipalities_geojson: &str,
        facilities_csv: &str,
        config: &ViewerConfig,
    ) -> Result<Self, LoadError> {
        let departments = parse_features(departments_geojson, "departments")?;
        let municipalities = parse_features(municipalities_geojson, "municipalities")?;

        let boundaries = BoundaryIndex::build(departments, municipalities, &config.join);
        let facilities = FacilityIndex::from_csv(facilities_csv, &config.facilities);

        log::info!(
            "Dataset loaded: {} departments, {} facility records",
            boundaries.departments().len(),
            facilities.len()
        );

        Ok(Self { boundaries, facilities })
    }
}

/// Features of a GeoJSON document.
///
/// A bare `Feature` counts as a one-element collection; a bare geometry has
/// no properties to join on and yields nothing.
pub fn parse_features(text: &str, source_name: &'static str) -> Result<Vec<Feature>, LoadError> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|error| LoadError::GeoJson { source_name, error })?;
    Ok(match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => Vec::new(),
    })
}
