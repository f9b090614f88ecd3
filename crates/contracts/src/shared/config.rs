use serde::Deserialize;

use crate::domain::a001_facility_network::FacilityCategory;

#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    pub sources: SourcesConfig,
    pub join: JoinConfig,
    pub facilities: FacilityColumns,
    pub view: ViewConfig,
    pub palette: PaletteConfig,
}

/// URLs of the three static resources fetched at startup
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    pub departments_url: String,
    pub municipalities_url: String,
    pub facilities_url: String,
}

/// Property names used to join departments with municipalities.
///
/// Every `*_fields` list is an ordered candidate list: the first property
/// that is present and non-empty wins.
#[derive(Debug, Deserialize, Clone)]
pub struct JoinConfig {
    /// `true` joins by administrative code, `false` by department name
    pub use_code_link: bool,
    pub department_name_fields: Vec<String>,
    pub department_code_fields: Vec<String>,
    pub municipality_department_name_fields: Vec<String>,
    pub municipality_department_code_fields: Vec<String>,
    /// Municipality code matched against the facility table
    pub municipality_facility_code_fields: Vec<String>,
    pub municipality_name_fields: Vec<String>,
    /// Group (ETC) property used for sub-filtering inside a department
    pub group_field: String,
    pub group_fallback: String,
    pub department_label_fallback: String,
    pub municipality_label_fallback: String,
}

/// Column names of the facility CSV
#[derive(Debug, Deserialize, Clone)]
pub struct FacilityColumns {
    pub code_column: String,
    pub emo_column: String,
    pub ecis_column: String,
    pub pcl_column: String,
}

impl FacilityColumns {
    pub fn column(&self, category: FacilityCategory) -> &str {
        match category {
            FacilityCategory::Emo => &self.emo_column,
            FacilityCategory::Ecis => &self.ecis_column,
            FacilityCategory::Pcl => &self.pcl_column,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Initial map center as `[lat, lng]`
    pub initial_center: [f64; 2],
    pub initial_zoom: f64,
    pub max_zoom: f64,
    /// Zoom cap when flying to a selected department
    pub max_zoom_on_focus: f64,
    /// Zoom cap when flying to a single clicked municipality
    pub max_zoom_on_feature: f64,
    pub overview_padding: f64,
    pub focus_padding: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    pub group: Vec<String>,
    pub facility: Vec<String>,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r##"
[sources]
departments_url = "Departamentos.geojson"
municipalities_url = "Municipios.geojson"
facilities_url = "datos_ips.csv"

[join]
use_code_link = false
department_name_fields = ["DeNombre"]
department_code_fields = ["COD_DEP", "DPTO_CCDGO", "DPTO"]
municipality_department_name_fields = ["Depto"]
municipality_department_code_fields = ["COD_DEP", "DPTO_CCDGO", "DPTO"]
municipality_facility_code_fields = ["MpCodigo"]
municipality_name_fields = ["MpNombre", "MPIO_CNMBR", "NOMBRE"]
group_field = "ETC"
group_fallback = "Sin_ETC"
department_label_fallback = "Departamento"
municipality_label_fallback = "Municipio"

[facilities]
code_column = "MpCodigo"
emo_column = "EMO"
ecis_column = "ECIS"
pcl_column = "PCL"

[view]
initial_center = [4.6, -74.1]
initial_zoom = 5.0
max_zoom = 18.0
max_zoom_on_focus = 10.0
max_zoom_on_feature = 11.0
overview_padding = 20.0
focus_padding = 25.0
tile_url = "https://cartodb-basemaps-a.global.ssl.fastly.net/light_nolabels/{z}/{x}/{y}{r}.png"
tile_attribution = '&copy; <a href="https://www.openstreetmap.org/">OSM</a> &copy; <a href="https://carto.com/">CARTO</a>'

[palette]
group = [
    "#ff7f0e", "#1f77b4", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
    "#e377c2", "#7f7f7f", "#bcbd22", "#17becf", "#393b79", "#637939",
    "#8c6d31", "#843c39", "#7b4173",
]
facility = [
    "#ff7f0e", "#1f77b4", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
    "#e377c2", "#7f7f7f", "#bcbd22", "#17becf", "#393b79", "#637939",
    "#8c6d31", "#843c39", "#7b4173",
]
"##;

/// Load the viewer configuration.
///
/// An override document replaces the embedded default entirely; without one
/// the embedded default is used.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<ViewerConfig> {
    let text = match override_toml {
        Some(text) => {
            log::info!("Loading viewer config from override document");
            text
        }
        None => DEFAULT_CONFIG,
    };
    let config: ViewerConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

impl ViewerConfig {
    fn validate(&self) -> anyhow::Result<()> {
        if self.palette.group.is_empty() || self.palette.facility.is_empty() {
            anyhow::bail!("palette lists must not be empty");
        }
        let join = &self.join;
        let (dept_fields, muni_fields) = if join.use_code_link {
            (&join.department_code_fields, &join.municipality_department_code_fields)
        } else {
            (&join.department_name_fields, &join.municipality_department_name_fields)
        };
        if dept_fields.is_empty() || muni_fields.is_empty() {
            anyhow::bail!(
                "join candidate fields must not be empty (use_code_link = {})",
                join.use_code_link
            );
        }
        if self.facilities.code_column.trim().is_empty() {
            anyhow::bail!("facilities.code_column must not be empty");
        }
        Ok(())
    }
}
