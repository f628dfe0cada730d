use serde::{Deserialize, Serialize};

/// Demographic figures for one requested state, joined across both upstream APIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRecord {
    pub name: String,
    pub fips: String,
    pub population: u64,
    pub households: u64,
    pub median_income: f64,
}

impl StateRecord {
    pub fn from_row(name: impl Into<String>, fips: impl Into<String>, row: &DemographicRow) -> Self {
        Self {
            name: name.into(),
            fips: fips.into(),
            population: row.population,
            households: row.households,
            median_income: row.median_income,
        }
    }
}

/// Response from the state geography lookup
#[derive(Debug, Deserialize)]
pub struct GeographyResponse {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "responseTime", default)]
    pub response_time: i64,
    #[serde(default)]
    pub message: Vec<serde_json::Value>,
    #[serde(rename = "Results", default)]
    pub results: GeographyResults,
}

impl GeographyResponse {
    /// The upstream lists candidates best match first.
    pub fn first_match(&self) -> Option<&GeographyMatch> {
        self.results.state.first()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GeographyResults {
    #[serde(default)]
    pub state: Vec<GeographyMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographyMatch {
    #[serde(default)]
    pub geography_type: String,
    #[serde(default)]
    pub name: String,
    pub fips: String,
    #[serde(default)]
    pub state_code: String,
}

/// Response from the demographic lookup
#[derive(Debug, Deserialize)]
pub struct DemographicResponse {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "responseTime", default)]
    pub response_time: i64,
    #[serde(default)]
    pub message: Vec<serde_json::Value>,
    #[serde(rename = "Results", default)]
    pub results: Vec<DemographicRow>,
}

impl DemographicResponse {
    pub fn first_row(&self) -> Option<&DemographicRow> {
        self.results.first()
    }
}

/// One geography's demographic row. Only population, households and median
/// income are required; the rest are kept for callers that want them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicRow {
    #[serde(default)]
    pub geography_id: Option<String>,
    #[serde(default)]
    pub geography_name: Option<String>,
    #[serde(default)]
    pub land_area: Option<f64>,
    pub population: u64,
    pub households: u64,
    pub median_income: f64,
    #[serde(default)]
    pub race_white: Option<f64>,
    #[serde(default)]
    pub race_black: Option<f64>,
    #[serde(default)]
    pub race_hispanic: Option<f64>,
    #[serde(default)]
    pub race_asian: Option<f64>,
    #[serde(default)]
    pub race_native_american: Option<f64>,
    #[serde(default)]
    pub income_below_poverty: Option<f64>,
    #[serde(default)]
    pub income_less_than25: Option<f64>,
    #[serde(rename = "incomeBetween25to50", default)]
    pub income_between_25_to_50: Option<f64>,
    #[serde(rename = "incomeBetween50to100", default)]
    pub income_between_50_to_100: Option<f64>,
    #[serde(rename = "incomeBetween100to200", default)]
    pub income_between_100_to_200: Option<f64>,
    #[serde(rename = "incomeGreater200", default)]
    pub income_greater_200: Option<f64>,
    #[serde(default)]
    pub education_high_school_graduate: Option<f64>,
    #[serde(default)]
    pub education_bachelor_or_greater: Option<f64>,
    #[serde(rename = "ageUnder5", default)]
    pub age_under_5: Option<f64>,
    #[serde(rename = "ageBetween5to19", default)]
    pub age_between_5_to_19: Option<f64>,
    #[serde(rename = "ageBetween20to34", default)]
    pub age_between_20_to_34: Option<f64>,
    #[serde(rename = "ageBetween35to59", default)]
    pub age_between_35_to_59: Option<f64>,
    #[serde(rename = "ageGreaterThan60", default)]
    pub age_greater_than_60: Option<f64>,
    #[serde(default)]
    pub my_area_indicator: Option<bool>,
}
