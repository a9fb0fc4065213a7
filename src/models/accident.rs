//! Accident description model

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Accident description as sent by the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AccidentFeatures {
    #[validate(length(min = 1))]
    pub accident_date: String,
    #[validate(length(min = 1))]
    pub day_of_week: String,
    #[validate(length(min = 1))]
    pub junction_control: String,
    #[validate(length(min = 1))]
    pub junction_detail: String,
    #[validate(length(min = 1))]
    pub light_conditions: String,
    #[validate(range(min = 0, max = 200))]
    #[serde(deserialize_with = "lenient_int")]
    pub speed_limit: i64,
    #[validate(length(min = 1))]
    pub road_type: String,
    #[validate(range(min = 0, max = 1000))]
    #[serde(deserialize_with = "lenient_int")]
    pub number_of_casualties: i64,
    #[validate(length(min = 1))]
    pub road_surface_conditions: String,
    #[validate(length(min = 1))]
    pub urban_or_rural_area: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(length(min = 1))]
    pub weather_conditions: String,
}

/// Integer that may arrive as `30`, `30.0` or `"30"` (form-encoded clients).
/// Fractional values are rejected.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let whole = |f: f64| (f.is_finite() && f.fract() == 0.0).then_some(f as i64);

    let parsed = match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Some(n),
        Raw::Float(f) => whole(f),
        Raw::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
    };

    parsed.ok_or_else(|| de::Error::custom("expected a whole number"))
}

impl AccidentFeatures {
    /// Fixed payload used by `GET /api/test-prediction`
    pub fn sample() -> Self {
        Self {
            accident_date: "3/2/2022".to_string(),
            day_of_week: "Tuesday".to_string(),
            junction_control: "Give way or uncontrolled".to_string(),
            junction_detail: "T or staggered junction".to_string(),
            light_conditions: "Daylight".to_string(),
            speed_limit: 30,
            road_type: "Single carriageway".to_string(),
            number_of_casualties: 1,
            road_surface_conditions: "Dry".to_string(),
            urban_or_rural_area: "Urban".to_string(),
            time: "14:55".to_string(),
            weather_conditions: "Fine no high winds".to_string(),
        }
    }
}

/// Accident features keyed by the IA service's column names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IaFeatures {
    #[serde(rename = "Accident_Date")]
    pub accident_date: String,
    #[serde(rename = "Day_of_Week")]
    pub day_of_week: String,
    #[serde(rename = "Junction_Control")]
    pub junction_control: String,
    #[serde(rename = "Junction_Detail")]
    pub junction_detail: String,
    #[serde(rename = "Light_Conditions")]
    pub light_conditions: String,
    #[serde(rename = "Speed_limit")]
    pub speed_limit: i64,
    #[serde(rename = "Road_Type")]
    pub road_type: String,
    #[serde(rename = "Number_of_Casualties")]
    pub number_of_casualties: i64,
    #[serde(rename = "Road_Surface_Conditions")]
    pub road_surface_conditions: String,
    #[serde(rename = "Urban_or_Rural_Area")]
    pub urban_or_rural_area: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Weather_Conditions")]
    pub weather_conditions: String,
}

impl From<AccidentFeatures> for IaFeatures {
    fn from(f: AccidentFeatures) -> Self {
        Self {
            accident_date: f.accident_date,
            day_of_week: f.day_of_week,
            junction_control: f.junction_control,
            junction_detail: f.junction_detail,
            light_conditions: f.light_conditions,
            speed_limit: f.speed_limit,
            road_type: f.road_type,
            number_of_casualties: f.number_of_casualties,
            road_surface_conditions: f.road_surface_conditions,
            urban_or_rural_area: f.urban_or_rural_area,
            time: f.time,
            weather_conditions: f.weather_conditions,
        }
    }
}
