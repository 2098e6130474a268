// https://openweathermap.org/weather-conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    #[serde(other)]
    Unknown,
}

// aviation hazards; flight is never authorized in these conditions
const HAZARDOUS_CONDITIONS: [ConditionCategory; 7] = [
    ConditionCategory::Smoke,
    ConditionCategory::Dust,
    ConditionCategory::Sand,
    ConditionCategory::Ash,
    ConditionCategory::Squall,
    ConditionCategory::Tornado,
    ConditionCategory::Thunderstorm,
];

// conditions gated by the rain rating
const PRECIPITATION_CONDITIONS: [ConditionCategory; 3] = [
    ConditionCategory::Rain,
    ConditionCategory::Thunderstorm,
    ConditionCategory::Mist,
];

// conditions implying cloud cover over the flight area
const CLOUD_INDICATING_CONDITIONS: [ConditionCategory; 7] = [
    ConditionCategory::Clouds,
    ConditionCategory::Thunderstorm,
    ConditionCategory::Drizzle,
    ConditionCategory::Rain,
    ConditionCategory::Snow,
    ConditionCategory::Fog,
    ConditionCategory::Mist,
];

impl ConditionCategory {
    pub fn is_hazardous(&self) -> bool {
        HAZARDOUS_CONDITIONS.contains(self)
    }

    pub fn is_precipitation(&self) -> bool {
        PRECIPITATION_CONDITIONS.contains(self)
    }

    pub fn indicates_clouds(&self) -> bool {
        CLOUD_INDICATING_CONDITIONS.contains(self)
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Unknown => "Unknown",
        };
        write!(formatter, "{:}", name)
    }
}

// normalized inputs to the flight safety evaluation; wind speed arrives
// already ceiling-rounded and all instants share the provider's clock
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub category: ConditionCategory,
    pub wind_speed: f64,
    pub has_cloud_cover: bool,
    pub current_time: chrono::DateTime<chrono::Utc>,
    pub sunrise: chrono::DateTime<chrono::Utc>,
    pub sunset: chrono::DateTime<chrono::Utc>,
}

// the full display record around a snapshot; the gust figure is advisory
// and never consulted by the evaluator
#[derive(Clone, Debug)]
pub struct WeatherReport {
    pub city: String,
    pub state: String,
    pub country: String,
    pub longitude: f64,
    pub latitude: f64,
    pub ground_level_pressure: Option<f64>,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub sea_level_pressure: f64,
    pub visibility: Option<f64>,
    pub cloud_percentage: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_gust: Option<f64>,
    pub snapshot: WeatherSnapshot,
}
