lazy_static::lazy_static! {
    // free-tier etiquette; the current-weather endpoint only refreshes on
    // the order of minutes anyway
    static ref MINIMUM_ACCESS_INTERVAL: chrono::Duration = chrono::Duration::seconds(10);
}

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub struct OpenWeatherMapQuery {
    pub api_key: String,
    pub api_url: String,
    last_access: Option<chrono::DateTime<chrono::Local>>,
}

impl OpenWeatherMapQuery {
    pub fn new(api_key: String, api_url: Option<String>) -> Self {
        Self {
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            last_access: None,
        }
    }

    fn parameters(&self, location: &crate::parse::FlightLocation) -> Vec<(&str, String)> {
        vec![
            ("q", location.query()),
            ("appid", self.api_key.to_owned()),
            ("units", "imperial".to_string()),
        ]
    }

    pub fn retrieve_current_weather(
        &mut self,
        location: &crate::parse::FlightLocation,
    ) -> Result<crate::weather::WeatherReport, crate::connection::ConnectionError> {
        let now = chrono::Local::now();
        if let Some(last_access_time) = self.last_access {
            if now - last_access_time < *MINIMUM_ACCESS_INTERVAL {
                return Err(crate::connection::ConnectionError::TooFrequent {
                    duration: crate::utilities::duration_string(&MINIMUM_ACCESS_INTERVAL),
                });
            }
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(crate::connection::USER_AGENT.to_owned())
            .timeout(Some(std::time::Duration::from_secs(10)))
            .build()
            .unwrap();

        let response = client
            .get(&self.api_url)
            .query(&self.parameters(location))
            .send()
            .map_err(|error| crate::connection::ConnectionError::ApiError {
                message: error.to_string(),
                url: self.api_url.to_owned(),
            })?;
        let url = response.url().to_string();

        self.last_access = Some(now);

        match response.status() {
            reqwest::StatusCode::OK => {
                // deserialize JSON into struct
                let payload: ProviderResponse = match response.json() {
                    Ok(object) => object,
                    Err(error) => {
                        return Err(crate::connection::ConnectionError::ApiError {
                            message: error.to_string(),
                            url,
                        })
                    }
                };
                match payload {
                    ProviderResponse::Observation(observation) => {
                        Ok(observation.to_weather_report(&location.state))
                    }
                    ProviderResponse::Status(status) => {
                        Err(status.to_connection_error(location, &url))
                    }
                }
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(crate::connection::ConnectionError::LocationNotFound {
                    location: location.to_string(),
                })
            }
            other => Err(crate::connection::ConnectionError::ApiError {
                message: other.to_string(),
                url,
            }),
        }
    }
}

// https://openweathermap.org/current
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub enum ProviderResponse {
    Observation(Box<WeatherObservation>),
    Status(ProviderStatus),
}

#[derive(serde::Deserialize)]
pub struct ProviderStatus {
    #[serde(with = "crate::utilities::int_or_string")]
    pub cod: i64,
    pub message: String,
}

impl ProviderStatus {
    pub fn to_connection_error(
        &self,
        location: &crate::parse::FlightLocation,
        url: &str,
    ) -> crate::connection::ConnectionError {
        if self.cod == 404 {
            crate::connection::ConnectionError::LocationNotFound {
                location: location.to_string(),
            }
        } else {
            crate::connection::ConnectionError::ApiError {
                message: self.message.to_owned(),
                url: url.to_string(),
            }
        }
    }
}

#[derive(serde::Deserialize)]
pub struct WeatherObservation {
    pub coord: Coordinates,
    pub weather: Vec<ObservedCondition>,
    pub main: AtmosphereReadings,
    pub visibility: Option<f64>,
    pub wind: WindReadings,
    pub clouds: Option<CloudReadings>,
    #[serde(with = "crate::utilities::utc_timestamp")]
    pub dt: chrono::DateTime<chrono::Utc>,
    pub sys: DayCycle,
    pub name: String,
    #[serde(with = "crate::utilities::int_or_string")]
    pub cod: i64,
}

#[derive(serde::Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

#[derive(serde::Deserialize)]
pub struct ObservedCondition {
    pub main: crate::weather::ConditionCategory,
    pub description: String,
}

#[derive(serde::Deserialize)]
pub struct AtmosphereReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: u8,
    pub sea_level: Option<f64>,
    pub grnd_level: Option<f64>,
}

#[derive(serde::Deserialize)]
pub struct WindReadings {
    pub speed: f64,
    pub deg: Option<f64>,
    pub gust: Option<f64>,
}

#[derive(serde::Deserialize)]
pub struct CloudReadings {
    pub all: f64,
}

#[derive(serde::Deserialize)]
pub struct DayCycle {
    pub country: Option<String>,
    #[serde(with = "crate::utilities::utc_timestamp")]
    pub sunrise: chrono::DateTime<chrono::Utc>,
    #[serde(with = "crate::utilities::utc_timestamp")]
    pub sunset: chrono::DateTime<chrono::Utc>,
}

impl WeatherObservation {
    // normalization boundary: wind and gust are rounded up here for a
    // conservative safety margin, before the evaluator ever sees them
    pub fn to_weather_report(&self, state: &str) -> crate::weather::WeatherReport {
        let condition = self.weather.first();
        let category = match condition {
            Some(condition) => condition.main,
            None => crate::weather::ConditionCategory::Unknown,
        };

        let snapshot = crate::weather::WeatherSnapshot {
            category,
            wind_speed: self.wind.speed.ceil(),
            has_cloud_cover: category.indicates_clouds(),
            current_time: self.dt,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        };

        crate::weather::WeatherReport {
            city: self.name.to_owned(),
            state: state.to_owned(),
            country: self.sys.country.to_owned().unwrap_or_default(),
            longitude: self.coord.lon,
            latitude: self.coord.lat,
            ground_level_pressure: self.main.grnd_level,
            description: condition
                .map(|condition| condition.description.to_owned())
                .unwrap_or_default(),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            sea_level_pressure: self.main.sea_level.unwrap_or(self.main.pressure),
            visibility: self.visibility.map(|meters| meters / 1609.344),
            cloud_percentage: self.clouds.as_ref().map(|clouds| clouds.all),
            wind_direction: self.wind.deg,
            wind_gust: self.wind.gust.map(f64::ceil),
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBSERVATION: &str = r#"
    {
      "coord": { "lon": -84.3346, "lat": 33.9462 },
      "weather": [ { "id": 701, "main": "Mist", "description": "mist", "icon": "50d" } ],
      "base": "stations",
      "main": { "temp": 72.86, "feels_like": 74.21, "temp_min": 72.16, "temp_max": 74.21, "pressure": 1020, "humidity": 93, "sea_level": 1020, "grnd_level": 983 },
      "visibility": 10000,
      "wind": { "speed": 4.09, "deg": 250, "gust": 5.01 },
      "clouds": { "all": 100 },
      "dt": 1722257216,
      "sys": { "type": 2, "id": 2096256, "country": "US", "sunrise": 1722250020, "sunset": 1722300023 },
      "timezone": -14400,
      "id": 4192375,
      "name": "Dunwoody",
      "cod": 200
    }
    "#;

    fn test_location() -> crate::parse::FlightLocation {
        crate::parse::parse_location("dunwoody, ga, us").unwrap()
    }

    #[test]
    fn test_observation() {
        let payload: ProviderResponse = serde_json::from_str(OBSERVATION).unwrap();

        match payload {
            ProviderResponse::Observation(observation) => {
                assert_eq!(observation.name, "Dunwoody");
                assert_eq!(observation.cod, 200);
                assert_eq!(observation.sys.country.as_deref(), Some("US"));
                assert_eq!(observation.dt.timestamp(), 1722257216);
                assert!(crate::utilities::approx_equal(
                    observation.wind.speed,
                    4.09,
                    4
                ));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_normalization() {
        let payload: ProviderResponse = serde_json::from_str(OBSERVATION).unwrap();
        let observation = match payload {
            ProviderResponse::Observation(observation) => observation,
            _ => panic!(),
        };

        let report = observation.to_weather_report("ga");

        assert_eq!(
            report.snapshot.category,
            crate::weather::ConditionCategory::Mist
        );
        assert!(report.snapshot.has_cloud_cover);

        // wind and gust round up, never down
        assert!(crate::utilities::approx_equal(
            report.snapshot.wind_speed,
            5.0,
            4
        ));
        assert!(crate::utilities::approx_equal(
            report.wind_gust.unwrap(),
            6.0,
            4
        ));

        assert_eq!(report.snapshot.sunrise.timestamp(), 1722250020);
        assert_eq!(report.snapshot.sunset.timestamp(), 1722300023);
        assert_eq!(report.city, "Dunwoody");
        assert_eq!(report.state, "ga");
        assert_eq!(report.humidity, 93);
        assert!(crate::utilities::approx_equal(
            report.visibility.unwrap(),
            6.2137,
            3
        ));
    }

    #[test]
    fn test_missing_gust() {
        let data = r#"
        {
          "coord": { "lon": -0.1257, "lat": 51.5085 },
          "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" } ],
          "main": { "temp": 68.0, "feels_like": 67.2, "pressure": 1012, "humidity": 60 },
          "wind": { "speed": 8.0, "deg": 180 },
          "dt": 1722257216,
          "sys": { "country": "GB", "sunrise": 1722250020, "sunset": 1722300023 },
          "name": "London",
          "cod": 200
        }
        "#;
        let payload: ProviderResponse = serde_json::from_str(data).unwrap();

        match payload {
            ProviderResponse::Observation(observation) => {
                let report = observation.to_weather_report("gb");
                assert!(report.wind_gust.is_none());
                assert!(report.cloud_percentage.is_none());
                assert!(report.visibility.is_none());
                assert!(!report.snapshot.has_cloud_cover);
                assert!(crate::utilities::approx_equal(
                    report.sea_level_pressure,
                    1012.0,
                    4
                ));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_not_found_status() {
        let data = r#"{ "cod": "404", "message": "city not found" }"#;
        let payload: ProviderResponse = serde_json::from_str(data).unwrap();

        match payload {
            ProviderResponse::Status(status) => {
                assert_eq!(status.cod, 404);
                let error = status.to_connection_error(&test_location(), DEFAULT_API_URL);
                match error {
                    crate::connection::ConnectionError::LocationNotFound { location } => {
                        assert_eq!(location, "dunwoody, ga, us");
                    }
                    _ => panic!(),
                }
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_numeric_status() {
        let data = r#"{ "cod": 401, "message": "Invalid API key" }"#;
        let payload: ProviderResponse = serde_json::from_str(data).unwrap();

        match payload {
            ProviderResponse::Status(status) => {
                let error = status.to_connection_error(&test_location(), DEFAULT_API_URL);
                match error {
                    crate::connection::ConnectionError::ApiError { message, .. } => {
                        assert_eq!(message, "Invalid API key");
                    }
                    _ => panic!(),
                }
            }
            _ => panic!(),
        }
    }

    #[test]
    #[ignore]
    fn test_api() {
        if let Ok(api_key) = std::env::var("OPENWEATHERMAP_API_KEY") {
            let mut connection = OpenWeatherMapQuery::new(api_key, None);
            let report = connection
                .retrieve_current_weather(&test_location())
                .unwrap();

            assert!(report.snapshot.wind_speed >= 0.0);
        } else {
            panic!("OpenWeatherMap credentials not set in environment variable");
        }
    }

    #[test]
    #[ignore]
    fn test_api_wrong_key() {
        let api_key = String::from("123456abcdefghijklmno");

        let mut connection = OpenWeatherMapQuery::new(api_key, None);
        assert!(connection.retrieve_current_weather(&test_location()).is_err());
    }
}
