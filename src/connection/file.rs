// replays a saved provider payload, so a flight check can run without
// network access
pub struct WeatherFile {
    pub path: std::path::PathBuf,
}

impl WeatherFile {
    pub fn new(path: std::path::PathBuf) -> Result<Self, crate::connection::ConnectionError> {
        if path.exists() {
            Ok(Self { path })
        } else {
            Err(crate::connection::ConnectionError::FailedToRead {
                path: path.display().to_string(),
                message: "path does not exist".to_string(),
            })
        }
    }

    pub fn read_weather_report(
        &self,
        location: &crate::parse::FlightLocation,
    ) -> Result<crate::weather::WeatherReport, crate::connection::ConnectionError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|error| {
            crate::connection::ConnectionError::FailedToRead {
                path: self.path.display().to_string(),
                message: error.to_string(),
            }
        })?;

        let payload: crate::connection::open_weather_map::ProviderResponse =
            serde_json::from_str(&contents).map_err(|error| {
                crate::connection::ConnectionError::FailedToRead {
                    path: self.path.display().to_string(),
                    message: error.to_string(),
                }
            })?;

        match payload {
            crate::connection::open_weather_map::ProviderResponse::Observation(observation) => {
                Ok(observation.to_weather_report(&location.state))
            }
            crate::connection::open_weather_map::ProviderResponse::Status(status) => {
                Err(status.to_connection_error(location, &self.path.display().to_string()))
            }
        }
    }
}
