pub mod file;
pub mod open_weather_map;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub enum WeatherSource {
    OpenWeatherMap(crate::connection::open_weather_map::OpenWeatherMapQuery),
    File(crate::connection::file::WeatherFile),
}

impl WeatherSource {
    pub fn retrieve_weather(
        &mut self,
        location: &crate::parse::FlightLocation,
    ) -> Result<crate::weather::WeatherReport, ConnectionError> {
        match self {
            Self::OpenWeatherMap(query) => query.retrieve_current_weather(location),
            Self::File(file) => file.read_weather_report(location),
        }
    }
}

custom_error::custom_error! {pub ConnectionError
    TooFrequent {duration:String} = "weather requests may only be sent once every {duration}",
    LocationNotFound {location:String} = "the weather provider could not find {location}",
    ApiError {message:String, url:String} = "error response from {url}; {message}",
    FailedToRead {path:String, message:String} = "failed to read weather from {path}; {message}",
}
