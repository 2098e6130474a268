mod app;
mod configuration;
mod connection;
mod evaluate;
mod parse;
mod report;
mod utilities;
mod weather;

use clap::Parser;

lazy_static::lazy_static! {
    pub static ref DATETIME_FORMAT: String = "%Y-%m-%d %H:%M:%S".to_string();
    pub static ref LOG_LEVEL: log::Level = log::Level::Info;
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    // OpenWeatherMap API key
    #[arg(long)]
    api_key: Option<String>,

    // read a previously-saved provider payload instead of querying the API
    #[arg(long)]
    weather_file: Option<std::path::PathBuf>,

    // pilot preferences file
    #[arg(long, default_value = "droneweatherpreferences.dat")]
    preferences: std::path::PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = Cli::parse();

    let source = match arguments.weather_file {
        Some(path) => {
            crate::connection::WeatherSource::File(crate::connection::file::WeatherFile::new(path)?)
        }
        None => match arguments.api_key {
            Some(api_key) => crate::connection::WeatherSource::OpenWeatherMap(
                crate::connection::open_weather_map::OpenWeatherMapQuery::new(api_key, None),
            ),
            None => {
                return Err(Box::from(
                    "either an OpenWeatherMap API key (`--api-key`) or a saved payload (`--weather-file`) is required",
                ));
            }
        },
    };

    let mut app = app::DroneWeatherApp::new(source, arguments.preferences, *LOG_LEVEL);
    app.run()?;
    Ok(())
}
