custom_error::custom_error! {pub ProfileError
    NotFound {path:String} = "no preferences file at {path}",
    Corrupt {message:String} = "preferences are unreadable; {message}",
}

// pilot and drone capability record; immutable once constructed for a
// given evaluation
#[derive(Clone, Debug, PartialEq)]
pub struct PreferenceProfile {
    pub night_certified: bool,
    pub rain_certified: bool,
    pub max_wind_speed: f64,
    pub cloud_blos_certified: bool,
}

impl PreferenceProfile {
    // four newline-delimited scalar fields in fixed order
    pub fn from_file_contents(contents: &str) -> Result<Self, ProfileError> {
        let mut lines = contents.lines();

        let night_certified = parse_flag(lines.next(), "night rating")?;
        let rain_certified = parse_flag(lines.next(), "rain rating")?;
        let max_wind_speed = parse_wind_speed(lines.next())?;
        let cloud_blos_certified = parse_flag(lines.next(), "cloud rating")?;

        Ok(Self {
            night_certified,
            rain_certified,
            max_wind_speed,
            cloud_blos_certified,
        })
    }

    pub fn to_file_contents(&self) -> String {
        format!(
            "{:}\n{:}\n{:}\n{:}\n",
            flag(self.night_certified),
            flag(self.rain_certified),
            self.max_wind_speed,
            flag(self.cloud_blos_certified),
        )
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ProfileError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_file_contents(&contents),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(ProfileError::NotFound {
                    path: path.display().to_string(),
                })
            }
            Err(error) => Err(ProfileError::Corrupt {
                message: error.to_string(),
            }),
        }
    }

    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.to_file_contents())
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn parse_flag(line: Option<&str>, field: &str) -> Result<bool, ProfileError> {
    match line.map(str::trim) {
        Some("True") => Ok(true),
        Some("False") => Ok(false),
        Some(other) => Err(ProfileError::Corrupt {
            message: format!("expected True or False for the {:}, found {:?}", field, other),
        }),
        None => Err(ProfileError::Corrupt {
            message: format!("missing the {:}", field),
        }),
    }
}

fn parse_wind_speed(line: Option<&str>) -> Result<f64, ProfileError> {
    let line = line.ok_or_else(|| ProfileError::Corrupt {
        message: "missing the wind tolerance".to_string(),
    })?;

    match line.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(value),
        Ok(value) => Err(ProfileError::Corrupt {
            message: format!("wind tolerance may not be negative, found {:}", value),
        }),
        Err(error) => Err(ProfileError::Corrupt {
            message: format!("wind tolerance is not a number; {:}", error),
        }),
    }
}
