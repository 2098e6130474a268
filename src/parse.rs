lazy_static::lazy_static! {
    static ref DIGITS: regex::Regex = regex::Regex::new(r"[0-9]").unwrap();
}

custom_error::custom_error! {pub LocationError
    MalformedInput {input:String} = "could not parse a city, state, and country from \"{input}\"",
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightLocation {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl FlightLocation {
    // comma-separated form the provider's geocoder expects
    pub fn query(&self) -> String {
        format!("{:},{:},{:}", self.city, self.state, self.country)
    }

    // the geocoder silently mislocates names containing digits
    pub fn contains_digits(&self) -> bool {
        DIGITS.is_match(&self.city) || DIGITS.is_match(&self.state) || DIGITS.is_match(&self.country)
    }
}

impl std::fmt::Display for FlightLocation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{:}, {:}, {:}", self.city, self.state, self.country)
    }
}

pub fn parse_location(input: &str) -> Result<FlightLocation, LocationError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(LocationError::MalformedInput {
            input: input.to_string(),
        });
    }

    Ok(FlightLocation {
        city: parts[0].to_string(),
        state: parts[1].to_string(),
        country: parts[2].to_string(),
    })
}
