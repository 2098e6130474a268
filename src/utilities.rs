pub fn approx_equal(a: f64, b: f64, decimal_precision: u8) -> bool {
    let p = 10f64.powi(-(decimal_precision as i32));
    (a - b).abs() < p
}

// OpenWeatherMap reports instants as bare UNIX timestamps
pub mod utc_timestamp {
    use chrono::TimeZone;
    use serde::Deserialize;

    pub fn serialize<S>(
        date: &chrono::DateTime<chrono::Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(date.timestamp())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<chrono::DateTime<chrono::Utc>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        match chrono::Utc.timestamp_opt(value, 0) {
            chrono::LocalResult::Single(date) => Ok(date),
            _ => Err(serde::de::Error::custom("timestamp out of range")),
        }
    }
}

// the provider writes its `cod` status as a number on success and a string on failure
pub mod int_or_string {
    use serde::Deserialize;
    use serde_json::Value;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if let Some(value) = value.as_str() {
            value.parse::<i64>().map_err(serde::de::Error::custom)
        } else {
            value
                .as_i64()
                .ok_or_else(|| serde::de::Error::custom("expected an integer or a numeric string"))
        }
    }
}

pub fn duration_string(duration: &chrono::Duration) -> String {
    let mut parts = vec![];

    let weeks = duration.num_weeks().abs();
    let days = duration.num_days().abs() % 7;
    let hours = duration.num_hours().abs() % 24;
    let minutes = duration.num_minutes().abs() % 60;
    let seconds = duration.num_seconds().abs() % 60;

    if weeks > 0 {
        parts.push(format!("{:}w", weeks));
    }

    if days > 0 {
        parts.push(format!("{:}d", days));
    }

    if hours > 0 {
        parts.push(format!("{:}h", hours));
    }

    if minutes > 0 {
        parts.push(format!("{:}m", minutes));
    }

    if seconds > 0 {
        parts.push(format!("{:}s", seconds));
    }

    if duration < &chrono::Duration::zero() {
        parts.push("ago".to_string());
    }

    parts.join(" ")
}
