// winds at or below this are reported as calm
const CALM_WIND_THRESHOLD: f64 = 3.0;

const LINE_OF_SIGHT_NOTICE: &str = "NOTICE: The weather provider cannot report\n\
    the altitude of any cloud layer. Please ensure\n\
    you will have a visual line of sight with the\n\
    drone before starting flight operations.";

pub fn weather_report(report: &crate::weather::WeatherReport) -> String {
    let mut lines = vec![
        "========== Weather Report ==========".to_string(),
        format!(
            "Weather found for {:}, {:}, {:}",
            report.city,
            report.state.to_uppercase(),
            report.country,
        ),
        format!(
            "Coordinates: {:}°, {:}°",
            report.longitude, report.latitude,
        ),
    ];

    if let Some(ground_level_pressure) = report.ground_level_pressure {
        lines.push(format!(
            "Ground level pressure: {:.0} hPa",
            ground_level_pressure
        ));
    }

    lines.push(format!(
        "Weather: {:} ({:})",
        report.snapshot.category, report.description
    ));
    lines.push(format!("Temperature: {:.1}°F", report.temperature));
    lines.push(format!("Feels like {:.1}°F", report.feels_like));

    if let Some(visibility) = report.visibility {
        lines.push(format!("Visibility: {:.1} miles", visibility));
    }

    if report.snapshot.has_cloud_cover {
        if let Some(cloud_percentage) = report.cloud_percentage {
            lines.push(format!(
                "Clouds are covering {:.0}% of the sky",
                cloud_percentage
            ));
        }
    }

    lines.push(format!("Humidity: {:}%", report.humidity));
    lines.push(format!(
        "Sea level pressure: {:.0} hPa",
        report.sea_level_pressure
    ));

    if report.snapshot.wind_speed <= CALM_WIND_THRESHOLD {
        lines.push("Winds are calm (less than 3 mph)".to_string());
    } else {
        let mut winds = format!("Winds: {:.0} mph", report.snapshot.wind_speed);
        if let Some(wind_direction) = report.wind_direction {
            winds += &format!(" from {:.0}°", wind_direction);
        }
        if let Some(wind_gust) = report.wind_gust {
            winds += &format!(", gusting {:.0} mph", wind_gust);
        }
        lines.push(winds);
    }

    lines.join("\n")
}

pub fn recommendation(verdict: &crate::evaluate::Verdict, has_cloud_cover: bool) -> String {
    let mut lines = vec![
        "========== Recommendation ==========".to_string(),
        "By the information provided you are".to_string(),
    ];

    if verdict.is_safe {
        lines.push("SAFE to fly!".to_string());
        if verdict.reason == crate::evaluate::DecisionReason::CloudsIndicated {
            lines.push(String::new());
            lines.push(reason_message(&verdict.reason));
        }
    } else {
        lines.push("NOT SAFE to fly.".to_string());
        lines.push(String::new());
        lines.push(format!("Reason: {:}", reason_message(&verdict.reason)));
    }

    if has_cloud_cover {
        lines.push(String::new());
        lines.push(LINE_OF_SIGHT_NOTICE.to_string());
    }

    lines.join("\n")
}

pub fn reason_message(reason: &crate::evaluate::DecisionReason) -> String {
    match reason {
        crate::evaluate::DecisionReason::Authorized => "Authorized.".to_string(),
        crate::evaluate::DecisionReason::CloudsIndicated => {
            "NOTICE: Clouds indicated in the vicinity of the airspace.".to_string()
        }
        crate::evaluate::DecisionReason::NightProhibited => {
            "You are not authorized to fly at night.".to_string()
        }
        crate::evaluate::DecisionReason::ConditionProhibited(category) => {
            format!("You are not authorized to fly in {:} conditions.", category)
        }
        crate::evaluate::DecisionReason::WindExceeded(wind_speed) => {
            format!(
                "You are not authorized to fly in winds over {:.0} mph.",
                wind_speed
            )
        }
        crate::evaluate::DecisionReason::HazardousWeather(category) => {
            format!("{:} conditions are hazardous to flight.", category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report(
        category: crate::weather::ConditionCategory,
        wind_speed: f64,
    ) -> crate::weather::WeatherReport {
        crate::weather::WeatherReport {
            city: String::from("Dunwoody"),
            state: String::from("ga"),
            country: String::from("US"),
            longitude: -84.3346,
            latitude: 33.9462,
            ground_level_pressure: Some(983.0),
            description: String::from("mist"),
            temperature: 72.86,
            feels_like: 74.21,
            humidity: 93,
            sea_level_pressure: 1020.0,
            visibility: Some(6.2),
            cloud_percentage: Some(100.0),
            wind_direction: Some(250.0),
            wind_gust: Some(6.0),
            snapshot: crate::weather::WeatherSnapshot {
                category,
                wind_speed,
                has_cloud_cover: category.indicates_clouds(),
                current_time: chrono::Utc.timestamp_opt(1722257216, 0).unwrap(),
                sunrise: chrono::Utc.timestamp_opt(1722250020, 0).unwrap(),
                sunset: chrono::Utc.timestamp_opt(1722300023, 0).unwrap(),
            },
        }
    }

    #[test]
    fn test_reason_messages_are_distinct() {
        let messages: Vec<String> = [
            crate::evaluate::DecisionReason::Authorized,
            crate::evaluate::DecisionReason::CloudsIndicated,
            crate::evaluate::DecisionReason::NightProhibited,
            crate::evaluate::DecisionReason::ConditionProhibited(
                crate::weather::ConditionCategory::Mist,
            ),
            crate::evaluate::DecisionReason::WindExceeded(20.0),
            crate::evaluate::DecisionReason::HazardousWeather(
                crate::weather::ConditionCategory::Tornado,
            ),
        ]
        .iter()
        .map(reason_message)
        .collect();

        let unique: std::collections::HashSet<&String> = messages.iter().collect();
        assert_eq!(unique.len(), messages.len());
    }

    #[test]
    fn test_weather_report_text() {
        let text = weather_report(&sample_report(crate::weather::ConditionCategory::Mist, 5.0));

        assert!(text.contains("Weather found for Dunwoody, GA, US"));
        assert!(text.contains("Weather: Mist (mist)"));
        assert!(text.contains("Clouds are covering 100% of the sky"));
        assert!(text.contains("Winds: 5 mph from 250°, gusting 6 mph"));
    }

    #[test]
    fn test_calm_winds() {
        let text = weather_report(&sample_report(crate::weather::ConditionCategory::Clear, 3.0));

        assert!(text.contains("Winds are calm"));
        assert!(!text.contains("gusting"));
    }

    #[test]
    fn test_cloud_coverage_only_shown_under_cloud_cover() {
        let text = weather_report(&sample_report(crate::weather::ConditionCategory::Clear, 5.0));

        assert!(!text.contains("covering"));
    }

    #[test]
    fn test_safe_recommendation() {
        let verdict = crate::evaluate::Verdict {
            is_safe: true,
            reason: crate::evaluate::DecisionReason::Authorized,
        };
        let text = recommendation(&verdict, false);

        assert!(text.contains("SAFE to fly!"));
        assert!(!text.contains("NOT SAFE"));
        assert!(!text.contains("NOTICE"));
    }

    #[test]
    fn test_unsafe_recommendation() {
        let verdict = crate::evaluate::Verdict {
            is_safe: false,
            reason: crate::evaluate::DecisionReason::WindExceeded(20.0),
        };
        let text = recommendation(&verdict, false);

        assert!(text.contains("NOT SAFE to fly."));
        assert!(text.contains("Reason: You are not authorized to fly in winds over 20 mph."));
    }

    #[test]
    fn test_clouds_indicated_recommendation_is_safe_with_notice() {
        let verdict = crate::evaluate::Verdict {
            is_safe: true,
            reason: crate::evaluate::DecisionReason::CloudsIndicated,
        };
        let text = recommendation(&verdict, true);

        assert!(text.contains("SAFE to fly!"));
        assert!(text.contains("Clouds indicated in the vicinity"));
        assert!(text.contains("visual line of sight"));
    }
}
