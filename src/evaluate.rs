lazy_static::lazy_static! {
    // sunrise and sunset shrink inward by this margin before the night check
    static ref TWILIGHT_MARGIN: chrono::Duration = chrono::Duration::seconds(1800);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DecisionReason {
    Authorized,
    CloudsIndicated,
    NightProhibited,
    ConditionProhibited(crate::weather::ConditionCategory),
    WindExceeded(f64),
    HazardousWeather(crate::weather::ConditionCategory),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub is_safe: bool,
    pub reason: DecisionReason,
}

// first matching rule wins; reasons are never combined
pub fn evaluate(
    profile: &crate::configuration::PreferenceProfile,
    snapshot: &crate::weather::WeatherSnapshot,
) -> Verdict {
    debug_assert!(
        snapshot.sunrise < snapshot.sunset,
        "sunrise at or after sunset in weather snapshot"
    );

    // hazards override every preference, including a fully-certified pilot
    if snapshot.category.is_hazardous() {
        return Verdict {
            is_safe: false,
            reason: DecisionReason::HazardousWeather(snapshot.category),
        };
    }

    let first_light = snapshot.sunrise + *TWILIGHT_MARGIN;
    let last_light = snapshot.sunset - *TWILIGHT_MARGIN;
    if !profile.night_certified
        && (snapshot.current_time >= last_light || snapshot.current_time <= first_light)
    {
        return Verdict {
            is_safe: false,
            reason: DecisionReason::NightProhibited,
        };
    }

    if !profile.rain_certified && snapshot.category.is_precipitation() {
        return Verdict {
            is_safe: false,
            reason: DecisionReason::ConditionProhibited(snapshot.category),
        };
    }

    if profile.max_wind_speed < snapshot.wind_speed {
        return Verdict {
            is_safe: false,
            reason: DecisionReason::WindExceeded(snapshot.wind_speed),
        };
    }

    // the provider cannot report cloud base altitude, so clouds over a pilot
    // without the rating stay an advisory rather than a denial
    if snapshot.has_cloud_cover && !profile.cloud_blos_certified {
        return Verdict {
            is_safe: true,
            reason: DecisionReason::CloudsIndicated,
        };
    }

    Verdict {
        is_safe: true,
        reason: DecisionReason::Authorized,
    }
}
