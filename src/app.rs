pub struct DroneWeatherApp {
    source: crate::connection::WeatherSource,
    preferences_path: std::path::PathBuf,
    log_level: log::Level,
}

impl DroneWeatherApp {
    pub fn new(
        source: crate::connection::WeatherSource,
        preferences_path: std::path::PathBuf,
        log_level: log::Level,
    ) -> Self {
        Self {
            source,
            preferences_path,
            log_level,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        clear_screen()?;
        if !acknowledge_disclaimer()? {
            return Ok(());
        }
        clear_screen()?;

        loop {
            let profile = self.ensure_preferences()?;
            self.run_cycle(&profile)?;

            if !prompt_yes_no("Would you like to check another location?")? {
                break;
            }
            clear_screen()?;
        }

        Ok(())
    }

    // one fetch → evaluate → report sequence; nothing in here is fatal
    fn run_cycle(
        &mut self,
        profile: &crate::configuration::PreferenceProfile,
    ) -> Result<(), std::io::Error> {
        let location = self.prompt_location()?;
        println!();

        match self.source.retrieve_weather(&location) {
            Ok(report) => {
                let verdict = crate::evaluate::evaluate(profile, &report.snapshot);

                clear_screen()?;
                println!("{:}", crate::report::weather_report(&report));
                println!("\n------------------------------------\n");
                println!(
                    "{:}",
                    crate::report::recommendation(&verdict, report.snapshot.has_cloud_cover)
                );
                println!("\n======= End of Weather Report =======\n");
            }
            Err(error) => {
                clear_screen()?;
                self.log_message(log::Level::Error, &error.to_string());
            }
        }

        hold_on_screen()?;
        clear_screen()?;
        Ok(())
    }

    fn ensure_preferences(
        &self,
    ) -> Result<crate::configuration::PreferenceProfile, std::io::Error> {
        match crate::configuration::PreferenceProfile::load(&self.preferences_path) {
            Ok(profile) => {
                println!("Preferences file found!");
                if prompt_yes_no("Would you like to update preferences?")? {
                    clear_screen()?;
                    self.replace_preferences()
                } else {
                    clear_screen()?;
                    Ok(profile)
                }
            }
            Err(error) => {
                match error {
                    crate::configuration::ProfileError::NotFound { .. } => {
                        println!("No preferences file has been found! Please answer these questions.");
                    }
                    _ => {
                        self.log_message(log::Level::Warn, &error.to_string());
                        println!("Preferences could not be read! Please answer these questions.");
                    }
                }
                self.replace_preferences()
            }
        }
    }

    fn replace_preferences(
        &self,
    ) -> Result<crate::configuration::PreferenceProfile, std::io::Error> {
        let profile = prompt_profile()?;
        profile.save(&self.preferences_path)?;
        clear_screen()?;
        Ok(profile)
    }

    fn prompt_location(&self) -> Result<crate::parse::FlightLocation, std::io::Error> {
        loop {
            println!("Caution: numbers in a location name may confuse the provider's geocoder.");
            println!(
                "If flying outside of the United States, enter the state code and country code as the same (london, gb, gb)."
            );
            let input = prompt(
                "Enter the city, state, and country you are flying near, separated by commas (atlanta, ga, us): ",
            )?;

            match crate::parse::parse_location(&input) {
                Ok(location) => {
                    if location.contains_digits() {
                        self.log_message(
                            log::Level::Warn,
                            "location contains digits; the geocoder may mislocate it",
                        );
                    }
                    return Ok(location);
                }
                Err(error) => {
                    clear_screen()?;
                    println!("{:}", error);
                    println!("Example: Akron, Ohio, United States = akron, oh, us");
                }
            }
        }
    }

    fn log_message(&self, level: log::Level, message: &str) {
        if level <= self.log_level {
            eprintln!(
                "{:} {:<5} {:}",
                chrono::Local::now().format(&crate::DATETIME_FORMAT),
                level,
                message,
            );
        }
    }
}

fn prompt_profile() -> Result<crate::configuration::PreferenceProfile, std::io::Error> {
    let night_certified = prompt_yes_no("Are you and your drone night certified?")?;
    let rain_certified = prompt_yes_no("Is your drone able to fly in the rain safely?")?;
    let max_wind_speed =
        prompt_number("What is the maximum wind speed you are able to fly at (mph):")?;
    let cloud_blos_certified =
        prompt_yes_no("Are you able to fly beyond visual line of sight (can you fly in clouds)?")?;

    Ok(crate::configuration::PreferenceProfile {
        night_certified,
        rain_certified,
        max_wind_speed,
        cloud_blos_certified,
    })
}

fn acknowledge_disclaimer() -> Result<bool, std::io::Error> {
    println!("=====================================================");
    println!("Disclaimer! This report can be inaccurate.");
    println!("Please use alternative methods to ensure safe flight.");
    println!("=====================================================");
    prompt_yes_no("Do you acknowledge the disclaimer?")
}

fn prompt(message: &str) -> Result<String, std::io::Error> {
    print!("{:}", message);
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_yes_no(question: &str) -> Result<bool, std::io::Error> {
    loop {
        let answer = prompt(&format!("{:} (y/n): ", question))?.to_lowercase();
        match answer.as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Error! Please enter yes or no (y/n)."),
        }
    }
}

fn prompt_number(question: &str) -> Result<f64, std::io::Error> {
    loop {
        let answer = prompt(&format!("{:} ", question))?;
        match answer.parse::<f64>() {
            Ok(value) if value >= 0.0 => return Ok(value),
            Ok(_) => println!("Error! Please enter a non-negative number."),
            Err(_) => println!("Error! Please enter a number!"),
        }
    }
}

fn clear_screen() -> Result<(), std::io::Error> {
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0),
    )
}

fn hold_on_screen() -> Result<(), std::io::Error> {
    prompt("Enter anything to continue: ")?;
    Ok(())
}
