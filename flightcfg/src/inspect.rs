use crate::error::Error;
use crate::logger;
use crate::settings::{Overrides, Profile, Settings};

pub struct ShowConfig {
    pub log: logger::Level,
    pub profile: Profile,
    pub overrides: Overrides,
}

pub struct GetConfig {
    pub log: logger::Level,
    pub profile: Profile,
    pub overrides: Overrides,
    pub name: String,
}

pub fn show(config: ShowConfig) -> Result<(), Error> {
    logger::init(&config.log);

    let settings = Settings::resolve(config.profile, &config.overrides);
    println!("{}", render(&settings)?);

    Ok(())
}

pub fn get(config: GetConfig) -> Result<(), Error> {
    logger::init(&config.log);

    let settings = Settings::resolve(config.profile, &config.overrides);
    println!("{}", settings.get(&config.name)?);

    Ok(())
}

pub fn render(settings: &Settings) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(settings)?)
}
