use clap::Args;

use flightcfg::logger::Level;

use super::SettingsArgs;

#[derive(Args, Debug)]
pub struct ShowConfig {
    #[clap(
        short,
        long,
        env = "FLIGHTCFG_LOG",
        default_value = "warn",
        forbid_empty_values = true,
        help = "The logging level",
        value_enum
    )]
    /// The logging level
    pub log: Level,

    #[clap(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug)]
pub struct GetConfig {
    /// Identifier of the setting, e.g. KAFKA_REQUEST_TOPIC
    pub name: String,

    #[clap(
        short,
        long,
        env = "FLIGHTCFG_LOG",
        default_value = "warn",
        forbid_empty_values = true,
        help = "The logging level",
        value_enum
    )]
    /// The logging level
    pub log: Level,

    #[clap(flatten)]
    pub settings: SettingsArgs,
}

impl From<ShowConfig> for flightcfg::inspect::ShowConfig {
    fn from(c: ShowConfig) -> Self {
        Self {
            log: c.log,
            profile: c.settings.profile,
            overrides: c.settings.into(),
        }
    }
}

impl From<GetConfig> for flightcfg::inspect::GetConfig {
    fn from(c: GetConfig) -> Self {
        Self {
            log: c.log,
            profile: c.settings.profile,
            overrides: c.settings.into(),
            name: c.name,
        }
    }
}
