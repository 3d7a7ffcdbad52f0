use clap::Args;

use flightcfg::logger::Level;

use super::SettingsArgs;

#[derive(Args, Debug)]
pub struct ServerConfig {
    #[clap(
        short,
        long,
        env = "FLIGHTCFG_LOG",
        default_value = "info",
        forbid_empty_values = true,
        help = "The logging level",
        value_enum
    )]
    /// The logging level
    pub log: Level,

    #[clap(flatten)]
    pub settings: SettingsArgs,
}

impl From<ServerConfig> for flightcfg::server::ServerConfig {
    fn from(c: ServerConfig) -> Self {
        Self {
            log: c.log,
            profile: c.settings.profile,
            overrides: c.settings.into(),
        }
    }
}
