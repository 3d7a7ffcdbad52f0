mod inspect;
mod server;
mod settings;

pub use inspect::{GetConfig, ShowConfig};
pub use server::ServerConfig;
pub use settings::SettingsArgs;
