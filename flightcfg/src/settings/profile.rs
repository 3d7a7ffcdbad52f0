use std::fmt;

use clap::ValueEnum;

/// The deployment topology the defaults are chosen for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Inside the docker-compose network, where services are reached by name.
    #[default]
    Compose,
    /// On the docker host, where published ports are reached on localhost.
    Host,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Profile::Compose => write!(f, "compose"),
            Profile::Host => write!(f, "host"),
        }
    }
}
