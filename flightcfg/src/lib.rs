#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod error;
pub mod inspect;
pub mod logger;
pub mod server;
pub mod settings;
pub mod version;

pub const BANNER: &str = r#"
   __ _ _       _     _          __
  / _| (_) __ _| |__ | |_ ___ / _| __ _
 | |_| | |/ _` | '_ \| __/ __| |_ / _` |
 |  _| | | (_| | | | | || (__|  _| (_| |
 |_| |_|_|\__, |_| |_|\__\___|_|  \__, |
          |___/                   |___/
"#;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERS: &str = env!("CARGO_PKG_VERSION");

pub const RUST_VERS: &str = match option_env!("RUSTC_VERSION") {
    Some(v) => v,
    None => "unknown",
};

pub const GIT_BRANCH: &str = match option_env!("GIT_BRANCH") {
    Some(v) => v,
    None => "unknown",
};

pub const GIT_SHA: &str = match option_env!("GIT_SHA") {
    Some(v) => v,
    None => "unknown",
};
