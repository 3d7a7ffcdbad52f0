use crate::error::Error;
use crate::settings::{Profile, Settings};
use crate::{GIT_BRANCH, GIT_SHA, PKG_NAME, PKG_VERS, RUST_VERS};

get_cfg!(target_os: "windows", "macos", "ios", "linux", "android", "freebsd", "openbsd", "netbsd");
get_cfg!(target_arch: "x86", "x86_64", "mips", "powerpc", "powerpc64", "arm", "aarch64");

/// Build and registry summary printed by the `version` command.
pub fn describe() -> String {
    format!(
        "{} {}\n\
         target:   {}-{}\n\
         rustc:    {}\n\
         commit:   {}@{}\n\
         settings: {} (default profile '{}')",
        PKG_NAME,
        PKG_VERS,
        target_arch(),
        target_os(),
        RUST_VERS,
        GIT_BRANCH,
        GIT_SHA,
        Settings::names().len(),
        Profile::default(),
    )
}

pub fn init() -> Result<(), Error> {
    println!("{}", describe());
    Ok(())
}
