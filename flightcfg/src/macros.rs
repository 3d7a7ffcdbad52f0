/// Declares a function named after a `cfg` key which returns whichever of the
/// listed values the crate was compiled for, or `"unknown"`.
macro_rules! get_cfg {
    ($name:ident : $($value:tt),+) => {
        fn $name() -> &'static str {
            $(
                if cfg!($name = $value) {
                    return $value;
                }
            )+
            "unknown"
        }
    };
}

/// Expands one row per setting, `"IDENT" => group.field, override: Type;`,
/// into the identifier list, the `Overrides` struct and the by-name accessors
/// of `Settings`, so the four can never disagree.
macro_rules! settings_table {
    ($($name:literal => $group:ident . $field:ident, $flag:ident : $ty:ty;)+) => {
        /// Identifiers of every registered setting, in registry order.
        pub const NAMES: &[&str] = &[$($name),+];

        /// Values supplied at process start which replace the profile defaults.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct Overrides {
            $(pub $flag: Option<$ty>,)+
        }

        impl Settings {
            /// Looks a setting up by its identifier, e.g. `KAFKA_REQUEST_TOPIC`.
            /// Identifiers are case-sensitive.
            pub fn get(&self, name: &str) -> Result<Value, Error> {
                match name {
                    $($name => Ok(Value::from(self.$group.$field.clone())),)+
                    _ => Err(Error::Missing(name.to_string())),
                }
            }

            pub fn entries(&self) -> Vec<(&'static str, Value)> {
                vec![$(($name, Value::from(self.$group.$field.clone())),)+]
            }

            fn apply(&mut self, overrides: &Overrides) {
                $(
                    if let Some(v) = &overrides.$flag {
                        debug!("Overriding {} = {}", $name, v);
                        self.$group.$field = v.clone();
                    }
                )+
            }
        }
    };
}
