use std::fmt;

use serde::Serialize;

use crate::error::Error;

pub mod defaults;
pub mod endpoints;
pub mod profile;

pub use profile::Profile;

settings_table! {
    "KAFKA_BOOTSTRAP_SERVERS" => kafka.bootstrap_servers, kafka_bootstrap_servers: String;
    "KAFKA_REQUEST_TOPIC" => kafka.request_topic, kafka_request_topic: String;
    "KAFKA_RESPONSE_TOPIC" => kafka.response_topic, kafka_response_topic: String;
    "ELASTIC_URL" => elastic.url, elastic_url: String;
    "MONGO_URI" => mongo.uri, mongo_uri: String;
    "MONGO_DB_NAME" => mongo.db_name, mongo_db_name: String;
    "MONGO_COLLECTION_RESULTS" => mongo.collection_results, mongo_collection_results: String;
    "MONGO_COLLECTION_DISTANCES" => mongo.collection_distances, mongo_collection_distances: String;
    "SPARK_MASTER_UI_URL" => spark.master_ui_url, spark_master_ui_url: String;
    "FLASK_HOST" => service.host, flask_host: String;
    "FLASK_PORT" => service.port, flask_port: u16;
}

lazy_static! {
    /// The registry built from the literal defaults, shared by the whole process.
    pub static ref DEFAULT_SETTINGS: Settings = Settings::default();
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KafkaSettings {
    /// Broker entry point, as `host:port`.
    pub bootstrap_servers: String,

    /// Topic prediction requests are published to.
    pub request_topic: String,

    /// Topic the stream job publishes predictions to.
    pub response_topic: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElasticSettings {
    /// Base URL of the search index.
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MongoSettings {
    pub uri: String,
    pub db_name: String,
    pub collection_results: String,
    pub collection_distances: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SparkSettings {
    /// Master web UI. Informational only, nothing connects to it.
    pub master_ui_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceSettings {
    /// Interface the web service binds to.
    pub host: String,

    /// Port the web service binds to.
    pub port: u16,
}

impl ServiceSettings {
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// The complete configuration registry.
///
/// A `Settings` is resolved once at process start and then only read, so it
/// can be shared freely behind an `Arc` or a plain reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub kafka: KafkaSettings,
    pub elastic: ElasticSettings,
    pub mongo: MongoSettings,
    pub spark: SparkSettings,
    pub service: ServiceSettings,
}

/// A single setting value as returned by a lookup by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(u16),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<u16> for Value {
    fn from(i: u16) -> Self {
        Value::Int(i)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            kafka: KafkaSettings {
                bootstrap_servers: defaults::kafka::BOOTSTRAP_SERVERS.to_string(),
                request_topic: defaults::kafka::REQUEST_TOPIC.to_string(),
                response_topic: defaults::kafka::RESPONSE_TOPIC.to_string(),
            },
            elastic: ElasticSettings {
                url: defaults::elastic::URL.to_string(),
            },
            mongo: MongoSettings {
                uri: defaults::mongo::URI.to_string(),
                db_name: defaults::mongo::DB_NAME.to_string(),
                collection_results: defaults::mongo::COLLECTION_RESULTS.to_string(),
                collection_distances: defaults::mongo::COLLECTION_DISTANCES.to_string(),
            },
            spark: SparkSettings {
                master_ui_url: defaults::spark::MASTER_UI_URL.to_string(),
            },
            service: ServiceSettings {
                host: defaults::service::HOST.to_string(),
                port: defaults::service::PORT,
            },
        }
    }
}

impl Settings {
    pub fn for_profile(profile: Profile) -> Self {
        let mut settings = Settings::default();

        if profile == Profile::Host {
            settings.kafka.bootstrap_servers = defaults::host::KAFKA_BOOTSTRAP_SERVERS.to_string();
            settings.mongo.uri = defaults::host::MONGO_URI.to_string();
            settings.spark.master_ui_url = defaults::host::SPARK_MASTER_UI_URL.to_string();
        }

        settings
    }

    /// Builds the registry for `profile` and applies `overrides` on top.
    /// The returned value is final; nothing reads the environment again.
    pub fn resolve(profile: Profile, overrides: &Overrides) -> Self {
        info!("Resolving settings for profile '{}'", profile);

        let mut s = Settings::for_profile(profile);
        s.apply(overrides);
        s
    }

    pub fn names() -> &'static [&'static str] {
        NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_profile_rewrites_container_hostnames_only() {
        let compose = Settings::for_profile(Profile::Compose);
        let host = Settings::for_profile(Profile::Host);

        assert_eq!(compose, Settings::default());
        assert_eq!(host.kafka.bootstrap_servers, "localhost:9092");
        assert_eq!(host.mongo.uri, "mongodb://localhost:27017/");
        assert_eq!(host.spark.master_ui_url, "http://localhost:8080");

        assert_eq!(host.kafka.request_topic, compose.kafka.request_topic);
        assert_eq!(host.elastic, compose.elastic);
        assert_eq!(host.mongo.db_name, compose.mongo.db_name);
        assert_eq!(host.service, compose.service);
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let overrides = Overrides {
            kafka_request_topic: Some("requests-v2".to_string()),
            flask_port: Some(8000),
            ..Overrides::default()
        };

        let s = Settings::resolve(Profile::Compose, &overrides);

        assert_eq!(s.kafka.request_topic, "requests-v2");
        assert_eq!(s.service.port, 8000);
        assert_eq!(s.kafka.response_topic, defaults::kafka::RESPONSE_TOPIC);
        assert_eq!(s.kafka.bootstrap_servers, defaults::kafka::BOOTSTRAP_SERVERS);
        assert_eq!(s.service.host, defaults::service::HOST);
    }

    #[test]
    fn overrides_apply_after_profile() {
        let overrides = Overrides {
            mongo_uri: Some("mongodb://db.internal:27017/".to_string()),
            ..Overrides::default()
        };

        let s = Settings::resolve(Profile::Host, &overrides);

        assert_eq!(s.mongo.uri, "mongodb://db.internal:27017/");
        assert_eq!(s.kafka.bootstrap_servers, "localhost:9092");
    }

    #[test]
    fn no_overrides_is_the_profile() {
        let s = Settings::resolve(Profile::Host, &Overrides::default());
        assert_eq!(s, Settings::for_profile(Profile::Host));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let s = Settings::default();
        assert!(s.get("MONGO_URI").is_ok());
        assert!(matches!(s.get("mongo_uri"), Err(Error::Missing(n)) if n == "mongo_uri"));
    }

    #[test]
    fn entries_follow_names() {
        let s = Settings::default();
        let entries = s.entries();

        assert_eq!(entries.len(), NAMES.len());
        for ((name, value), expected) in entries.iter().zip(NAMES.iter()) {
            assert_eq!(name, expected);
            assert_eq!(&s.get(name).unwrap(), value);
        }
    }

    #[test]
    fn each_override_lands_on_its_own_setting() {
        let overrides = Overrides {
            kafka_bootstrap_servers: Some("KAFKA_BOOTSTRAP_SERVERS".to_string()),
            kafka_request_topic: Some("KAFKA_REQUEST_TOPIC".to_string()),
            kafka_response_topic: Some("KAFKA_RESPONSE_TOPIC".to_string()),
            elastic_url: Some("ELASTIC_URL".to_string()),
            mongo_uri: Some("MONGO_URI".to_string()),
            mongo_db_name: Some("MONGO_DB_NAME".to_string()),
            mongo_collection_results: Some("MONGO_COLLECTION_RESULTS".to_string()),
            mongo_collection_distances: Some("MONGO_COLLECTION_DISTANCES".to_string()),
            spark_master_ui_url: Some("SPARK_MASTER_UI_URL".to_string()),
            flask_host: Some("FLASK_HOST".to_string()),
            flask_port: Some(9999),
        };

        let s = Settings::resolve(Profile::Compose, &overrides);

        for (name, value) in s.entries() {
            match value {
                Value::Str(v) => assert_eq!(v, name),
                Value::Int(port) => {
                    assert_eq!(name, "FLASK_PORT");
                    assert_eq!(port, 9999);
                }
            }
        }
        assert_eq!(s.entries().len(), Settings::names().len());
    }

    #[test]
    fn serializes_grouped() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert_eq!(json["kafka"]["request_topic"], "flight-delay-ml-request");
        assert_eq!(json["mongo"]["collection_distances"], "distances");
        assert_eq!(json["service"]["port"], 5001);
    }

    #[test]
    fn values_display_plainly() {
        assert_eq!(Value::Int(5001).to_string(), "5001");
        assert_eq!(Value::Str("kafka:9092".to_string()).to_string(), "kafka:9092");
        assert_eq!(serde_json::to_string(&Value::Int(5001)).unwrap(), "5001");
    }
}
