use clap::Args;

use flightcfg::settings::{Overrides, Profile};

/// Profile selection plus per-setting overrides. Every override can also be
/// supplied through an environment variable named after the setting.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[clap(
        long,
        env = "FLIGHTCFG_PROFILE",
        default_value = "compose",
        forbid_empty_values = true,
        help = "Deployment topology the defaults are chosen for",
        value_enum
    )]
    pub profile: Profile,

    #[clap(long, env = "KAFKA_BOOTSTRAP_SERVERS", forbid_empty_values = true)]
    /// Kafka broker address, as host:port
    pub kafka_bootstrap_servers: Option<String>,

    #[clap(long, env = "KAFKA_REQUEST_TOPIC", forbid_empty_values = true)]
    /// Topic prediction requests are published to
    pub kafka_request_topic: Option<String>,

    #[clap(long, env = "KAFKA_RESPONSE_TOPIC", forbid_empty_values = true)]
    /// Topic predictions are read from
    pub kafka_response_topic: Option<String>,

    #[clap(long, env = "ELASTIC_URL", forbid_empty_values = true)]
    /// Elasticsearch index base URL
    pub elastic_url: Option<String>,

    #[clap(long, env = "MONGO_URI", forbid_empty_values = true)]
    /// MongoDB connection URI
    pub mongo_uri: Option<String>,

    #[clap(long, env = "MONGO_DB_NAME", forbid_empty_values = true)]
    /// MongoDB database name
    pub mongo_db_name: Option<String>,

    #[clap(long, env = "MONGO_COLLECTION_RESULTS", forbid_empty_values = true)]
    /// Collection holding prediction results
    pub mongo_collection_results: Option<String>,

    #[clap(long, env = "MONGO_COLLECTION_DISTANCES", forbid_empty_values = true)]
    /// Collection holding route distances
    pub mongo_collection_distances: Option<String>,

    #[clap(long, env = "SPARK_MASTER_UI_URL", forbid_empty_values = true)]
    /// Spark master web UI
    pub spark_master_ui_url: Option<String>,

    #[clap(long, env = "FLASK_HOST", forbid_empty_values = true)]
    /// Host the web service binds to
    pub flask_host: Option<String>,

    #[clap(long, env = "FLASK_PORT", forbid_empty_values = true)]
    /// Port the web service binds to
    pub flask_port: Option<u16>,
}

impl From<SettingsArgs> for Overrides {
    fn from(a: SettingsArgs) -> Self {
        Self {
            kafka_bootstrap_servers: a.kafka_bootstrap_servers,
            kafka_request_topic: a.kafka_request_topic,
            kafka_response_topic: a.kafka_response_topic,
            elastic_url: a.elastic_url,
            mongo_uri: a.mongo_uri,
            mongo_db_name: a.mongo_db_name,
            mongo_collection_results: a.mongo_collection_results,
            mongo_collection_distances: a.mongo_collection_distances,
            spark_master_ui_url: a.spark_master_ui_url,
            flask_host: a.flask_host,
            flask_port: a.flask_port,
        }
    }
}
