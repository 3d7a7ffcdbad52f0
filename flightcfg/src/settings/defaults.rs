//! Literal default values, one constant per setting.
//!
//! These match the docker-compose deployment where `kafka`, `mongo` and
//! `spark-master` are service names on the compose network.

pub mod kafka {
    pub const BOOTSTRAP_SERVERS: &str = "kafka:9092";
    pub const REQUEST_TOPIC: &str = "flight-delay-ml-request";
    pub const RESPONSE_TOPIC: &str = "flight-predictions-output";
}

pub mod elastic {
    pub const URL: &str = "http://localhost:9200/agile_data_science";
}

pub mod mongo {
    pub const URI: &str = "mongodb://mongo:27017/";
    pub const DB_NAME: &str = "flight_prediction";
    /// Collection the prediction job writes its results to.
    pub const COLLECTION_RESULTS: &str = "flight_delay_results";
    /// Collection seeded with the initial route distances.
    pub const COLLECTION_DISTANCES: &str = "distances";
}

pub mod spark {
    pub const MASTER_UI_URL: &str = "http://spark-master:8080";
}

pub mod service {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5001;
}

/// Values seen from the docker host rather than from inside the compose
/// network.
pub mod host {
    pub const KAFKA_BOOTSTRAP_SERVERS: &str = "localhost:9092";
    pub const MONGO_URI: &str = "mongodb://localhost:27017/";
    pub const SPARK_MASTER_UI_URL: &str = "http://localhost:8080";
}
