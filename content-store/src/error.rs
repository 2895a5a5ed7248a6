use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error writing collection '{collection}': {source}")]
    Io {
        collection: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error for collection '{collection}': {source}")]
    Serialize {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
