pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] stellium::Error),

    #[error("chart is missing required objects: {}", .missing.join(", "))]
    MissingBodies { missing: Vec<&'static str> },

    #[error("{body} has a non-finite longitude: {value}")]
    NonFiniteLongitude { body: &'static str, value: f64 },

    #[error(
        "Invalid local_time: {input}. Must be in ISO 8601 format (YYYY-MM-DDTHH:MM:SS)."
    )]
    InvalidLocalTime { input: String },

    #[error(
        "Invalid location: {input}. Must be in the format 'LAT,LON', where LAT is the latitude and LON is the longitude."
    )]
    InvalidLocation { input: String },

    #[error("Invalid chart geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("Position provider failed: {message}")]
    Provider { message: String },
}
