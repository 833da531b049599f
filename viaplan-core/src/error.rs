use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("distance provider error: {0}")]
    Provider(String),
    #[error("no driving distance available from '{origin}' to '{destination}'")]
    NoDistance { origin: String, destination: String },
    #[error("unknown place: '{0}'")]
    UnknownPlace(String),
    #[error("start and end must be different places")]
    SameEndpoints,
    #[error("no route found from '{origin}' to '{destination}'")]
    NoRouteFound { origin: String, destination: String },
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
