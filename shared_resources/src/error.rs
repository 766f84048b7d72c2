//! Error type shared by the controller, the dispatcher and the host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Floor outside `1..=num_floors`. Requests are rejected, never clamped.
    #[error("floor {floor} is outside the building (floors 1-{num_floors})")]
    InvalidFloor { floor: u8, num_floors: u8 },

    #[error("hall calls must be made going up or down, not idle")]
    InvalidCallDirection,

    #[error("no cars to dispatch to")]
    NoCars,

    #[error("car {car} does not exist ({num_cars} cars)")]
    InvalidCar { car: usize, num_cars: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
