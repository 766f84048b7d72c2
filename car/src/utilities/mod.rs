pub mod car_status;
pub mod clock;
pub mod requests;
