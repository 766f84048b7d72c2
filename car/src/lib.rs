pub mod modules;
pub mod utilities;

pub use modules::controller::{CarController, SharedCar};
pub use utilities::car_status::CarStatus;
pub use utilities::clock::{Clock, ManualClock, SystemClock};
