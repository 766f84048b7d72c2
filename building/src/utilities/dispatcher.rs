/// ----- HALL CALL DISPATCHER -----
/// This stateless module decides which car serves a hall call. The car
/// closest to the calling floor gets it, ties going to the lowest index.
/// Direction of travel, pending work and load are not considered.

use tracing::info;

use car::SharedCar;
use shared_resources::direction::Direction;
use shared_resources::{Result, SimError};

/// Index of the car nearest to `floor`, given each car's current floor.
pub fn nearest_car(car_floors: &[u8], floor: u8) -> Option<usize> {
    car_floors
        .iter()
        .enumerate()
        .min_by_key(|(_, car_floor)| car_floor.abs_diff(floor))
        .map(|(index, _)| index)
}

/// Hands the hall call to the nearest car and returns that car's index.
/// The call is checked before any car is touched.
pub fn assign_nearest_car(cars: &[SharedCar], floor: u8, direction: Direction) -> Result<usize> {
    if direction == Direction::Idle {
        return Err(SimError::InvalidCallDirection);
    }
    let num_floors = match cars.first() {
        Some(car) => car.lock().num_floors(),
        None => return Err(SimError::NoCars),
    };
    if floor < 1 || floor > num_floors {
        return Err(SimError::InvalidFloor { floor, num_floors });
    }

    let car_floors: Vec<u8> = cars.iter().map(|car| car.lock().current_floor()).collect();
    let chosen = nearest_car(&car_floors, floor).ok_or(SimError::NoCars)?;
    cars[chosen].lock().external_request(floor, direction)?;
    info!(car = chosen, floor, direction = %direction, "hall call assigned");
    Ok(chosen)
}
