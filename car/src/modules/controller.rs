/// ----- CAR CONTROLLER -----
/// State machine for a single car. It owns the car's pending requests,
/// floor, travel direction and door, and advances one step each time
/// the simulation clock ticks.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use shared_resources::config::CarSettings;
use shared_resources::direction::Direction;
use shared_resources::request::Request;
use shared_resources::{Result, SimError};

use crate::modules::doors::Door;
use crate::utilities::car_status::CarStatus;
use crate::utilities::clock::Clock;
use crate::utilities::requests::Requests;

/// A car behind its own lock. Requests and steps serialize on it.
pub type SharedCar = Arc<Mutex<CarController>>;

pub struct CarController {
    id: usize,
    settings: CarSettings,
    clock: Arc<dyn Clock>,
    floor: u8,
    direction: Direction,
    requests: Requests,
    door: Door,
    last_departure: Duration,
}

impl CarController {
    /// A car parked at floor 1, idle, door closed. The first departure
    /// waits one travel interval from now.
    pub fn new(id: usize, settings: CarSettings, clock: Arc<dyn Clock>) -> Result<Self> {
        if settings.num_floors < 1 {
            return Err(SimError::InvalidConfig("a car needs at least one floor".into()));
        }
        let last_departure = clock.now();
        Ok(CarController {
            id,
            settings,
            clock,
            floor: 1,
            direction: Direction::Idle,
            requests: Requests::new(),
            door: Door::new(),
            last_departure,
        })
    }

    pub fn into_shared(self) -> SharedCar {
        Arc::new(Mutex::new(self))
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn num_floors(&self) -> u8 {
        self.settings.num_floors
    }

    pub fn current_floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_door_open(&self) -> bool {
        self.door.is_open()
    }

    pub fn requests(&self) -> &Requests {
        &self.requests
    }

    pub fn status(&self) -> CarStatus {
        CarStatus::new(self.floor, self.direction, self.door.is_open(), &self.requests)
    }

    fn validate_floor(&self, floor: u8) -> Result<()> {
        if floor < 1 || floor > self.settings.num_floors {
            return Err(SimError::InvalidFloor { floor, num_floors: self.settings.num_floors });
        }
        Ok(())
    }

    /// Cab button press for `floor`.
    pub fn request_floor(&mut self, floor: u8) -> Result<()> {
        self.validate_floor(floor)?;
        self.add_request(Request::cab(floor));
        Ok(())
    }

    /// Hall call at `floor` towards `direction`, assigned to this car.
    pub fn external_request(&mut self, floor: u8, direction: Direction) -> Result<()> {
        let request = Request::hall(floor, direction).ok_or(SimError::InvalidCallDirection)?;
        self.validate_floor(floor)?;
        self.add_request(request);
        Ok(())
    }

    fn add_request(&mut self, request: Request) {
        if self.requests.add(request) {
            debug!(car = self.id, floor = request.floor, call = request.call.as_str(), "new request");
        }
        self.update_direction();
    }

    /// Commits to a direction from standstill. A car already travelling
    /// keeps its direction until it runs out of work and goes idle.
    ///
    /// Unlike a plain above/below scan, a hall call waiting at the car's own
    /// floor also commits it (see `Requests::next_direction`), so a fresh car
    /// given an up call at floor 1 reports `Up`. Otherwise such a call would
    /// never satisfy the should-stop check and would be stranded.
    fn update_direction(&mut self) {
        if self.direction == Direction::Idle {
            let next = self.requests.next_direction(self.floor);
            self.set_direction(next);
        }
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            debug!(car = self.id, floor = self.floor, from = %self.direction, to = %direction, "direction changed");
            self.direction = direction;
        }
    }

    /// Advances the car by one tick.
    pub fn step(&mut self) {
        let now = self.clock.now();

        if self.door.is_open() {
            if self.door.hold_expired(now, self.settings.door_hold) {
                self.door.close();
                debug!(car = self.id, floor = self.floor, "door closed");
            }
            return;
        }

        if now.saturating_sub(self.last_departure) < self.settings.travel_interval {
            return;
        }

        // Only reached on a later tick than the one that went idle, so the
        // car never reverses within a single step.
        self.update_direction();

        if self.requests.should_stop(self.floor, self.direction) {
            self.stop(now);
            return;
        }

        match self.direction {
            Direction::Up if self.requests.further_requests_in_direction(self.floor, Direction::Up) => {
                self.depart(self.floor + 1, now);
            }
            Direction::Down if self.requests.further_requests_in_direction(self.floor, Direction::Down) => {
                self.depart(self.floor - 1, now);
            }
            _ => self.set_direction(Direction::Idle),
        }
    }

    fn stop(&mut self, now: Duration) {
        let cleared = self.requests.clear_at(self.floor, self.direction);
        self.door.open(now);
        debug!(car = self.id, floor = self.floor, served = ?cleared, "stopped, door open");
    }

    fn depart(&mut self, floor: u8, now: Duration) {
        debug!(car = self.id, from = self.floor, to = floor, direction = %self.direction, "moving");
        self.floor = floor;
        self.last_departure = now;
    }
}
