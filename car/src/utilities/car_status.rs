use shared_resources::call::Call;
use shared_resources::direction::Direction;

use crate::utilities::requests::Requests;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
    DoorOpen,
}

impl Behaviour {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behaviour::Idle => "idle",
            Behaviour::Moving => "moving",
            Behaviour::DoorOpen => "doorOpen",
        }
    }
}

/// Observable state of one car, taken under a single lock.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarStatus {
    pub floor: u8,
    pub direction: Direction,
    pub door_open: bool,
    pub cab_requests: Vec<u8>,
    pub hall_up_requests: Vec<u8>,
    pub hall_down_requests: Vec<u8>,
}

impl CarStatus {
    pub fn new(floor: u8, direction: Direction, door_open: bool, requests: &Requests) -> Self {
        CarStatus {
            floor,
            direction,
            door_open,
            cab_requests: requests.floors(Call::Cab),
            hall_up_requests: requests.floors(Call::HallUp),
            hall_down_requests: requests.floors(Call::HallDown),
        }
    }

    pub fn behaviour(&self) -> Behaviour {
        if self.door_open {
            Behaviour::DoorOpen
        } else if self.direction == Direction::Idle {
            Behaviour::Idle
        } else {
            Behaviour::Moving
        }
    }

    /// Same floor, direction and door state. Pending requests are ignored.
    pub fn same_position(&self, other: &CarStatus) -> bool {
        self.floor == other.floor && self.direction == other.direction && self.door_open == other.door_open
    }
}
