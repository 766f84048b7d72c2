use super::call::Call;
use super::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}

impl Request {
    pub fn cab(floor: u8) -> Self {
        Request { floor, call: Call::Cab }
    }

    /// Hall call towards `direction`. `Idle` is not a hall button.
    pub fn hall(floor: u8, direction: Direction) -> Option<Self> {
        direction.to_call().map(|call| Request { floor, call })
    }
}
