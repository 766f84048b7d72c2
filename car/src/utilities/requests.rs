use std::collections::BTreeSet;

use shared_resources::call::Call;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

/// Floors with a pending request, keyed by floor number.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FloorSet {
    floors: BTreeSet<u8>,
}

impl FloorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, floor: u8) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove(&mut self, floor: u8) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn any_above(&self, floor: u8) -> bool {
        match floor.checked_add(1) {
            Some(next) => self.floors.range(next..).next().is_some(),
            None => false,
        }
    }

    pub fn any_below(&self, floor: u8) -> bool {
        self.floors.range(..floor).next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.floors.iter().copied()
    }
}

/// Pending work for one car: cab presses and the hall calls assigned to it.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Requests {
    cab: FloorSet,
    hall_up: FloorSet,
    hall_down: FloorSet,
}

impl Requests {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, call: Call) -> &FloorSet {
        match call {
            Call::HallUp => &self.hall_up,
            Call::HallDown => &self.hall_down,
            Call::Cab => &self.cab,
        }
    }

    fn set_mut(&mut self, call: Call) -> &mut FloorSet {
        match call {
            Call::HallUp => &mut self.hall_up,
            Call::HallDown => &mut self.hall_down,
            Call::Cab => &mut self.cab,
        }
    }

    pub fn add(&mut self, request: Request) -> bool {
        self.set_mut(request.call).insert(request.floor)
    }

    pub fn contains(&self, request: Request) -> bool {
        self.set(request.call).contains(request.floor)
    }

    /// Clears what a stop at `floor` serves: the cab request, and the hall
    /// call matching the travel direction. Returns the cleared calls.
    pub fn clear_at(&mut self, floor: u8, direction: Direction) -> Vec<Call> {
        let mut cleared = Vec::new();
        if self.cab.remove(floor) {
            cleared.push(Call::Cab);
        }
        for hall_call in Call::iter_hall().filter(|call| call.direction() == Some(direction)) {
            if self.set_mut(hall_call).remove(floor) {
                cleared.push(hall_call);
            }
        }
        cleared
    }

    pub fn should_stop(&self, floor: u8, direction: Direction) -> bool {
        self.cab.contains(floor)
            || direction
                .to_call()
                .is_some_and(|hall_call| self.set(hall_call).contains(floor))
    }

    /// Any pending request of any kind strictly beyond `floor` going
    /// `direction`. Hall calls the car will not stop for on the way still
    /// count, so the car keeps travelling towards them.
    pub fn further_requests_in_direction(&self, floor: u8, direction: Direction) -> bool {
        Call::iter().any(|call| match direction {
            Direction::Up => self.set(call).any_above(floor),
            Direction::Down => self.set(call).any_below(floor),
            Direction::Idle => false,
        })
    }

    /// Direction to commit to from standstill: upward work wins over
    /// downward. With nothing above or below, a hall call waiting at this
    /// floor sets the direction so the car can stop for it.
    pub fn next_direction(&self, floor: u8) -> Direction {
        if self.further_requests_in_direction(floor, Direction::Up) {
            Direction::Up
        } else if self.further_requests_in_direction(floor, Direction::Down) {
            Direction::Down
        } else if self.hall_up.contains(floor) {
            Direction::Up
        } else if self.hall_down.contains(floor) {
            Direction::Down
        } else {
            Direction::Idle
        }
    }

    pub fn is_empty(&self) -> bool {
        Call::iter().all(|call| self.set(call).is_empty())
    }

    pub fn floors(&self, call: Call) -> Vec<u8> {
        self.set(call).iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests(list: &[Request]) -> Requests {
        let mut requests = Requests::new();
        for request in list {
            requests.add(*request);
        }
        requests
    }

    fn hall(floor: u8, direction: Direction) -> Request {
        Request::hall(floor, direction).unwrap()
    }

    #[test]
    fn floor_set_scans_strictly_beyond() {
        let mut set = FloorSet::new();
        set.insert(4);
        assert!(set.any_above(3));
        assert!(!set.any_above(4));
        assert!(set.any_below(5));
        assert!(!set.any_below(4));
        assert!(!set.any_above(u8::MAX));
    }

    #[test]
    fn cab_request_always_stops() {
        let requests = requests(&[Request::cab(3)]);
        assert!(requests.should_stop(3, Direction::Up));
        assert!(requests.should_stop(3, Direction::Down));
        assert!(requests.should_stop(3, Direction::Idle));
        assert!(!requests.should_stop(4, Direction::Up));
    }

    #[test]
    fn hall_call_only_stops_in_matching_direction() {
        let requests = requests(&[hall(5, Direction::Down)]);
        assert!(!requests.should_stop(5, Direction::Up));
        assert!(requests.should_stop(5, Direction::Down));
        assert!(!requests.should_stop(5, Direction::Idle));
    }

    #[test]
    fn mismatched_hall_call_still_counts_as_destination() {
        let requests = requests(&[hall(5, Direction::Down)]);
        assert!(requests.further_requests_in_direction(2, Direction::Up));
        assert!(!requests.further_requests_in_direction(5, Direction::Up));
        assert!(requests.further_requests_in_direction(7, Direction::Down));
    }

    #[test]
    fn next_direction_prefers_up() {
        let requests = requests(&[Request::cab(2), Request::cab(9)]);
        assert_eq!(requests.next_direction(5), Direction::Up);
        assert_eq!(requests.next_direction(9), Direction::Down);
        assert_eq!(Requests::new().next_direction(5), Direction::Idle);
    }

    #[test]
    fn hall_call_here_only_decides_when_nothing_else_waits() {
        assert_eq!(requests(&[hall(4, Direction::Down)]).next_direction(4), Direction::Down);
        assert_eq!(requests(&[hall(4, Direction::Up), Request::cab(2)]).next_direction(4), Direction::Down);
        assert_eq!(requests(&[hall(4, Direction::Up), hall(4, Direction::Down)]).next_direction(4), Direction::Up);
        assert_eq!(requests(&[Request::cab(4)]).next_direction(4), Direction::Idle);
    }

    #[test]
    fn clear_at_keeps_opposite_hall_call() {
        let mut requests = requests(&[Request::cab(6), hall(6, Direction::Up), hall(6, Direction::Down)]);
        let cleared = requests.clear_at(6, Direction::Up);
        assert_eq!(cleared, vec![Call::Cab, Call::HallUp]);
        assert!(!requests.contains(Request::cab(6)));
        assert!(!requests.contains(hall(6, Direction::Up)));
        assert!(requests.contains(hall(6, Direction::Down)));
    }

    #[test]
    fn clear_at_going_down_takes_the_down_call() {
        let mut requests = requests(&[hall(3, Direction::Up), hall(3, Direction::Down)]);
        assert_eq!(requests.clear_at(3, Direction::Down), vec![Call::HallDown]);
        assert!(requests.contains(hall(3, Direction::Up)));
        assert_eq!(requests.clear_at(3, Direction::Up), vec![Call::HallUp]);
        assert!(requests.is_empty());
    }

    #[test]
    fn idle_stop_only_clears_cab() {
        let mut requests = requests(&[Request::cab(1), hall(1, Direction::Down)]);
        assert_eq!(requests.clear_at(1, Direction::Idle), vec![Call::Cab]);
        assert!(requests.contains(hall(1, Direction::Down)));
        assert!(!requests.is_empty());
    }
}
