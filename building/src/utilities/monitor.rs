use tracing::info;

use car::CarStatus;

/// Logs a line whenever a car's floor, direction or door changes.
pub struct StatusMonitor {
    last: Vec<Option<CarStatus>>,
}

impl StatusMonitor {
    pub fn new(num_cars: usize) -> Self {
        StatusMonitor {
            last: vec![None; num_cars],
        }
    }

    /// Returns the indices of the cars whose position changed.
    pub fn update(&mut self, statuses: &[CarStatus]) -> Vec<usize> {
        if self.last.len() < statuses.len() {
            self.last.resize(statuses.len(), None);
        }

        let mut changed = Vec::new();
        for (car, status) in statuses.iter().enumerate() {
            let moved = match &self.last[car] {
                Some(last) => !last.same_position(status),
                None => true,
            };
            if moved {
                info!(
                    car,
                    floor = status.floor,
                    direction = %status.direction,
                    door = if status.door_open { "open" } else { "closed" },
                    state = status.behaviour().as_str(),
                    pending_cab = ?status.cab_requests,
                    "car status"
                );
                changed.push(car);
            }
            self.last[car] = Some(status.clone());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car::utilities::requests::Requests;
    use shared_resources::direction::Direction;

    fn status(floor: u8, direction: Direction, door_open: bool) -> CarStatus {
        CarStatus::new(floor, direction, door_open, &Requests::new())
    }

    #[test]
    fn first_update_reports_every_car() {
        let mut monitor = StatusMonitor::new(2);
        let changed = monitor.update(&[status(1, Direction::Idle, false), status(1, Direction::Idle, false)]);
        assert_eq!(changed, vec![0, 1]);
    }

    #[test]
    fn only_changed_cars_are_reported() {
        let mut monitor = StatusMonitor::new(2);
        monitor.update(&[status(1, Direction::Idle, false), status(4, Direction::Idle, false)]);
        assert!(monitor.update(&[status(1, Direction::Idle, false), status(4, Direction::Idle, false)]).is_empty());
        assert_eq!(monitor.update(&[status(1, Direction::Up, false), status(4, Direction::Idle, false)]), vec![0]);
        assert_eq!(monitor.update(&[status(1, Direction::Up, false), status(4, Direction::Idle, true)]), vec![1]);
    }
}
