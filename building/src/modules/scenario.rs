/// ----- SCENARIO MODULE -----
/// Scripted button presses. A scenario file is a JSON list of requests,
/// each with the time (ms after start) it is made:
///
///   [ { "atMs": 0,    "kind": "hall", "floor": 7, "direction": "up" },
///     { "atMs": 1500, "kind": "cab",  "car": 1,   "floor": 3 } ]

use std::fs;
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tracing::{debug, info};

use car::SharedCar;
use shared_resources::direction::Direction;
use shared_resources::{Result, SimError};

use crate::utilities::dispatcher;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Cab { car: usize, floor: u8 },
    Hall { floor: u8, direction: Direction },
}

impl Action {
    /// Cab presses go straight to their car, hall calls through the dispatcher.
    pub fn apply(&self, cars: &[SharedCar]) -> Result<()> {
        match *self {
            Action::Cab { car, floor } => {
                let target = cars.get(car).ok_or(SimError::InvalidCar { car, num_cars: cars.len() })?;
                target.lock().request_floor(floor)?;
                info!(car, floor, "cab request");
            }
            Action::Hall { floor, direction } => {
                dispatcher::assign_nearest_car(cars, floor, direction)?;
            }
        }
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    events: Vec<ScenarioEvent>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut events: Vec<ScenarioEvent> = serde_json::from_str(json)?;
        events.sort_by_key(|event| event.at_ms);
        Ok(Scenario { events })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let scenario = Self::from_json(&fs::read_to_string(path.as_ref())?)?;
        info!(path = %path.as_ref().display(), events = scenario.events().len(), "scenario loaded");
        Ok(scenario)
    }

    pub fn events(&self) -> &[ScenarioEvent] {
        &self.events
    }

    /// Sends each action on `action_tx` at its offset from now. The sender
    /// is dropped once the last event is out.
    pub fn spawn_feeder(self, action_tx: Sender<Action>) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new().name("scenario".to_string()).spawn(move || {
            let start = Instant::now();
            for event in self.events {
                let due = Duration::from_millis(event.at_ms);
                if let Some(wait) = due.checked_sub(start.elapsed()) {
                    thread::sleep(wait);
                }
                if action_tx.send(event.action).is_err() {
                    debug!("action receiver gone, stopping scenario");
                    return;
                }
            }
            debug!("scenario finished");
        })
    }
}
