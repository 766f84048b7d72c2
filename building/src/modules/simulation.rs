/// ----- SIMULATION CLOCK -----
/// Steps every car once per tick, in index order. Holds no elevator
/// state of its own; each car is locked only while it steps.

use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver, Sender};
use tracing::debug;

use car::{CarStatus, SharedCar};

#[derive(Clone)]
pub struct SimulationClock {
    cars: Vec<SharedCar>,
}

impl SimulationClock {
    pub fn new(cars: Vec<SharedCar>) -> Self {
        SimulationClock { cars }
    }

    /// Steps each car and returns their statuses after the step.
    pub fn tick(&self) -> Vec<CarStatus> {
        self.cars
            .iter()
            .map(|car| {
                let mut car = car.lock();
                car.step();
                car.status()
            })
            .collect()
    }

    /// Ticks every `tick_period` until `shutdown_rx` fires or disconnects,
    /// publishing each tick's statuses on `status_tx`.
    pub fn run(&self, tick_period: Duration, status_tx: Sender<Vec<CarStatus>>, shutdown_rx: Receiver<()>) {
        let ticker = tick(tick_period);
        debug!(cars = self.cars.len(), period = ?tick_period, "simulation clock started");

        loop {
            select! {
                recv(ticker) -> _ => {
                    if status_tx.send(self.tick()).is_err() {
                        debug!("status receiver gone, stopping simulation clock");
                        return;
                    }
                },
                recv(shutdown_rx) -> _ => {
                    debug!("simulation clock stopped");
                    return;
                },
            }
        }
    }
}
