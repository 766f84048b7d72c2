use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{after, never, select, unbounded, Receiver};
use tracing::{debug, error, info, warn};

use car::{CarController, Clock, SharedCar, SystemClock};
use shared_resources::config::SimulationConfig;
use shared_resources::Result;

use crate::utilities::monitor::StatusMonitor;
use crate::Args;

pub mod scenario;
pub mod simulation;

use scenario::{Action, Scenario};
use simulation::SimulationClock;

pub fn build_cars(config: &SimulationConfig, clock: Arc<dyn Clock>) -> Result<Vec<SharedCar>> {
    (0..config.num_cars)
        .map(|id| CarController::new(id, config.car_settings(), clock.clone()).map(CarController::into_shared))
        .collect()
}

pub fn run(args: &Args) -> Result<()> {
    // READ CONFIGURATION
    let mut config = SimulationConfig::load(&args.config)?;
    if let Some(num_cars) = args.num_cars {
        config.num_cars = num_cars;
        config = config.validate()?;
    }
    info!(
        floors = config.num_floors,
        cars = config.num_cars,
        door_hold_ms = config.door_hold_ms,
        travel_interval_ms = config.travel_interval_ms,
        tick_ms = config.tick_ms,
        "starting simulation"
    );

    let cars = build_cars(&config, Arc::new(SystemClock::new()))?;

    // INITIALIZE THREAD FOR SIMULATION CLOCK
    let (status_tx, status_rx) = unbounded();
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    let simulation = SimulationClock::new(cars.clone());
    let tick_period = config.tick_period();
    let simulation_handle = thread::Builder::new()
        .name("simulation_clock".to_string())
        .spawn(move || simulation.run(tick_period, status_tx, shutdown_rx))?;

    // INITIALIZE SCENARIO FEEDER
    let mut action_rx: Receiver<Action> = match &args.scenario {
        Some(path) => {
            let (action_tx, action_rx) = unbounded();
            Scenario::load(path)?.spawn_feeder(action_tx)?;
            action_rx
        }
        None => never(),
    };

    let deadline = match args.duration_secs {
        Some(secs) => after(Duration::from_secs(secs)),
        None => never(),
    };

    let mut monitor = StatusMonitor::new(cars.len());
    loop {
        let actions = action_rx.clone();
        select! {
            recv(actions) -> msg => match msg {
                Ok(action) => {
                    if let Err(e) = action.apply(&cars) {
                        warn!(?action, "request rejected: {e}");
                    }
                },
                Err(_) => {
                    debug!("no more scripted requests");
                    action_rx = never();
                },
            },
            recv(status_rx) -> msg => match msg {
                Ok(statuses) => {
                    monitor.update(&statuses);
                },
                Err(_) => {
                    error!("simulation clock stopped unexpectedly");
                    break;
                },
            },
            recv(deadline) -> _ => {
                info!("run duration reached, stopping");
                break;
            },
        }
    }

    drop(shutdown_tx);
    if simulation_handle.join().is_err() {
        error!("simulation clock thread panicked");
    }
    Ok(())
}
