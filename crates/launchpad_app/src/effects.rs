use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use flow_logging::{flow_info, flow_warn};
use launchpad_core::{AttemptOutcome, Effect, Msg};
use launchpad_engine::{EngineEvent, EngineHandle, ProvisionSettings};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ProvisionSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartProvision { attempt } => {
                    flow_logging::set_active_attempt(attempt);
                    flow_info!("StartProvision attempt={attempt}");
                    self.engine.start(attempt);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::Progress(progress) => Msg::ProvisionProgress {
                        attempt: progress.attempt,
                        stage: map_stage(progress.stage),
                    },
                    EngineEvent::AttemptCompleted { attempt, result } => {
                        let outcome = match result {
                            Ok(outcome) => AttemptOutcome::Deployed {
                                app_url: outcome.app_url,
                            },
                            Err(err) => {
                                flow_warn!("attempt {} failed: {}", attempt, err.kind);
                                AttemptOutcome::Failed {
                                    message: err.message,
                                }
                            }
                        };
                        Msg::ProvisionDone { attempt, outcome }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_stage(stage: launchpad_engine::Stage) -> launchpad_core::Stage {
    match stage {
        launchpad_engine::Stage::CreatingRepository => launchpad_core::Stage::CreatingRepository,
        launchpad_engine::Stage::AwaitingDeployment => launchpad_core::Stage::AwaitingDeployment,
    }
}
