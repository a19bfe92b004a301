use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::provision::{ChannelProgressSink, HttpProvisioner, ProvisionSettings, Provisioner};
use crate::{AttemptId, EngineEvent};

enum EngineCommand {
    StartAttempt { attempt: AttemptId },
}

/// Handle to the background provisioning runtime. Cloneable so the shell's
/// event pump can drain events from its own thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ProvisionSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let provisioner = Arc::new(HttpProvisioner::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let provisioner = provisioner.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(provisioner.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Requests the single outbound call for `attempt`.
    pub fn start(&self, attempt: AttemptId) {
        let _ = self.cmd_tx.send(EngineCommand::StartAttempt { attempt });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    provisioner: &dyn Provisioner,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::StartAttempt { attempt } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = provisioner.provision(attempt, &sink).await;
            let _ = event_tx.send(EngineEvent::AttemptCompleted { attempt, result });
        }
    }
}
