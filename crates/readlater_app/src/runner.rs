use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use readlater_client::{
    ClientSettings, ReqwestTransport, SaveArticleStatus, SaveCommand, SaveEvent, SaveHandle,
    SaveOutcome, SaveService,
};
use readlater_logging::{rl_debug, rl_info, rl_warn};

/// Drives save commands from the main thread and waits for their results.
pub struct SaveRunner {
    handle: SaveHandle,
    poll_interval: Duration,
    max_polls: u32,
}

impl SaveRunner {
    pub fn new(
        settings: &ClientSettings,
        poll_interval: Duration,
        max_polls: u32,
    ) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(settings).context("building transport")?;
        let handle = SaveHandle::new(SaveService::new(transport, settings))
            .context("starting save worker")?;
        Ok(Self {
            handle,
            poll_interval,
            max_polls,
        })
    }

    /// Submits one command and blocks until its terminal value arrives.
    pub fn run(&self, command: SaveCommand) -> anyhow::Result<SaveOutcome> {
        let request_id = self.handle.submit(command);
        rl_debug!("Submitted request {}", request_id);
        loop {
            match self.handle.recv() {
                Some(SaveEvent {
                    request_id: id,
                    outcome,
                }) if id == request_id => return Ok(outcome),
                Some(other) => {
                    rl_warn!("Ignoring result for request {}", other.request_id);
                }
                None => return Err(anyhow!("save worker stopped")),
            }
        }
    }

    /// Polls `job_id` until the saving request reaches a terminal status.
    pub fn wait_for(&self, job_id: &str) -> anyhow::Result<SaveArticleStatus> {
        for attempt in 1..=self.max_polls {
            thread::sleep(self.poll_interval);
            let outcome = self.run(SaveCommand::PollStatus {
                job_id: job_id.to_string(),
            })?;
            let status = match outcome {
                SaveOutcome::Status(result) => result?,
                SaveOutcome::PageSaved(_) => return Err(anyhow!("unexpected page result")),
            };
            rl_info!("Poll {} for {}: {:?}", attempt, job_id, status);
            if status.is_terminal() {
                return Ok(status);
            }
        }
        Err(anyhow!(
            "job {job_id} still processing after {} polls",
            self.max_polls
        ))
    }
}
