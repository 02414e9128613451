use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use readlater_logging::rl_error;

use crate::input::PageScrapePayload;
use crate::service::SaveService;
use crate::transport::GraphqlTransport;
use crate::{SaveArticleError, SaveArticleStatus};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveCommand {
    SaveUrl {
        url: String,
    },
    SavePage {
        payload: PageScrapePayload,
        upload_file_id: Option<String>,
    },
    PollStatus {
        job_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Status(Result<SaveArticleStatus, SaveArticleError>),
    PageSaved(Result<(), SaveArticleError>),
}

impl SaveOutcome {
    fn failed(saves_page: bool, err: SaveArticleError) -> Self {
        if saves_page {
            SaveOutcome::PageSaved(Err(err))
        } else {
            SaveOutcome::Status(Err(err))
        }
    }

    pub fn error(&self) -> Option<&SaveArticleError> {
        match self {
            SaveOutcome::Status(Err(err)) | SaveOutcome::PageSaved(Err(err)) => Some(err),
            _ => None,
        }
    }
}

/// The terminal value of one submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEvent {
    pub request_id: RequestId,
    pub outcome: SaveOutcome,
}

/// Runs save operations on a background runtime and hands their results back
/// to the thread that owns the handle.
///
/// Every `submit` produces exactly one `SaveEvent`, which is only ever
/// observed through `try_recv`/`recv`/`recv_timeout` on the owning thread.
/// A request whose task panics still yields an `Unknown` error event.
pub struct SaveHandle {
    cmd_tx: mpsc::Sender<(RequestId, SaveCommand)>,
    event_rx: mpsc::Receiver<SaveEvent>,
    // Requests that never reached the worker.
    rejected: RefCell<VecDeque<SaveEvent>>,
    next_request_id: Cell<RequestId>,
}

impl SaveHandle {
    pub fn new<T>(service: SaveService<T>) -> io::Result<Self>
    where
        T: GraphqlTransport + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel::<(RequestId, SaveCommand)>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let service = Arc::new(service);

        thread::Builder::new()
            .name("readlater-save".to_string())
            .spawn(move || {
                while let Ok((request_id, command)) = cmd_rx.recv() {
                    let service = service.clone();
                    let event_tx = event_tx.clone();
                    let saves_page = matches!(command, SaveCommand::SavePage { .. });
                    runtime.spawn(async move {
                        let task =
                            tokio::spawn(async move { run_command(service.as_ref(), command).await });
                        let outcome = match task.await {
                            Ok(outcome) => outcome,
                            Err(err) => {
                                rl_error!("Save request {} aborted: {}", request_id, err);
                                SaveOutcome::failed(
                                    saves_page,
                                    SaveArticleError::unknown(err.to_string()),
                                )
                            }
                        };
                        let _ = event_tx.send(SaveEvent {
                            request_id,
                            outcome,
                        });
                    });
                }
            })?;

        Ok(Self {
            cmd_tx,
            event_rx,
            rejected: RefCell::new(VecDeque::new()),
            next_request_id: Cell::new(1),
        })
    }

    /// Queues a command and returns the id its `SaveEvent` will carry.
    pub fn submit(&self, command: SaveCommand) -> RequestId {
        let request_id = self.next_request_id.get();
        self.next_request_id.set(request_id + 1);

        if let Err(mpsc::SendError((request_id, command))) =
            self.cmd_tx.send((request_id, command))
        {
            rl_error!("Save worker is gone; failing request {}", request_id);
            let saves_page = matches!(command, SaveCommand::SavePage { .. });
            let outcome =
                SaveOutcome::failed(saves_page, SaveArticleError::unknown("save worker stopped"));
            self.rejected.borrow_mut().push_back(SaveEvent {
                request_id,
                outcome,
            });
        }
        request_id
    }

    pub fn try_recv(&self) -> Option<SaveEvent> {
        self.take_rejected()
            .or_else(|| self.event_rx.try_recv().ok())
    }

    /// Blocks until the next event.
    ///
    /// Returns `None` once the worker thread has exited and every event it
    /// produced has been drained.
    pub fn recv(&self) -> Option<SaveEvent> {
        self.take_rejected().or_else(|| self.event_rx.recv().ok())
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SaveEvent> {
        self.take_rejected()
            .or_else(|| self.event_rx.recv_timeout(timeout).ok())
    }

    fn take_rejected(&self) -> Option<SaveEvent> {
        self.rejected.borrow_mut().pop_front()
    }
}

async fn run_command<T: GraphqlTransport>(
    service: &SaveService<T>,
    command: SaveCommand,
) -> SaveOutcome {
    match command {
        SaveCommand::SaveUrl { url } => SaveOutcome::Status(service.save_url(&url).await),
        SaveCommand::SavePage {
            payload,
            upload_file_id,
        } => SaveOutcome::PageSaved(
            service
                .save_page(&payload, upload_file_id.as_deref())
                .await,
        ),
        SaveCommand::PollStatus { job_id } => {
            SaveOutcome::Status(service.article_save_status(&job_id).await)
        }
    }
}
