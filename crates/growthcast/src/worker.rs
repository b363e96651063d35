//! Background worker for talking to the forecast service without blocking
//! the UI.
//!
//! The event loop stays responsive while a request is in flight; a submit
//! carries the parameter snapshot taken at send time, so edits made
//! afterwards never leak into the serialized request.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use growthcast_api::{ForecastClient, ParameterSet, UpdateResponse};

/// Request sent to the background worker.
#[derive(Debug)]
pub enum ApiRequest {
    /// Fetch the stored parameter set (startup load).
    FetchParameters,
    /// Submit a parameter snapshot and recompute the forecast.
    Submit(ParameterSet),
    /// Graceful shutdown.
    Shutdown,
}

/// Response from the background worker.
#[derive(Debug)]
pub enum ApiResponse {
    /// Startup fetch finished; `Ok(None)` means keep the defaults.
    ParametersLoaded(Result<Option<ParameterSet>, String>),
    /// Submission finished; `Err` is a transport-level failure.
    SubmitFinished(Result<UpdateResponse, String>),
}

/// Owns the worker thread and the channels to it.
pub struct ApiWorker {
    request_tx: Sender<ApiRequest>,
    response_rx: Receiver<ApiResponse>,
    thread: Option<JoinHandle<()>>,
}

impl ApiWorker {
    pub fn new(client: ForecastClient) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let thread = thread::spawn(move || {
            run_worker(client, request_rx, response_tx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Send a request to the worker. Returns false if the worker is gone.
    pub fn send(&self, request: ApiRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking).
    pub fn try_recv(&self) -> Option<ApiResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for a response. Lets tests observe whether a
    /// request reached the worker at all.
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<ApiResponse> {
        self.response_rx.recv_timeout(timeout).ok()
    }

    /// Shut the worker down and wait for it to finish the current request.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(ApiRequest::Shutdown);
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            tracing::error!("API worker thread panicked");
        }
    }
}

impl Drop for ApiWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    client: ForecastClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::FetchParameters => {
                ApiResponse::ParametersLoaded(client.fetch_parameters().map_err(|e| e.to_string()))
            }
            ApiRequest::Submit(params) => {
                ApiResponse::SubmitFinished(client.update_parameters(&params).map_err(|e| e.to_string()))
            }
            ApiRequest::Shutdown => break,
        };
        // Receiver gone means the app was torn down; drop the response.
        if response_tx.send(response).is_err() {
            break;
        }
    }
}
