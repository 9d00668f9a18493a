//! WebSocket subscriber bridging the pub/sub broker into the UI event loop.
//!
//! One connection is opened per activation and closed unconditionally on
//! shutdown, including a shutdown that races the initial connect. Transport
//! failures are terminal for the connection; the dashboard keeps rendering
//! the last-known-good buffers.

use crate::domain::telemetry::{Quantity, Sample};
use crate::infrastructure::config::BrokerSettings;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

/// Connection lifecycle, driven by transport events. Cancellation moves to
/// `Closed` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Subscribed,
    Closed,
}

/// Events surfaced to the UI event loop, in transport delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum BrokerEvent {
    State(ConnectionState),
    Sample {
        quantity: Quantity,
        station: String,
        sample: Sample,
    },
}

/// Wire envelope for one published message.
#[derive(Debug, Deserialize)]
struct Envelope {
    topic: String,
    payload: MeasurementPayload,
}

/// Measurement payload carried on each quantity topic.
#[derive(Debug, Deserialize)]
struct MeasurementPayload {
    timestamp: f64,
    value: f64,
    station: String,
}

fn subscribe_frame(topic: &str) -> String {
    serde_json::json!({ "action": "subscribe", "topic": topic }).to_string()
}

/// Decode one inbound text frame. Malformed frames are dropped with a
/// warning; frames on unrecognized topics are ignored silently.
fn decode_frame(text: &str) -> Option<BrokerEvent> {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, "dropping malformed broker frame");
            return None;
        }
    };

    let quantity = Quantity::from_topic(&envelope.topic)?;
    let sample = Sample::from_wire(envelope.payload.timestamp, envelope.payload.value);
    Some(BrokerEvent::Sample {
        quantity,
        station: envelope.payload.station,
        sample,
    })
}

/// Owns the broker connection for its active lifetime.
pub struct BrokerSubscriber {
    url: String,
    events: mpsc::UnboundedSender<BrokerEvent>,
}

impl BrokerSubscriber {
    pub fn new(settings: &BrokerSettings, events: mpsc::UnboundedSender<BrokerEvent>) -> Self {
        Self {
            url: settings.url(),
            events,
        }
    }

    /// Drive the connection until the transport fails or shutdown fires.
    pub async fn run(self, mut shutdown: oneshot::Receiver<()>) {
        self.set_state(ConnectionState::Connecting);

        let ws = tokio::select! {
            _ = &mut shutdown => {
                self.set_state(ConnectionState::Closed);
                return;
            }
            connected = connect_async(&self.url) => match connected {
                Ok((ws, _)) => ws,
                Err(err) => {
                    error!(url = %self.url, error = %err, "failed to connect to broker");
                    self.set_state(ConnectionState::Disconnected);
                    return;
                }
            }
        };
        info!(url = %self.url, "connected to broker");

        let (mut write, mut read) = ws.split();
        for quantity in Quantity::ALL {
            if let Err(err) = write
                .send(Message::Text(subscribe_frame(quantity.topic())))
                .await
            {
                error!(topic = quantity.topic(), error = %err, "subscribe failed");
                self.set_state(ConnectionState::Disconnected);
                return;
            }
        }
        self.set_state(ConnectionState::Subscribed);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    let _ = write.close().await;
                    self.set_state(ConnectionState::Closed);
                    return;
                }
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(event) = decode_frame(&text) {
                            if self.events.send(event).is_err() {
                                // UI is gone; release the connection.
                                let _ = write.close().await;
                                self.set_state(ConnectionState::Closed);
                                return;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(_))) => debug!("broker ping"),
                    Some(Ok(Message::Close(frame))) => {
                        let reason = frame.map(|f| f.reason.to_string()).unwrap_or_default();
                        warn!(%reason, "broker closed the connection");
                        self.set_state(ConnectionState::Disconnected);
                        return;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        error!(error = %err, "broker transport error");
                        self.set_state(ConnectionState::Disconnected);
                        return;
                    }
                    None => {
                        self.set_state(ConnectionState::Disconnected);
                        return;
                    }
                }
            }
        }
    }

    fn set_state(&self, state: ConnectionState) {
        debug!(?state, "broker connection state");
        let _ = self.events.send(BrokerEvent::State(state));
    }
}

/// Handle to the subscriber worker; dropping it closes the connection and
/// joins the worker thread.
pub struct SubscriberHandle {
    shutdown: Option<oneshot::Sender<()>>,
    worker: Option<std::thread::JoinHandle<()>>,
}

impl SubscriberHandle {
    /// Close the connection and wait for the worker to exit.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for SubscriberHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Spawn the subscriber on a dedicated worker thread with its own
/// single-threaded runtime, keeping all UI-side state mutation on the UI
/// thread.
pub fn spawn(
    settings: &BrokerSettings,
    events: mpsc::UnboundedSender<BrokerEvent>,
) -> anyhow::Result<SubscriberHandle> {
    let subscriber = BrokerSubscriber::new(settings, events);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let worker = std::thread::Builder::new()
        .name("broker-subscriber".to_string())
        .spawn(move || match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(subscriber.run(shutdown_rx)),
            Err(err) => error!(error = %err, "failed to start subscriber runtime"),
        })?;

    Ok(SubscriberHandle {
        shutdown: Some(shutdown_tx),
        worker: Some(worker),
    })
}
