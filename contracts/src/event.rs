//! Event iteration and subscription.
//!
//! [`EventIterator`] steps through logs of one event, [`Subscription`] keeps
//! a live watch running in the background. Both decode logs into
//! [`DecodedLog`]s, which carry the typed event next to the raw log metadata
//! (block, transaction, index).
use std::marker::PhantomData;

use alloy::{
    primitives::{Address, FixedBytes, B256, U256},
    rpc::types::{Log, Topic},
    sol_types::SolEvent,
};
use futures::{stream, Stream, StreamExt};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{backend::LogStream, Error, Result};

/// Capacity of the channel between a log producer and its iterator.
const LOG_BUFFER: usize = 128;

/// A log decoded into event `E`, with the raw log metadata.
pub type DecodedLog<E> = Log<E>;

/// Conversion of an indexed event argument into its topic word.
pub trait IntoTopic {
    /// Encodes `self` as a 32-byte topic.
    fn into_topic(&self) -> B256;
}

impl IntoTopic for Address {
    fn into_topic(&self) -> B256 {
        self.into_word()
    }
}

impl IntoTopic for U256 {
    fn into_topic(&self) -> B256 {
        B256::from(self.to_be_bytes::<32>())
    }
}

impl IntoTopic for B256 {
    fn into_topic(&self) -> B256 {
        *self
    }
}

impl IntoTopic for FixedBytes<4> {
    fn into_topic(&self) -> B256 {
        B256::right_padding_from(self.as_slice())
    }
}

impl IntoTopic for bool {
    fn into_topic(&self) -> B256 {
        B256::with_last_byte(u8::from(*self))
    }
}

/// Builds the topic set matching any of `values`.
///
/// An empty slice matches every value.
pub fn topic<T: IntoTopic>(values: &[T]) -> Topic {
    values.iter().map(IntoTopic::into_topic).collect::<Vec<_>>().into()
}

/// Decodes `log` as event `E`, checking its signature first.
pub(crate) fn decode_log<E: SolEvent>(log: &Log) -> Result<DecodedLog<E>> {
    if !E::ANONYMOUS {
        let actual = log.topics().first().copied();
        if actual != Some(E::SIGNATURE_HASH) {
            return Err(Error::EventSignatureMismatch {
                expected: E::SIGNATURE_HASH,
                actual,
            });
        }
    }
    Ok(log.log_decode::<E>()?)
}

/// Iterates over logs of event `E`.
///
/// Logs are produced by a background task into a bounded channel; the task
/// reports completion (or failure) on a separate channel. Once the producer
/// has completed, the remaining buffered logs are drained and iteration
/// ends. A failure of the producer or a log that cannot be decoded ends
/// iteration immediately and is reported by [`EventIterator::error`].
#[derive(Debug)]
pub struct EventIterator<E> {
    logs: mpsc::Receiver<Log>,
    done: oneshot::Receiver<Result<()>>,
    finished: bool,
    fail: Option<Error>,
    producer: JoinHandle<()>,
    _event: PhantomData<fn() -> E>,
}

impl<E: SolEvent> EventIterator<E> {
    /// Iterates over an already fetched batch of logs.
    pub(crate) fn from_logs(logs: Vec<Log>) -> Self {
        Self::spawn(stream::iter(logs.into_iter().map(Ok)))
    }

    /// Iterates over logs produced by `source`.
    pub fn spawn<S>(source: S) -> Self
    where
        S: Stream<Item = Result<Log>> + Send + 'static,
    {
        let (log_tx, logs) = mpsc::channel(LOG_BUFFER);
        let (done_tx, done) = oneshot::channel();

        let producer = tokio::spawn(async move {
            futures::pin_mut!(source);
            let result = async {
                while let Some(log) = source.next().await {
                    if log_tx.send(log?).await.is_err() {
                        // Iterator dropped.
                        break;
                    }
                }
                Ok::<(), Error>(())
            }
            .await;
            let _ = done_tx.send(result);
        });

        Self {
            logs,
            done,
            finished: false,
            fail: None,
            producer,
            _event: PhantomData,
        }
    }

    /// Advances to the next event.
    ///
    /// Returns `None` when there are no more events or when an error
    /// occurred; check [`EventIterator::error`] to tell them apart.
    pub async fn next(&mut self) -> Option<DecodedLog<E>> {
        if self.fail.is_some() {
            return None;
        }

        loop {
            if self.finished {
                return match self.logs.try_recv() {
                    Ok(log) => self.unpack(&log),
                    Err(_) => None,
                };
            }

            tokio::select! {
                Some(log) = self.logs.recv() => return self.unpack(&log),
                result = &mut self.done => {
                    self.finished = true;
                    if let Ok(Err(err)) = result {
                        self.fail = Some(err);
                        return None;
                    }
                }
            }
        }
    }

    /// Drains the iterator, failing on the first error.
    pub async fn collect(mut self) -> Result<Vec<DecodedLog<E>>> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await {
            events.push(event);
        }
        match self.fail.take() {
            Some(err) => Err(err),
            None => Ok(events),
        }
    }

    /// The error that ended iteration, if any.
    pub fn error(&self) -> Option<&Error> {
        self.fail.as_ref()
    }

    /// Stops the producer and releases its resources.
    pub fn close(self) {
        drop(self);
    }

    fn unpack(&mut self, log: &Log) -> Option<DecodedLog<E>> {
        match decode_log::<E>(log) {
            Ok(event) => Some(event),
            Err(err) => {
                self.fail = Some(err);
                None
            }
        }
    }
}

impl<E> Drop for EventIterator<E> {
    fn drop(&mut self) {
        self.producer.abort();
    }
}

/// Handle to a live log watch.
///
/// The watch runs in a background task that decodes each log and forwards
/// it into the sink it was started with. It stops when the handle is
/// dropped or [`Subscription::unsubscribe`]d, when the sink is closed, or
/// when the backend stops serving logs.
#[derive(Debug)]
pub struct Subscription {
    err: Option<oneshot::Receiver<Error>>,
    quit: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl Subscription {
    pub(crate) fn forward<E>(stream: LogStream, sink: mpsc::Sender<DecodedLog<E>>) -> Self
    where
        E: SolEvent + Send + 'static,
    {
        let (err_tx, err) = oneshot::channel();
        let (quit, quit_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = quit_rx => {}
                result = forward_logs(stream, sink) => {
                    if let Err(e) = result {
                        let _ = err_tx.send(e);
                    }
                }
            }
        });

        Self { err: Some(err), quit: Some(quit), task }
    }

    /// Waits for the watch to fail and returns the error.
    ///
    /// Returns `None` if the watch ended without an error, or if the error
    /// was already taken.
    pub async fn err(&mut self) -> Option<Error> {
        let err = self.err.take()?;
        err.await.ok()
    }

    /// Whether the background task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the watch.
    pub fn unsubscribe(mut self) {
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(quit) = self.quit.take() {
            let _ = quit.send(());
        }
    }
}

async fn forward_logs<E: SolEvent>(
    mut stream: LogStream,
    sink: mpsc::Sender<DecodedLog<E>>,
) -> Result<()> {
    while let Some(batch) = stream.next().await {
        for log in batch {
            let event = decode_log::<E>(&log)?;
            if sink.send(event).await.is_err() {
                return Ok(());
            }
        }
    }
    Err(Error::SubscriptionClosed)
}
