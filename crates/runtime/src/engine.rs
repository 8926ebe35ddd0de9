use std::time::Duration;

use core_sim::{Session, SessionSnapshot, TradeAction};
use rand::Rng;
use thiserror::Error;
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    time::{self, Instant},
};
use tracing::{debug, info};

use crate::{
    events::{SessionUpdate, UpdateCause},
    lifecycle::SessionPhase,
};

const COMMAND_QUEUE_DEPTH: usize = 64;
const UPDATE_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session task is no longer running")]
    Closed,
}

#[derive(Debug)]
enum SessionCommand {
    Trade {
        action: TradeAction,
        index: usize,
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Owns a session until `start` hands it to its driver task.
pub struct SessionEngine<R> {
    session: Session<R>,
    tick_interval: Duration,
    phase: SessionPhase,
}

impl<R> SessionEngine<R>
where
    R: Rng + Send + 'static,
{
    pub fn new(session: Session<R>) -> Self {
        let tick_interval = Duration::from_millis(session.config().tick_interval_ms);
        Self {
            session,
            tick_interval,
            phase: SessionPhase::Idle,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Spawns the driver task on the current tokio runtime. Ticks and commands
    /// are handled one at a time, in arrival order, by that single task.
    pub fn start(self) -> SessionHandle {
        let phase = self.phase.start();
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (updates_tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);

        info!(
            phase = phase.as_str(),
            tick_interval_ms = self.tick_interval.as_millis() as u64,
            stocks = self.session.portfolio().catalog().len(),
            cash = self.session.portfolio().cash(),
            "session starting"
        );
        tokio::spawn(drive(
            self.session,
            self.tick_interval,
            commands_rx,
            updates_tx.clone(),
        ));

        SessionHandle {
            commands: commands_tx,
            updates: updates_tx,
            phase,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    updates: broadcast::Sender<SessionUpdate>,
    phase: SessionPhase,
}

impl SessionHandle {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionUpdate> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply| SessionCommand::Snapshot { reply }).await
    }

    /// Snapshot after the buy was applied, or unchanged state if it was not
    /// possible.
    pub async fn buy(&self, index: usize) -> Result<SessionSnapshot, SessionError> {
        self.trade(TradeAction::Buy, index).await
    }

    pub async fn sell(&self, index: usize) -> Result<SessionSnapshot, SessionError> {
        self.trade(TradeAction::Sell, index).await
    }

    async fn trade(
        &self,
        action: TradeAction,
        index: usize,
    ) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply| SessionCommand::Trade {
            action,
            index,
            reply,
        })
        .await
    }

    async fn request(
        &self,
        command: impl FnOnce(oneshot::Sender<SessionSnapshot>) -> SessionCommand,
    ) -> Result<SessionSnapshot, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(command(reply_tx))
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }
}

async fn drive<R: Rng>(
    mut session: Session<R>,
    tick_interval: Duration,
    mut commands: mpsc::Receiver<SessionCommand>,
    updates: broadcast::Sender<SessionUpdate>,
) {
    let mut ticker = time::interval_at(Instant::now() + tick_interval, tick_interval);
    publish(&updates, UpdateCause::Started, &session);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let outcome = session.tick();
                let cause = if outcome.repriced {
                    debug!(
                        net_liquidation_value = session.net_liquidation_value(),
                        "prices updated"
                    );
                    UpdateCause::PricesUpdated
                } else {
                    UpdateCause::Tick
                };
                publish(&updates, cause, &session);
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("all session handles dropped, stopping driver");
                    return;
                };
                apply_command(&mut session, command, &updates);
            }
        }
    }
}

fn apply_command<R: Rng>(
    session: &mut Session<R>,
    command: SessionCommand,
    updates: &broadcast::Sender<SessionUpdate>,
) {
    match command {
        SessionCommand::Snapshot { reply } => {
            let _ = reply.send(session.snapshot());
        }
        SessionCommand::Trade {
            action,
            index,
            reply,
        } => {
            let outcome = match action {
                TradeAction::Buy => session.try_buy(index),
                TradeAction::Sell => session.try_sell(index),
            };
            match outcome {
                Ok(record) => {
                    debug!(
                        index,
                        action = record.action.as_str(),
                        amount = record.amount,
                        balance = record.balance_after,
                        "trade executed"
                    );
                    publish(updates, UpdateCause::Trade, session);
                }
                Err(rejection) => {
                    debug!(index, action = action.as_str(), %rejection, "trade rejected");
                }
            }
            let _ = reply.send(session.snapshot());
        }
    }
}

fn publish<R: Rng>(
    updates: &broadcast::Sender<SessionUpdate>,
    cause: UpdateCause,
    session: &Session<R>,
) {
    // Err only means nobody is subscribed right now.
    let _ = updates.send(SessionUpdate::new(cause, session.snapshot()));
}
