//! The assistant chat widget's state machine.
//!
//! The session itself is plain data; [`expand`] and [`send`] drive it through
//! a [`ChatStore`] so the same flow runs against a `Signal` in the app and a
//! `RefCell` in tests.

use std::cell::RefCell;

use api::backend::DashboardBackend;
use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

const INIT_FAILED: &str = "Error connecting.";
const SEND_FAILED: &str = "Error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ChatPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("a reply is still pending")]
    Busy,
    #[error("message is empty")]
    EmptyMessage,
    #[error("the conversation has not started")]
    NotStarted,
}

/// Identifies the conversation a pending request belongs to.
///
/// A reply carrying the ticket of a conversation that has since been reset is
/// thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    phase: ChatPhase,
    expanded: bool,
    conversation: u64,
}

impl ChatSession {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True while a request is outstanding and the loading row should show.
    pub fn is_busy(&self) -> bool {
        self.phase.is_loading() || self.phase.is_awaiting_response()
    }

    /// Opens the widget. Returns a ticket only the first time, when the
    /// conversation still has to be initialized.
    pub fn expand(&mut self) -> Option<Ticket> {
        self.expanded = true;
        if !self.phase.is_uninitialized() {
            return None;
        }
        self.phase = ChatPhase::Loading;
        Some(self.ticket())
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Flips the widget open or closed. Returns an init ticket when opening
    /// an uninitialized conversation.
    pub fn toggle(&mut self) -> Option<Ticket> {
        if self.expanded {
            self.collapse();
            None
        } else {
            self.expand()
        }
    }

    /// Starts a new conversation. Replies still in flight for the old one are
    /// dropped when they arrive.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.phase = ChatPhase::Uninitialized;
        self.conversation += 1;
    }

    pub fn finish_init(&mut self, ticket: Ticket, greeting: Result<String, ApiError>) {
        if ticket != self.ticket() {
            return;
        }
        let text = match greeting {
            Ok(text) => text,
            Err(e) => {
                warn!("chat init failed: {}", e);
                INIT_FAILED.to_string()
            }
        };
        self.transcript.push(ChatMessage::bot(text));
        self.phase = ChatPhase::Ready;
    }

    /// Appends the user's message and waits for a reply.
    ///
    /// Returns the trimmed text to send.
    pub fn begin_send(&mut self, input: &str) -> Result<(Ticket, String), ChatError> {
        if self.phase.is_uninitialized() {
            return Err(ChatError::NotStarted);
        }
        if self.is_busy() {
            return Err(ChatError::Busy);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.transcript.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        self.phase = ChatPhase::AwaitingResponse;
        Ok((self.ticket(), text.to_string()))
    }

    pub fn finish_send(&mut self, ticket: Ticket, reply: Result<String, ApiError>) {
        if ticket != self.ticket() {
            return;
        }
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                warn!("chat reply failed: {}", e);
                SEND_FAILED.to_string()
            }
        };
        self.transcript.push(ChatMessage::bot(text));
        self.phase = ChatPhase::Ready;
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.conversation)
    }
}

/// Somewhere a [`ChatSession`] can be mutated in place.
pub trait ChatStore {
    fn update<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> R;
}

impl ChatStore for RefCell<ChatSession> {
    fn update<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl ChatStore for Signal<ChatSession> {
    fn update<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

/// Opens the widget, fetching the greeting on first use.
pub async fn expand<S, B>(store: &S, backend: &B)
where
    S: ChatStore,
    B: DashboardBackend,
{
    if let Some(ticket) = store.update(ChatSession::expand) {
        initialize(store, backend, ticket).await;
    }
}

/// Like [`expand`], but closes an open widget instead.
pub async fn toggle<S, B>(store: &S, backend: &B)
where
    S: ChatStore,
    B: DashboardBackend,
{
    if let Some(ticket) = store.update(ChatSession::toggle) {
        initialize(store, backend, ticket).await;
    }
}

/// Clears the transcript and, if the widget is open, greets again.
pub async fn restart<S, B>(store: &S, backend: &B)
where
    S: ChatStore,
    B: DashboardBackend,
{
    let ticket = store.update(|session| {
        session.reset();
        if session.is_expanded() {
            session.expand()
        } else {
            None
        }
    });
    if let Some(ticket) = ticket {
        initialize(store, backend, ticket).await;
    }
}

/// Sends one message and records the reply.
pub async fn send<S, B>(store: &S, backend: &B, input: &str) -> Result<(), ChatError>
where
    S: ChatStore,
    B: DashboardBackend,
{
    let (ticket, text) = store.update(|session| session.begin_send(input))?;
    let reply = backend.chat(&text).await;
    store.update(|session| session.finish_send(ticket, reply));
    Ok(())
}

async fn initialize<S, B>(store: &S, backend: &B, ticket: Ticket)
where
    S: ChatStore,
    B: DashboardBackend,
{
    info!("starting chat session");
    let greeting = backend.init_chat().await;
    store.update(|session| session.finish_init(ticket, greeting));
}
