use std::cell::RefCell;

use taskchat_types::{Message, MessageId, UserQuery};

use crate::clock::Clock;
use crate::error::ChatError;
use crate::input::InputProps;
use crate::transport::ChatTransport;

/// Chat panel state: the message list, the draft and the busy flag.
///
/// Messages are append-only. While a request is outstanding the panel is
/// busy and refuses further submissions, which is the only thing keeping
/// requests from overlapping.
#[derive(Debug, Default)]
pub struct ChatPanel {
    messages: Vec<Message>,
    draft: String,
    busy: bool,
    last_error: Option<String>,
    revision: u64,
}

/// A submission that has been accepted and is waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub message_id: MessageId,
    pub query: UserQuery,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Description of the most recent failed request, cleared on next submit
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Bumped on every append; views scroll to the newest message when it
    /// differs from what they last rendered
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn input_props(&self) -> InputProps {
        InputProps::new(self.draft.clone()).disabled(self.busy)
    }

    pub fn can_submit(&self) -> bool {
        self.input_props().submit_enabled()
    }

    /// Accept the current draft.
    ///
    /// Returns `None` without touching anything when the draft is blank or
    /// a request is already in flight. Otherwise appends the user message,
    /// clears the draft and marks the panel busy.
    pub fn begin_submit(&mut self, now_ms: i64) -> Option<PendingQuery> {
        if !self.can_submit() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let message_id = self.next_id(now_ms);
        self.push(Message::user(message_id, text.clone()));
        self.busy = true;
        self.last_error = None;

        log::debug!("Submitting message {} ({} chars)", message_id, text.len());

        Some(PendingQuery {
            message_id,
            query: UserQuery::new(text),
        })
    }

    /// Settle the outstanding request
    pub fn complete_submit(&mut self, result: Result<String, ChatError>, now_ms: i64) {
        match result {
            Ok(reply) => {
                let id = self.next_id(now_ms);
                self.push(Message::bot(id, reply));
            }
            Err(e) => {
                log::error!("Error sending message: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        self.busy = false;
    }

    fn next_id(&self, now_ms: i64) -> MessageId {
        match self.messages.last() {
            Some(last) if now_ms <= last.id => last.id + 1,
            _ => now_ms,
        }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }
}

/// Submit the panel's draft and wait for the reply.
///
/// Issues at most one request. The `RefCell` is only borrowed around the
/// state transitions, never across the await, so views can keep reading
/// the panel while the request is outstanding. Returns whether a request
/// was sent; failures end up in `last_error` and are never returned.
pub async fn submit<T, C>(panel: &RefCell<ChatPanel>, transport: &T, clock: &C) -> bool
where
    T: ChatTransport + ?Sized,
    C: Clock + ?Sized,
{
    submit_with(panel, transport, clock, |_| {}).await
}

/// Like [`submit`], calling `on_update` once the user message is accepted
/// and again after the reply settles.
///
/// `on_update` cannot abort the exchange: an accepted draft is always sent
/// and the busy flag always cleared.
pub async fn submit_with<T, C, F>(
    panel: &RefCell<ChatPanel>,
    transport: &T,
    clock: &C,
    mut on_update: F,
) -> bool
where
    T: ChatTransport + ?Sized,
    C: Clock + ?Sized,
    F: FnMut(&ChatPanel),
{
    let pending = panel.borrow_mut().begin_submit(clock.now_ms());
    let Some(pending) = pending else {
        return false;
    };
    on_update(&panel.borrow());

    let result = transport.send(&pending.query).await;
    panel.borrow_mut().complete_submit(result, clock.now_ms());
    on_update(&panel.borrow());
    true
}
