use crate::ui::ViewId;
use std::sync::Arc;
use tokio::sync::watch;

/// A text slot on screen. Clones share the same text.
#[derive(Clone, Debug)]
pub struct TextField {
    id: ViewId,
    text_tx: Arc<watch::Sender<String>>,
}

impl TextField {
    pub fn new(id: ViewId, text: impl Into<String>) -> Self {
        TextField {
            id,
            text_tx: Arc::new(watch::Sender::new(text.into())),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn text(&self) -> String {
        self.text_tx.borrow().clone()
    }

    /// Replaces the text, notifying subscribers only if it differs.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.text_tx.send_if_modified(|current| {
            if *current == text {
                return false;
            }
            *current = text;
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text_tx.subscribe()
    }
}
