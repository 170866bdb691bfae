use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An uploaded document: the saved file plus its extracted text, held in
/// process memory only. Contents do not survive a restart.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub filename: String,
    pub local_path: String,
    pub text: String,
    pub size: usize,
}

#[derive(Default)]
struct StoreInner {
    documents: HashMap<String, DocumentRecord>,
    /// Filename of the most recently uploaded document.
    current: Option<String>,
}

/// Uploads and chats from concurrent clients go through the same lock;
/// there is no per-user isolation beyond that.
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl DocumentStore {
    /// Insert a document keyed by its client-supplied filename. A new
    /// upload with the same filename silently overwrites the old record.
    /// The inserted document becomes the current one.
    pub async fn insert(&self, record: DocumentRecord) {
        let mut guard = self.inner.write().await;
        guard.current = Some(record.filename.clone());
        guard.documents.insert(record.filename.clone(), record);
    }

    pub async fn get(&self, filename: &str) -> Option<DocumentRecord> {
        let guard = self.inner.read().await;
        guard.documents.get(filename).cloned()
    }

    /// The most recently uploaded document, if any.
    pub async fn current(&self) -> Option<DocumentRecord> {
        let guard = self.inner.read().await;
        let name = guard.current.as_ref()?;
        guard.documents.get(name).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.documents.is_empty()
    }
}
