use tokio::sync::RwLock;

/// Append-only record sequence. No update, no delete.
///
/// Appends serialize on the write lock, so any snapshot returned by
/// [`RecordLog::list`] is a prefix of the final append order.
#[derive(Debug)]
pub struct RecordLog<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for RecordLog<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> RecordLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` and hand it back unchanged.
    pub async fn append(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
