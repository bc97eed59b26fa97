use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed::seed_activities;
use crate::models::ActivityTable;

// Shared handle to the in-memory activity table.
// Every mutation runs inside one write guard, so a check followed by an
// update (capacity, membership) cannot interleave with another writer.
#[derive(Clone, Debug, Default)]
pub struct ActivityStore {
    table: Arc<RwLock<ActivityTable>>,
}

impl ActivityStore {
    pub fn new(table: ActivityTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    // Copy of the whole table as of now.
    pub async fn snapshot(&self) -> ActivityTable {
        self.table.read().await.clone()
    }

    pub async fn read<R>(&self, f: impl FnOnce(&ActivityTable) -> R) -> R {
        let guard = self.table.read().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut ActivityTable) -> R) -> R {
        let mut guard = self.table.write().await;
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_same_table() {
        let store = ActivityStore::seeded();
        let other = store.clone();

        other
            .update(|table| {
                table
                    .get_mut("Chess Club")
                    .unwrap()
                    .participants
                    .push("new@mergington.edu".to_string())
            })
            .await;

        let count = store
            .read(|table| table.get("Chess Club").unwrap().participants.len())
            .await;
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn snapshot_is_detached() {
        let store = ActivityStore::seeded();
        let mut snapshot = store.snapshot().await;
        snapshot.get_mut("Chess Club").unwrap().participants.clear();

        let count = store
            .read(|table| table.get("Chess Club").unwrap().participants.len())
            .await;
        assert_eq!(count, 2);
    }
}
