use chrono::{Duration, Utc};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::sync::Arc;
use uuid::Uuid;

use crate::data_access::store_error::StoreError;
use crate::{task::Task, task_priority::TaskPriority, task_status::TaskStatus};

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");

/// Thin handle to the redb file. Cloneable (Arc inside). Records are stored
/// as JSON keyed by the task's UUID bytes.
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Open (or create) the database at the given path.
    /// Creates the tasks table if it doesn't exist.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        let _ = write_txn.open_table(TASKS_TABLE)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    pub fn create_task(&self, task: &Task) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = serde_json::to_vec(task)?;
            let id_bytes = task.id.as_bytes();
            tasks_table.insert(id_bytes.as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let id_bytes = id.as_bytes();
        match tasks_table.get(id_bytes.as_slice())? {
            Some(data) => {
                let task: Task = serde_json::from_slice(data.value())?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            let task: Task = serde_json::from_slice(value.value())?;
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Overwrite a record in place. The caller guarantees the id exists.
    pub fn update_task(&self, task: &Task) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = serde_json::to_vec(task)?;
            let id_bytes = task.id.as_bytes();
            tasks_table.insert(id_bytes.as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn delete_task(&self, id: Uuid) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let id_bytes = id.as_bytes();
            let result = tasks_table.remove(id_bytes.as_slice())?;
            deleted = result.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }

    pub fn count_tasks(&self) -> Result<usize, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;
        Ok(tasks_table.len()? as usize)
    }

    /// Seed sample tasks if the store is empty. Returns how many were created.
    pub fn ensure_sample_tasks(&self) -> Result<usize, StoreError> {
        if self.count_tasks()? > 0 {
            return Ok(0);
        }

        let now = Utc::now();
        let samples = [
            (
                "Complete project proposal",
                "Draft and review the Q4 project proposal document",
                TaskPriority::High,
                now + Duration::days(5),
                TaskStatus::Open,
            ),
            (
                "Team meeting preparation",
                "Prepare agenda and materials for weekly team sync",
                TaskPriority::Medium,
                now + Duration::days(2),
                TaskStatus::InProgress,
            ),
            (
                "Update documentation",
                "Review and update API documentation",
                TaskPriority::Low,
                now + Duration::days(10),
                TaskStatus::Open,
            ),
        ];

        for (title, description, priority, due_date, status) in &samples {
            let task = Task {
                id: Uuid::new_v4(),
                title: title.to_string(),
                description: Some(description.to_string()),
                priority: *priority,
                due_date: *due_date,
                status: *status,
                created_at: now,
                updated_at: now,
            };
            self.create_task(&task)?;
        }

        Ok(samples.len())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Temp database that cleans itself up when the TempDir drops.
    fn temp_db() -> (DataContext, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.redb");
        let data = DataContext::new(path.to_str().unwrap()).unwrap();
        (data, dir)
    }

    fn sample_task(title: &str) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            priority: TaskPriority::Medium,
            due_date: now + Duration::days(1),
            status: TaskStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn round_trip_single_task() {
        let (data, _dir) = temp_db();

        let task = sample_task("Write release notes");
        data.create_task(&task).unwrap();

        let loaded = data.get_task(task.id).unwrap().unwrap();
        assert_eq!(loaded.id, task.id);
        assert_eq!(loaded.title, "Write release notes");
        assert_eq!(loaded.status, TaskStatus::Open);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let (data, _dir) = temp_db();
        assert!(data.get_task(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn update_overwrites_record() {
        let (data, _dir) = temp_db();

        let mut task = sample_task("Old title");
        data.create_task(&task).unwrap();

        task.title = "New title".to_string();
        task.status = TaskStatus::Done;
        data.update_task(&task).unwrap();

        let loaded = data.get_task(task.id).unwrap().unwrap();
        assert_eq!(loaded.title, "New title");
        assert_eq!(loaded.status, TaskStatus::Done);
        assert_eq!(data.count_tasks().unwrap(), 1);
    }

    #[test]
    fn delete_reports_whether_record_existed() {
        let (data, _dir) = temp_db();

        let task = sample_task("Doomed");
        data.create_task(&task).unwrap();

        assert!(data.delete_task(task.id).unwrap());
        assert!(!data.delete_task(task.id).unwrap());
        assert!(data.get_task(task.id).unwrap().is_none());
    }

    #[test]
    fn seed_once_then_noop() {
        let (data, _dir) = temp_db();

        assert_eq!(data.ensure_sample_tasks().unwrap(), 3);
        assert_eq!(data.count_tasks().unwrap(), 3);

        // Seed again — should be a no-op
        assert_eq!(data.ensure_sample_tasks().unwrap(), 0);
        assert_eq!(data.count_tasks().unwrap(), 3);
    }
}
