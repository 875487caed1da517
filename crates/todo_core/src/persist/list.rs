//! `ListStore` <-> `[{ "text": .., "done": .. }, ..]`.

use super::JsonPersist;
use crate::model::task::{Task, TaskField};
use crate::store::list_store::ListStore;
use log::debug;
use serde_json::Value;

impl JsonPersist for ListStore {
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self.tasks())
    }

    /// Non-object elements are skipped. Missing or mistyped fields fall back
    /// to `""` / `false`.
    fn apply_json(&mut self, items: Vec<Value>) {
        let total = items.len();
        let tasks: Vec<Task> = items.iter().filter_map(task_from_json).collect();
        if tasks.len() != total {
            debug!(
                "event=list_load module=persist status=partial skipped={} loaded={}",
                total - tasks.len(),
                tasks.len()
            );
        }
        self.reset(tasks);
    }
}

fn task_from_json(value: &Value) -> Option<Task> {
    let obj = value.as_object()?;
    let text = obj
        .get(TaskField::Text.role_name())
        .and_then(Value::as_str)
        .unwrap_or_default();
    let done = obj
        .get(TaskField::Done.role_name())
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Some(Task::new(text, done))
}

#[cfg(test)]
mod tests {
    use super::task_from_json;
    use crate::model::task::Task;
    use crate::persist::JsonPersist;
    use crate::store::list_store::ListStore;
    use serde_json::json;

    #[test]
    fn to_json_uses_role_names_in_store_order() {
        let mut store = ListStore::new();
        store.add("water plants");
        store.add_task("call mom", true);
        assert_eq!(
            store.to_json().unwrap(),
            json!([
                { "text": "call mom", "done": true },
                { "text": "water plants", "done": false },
            ])
        );
    }

    #[test]
    fn lenient_fields_fall_back_to_defaults() {
        assert_eq!(
            task_from_json(&json!({ "done": "yes" })),
            Some(Task::new("", false))
        );
        assert_eq!(task_from_json(&json!(["text", true])), None);
        assert_eq!(task_from_json(&json!(null)), None);
    }
}
