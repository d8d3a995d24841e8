//! Repository Integration Tests
//!
//! Tests for TaskRepository against an in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{visible, DomainError, Filter, Task, TaskStats, Theme};
    use crate::repository::{MemoryStore, TaskRepository, ThemeStore, STORAGE_KEY, THEME_KEY};
    use pretty_assertions::assert_eq;

    fn setup_repo() -> TaskRepository<MemoryStore> {
        TaskRepository::open(MemoryStore::new())
    }

    fn stored(repo: &TaskRepository<MemoryStore>) -> Option<String> {
        repo.store().inner().raw(STORAGE_KEY)
    }

    #[test]
    fn test_add_task() {
        let mut repo = setup_repo();

        let task = repo.add_task("  Write report ").expect("Failed to add");

        assert_eq!(task, Task::new(1, "Write report", false));
        assert_eq!(repo.list(), vec![task]);
    }

    #[test]
    fn test_ids_unique_and_increasing() {
        let mut repo = setup_repo();

        let ids: Vec<u32> = ["a", "b", "c", "d"]
            .iter()
            .map(|text| repo.add_task(text).unwrap().id)
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        let listed: Vec<u32> = repo.list().iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut repo = setup_repo();
        repo.add_task("a").unwrap();
        let b = repo.add_task("b").unwrap();

        assert!(repo.delete_task(b.id));
        let c = repo.add_task("c").unwrap();

        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_blank_text_is_rejected_without_writing() {
        let mut repo = setup_repo();
        repo.add_task("keep").unwrap();
        let before = stored(&repo);
        let writes = repo.store().inner().write_count();

        assert!(matches!(repo.add_task(""), Err(DomainError::Validation(_))));
        assert!(matches!(repo.add_task("   "), Err(DomainError::Validation(_))));

        assert_eq!(stored(&repo), before);
        assert_eq!(repo.store().inner().write_count(), writes);
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut repo = setup_repo();
        let task = repo.add_task("a").unwrap();

        assert!(repo.toggle_completion(task.id, true));
        let after_first = stored(&repo);
        assert!(repo.toggle_completion(task.id, true));

        assert_eq!(stored(&repo), after_first);
        assert!(repo.list()[0].completed);

        assert!(repo.toggle_completion(task.id, false));
        assert!(!repo.list()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut repo = setup_repo();
        repo.add_task("a").unwrap();
        let writes = repo.store().inner().write_count();

        assert!(!repo.toggle_completion(99, true));

        assert_eq!(repo.store().inner().write_count(), writes);
    }

    #[test]
    fn test_double_delete() {
        let mut repo = setup_repo();
        let a = repo.add_task("a").unwrap();
        repo.add_task("b").unwrap();

        assert!(repo.delete_task(a.id));
        assert_eq!(repo.list().len(), 1);
        assert!(!repo.delete_task(a.id));
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_reads_external_changes() {
        let mut repo = setup_repo();
        repo.add_task("mine").unwrap();

        // another tab rewrites the list behind our back
        repo.store().save(&[Task::new(1, "mine", false), Task::new(50, "theirs", false)]);

        assert!(repo.toggle_completion(50, true));
        let tasks = repo.list();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_open_seeds_allocator_from_legacy_data() {
        let memory = MemoryStore::with_value(
            STORAGE_KEY,
            r#"["buy milk", {"text":"pay bills","completed":true}, {"id":8,"text":"call","completed":false}]"#,
        );
        let mut repo = TaskRepository::open(memory);

        assert_eq!(repo.ids().current(), 8);
        assert_eq!(repo.add_task("new").unwrap().id, 9);

        // the first save rewrites every entry in canonical form
        let tasks = repo.list();
        assert_eq!(
            tasks,
            vec![
                Task::new(1, "buy milk", false),
                Task::new(2, "pay bills", true),
                Task::new(8, "call", false),
                Task::new(9, "new", false),
            ]
        );
        assert!(stored(&repo).unwrap().starts_with(r#"[{"id":1,"text":"buy milk","#));
    }

    #[test]
    fn test_load_does_not_write_back() {
        let raw = r#"["legacy"]"#;
        let repo = TaskRepository::open(MemoryStore::with_value(STORAGE_KEY, raw));

        assert_eq!(repo.list().len(), 1);
        assert_eq!(stored(&repo).as_deref(), Some(raw));
        assert_eq!(repo.store().inner().write_count(), 0);
    }

    #[test]
    fn test_corrupt_store_starts_empty() {
        let mut repo = TaskRepository::open(MemoryStore::with_value(STORAGE_KEY, "{oops"));

        assert!(repo.list().is_empty());
        assert_eq!(repo.add_task("fresh").unwrap().id, 1);
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_exhausted_ids_fail_without_writing() {
        let raw = r#"[{"id":4294967295,"text":"a","completed":false}]"#;
        let mut repo = TaskRepository::open(MemoryStore::with_value(STORAGE_KEY, raw));

        assert_eq!(repo.add_task("b"), Err(DomainError::IdsExhausted(u32::MAX)));

        assert_eq!(stored(&repo).as_deref(), Some(raw));
        assert_eq!(repo.store().inner().write_count(), 0);
        assert_eq!(repo.list(), vec![Task::new(u32::MAX, "a", false)]);
    }

    #[test]
    fn test_null_completed_entry_survives_add() {
        let raw = r#"["keep me",{"id":1,"text":"x","completed":null}]"#;
        let mut repo = TaskRepository::open(MemoryStore::with_value(STORAGE_KEY, raw));

        assert_eq!(repo.list().len(), 2);
        let added = repo.add_task("new").unwrap();

        assert_eq!(added.id, 2);
        let texts: Vec<String> = repo.list().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["keep me", "x", "new"]);
    }

    #[test]
    fn test_failed_write_returns_task_but_does_not_persist() {
        let mut repo = setup_repo();
        repo.store().inner().set_fail_writes(true);

        let task = repo.add_task("ephemeral").expect("write failures are not surfaced");

        assert_eq!(task.id, 1);
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_duplicate_ids_act_on_first_match() {
        let memory = MemoryStore::with_value(STORAGE_KEY, r#"[{"id":2,"text":"a","completed":false},"b"]"#);
        let repo = TaskRepository::open(memory);

        assert!(repo.toggle_completion(2, true));
        let tasks = repo.list();
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);

        assert!(repo.delete_task(2));
        assert_eq!(repo.list(), vec![Task::new(2, "b", false)]);
    }

    #[test]
    fn test_view_and_stats_follow_repository() {
        let mut repo = setup_repo();
        let a = repo.add_task("a").unwrap();
        repo.add_task("b").unwrap();
        repo.add_task("c").unwrap();
        repo.toggle_completion(a.id, true);

        let tasks = repo.list();
        let pending: Vec<&str> = visible(&tasks, Filter::Pending).map(|t| t.text.as_str()).collect();
        assert_eq!(pending, vec!["b", "c"]);

        let stats = TaskStats::compute(&tasks);
        assert_eq!((stats.total, stats.completed, stats.pending), (3, 1, 2));
        assert_eq!(stats.progress_percent, 33);
    }

    #[test]
    fn test_theme_and_tasks_share_store_without_interference() {
        let memory = MemoryStore::new();
        let mut repo = TaskRepository::open(&memory);
        let themes = ThemeStore::new(&memory);

        repo.add_task("a").unwrap();
        themes.save(Theme::Dark);

        assert_eq!(memory.raw(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(repo.list().len(), 1);
        assert_eq!(themes.load(), Some(Theme::Dark));
    }
}
