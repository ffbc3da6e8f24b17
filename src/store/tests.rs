//! Store Module Tests
//!
//! Validates the translation between the backing JSON file and the in-memory
//! collection.
//!
//! ## Test Scopes
//! - **Load**: missing-file default, BOM tolerance, parse failures.
//! - **Save**: pretty-printed output, whole-file overwrite, round-trip
//!   idempotence.

#[cfg(test)]
mod tests {
    use crate::store::error::StoreError;
    use crate::store::file::StudentStore;
    use crate::students::types::Student;
    use serde_json::json;
    use tempfile::TempDir;

    fn student(value: serde_json::Value) -> Student {
        serde_json::from_value(value).unwrap()
    }

    fn store_in(dir: &TempDir) -> StudentStore {
        StudentStore::new(dir.path().join("StudentsData.json"))
    }

    // ============================================================
    // LOAD TESTS
    // ============================================================

    #[tokio::test]
    async fn test_load_missing_file_is_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let students = store.load().await.unwrap();
        assert!(students.is_empty(), "Missing file should load as empty");
    }

    #[tokio::test]
    async fn test_load_parses_array_of_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(
            store.path(),
            r#"[{"sid": "S1", "name": "Ann"}, {"sid": "S2", "name": "Ben"}]"#,
        )
        .await
        .unwrap();

        let students = store.load().await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].sid(), Some("S1"));
        assert_eq!(students[1].sid(), Some("S2"));
    }

    #[tokio::test]
    async fn test_load_strips_leading_bom() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "\u{feff}[{\"sid\": \"S1\"}]")
            .await
            .unwrap();

        let students = store.load().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].sid(), Some("S1"));
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "not json at all").await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }), "got: {err:?}");
    }

    // ============================================================
    // SAVE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_save_pretty_prints_with_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let students = vec![student(json!({"sid": "S1", "name": "Ann"}))];
        store.save(&students).await.unwrap();

        let text = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(text.starts_with("[\n  {"), "got: {text}");
        assert!(text.contains("\n    \"sid\": \"S1\""), "got: {text}");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let many: Vec<Student> = (0..5)
            .map(|i| student(json!({"sid": format!("S{i}")})))
            .collect();
        store.save(&many).await.unwrap();
        store
            .save(&[student(json!({"sid": "only"}))])
            .await
            .unwrap();

        let students = store.load().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].sid(), Some("only"));
    }

    #[tokio::test]
    async fn test_save_load_save_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let students = vec![
            student(json!({"sid": "S1", "name": "Ann", "subjects": ["Math"]})),
            student(json!({"sid": "S2", "name": "Ben", "age": 21})),
        ];
        store.save(&students).await.unwrap();
        let first = tokio::fs::read(store.path()).await.unwrap();

        let reloaded = store.load().await.unwrap();
        store.save(&reloaded).await.unwrap();
        let second = tokio::fs::read(store.path()).await.unwrap();

        assert_eq!(first, second, "save(load()) should be idempotent");
    }

    #[tokio::test]
    async fn test_bom_is_not_rewritten_on_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "\u{feff}[{\"sid\": \"S1\"}]")
            .await
            .unwrap();

        let students = store.load().await.unwrap();
        store.save(&students).await.unwrap();

        let text = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(!text.starts_with('\u{feff}'), "BOM should be gone after save");
    }

    // ============================================================
    // WRITE LOCK TESTS
    // ============================================================

    #[tokio::test]
    async fn test_write_guard_disabled_by_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.write_guard().await.is_none());
    }

    #[tokio::test]
    async fn test_write_guard_enabled_with_serialized_writes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).with_serialized_writes();

        assert!(store.write_guard().await.is_some());
    }
}
