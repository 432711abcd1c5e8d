use super::*;
use crate::board::store::MemoryTaskStore;

fn board() -> Board<MemoryTaskStore> {
    Board::new(MemoryTaskStore::new(), BoardSettings::default())
}

async fn create(board: &Board<MemoryTaskStore>, title: &str, status: &str) -> Task {
    board
        .create_task(CreateTaskOptions {
            title: title.to_string(),
            status: Some(status.to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
}

async fn titles(board: &Board<MemoryTaskStore>, status: &str) -> Vec<String> {
    board
        .group_tasks(status)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect()
}

fn reorder(group: &str, target_index: usize) -> ReorderTaskOptions {
    ReorderTaskOptions {
        group: group.to_string(),
        target_index,
        expected_task_ids: Vec::new(),
    }
}

#[tokio::test]
async fn test_create_appends_to_tail() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;

    assert_eq!(a.order, 1000.0);
    assert_eq!(b.order, 2000.0);
    assert_eq!(c.order, 3000.0);
    assert_eq!(titles(&board, "backlog").await, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_create_uses_default_status() {
    let board = board();
    let task = board
        .create_task(CreateTaskOptions {
            title: "  Write docs  ".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(task.status, "backlog");
    assert_eq!(task.title, "Write docs");
    assert!(Uuid::parse_str(&task.id).is_ok());
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let err = board()
        .create_task(CreateTaskOptions {
            title: "   ".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::TitleRequired));
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let err = board()
        .create_task(CreateTaskOptions {
            title: "x".to_string(),
            status: Some("archived".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::InvalidStatus(_)));
}

#[tokio::test]
async fn test_get_task_errors() {
    let board = board();
    assert!(matches!(
        board.get_task("not-a-uuid").await.unwrap_err(),
        TaskError::InvalidTaskId(_)
    ));
    let missing = Uuid::new_v4().to_string();
    assert!(matches!(
        board.get_task(&missing).await.unwrap_err(),
        TaskError::TaskNotFound(_)
    ));
}

#[tokio::test]
async fn test_reorder_between_neighbours() {
    let board = board();
    let _a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;

    let result = board.reorder_task(&c.id, reorder("backlog", 1)).await.unwrap();

    assert_eq!(result.task.order, 1500.0);
    assert!(!result.renumbered);
    assert_eq!(titles(&board, "backlog").await, ["A", "C", "B"]);
}

#[tokio::test]
async fn test_reorder_to_head_and_tail() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;

    let head = board.reorder_task(&c.id, reorder("backlog", 0)).await.unwrap();
    assert_eq!(head.task.order, 0.0);

    let tail = board.reorder_task(&a.id, reorder("backlog", 2)).await.unwrap();
    assert_eq!(tail.task.order, 3000.0);
    assert_eq!(titles(&board, "backlog").await, ["C", "B", "A"]);
}

#[tokio::test]
async fn test_reorder_moves_between_columns() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    let _d = create(&board, "D", "completed").await;

    let result = board
        .reorder_task(&a.id, reorder("completed", 0))
        .await
        .unwrap();

    assert_eq!(result.task.status, "completed");
    assert_eq!(result.task.order, 0.0);
    assert_eq!(titles(&board, "completed").await, ["A", "D"]);
    // The source column is not compacted
    let backlog = board.group_tasks("backlog").await.unwrap();
    assert_eq!(backlog.len(), 1);
    assert_eq!(backlog[0].order, b.order);
}

#[tokio::test]
async fn test_reorder_into_empty_column() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let result = board
        .reorder_task(&a.id, reorder("in-progress", 0))
        .await
        .unwrap();
    assert_eq!(result.task.order, 1000.0);
    assert_eq!(result.task.status, "in-progress");
}

#[tokio::test]
async fn test_reorder_index_out_of_range() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;

    // Without the moved task the column holds one task, so 2 is past the end
    let err = board.reorder_task(&a.id, reorder("backlog", 2)).await.unwrap_err();
    assert!(matches!(err, TaskError::InvalidIndex { index: 2, len: 1 }));
}

#[tokio::test]
async fn test_reorder_rejects_stale_view() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;

    let mut options = reorder("backlog", 1);
    options.expected_task_ids = vec![c.id.clone(), b.id.clone()];
    let err = board.reorder_task(&a.id, options).await.unwrap_err();
    assert!(matches!(err, TaskError::StaleView(ref g) if g == "backlog"));
    assert_eq!(titles(&board, "backlog").await, ["A", "B", "C"]);

    let mut options = reorder("backlog", 1);
    options.expected_task_ids = vec![b.id, c.id];
    assert!(board.reorder_task(&a.id, options).await.is_ok());
}

#[tokio::test]
async fn test_stale_view_wins_over_out_of_range_index() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;
    // The client saw [B, C] around A, then C was deleted elsewhere
    let seen = vec![b.id.clone(), c.id.clone()];
    board.delete_task(&c.id).await.unwrap();

    let mut options = reorder("backlog", 2);
    options.expected_task_ids = seen;
    let err = board.reorder_task(&a.id, options).await.unwrap_err();
    assert!(matches!(err, TaskError::StaleView(ref g) if g == "backlog"));
}

#[tokio::test]
async fn test_create_rejects_multiline_title() {
    let err = board()
        .create_task(CreateTaskOptions {
            title: "Line one\nLine two".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::InvalidTitle));
}

#[tokio::test]
async fn test_update_rejects_multiline_title() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let err = board
        .update_task(
            &a.id,
            UpdateTaskOptions {
                title: Some("A\rB".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::InvalidTitle));
    assert_eq!(board.get_task(&a.id).await.unwrap().title, "A");
}

#[tokio::test]
async fn test_reorder_renumbers_when_keys_run_out() {
    let board = board();
    let _a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;

    // Keep inserting right after A until the gap between A and its successor is exhausted
    let mut renumbered = false;
    for i in 0..200 {
        let task = create(&board, &format!("N{i}"), "backlog").await;
        let result = board.reorder_task(&task.id, reorder("backlog", 1)).await.unwrap();
        if result.renumbered {
            renumbered = true;
            break;
        }
    }
    assert!(renumbered);

    let column = board.group_tasks("backlog").await.unwrap();
    let keys: Vec<f64> = column.iter().map(|t| t.order).collect();
    assert!(crate::ordering::is_strictly_increasing(&keys));
    assert_eq!(column[0].title, "A");
    assert_eq!(column.last().unwrap().title, "B");
}

#[tokio::test]
async fn test_reorder_accepts_status_spelling_variants() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let result = board
        .reorder_task(&a.id, reorder("In-Progress", 0))
        .await
        .unwrap();
    assert_eq!(result.task.status, "in-progress");
}

#[tokio::test]
async fn test_update_fields() {
    let board = board();
    let a = create(&board, "A", "backlog").await;

    let updated = board
        .update_task(
            &a.id,
            UpdateTaskOptions {
                title: Some("A2".to_string()),
                description: Some("More".to_string()),
                assignee: Some("alice".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "A2");
    assert_eq!(updated.description, "More");
    assert_eq!(updated.assignee.as_deref(), Some("alice"));
    assert_eq!(updated.order, a.order);

    let cleared = board
        .update_task(
            &a.id,
            UpdateTaskOptions {
                assignee: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.assignee, None);
}

#[tokio::test]
async fn test_update_status_moves_to_tail() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let _d = create(&board, "D", "completed").await;

    let moved = board
        .update_task(
            &a.id,
            UpdateTaskOptions {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.status, "completed");
    assert_eq!(moved.order, 2000.0);
    assert_eq!(titles(&board, "completed").await, ["D", "A"]);
}

#[tokio::test]
async fn test_update_same_status_keeps_order() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;
    let updated = board
        .update_task(
            &a.id,
            UpdateTaskOptions {
                status: Some("backlog".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.order, a.order);
}

#[tokio::test]
async fn test_delete_does_not_compact() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;

    assert_eq!(board.delete_task(&b.id).await.unwrap(), b.id);

    let column = board.group_tasks("backlog").await.unwrap();
    let keys: Vec<f64> = column.iter().map(|t| t.order).collect();
    assert_eq!(keys, [a.order, c.order]);
    assert!(matches!(
        board.delete_task(&b.id).await.unwrap_err(),
        TaskError::TaskNotFound(_)
    ));
}

#[tokio::test]
async fn test_renumber_group_keeps_relative_order() {
    let board = board();
    let a = create(&board, "A", "backlog").await;
    let _b = create(&board, "B", "backlog").await;
    let c = create(&board, "C", "backlog").await;
    board.reorder_task(&c.id, reorder("backlog", 0)).await.unwrap();
    board.reorder_task(&a.id, reorder("backlog", 1)).await.unwrap();

    let before = titles(&board, "backlog").await;
    let renumbered = board.renumber_group("backlog").await.unwrap();
    let keys: Vec<f64> = renumbered.iter().map(|t| t.order).collect();

    assert_eq!(keys, [1000.0, 2000.0, 3000.0]);
    assert_eq!(titles(&board, "backlog").await, before);
}

#[tokio::test]
async fn test_list_tasks_orders_by_column_then_key() {
    let board = board();
    let _done = create(&board, "Done", "completed").await;
    let _doing = create(&board, "Doing", "in-progress").await;
    let _b = create(&board, "B", "backlog").await;
    let a = create(&board, "A", "backlog").await;
    board.reorder_task(&a.id, reorder("backlog", 0)).await.unwrap();

    let all: Vec<String> = board
        .list_tasks(TaskFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(all, ["A", "B", "Doing", "Done"]);
}

#[tokio::test]
async fn test_list_tasks_filters() {
    let board = board();
    let mine = board
        .create_task(CreateTaskOptions {
            title: "Mine".to_string(),
            assignee: Some("alice".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let _other = create(&board, "Other", "backlog").await;
    let _done = create(&board, "Done", "completed").await;

    let by_assignee = board
        .list_tasks(TaskFilter {
            assignee: Some("alice".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_assignee, vec![mine]);

    let by_status = board
        .list_tasks(TaskFilter {
            status: Some("completed".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].title, "Done");
}

#[tokio::test]
async fn test_list_groups_counts() {
    let board = board();
    create(&board, "A", "backlog").await;
    create(&board, "B", "backlog").await;
    create(&board, "C", "completed").await;

    let groups = board.list_groups().await.unwrap();
    assert_eq!(
        groups,
        vec![
            GroupSummary {
                id: "backlog".to_string(),
                task_count: 2
            },
            GroupSummary {
                id: "in-progress".to_string(),
                task_count: 0
            },
            GroupSummary {
                id: "completed".to_string(),
                task_count: 1
            },
        ]
    );
}

#[tokio::test]
async fn test_custom_gap() {
    let settings = BoardSettings {
        gap: 10.0,
        ..Default::default()
    };
    let board = Board::new(MemoryTaskStore::new(), settings);
    let a = create(&board, "A", "backlog").await;
    let b = create(&board, "B", "backlog").await;
    assert_eq!((a.order, b.order), (10.0, 20.0));
}
