use crate::helpers::{assert_error, get_json_response_body, TestApp};
use taskify::domain::{
    NewTask, ProjectId, Task, TaskPriority, TaskStatus, TaskTitle, UserId,
};
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_tasks_overall_and_per_project(app: &mut TestApp) {
    let (alice, _) = app.register_member("alice").await;
    let (outsider, _) = app.register_member("outsider").await;
    let first = alice.add_project("First", &[]).await;
    let second = alice.add_project("Second", &[]).await;
    let older = alice.add_task(&first, "older", None).await;
    let newer = alice.add_task(&first, "newer", None).await;
    let elsewhere = alice.add_task(&second, "elsewhere", None).await;

    let ids = |body: serde_json::Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_owned())
            .collect()
    };

    let response = alice.get_project_tasks(&first).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        ids(get_json_response_body(response).await),
        vec![newer.clone(), older.clone()]
    );

    let response = outsider.get_tasks().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        ids(get_json_response_body(response).await),
        vec![elsewhere, newer, older]
    );

    let unknown = Uuid::new_v4();
    assert_eq!(
        alice
            .get_project_tasks(&unknown.to_string())
            .await
            .status()
            .as_u16(),
        404
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_skip_tasks_whose_project_is_gone(app: &mut TestApp) {
    let (alice, alice_id) = app.register_member("alice").await;
    let (bob, _) = app.register_member("bob").await;
    let kept = alice.add_project("Kept", &[]).await;
    let gone = alice.add_project("Gone", &[]).await;
    let kept_task = alice.add_task(&kept, "stays", None).await;
    assert_eq!(alice.delete_project(&gone).await.status().as_u16(), 200);

    // A task that outlived its project, as an interrupted cascade leaves it.
    let orphan = Task::new(
        NewTask {
            title: TaskTitle::parse("orphan").unwrap(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            project: ProjectId::parse(&gone).unwrap(),
            assigned_to: None,
            due_date: None,
        },
        UserId::parse(&alice_id).unwrap(),
    );
    app.task_store
        .write()
        .await
        .add_task(orphan.clone())
        .await
        .unwrap();

    let response = bob.get_tasks().await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![kept_task.as_str()]);

    assert_error(
        bob.get_task(&orphan.id.to_string()).await,
        404,
        &format!("Resource with ID not found: {}", orphan.id),
    )
    .await;
}
