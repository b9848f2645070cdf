use reqwest::{cookie::Jar, Response};
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use taskify::{
    app_state::{
        AppState, BannedTokenStoreType, ProjectStoreType, TaskStoreType,
        UserStoreType,
    },
    utils::{
        constants::{test, AdminSeed},
        seed::ensure_admin,
    },
    Application,
};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub user_store: UserStoreType,
    pub banned_token_store: BannedTokenStoreType,
    pub project_store: ProjectStoreType,
    pub task_store: TaskStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let app_state = AppState::in_memory();
        let AppState {
            user_store,
            banned_token_store,
            project_store,
            task_store,
        } = app_state.clone();

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        Self {
            address,
            user_store,
            banned_token_store,
            project_store,
            task_store,
        }
    }

    /// A fresh client with its own cookie jar, so each test user keeps a
    /// separate session.
    pub fn session(&self) -> Session {
        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .unwrap();

        Session {
            address: self.address.clone(),
            http_client,
        }
    }

    /// Registers a member with a unique name. Returns its logged-in session
    /// and user id.
    pub async fn register_member(&self, name: &str) -> (Session, String) {
        let session = self.session();
        let response = session
            .post_register(&json!({
                "username": format!("{name}-{}", Uuid::new_v4()),
                "email": get_random_email(),
                "password": PASSWORD,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201, "Failed to register");

        let body = get_json_response_body(response).await;
        let id = body["user"]["id"]
            .as_str()
            .expect("No user id in register response")
            .to_owned();
        (session, id)
    }

    /// Seeds an administrator and logs it in.
    pub async fn admin(&self) -> (Session, String) {
        let email = get_random_email();
        let seed = AdminSeed {
            username: format!("admin-{}", Uuid::new_v4()),
            email: email.clone(),
            password: Secret::new(PASSWORD.to_owned()),
        };
        ensure_admin(&self.user_store, &seed)
            .await
            .expect("Failed to seed admin");

        let session = self.session();
        let response = session
            .post_login(&json!({ "email": email, "password": PASSWORD }))
            .await;
        assert_eq!(response.status().as_u16(), 200, "Admin failed to log in");

        let body = get_json_response_body(response).await;
        let id = body["user"]["id"].as_str().unwrap().to_owned();
        (session, id)
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub struct Session {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl Session {
    fn url(&self, path: &str) -> String {
        format!("{}/api{}", &self.address, path)
    }

    pub async fn post_register<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(self.url("/auth/register"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(self.url("/auth/login"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self) -> Response {
        self.http_client
            .post(self.url("/auth/logout"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_me(&self) -> Response {
        self.http_client
            .get(self.url("/auth/me"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_users(&self) -> Response {
        self.http_client
            .get(self.url("/auth/users"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_project<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(self.url("/projects"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_projects(&self) -> Response {
        self.http_client
            .get(self.url("/projects"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project(&self, id: &str) -> Response {
        self.http_client
            .get(self.url(&format!("/projects/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project_members(&self, id: &str) -> Response {
        self.http_client
            .get(self.url(&format!("/projects/{id}/members")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_project<Body>(&self, id: &str, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(self.url(&format!("/projects/{id}")))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_project(&self, id: &str) -> Response {
        self.http_client
            .delete(self.url(&format!("/projects/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_task<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(self.url("/tasks"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_tasks(&self) -> Response {
        self.http_client
            .get(self.url("/tasks"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project_tasks(&self, project_id: &str) -> Response {
        self.http_client
            .get(self.url(&format!("/tasks/project/{project_id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_task(&self, id: &str) -> Response {
        self.http_client
            .get(self.url(&format!("/tasks/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_task<Body>(&self, id: &str, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(self.url(&format!("/tasks/{id}")))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_task(&self, id: &str) -> Response {
        self.http_client
            .delete(self.url(&format!("/tasks/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Creates a project and returns its id.
    pub async fn add_project(&self, name: &str, members: &[&str]) -> String {
        let response = self
            .post_project(&json!({ "name": name, "members": members }))
            .await;
        assert_eq!(response.status().as_u16(), 201, "Failed to add project");
        get_json_response_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }

    /// Creates a task and returns its id.
    pub async fn add_task(
        &self,
        project_id: &str,
        title: &str,
        assigned_to: Option<&str>,
    ) -> String {
        let response = self
            .post_task(&json!({
                "title": title,
                "project": project_id,
                "assignedTo": assigned_to,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201, "Failed to add task");
        get_json_response_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn get_json_response_body(response: Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Could not deserialize response body to JSON")
}

pub async fn assert_error(response: Response, status: u16, message: &str) {
    assert_eq!(response.status().as_u16(), status);
    let body = get_json_response_body(response).await;
    assert_eq!(body, json!({ "error": message }));
}

pub fn user_schema() -> serde_json::Value {
    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "required": ["id", "username", "email", "role", "createdAt"],
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "username": { "type": "string", "minLength": 1, "maxLength": 64 },
        "email": { "type": "string" },
        "role": { "enum": ["admin", "member"] },
        "createdAt": { "type": "string" }
      },
      "not": {
        "anyOf": [
          { "required": ["hash"] },
          { "required": ["password"] },
          { "required": ["passwordHash"] }
        ]
      }
    })
}

pub fn project_schema() -> serde_json::Value {
    let summary = json!({
      "type": "object",
      "required": ["id", "username", "email"],
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "username": { "type": "string" },
        "email": { "type": "string" }
      }
    });

    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "required": [
        "id", "name", "description", "creator", "members", "createdAt", "updatedAt"
      ],
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "name": { "type": "string", "minLength": 1, "maxLength": 255 },
        "description": { "type": "string" },
        "creator": summary,
        "members": { "type": "array", "items": summary },
        "createdAt": { "type": "string" },
        "updatedAt": { "type": "string" }
      }
    })
}

pub fn task_schema() -> serde_json::Value {
    json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "required": [
        "id", "title", "description", "status", "priority", "project",
        "assignedTo", "createdBy", "dueDate", "createdAt", "updatedAt"
      ],
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "title": { "type": "string", "minLength": 1, "maxLength": 255 },
        "status": { "enum": ["pending", "in-progress", "completed"] },
        "priority": { "enum": ["low", "medium", "high"] },
        "project": {
          "type": "object",
          "required": ["id", "name"]
        },
        "assignedTo": {
          "oneOf": [
            { "type": "null" },
            { "type": "object", "required": ["id", "username", "email"] }
          ]
        },
        "createdBy": {
          "type": "object",
          "required": ["id", "username", "email"]
        },
        "dueDate": {
          "oneOf": [{ "type": "null" }, { "type": "string" }]
        }
      }
    })
}
