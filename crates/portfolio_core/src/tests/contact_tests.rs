use super::*;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Form, Router,
};
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Debug)]
struct CapturedRequest {
    accept: Option<String>,
    content_type: Option<String>,
    submission: FormSubmission,
}

#[derive(Clone)]
struct FormsServerState {
    status: StatusCode,
    tx: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
}

async fn handle_form(
    State(state): State<FormsServerState>,
    headers: HeaderMap,
    Form(submission): Form<FormSubmission>,
) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(CapturedRequest {
            accept: header("accept"),
            content_type: header("content-type"),
            submission,
        });
    }
    state.status
}

async fn spawn_forms_server(
    status: StatusCode,
) -> anyhow::Result<(Url, oneshot::Receiver<CapturedRequest>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = FormsServerState {
        status,
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/f/portfolio", post(handle_form))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((Url::parse(&format!("http://{addr}/f/portfolio"))?, rx))
}

async fn closed_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/f/portfolio")).expect("url")
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Ada Lovelace".into();
    form.email = "ada@example.com".into();
    form.message = "Loved the projects section.".into();
    form
}

#[test]
fn begin_submit_packages_fields_as_entered_and_sets_busy() {
    let mut form = filled_form();
    form.name = "  Ada Lovelace ".into();
    form.message = "Hello,\n\n  indented reply\n".into();

    let submission = form.begin_submit().expect("valid form");

    assert_eq!(submission.name, "  Ada Lovelace ");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(submission.message, "Hello,\n\n  indented reply\n");
    assert!(form.is_busy());
    assert_eq!(form.submit_label(), "Sending...");
}

#[test]
fn second_submit_while_busy_is_rejected() {
    let mut form = filled_form();
    form.begin_submit().expect("first submit");
    assert_eq!(form.begin_submit(), Err(ContactError::Busy));
    assert!(form.is_busy());
}

#[test]
fn invalid_fields_do_not_start_a_submission() {
    let cases = [
        ("", "ada@example.com", "hi", "name is required"),
        ("Ada", "   ", "hi", "email is required"),
        ("Ada", "ada.example.com", "hi", "email address is malformed"),
        ("Ada", "ada@", "hi", "email address is malformed"),
        ("Ada", "a da@example.com", "hi", "email address is malformed"),
        ("Ada", "ada@example.com", "\n\t", "message is required"),
    ];

    for (name, email, message, reason) in cases {
        let mut form = ContactForm::new();
        form.name = name.into();
        form.email = email.into();
        form.message = message.into();

        let err = form.begin_submit().expect_err("must be rejected");
        assert_eq!(err, ContactError::validation(reason));
        assert!(!form.is_busy());
    }
}

#[test]
fn validation_failure_notification_names_the_problem() {
    let notice = Notification::failure(&ContactError::validation("name is required"));
    assert_eq!(notice.kind, NotificationKind::Failure);
    assert!(notice.message.contains("name is required"));
}

#[test]
fn finish_with_failure_keeps_fields_for_retry() {
    let mut form = filled_form();
    form.begin_submit().expect("submit");

    let notice = form.finish_submit(&Err(ContactError::Rejected { status: 500 }));

    assert_eq!(notice, Notification::failure(&ContactError::Busy));
    assert_eq!(notice.message, FAILURE_MESSAGE);
    assert!(!form.is_busy());
    assert_eq!(form.name, "Ada Lovelace");
    assert_eq!(form.message, "Loved the projects section.");
    assert_eq!(form.submit_label(), "Send Message");
}

#[test]
fn abandon_releases_busy_without_clearing() {
    let mut form = filled_form();
    form.begin_submit().expect("submit");
    form.abandon_submit();
    assert!(!form.is_busy());
    assert_eq!(form.email, "ada@example.com");
}

#[tokio::test]
async fn posts_form_encoded_fields_with_json_accept_header() {
    let (endpoint, captured) = spawn_forms_server(StatusCode::OK)
        .await
        .expect("spawn server");
    let sender = HttpContactSender::new(endpoint, Duration::from_secs(5)).expect("sender");

    sender
        .send(&FormSubmission::new("Ada", "ada@example.com", "Hello & welcome"))
        .await
        .expect("delivered");

    let request = captured.await.expect("captured request");
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert_eq!(
        request.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        request.submission,
        FormSubmission::new("Ada", "ada@example.com", "Hello & welcome")
    );
}

#[tokio::test]
async fn any_2xx_status_counts_as_delivered() {
    let (endpoint, _captured) = spawn_forms_server(StatusCode::ACCEPTED)
        .await
        .expect("spawn server");
    let sender = HttpContactSender::new(endpoint, Duration::from_secs(5)).expect("sender");

    let outcome = sender
        .send(&FormSubmission::new("Ada", "ada@example.com", "hi"))
        .await;

    assert_eq!(outcome, Ok(()));
}

#[tokio::test]
async fn non_2xx_status_is_rejected() {
    let (endpoint, _captured) = spawn_forms_server(StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .expect("spawn server");
    let sender = HttpContactSender::new(endpoint, Duration::from_secs(5)).expect("sender");

    let outcome = sender
        .send(&FormSubmission::new("Ada", "ada@example.com", "hi"))
        .await;

    assert_eq!(outcome, Err(ContactError::Rejected { status: 422 }));
}

#[tokio::test]
async fn successful_round_trip_clears_form_and_notifies() {
    let (endpoint, _captured) = spawn_forms_server(StatusCode::OK)
        .await
        .expect("spawn server");
    let sender = HttpContactSender::new(endpoint, Duration::from_secs(5)).expect("sender");
    let mut form = filled_form();

    let submission = form.begin_submit().expect("submit");
    let outcome = sender.send(&submission).await;
    let notice = form.finish_submit(&outcome);

    assert_eq!(notice, Notification::success());
    assert_eq!(form, ContactForm::new());
    assert!(!form.is_busy());
}

#[tokio::test]
async fn network_failure_keeps_fields_and_notifies() {
    let sender =
        HttpContactSender::new(closed_endpoint().await, Duration::from_secs(5)).expect("sender");
    let mut form = filled_form();

    let submission = form.begin_submit().expect("submit");
    let outcome = sender.send(&submission).await;

    assert!(matches!(outcome, Err(ContactError::Transport(_))));
    let notice = form.finish_submit(&outcome);
    assert_eq!(notice.kind, NotificationKind::Failure);
    assert!(!form.is_busy());
    assert_eq!(form.name, "Ada Lovelace");
    assert_eq!(form.email, "ada@example.com");
}
