//! The reqwest transport against a local mock server.

mod fixtures;

use std::fs;

use fixtures::{TOKEN, error_body, init_tracing, message_json, ok_response};
use teleapi::methods::chat::GetChatMemberCount;
use teleapi::methods::media::SendDocument;
use teleapi::{Bot, BotConfig, Error, HttpTransport, InputFile};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bot_for(server: &MockServer) -> Bot {
    init_tracing();
    let transport =
        HttpTransport::new(TOKEN).with_endpoint(format!("{}/bot{{token}}/{{method}}", server.uri()));
    Bot::with_transport(TOKEN, transport)
}

fn content_type(request: &wiremock::Request) -> String {
    request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_plain_request_is_form_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/getChatMemberCount"))
        .respond_with(ok_response("17"))
        .expect(1)
        .mount(&server)
        .await;

    let count = bot_for(&server)
        .send(&GetChatMemberCount::new("@channel"))
        .await
        .unwrap();
    assert_eq!(count, 17);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(content_type(&requests[0]), "application/x-www-form-urlencoded");
    assert_eq!(String::from_utf8_lossy(&requests[0].body), "chat_id=%40channel");
}

#[tokio::test]
async fn test_local_file_is_uploaded_as_multipart() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("report.txt");
    fs::write(&file_path, "quarterly numbers").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/sendDocument"))
        .respond_with(ok_response(&message_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = SendDocument::new(42_i64, InputFile::path(&file_path));
    request.caption = "Q3".into();
    let message = bot_for(&server).send(&request).await.unwrap();
    assert_eq!(message.chat.id, 42);

    let requests = server.received_requests().await.unwrap();
    assert!(content_type(&requests[0]).starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="chat_id""#));
    assert!(body.contains(r#"name="caption""#));
    assert!(body.contains(r#"name="document"; filename="report.txt""#));
    assert!(body.contains("quarterly numbers"));
}

#[tokio::test]
async fn test_missing_local_file_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok_response(&message_json(42)))
        .expect(0)
        .mount(&server)
        .await;

    let request = SendDocument::new(42_i64, InputFile::path("/nonexistent/report.pdf"));
    let err = bot_for(&server).send(&request).await.unwrap_err();
    assert!(matches!(err, Error::Io { path: Some(_), .. }));
}

#[tokio::test]
async fn test_invalid_params_fail_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok_response("1"))
        .expect(0)
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .send(&GetChatMemberCount::new(0_i64))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[tokio::test]
async fn test_error_envelope_on_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/getChatMemberCount"))
        .respond_with(ResponseTemplate::new(429).set_body_string(error_body(
            429,
            "Too Many Requests: retry after 5",
            r#"{"retry_after":5}"#,
        )))
        .mount(&server)
        .await;

    let err = bot_for(&server)
        .send(&GetChatMemberCount::new(42_i64))
        .await
        .unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.code, 429);
    assert_eq!(api.retry_after(), Some(5));
}

#[tokio::test]
async fn test_connection_failure_hides_token() {
    let transport = HttpTransport::new("123:secret").with_endpoint("http://127.0.0.1:9/bot{token}/{method}");
    let bot = Bot::with_transport("123:secret", transport);

    let err = bot.send(&GetChatMemberCount::new(42_i64)).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert!(!err.to_string().contains("secret"));
}

#[tokio::test]
async fn test_bot_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot77:cfg/getMe"))
        .respond_with(ok_response(
            r#"{"id":77,"is_bot":true,"first_name":"Config Bot","username":"config_bot"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bot.toml");
    fs::write(
        &config_path,
        format!(
            "token = \"77:cfg\"\napi_endpoint = \"{}/bot{{token}}/{{method}}\"\ntimeout_secs = 10\n",
            server.uri()
        ),
    )
    .unwrap();

    let config = BotConfig::load_from(&config_path).unwrap();
    let me = Bot::from_config(&config).unwrap().get_me().await.unwrap();
    assert_eq!(me.username.as_deref(), Some("config_bot"));
}
