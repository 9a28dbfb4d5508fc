//! Request shapes as seen by the transport.

mod fixtures;

use fixtures::{RecordingTransport, TOKEN, error_body, message_json, ok_body};
use teleapi::methods::chat::GetChatMemberCount;
use teleapi::methods::media::{SendDocument, SendMediaGroup};
use teleapi::methods::messages::SendMessage;
use teleapi::{Bot, Error, InputFile, InputMedia, Params};

#[tokio::test]
async fn test_chat_only_request_is_plain() {
    let transport = RecordingTransport::replying(ok_body("3"));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let count = bot.send(&GetChatMemberCount::new(42_i64)).await.unwrap();
    assert_eq!(count, 3);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "getChatMemberCount");
    assert_eq!(calls[0].params, Params::from_iter([("chat_id", "42")]));
    assert!(!calls[0].is_multipart());
}

#[tokio::test]
async fn test_url_document_with_local_thumbnail() {
    let transport = RecordingTransport::replying(ok_body(&message_json(42)));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let mut request = SendDocument::new(42_i64, InputFile::url("https://example.com/report.pdf"));
    request.thumbnail = Some(InputFile::path("/nonexistent/thumb.jpg"));
    bot.send(&request).await.unwrap();

    // Paths are only opened by a transport that uploads them.
    let call = &transport.calls()[0];
    assert_eq!(call.params.get("document"), Some("https://example.com/report.pdf"));
    assert!(!call.params.contains_key("thumbnail"));
    assert_eq!(call.files.len(), 1);
    assert_eq!(call.files[0].name, "thumbnail");
    assert!(call.is_multipart());
}

#[tokio::test]
async fn test_media_group_part_names() {
    let transport = RecordingTransport::replying(ok_body("[]"));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let media = vec![
        InputMedia::photo(InputFile::file_id("AgAD-existing")),
        InputMedia::photo(InputFile::path("/tmp/one.jpg")),
        InputMedia::video(InputFile::path("/tmp/two.mp4"))
            .thumbnail(InputFile::bytes("two.jpg", vec![1_u8, 2, 3])),
        InputMedia::document(InputFile::bytes("three.txt", b"three".to_vec())),
    ];
    bot.send(&SendMediaGroup::new(42_i64, media)).await.unwrap();

    let call = &transport.calls()[0];
    let names: Vec<&str> = call.files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, ["file-1", "file-2", "file-2-thumb", "file-3"]);

    let media: serde_json::Value = serde_json::from_str(call.params.get("media").unwrap()).unwrap();
    assert_eq!(media[0]["media"], "AgAD-existing");
    assert_eq!(media[1]["media"], "attach://file-1");
    assert_eq!(media[2]["media"], "attach://file-2");
    assert_eq!(media[2]["thumbnail"], "attach://file-2-thumb");
    assert_eq!(media[3]["media"], "attach://file-3");
}

#[tokio::test]
async fn test_media_group_by_reference_is_plain() {
    let transport = RecordingTransport::replying(ok_body("[]"));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let media = vec![
        InputMedia::photo(InputFile::url("https://example.com/a.jpg")),
        InputMedia::photo(InputFile::file_id("AgAD-b")),
    ];
    bot.send(&SendMediaGroup::new(42_i64, media)).await.unwrap();

    let call = &transport.calls()[0];
    assert!(call.files.is_empty());
    assert!(!call.is_multipart());
}

#[tokio::test]
async fn test_flood_control_surfaces_retry_after() {
    let transport = RecordingTransport::replying(error_body(
        429,
        "Too Many Requests: retry after 5",
        r#"{"retry_after":5}"#,
    ));
    let bot = Bot::with_transport(TOKEN, transport);

    let err = bot.send(&SendMessage::new(42_i64, "hi")).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.code, 429);
    assert_eq!(api.retry_after(), Some(5));
}

#[tokio::test]
async fn test_invalid_params_never_reach_transport() {
    let transport = RecordingTransport::replying(ok_body("true"));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let err = bot.send(&SendMessage::new("", "hi")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref key } if key == "chat_id"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_file_direct_url() {
    let transport = RecordingTransport::replying(ok_body(
        r#"{"file_id":"f1","file_unique_id":"u1","file_size":10,"file_path":"documents/file_1.pdf"}"#,
    ));
    let bot = Bot::with_transport(TOKEN, transport.clone());

    let url = bot.file_direct_url("f1").await.unwrap();
    assert_eq!(
        url.as_deref(),
        Some("https://api.telegram.org/file/botTEST/documents/file_1.pdf")
    );
    assert_eq!(transport.calls()[0].params.get("file_id"), Some("f1"));
}
