use anyhow::{anyhow, Result};
use faqchat::domain::backend::ChatBackend;
use faqchat::domain::models::Message;
use faqchat::infrastructure::http_backend::HttpBackend;
use std::io::Read;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Method, Response, Server};

fn json_response(body: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header"),
        )
}

#[tokio::test]
async fn unreachable_backend_names_the_address() {
    let backend = HttpBackend::new("http://127.0.0.1:1", Duration::from_millis(200))
        .expect("backend should initialize");

    let error = backend
        .fetch_transcript()
        .await
        .expect_err("fetch should fail for unreachable endpoint");
    assert!(error.to_string().contains("127.0.0.1:1"));
}

#[tokio::test]
async fn transcript_accepts_wrapped_and_bare_lists() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let bodies = [
            r#"{"items":[{"role":"assistant","content":"Hello"}]}"#,
            r#"[{"type":"human","content":"hi"},{"type":"ai","content":"Hello"}]"#,
        ];
        for body in bodies {
            let request = server.recv().expect("request expected");
            assert_eq!(request.method(), &Method::Get);
            assert_eq!(request.url(), "/api");
            request
                .respond(json_response(body, 200))
                .expect("response should succeed");
        }
    });

    let backend = HttpBackend::new(&addr, Duration::from_secs(2))?;
    assert_eq!(
        backend.fetch_transcript().await?,
        vec![Message::assistant("Hello")]
    );
    assert_eq!(
        backend.fetch_transcript().await?,
        vec![Message::user("hi"), Message::assistant("Hello")]
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[tokio::test]
async fn ask_posts_data_and_reads_questions() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.method(), &Method::Post);
        assert_eq!(request.url(), "/api/ask");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("body should be readable");
        let payload: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(payload["data"], "how do I enrol?");

        let reply = r#"{
            "items": [
                {"role": "user", "content": "how do I enrol?"},
                {"role": "assistant", "content": "Use the enrolment portal."}
            ],
            "questions": ["When is the census date?"]
        }"#;
        request
            .respond(json_response(reply, 200))
            .expect("response should succeed");
    });

    let backend = HttpBackend::new(&addr, Duration::from_secs(2))?;
    let response = backend.ask("how do I enrol?").await?;
    assert_eq!(response.items.len(), 2);
    assert_eq!(
        response.questions,
        Some(vec!["When is the census date?".to_string()])
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[tokio::test]
async fn server_errors_surface_status_and_message() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response(r#"{"error":"model still loading"}"#, 503))
            .expect("response should succeed");
    });

    let backend = HttpBackend::new(&addr, Duration::from_secs(2))?;
    let error = backend.ask("fees?").await.expect_err("503 should fail");
    assert_eq!(error.to_string(), "server error (503): model still loading");

    handle.join().expect("server thread should join");
    Ok(())
}
