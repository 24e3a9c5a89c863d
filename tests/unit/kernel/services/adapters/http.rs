use super::*;
use crate::kernel::services::adapters::UploadRuntime;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(header_end) = find(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            if headers.contains("transfer-encoding: chunked") {
                if buf.ends_with(b"0\r\n\r\n") {
                    break;
                }
                continue;
            }
            let len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// One-shot HTTP server; yields the raw request it received.
fn serve_once(
    runtime: &UploadRuntime,
    status_line: &'static str,
    body: &'static str,
) -> (Url, oneshot::Receiver<String>) {
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    runtime.tokio_handle().spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });
    let url = Url::parse(&format!("http://{addr}/_bull/upload/notes")).unwrap();
    (url, rx)
}

fn cat_png() -> FilePayload {
    FilePayload::new("cat.png", "image/png", b"\x89PNG fake".to_vec())
}

#[test]
fn posts_multipart_file_field_and_decodes_response() {
    let runtime = UploadRuntime::new().unwrap();
    let (url, request_rx) = serve_once(
        &runtime,
        "HTTP/1.1 200 OK",
        r#"{"file":"cat.png","savedPath":"notes-1-cat.png"}"#,
    );
    let transport = HttpTransport::new().unwrap();

    let result = runtime.block_on(transport.upload(&url, cat_png())).unwrap();
    assert_eq!(result.saved, "notes-1-cat.png");

    let request = runtime.block_on(request_rx).unwrap();
    assert!(request.starts_with("POST /_bull/upload/notes HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("multipart/form-data"));
    assert!(request.contains("name=\"file\""));
    assert!(request.contains("filename=\"cat.png\""));
    assert!(request.contains("image/png"));
}

#[test]
fn non_success_status_is_reported() {
    let runtime = UploadRuntime::new().unwrap();
    let (url, _request_rx) = serve_once(
        &runtime,
        "HTTP/1.1 403 Forbidden",
        r#"{"error":"read-only"}"#,
    );
    let transport = HttpTransport::new().unwrap();

    let err = runtime
        .block_on(transport.upload(&url, cat_png()))
        .unwrap_err();
    assert_eq!(err, TransportError::Status(403));
}

#[test]
fn response_without_identifier_is_a_decode_error() {
    let runtime = UploadRuntime::new().unwrap();
    let (url, _request_rx) = serve_once(&runtime, "HTTP/1.1 200 OK", r#"{"file":"cat.png"}"#);
    let transport = HttpTransport::new().unwrap();

    let err = runtime
        .block_on(transport.upload(&url, cat_png()))
        .unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn invalid_mime_is_rejected_before_sending() {
    let runtime = UploadRuntime::new().unwrap();
    let transport = HttpTransport::new().unwrap();
    let url = Url::parse("http://127.0.0.1:9/_bull/upload/x").unwrap();
    let file = FilePayload::new("x.png", "not a mime", vec![]);

    let err = runtime.block_on(transport.upload(&url, file)).unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
}

#[test]
fn connection_refused_is_a_network_error() {
    let runtime = UploadRuntime::new().unwrap();
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new().unwrap();
    let url = Url::parse(&format!("http://{addr}/_bull/upload/x")).unwrap();
    let err = runtime
        .block_on(transport.upload(&url, cat_png()))
        .unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}
