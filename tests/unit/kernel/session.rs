use super::*;
use crate::core::{
    Action, DataTransferItem, DropEvent, DropPoint, FilePayload, KeyEvent, PasteEvent,
};
use crate::kernel::dispatch::NavTargets;
use crate::kernel::services::adapters::{KeybindingContext, KeybindingService};
use crate::kernel::services::ports::{
    TransportError, UploadFuture, UploadResult, UploadTransport,
};
use crate::kernel::upload::UploadConfig;
use crate::models::TextBuffer;
use reqwest::Url;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Answers immediately: `fail*.png` is rejected, anything else is stored
/// under `img/<name>`.
struct InstantTransport;

impl UploadTransport for InstantTransport {
    fn upload(&self, _endpoint: &Url, file: FilePayload) -> UploadFuture {
        Box::pin(async move {
            if file.name.starts_with("fail") {
                Err(TransportError::Status(500))
            } else {
                Ok(UploadResult::new(format!("img/{}", file.name)))
            }
        })
    }
}

fn session(
    text: &str,
    targets: NavTargets,
) -> (Arc<UploadRuntime>, Session<TextBuffer>) {
    let runtime = Arc::new(UploadRuntime::new().unwrap());
    let config = UploadConfig::new(Url::parse("http://h/_bull/upload/p").unwrap());
    let (pipeline, rx) = UploadPipeline::new(config, Arc::new(InstantTransport), runtime.clone());
    let dispatcher = CommandDispatcher::new(
        Arc::new(KeybindingService::with_defaults()),
        Arc::new(targets),
        KeybindingContext::Edit,
    );
    let mut buffer = TextBuffer::from_text(text);
    buffer.set_cursor(buffer.len_chars());
    (runtime, Session::new(buffer, dispatcher, pipeline, rx))
}

fn png(name: &str) -> DataTransferItem {
    DataTransferItem::file(FilePayload::new(name, "image/png", vec![1, 2, 3]))
}

#[test]
fn paste_then_wait_resolves_every_placeholder() {
    let (runtime, mut session) = session("intro\n", NavTargets::new());

    let suppressed = session
        .handle(&InputEvent::Paste(PasteEvent::new(vec![png("a.png"), png("b.png")])))
        .unwrap();
    assert!(suppressed);

    let done = session
        .wait_idle(&runtime, Some(Duration::from_secs(5)))
        .unwrap();
    assert_eq!(done, vec![Completion::Resolved, Completion::Resolved]);
    assert_eq!(
        session.surface().text(),
        "intro\n![a.png](img/a.png)\n![b.png](img/b.png)\n"
    );
}

#[test]
fn failures_are_counted_and_left_in_place() {
    let (runtime, mut session) = session("", NavTargets::new());
    let items = vec![png("fail.png"), png("ok.png")];

    session
        .handle(&InputEvent::Drop(DropEvent::new(items, DropPoint::new(0, 0))))
        .unwrap();
    session
        .wait_idle(&runtime, Some(Duration::from_secs(5)))
        .unwrap();

    assert_eq!(session.pipeline().failed(), 1);
    assert_eq!(session.pipeline().in_flight(), 0);
    assert_eq!(
        session.surface().text(),
        "[Uploading fail.png]()\n![ok.png](img/ok.png)\n"
    );
}

#[test]
fn keys_reach_the_dispatcher() {
    let saves = Arc::new(AtomicUsize::new(0));
    let hit = saves.clone();
    let targets = NavTargets::new().with(
        Action::Save,
        Arc::new(move || {
            hit.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let (_runtime, mut session) = session("", targets);

    assert!(session
        .handle(&InputEvent::Key(KeyEvent::new("s").with_ctrl()))
        .unwrap());
    assert!(!session.handle(&InputEvent::Key(KeyEvent::new("s"))).unwrap());
    assert_eq!(saves.load(Ordering::SeqCst), 1);
}

#[test]
fn text_only_paste_is_not_suppressed() {
    let (_runtime, mut session) = session("x", NavTargets::new());
    let paste = PasteEvent::new(vec![DataTransferItem::string("text/plain")]);

    assert!(!session.handle(&InputEvent::Paste(paste)).unwrap());
    assert!(session.poll().unwrap().is_empty());
    assert_eq!(session.into_surface().text(), "x");
}
