use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use bulledit::core::{DataTransferItem, FilePayload, InputEvent, PasteEvent};
use bulledit::kernel::services::adapters::{
    ensure_settings_file, load_settings, read_document, write_document, HttpTransport,
    KeybindingContext, KeybindingService, UploadRuntime,
};
use bulledit::kernel::{CommandDispatcher, NavTargets, Session, UploadConfig, UploadPipeline};

mod logging;

const USAGE: &str = "usage: bulledit <page-url> <markdown-file> <image>...";

struct Args {
    page_url: String,
    document: PathBuf,
    images: Vec<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let page_url = args.next()?;
    let document = PathBuf::from(args.next()?);
    let images: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if images.is_empty() {
        return None;
    }
    Some(Args {
        page_url,
        document,
        images,
    })
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

fn read_image(path: &Path) -> std::io::Result<DataTransferItem> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(DataTransferItem::file(FilePayload::new(
        name,
        mime_for(path),
        bytes,
    )))
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let logging = logging::init();

    let Some(args) = parse_args() else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable");
    }
    let settings = load_settings();
    let config = UploadConfig::for_page(&args.page_url, &settings.upload)?;
    tracing::info!(endpoint = %config.endpoint, images = args.images.len(), "bulledit starting");

    let mut keymap = KeybindingService::with_defaults();
    keymap.apply_rules(&settings.keybindings);
    let dispatcher = CommandDispatcher::new(
        Arc::new(keymap),
        Arc::new(NavTargets::new()),
        KeybindingContext::Edit,
    );

    let runtime = Arc::new(UploadRuntime::new()?);
    let transport = Arc::new(HttpTransport::new()?);
    let (pipeline, rx) = UploadPipeline::new(config, transport, runtime.clone());

    let mut buffer = read_document(&args.document)?;
    buffer.set_cursor(buffer.len_chars());
    let mut session = Session::new(buffer, dispatcher, pipeline, rx);

    let mut items = Vec::with_capacity(args.images.len());
    for path in &args.images {
        let item = read_image(path)?;
        if !item.is_image_file() {
            eprintln!("skipping {}: not an image", path.display());
        }
        items.push(item);
    }

    if !session.handle(&InputEvent::Paste(PasteEvent::new(items)))? {
        eprintln!("nothing to upload");
        return Ok(ExitCode::SUCCESS);
    }
    session.wait_idle(&runtime, None)?;

    let failed = session.pipeline().failed();
    write_document(&args.document, session.surface())?;
    tracing::info!(failed, document = %args.document.display(), "document written");

    if failed == 0 {
        return Ok(ExitCode::SUCCESS);
    }
    for (_, upload) in session.pipeline().uploads() {
        eprintln!("upload failed: {}", upload.name());
    }
    if let Some(logging) = &logging {
        eprintln!("details in {}", logging.log_dir().display());
    }
    Ok(ExitCode::FAILURE)
}
