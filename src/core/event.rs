#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Paste(PasteEvent),
    Drop(DropEvent),
}

impl InputEvent {
    pub fn is_key(&self) -> bool {
        matches!(self, InputEvent::Key(_))
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(e) => Some(e),
            _ => None,
        }
    }
}

/// Key-down event. `key` is the produced key value (`"e"`, `"Enter"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: false,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Command on macOS, control everywhere else.
    pub fn modifier_held(&self) -> bool {
        self.meta || self.ctrl
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: char,
    pub modifier: bool,
}

impl Key {
    pub fn new(code: char, modifier: bool) -> Self {
        Self { code, modifier }
    }

    pub fn simple(code: char) -> Self {
        Self::new(code, false)
    }

    pub fn modifier(code: char) -> Self {
        Self::new(code, true)
    }

    /// Only single-character keys map to a `Key`.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        let mut chars = event.key.chars();
        let code = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(code, event.modifier_held()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransferItem {
    pub kind: ItemKind,
    pub mime: String,
    file: Option<FilePayload>,
}

impl DataTransferItem {
    pub fn file(payload: FilePayload) -> Self {
        Self {
            kind: ItemKind::File,
            mime: payload.mime.clone(),
            file: Some(payload),
        }
    }

    pub fn string(mime: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::String,
            mime: mime.into(),
            file: None,
        }
    }

    pub fn as_file(&self) -> Option<&FilePayload> {
        self.file.as_ref()
    }

    pub fn is_image_file(&self) -> bool {
        self.kind == ItemKind::File && self.mime.starts_with("image") && self.file.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteEvent {
    pub items: Vec<DataTransferItem>,
}

impl PasteEvent {
    pub fn new(items: Vec<DataTransferItem>) -> Self {
        Self { items }
    }
}

/// Drop location in the surface's cell grid (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropPoint {
    pub x: i32,
    pub y: i32,
}

impl DropPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropEvent {
    pub items: Vec<DataTransferItem>,
    pub point: DropPoint,
}

impl DropEvent {
    pub fn new(items: Vec<DataTransferItem>, point: DropPoint) -> Self {
        Self { items, point }
    }
}
