//! Actions: what a key chord triggers. Each one is backed by a target the
//! host resolves once at startup.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit,
    MostRecent,
    Search,
    Index,
    Save,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Edit,
        Action::MostRecent,
        Action::Search,
        Action::Index,
        Action::Save,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::MostRecent => "mostRecent",
            Action::Search => "search",
            Action::Index => "index",
            Action::Save => "save",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "edit" => Some(Action::Edit),
            "mostrecent" | "most_recent" | "most-recent" => Some(Action::MostRecent),
            "search" => Some(Action::Search),
            "index" => Some(Action::Index),
            "save" => Some(Action::Save),
            _ => None,
        }
    }
}
