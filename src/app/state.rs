#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search: String,
    pub notice: Option<Notice>,
    pub launched: usize,
    pub quit_requested: bool,
}
