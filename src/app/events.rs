#[derive(Debug, Clone)]
pub enum AppEvent {
    UpdateSearch(String),
    /// Index into the full catalog, not the filtered view.
    Launch(usize),
    DismissNotice,
    Quit,
}
