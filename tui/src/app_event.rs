#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Route transition produced by confirming a result. The search core
    /// never acts on routes itself; the embedding application decides
    /// what "navigating" means.
    Navigate(String),

    /// Request to exit the application gracefully.
    ExitRequest,
}
