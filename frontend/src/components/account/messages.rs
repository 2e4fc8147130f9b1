use common::model::account::AccountInfo;

#[derive(Clone)]
pub enum Msg {
    /// Fetch succeeded and the payload deserialized.
    Loaded(AccountInfo),
    /// Transport failure (send error or non-OK status): retry path.
    FetchFailed,
    /// Retry timer fired: clear the notice and fetch again.
    Retry,
    /// OK response whose body was not valid payload JSON: alert, no retry.
    ParseFailed(String),
    /// A header cell was clicked; the index refers to `state::COLUMNS`.
    HeaderClicked(usize),
}
