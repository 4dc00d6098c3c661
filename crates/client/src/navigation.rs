//! Navigation sink used by the client (hard redirect on 401) and by
//! view-models (in-app navigation after save/delete).

/// Receives navigation requests.
pub trait Navigator: Send + Sync {
    /// In-app navigation that keeps client state.
    fn navigate(&self, path: &str);

    /// Full reload at `path`, discarding all client state.
    fn hard_redirect(&self, path: &str);
}

/// Path every ended session is sent to.
pub const LOGIN_PATH: &str = "/login";
