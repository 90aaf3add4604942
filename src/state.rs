use std::sync::Arc;

use axum::extract::FromRef;

use crate::repository::TriviaRepository;

/// Store handle shared by every handler.
pub type SharedRepository = Arc<dyn TriviaRepository>;

#[derive(Clone)]
pub struct AppState {
    pub repo: SharedRepository,
}

impl AppState {
    pub fn new(repo: SharedRepository) -> Self {
        Self { repo }
    }
}

impl FromRef<AppState> for SharedRepository {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}
