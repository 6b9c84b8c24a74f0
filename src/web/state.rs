use crate::services::PostStore;
use crate::Config;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(config: Config, posts: Arc<dyn PostStore>) -> Self {
        Self { config, posts }
    }

    pub fn store(&self) -> &dyn PostStore {
        self.posts.as_ref()
    }
}
