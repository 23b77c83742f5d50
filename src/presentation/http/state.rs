// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub templates: Arc<Tera>,
}
