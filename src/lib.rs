pub mod api;
pub mod chart;
pub mod classifier;
pub mod components;
pub mod controller;
pub mod db;
pub mod entity;
pub mod error;
pub mod page;
pub mod queries;
pub mod risk;
pub mod state;
pub mod util;

use std::sync::Arc;

use crate::classifier::LogisticModel;
use crate::components::ReportTemplate;
use crate::controller::SelectionController;
use crate::db::DbSource;
use crate::error::StartupError;
use crate::state::Config;

/// Load the risk model once and build the router around it.
pub fn build_app(config: &Config) -> Result<axum::Router, StartupError> {
    if !config.database_path.exists() {
        return Err(StartupError::DatabaseNotFound(config.database_path.clone()));
    }

    let model = LogisticModel::load(&config.model_path)?;

    let source = DbSource::new(config.database_path.clone());
    log::info!("Reading events from {}", source.path().display());

    let template = Arc::new(ReportTemplate::new(Arc::new(model)));
    let controller = SelectionController::new(template, source);
    Ok(api::create_router(api::AppState::new(controller)))
}
