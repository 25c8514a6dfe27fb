use axum::extract::State;
use axum::Json;

use crate::{api_error::ApiError, app_state::SharedState, insight_response::InsightReport};

pub struct InsightController {}

impl InsightController {
    pub async fn get(
        State(state): State<SharedState>,
    ) -> Result<Json<InsightReport>, ApiError> {
        let report = state.insight_service.generate_insights()?;
        Ok(Json(report))
    }
}
