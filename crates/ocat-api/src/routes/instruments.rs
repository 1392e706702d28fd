use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use serde::Serialize;

use ocat_instruments::scoring::Question;
use ocat_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    #[serde(rename = "type")]
    instrument_type: i32,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    #[serde(rename = "type")]
    instrument_type: i32,
    name: String,
    questions: Vec<Question>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            instrument_type: i.instrument_type(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    instrument_type: Result<Path<i32>, PathRejection>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let Path(instrument_type) = instrument_type?;
    let instrument = get_instrument(instrument_type)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {instrument_type}")))?;

    Ok(Json(InstrumentDetail {
        instrument_type: instrument.instrument_type(),
        name: instrument.name().to_string(),
        questions: instrument.questions().to_vec(),
    }))
}
