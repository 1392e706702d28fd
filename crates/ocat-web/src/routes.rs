use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use ocat_instruments::{CAT_BEHAVIORAL_INSTRUMENT_TYPE, Instrument, get_instrument};

use crate::error::WebError;
use crate::render::{FORM_TEMPLATE, LIST_TEMPLATE, render_page};
use crate::state::WebState;
use crate::view::form::{self, FieldErrors, FormInput};
use crate::view::list::{ListQuery, ListState, build_list_page};

/// Questionnaire used by the form. Fixed for every submission.
fn instrument() -> Result<Box<dyn Instrument>, WebError> {
    get_instrument(CAT_BEHAVIORAL_INSTRUMENT_TYPE)
        .ok_or(WebError::MissingInstrument(CAT_BEHAVIORAL_INSTRUMENT_TYPE))
}

/// A failed fetch renders as an empty list rather than an error page.
pub async fn list_page(
    State(state): State<WebState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, WebError> {
    let assessments = match state.service.get_list().await {
        Ok(assessments) => assessments,
        Err(e) => {
            tracing::warn!("failed to fetch assessments: {e}");
            Vec::new()
        }
    };

    let page = build_list_page(assessments, &ListState::from_query(&query));
    Ok(Html(render_page(&state.templates, LIST_TEMPLATE, &page)?))
}

pub async fn new_assessment_page(State(state): State<WebState>) -> Result<Html<String>, WebError> {
    let instrument = instrument()?;
    let page = form::build_form_page(
        instrument.as_ref(),
        &FormInput::default(),
        &FieldErrors::new(),
        None,
    );
    Ok(Html(render_page(&state.templates, FORM_TEMPLATE, &page)?))
}

pub async fn submit_assessment(
    State(state): State<WebState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let instrument = instrument()?;
    let input = FormInput::from_pairs(pairs, instrument.as_ref());

    let new = match form::validate(&input, instrument.as_ref()) {
        Ok(new) => new,
        Err(errors) => {
            let page = form::build_form_page(instrument.as_ref(), &input, &errors, None);
            let html = render_page(&state.templates, FORM_TEMPLATE, &page)?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    tracing::info!(score = new.score, risk_level = %new.risk_level, "submitting assessment");

    match state.service.submit(&new).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => {
            tracing::warn!("assessment submission failed: {e}");
            let alert = form::submit_alert(&e);
            let page =
                form::build_form_page(instrument.as_ref(), &input, &FieldErrors::new(), Some(alert));
            let html = render_page(&state.templates, FORM_TEMPLATE, &page)?;
            Ok((StatusCode::BAD_GATEWAY, Html(html)).into_response())
        }
    }
}
