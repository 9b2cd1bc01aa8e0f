use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mercato_core::Envelope;
use thiserror::Error;

use crate::is_development;

/// Le uniche famiglie di errore del servizio: campo obbligatorio assente o
/// invariante violata (400), risorsa inesistente (404) e il collettore dei
/// guasti interni (500, senza codice strutturato).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.to_string()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.to_string()),
            AppError::Internal(e) => {
                tracing::error!("internal fault: {e:#}");
                // fuori da production il dettaglio grezzo finisce nel messaggio
                let message = if is_development() {
                    format!("Erro interno do servidor: {e}")
                } else {
                    "Erro interno do servidor".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(Envelope::<()>::fail(message))).into_response()
    }
}
