// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Pré-condição dos relatórios: comparações mês atual vs anterior
    // exigem um mínimo de snapshots.
    #[error("Dados insuficientes: o relatório exige {required} meses, recebeu {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Erro ao gerar a planilha")]
    ExportError(#[from] rust_xlsxwriter::XlsxError),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InsufficientData { required, actual } => {
                let body = Json(json!({
                    "error": format!(
                        "Dados insuficientes: o relatório exige {} meses, recebeu {}.",
                        required, actual
                    ),
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            // Todos os outros erros (ExportError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe um aviso
            // genérico e nenhum estado da aplicação é alterado.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
