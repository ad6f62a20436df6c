// src/common/response.rs

use serde::Serialize;
use utoipa::ToSchema;

// El sobre único de todas las respuestas exitosas: { "success": true, "data": ... }.
// El frontend original toleraba tres formas distintas por endpoint; aquí la
// forma se decide una sola vez.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_sobre_siempre_lleva_success_y_data() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }
}
