pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn api_response_serializes_null_data_on_failure() {
        let resp: types::ApiResponse<()> = types::ApiResponse::failure(404, "Key does not exist.");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status_code"], 404);
        assert!(json["data"].is_null());
    }
}
