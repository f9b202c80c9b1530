use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct KeyValueRecordDoc {
    pub key: String,
    pub value: String,
}

#[derive(ToSchema)]
pub struct CreateKeyValueInputDoc {
    pub key: String,
    pub value: String,
}

#[derive(ToSchema)]
pub struct UpdateKeyValueInputDoc {
    pub value: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::key_values::get,
        crate::routes::key_values::create,
        crate::routes::key_values::update,
    ),
    components(
        schemas(
            HealthResponse,
            KeyValueRecordDoc,
            CreateKeyValueInputDoc,
            UpdateKeyValueInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "keys")
    )
)]
pub struct ApiDoc;
