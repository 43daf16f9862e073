//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every users and health endpoint together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types
//! stay free of utoipa derives. The document backs Swagger UI in debug
//! builds and is printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::{
    CreateUserRequest, UpdateUserRequest, UserMessageResponse, UsersResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userbase API",
        description = "In-memory user management with health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        UsersResponse,
        UserMessageResponse
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schemas.

    use rstest::rstest;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/users", "get")]
    #[case("/api/v1/users", "post")]
    #[case("/api/v1/users/{id}", "get")]
    #[case("/api/v1/users/{id}", "put")]
    #[case("/api/v1/users/{id}", "delete")]
    #[case("/health/ready", "get")]
    #[case("/health/live", "get")]
    fn document_lists_endpoint(#[case] path: &str, #[case] method: &str) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.get_path_item(path).expect("path registered");
        let operation = match method {
            "get" => item.get.as_ref(),
            "post" => item.post.as_ref(),
            "put" => item.put.as_ref(),
            "delete" => item.delete.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "{method} {path} missing");
    }

    #[rstest]
    #[case("User", &["id", "name", "age"])]
    #[case("Error", &["code", "message", "traceId", "details"])]
    fn schema_exposes_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    fn error_code_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ErrorCode"));
    }
}
