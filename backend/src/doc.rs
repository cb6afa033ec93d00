//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every account route, both health probes and the
//! request, response and error schemas. Swagger UI serves it at `/api-docs/`
//! and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{
    LoginRequest, LoginResponse, MessageResponse, PhoneNumberInput, RegisterRequest,
    UserRecordBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User accounts API",
        description = "Register, authenticate, list and delete user accounts.",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRecordBody,
        RegisterRequest,
        PhoneNumberInput,
        LoginRequest,
        LoginResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Account registration and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Structure checks for the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

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

    fn schema_named<'a>(doc: &'a utoipa::openapi::OpenApi, suffix: &str) -> &'a RefOr<Schema> {
        doc.components
            .as_ref()
            .expect("components")
            .schemas
            .iter()
            .find(|(name, _)| name.as_str() == suffix || name.ends_with(&format!(".{suffix}")))
            .map(|(_, schema)| schema)
            .unwrap_or_else(|| panic!("schema {suffix} registered"))
    }

    #[rstest]
    #[case("/user/register")]
    #[case("/user/login")]
    #[case("/user/users")]
    #[case("/user/delete/{username}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("UserRecordBody", &["username", "phone_number", "password"])]
    #[case("LoginResponse", &["msg", "userData"])]
    #[case("MessageResponse", &["msg"])]
    #[case("Error", &["code", "message", "traceId", "details"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schema = schema_named(&doc, name);
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
