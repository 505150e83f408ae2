//! `OpenAPI` document for the settings REST surface.
//!
//! Routes describe themselves through [`OperationDoc`]; request and response
//! types are collected as components the first time they are referenced.

use std::collections::BTreeMap;

use http::StatusCode;
use utoipa::openapi::{
    OpenApi, OpenApiBuilder, Ref, RefOr, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{HttpMethod, Operation, OperationBuilder, PathItem, PathsBuilder},
    request_body::RequestBodyBuilder,
    response::{ResponseBuilder, ResponsesBuilder},
    schema::{ArrayBuilder, ComponentsBuilder, Schema},
};
use utoipa::{PartialSchema, ToSchema};

use super::problem::{APPLICATION_PROBLEM_JSON, Problem};

type SchemaCollection = Vec<(String, RefOr<Schema>)>;

#[derive(Default)]
pub struct OpenApiRegistry {
    operations: Vec<(String, HttpMethod, Operation)>,
    schemas: BTreeMap<String, RefOr<Schema>>,
}

impl OpenApiRegistry {
    /// Register `T` and every schema it references; returns the component name.
    pub fn ensure_schema<T: ToSchema + 'static>(&mut self) -> String {
        let root_name = T::name().into_owned();
        let mut collected: SchemaCollection =
            vec![(root_name.clone(), <T as PartialSchema>::schema())];
        T::schemas(&mut collected);
        for (name, schema) in collected {
            self.schemas.entry(name).or_insert(schema);
        }
        root_name
    }

    #[must_use]
    pub fn build(&self, title: &str, version: &str) -> OpenApi {
        tracing::debug!(
            operations = self.operations.len(),
            schemas = self.schemas.len(),
            "Building OpenAPI document"
        );

        let mut paths = PathsBuilder::new();
        for (path, method, operation) in &self.operations {
            paths = paths.path(path.clone(), PathItem::new(method.clone(), operation.clone()));
        }

        let mut components = ComponentsBuilder::new();
        for (name, schema) in &self.schemas {
            components = components.schema(name.clone(), schema.clone());
        }

        OpenApiBuilder::new()
            .info(InfoBuilder::new().title(title).version(version).build())
            .paths(paths.build())
            .components(Some(components.build()))
            .build()
    }
}

/// Describes one route for the `OpenAPI` document.
#[must_use]
pub struct OperationDoc {
    method: HttpMethod,
    path: String,
    operation: OperationBuilder,
    responses: ResponsesBuilder,
}

impl OperationDoc {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            operation: OperationBuilder::new(),
            responses: ResponsesBuilder::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn operation_id(mut self, id: &str) -> Self {
        self.operation = self.operation.operation_id(Some(id));
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.operation = self.operation.summary(Some(summary));
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.operation = self.operation.tag(tag);
        self
    }

    pub fn json_request<T: ToSchema + 'static>(
        mut self,
        registry: &mut OpenApiRegistry,
        description: &str,
    ) -> Self {
        let name = registry.ensure_schema::<T>();
        let body = RequestBodyBuilder::new()
            .description(Some(description))
            .content("application/json", schema_ref(&name))
            .required(Some(Required::True))
            .build();
        self.operation = self.operation.request_body(Some(body));
        self
    }

    pub fn json_response<T: ToSchema + 'static>(
        self,
        registry: &mut OpenApiRegistry,
        status: StatusCode,
        description: &str,
    ) -> Self {
        let name = registry.ensure_schema::<T>();
        self.response(status, description, "application/json", &name)
    }

    pub fn json_array_response<T: ToSchema + 'static>(
        mut self,
        registry: &mut OpenApiRegistry,
        status: StatusCode,
        description: &str,
    ) -> Self {
        let name = registry.ensure_schema::<T>();
        let items: RefOr<Schema> = RefOr::Ref(Ref::from_schema_name(name));
        let array = Schema::Array(ArrayBuilder::new().items(items).build());
        let resp = ResponseBuilder::new()
            .description(description)
            .content(
                "application/json",
                ContentBuilder::new().schema(Some(array)).build(),
            )
            .build();
        self.responses = self.responses.response(status.as_u16().to_string(), resp);
        self
    }

    pub fn sse_json<T: ToSchema + 'static>(
        self,
        registry: &mut OpenApiRegistry,
        description: &str,
    ) -> Self {
        let name = registry.ensure_schema::<T>();
        self.response(StatusCode::OK, description, "text/event-stream", &name)
    }

    pub fn problem_response(
        self,
        registry: &mut OpenApiRegistry,
        status: StatusCode,
        description: &str,
    ) -> Self {
        let name = registry.ensure_schema::<Problem>();
        self.response(status, description, APPLICATION_PROBLEM_JSON, &name)
    }

    /// Unauthenticated callers are redirected to sign in.
    pub fn sign_in_redirect(mut self) -> Self {
        let resp = ResponseBuilder::new()
            .description("Not signed in; redirect to the sign-in page")
            .build();
        self.responses = self
            .responses
            .response(StatusCode::SEE_OTHER.as_u16().to_string(), resp);
        self
    }

    fn response(
        mut self,
        status: StatusCode,
        description: &str,
        content_type: &str,
        schema_name: &str,
    ) -> Self {
        let resp = ResponseBuilder::new()
            .description(description)
            .content(content_type, schema_ref(schema_name))
            .build();
        self.responses = self.responses.response(status.as_u16().to_string(), resp);
        self
    }

    pub fn register(self, registry: &mut OpenApiRegistry) {
        let operation = self.operation.responses(self.responses.build()).build();
        registry
            .operations
            .push((self.path, self.method, operation));
    }
}

fn schema_ref(name: &str) -> utoipa::openapi::Content {
    ContentBuilder::new()
        .schema(Some(RefOr::Ref(Ref::from_schema_name(name))))
        .build()
}
