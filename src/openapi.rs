//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Schemas come from the `ToSchema` derives; the CRUD paths are generated per
//! resource since the handlers themselves are generic.

use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Schema, Type};
use utoipa::openapi::{
    ContentBuilder, OpenApi as OpenApiDoc, Ref, RefOr, Required, Response, ResponseBuilder,
};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::core::Resource;
use crate::entities::{Station, StationInput, Train, TrainCarriage, TrainCarriageInput, TrainInput};
use crate::pagination::PageQuery;
use crate::response::{ErrorEnvelope, Meta};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "transit-api",
        description = "CRUD API for stations, trains and train carriages"
    ),
    components(schemas(
        Station,
        StationInput,
        Train,
        TrainInput,
        TrainCarriage,
        TrainCarriageInput,
        Meta,
        ErrorEnvelope
    )),
    tags(
        (name = "stations", description = "Stations trains call at"),
        (name = "trains", description = "Trains operating on the network"),
        (name = "train-carriages", description = "Carriages belonging to a train")
    )
)]
struct ApiDoc;

/// The full document: derived components plus generated CRUD paths.
#[must_use]
pub fn build() -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    add_resource_paths::<Station>(&mut doc);
    add_resource_paths::<Train>(&mut doc);
    add_resource_paths::<TrainCarriage>(&mut doc);
    doc
}

fn inline(schema: impl Into<Schema>) -> RefOr<Schema> {
    RefOr::T(schema.into())
}

fn integer() -> RefOr<Schema> {
    inline(ObjectBuilder::new().schema_type(Type::Integer).build())
}

fn string() -> RefOr<Schema> {
    inline(ObjectBuilder::new().schema_type(Type::String).build())
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new().schema(Some(schema)).build(),
        )
        .build()
}

/// `{code, message, data}` around `data`.
fn envelope(data: RefOr<Schema>) -> RefOr<Schema> {
    inline(
        ObjectBuilder::new()
            .property("code", integer())
            .property("message", string())
            .property("data", data)
            .required("code")
            .required("message")
            .build(),
    )
}

fn error_response() -> Response {
    json_response(
        "Bind failure, invalid id, missing record or database error",
        Ref::from_schema_name("ErrorEnvelope").into(),
    )
}

fn add_resource_paths<R>(doc: &mut OpenApiDoc)
where
    R: Resource + ToSchema,
    R::InputModel: ToSchema,
{
    let tag = R::ROUTE;
    let singular = R::RESOURCE_NAME_SINGULAR;
    let plural = R::RESOURCE_NAME_PLURAL;
    let operation_name = singular.replace(' ', "_");

    let item: RefOr<Schema> = Ref::from_schema_name(R::name()).into();
    let items = inline(ArrayBuilder::new().items(item.clone()).build());
    let input: RefOr<Schema> = Ref::from_schema_name(R::InputModel::name()).into();

    let id_param = ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(format!("Id of the {singular}")))
        .schema(Some(integer()))
        .build();
    let input_body = RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new().schema(Some(input)).build(),
        )
        .required(Some(Required::True))
        .build();

    let collection = format!("/{}", R::ROUTE);
    let member = format!("/{}/{{id}}", R::ROUTE);

    let list = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("get_all_{operation_name}")))
        .summary(Some(format!("Get all {plural}")))
        .description(Some(R::RESOURCE_DESCRIPTION))
        .parameters(Some(PageQuery::into_params(|| Some(ParameterIn::Query))))
        .response(
            "200",
            json_response(
                &format!("One page of {plural}"),
                inline(
                    ObjectBuilder::new()
                        .property("code", integer())
                        .property("message", string())
                        .property("data", items.clone())
                        .property("meta", Ref::from_schema_name("Meta"))
                        .build(),
                ),
            ),
        )
        .response("400", error_response());
    doc.paths
        .add_path_operation(&collection, vec![HttpMethod::Get], list);

    let create_body = RequestBodyBuilder::new()
        .description(Some(format!(
            "One {singular}, or an array of them to create atomically"
        )))
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(R::InputModel::name())))
                .build(),
        )
        .required(Some(Required::True))
        .build();
    let create = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("create_{operation_name}")))
        .summary(Some(format!("Create {plural}")))
        .request_body(Some(create_body))
        .response(
            "201",
            json_response(&format!("The created {singular}"), envelope(item.clone())),
        )
        .response("400", error_response());
    doc.paths
        .add_path_operation(&collection, vec![HttpMethod::Post], create);

    let get_one = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("get_{operation_name}")))
        .summary(Some(format!("Get one {singular} by id")))
        .parameter(id_param.clone())
        .response(
            "200",
            json_response(&format!("The requested {singular}"), envelope(item.clone())),
        )
        .response("400", error_response());
    doc.paths
        .add_path_operation(&member, vec![HttpMethod::Get], get_one);

    let update = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("update_{operation_name}")))
        .summary(Some(format!("Replace one {singular}")))
        .parameter(id_param.clone())
        .request_body(Some(input_body))
        .response(
            "200",
            json_response(&format!("The updated {singular}"), envelope(item)),
        )
        .response("400", error_response());
    doc.paths
        .add_path_operation(&member, vec![HttpMethod::Put], update);

    let delete = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("delete_{operation_name}")))
        .summary(Some(format!("Delete one {singular}")))
        .parameter(id_param)
        .response(
            "200",
            json_response(
                &format!("The {singular} was deleted"),
                envelope(inline(ObjectBuilder::new().schema_type(Type::Null).build())),
            ),
        )
        .response("400", error_response());
    doc.paths
        .add_path_operation(&member, vec![HttpMethod::Delete], delete);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_collection_and_member_paths() {
        let doc = build();
        for route in ["stations", "trains", "train-carriages"] {
            let collection = format!("/{route}");
            let member = format!("/{route}/{{id}}");
            assert!(doc.paths.paths.contains_key(&collection), "{route}");
            assert!(doc.paths.paths.contains_key(&member), "{route}");
        }
    }

    #[test]
    fn collection_path_has_list_and_create() {
        let doc = build();
        let item = &doc.paths.paths["/trains"];
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }

    #[test]
    fn schemas_are_registered() {
        let doc = build();
        let components = doc.components.expect("components");
        for name in [
            "Train",
            "TrainInput",
            "TrainCarriage",
            "Station",
            "ErrorEnvelope",
            "Meta",
        ] {
            assert!(components.schemas.contains_key(name), "{name}");
        }
    }
}
