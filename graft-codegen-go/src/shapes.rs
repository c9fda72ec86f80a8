//! Surface and wire record shapes.
//!
//! For every entity the handler file declares a fixed family of surface
//! records; the backend's proto messages are modeled here as wire shapes so
//! the transcoder can plan the correspondence between the two.

use graft_codegen::naming::{self, Verb};
use graft_ir::{Entity, Field, FieldType};

use crate::ast::GoStruct;
use crate::transcode::{RecordShape, ShapeField, ShapeType};
use crate::type_map;

fn surface_scalar(f: &Field) -> ShapeType {
    match &f.ty {
        FieldType::Id => ShapeType::Id,
        // Enums and timestamps travel as strings on the surface.
        FieldType::Str | FieldType::Enum | FieldType::Timestamp => ShapeType::Str,
        FieldType::Int | FieldType::UInt => ShapeType::Int32,
        FieldType::Bool => ShapeType::Bool,
        FieldType::Input(name) => ShapeType::Named(name.clone()),
    }
}

fn wire_scalar(f: &Field) -> ShapeType {
    match &f.ty {
        FieldType::Id | FieldType::Str => ShapeType::Str,
        FieldType::Int => ShapeType::Int32,
        FieldType::UInt => ShapeType::Uint32,
        FieldType::Bool if f.is_nullable => ShapeType::BoxedBool,
        FieldType::Bool => ShapeType::Bool,
        FieldType::Enum => ShapeType::Enum(naming::pascal(&f.name)),
        FieldType::Timestamp => ShapeType::Timestamp,
        FieldType::Input(name) => ShapeType::Named(name.clone()),
    }
}

/// The surface shape field for an entity field.
pub fn surface_field(f: &Field) -> ShapeField {
    let mut field = ShapeField::new(naming::pascal(&f.name), surface_scalar(f));
    if f.is_nullable {
        field = field.optional();
    }
    if f.is_array {
        field = field.repeated();
    }
    field
}

/// The wire shape field for an entity field. Wire scalars carry no optional
/// marker; absence is zero-valued, except the boxed boolean and message
/// kinds, which the transcoder treats specially.
pub fn wire_field(f: &Field) -> ShapeField {
    let mut field = ShapeField::new(naming::pascal(&f.name), wire_scalar(f));
    if f.is_array {
        field = field.repeated();
    }
    field
}

fn surface_id() -> ShapeField {
    ShapeField::new("ID", ShapeType::Id)
}

fn wire_id() -> ShapeField {
    ShapeField::new("Id", ShapeType::Str)
}

fn with_bookkeeping(shape: RecordShape) -> RecordShape {
    shape
        .field(ShapeField::new("state", ShapeType::Internal))
        .field(ShapeField::new("sizeCache", ShapeType::Internal))
        .field(ShapeField::new("unknownFields", ShapeType::Internal))
}

/// Render a surface shape as its Go struct declaration.
pub fn record_struct(shape: &RecordShape) -> GoStruct {
    shape
        .fields
        .iter()
        .fold(GoStruct::new(&shape.name), |s, f| s.field(&f.name, type_map::go_type(f)))
}

/// The surface record family for one entity.
pub struct EntityShapes {
    pub get_request: RecordShape,
    /// The entity record itself; doubles as the Get response.
    pub record: RecordShape,
    /// Nullable-wrapper records, one per searchable enum field.
    pub enum_wrappers: Vec<RecordShape>,
    pub filter: Option<RecordShape>,
    pub list_request: RecordShape,
    pub list_response: RecordShape,
    pub create_request: RecordShape,
    pub create_response: RecordShape,
    pub update_request: RecordShape,
    pub update_response: RecordShape,
    pub delete_request: RecordShape,
    pub delete_response: RecordShape,
}

impl EntityShapes {
    pub fn build(module: &str, entity: &Entity) -> Self {
        let name = entity.name.as_str();
        let record_name = naming::type_name(module, name);

        let get_request =
            RecordShape::new(naming::request_type_name(module, Verb::Get, name)).field(surface_id());

        let record = entity
            .fields
            .iter()
            .fold(RecordShape::new(&record_name).field(surface_id()), |r, f| {
                r.field(surface_field(f))
            });

        let enum_wrappers = entity
            .searchable_enum_fields()
            .iter()
            .map(|f| {
                let wrapper = naming::pascal(&f.name);
                RecordShape::new(&wrapper)
                    .field(ShapeField::new("Nullable", ShapeType::Str).optional())
                    .field(ShapeField::new(&wrapper, ShapeType::Str).optional())
            })
            .collect();

        let filter = build_filter(entity);

        let mut list_request = RecordShape::new(naming::request_type_name(module, Verb::List, name))
            .field(ShapeField::new("Pagination", ShapeType::Named("PaginationInput".into())).optional())
            .field(ShapeField::new("SearchBy", ShapeType::Str).optional());
        if let Some(filter) = &filter {
            list_request = list_request
                .field(ShapeField::new("FilterBy", ShapeType::Named(filter.name.clone())).optional());
        }

        let list_response = RecordShape::new(naming::multi_type_name(module, name))
            .field(
                ShapeField::new(naming::plural(&record_name), ShapeType::Named(record_name.clone()))
                    .optional()
                    .repeated(),
            )
            .field(ShapeField::new("Pagination", ShapeType::Named("Pagination".into())).optional());

        let create_request = entity.fields.iter().fold(
            RecordShape::new(naming::request_type_name(module, Verb::Create, name)),
            |r, f| r.field(surface_field(f)),
        );
        let create_response =
            RecordShape::new(naming::response_type_name(module, Verb::Create, name)).field(surface_id());

        let update_request = entity.fields.iter().fold(
            RecordShape::new(naming::request_type_name(module, Verb::Update, name)).field(surface_id()),
            |r, f| r.field(surface_field(f)),
        );
        let update_response = RecordShape::new(naming::response_type_name(module, Verb::Update, name))
            .field(ShapeField::new("Message", ShapeType::Str));

        let delete_request =
            RecordShape::new(naming::request_type_name(module, Verb::Delete, name)).field(surface_id());
        let delete_response = RecordShape::new(naming::response_type_name(module, Verb::Delete, name))
            .field(ShapeField::new("Message", ShapeType::Str));

        Self {
            get_request,
            record,
            enum_wrappers,
            filter,
            list_request,
            list_response,
            create_request,
            create_response,
            update_request,
            update_response,
            delete_request,
            delete_response,
        }
    }

    /// The record declarations in emission order.
    pub fn declarations(&self) -> Vec<&RecordShape> {
        let mut decls = vec![&self.get_request, &self.record];
        decls.extend(self.enum_wrappers.iter());
        decls.extend(self.filter.iter());
        decls.extend([
            &self.list_request,
            &self.list_response,
            &self.create_request,
            &self.create_response,
            &self.update_request,
            &self.update_response,
            &self.delete_request,
            &self.delete_response,
        ]);
        decls
    }
}

fn build_filter(entity: &Entity) -> Option<RecordShape> {
    let fields = entity.filterable_fields();
    if fields.is_empty() {
        return None;
    }
    let shape = fields.iter().fold(
        RecordShape::new(naming::filter_type_name(&entity.name)),
        |shape, f| {
            let name = naming::pascal(&f.name);
            let ty = match f.ty {
                FieldType::Enum => ShapeType::Named(name.clone()),
                FieldType::Id => ShapeType::Id,
                _ => ShapeType::Bool,
            };
            shape.field(ShapeField::new(name, ty).optional())
        },
    );
    Some(shape)
}

/// The backend request message for a verb. List requests are assembled
/// field by field inside the bridging template rather than planned.
pub fn wire_request(verb: Verb, entity: &Entity) -> RecordShape {
    let name = entity.name.as_str();
    let shape = RecordShape::new(naming::wire_request_name(verb, name));
    let shape = match verb {
        Verb::Get | Verb::Delete => shape.field(wire_id()),
        Verb::Create => entity.fields.iter().fold(shape, |r, f| r.field(wire_field(f))),
        Verb::Update => entity
            .fields
            .iter()
            .fold(shape.field(wire_id()), |r, f| r.field(wire_field(f))),
        Verb::List => shape.field(ShapeField::new("SearchBy", ShapeType::Str)),
    };
    with_bookkeeping(shape)
}

/// The backend response message for a verb. The List response is consumed
/// field by field inside the bridging template rather than planned.
pub fn wire_response(verb: Verb, entity: &Entity) -> RecordShape {
    let name = entity.name.as_str();
    let shape = RecordShape::new(naming::wire_response_name(verb, name));
    let shape = match verb {
        Verb::Get => entity
            .fields
            .iter()
            .fold(shape.field(wire_id()), |r, f| r.field(wire_field(f))),
        Verb::Create => shape.field(wire_id()),
        Verb::Update | Verb::Delete => shape.field(ShapeField::new("Message", ShapeType::Str)),
        Verb::List => shape
            .field(
                ShapeField::new(
                    naming::plural(&naming::pascal(name)),
                    ShapeType::Named(naming::pascal(name)),
                )
                .repeated(),
            )
            .field(ShapeField::new("Pagination", ShapeType::Named("PaginationResponse".into()))),
    };
    with_bookkeeping(shape)
}

/// The backend entity message (one List item).
pub fn wire_record(entity: &Entity) -> RecordShape {
    let shape = entity.fields.iter().fold(
        RecordShape::new(naming::pascal(&entity.name)).field(wire_id()),
        |r, f| r.field(wire_field(f)),
    );
    with_bookkeeping(shape)
}

/// The backend filter message: the non-enum filterable fields. Enum filters
/// cross the wire through their nullable-wrapper messages, which the
/// bridging template builds under explicit nil checks.
pub fn wire_filter(entity: &Entity) -> RecordShape {
    let shape = entity
        .filterable_fields()
        .iter()
        .filter(|f| f.ty != FieldType::Enum)
        .fold(RecordShape::new(naming::filter_type_name(&entity.name)), |shape, f| {
            let ty = match f.ty {
                FieldType::Id => ShapeType::Str,
                _ => ShapeType::Bool,
            };
            shape.field(ShapeField::new(naming::pascal(&f.name), ty))
        });
    with_bookkeeping(shape)
}

/// The surface pagination records, declared once in the scaffolded
/// aggregator file rather than per handler file.
pub fn pagination_input() -> RecordShape {
    RecordShape::new("PaginationInput")
        .field(ShapeField::new("Limit", ShapeType::Int32).optional())
        .field(ShapeField::new("Offset", ShapeType::Int32).optional())
}

pub fn pagination() -> RecordShape {
    RecordShape::new("Pagination")
        .field(ShapeField::new("Limit", ShapeType::Int32).optional())
        .field(ShapeField::new("Offset", ShapeType::Int32).optional())
        .field(ShapeField::new("Total", ShapeType::Int32).optional())
}

/// The backend pagination messages.
pub fn wire_pagination_request() -> RecordShape {
    with_bookkeeping(
        RecordShape::new("PaginationRequest")
            .field(ShapeField::new("Limit", ShapeType::Int32))
            .field(ShapeField::new("Offset", ShapeType::Int32)),
    )
}

pub fn wire_pagination_response() -> RecordShape {
    with_bookkeeping(
        RecordShape::new("PaginationResponse")
            .field(ShapeField::new("Limit", ShapeType::Int32))
            .field(ShapeField::new("Offset", ShapeType::Int32))
            .field(ShapeField::new("Total", ShapeType::Int32)),
    )
}

#[cfg(test)]
mod tests {
    use graft_codegen::{CodeBuilder, Indent};

    use super::*;

    fn project() -> Entity {
        Entity::new("project")
            .field(Field::new("name", FieldType::Str))
            .field(Field::new("description", FieldType::Str))
    }

    #[test]
    fn record_family_names() {
        let shapes = EntityShapes::build("projects", &project());
        assert_eq!(shapes.get_request.name, "ProjectsGetProjectRequest");
        assert_eq!(shapes.record.name, "ProjectsProject");
        assert_eq!(shapes.list_request.name, "ProjectsListProjectsRequest");
        assert_eq!(shapes.list_response.name, "MultiProjectsProject");
        assert_eq!(shapes.create_request.name, "ProjectsCreateProjectRequest");
        assert_eq!(shapes.delete_response.name, "ProjectsDeleteProjectResponse");
    }

    #[test]
    fn create_request_has_no_identifier() {
        let shapes = EntityShapes::build("projects", &project());
        assert!(shapes.create_request.fields.iter().all(|f| f.name != "ID"));
        assert_eq!(shapes.update_request.fields[0].name, "ID");
    }

    #[test]
    fn filter_only_when_filterable_fields_exist() {
        assert!(EntityShapes::build("projects", &project()).filter.is_none());

        let entity = project().field(Field::new("verified", FieldType::Bool).searchable());
        let shapes = EntityShapes::build("projects", &entity);
        let filter = shapes.filter.expect("filter shape");
        assert_eq!(filter.name, "FilterProject");
        assert!(filter.fields.iter().all(|f| f.optional));
        // the list request grows a FilterBy field
        assert!(shapes.list_request.fields.iter().any(|f| f.name == "FilterBy"));
    }

    #[test]
    fn searchable_enum_gets_wrapper_record() {
        let entity = project().field(Field::new("project_type", FieldType::Enum).searchable());
        let shapes = EntityShapes::build("projects", &entity);
        assert_eq!(shapes.enum_wrappers.len(), 1);
        assert_eq!(shapes.enum_wrappers[0].name, "ProjectType");
        assert_eq!(shapes.enum_wrappers[0].fields[0].name, "Nullable");
    }

    #[test]
    fn wire_shapes_carry_bookkeeping_fields() {
        let wire = wire_record(&project());
        let names: Vec<_> = wire.fields.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"state"));
        assert!(names.contains(&"sizeCache"));
        assert!(names.contains(&"unknownFields"));
        assert_eq!(names[0], "Id");
    }

    #[test]
    fn nullable_wire_bool_is_boxed() {
        let entity = Entity::new("flag").field(Field::new("enabled", FieldType::Bool).nullable());
        let wire = wire_record(&entity);
        assert_eq!(wire.fields[1].ty, ShapeType::BoxedBool);
    }

    #[test]
    fn declarations_render_in_fixed_order() {
        let shapes = EntityShapes::build("projects", &project());
        let names: Vec<_> = shapes.declarations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ProjectsGetProjectRequest",
                "ProjectsProject",
                "ProjectsListProjectsRequest",
                "MultiProjectsProject",
                "ProjectsCreateProjectRequest",
                "ProjectsCreateProjectResponse",
                "ProjectsUpdateProjectRequest",
                "ProjectsUpdateProjectResponse",
                "ProjectsDeleteProjectRequest",
                "ProjectsDeleteProjectResponse",
            ]
        );
    }

    #[test]
    fn record_struct_renders_go_declaration() {
        let shapes = EntityShapes::build("projects", &project());
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.emit(&record_struct(&shapes.record));
        assert_eq!(
            builder.build(),
            "type ProjectsProject struct {\n\
             \tID graphql.ID\n\
             \tName string\n\
             \tDescription string\n\
             }\n"
        );
    }
}
