//! Rendered handler file tests.

use graft_codegen_go::HandlerGenerator;
use graft_ir::{Entity, Field, FieldType, Service};

fn client_service() -> Service {
    Service {
        name: "Client".into(),
        enums: vec![],
        entities: vec![
            Entity::new("Project")
                .field(Field::new("Name", FieldType::Str))
                .field(Field::new("Description", FieldType::Str)),
        ],
    }
}

#[test]
fn get_bridge_transcodes_invokes_and_returns() {
    let service = client_service();
    let generator = HandlerGenerator::new(&service, "Projects", "example.com/backend");
    let code = generator.render().unwrap();

    let expected = "func (r *ProjectsClientResolver) ProjectsGetProject(args ProjectsGetProjectRequest) (*ProjectsProject, error) {\n\
         \treq, err := projectsGetProjectRequestToPbGetProjectRequest(args)\n\
         \tif err != nil {\n\
         \t\treturn nil, err\n\
         \t}\n\
         \tresult, err := r.srv.GetProject(nil, &req)\n\
         \tif err != nil {\n\
         \t\treturn nil, err\n\
         \t}\n\
         \tresp := pbGetProjectResponseToProjectsProject(*result)\n\
         \treturn &resp, nil\n\
         }\n";
    assert!(code.contains(expected), "missing Get bridge in:\n{}", code);
}

#[test]
fn record_declarations_cover_the_verb_family() {
    let service = client_service();
    let generator = HandlerGenerator::new(&service, "Projects", "example.com/backend");
    let code = generator.render().unwrap();

    assert!(code.contains("type ProjectsGetProjectRequest struct {\n\tID graphql.ID\n}"));
    assert!(code.contains(
        "type ProjectsProject struct {\n\tID graphql.ID\n\tName string\n\tDescription string\n}"
    ));
    assert!(code.contains(
        "type ProjectsCreateProjectRequest struct {\n\tName string\n\tDescription string\n}"
    ));
    assert!(code.contains("type ProjectsCreateProjectResponse struct {\n\tID graphql.ID\n}"));
    assert!(code.contains("type ProjectsUpdateProjectResponse struct {\n\tMessage string\n}"));
    assert!(code.contains("type ProjectsDeleteProjectRequest struct {\n\tID graphql.ID\n}"));
    assert!(code.contains(
        "type ProjectsListProjectsRequest struct {\n\tPagination *PaginationInput\n\tSearchBy *string\n}"
    ));
    assert!(code.contains(
        "type MultiProjectsProject struct {\n\tProjectsProjects []*ProjectsProject\n\tPagination *Pagination\n}"
    ));
}

#[test]
fn list_bridge_builds_request_and_collects_items() {
    let service = client_service();
    let generator = HandlerGenerator::new(&service, "Projects", "example.com/backend");
    let code = generator.render().unwrap();

    let expected = "func (r *ProjectsClientResolver) ProjectsListProjects(args ProjectsListProjectsRequest) (*MultiProjectsProject, error) {\n\
         \treq := pb.ListProjectsRequest{}\n\
         \tif args.SearchBy != nil {\n\
         \t\treq.SearchBy = *args.SearchBy\n\
         \t}\n\
         \tif args.Pagination != nil {\n\
         \t\treqPagination, err := projectsPaginationInputToPbPaginationRequest(*args.Pagination)\n\
         \t\tif err != nil {\n\
         \t\t\treturn nil, err\n\
         \t\t}\n\
         \t\treq.Pagination = &reqPagination\n\
         \t}\n\
         \tresult, err := r.srv.ListProjects(nil, &req)\n\
         \tif err != nil {\n\
         \t\treturn nil, err\n\
         \t}\n\
         \trespProjects := []*ProjectsProject{}\n\
         \tfor _, item := range result.Projects {\n\
         \t\tresp := pbProjectToProjectsProject(*item)\n\
         \t\trespProjects = append(respProjects, &resp)\n\
         \t}\n\
         \trespPagination := pbPaginationResponseToProjectsPagination(*result.Pagination)\n\
         \treturn &MultiProjectsProject{\n\
         \t\tProjectsProjects: respProjects,\n\
         \t\tPagination: &respPagination,\n\
         \t}, nil\n\
         }\n";
    assert!(code.contains(expected), "missing List bridge in:\n{}", code);
}

#[test]
fn filterable_entity_grows_filter_plumbing() {
    let service = Service {
        name: "Client".into(),
        enums: vec![],
        entities: vec![
            Entity::new("Project")
                .field(Field::new("Name", FieldType::Str))
                .field(Field::new("Verified", FieldType::Bool).searchable())
                .field(Field::new("ProjectType", FieldType::Enum).searchable()),
        ],
    };
    let generator = HandlerGenerator::new(&service, "Projects", "example.com/backend");
    let code = generator.render().unwrap();

    // filter record and list request field
    assert!(code.contains("type FilterProject struct {\n\tVerified *bool\n\tProjectType *ProjectType\n}"));
    assert!(code.contains("FilterBy *FilterProject"));

    // the enum wrapper record mirrors the schema-side input
    assert!(code.contains("type ProjectType struct {\n\tNullable *string\n\tProjectType *string\n}"));

    // guarded filter assembly inside the List bridge
    assert!(code.contains("if args.FilterBy != nil {"));
    assert!(code.contains("reqFilter, err := filterProjectToPbFilterProject(*args.FilterBy)"));
    assert!(code.contains("if args.FilterBy.ProjectType != nil {"));
    assert!(code.contains("func buildProjectTypeNullableStruct(goStruct ProjectType) *pb.NullableProjectType {"));

    // enum fields round-trip as names on the surface
    assert!(code.contains("dst.ProjectType = pb.ProjectType(pb.ProjectType_value[src.ProjectType])"));
    assert!(code.contains("dst.ProjectType = src.ProjectType.String()"));

    assert!(code.contains("\"google.golang.org/protobuf/types/known/structpb\""));
}

#[test]
fn generation_is_deterministic() {
    let service = client_service();
    let first = HandlerGenerator::new(&service, "Projects", "example.com/backend")
        .render()
        .unwrap();
    let second = HandlerGenerator::new(&service, "Projects", "example.com/backend")
        .render()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn two_entities_emit_two_verb_blocks() {
    let service = Service {
        name: "Client".into(),
        enums: vec![],
        entities: vec![
            Entity::new("Project").field(Field::new("Name", FieldType::Str)),
            Entity::new("Milestone").field(Field::new("Date", FieldType::Timestamp)),
        ],
    };
    let generator = HandlerGenerator::new(&service, "Projects", "example.com/backend");
    let code = generator.render().unwrap();

    for op in [
        "ProjectsGetProject",
        "ProjectsListProjects",
        "ProjectsCreateProject",
        "ProjectsUpdateProject",
        "ProjectsDeleteProject",
        "ProjectsGetMilestone",
        "ProjectsListMilestones",
        "ProjectsCreateMilestone",
        "ProjectsUpdateMilestone",
        "ProjectsDeleteMilestone",
    ] {
        assert!(
            code.contains(&format!("func (r *ProjectsClientResolver) {}(", op)),
            "missing {}",
            op
        );
    }

    // the timestamp field forces the time imports and RFC 3339 handling
    assert!(code.contains("dateTime, err := time.Parse(time.RFC3339, src.Date)"));
    assert!(code.contains("dst.Date = src.Date.AsTime().UTC().Format(time.RFC3339)"));

    // the resolver holder appears exactly once, last
    assert_eq!(code.matches("func NewProjectsClientResolver() ProjectsClientResolver {").count(), 1);
}
