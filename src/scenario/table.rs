//! The scenario table.

use super::{
    DownstreamMethod, ErrorBodyHandling, HeaderAuth, JsonSample, PathVars, RequestBody,
    ResponseShape, Scenario, ScenarioId, UploadFile,
};

const OK: &[u16] = &[200];
const CREATED: &[u16] = &[201];
const OK_OR_CREATED: &[u16] = &[200, 201];

const NAME_AND_PHONE: &[(&str, &str)] = &[("name", "Ye Win"), ("phone", "+959123456789")];

/// Plain GET, text response, 200 expected.
const BASE: Scenario = Scenario {
    id: ScenarioId::ResponseSingleStringDemo,
    label: "",
    route: "",
    default_endpoint: "",
    method: DownstreamMethod::Get,
    path_vars: PathVars::None,
    query: &[],
    auth: HeaderAuth::None,
    body: RequestBody::None,
    response: ResponseShape::Text,
    success_statuses: OK,
    error_body: ErrorBodyHandling::Declared,
};

const STUDENT_BODY: RequestBody = RequestBody::Json {
    sample: JsonSample::Student,
};

/// Every scenario, in the order the local routes are registered.
pub static SCENARIOS: &[Scenario] = &[
    // Response shapes
    Scenario {
        id: ScenarioId::ResponseSingleStringDemo,
        label: "ResponseSingleStringDemo",
        route: "/callResponseSingleStringDemoAPI",
        default_endpoint: "responseSingleStringDemo",
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseSingleObjectDemo,
        label: "ResponseSingleObjectDemo",
        route: "/callResponseSingleObjectDemoAPI",
        default_endpoint: "responseSingleObjectDemo",
        response: ResponseShape::Count,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseObjectDemo,
        label: "ResponseObjectDemo",
        route: "/callResponseObjectDemoAPI",
        default_endpoint: "responseObjectDemo",
        response: ResponseShape::Student,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseStringListDemo,
        label: "ResponseStringListDemo",
        route: "/callResponseStringListDemoAPI",
        default_endpoint: "responseStringListDemo",
        response: ResponseShape::StringList,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseObjectListDemo,
        label: "ResponseObjectListDemo",
        route: "/callResponseObjectListDemoAPI",
        default_endpoint: "responseObjectListDemo",
        response: ResponseShape::StudentList,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseCustomObjectListDemo,
        label: "ResponseCustomObjectListDemo",
        route: "/callResponseCustomObjectListDemoAPI",
        default_endpoint: "responseCustomObjectListDemo",
        response: ResponseShape::StudentNameAndClassList,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ResponseNestedObjectDemo,
        label: "ResponseNestedObjectDemo",
        route: "/callResponseNestedObjectDemoAPI",
        default_endpoint: "responseNestedObjectDemo",
        response: ResponseShape::ResponseObject,
        ..BASE
    },
    // Earlier releases reported this row as
    // "call ResponseNestedObjectAndNestedObjectListDemoNestedObjectDemo API";
    // it now follows the label like every other row.
    Scenario {
        id: ScenarioId::ResponseNestedObjectAndNestedObjectListDemo,
        label: "ResponseNestedObjectAndNestedObjectListDemo",
        route: "/callResponseNestedObjectAndNestedObjectListDemoAPI",
        default_endpoint: "responseNestedObjectAndNestedObjectListDemo",
        response: ResponseShape::ResponseObjectList,
        ..BASE
    },
    // Request shapes
    Scenario {
        id: ScenarioId::RequestBodyObjectDemo,
        label: "RequestBodyObjectDemo",
        route: "/callRequestBodyObjectDemoAPI",
        default_endpoint: "requestBodyObjectDemo",
        method: DownstreamMethod::Post,
        body: STUDENT_BODY,
        success_statuses: CREATED,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestBodyObjectListDemo,
        label: "RequestBodyObjectListDemo",
        route: "/callRequestBodyObjectListDemoAPI",
        default_endpoint: "requestBodyObjectListDemo",
        method: DownstreamMethod::Post,
        body: RequestBody::Json {
            sample: JsonSample::StudentList,
        },
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestBodyStringListDemo,
        label: "RequestBodyStringListDemo",
        route: "/callRequestBodyStringListDemoAPI",
        default_endpoint: "requestBodyStringListDemo",
        method: DownstreamMethod::Post,
        body: RequestBody::Json {
            sample: JsonSample::StringList,
        },
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestPathVariableIntegerDemo,
        label: "RequestPathVariableIntegerDemo",
        route: "/callRequestPathVariableIntegerDemoAPI",
        default_endpoint: "requestPathVariableIntegerDemo/{id}",
        path_vars: PathVars::Positional(&["1"]),
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestMultiPathVariablesDemo,
        label: "RequestMultiPathVariablesDemo",
        route: "/callRequestMultiPathVariablesDemoAPI",
        default_endpoint: "requestMultiPathVariablesDemo/{user profile}/{name}",
        path_vars: PathVars::Named(&[("user profile", "Java Developer"), ("name", "Ye Win")]),
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestParamStringDemo,
        label: "RequestParamStringDemo",
        route: "/callRequestParamStringDemoAPI",
        default_endpoint: "requestParamStringDemo",
        query: &[("name", "Ye Win")],
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestMultiParamsDemo,
        label: "RequestMultiParamsDemo",
        route: "/callRequestMultiParamsDemoAPI",
        default_endpoint: "requestMultiParamsDemo",
        method: DownstreamMethod::Put,
        query: &[("id", "1"), ("name", "Ye Win")],
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestPathVariableAndParamsDemo,
        label: "RequestPathVariableAndParamsDemo",
        route: "/callRequestPathVariableAndParamsDemoAPI",
        default_endpoint: "requestPathVariableAndParamsDemo/{name}",
        path_vars: PathVars::Positional(&["Ye Win"]),
        query: &[("actionType", "bill")],
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderDemo,
        label: "RequestFromHeaderDemo",
        route: "/callRequestFromHeaderDemoAPI",
        default_endpoint: "requestFromHeaderDemo",
        auth: HeaderAuth::Basic,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndRequestParamDemo,
        label: "RequestFromHeaderAndRequestParamDemo",
        route: "/callRequestFromHeaderAndRequestParamDemoAPI",
        default_endpoint: "requestFromHeaderAndRequestParamDemo",
        query: &[("name", "Ye Win")],
        auth: HeaderAuth::Bearer,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndRequestBodyDemo,
        label: "RequestFromHeaderAndRequestBodyDemo",
        route: "/callRequestFromHeaderAndRequestBodyDemoAPI",
        default_endpoint: "requestFromHeaderAndRequestBodyDemo",
        method: DownstreamMethod::Post,
        auth: HeaderAuth::Bearer,
        body: STUDENT_BODY,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFileUploadDemo,
        label: "RequestFileUploadDemo",
        route: "/callRequestFileUploadDemoAPI",
        default_endpoint: "requestFileUploadDemo",
        method: DownstreamMethod::Post,
        body: RequestBody::Multipart {
            field: "file",
            files: &[UploadFile::Primary],
        },
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndBulkFileUpload,
        label: "RequestFromHeaderAndBulkFileUpload",
        route: "/callRequestFromHeaderAndBulkFileUploadAPI",
        default_endpoint: "requestFromHeaderAndBulkFileUploadDemo",
        method: DownstreamMethod::Post,
        auth: HeaderAuth::Bearer,
        body: RequestBody::Multipart {
            field: "files",
            files: &[UploadFile::Primary, UploadFile::Secondary],
        },
        ..BASE
    },
    // Request and response shapes together
    Scenario {
        id: ScenarioId::RequestPathVariableAndResponseObjectDemo,
        label: "RequestPathVariableAndResponseObjectDemo",
        route: "/callRequestPathVariableAndResponseObjectDemoAPI",
        default_endpoint: "requestPathVariableAndResponseObjectDemo/{actionType}",
        path_vars: PathVars::Positional(&["bill payment"]),
        response: ResponseShape::Student,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestParamStringAndResponseObjectListDemo,
        label: "RequestParamStringAndResponseObjectListDemo",
        route: "/callRequestParamStringAndResponseObjectListDemoAPI",
        default_endpoint: "requestParamStringAndResponseObjectListDemo",
        query: NAME_AND_PHONE,
        response: ResponseShape::StudentList,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndRequestBodyAndResponseNestedObjectDemo,
        label: "RequestFromHeaderAndRequestBodyAndResponseNestedObjectDemo",
        route: "/callRequestFromHeaderAndRequestBodyAndResponseNestedObjectDemoAPI",
        default_endpoint: "requestFromHeaderAndRequestBodyAndResponseNestedObjectDemo",
        method: DownstreamMethod::Post,
        auth: HeaderAuth::Bearer,
        body: STUDENT_BODY,
        response: ResponseShape::ResponseObject,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndRequestParamStringAndResponseNestedObjectListDemo,
        label: "RequestFromHeaderAndRequestParamStringAndResponseNestedObjectListDemo",
        route: "/callRequestFromHeaderAndRequestParamStringAndResponseNestedObjectListDemoAPI",
        default_endpoint: "requestFromHeaderAndRequestParamStringAndResponseNestedObjectListDemo",
        query: NAME_AND_PHONE,
        auth: HeaderAuth::Bearer,
        response: ResponseShape::ResponseObjectList,
        ..BASE
    },
    Scenario {
        id: ScenarioId::RequestFromHeaderAndPathVarAndParamsAndResponseNestedObjectListDemo,
        label: "RequestFromHeaderAndPathVarAndParamsAndResponseNestedObjectListDemo",
        route: "/callRequestFromHeaderAndPathVarAndParamsAndResponseNestedObjectListDemoAPI",
        default_endpoint:
            "requestFromHeaderAndPathVarAndParamsAndResponseNestedObjectListDemo/{accName}/{card}",
        path_vars: PathVars::Named(&[("accName", "YE WIN"), ("card", "VISA")]),
        query: &[
            ("pageNo", "0"),
            ("pageSize", "10"),
            ("sortBy", "id"),
            ("actionType", "Bill"),
        ],
        auth: HeaderAuth::Bearer,
        response: ResponseShape::ResponseObjectList,
        ..BASE
    },
    // Canned receiver errors
    Scenario {
        id: ScenarioId::ErrorBadRequestResponseDemo,
        label: "ErrorBadRequestResponseDemo",
        route: "/callErrorBadRequestResponseDemoAPI",
        default_endpoint: "errorBadRequestResponseDemo",
        query: NAME_AND_PHONE,
        error_body: ErrorBodyHandling::ParseStructured,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ErrorNotFoundResponseDemo,
        label: "ErrorNotFoundResponseDemo",
        route: "/callErrorNotFoundResponseDemoAPI",
        default_endpoint: "errorNotFoundResponseDemo/{id}",
        path_vars: PathVars::Named(&[("id", "1")]),
        error_body: ErrorBodyHandling::ParseStructured,
        ..BASE
    },
    Scenario {
        id: ScenarioId::ErrorInternalServerErrorResponseDemo,
        label: "ErrorInternalServerErrorResponseDemo",
        route: "/callErrorInternalServerErrorResponseDemoAPI",
        default_endpoint: "errorInternalServerErrorResponseDemo",
        method: DownstreamMethod::Post,
        body: STUDENT_BODY,
        success_statuses: OK_OR_CREATED,
        ..BASE
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use reqwest::StatusCode;

    use super::*;
    use crate::scenario::{find, find_by_route};

    #[test]
    fn test_ids_routes_and_labels_are_unique() {
        let ids: HashSet<_> = SCENARIOS.iter().map(|s| s.id).collect();
        let routes: HashSet<_> = SCENARIOS.iter().map(|s| s.route).collect();
        let labels: HashSet<_> = SCENARIOS.iter().map(|s| s.label).collect();
        assert_eq!(ids.len(), SCENARIOS.len());
        assert_eq!(routes.len(), SCENARIOS.len());
        assert_eq!(labels.len(), SCENARIOS.len());
    }

    #[test]
    fn test_every_row_is_filled_in() {
        for s in SCENARIOS {
            assert!(!s.label.is_empty(), "{:?} has no label", s.id);
            assert!(s.route.starts_with("/call"), "{:?} route {}", s.id, s.route);
            assert!(!s.default_endpoint.is_empty(), "{:?} has no endpoint", s.id);
            assert!(!s.success_statuses.is_empty());
        }
    }

    #[test]
    fn test_placeholders_match_path_vars() {
        for s in SCENARIOS {
            let placeholders = s.default_endpoint.matches('{').count();
            let expected = match s.path_vars {
                PathVars::None => 0,
                PathVars::Positional(values) => values.len(),
                PathVars::Named(pairs) => pairs.len(),
            };
            assert_eq!(placeholders, expected, "{:?}", s.id);
        }
    }

    #[test]
    fn test_only_canned_errors_parse_structured_bodies() {
        let structured: Vec<_> = SCENARIOS
            .iter()
            .filter(|s| s.error_body == ErrorBodyHandling::ParseStructured)
            .map(|s| s.id)
            .collect();
        assert_eq!(
            structured,
            vec![
                ScenarioId::ErrorBadRequestResponseDemo,
                ScenarioId::ErrorNotFoundResponseDemo
            ]
        );
    }

    #[test]
    fn test_create_style_success_statuses() {
        let create = find(ScenarioId::RequestBodyObjectDemo).unwrap();
        assert!(create.expects(StatusCode::CREATED));
        assert!(!create.expects(StatusCode::OK));

        let ise = find(ScenarioId::ErrorInternalServerErrorResponseDemo).unwrap();
        assert!(ise.expects(StatusCode::OK));
        assert!(ise.expects(StatusCode::CREATED));
        assert!(!ise.expects(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_lookup_by_route() {
        let s = find_by_route("/callRequestFromHeaderAndBulkFileUploadAPI").unwrap();
        assert_eq!(s.id, ScenarioId::RequestFromHeaderAndBulkFileUpload);
        assert_eq!(s.description(), "call RequestFromHeaderAndBulkFileUpload API");
        assert!(find_by_route("/nope").is_none());
    }

    #[test]
    fn test_nested_list_description_uses_label() {
        let s = find(ScenarioId::ResponseNestedObjectAndNestedObjectListDemo).unwrap();
        assert_eq!(
            s.description(),
            "call ResponseNestedObjectAndNestedObjectListDemo API"
        );
    }

    #[test]
    fn test_config_keys_parse_to_ids() {
        let id: ScenarioId = "request_from_header_and_bulk_file_upload".parse().unwrap();
        assert_eq!(id, ScenarioId::RequestFromHeaderAndBulkFileUpload);
        assert!("ResponseSingleStringDemo".parse::<ScenarioId>().is_err());
    }
}
