//! Built-in fault categories
//!
//! Append new categories in the range of their group. Codes are never
//! reused: external tools store them in reports. Texts are kept exactly as
//! published upstream, typos included; wording changes go upstream first.

use super::{CatalogIntegrityError, FaultCategoryRecord};

/// Codes of the built-in categories
pub mod codes {
    pub const HTTP_STATUS_500: u16 = 100;
    pub const SCHEMA_INVALID_RESPONSE: u16 = 101;
    pub const SCHEMA_VALIDATION_BYPASS: u16 = 102;
    pub const DELETE_NOT_WORKING: u16 = 103;
    pub const FAILED_CREATION_SIDE_EFFECTS: u16 = 104;

    pub const SQL_INJECTION: u16 = 200;
    pub const XSS: u16 = 201;
    pub const SSRF: u16 = 202;
    pub const MASS_ASSIGNMENT: u16 = 203;
}

struct DefinedCategory {
    code: u16,
    name: &'static str,
    test_case_label: &'static str,
    description: &'static str,
}

const DEFINED: &[DefinedCategory] = &[
    // 1xx: base
    DefinedCategory {
        code: codes::HTTP_STATUS_500,
        name: "HTTP Status 500",
        test_case_label: "causes500_internalServerError",
        description: concat!(
            "The HTTP status code 500 represents a 'Server Error'.",
            " Typically, when there is crash in the business logic of the tested backend, like for example due to",
            " a null-pointer exception, the server would not crash, but rather return a response with status code 500.",
            " Therefore, the presence of such a response 'might' indicate the presence of a fault in the backend.",
            " However, such code might also be used for other cases that have nothing to do with software faults.",
            " For example, if a request cannot be handled due to issue with the environment, e.g., databases and ",
            " communications with other APIs, a status code 500 could be sent.",
            " As such, although there is high chances that a 500 status code might point to the presence of a",
            " software fault in the tested application, they still need to be manually checked due to possible 'false-positive'.",
        ),
    },
    DefinedCategory {
        code: codes::SCHEMA_INVALID_RESPONSE,
        name: "Received A Response From API That Is Not Valid According To Its Schema",
        test_case_label: "returnsSchemaInvalidResponse",
        description: concat!(
            "A schema, like for example OpenAPI for REST, defines the structures not only of the inputs but",
            " also the outputs of the API.",
            " If what returned by an API is not conforming to its schema, then it is a clear fault.",
            " However, whether the fault is in the API (i.e., it does not conform to the schema) or in the schema",
            " itself (i.e., it is underspecified, or having mistakes) is something that cannot be known for",
            " sure without debugging the issue.",
        ),
    },
    DefinedCategory {
        code: codes::SCHEMA_VALIDATION_BYPASS,
        name: "Received Success Response When Sending Wrong Data",
        test_case_label: "successOnInvalidInputs",
        description: concat!(
            "API inputs might have constraints (e.g., integers in a specific range, and strings matching a",
            " given regular expression).",
            " Also, they need be to of specific types (e.g., integers, booleans, strings, dates, arrays and objects).",
            " If some input data does not satisfy the type on constraints defined in the schema, then the API should",
            " mark the request as 'user error'.",
            " However, if for any reason the request is processed successfully, then it is a fault.",
            " Either the schema is incorrect, or the API is not properly discarding invalid data.",
        ),
    },
    DefinedCategory {
        code: codes::DELETE_NOT_WORKING,
        name: "Resource Still Accessible After Being Deleted",
        test_case_label: "deleteNotWorking",
        description: concat!(
            "If a resource is deleted, and the API responds that such request was successful, then such",
            " resource should no longer being available.",
            " New requests to access it should fail.",
            " Otherwise, if it is still possible to access the resource, then it was not really deleted.",
            " Then, as such, it means that the delete operation is faulty.",
        ),
    },
    DefinedCategory {
        code: codes::FAILED_CREATION_SIDE_EFFECTS,
        name: "Failed Creation of Resource Has Side Effects on Backend",
        test_case_label: "sideEffectsOnFailedCreation",
        description: concat!(
            "The API might expose endpoints to create new resources.",
            " The creation of a new resource might fail due to non-satisfied input constraints, or based",
            " on constraints in the state of the backend.",
            " If the API reports that the creation operation failed, then such action should have no side-effects",
            " The resource (e.g., with partial data) should not be accessible.",
        ),
    },
    // 2xx: security
    DefinedCategory {
        code: codes::SQL_INJECTION,
        name: "SQL Injection (SQLi)",
        test_case_label: "vulnerableToSQLInjection",
        description: concat!(
            "Input data was not properly sanitized.",
            " Its use in SQL commands led to execute arbitrary commands on the database.",
            " See OWASP Top 10 for more information.",
        ),
    },
    DefinedCategory {
        code: codes::XSS,
        name: "Cross-Site Scripting (XSS)",
        test_case_label: "vulnerableToXSS",
        description: concat!(
            "XSS is an attack in which it is possible to inject malicious scripts into web pages viewed users.",
            " This works as well in APIs, if the malicious payload is stored as it is,",
            " and then read afterwards by a frontend web application.",
            " See OWASP Top 10 for more information.",
        ),
    },
    DefinedCategory {
        code: codes::SSRF,
        name: "Server-Side Request Forgery (SSRF)",
        test_case_label: "vulnerableToSSRF",
        description: concat!(
            "Some inputs might be URLs, which are then used by the API to retrieve data from external services.",
            " However, if the hostnames of these URLs are not verified, the API could be tricked into making requests",
            " towards servers it should not to, like for example the 'localhost'.",
            " See OWASP Top 10 for more information.",
        ),
    },
    DefinedCategory {
        code: codes::MASS_ASSIGNMENT,
        name: "Mass Assignment",
        test_case_label: "vulnerableToMassAssignment",
        description: concat!(
            "This vulnerability exploits possible active record pattern misconfigurations to modify fields of ",
            " a record that should not be accessible via the API.",
            " See OWASP Top 10 for more information.",
        ),
    },
];

/// Validated copies of the built-in table, in declaration order.
pub(crate) fn defined_records() -> Result<Vec<FaultCategoryRecord>, CatalogIntegrityError> {
    DEFINED
        .iter()
        .map(|d| FaultCategoryRecord::new(d.code, d.name, d.test_case_label, d.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_table_is_valid() {
        let records = defined_records().unwrap();
        assert_eq!(records.len(), DEFINED.len());
    }

    #[test]
    fn declared_in_ascending_code_order() {
        let codes: Vec<u16> = DEFINED.iter().map(|d| d.code).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]), "{codes:?}");
    }

    #[test]
    fn descriptions_are_verbatim_upstream_text() {
        let by_code = |code| DEFINED.iter().find(|d| d.code == code).unwrap().description;

        assert!(by_code(codes::HTTP_STATUS_500).contains("databases and  communications"));
        assert!(by_code(codes::HTTP_STATUS_500).ends_with("due to possible 'false-positive'."));
        assert!(by_code(codes::SCHEMA_VALIDATION_BYPASS).contains("they need be to of specific types"));
        assert!(by_code(codes::MASS_ASSIGNMENT).contains("fields of  a record"));
        for d in DEFINED {
            assert_eq!(d.description.trim(), d.description, "{}", d.code);
        }
    }
}
