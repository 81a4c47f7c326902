use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

/// One rejected input, shaped like the issues the web clients already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    pub code: String,
    pub path: Vec<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub received: Option<serde_json::Value>,
}

pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut issues = Vec::new();

    for (field, field_errors) in fields {
        for err in field_errors {
            issues.push(issue_from(&camel_case(&field), err));
        }
    }

    issues
}

fn issue_from(field: &str, err: &ValidationError) -> ValidationIssue {
    let code = match err.code.as_ref() {
        "required" => "invalid_type".to_string(),
        other => other.to_string(),
    };

    let message = err
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match err.code.as_ref() {
            "required" => "Required".to_string(),
            "length" => "invalid length".to_string(),
            "range" => "value out of range".to_string(),
            _ => "invalid value".to_string(),
        });

    let options = err
        .params
        .get("options")
        .and_then(|v| v.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let expected = err
        .params
        .get("expected")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let received = match err.code.as_ref() {
        "required" => Some(serde_json::Value::String("undefined".to_string())),
        _ => err.params.get("received").cloned(),
    };

    ValidationIssue {
        code,
        path: vec![field.to_string()],
        message,
        options,
        expected,
        received,
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn field_names_follow_the_query_spelling() {
        assert_eq!(camel_case("record_type"), "recordType");
        assert_eq!(camel_case("recordType"), "recordType");
    }

    #[test]
    fn required_errors_become_invalid_type_issues() {
        let mut errors = ValidationErrors::new();
        errors.add("record_type", ValidationError::new("required"));

        let issues = format_validation_errors(&errors);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "invalid_type");
        assert_eq!(issues[0].path, vec!["recordType".to_string()]);
        assert_eq!(issues[0].message, "Required");
    }

    #[test]
    fn expected_param_is_carried_into_the_issue() {
        let mut err = ValidationError::new("required");
        err.add_param(Cow::from("expected"), &"'Ventas' | 'Compras'");

        let mut errors = ValidationErrors::new();
        errors.add("record_type", err);

        let issues = format_validation_errors(&errors);

        assert_eq!(issues[0].expected.as_deref(), Some("'Ventas' | 'Compras'"));
        assert_eq!(
            issues[0].received,
            Some(serde_json::Value::String("undefined".to_string()))
        );
    }

    #[test]
    fn expected_is_omitted_when_absent() {
        let mut errors = ValidationErrors::new();
        errors.add("record_type", ValidationError::new("invalid_enum_value"));

        let body = serde_json::to_value(format_validation_errors(&errors)).unwrap();

        assert!(body[0].get("expected").is_none());
    }

    #[test]
    fn custom_params_are_carried_into_the_issue() {
        let mut err = ValidationError::new("invalid_enum_value")
            .with_message(Cow::from("Invalid enum value"));
        err.add_param(Cow::from("options"), &vec!["Ventas", "Compras"]);
        err.add_param(Cow::from("received"), &"Alquiler");

        let mut errors = ValidationErrors::new();
        errors.add("record_type", err);

        let issues = format_validation_errors(&errors);

        assert_eq!(issues[0].code, "invalid_enum_value");
        assert_eq!(issues[0].options, vec!["Ventas", "Compras"]);
        assert_eq!(
            issues[0].received,
            Some(serde_json::Value::String("Alquiler".to_string()))
        );
    }
}
