use ts_rs::TS;

/// Names accepted by [`generate_typescript_definitions`], in export order
pub const EXPORTED_TYPES: &[&str] = &[
    "QualificationQuestion",
    "QualificationQuestionCreate",
    "QualificationQuestionUpdate",
    "ClientInfo",
    "ClientInfoCreate",
    "ClientInfoUpdate",
    "ProcessResponse",
    "ProcessResponseCreate",
    "ProcessResponseUpdate",
    "MessageResponse",
    "ErrorResponse",
    "HealthResponse",
    "VersionResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "QualificationQuestion" => QualificationQuestion::export_to_string()?,
        "QualificationQuestionCreate" => QualificationQuestionCreate::export_to_string()?,
        "QualificationQuestionUpdate" => QualificationQuestionUpdate::export_to_string()?,

        "ClientInfo" => ClientInfo::export_to_string()?,
        "ClientInfoCreate" => ClientInfoCreate::export_to_string()?,
        "ClientInfoUpdate" => ClientInfoUpdate::export_to_string()?,

        "ProcessResponse" => ProcessResponse::export_to_string()?,
        "ProcessResponseCreate" => ProcessResponseCreate::export_to_string()?,
        "ProcessResponseUpdate" => ProcessResponseUpdate::export_to_string()?,

        "MessageResponse" => MessageResponse::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "VersionResponse" => VersionResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in intake-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["ClientInfo"]).unwrap();
        assert!(result.contains("ClientInfo"));
        assert!(result.contains("id: number"));
        assert!(result.contains("number_employees: number"));
    }

    #[test]
    fn test_generate_multiple_types() {
        let result =
            generate_typescript_definitions(&["ProcessResponse", "QualificationQuestion"]).unwrap();
        assert!(result.contains("ProcessResponse"));
        assert!(result.contains("QualificationQuestion"));
    }

    #[test]
    fn test_every_exported_name_resolves() {
        let result = generate_typescript_definitions(EXPORTED_TYPES).unwrap();
        for name in EXPORTED_TYPES {
            assert!(result.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["ClientInfoUpdate"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
