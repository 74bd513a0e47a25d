use serde::{Deserialize, Serialize};
use validator::Validate;

// Absent fields decode as empty strings and are then rejected by validation.

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct AvatarUploadDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "No avatar data provided"))]
    pub avatar: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct FileUploadDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "No file data provided"))]
    pub file: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "No file name provided"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponseDto {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let dto: FileUploadDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.file, "");
        assert_eq!(dto.name, "");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_avatar_validation() {
        let empty = AvatarUploadDto::default();
        let err = empty.validate().unwrap_err();
        assert!(err.to_string().contains("No avatar data provided"));

        let ok = AvatarUploadDto {
            avatar: "data:image/png;base64,AAAA".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_file_validation_reports_empty_name() {
        let dto = FileUploadDto {
            file: "aGVsbG8=".to_string(),
            name: String::new(),
        };
        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("No file name provided"));
        assert!(err.field_errors().contains_key("name"));
    }
}
