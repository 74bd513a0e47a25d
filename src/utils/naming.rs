use uuid::Uuid;

/// Fresh random token used as the stem of every stored artifact.
pub fn unique_name() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_name_is_canonical_uuid() {
        let name = unique_name();
        assert_eq!(name.len(), 36);
        let parsed = Uuid::parse_str(&name).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), name);
    }

    #[test]
    fn test_unique_names_do_not_repeat() {
        let names: HashSet<String> = (0..1000).map(|_| unique_name()).collect();
        assert_eq!(names.len(), 1000);
    }
}
