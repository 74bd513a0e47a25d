use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine as _,
};

// Standard alphabet with canonical padding. Non-zero trailing bits in the
// last symbol are accepted, as a non-strict decoder does.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Shape of an incoming base64 field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Payload<'a> {
    /// No comma: the whole string is the encoded data.
    Bare(&'a str),
    /// `<metadata>,<data>`, e.g. `data:image/png;base64,iVBOR...`.
    DataUrl { metadata: &'a str, data: &'a str },
    /// More than one comma. Neither shape applies.
    MultiComma { raw: &'a str, segments: usize },
}

impl<'a> Base64Payload<'a> {
    pub fn parse(input: &'a str) -> Self {
        let segments = input.matches(',').count() + 1;
        match input.split_once(',') {
            None => Base64Payload::Bare(input),
            Some((metadata, data)) if segments == 2 => Base64Payload::DataUrl { metadata, data },
            Some(_) => Base64Payload::MultiComma {
                raw: input,
                segments,
            },
        }
    }

    /// Encoded data for the lenient file path: a data-URL yields its data
    /// segment, anything else is handed to the decoder unchanged.
    pub fn lenient_data(&self) -> &'a str {
        match *self {
            Base64Payload::Bare(raw) => raw,
            Base64Payload::DataUrl { data, .. } => data,
            Base64Payload::MultiComma { raw, .. } => raw,
        }
    }

    pub fn segments(&self) -> usize {
        match self {
            Base64Payload::Bare(_) => 1,
            Base64Payload::DataUrl { .. } => 2,
            Base64Payload::MultiComma { segments, .. } => *segments,
        }
    }
}

/// MIME hint carried by a data-URL metadata segment:
/// `data:image/png;base64` -> `image/png`.
pub fn metadata_mime(metadata: &str) -> Option<&str> {
    let hint = metadata.strip_prefix("data:").unwrap_or(metadata);
    let hint = hint.split(';').next().unwrap_or_default().trim();
    if hint.is_empty() {
        None
    } else {
        Some(hint)
    }
}

/// Standard padded base64. Line breaks are skipped.
pub fn decode(data: &str) -> Result<Vec<u8>, DecodeError> {
    if data.contains(['\r', '\n']) {
        let compact: String = data.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        LENIENT_STANDARD.decode(compact)
    } else {
        LENIENT_STANDARD.decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare() {
        assert_eq!(Base64Payload::parse("aGVsbG8="), Base64Payload::Bare("aGVsbG8="));
    }

    #[test]
    fn test_parse_data_url() {
        let payload = Base64Payload::parse("data:image/png;base64,aGVsbG8=");
        assert_eq!(
            payload,
            Base64Payload::DataUrl {
                metadata: "data:image/png;base64",
                data: "aGVsbG8=",
            }
        );
        assert_eq!(payload.lenient_data(), "aGVsbG8=");
        assert_eq!(payload.segments(), 2);
    }

    #[test]
    fn test_parse_multi_comma() {
        let payload = Base64Payload::parse("a,b,c");
        assert_eq!(
            payload,
            Base64Payload::MultiComma {
                raw: "a,b,c",
                segments: 3,
            }
        );
        assert_eq!(payload.lenient_data(), "a,b,c");
    }

    #[test]
    fn test_parse_trailing_comma_is_data_url_with_empty_data() {
        let payload = Base64Payload::parse("meta,");
        assert_eq!(
            payload,
            Base64Payload::DataUrl {
                metadata: "meta",
                data: "",
            }
        );
    }

    #[test]
    fn test_metadata_mime() {
        assert_eq!(metadata_mime("data:image/png;base64"), Some("image/png"));
        assert_eq!(metadata_mime("data:application/pdf"), Some("application/pdf"));
        assert_eq!(metadata_mime("image/gif"), Some("image/gif"));
        assert_eq!(metadata_mime("data:;base64"), None);
        assert_eq!(metadata_mime(""), None);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(decode("aGVs\r\nbG8=").unwrap(), b"hello");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert!(decode("not base64!").is_err());
        assert!(decode("a,b,c").is_err());
    }

    #[test]
    fn test_decode_accepts_trailing_bits() {
        assert_eq!(decode("QR==").unwrap(), vec![0x41]);
        assert!(decode("QQ").is_err());
    }
}
