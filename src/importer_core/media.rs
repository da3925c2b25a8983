use std::collections::HashMap;
use std::sync::OnceLock;

/// Media types the importer knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Photo,
    Video,
}

/// Extension lookup table, keyed by lower-case extension without the dot.
static MEDIA_TYPES: OnceLock<HashMap<&'static str, MediaType>> = OnceLock::new();

fn media_types() -> &'static HashMap<&'static str, MediaType> {
    MEDIA_TYPES.get_or_init(|| {
        HashMap::from([
            ("jpg", MediaType::Photo),
            ("cr2", MediaType::Photo),
            ("heic", MediaType::Photo),
            ("tiff", MediaType::Photo),
            ("tif", MediaType::Photo),
            ("mov", MediaType::Video),
            ("mp4", MediaType::Video),
        ])
    })
}

impl MediaType {
    /// Classify an extension. Matching is exact: callers lower-case first.
    /// Returns `None` for anything unsupported, including the empty extension.
    pub fn from_extension(ext: &str) -> Option<MediaType> {
        media_types().get(ext).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_extensions() {
        for ext in ["jpg", "cr2", "heic", "tiff", "tif"] {
            assert_eq!(MediaType::from_extension(ext), Some(MediaType::Photo), "{ext}");
        }
    }

    #[test]
    fn test_video_extensions() {
        for ext in ["mov", "mp4"] {
            assert_eq!(MediaType::from_extension(ext), Some(MediaType::Video), "{ext}");
        }
    }

    #[test]
    fn test_unsupported_extensions() {
        for ext in ["", "txt", "jpeg", "png", "mkv", "xmp", ".jpg"] {
            assert_eq!(MediaType::from_extension(ext), None, "{ext}");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Candidates lower-case their extension before classification.
        assert_eq!(MediaType::from_extension("JPG"), None);
        assert_eq!(MediaType::from_extension("Mov"), None);
    }

    #[test]
    fn test_media_type_display() {
        assert_eq!(MediaType::Photo.as_str(), "photo");
        assert_eq!(MediaType::Video.to_string(), "video");
    }
}
