//! Property tests for classification and post-processing

use clipseg_core::{classify, ContentType, PostProcessor, MAX_SEGMENT_CHARS};
use proptest::prelude::*;

#[test]
fn test_empty_text_is_unknown() {
    assert_eq!(classify(""), ContentType::Unknown);
    assert_eq!(classify("   \n"), ContentType::Unknown);
}

proptest! {
    #[test]
    fn classification_is_deterministic(text in ".*") {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    #[test]
    fn http_prefix_always_classifies_as_url(path in "[a-z0-9/._-]{0,40}") {
        let text = format!("  https://example.com/{path}");
        prop_assert_eq!(classify(&text), ContentType::Url);
    }

    #[test]
    fn processed_segments_stay_in_window(raw in prop::collection::vec(".{0,260}", 0..20)) {
        let processed = PostProcessor::new().process(&raw);
        for segment in &processed {
            let chars = segment.chars().count();
            prop_assert!(chars >= 1 && chars <= MAX_SEGMENT_CHARS);
            prop_assert_eq!(segment.trim(), segment.as_str());
        }
    }
}
