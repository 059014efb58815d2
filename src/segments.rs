//! Segment and display naming shared by every renderer

use regex::Regex;

/// Elements of the SVG template that become segments
pub const SEGMENT_SELECTOR: &str = "polygon, rect, path";

/// Class carried by every display container
pub const DISPLAY_CLASS: &str = "svg-display";

const SEGMENT_PREFIX: &str = "segment-";
const CONTAINER_PREFIX: &str = "svg-container-";

/// `segment-N` for the zero-based document-order index `N`
pub fn segment_id(index: usize) -> String {
    format!("{}{}", SEGMENT_PREFIX, index)
}

/// Inverse of [`segment_id`]
pub fn segment_index(id: &str) -> Option<usize> {
    id.strip_prefix(SEGMENT_PREFIX)?.parse().ok()
}

/// DOM id of the container for a 1-based display index
pub fn display_container_id(display_id: usize) -> String {
    format!("{}{}", CONTAINER_PREFIX, display_id)
}

/// Counts segment elements in SVG markup without a DOM.
///
/// Matches opening `polygon`, `rect` and `path` tags outside of comments,
/// which is the same set and order `querySelectorAll` yields for a template
/// without nested documents.
pub struct SegmentScanner {
    comment_re: Regex,
    tag_re: Regex,
}

impl Default for SegmentScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentScanner {
    pub fn new() -> Self {
        Self {
            comment_re: Regex::new(r"(?s)<!--.*?-->").unwrap(),
            tag_re: Regex::new(r"<(polygon|rect|path)[\s/>]").unwrap(),
        }
    }

    pub fn count(&self, svg: &str) -> usize {
        let stripped = self.comment_re.replace_all(svg, "");
        self.tag_re.find_iter(&stripped).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_ids_round_trip_index() {
        assert_eq!(segment_id(0), "segment-0");
        assert_eq!(segment_id(12), "segment-12");
        assert_eq!(segment_index("segment-7"), Some(7));
        assert_eq!(segment_index("segment-"), None);
        assert_eq!(segment_index("wire-3"), None);
    }

    #[test]
    fn test_container_id() {
        assert_eq!(display_container_id(1), "svg-container-1");
    }

    #[test]
    fn test_scanner_counts_segment_tags() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <!-- <rect/> in a comment does not count -->
            <g>
                <polygon points="0,0 1,1"/>
                <rect x="0" y="0" width="1" height="1"></rect>
                <path d="M0 0"/>
                <pathology/>
                <circle r="1"/>
            </g>
        </svg>"#;

        assert_eq!(SegmentScanner::new().count(svg), 3);
    }
}
