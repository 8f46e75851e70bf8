//! CLI output formatting.
//!
//! Every message the tool prints has a pure `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions do no I/O, so tests assert on exact lines.
//!
//! # Output Format
//!
//! ## Summary
//!
//! ```text
//! Generated manifest with 7 images → img/manifest.json
//! Examples:
//!     cats/cat1.png
//!     cats/cat2.png
//!     dogs/dog1.jpg
//!     sea.webp
//!     sunset.jpg
//!     +2 more
//! ```
//!
//! The examples block is capped at five entries and omitted entirely when
//! the manifest is empty.
//!
//! ## Created Notice
//!
//! ```text
//! Created img/. Add images to it and run again to build a manifest.
//! ```

use crate::scan::Manifest;
use std::path::Path;

/// Number of example entries shown in the summary before truncating.
const MAX_EXAMPLES: usize = 5;

// ============================================================================
// Summary
// ============================================================================

/// Format the post-build summary: image count, manifest path, and up to
/// five example entries with a `+N more` note if truncated.
pub fn format_summary(manifest: &Manifest, manifest_path: &Path) -> Vec<String> {
    let count = manifest.images.len();
    let noun = if count == 1 { "image" } else { "images" };
    let mut lines = vec![format!(
        "Generated manifest with {} {} \u{2192} {}",
        count,
        noun,
        manifest_path.display()
    )];

    if !manifest.images.is_empty() {
        lines.push("Examples:".to_string());
        for image in manifest.images.iter().take(MAX_EXAMPLES) {
            lines.push(format!("    {}", image));
        }
        if count > MAX_EXAMPLES {
            lines.push(format!("    +{} more", count - MAX_EXAMPLES));
        }
    }

    lines
}

/// Print the summary to stdout.
pub fn print_summary(manifest: &Manifest, manifest_path: &Path) {
    for line in format_summary(manifest, manifest_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Created notice
// ============================================================================

/// Format the notice shown when the image root had to be created: no
/// manifest was written, the user should add images and rerun.
pub fn format_created_notice(root: &Path) -> Vec<String> {
    vec![format!(
        "Created {}/. Add images to it and run again to build a manifest.",
        root.display()
    )]
}

/// Print the created notice to stdout.
pub fn print_created_notice(root: &Path) {
    for line in format_created_notice(root) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_of(paths: &[&str]) -> Manifest {
        Manifest {
            images: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn summary_reports_count_and_path() {
        let manifest = manifest_of(&["a.png", "b.jpg"]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(
            lines[0],
            "Generated manifest with 2 images \u{2192} img/manifest.json"
        );
    }

    #[test]
    fn summary_single_image_uses_singular() {
        let manifest = manifest_of(&["a.png"]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(
            lines[0],
            "Generated manifest with 1 image \u{2192} img/manifest.json"
        );
    }

    #[test]
    fn summary_lists_entries_when_five_or_fewer() {
        let manifest = manifest_of(&["a.png", "b.jpg", "c.gif"]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(
            lines[1..],
            ["Examples:", "    a.png", "    b.jpg", "    c.gif"]
        );
    }

    #[test]
    fn summary_exactly_five_has_no_truncation_note() {
        let manifest = manifest_of(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(lines.last().unwrap(), "    e.png");
        assert!(!lines.iter().any(|l| l.contains("more")));
    }

    #[test]
    fn summary_truncates_after_five_examples() {
        let manifest = manifest_of(&[
            "a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.png",
        ]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(lines.last().unwrap(), "    +2 more");
        assert!(lines.contains(&"    e.png".to_string()));
        assert!(!lines.contains(&"    f.png".to_string()));
    }

    #[test]
    fn summary_zero_images_has_no_examples_block() {
        let manifest = manifest_of(&[]);
        let lines = format_summary(&manifest, Path::new("img/manifest.json"));
        assert_eq!(
            lines,
            ["Generated manifest with 0 images \u{2192} img/manifest.json"]
        );
    }

    #[test]
    fn created_notice_names_root() {
        let lines = format_created_notice(Path::new("img"));
        assert_eq!(
            lines,
            ["Created img/. Add images to it and run again to build a manifest."]
        );
    }
}
