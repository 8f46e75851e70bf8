//! # img-manifest
//!
//! Builds `img/manifest.json`: a sorted JSON array listing every image
//! file under `img/`, with paths relative to the root and `/` separators
//! on every platform. The filesystem is the data source; the manifest is
//! transient build output, regenerated in full on every run.
//!
//! The whole tool is one pass:
//!
//! ```text
//! img/  →  walk  →  filter by extension  →  sort  →  img/manifest.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the image root and collects relative paths into a sorted [`scan::Manifest`] |
//! | [`output`] | Console reporting: the build summary and the root-creation notice |
//!
//! # Design Decisions
//!
//! ## Full Regeneration
//!
//! The manifest is never merged with a previous one. Rebuilding from
//! scratch keeps the tool stateless: there is no staleness to reason
//! about, and deleting `manifest.json` is always safe.
//!
//! ## Plain Array Output
//!
//! The manifest is a bare JSON array of strings, not an object with
//! metadata. Consumers need exactly one thing from it: which paths to
//! load relative to `img/`. [`scan::Manifest`] serializes transparently
//! so the on-disk format stays that simple.
//!
//! ## Deterministic Output
//!
//! Paths are sorted and slash-normalized, and the JSON formatting is
//! fixed (2-space indent, non-ASCII kept literal). Two runs over an
//! unchanged tree produce byte-identical files, so the manifest diffs
//! cleanly under version control.

pub mod output;
pub mod scan;
