//! Data extracted from an analyzed document.
//!
//! Extraction happens in two stages:
//! - [`RawFields`]: values exactly as found in the document, every field optional
//! - [`ExtractedFields`]: the same values after the image/url fallbacks are applied
//!
//! The audit rules only ever see [`ExtractedFields`].

mod fields;
mod social_meta;

pub use fields::{
    ExtractedFields, OpenGraph, RawFields, RawOpenGraph, RawTwitterCard, TwitterCard,
};
pub use social_meta::SocialMetaMap;
