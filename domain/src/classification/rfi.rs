//! Request-for-information detection
//!
//! Checks whether a question carries the data an engineer would need to
//! answer it safely, and lists what is missing.

use super::entities::Domain;
use super::keywords::{
    BUILDING, CATALOGUE, CONCRETE, EXPOSURE_INFO, LOOKUP, NUMBER_WITH_UNIT, STOREY_COUNT,
    WORK_VERBS,
};
use crate::core::request_context::RequestContext;

pub const MISSING_DIMENSIONS: &str =
    "Dimensions (length/width/height or thickness with units)";
pub const MISSING_STOREYS: &str = "Number of storeys";
pub const MISSING_EXPOSURE: &str = "Exposure conditions (exposure class per EN 206, e.g. XC2, XF1)";

/// A pure catalogue/standard lookup needs no project data.
pub fn is_pure_lookup(text: &str) -> bool {
    CATALOGUE.is_match(text)
        && LOOKUP.is_match(text)
        && !WORK_VERBS.is_match(text)
}

/// Descriptions of the critical data the question does not provide.
///
/// `text` must already be lower-cased. Returns an empty list when files are
/// attached (the data is assumed to be in them) or for pure lookups. A
/// question in the calculation domain is never treated as a lookup.
pub fn missing_data(
    text: &str,
    domains: &[Domain],
    context: Option<&RequestContext>,
) -> Vec<String> {
    let has = |d: Domain| domains.contains(&d);
    if context.is_some_and(RequestContext::has_files)
        || (!has(Domain::Calculation) && is_pure_lookup(text))
    {
        return Vec::new();
    }

    let mut missing = Vec::new();

    if (has(Domain::Calculation) || has(Domain::Design)) && !NUMBER_WITH_UNIT.is_match(text) {
        missing.push(MISSING_DIMENSIONS.to_string());
    }

    if has(Domain::Design)
        && BUILDING.is_match(text)
        && !STOREY_COUNT.is_match(text)
    {
        missing.push(MISSING_STOREYS.to_string());
    }

    if has(Domain::Materials)
        && (has(Domain::Design) || has(Domain::Calculation))
        && CONCRETE.is_match(text)
        && !EXPOSURE_INFO.is_match(text)
    {
        missing.push(MISSING_EXPOSURE.to_string());
    }

    missing
}
