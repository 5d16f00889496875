//! The pipeline stages, in execution order.
//!
//! Each stage is a plain `fn(State) -> State`. A stage reads
//! `state.remaining`, claims what it recognises, and hands back the rest.

use super::cleanup::{clean_residual_text, remove_word};
use super::state::{PipelineFlags, State};
use crate::compile::{Operator, SpecFilter};
use crate::extract::{
    CONNECTOR_NOISE_WORDS, ConnectorSpec, collapse_whitespace, extract_channel, extract_component_type, extract_connector,
    extract_model_number, extract_mounting_type, extract_package, extract_semantic_descriptors, extract_values,
    is_connector_subcategory, redirect_electrolytic, redirect_potentiometer, remove_noise_words,
};
use crate::mapping::{dimensions_are_package, infer_subcategory, is_mosfet, map};
use crate::{SpecValue, UnitMask, UnitType};
use serde_json::json;
use tracing::debug;

pub(crate) type Stage = fn(State) -> State;

/// All stages in the order they run.
pub(crate) const STAGES: &[(&str, Stage)] = &[
    ("model_number", model_number),
    ("package", package),
    ("mounting_type", mounting_type),
    ("connector_series", connector_series),
    ("component_type", component_type),
    ("values", values),
    ("subcategory_inference", subcategory_inference),
    ("semantic", semantic),
    ("spec_filters", spec_filters),
    ("cleanup", cleanup),
    ("free_text", free_text),
];

/// Keyword fragments that put a query in connector context.
const CONNECTOR_WORDS: &[&str] = &["header", "connector", "terminal", "socket", "plug", "receptacle"];

const MAX_STANDALONE_PINS: u32 = 200;

// --- 1-4: identifiers ----------------------------------------------------------

pub(crate) fn model_number(state: State) -> State {
    let (model, remaining) = extract_model_number(&state.remaining);
    let Some(model) = model else { return state };
    debug!(stage = "model_number", %model);
    State { remaining, model_number: Some(model.clone()), ..state }.note("model_number", model)
}

pub(crate) fn package(state: State) -> State {
    let (hit, remaining) = extract_package(&state.remaining);
    let mut state = State { remaining, ..state };
    if let Some(package) = &hit.package {
        debug!(stage = "package", %package);
        state = state.note("package", package.clone());
    }
    State { package: hit.package, package_suggestion: hit.suggested_subcategory, ..state }
}

pub(crate) fn mounting_type(state: State) -> State {
    let (mounting, remaining) = extract_mounting_type(&state.remaining);
    let Some(mounting) = mounting else { return state };
    debug!(stage = "mounting_type", mounting = mounting.as_str());
    State { remaining, mounting: Some(mounting), ..state }.note("mounting_type", mounting.as_str())
}

pub(crate) fn connector_series(state: State) -> State {
    let (connector, remaining) = extract_connector(&state.remaining);
    let Some(spec) = connector else { return state };
    debug!(stage = "connector_series", brand = spec.brand, series = spec.series);
    let extras = [state.free_text_extras.clone(), vec![series_search_term(&spec)]].concat();
    State {
        remaining,
        connector: Some(spec),
        flags: state.flags | PipelineFlags::CONNECTOR,
        free_text_extras: extras,
        ..state
    }
    .note("connector", json!({ "brand": spec.brand, "series": spec.series, "pitch_mm": spec.pitch_mm }))
}

/// Catalog descriptions name a family by brand and series ("JST PH").
fn series_search_term(spec: &ConnectorSpec) -> String {
    if spec.brand.eq_ignore_ascii_case(spec.series) || spec.pitch_mm.is_none() {
        spec.series.to_string()
    } else {
        format!("{} {}", spec.brand, spec.series)
    }
}

// --- 5: component type ---------------------------------------------------------

pub(crate) fn component_type(state: State) -> State {
    let (channel, remaining) = extract_channel(&state.remaining);
    let (found, remaining) = extract_component_type(&remaining);

    let mut flags = state.flags;
    let mut filters = state.filters.clone();
    let mut state = State { remaining, channel, component_type: found, ..state };

    if let Some(channel) = channel {
        filters.push(SpecFilter::new("Type", Operator::Eq, channel.type_value));
        state = state.note_push("semantic", format!("{} (channel word)", channel.type_value));
    }
    if let Some(found) = found {
        flags |= PipelineFlags::EXPLICIT_TYPE;
        let keyword = found.keyword.to_lowercase();
        if CONNECTOR_WORDS.iter().any(|word| keyword.contains(word)) {
            flags |= PipelineFlags::CONNECTOR;
        }
        state = state.note("component_type", found.keyword);
    }

    let subcategory = found
        .map(|t| t.subcategory)
        .or(channel.map(|c| c.implied_subcategory))
        .or(state.connector.map(|c| c.subcategory))
        .or(state.package_suggestion);

    let Some(mut subcategory) = subcategory else {
        return State { flags, filters, ..state };
    };

    if let Some((leaded, remaining)) = redirect_electrolytic(subcategory, &state.remaining, state.mounting) {
        subcategory = leaded;
        state = State { remaining, ..state }.note_push("semantic", "radial/through-hole (leaded)");
    }
    if is_connector_subcategory(subcategory) {
        flags |= PipelineFlags::CONNECTOR;
    }
    if subcategory.contains("ferrite") {
        flags |= PipelineFlags::FERRITE;
    }
    debug!(stage = "component_type", subcategory, keyword = ?state.matched_keyword());
    State { flags, filters, subcategory: Some(subcategory), ..state }.note("subcategory", subcategory)
}

// --- 6-7: values and inference -------------------------------------------------

pub(crate) fn values(state: State) -> State {
    let (mut values, mut remaining) = extract_values(&state.remaining);

    if state.flags.contains(PipelineFlags::FERRITE) {
        for value in values.iter_mut().filter(|v| v.unit == UnitType::Resistance) {
            value.unit = UnitType::Impedance;
        }
        if let Some((value, rest)) = take_standalone_integer(&remaining, u32::MAX) {
            values.push(SpecValue::new(value.to_string(), value as f64, UnitType::Impedance, format!("{value}Ohm")));
            remaining = rest;
        }
    }

    if state.is_connector() && !values.iter().any(|v| v.unit == UnitType::PinCount) {
        if let Some((pins, rest)) = take_standalone_integer(&remaining, MAX_STANDALONE_PINS) {
            values.push(SpecValue::new(pins.to_string(), pins as f64, UnitType::PinCount, format!("{pins}P")));
            remaining = rest;
        }
    }

    if values.is_empty() {
        return State { remaining, ..state };
    }
    debug!(stage = "values", count = values.len(), remaining = %remaining);
    let listed: Vec<_> = values
        .iter()
        .map(|v| json!({ "raw": v.raw, "type": v.unit.as_str(), "normalized": v.normalized }))
        .collect();
    State { remaining, values, ..state }.note("values", listed)
}

/// First bare integer in `1..=max`, and the text without it.
fn take_standalone_integer(text: &str, max: u32) -> Option<(u32, String)> {
    let m = regex!(r"\b\d+\b").find(text)?;
    let n: u32 = m.as_str().parse().ok()?;
    if !(1..=max).contains(&n) {
        return None;
    }
    Some((n, collapse_whitespace(&format!("{} {}", &text[..m.start()], &text[m.end()..]))))
}

pub(crate) fn subcategory_inference(state: State) -> State {
    let mut state = state;
    if state.subcategory.is_none() {
        if let Some(inferred) = infer_subcategory(UnitMask::of(&state.values)) {
            debug!(stage = "subcategory_inference", inferred);
            state = State { subcategory: Some(inferred), ..state }.note("subcategory_inferred", inferred);
        }
    }

    match redirect_potentiometer(state.subcategory, &state.remaining) {
        Some((subcategory, remaining)) => State { subcategory: Some(subcategory), remaining, ..state }
            .note("subcategory", subcategory)
            .note_push("semantic", "potentiometer/trimmer"),
        None => state,
    }
}

// --- 8-9: filters --------------------------------------------------------------

pub(crate) fn semantic(state: State) -> State {
    let (hits, remaining) = extract_semantic_descriptors(&state.remaining);
    if hits.is_empty() {
        return state;
    }
    debug!(stage = "semantic", phrases = ?hits.iter().map(|h| h.phrase).collect::<Vec<_>>());
    let mut state = State { remaining, ..state };
    for hit in &hits {
        state = state.note_push("semantic", hit.phrase);
    }
    State { semantic: hits, ..state }
}

pub(crate) fn spec_filters(state: State) -> State {
    let mut filters = state.filters.clone();
    let mut extras = state.free_text_extras.clone();
    let mut package = state.package.clone();
    let mut state = state;
    let subcategory = state.subcategory.unwrap_or_default();

    for value in &state.values {
        if value.unit == UnitType::Dimensions && dimensions_are_package(subcategory) {
            if package.is_none() {
                package = Some(format!("SMD,{}", value.normalized));
            }
            continue;
        }
        if state.is_connector() {
            // Connector listings rarely carry parametric data.
            extras.push(value.normalized.clone());
            continue;
        }
        let (name, operator) = map(value, state.subcategory, state.matched_keyword());
        filters.push(SpecFilter::new(name, operator, value.normalized.clone()));
    }

    for hit in &state.semantic {
        if !filters.contains(&hit.filter) {
            filters.push(hit.filter.clone());
        }
    }

    let mut remaining = state.remaining.clone();

    if is_mosfet(subcategory) && regex!(r"(?i)\bdual\b").is_match(&remaining) {
        // A semantic descriptor ("nmos") may set the channel when no channel word did.
        let channel = state
            .channel
            .map(|c| c.type_value.to_string())
            .or_else(|| filters.iter().find(|f| f.name == "Type" && f.value.ends_with("-Channel")).map(|f| f.value.clone()))
            .filter(|c| c.ends_with("-Channel"));
        if let Some(channel) = channel {
            filters.push(SpecFilter::new("Number", Operator::Eq, format!("2 {channel}")));
            state = state.note_push("semantic", format!("dual (Number=2 {channel})"));
        }
        remaining = remove_word(&remaining, regex!(r"(?i)\bdual\b"));
    }

    let is_header = state.matched_keyword().is_some_and(|k| k.to_lowercase().contains("header"))
        || subcategory.contains("header");
    if is_header {
        let single = regex!(r"(?i)\b(?:single|1)\s*row\b");
        let double = regex!(r"(?i)\b(?:double|dual|2)\s*row\b");
        if single.is_match(&remaining) {
            extras = rows_to_pin_structure(extras, 1);
            remaining = remove_word(&remaining, single);
        } else if double.is_match(&remaining) {
            extras = rows_to_pin_structure(extras, 2);
            remaining = remove_word(&remaining, double);
        }
    }

    if package != state.package {
        state = state.note("package_from_dimensions", package.clone());
    }
    debug!(stage = "spec_filters", filters = filters.len(), extras = ?extras);
    State { filters, free_text_extras: extras, package, remaining, ..state }
}

/// "16P" with `rows` rows -> "1x16P" or "2x8P" (odd totals keep the count).
fn rows_to_pin_structure(tokens: Vec<String>, rows: u32) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| {
            let Some(total) = token.strip_suffix('P').and_then(|n| n.parse::<u32>().ok()) else { return token };
            let per_row = if rows == 2 && total % 2 == 0 { total / 2 } else { total };
            format!("{rows}x{per_row}P")
        })
        .collect()
}

// --- 10-11: free text ----------------------------------------------------------

pub(crate) fn cleanup(state: State) -> State {
    let extra_noise: &[&str] = if state.subcategory.is_some_and(|s| s.contains("connector")) || state.connector.is_some()
    {
        CONNECTOR_NOISE_WORDS
    } else {
        &[]
    };
    let cleaned = clean_residual_text(&remove_noise_words(&state.remaining, extra_noise));
    let remaining = state.free_text_extras.iter().fold(cleaned, |text, extra| {
        if text.is_empty() { extra.clone() } else { format!("{text} {extra}") }
    });
    State { remaining, ..state }
}

pub(crate) fn free_text(state: State) -> State {
    let text = if let Some(model) = &state.model_number {
        model.clone()
    } else if state.remaining.chars().count() >= 2 {
        state.remaining.clone()
    } else if !state.filters.is_empty() || state.subcategory.is_some() {
        String::new()
    } else {
        state.original.clone()
    };
    debug!(stage = "free_text", text = %text);
    State { free_text: text, ..state }
}
