use std::collections::HashMap;

use serde_json::Value;

use super::error::ConfigError;
use super::pattern::{Color, Pattern};
use super::reader::DefinitionReader;
use super::{LoadPolicy, SkippedDefinition};
use crate::calendar::DateRuleError;
use crate::holiday::{Holiday, HolidayId, HolidayRegistry, HolidayRule, PatternRef};

const TYPE_FIXED: u8 = 0;
const TYPE_NTH_WEEKDAY: u8 = 1;
const TYPE_OFFSET: u8 = 2;
const TYPE_RELATIVE_TO_DATE: u8 = 3;
const TYPE_EASTER: u8 = 4;

const EASTER_DEFAULT_NAME: &str = "Easter";

/// Rule whose cross-holiday reference is still a name.
#[derive(Debug, Clone)]
enum RuleDraft {
    Ready(HolidayRule),
    Offset { reference: String, offset_days: i32 },
}

#[derive(Debug, Clone)]
pub(crate) struct HolidayDraft {
    index: usize,
    name: String,
    pattern: Option<PatternRef>,
    lead_in_days: u32,
    lead_out_days: u32,
    rule: RuleDraft,
}

pub(crate) fn parse_patterns(root: &Value) -> Result<Vec<Pattern>, ConfigError> {
    let Some(section) = root.get("pattern") else {
        return Ok(Vec::new());
    };
    let entries = section
        .as_array()
        .ok_or(ConfigError::MissingSection { field: "pattern" })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_pattern(index, entry))
        .collect()
}

fn parse_pattern(index: usize, entry: &Value) -> Result<Pattern, ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedPattern { index, reason };
    let colors = entry
        .as_array()
        .ok_or_else(|| malformed("must be an array of color strings".to_string()))?
        .iter()
        .map(|color| {
            let text = color
                .as_str()
                .ok_or_else(|| malformed(format!("color {color} is not a string")))?;
            Color::from_hex(text).map_err(|err| malformed(err.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Pattern::new(colors).ok_or_else(|| malformed("has no colors".to_string()))
}

pub(crate) fn parse_definition(
    index: usize,
    value: &Value,
    pattern_count: usize,
) -> Result<HolidayDraft, ConfigError> {
    let reader = DefinitionReader::new(index, value)?;
    let kind = reader.read_u8("type")?;

    let rule = match kind {
        TYPE_FIXED => RuleDraft::Ready(
            HolidayRule::fixed(reader.read_u8("month")?, reader.read_u8("date")?)
                .map_err(|err| rule_error(&reader, err))?,
        ),
        TYPE_NTH_WEEKDAY => RuleDraft::Ready(
            HolidayRule::nth_weekday_of_month(
                reader.read_u8("month")?,
                reader.read_u8("dayOfWeek")?,
                reader.read_i32("occurrence")?,
            )
            .map_err(|err| rule_error(&reader, err))?,
        ),
        TYPE_OFFSET => RuleDraft::Offset {
            reference: reader.read_str("referenceHoliday")?.to_string(),
            offset_days: reader.read_i32("offset")?,
        },
        TYPE_RELATIVE_TO_DATE => RuleDraft::Ready(
            HolidayRule::relative_to_date(
                reader.read_u8("month")?,
                reader.read_u8("date")?,
                reader.read_u8("dayOfWeek")?,
                reader.read_i32("occurrence")?,
                reader.read_bool("includeDateInQuestion")?,
            )
            .map_err(|err| rule_error(&reader, err))?,
        ),
        TYPE_EASTER => RuleDraft::Ready(HolidayRule::easter()),
        other => {
            return Err(reader.malformed(
                "type",
                format!("unknown holiday type {other} (expected 0..=4)"),
            ));
        }
    };

    let name = if kind == TYPE_EASTER {
        reader
            .read_optional_str("name")?
            .unwrap_or(EASTER_DEFAULT_NAME)
            .to_string()
    } else {
        reader.read_str("name")?.to_string()
    };

    let pattern = match reader.read_optional_index("pattern")? {
        Some(pattern) if pattern >= pattern_count => {
            return Err(reader.malformed(
                "pattern",
                format!("refers to pattern {pattern}, but only {pattern_count} are defined"),
            ));
        }
        pattern => pattern.map(PatternRef::from_index),
    };

    Ok(HolidayDraft {
        index,
        name,
        pattern,
        lead_in_days: reader.read_days_or_zero("leadInDays")?,
        lead_out_days: reader.read_days_or_zero("leadOutDays")?,
        rule,
    })
}

fn rule_error(reader: &DefinitionReader<'_>, err: DateRuleError) -> ConfigError {
    let field = match err {
        DateRuleError::InvalidMonth { .. } => "month",
        DateRuleError::InvalidWeekday { .. } => "dayOfWeek",
        DateRuleError::InvalidOccurrence { .. } => "occurrence",
        DateRuleError::InvalidDayOfMonth { .. } | DateRuleError::NonexistentDate { .. } => "date",
        DateRuleError::OutOfDomain { .. } | DateRuleError::DateOutOfRange => "type",
    };
    reader.malformed(field, err.to_string())
}

/// Check names and references across all drafts, then build the registry.
///
/// References may point forward. Under `SkipInvalid`, dropping a definition
/// can orphan others that refer to it, so checking repeats until nothing
/// more is dropped.
pub(crate) fn build_registry(
    mut drafts: Vec<HolidayDraft>,
    policy: LoadPolicy,
    skipped: &mut Vec<SkippedDefinition>,
) -> Result<HolidayRegistry, ConfigError> {
    loop {
        match first_cross_reference_error(&drafts) {
            None => break,
            Some((position, err)) => {
                if policy == LoadPolicy::Strict {
                    return Err(err);
                }
                let draft = drafts.remove(position);
                skipped.push(SkippedDefinition {
                    index: draft.index,
                    reason: err.to_string(),
                });
            }
        }
    }

    let ids: HashMap<&str, HolidayId> = drafts
        .iter()
        .enumerate()
        .map(|(position, draft)| (draft.name.as_str(), HolidayId::from_index(position)))
        .collect();

    let mut registry = HolidayRegistry::new();
    for draft in &drafts {
        let rule = match &draft.rule {
            RuleDraft::Ready(rule) => *rule,
            RuleDraft::Offset {
                reference,
                offset_days,
            } => {
                let id = ids.get(reference.as_str()).copied().ok_or_else(|| {
                    unknown_reference(draft.index, reference)
                })?;
                HolidayRule::offset_from(id, *offset_days)
            }
        };
        let mut holiday = Holiday::new(draft.name.clone(), rule)
            .with_lead_in(draft.lead_in_days)
            .with_lead_out(draft.lead_out_days);
        holiday.pattern = draft.pattern;
        registry
            .insert(holiday)
            .map_err(|err| ConfigError::MalformedDefinition {
                index: draft.index,
                field: "name",
                reason: err.to_string(),
            })?;
    }
    Ok(registry)
}

fn first_cross_reference_error(drafts: &[HolidayDraft]) -> Option<(usize, ConfigError)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (position, draft) in drafts.iter().enumerate() {
        if let Some(first) = seen.insert(draft.name.as_str(), draft.index) {
            let reason = format!("duplicates the name '{}' of holiday #{first}", draft.name);
            return Some((
                position,
                ConfigError::MalformedDefinition {
                    index: draft.index,
                    field: "name",
                    reason,
                },
            ));
        }
    }

    drafts.iter().enumerate().find_map(|(position, draft)| match &draft.rule {
        RuleDraft::Offset { reference, .. } if !seen.contains_key(reference.as_str()) => {
            Some((position, unknown_reference(draft.index, reference)))
        }
        _ => None,
    })
}

fn unknown_reference(index: usize, reference: &str) -> ConfigError {
    ConfigError::MalformedDefinition {
        index,
        field: "referenceHoliday",
        reason: format!("names unknown holiday '{reference}'"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::Month;

    use super::*;

    fn draft(value: Value) -> Result<HolidayDraft, ConfigError> {
        parse_definition(0, &value, 1)
    }

    #[test]
    fn parses_each_kind() {
        let fixed = draft(json!({"name": "Valentine's Day", "type": 0, "month": 1, "date": 14}))
            .unwrap();
        assert!(matches!(
            fixed.rule,
            RuleDraft::Ready(HolidayRule::Fixed { month: Month::February, day: 14 })
        ));

        let nth = draft(json!({
            "name": "Mother's Day", "type": 1, "month": 4, "dayOfWeek": 0, "occurrence": 2
        }))
        .unwrap();
        assert!(matches!(
            nth.rule,
            RuleDraft::Ready(HolidayRule::NthWeekdayOfMonth { occurrence: 2, .. })
        ));

        let offset = draft(json!({
            "name": "Mardi Gras", "type": 2, "referenceHoliday": "Easter", "offset": -47
        }))
        .unwrap();
        assert!(matches!(
            offset.rule,
            RuleDraft::Offset { ref reference, offset_days: -47 } if reference == "Easter"
        ));

        let relative = draft(json!({
            "name": "Victoria Day", "type": 3, "month": 4, "date": 25,
            "dayOfWeek": 1, "occurrence": -1, "includeDateInQuestion": false
        }))
        .unwrap();
        assert!(matches!(
            relative.rule,
            RuleDraft::Ready(HolidayRule::RelativeToDate { include_anchor: false, .. })
        ));

        let easter = draft(json!({"type": 4, "pattern": 0, "leadInDays": 7})).unwrap();
        assert_eq!(easter.name, "Easter");
        assert_eq!(easter.pattern, Some(PatternRef::from_index(0)));
        assert_eq!(easter.lead_in_days, 7);
        assert_eq!(easter.lead_out_days, 0);
    }

    #[test]
    fn invalid_values_name_the_field() {
        let cases = [
            (json!({"name": "x", "type": 0, "month": 12, "date": 1}), "month"),
            (json!({"name": "x", "type": 0, "month": 3, "date": 31}), "date"),
            (
                json!({"name": "x", "type": 1, "month": 0, "dayOfWeek": 7, "occurrence": 1}),
                "dayOfWeek",
            ),
            (
                json!({"name": "x", "type": 1, "month": 0, "dayOfWeek": 1, "occurrence": 0}),
                "occurrence",
            ),
            (json!({"name": "x", "type": 9}), "type"),
            (json!({"type": 0, "month": 0, "date": 1}), "name"),
            (json!({"name": "x", "type": 2, "offset": 1}), "referenceHoliday"),
            (json!({"name": "x", "type": 4, "pattern": 1}), "pattern"),
        ];
        for (value, expected) in cases {
            match draft(value.clone()) {
                Err(ConfigError::MalformedDefinition { field, .. }) => {
                    assert_eq!(field, expected, "{value}")
                }
                other => panic!("expected malformed '{expected}' for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn patterns_are_validated() {
        let patterns = parse_patterns(&json!({"pattern": [["#FF0000", "#FFFFFF"]]})).unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].colors().len(), 2);

        assert!(parse_patterns(&json!({})).unwrap().is_empty());
        assert!(matches!(
            parse_patterns(&json!({"pattern": [[]]})),
            Err(ConfigError::MalformedPattern { index: 0, .. })
        ));
        assert!(matches!(
            parse_patterns(&json!({"pattern": [["#FF0000"], ["red"]]})),
            Err(ConfigError::MalformedPattern { index: 1, .. })
        ));
    }

    fn drafts(values: Vec<Value>) -> Vec<HolidayDraft> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| parse_definition(index, value, 0).unwrap())
            .collect()
    }

    #[test]
    fn forward_references_resolve() {
        let drafts = drafts(vec![
            json!({"name": "Good Friday", "type": 2, "referenceHoliday": "Easter", "offset": -2}),
            json!({"type": 4}),
        ]);
        let mut skipped = Vec::new();
        let registry = build_registry(drafts, LoadPolicy::Strict, &mut skipped).unwrap();
        let good_friday = registry.find("Good Friday").unwrap();
        let date = registry.resolve(good_friday, 2024).unwrap();
        assert_eq!(date.to_string(), "2024-03-29");
        assert!(skipped.is_empty());
    }

    #[test]
    fn skip_invalid_drops_orphans() {
        let drafts = drafts(vec![
            json!({"name": "A", "type": 0, "month": 0, "date": 1}),
            json!({"name": "A", "type": 0, "month": 0, "date": 2}),
            json!({"name": "B", "type": 2, "referenceHoliday": "Missing", "offset": 1}),
            json!({"name": "C", "type": 2, "referenceHoliday": "B", "offset": 1}),
        ]);

        let err = build_registry(drafts.clone(), LoadPolicy::Strict, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedDefinition { index: 1, field: "name", .. }
        ));

        let mut skipped = Vec::new();
        let registry = build_registry(drafts, LoadPolicy::SkipInvalid, &mut skipped).unwrap();
        assert_eq!(registry.len(), 1);
        let indices: Vec<usize> = skipped.iter().map(|entry| entry.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
