//! Date-range evaluator: exact date equality or bounded proximity.

use chrono::NaiveDate;
use sift_core::{MatchFinding, Subject, WatchlistCandidate};

use crate::fields::DATE_FORMAT;
use crate::schema::{MatchType, RuleDefinition};

use super::{finding, source_value, target_values, Evaluate};

const DEFAULT_RANGE_DAYS: f64 = 365.0;

pub struct DateRangeEvaluator;

impl Evaluate for DateRangeEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::DateRange
    }

    fn evaluate(
        &self,
        subject: &Subject,
        candidate: &WatchlistCandidate,
        rule: &RuleDefinition,
    ) -> Vec<MatchFinding> {
        let Some(source) = source_value(subject, rule) else {
            return Vec::new();
        };
        let Some(source_date) = parse_date(&source) else {
            return Vec::new();
        };
        let range_days = rule.parameters.f64_or("rangeDays", DEFAULT_RANGE_DAYS);
        if range_days <= 0.0 {
            return Vec::new();
        }

        // Best match is the smallest day distance.
        let mut best: Option<(i64, String)> = None;
        for target in target_values(candidate, rule) {
            let Some(target_date) = parse_date(&target) else {
                continue;
            };
            let days = source_date
                .signed_duration_since(target_date)
                .num_days()
                .abs();
            if best.as_ref().map_or(true, |(b, _)| days < *b) {
                best = Some((days, target));
            }
        }

        let Some((days, target)) = best else {
            return Vec::new();
        };

        if days == 0 {
            let description = format!("Date of birth {} (exact match)", target);
            return vec![finding(
                rule,
                rule.score_config.exact_match,
                source,
                target,
                description,
            )];
        }

        if days as f64 > range_days {
            return Vec::new();
        }

        let proximity = 1.0 - days as f64 / range_days;
        let score = if rule.score_config.proportional_to_similarity {
            proximity * rule.score_config.max_score
        } else {
            rule.score_config.partial_match
        };
        let description = format!(
            "Dates {} and {} are {} days apart (within {} days)",
            source, target, days, range_days
        );
        vec![finding(rule, score, source, target, description)]
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
