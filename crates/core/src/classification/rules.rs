//! Ordered keyword rules.
//!
//! Each rule list is evaluated top to bottom and the first matching rule
//! decides the outcome. Tables routinely match several keyword sets, so the
//! order of a list is part of its meaning.

use crate::table::StatementCategory;

/// Keywords that mark a header as belonging to some financial statement.
pub const FINANCIAL_KEYWORDS: &[&str] = &["profit", "loss", "revenue", "income", "expense"];

/// What a matching rule does with a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// File the table under this category.
    Assign(StatementCategory),
    /// Leave the table out of every bucket.
    Drop,
}

/// Predicate over the text available for a table.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Header signature contains any of the keywords.
    HeaderAny(&'static [&'static str]),
    /// Header signature contains any keyword of each of the two sets.
    HeaderBoth(&'static [&'static str], &'static [&'static str]),
    /// Lowercased page text contains any of the phrases.
    PageAny(&'static [&'static str]),
    /// Always matches.
    Always,
}

/// Text a rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// Lowercased header signature.
    pub header: &'a str,
    /// Lowercased page text, when the backend has it.
    pub page_text: Option<&'a str>,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

impl Condition {
    /// Evaluates the condition. Page conditions never match without page text.
    #[must_use]
    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        match self {
            Self::HeaderAny(keywords) => contains_any(input.header, keywords),
            Self::HeaderBoth(first, second) => {
                contains_any(input.header, first) && contains_any(input.header, second)
            }
            Self::PageAny(phrases) => input
                .page_text
                .is_some_and(|text| contains_any(text, phrases)),
            Self::Always => true,
        }
    }
}

/// A named (condition, outcome) pair.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Name used in logs and tests.
    pub name: &'static str,
    /// When the rule applies.
    pub condition: Condition,
    /// What happens to a matching table.
    pub outcome: Outcome,
}

/// Rules for tables coming from the cloud backend (header only).
///
/// Unmatched tables default to profit-and-loss.
pub const CLOUD_RULES: &[Rule] = &[
    Rule {
        name: "cloud-cash-flow-header",
        condition: Condition::HeaderAny(&["cash", "operating", "financing", "investing"]),
        outcome: Outcome::Assign(StatementCategory::CashFlow),
    },
    Rule {
        name: "cloud-income-header",
        condition: Condition::HeaderAny(&["revenue", "income", "expense", "profit", "loss", "net"]),
        outcome: Outcome::Assign(StatementCategory::Income),
    },
    Rule {
        name: "cloud-default",
        condition: Condition::Always,
        outcome: Outcome::Assign(StatementCategory::ProfitAndLoss),
    },
];

/// Rules for tables found by the local backend (header, then page text).
///
/// Unmatched tables are dropped.
pub const LOCAL_RULES: &[Rule] = &[
    Rule {
        name: "local-cash-flow-header",
        condition: Condition::HeaderBoth(FINANCIAL_KEYWORDS, &["cash", "flow"]),
        outcome: Outcome::Assign(StatementCategory::CashFlow),
    },
    Rule {
        name: "local-profit-and-loss-header",
        condition: Condition::HeaderAny(&["profit", "loss", "revenue"]),
        outcome: Outcome::Assign(StatementCategory::ProfitAndLoss),
    },
    Rule {
        name: "local-income-header",
        condition: Condition::HeaderAny(FINANCIAL_KEYWORDS),
        outcome: Outcome::Assign(StatementCategory::Income),
    },
    Rule {
        name: "local-income-page",
        condition: Condition::PageAny(&["net income", "revenue"]),
        outcome: Outcome::Assign(StatementCategory::Income),
    },
    Rule {
        name: "local-cash-flow-page",
        condition: Condition::PageAny(&["operating activities", "financing"]),
        outcome: Outcome::Assign(StatementCategory::CashFlow),
    },
    Rule {
        name: "local-unmatched",
        condition: Condition::Always,
        outcome: Outcome::Drop,
    },
];

/// Returns the first rule in `rules` that matches `input`.
#[must_use]
pub fn first_match<'r>(rules: &'r [Rule], input: &RuleInput<'_>) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.condition.matches(input))
}

/// Evaluates `rules`, dropping the table when nothing matches.
#[must_use]
pub fn evaluate(rules: &[Rule], input: &RuleInput<'_>) -> Outcome {
    first_match(rules, input).map_or(Outcome::Drop, |rule| rule.outcome)
}
