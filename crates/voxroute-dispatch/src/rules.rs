//! The intent rule table.
//!
//! Classification is a fixed-priority keyword scan: rules are evaluated in
//! table order and the first rule with any matching keyword wins. The order
//! is significant and load-bearing — an utterance containing both "email"
//! and "slack" must always resolve to `send_email`. Keeping the rules as
//! data makes the priority independently testable instead of being buried
//! in nested conditionals.

/// One classification rule: keywords to scan for, the tool they select,
/// and the phrase used in the confirmation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Case-insensitive substrings that trigger this rule.
    pub keywords: &'static [&'static str],

    /// Name of the tool this rule selects.
    pub tool: &'static str,

    /// Tool-specific phrase for the templated confirmation.
    pub action_phrase: &'static str,
}

/// All classification rules in priority order.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["email"],
        tool: "send_email",
        action_phrase: "send an email",
    },
    IntentRule {
        keywords: &["calendar", "meeting"],
        tool: "create_calendar_event",
        action_phrase: "create a calendar event",
    },
    IntentRule {
        keywords: &["slack"],
        tool: "send_slack_message",
        action_phrase: "send a Slack message",
    },
    IntentRule {
        keywords: &["github"],
        tool: "create_github_issue",
        action_phrase: "create a GitHub issue",
    },
    IntentRule {
        keywords: &["notion"],
        tool: "create_notion_page",
        action_phrase: "create a Notion page",
    },
];

/// Classify an utterance against the rule table.
///
/// Returns the first rule whose keywords appear in the lowercased input,
/// or `None` when nothing matches. Membership in the candidate tool set is
/// the dispatcher's concern, not this function's: a match whose tool is
/// excluded by the allow-list does not fall through to later rules.
pub fn classify(user_input: &str) -> Option<&'static IntentRule> {
    let lowered = user_input.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_the_documented_priority_chain() {
        let tools: Vec<&str> = INTENT_RULES.iter().map(|rule| rule.tool).collect();
        assert_eq!(
            tools,
            vec![
                "send_email",
                "create_calendar_event",
                "send_slack_message",
                "create_github_issue",
                "create_notion_page",
            ]
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("Send an EMAIL please").unwrap().tool, "send_email");
        assert_eq!(
            classify("put it on my Calendar").unwrap().tool,
            "create_calendar_event"
        );
    }

    #[test]
    fn meeting_is_a_calendar_synonym() {
        assert_eq!(
            classify("schedule a meeting with Dana").unwrap().tool,
            "create_calendar_event"
        );
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        let rule = classify("email me about the slack meeting").unwrap();
        assert_eq!(rule.tool, "send_email");
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "emails" contains "email"; substring matching is the documented
        // behavior, not whole-word matching.
        assert_eq!(classify("check my emails").unwrap().tool, "send_email");
    }

    #[test]
    fn unmatched_input_selects_nothing() {
        assert!(classify("what's the weather like").is_none());
        assert!(classify("").is_none());
    }
}
