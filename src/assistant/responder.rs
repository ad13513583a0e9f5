use regex::Regex;

pub const PLACEHOLDER_REPLY: &str =
    "I'm here to help! This is a placeholder response. Full AI functionality coming soon.";

/// A canned reply and the phrases that trigger it. A phrase matches anywhere
/// in the lowercased question, so "donor" also catches "donors".
pub struct Rule {
    pattern: Regex,
    response: String,
}

impl Rule {
    pub fn new(triggers: &[&str], response: impl Into<String>) -> Self {
        let alternatives = triggers
            .iter()
            .map(|t| regex::escape(&t.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern =
            Regex::new(&alternatives).expect("escaped trigger phrases form a valid pattern");
        Self {
            pattern,
            response: response.into(),
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// Evaluates rules top to bottom against the lowercased question; the first
/// match wins, otherwise the question is echoed back.
pub struct KeywordResponder {
    rules: Vec<Rule>,
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl KeywordResponder {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn respond(&self, question: &str) -> String {
        let lowered = question.to_lowercase();
        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => {
                tracing::debug!("Assistant rule matched for {:?}", question);
                rule.response().to_string()
            }
            None => fallback(question),
        }
    }
}

fn fallback(question: &str) -> String {
    format!("You asked: \"{}\"\n\n{}", question.trim(), PLACEHOLDER_REPLY)
}

pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            &["donor", "donation", "gift", "giving"],
            "Donor overview:\n\
             - Run `donors` to list every donor with total giving and last gift.\n\
             - Donors who gave in the last 90 days count as recent.\n\
             - Use `donor note <id> <text>` to log a meeting after you reach out.",
        ),
        Rule::new(
            &["board", "trustee", "seat", "term"],
            "Board overview:\n\
             - Run `board` for attendance, total board giving and expiring terms.\n\
             - Terms ending within six months are flagged so you can plan renewals.\n\
             - Seats follow the order members were added.",
        ),
        Rule::new(
            &["meeting", "calendar", "event", "schedule", "deadline"],
            "Calendar overview:\n\
             - Run `upcoming` for the next eight scheduled events.\n\
             - Run `calendar YYYY/MM` to see a month at a glance.\n\
             - Overdue deadlines are listed in the calendar summary.",
        ),
        Rule::new(
            &["budget", "finance", "expense", "income", "revenue", "spend"],
            "Finance overview:\n\
             - Run `finances` for income, expenses and net income this month.\n\
             - Add `--yearly` for the full year, or `--export` to write a CSV report.\n\
             - Budgets above 90% spent are marked as warnings.",
        ),
        Rule::new(
            &["grant", "foundation", "proposal"],
            "Grant tips:\n\
             - Foundation donors often require impact reports before renewal.\n\
             - Add report due dates to the calendar as deadlines.\n\
             - Record each submission as a donor note so the history stays in one place.",
        ),
        Rule::new(
            &["gala", "fundraiser", "fundraising", "campaign"],
            "Fundraising ideas:\n\
             - Track venue deposits and sponsorships under the Fundraising category.\n\
             - Invite recent donors and board members first.\n\
             - Schedule follow-up calls in the week after the event.",
        ),
        Rule::new(
            &["hello", "hi", "hey", "help"],
            "Hi! I can point you to donors, board members, the calendar and finances. \
             Ask about any of them to get started.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let responder = KeywordResponder::new(vec![
            Rule::new(&["budget"], "budget reply"),
            Rule::new(&["board"], "board reply"),
        ]);

        assert_eq!(responder.respond("Board budget for March?"), "budget reply");
    }

    #[test]
    fn matching_ignores_case() {
        let responder = KeywordResponder::default();

        let reply = responder.respond("Who are our top DONORS?");

        assert!(reply.starts_with("Donor overview"));
    }

    #[test]
    fn trigger_matches_inside_longer_words() {
        let responder = KeywordResponder::new(vec![Rule::new(&["board"], "board reply")]);

        assert_eq!(responder.respond("Any news on the keyboard drive?"), "board reply");
        assert_eq!(responder.respond("BOARDING the bus"), "board reply");
    }

    #[test]
    fn fallback_echoes_raw_question() {
        let responder = KeywordResponder::default();

        let reply = responder.respond("What's the weather?");

        assert!(reply.contains("\"What's the weather?\""));
        assert!(reply.ends_with(PLACEHOLDER_REPLY));
    }

    #[test]
    fn multi_word_triggers_are_escaped() {
        let rule = Rule::new(&["c++ (beta)"], "ok");

        assert!(rule.matches("learning c++ (beta) today"));
    }
}
