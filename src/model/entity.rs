//! Rule-based named-entity recognition for résumé headers.
//!
//! A résumé nearly always opens with the candidate's name on a line of its
//! own, so a capitalisation heuristic finds it reliably without a trained
//! model. Runs of two to four capitalised words on the same line become
//! candidate spans. Spans ending in a corporate suffix are organizations,
//! spans containing a section heading or job title are dropped, and the
//! rest are people.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;
use crate::model::{Entity, EntityLabel};

const WORD_PATTERN: &str = r"\p{L}[\p{L}'’-]*";

const MIN_SPAN_WORDS: usize = 2;
const MAX_SPAN_WORDS: usize = 4;

/// Last words that turn a span into an organization.
static ORG_SUFFIXES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "inc", "llc", "ltd", "corp", "corporation", "company", "co", "gmbh", "ag", "plc",
        "group", "university", "college", "institute", "school",
        "labs", "technologies", "systems", "solutions", "bank", "foundation",
    ]
    .into_iter()
    .collect()
});

/// Words that never occur in a person's name on a résumé: section headings,
/// job titles and the field nouns that title portfolio pages.
static HEADING_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "resume", "résumé", "curriculum", "vitae", "cv", "experience", "education", "skills",
        "summary", "objective", "profile", "projects", "references", "contact", "certifications",
        "languages", "interests", "employment", "history", "professional", "work", "technical",
        "portfolio", "overview", "highlights", "qualifications", "achievements", "awards",
        "publications", "volunteer", "hobbies", "training", "courses", "competencies", "career",
        "personal", "statement", "about", "core", "key",
        "engineer", "developer", "manager", "analyst", "scientist", "designer", "consultant",
        "intern", "senior", "junior", "lead", "director", "architect", "specialist",
        "data", "science", "machine", "learning", "software", "engineering", "computer",
        "development", "design", "research", "management", "marketing", "sales", "product",
        "project", "operations", "security", "cloud", "web", "stack", "backend", "frontend",
        "artificial", "intelligence", "analytics", "business", "finance", "information",
        "technology",
    ]
    .into_iter()
    .collect()
});

/// Recognizes PERSON and ORG spans from capitalisation.
#[derive(Clone, Debug)]
pub struct EntityRecognizer {
    tokenizer: RegexTokenizer,
}

impl EntityRecognizer {
    /// Create a new recognizer.
    pub fn new() -> Result<Self> {
        Ok(EntityRecognizer {
            tokenizer: RegexTokenizer::with_pattern(WORD_PATTERN)?,
        })
    }

    /// Recognize entities in document order. Offsets are byte offsets into
    /// `text`.
    pub fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        let mut line_start = 0;

        for line in text.split('\n') {
            let words: Vec<Token> = self.tokenizer.tokenize(line)?.collect();
            let mut run: Vec<Token> = Vec::new();

            for word in words {
                let contiguous = run
                    .last()
                    .is_some_and(|prev| is_blank(&line[prev.end_offset..word.start_offset]));

                if !is_capitalised(&word.text) {
                    close_run(line, line_start, &mut run, &mut entities);
                    continue;
                }

                if !contiguous {
                    close_run(line, line_start, &mut run, &mut entities);
                }
                run.push(word);
            }
            close_run(line, line_start, &mut run, &mut entities);

            line_start += line.len() + 1;
        }

        Ok(entities)
    }
}

fn close_run(line: &str, line_start: usize, run: &mut Vec<Token>, out: &mut Vec<Entity>) {
    if let Some(entity) = classify(line, line_start, run) {
        out.push(entity);
    }
    run.clear();
}

fn classify(line: &str, line_start: usize, run: &[Token]) -> Option<Entity> {
    if run.len() < MIN_SPAN_WORDS || run.len() > MAX_SPAN_WORDS {
        return None;
    }

    let lowered: Vec<String> = run.iter().map(|t| t.text.to_lowercase()).collect();
    let last = lowered.last()?;

    let label = if ORG_SUFFIXES.contains(last.as_str()) {
        EntityLabel::Org
    } else if run.iter().any(|t| is_all_caps(&t.text))
        || lowered.iter().any(|w| HEADING_WORDS.contains(w.as_str()))
    {
        return None;
    } else {
        EntityLabel::Person
    };

    let start = run.first()?.start_offset;
    let end = run.last()?.end_offset;

    Some(Entity::new(
        &line[start..end],
        label,
        line_start + start,
        line_start + end,
    ))
}

fn is_blank(gap: &str) -> bool {
    gap.chars().all(|c| c == ' ' || c == '\t')
}

/// Starts with an upper-case letter and has at least two letters. ALL CAPS
/// words qualify so that "IBM Corp" still forms an organization.
fn is_capitalised(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    match letters.next() {
        Some(first) => first.is_uppercase() && letters.next().is_some(),
        None => false,
    }
}

/// Every letter upper-case. Such words open section headings far more often
/// than they spell a name, so they never form a PERSON span.
fn is_all_caps(word: &str) -> bool {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Vec<Entity> {
        EntityRecognizer::new().unwrap().recognize(text).unwrap()
    }

    #[test]
    fn test_person_on_first_line() {
        let entities = recognize("Jane Doe\nSoftware engineer at Acme");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Jane Doe");
        assert!(entities[0].is_person());
        assert_eq!((entities[0].start, entities[0].end), (0, 8));
    }

    #[test]
    fn test_organization_suffix() {
        let entities = recognize("Worked at Globex Corporation for years");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Globex Corporation");
        assert_eq!(entities[0].label, EntityLabel::Org);
    }

    #[test]
    fn test_headings_are_not_people() {
        assert!(recognize("Curriculum Vitae").is_empty());
        assert!(recognize("Senior Software Engineer").is_empty());
        assert!(recognize("WORK EXPERIENCE").is_empty());
    }

    #[test]
    fn test_title_lines_are_not_people() {
        assert!(recognize("Data Science Portfolio").is_empty());
        assert!(recognize("Machine Learning").is_empty());
        assert!(recognize("MACHINE LEARNING").is_empty());
        assert!(recognize("JANE DOE").is_empty());
    }

    #[test]
    fn test_person_below_title_line() {
        let entities = recognize("Data Science Portfolio\nJane Doe\n");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Jane Doe");
        assert!(entities[0].is_person());
    }

    #[test]
    fn test_upper_case_organization() {
        let entities = recognize("Consultant at IBM Corp");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "IBM Corp");
        assert_eq!(entities[0].label, EntityLabel::Org);
    }

    #[test]
    fn test_offsets_are_relative_to_whole_text() {
        let text = "RESUME\nMaria José García\n";
        let entities = recognize(text);

        assert_eq!(entities.len(), 1);
        let entity = &entities[0];
        assert_eq!(entity.text, "Maria José García");
        assert_eq!(&text[entity.start..entity.end], "Maria José García");
    }

    #[test]
    fn test_runs_break_on_punctuation() {
        let entities = recognize("Alice Smith, Bob Jones");

        let texts: Vec<_> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Alice Smith", "Bob Jones"]);
    }

    #[test]
    fn test_single_and_long_runs_are_ignored() {
        assert!(recognize("Python").is_empty());
        assert!(recognize("One Two Three Four Five").is_empty());
    }
}
