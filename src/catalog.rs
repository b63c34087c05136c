//! Course browsing and content search.

use crate::content::{self, Course, Domain, Flashcard, Lesson};
use crate::lang::Language;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// All browsable content.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub flashcards: Vec<Flashcard>,
    pub domains: Vec<Domain>,
}

/// What a search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Flashcard,
    Course,
    Lesson,
    Domain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: String,
    /// Title in the searched language.
    pub title: String,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            courses: content::courses(),
            flashcards: content::flashcards(),
            domains: content::domains(),
        }
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Case-insensitive regular expression search over titles, terms and definitions.
    ///
    /// Hits come back grouped by kind: flashcards, courses, lessons, then domains.
    pub fn search(&self, pattern: &str, lang: Language) -> Result<Vec<SearchHit>> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid regex pattern: {}", pattern))?;

        let mut hits = Vec::new();
        for card in &self.flashcards {
            if re.is_match(&card.term) || re.is_match(card.definition.get(lang)) {
                hits.push(SearchHit {
                    kind: HitKind::Flashcard,
                    id: card.id.to_string(),
                    title: card.term.clone(),
                });
            }
        }
        for course in &self.courses {
            push_match(&mut hits, &re, HitKind::Course, &course.id, course.title.get(lang));
        }
        for course in &self.courses {
            for lesson in course.lessons() {
                push_match(&mut hits, &re, HitKind::Lesson, &lesson.id, lesson.title.get(lang));
            }
        }
        for domain in &self.domains {
            push_match(&mut hits, &re, HitKind::Domain, &domain.id, domain.title.get(lang));
        }
        Ok(hits)
    }
}

fn push_match(hits: &mut Vec<SearchHit>, re: &Regex, kind: HitKind, id: &str, title: &str) {
    if re.is_match(title) {
        hits.push(SearchHit {
            kind,
            id: id.to_string(),
            title: title.to_string(),
        });
    }
}

/// Cursor over the lessons of one course, across module boundaries.
#[derive(Debug, Clone)]
pub struct CourseBrowser<'a> {
    course: &'a Course,
    lessons: Vec<&'a Lesson>,
    selected: Option<usize>,
}

impl<'a> CourseBrowser<'a> {
    /// Open a course with the first lesson of its first module selected.
    ///
    /// Nothing is selected when the first module is missing or empty, even if later
    /// modules have lessons.
    pub fn open(course: &'a Course) -> Self {
        let lessons: Vec<&Lesson> = course.lessons().collect();
        let selected = course
            .modules
            .first()
            .is_some_and(|module| !module.lessons.is_empty())
            .then_some(0);
        Self {
            course,
            lessons,
            selected,
        }
    }

    pub fn course(&self) -> &'a Course {
        self.course
    }

    pub fn selected(&self) -> Option<&'a Lesson> {
        self.selected.map(|i| self.lessons[i])
    }

    /// Select a lesson by id. Returns `None` and keeps the selection if it is unknown.
    pub fn select(&mut self, lesson_id: &str) -> Option<&'a Lesson> {
        let index = self.lessons.iter().position(|l| l.id == lesson_id)?;
        self.selected = Some(index);
        self.selected()
    }

    /// Move to the following lesson; stays put on the last one.
    pub fn next_lesson(&mut self) -> Option<&'a Lesson> {
        let current = self.selected?;
        if current + 1 < self.lessons.len() {
            self.selected = Some(current + 1);
            return self.selected();
        }
        None
    }

    /// Move to the preceding lesson; stays put on the first one.
    pub fn previous_lesson(&mut self) -> Option<&'a Lesson> {
        let current = self.selected?;
        if current > 0 {
            self.selected = Some(current - 1);
            return self.selected();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_selects_first_lesson() {
        let catalog = Catalog::builtin();
        let course = catalog.course("sec-plus").unwrap();
        let browser = CourseBrowser::open(course);
        assert_eq!(browser.selected().map(|l| l.id.as_str()), Some("l1-1"));

        let empty = CourseBrowser::open(catalog.course("net-plus").unwrap());
        assert!(empty.selected().is_none());
    }

    #[test]
    fn test_open_skips_selection_when_first_module_is_empty() {
        let catalog = Catalog::builtin();
        let mut course = catalog.course("sec-plus").unwrap().clone();
        course.modules[0].lessons.clear();

        let mut browser = CourseBrowser::open(&course);
        assert!(browser.selected().is_none());
        assert!(browser.next_lesson().is_none());
        assert_eq!(browser.select("l2-1").unwrap().id, "l2-1");
    }

    #[test]
    fn test_lesson_navigation_crosses_modules() {
        let catalog = Catalog::builtin();
        let mut browser = CourseBrowser::open(catalog.course("sec-plus").unwrap());

        assert_eq!(browser.select("l1-3").unwrap().id, "l1-3");
        assert_eq!(browser.next_lesson().unwrap().id, "l2-1");
        assert_eq!(browser.next_lesson().unwrap().id, "l2-2");
        assert!(browser.next_lesson().is_none());
        assert_eq!(browser.selected().unwrap().id, "l2-2");

        browser.select("l1-1");
        assert!(browser.previous_lesson().is_none());
        assert!(browser.select("missing").is_none());
        assert_eq!(browser.selected().unwrap().id, "l1-1");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hits = catalog.search("phish", Language::En).unwrap();
        assert_eq!(hits[0].kind, HitKind::Flashcard);
        assert_eq!(hits[0].title, "Phishing");

        let hits = catalog.search("security", Language::En).unwrap();
        assert!(hits.iter().any(|h| h.kind == HitKind::Course && h.id == "sec-plus"));
        assert!(hits.iter().any(|h| h.kind == HitKind::Domain && h.id == "d1"));
    }

    #[test]
    fn test_search_in_hebrew() {
        let catalog = Catalog::builtin();
        let hits = catalog.search("נוזקות", Language::He).unwrap();
        assert!(hits.iter().any(|h| h.kind == HitKind::Lesson && h.id == "l2-1"));
    }

    #[test]
    fn test_search_rejects_bad_pattern() {
        let catalog = Catalog::builtin();
        let err = catalog.search("(unclosed", Language::En).unwrap_err();
        assert!(err.to_string().contains("Invalid regex pattern"));
    }
}
