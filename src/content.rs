//! Static bilingual training content.
//!
//! These tables are read-only reference data handed to the quiz, deck and course
//! browser. A question bank can also be loaded from a TOML file:
//!
//! ```toml
//! [[questions]]
//! id = 1
//! correct_option = 0
//! prompt = { en = "What does AES stand for?", he = "מה פירוש AES?" }
//! explanation = { en = "Advanced Encryption Standard.", he = "תקן הצפנה מתקדם." }
//! options = [
//!     { en = "Advanced Encryption Standard", he = "Advanced Encryption Standard" },
//!     { en = "Asymmetric Exchange System", he = "Asymmetric Exchange System" },
//! ]
//! ```

use crate::lang::Localized;
use crate::quiz::{self, QuizError, QuizQuestion};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading external content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question bank: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid question bank: {0}")]
    Invalid(#[from] QuizError),
}

/// A validated list of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Parse and validate a TOML question bank.
    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let bank: QuestionBank = toml::from_str(text)?;
        quiz::validate(&bank.questions)?;
        Ok(bank)
    }

    /// Read a question bank from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_toml_str(&text)?;
        info!(path = %path.display(), questions = bank.questions.len(), "loaded question bank");
        Ok(bank)
    }

    /// The questions shipped with the platform.
    pub fn builtin() -> Self {
        Self {
            questions: quiz_questions(),
        }
    }
}

/// A term to memorize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: u32,
    pub term: String,
    pub definition: Localized,
    pub category: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStatus {
    Completed,
    InProgress,
    Started,
    NotStarted,
}

/// An exam domain on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    pub number: String,
    pub title: Localized,
    pub description: Localized,
    pub status: DomainStatus,
    /// Percent, 0 to 100.
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    Video,
    Text,
    Lab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: Localized,
    pub kind: LessonKind,
    pub duration: String,
    pub completed: bool,
    /// Markdown body, when the lesson has one.
    pub content: Option<Localized>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub title: Localized,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: Localized,
    pub description: Localized,
    /// Percent, 0 to 100.
    pub progress: u8,
    pub total_modules: usize,
    pub modules: Vec<Module>,
}

impl Course {
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }
}

fn l(en: &str, he: &str) -> Localized {
    Localized::new(en, he)
}

/// Security+ practice questions.
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            prompt: l(
                "Which of the following concepts ensures that data is not modified by unauthorized parties?",
                "איזה מהמושגים הבאים מבטיח שהנתונים לא שונו על ידי גורמים לא מורשים?",
            ),
            options: vec![
                l("Confidentiality", "סודיות (Confidentiality)"),
                l("Integrity", "שלמות (Integrity)"),
                l("Availability", "זמינות (Availability)"),
                l("Non-repudiation", "אי-התכחשות (Non-repudiation)"),
            ],
            correct_option: 1,
            explanation: l(
                "Integrity involves maintaining the consistency, accuracy, and trustworthiness of data over its entire lifecycle.",
                "שלמות (Integrity) עוסקת בשמירה על העקביות, הדיוק והאמינות של הנתונים לאורך כל מחזור חייהם.",
            ),
        },
        QuizQuestion {
            id: 2,
            prompt: l(
                "A user receives an email that appears to be from their CEO asking for a wire transfer. What type of attack is this?",
                "משתמש מקבל אימייל שנראה כאילו נשלח מהמנכ\"ל ומבקש העברה בנקאית. איזה סוג של התקפה זו?",
            ),
            options: vec![
                Localized::same("Vishing"),
                l("Whaling", "Whaling (ציד לווייתנים)"),
                Localized::same("Pharming"),
                Localized::same("Tailgating"),
            ],
            correct_option: 1,
            explanation: l(
                "Whaling is a specific type of phishing attack that targets high-profile employees, such as the CEO or CFO.",
                "Whaling היא סוג ספציפי של מתקפת פישינג המכוונת לעובדים בפרופיל גבוה, כמו מנכ\"ל או סמנכ\"ל כספים.",
            ),
        },
    ]
}

pub fn flashcards() -> Vec<Flashcard> {
    vec![
        Flashcard {
            id: 1,
            term: "Phishing".to_string(),
            definition: l(
                "A social engineering attack where an attacker sends fraudulent emails claiming to be from a reputable source.",
                "מתקפת הנדסה חברתית בה התוקף שולח מיילים מתחזים הטוענים להיות ממקור אמין.",
            ),
            category: l("Threats", "איומים"),
        },
        Flashcard {
            id: 2,
            term: "Ransomware".to_string(),
            definition: l(
                "Malware that encrypts the user's data and demands payment in exchange for unlocking it.",
                "נוזקה שמצפינה את נתוני המשתמש ודורשת תשלום כופר תמורת שחרורם.",
            ),
            category: l("Malware", "נוזקות"),
        },
        Flashcard {
            id: 3,
            term: "DDoS".to_string(),
            definition: l(
                "Distributed Denial of Service. An attack where multiple compromised systems are used to target a single system.",
                "מניעת שירות מבוזרת. התקפה בה מערכות רבות משמשות להפלת מערכת יעד אחת.",
            ),
            category: l("Attacks", "התקפות"),
        },
    ]
}

pub fn domains() -> Vec<Domain> {
    let domain = |n: &str, title: Localized, description: Localized, status, progress| Domain {
        id: format!("d{}", n.trim_start_matches('0')),
        number: n.to_string(),
        title,
        description,
        status,
        progress,
    };
    vec![
        domain(
            "01",
            l("General Security Concepts", "מושגי אבטחה כלליים"),
            l(
                "Compare and contrast various types of security controls, fundamental security principles, and change management.",
                "השוואה והגדרה בין סוגים שונים של בקרות אבטחה, עקרונות אבטחה בסיסיים וניהול שינויים.",
            ),
            DomainStatus::Completed,
            100,
        ),
        domain(
            "02",
            l("Threats, Vulns & Mitigations", "איומים, פגיעויות וצמצום סיכונים"),
            l(
                "Analyze potential indicators to determine the type of attack. Understand actors, vectors, and intelligence sources.",
                "ניתוח אינדיקטורים פוטנציאליים כדי לקבוע את סוג ההתקפה. הבנת גורמים, וקטורים ומקורות מודיעין.",
            ),
            DomainStatus::InProgress,
            45,
        ),
        domain(
            "03",
            l("Security Architecture", "ארכיטקטורת אבטחה"),
            l(
                "Implement security implications of different architecture models. Secure enterprise infrastructure and data.",
                "יישום השלכות האבטחה של מודלים ארכיטקטוניים שונים. אבטחת תשתיות ארגוניות ונתונים.",
            ),
            DomainStatus::Started,
            12,
        ),
        domain(
            "04",
            l("Security Operations", "אופרציות אבטחה"),
            l(
                "Apply appropriate incident response procedures. Use data sources to support an investigation.",
                "יישום נהלי תגובה לאירועים מתאימים. שימוש במקורות מידע לתמיכה בחקירה.",
            ),
            DomainStatus::NotStarted,
            0,
        ),
        domain(
            "05",
            l("Program Mgmt & Oversight", "ניהול תוכנית ופיקוח"),
            l(
                "Summarize elements of effective security governance. Explain risk management processes and compliance.",
                "סיכום אלמנטים של ממשל אבטחה יעיל. הסבר על תהליכי ניהול סיכונים ותאימות.",
            ),
            DomainStatus::NotStarted,
            0,
        ),
    ]
}

fn lesson(
    id: &str,
    title: Localized,
    kind: LessonKind,
    duration: &str,
    completed: bool,
    content: Option<Localized>,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title,
        kind,
        duration: duration.to_string(),
        completed,
        content,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "sec-plus".to_string(),
            title: Localized::same("CompTIA Security+ (SY0-701)"),
            description: l(
                "Master the core knowledge required for any cybersecurity role. Covers threats, attacks, vulnerabilities, and architecture.",
                "שלטו בידע הליבה הנדרש לכל תפקיד בסייבר. מכסה איומים, התקפות, חולשות וארכיטקטורה.",
            ),
            progress: 34,
            total_modules: 5,
            modules: vec![
                Module {
                    id: "m1".to_string(),
                    title: l("1.0 General Security Concepts", "1.0 מושגי אבטחה כלליים"),
                    lessons: vec![
                        lesson(
                            "l1-1",
                            l("CIA Triad & Authentication", "השילוש הקדוש (CIA) ואימות"),
                            LessonKind::Text,
                            "15 min",
                            true,
                            Some(l(
                                "# The CIA Triad\n\nThe **CIA Triad** is the foundational model for information security.\n\n* **Confidentiality:** Preventing unauthorized disclosure of information.\n* **Integrity:** Assuring that data has not been modified or tampered with.\n* **Availability:** Ensuring systems and data are accessible when needed.",
                                "# מודל ה-CIA\n\nמודל ה-**CIA** הוא המודל היסודי לאבטחת מידע.\n\n* **Confidentiality (סודיות):** מניעת חשיפה לא מורשית של מידע.\n* **Integrity (שלמות):** הבטחה שהנתונים לא שונו או טופלו בזדון.\n* **Availability (זמינות):** הבטחת גישה למערכות ולנתונים בעת הצורך.",
                            )),
                        ),
                        lesson(
                            "l1-2",
                            l("Change Management Processes", "תהליכי ניהול שינויים"),
                            LessonKind::Video,
                            "10 min",
                            true,
                            None,
                        ),
                        lesson(
                            "l1-3",
                            l("Cryptographic Basics", "יסודות הקריפטוגרפיה"),
                            LessonKind::Text,
                            "25 min",
                            false,
                            Some(l(
                                "# Cryptography Basics\n\nCryptography is the practice of securing communication from adversarial behavior.\n\n### Key Concepts\n* **Symmetric Encryption:** Uses the same key for encryption and decryption (e.g., AES).\n* **Asymmetric Encryption:** Uses a key pair - public and private (e.g., RSA, ECC).",
                                "# יסודות הקריפטוגרפיה\n\nקריפטוגרפיה היא הפרקטיקה של אבטחת תקשורת מפני יריבים.\n\n### מושגי מפתח\n* **הצפנה סימטרית:** שימוש באותו מפתח להצפנה ולפענוח (למשל, AES).\n* **הצפנה א-סימטרית:** שימוש בשיג מפתחות - ציבורי ופרטי (למשל, RSA, ECC).",
                            )),
                        ),
                    ],
                },
                Module {
                    id: "m2".to_string(),
                    title: l("2.0 Threats & Vulnerabilities", "2.0 איומים וחולשות"),
                    lessons: vec![
                        lesson(
                            "l2-1",
                            l("Malware Types", "סוגי נוזקות"),
                            LessonKind::Text,
                            "20 min",
                            false,
                            None,
                        ),
                        lesson(
                            "l2-2",
                            l("Social Engineering Vectors", "הנדסה חברתית"),
                            LessonKind::Lab,
                            "30 min",
                            false,
                            None,
                        ),
                    ],
                },
            ],
        },
        Course {
            id: "linux-plus".to_string(),
            title: l("Linux+ / Practical Linux", "Linux+ / לינוקס מעשי"),
            description: l(
                "Deep dive into the Linux kernel, command line utilities, and system administration for security professionals.",
                "צלילה עמוקה לליבת הלינוקס, כלי שורת הפקודה וניהול מערכות עבור אנשי אבטחה.",
            ),
            progress: 12,
            total_modules: 4,
            modules: vec![Module {
                id: "m1".to_string(),
                title: l("1.0 System Management", "1.0 ניהול מערכת"),
                lessons: vec![
                    lesson(
                        "linux-1",
                        l("File System Hierarchy", "היררכיית מערכת הקבצים"),
                        LessonKind::Text,
                        "15 min",
                        true,
                        None,
                    ),
                    lesson(
                        "linux-2",
                        l("Basic Commands (ls, cd, pwd)", "פקודות בסיסיות"),
                        LessonKind::Lab,
                        "20 min",
                        false,
                        None,
                    ),
                ],
            }],
        },
        Course {
            id: "net-plus".to_string(),
            title: Localized::same("Network+ (N10-008)"),
            description: l(
                "Essential networking concepts including ports, protocols, OSI model, and troubleshooting.",
                "מושגי יסוד ברשתות כולל פורטים, פרוטוקולים, מודל ה-OSI ופתרון תקלות.",
            ),
            progress: 0,
            total_modules: 5,
            modules: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;

    const BANK: &str = r#"
[[questions]]
id = 10
correct_option = 0
prompt = { en = "What does AES stand for?", he = "מה פירוש AES?" }
explanation = { en = "Advanced Encryption Standard.", he = "תקן הצפנה מתקדם." }
options = [
    { en = "Advanced Encryption Standard", he = "Advanced Encryption Standard" },
    { en = "Asymmetric Exchange System", he = "Asymmetric Exchange System" },
]
"#;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.questions.len(), 2);
        assert!(quiz::validate(&bank.questions).is_ok());
        assert!(bank.questions.iter().all(|q| q.correct_option == 1));
    }

    #[test]
    fn test_parse_toml_bank() {
        let bank = QuestionBank::from_toml_str(BANK).unwrap();
        assert_eq!(bank.questions.len(), 1);
        let q = &bank.questions[0];
        assert_eq!(q.id, 10);
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.prompt.get(Language::He), "מה פירוש AES?");
    }

    #[test]
    fn test_toml_bank_is_validated() {
        let broken = BANK.replace("correct_option = 0", "correct_option = 5");
        assert!(matches!(
            QuestionBank::from_toml_str(&broken),
            Err(ContentError::Invalid(QuizError::InvalidQuestion { id: 10, .. }))
        ));

        assert!(matches!(
            QuestionBank::from_toml_str("questions = []"),
            Err(ContentError::Invalid(QuizError::EmptyQuiz))
        ));

        assert!(matches!(
            QuestionBank::from_toml_str("questions = 3"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = QuestionBank::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_domains_table() {
        let domains = domains();
        assert_eq!(domains.len(), 5);
        assert_eq!(domains[0].id, "d1");
        assert_eq!(domains[4].number, "05");
        assert!(domains.iter().all(|d| d.progress <= 100));
    }

    #[test]
    fn test_course_lessons_flatten_modules() {
        let courses = courses();
        let ids: Vec<&str> = courses[0].lessons().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["l1-1", "l1-2", "l1-3", "l2-1", "l2-2"]);
        assert_eq!(courses[2].lessons().count(), 0);
    }
}
