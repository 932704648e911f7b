//! Shared regular expressions and vocabularies.
//!
//! Everything here is a read-only process-wide constant; regexes compile
//! once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! lazy_regex {
    ($name:ident, $re:expr) => {
        pub static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($re).expect(concat!("invalid regex: ", $re)));
    };
}

lazy_regex!(EMAIL, r"\S+@\S+\.\S+");
lazy_regex!(PHONE, r"\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{4}");
lazy_regex!(CITY_STATE, r"[A-Z][a-zA-Z\s]+, [A-Z]{2}");
lazy_regex!(URL_PATH, r"\S+\.[a-z]+/\S+");
lazy_regex!(HTTP_URL, r"https?://\S+\.\S+");
lazy_regex!(WWW_URL, r"www\.\S+\.\S+");
lazy_regex!(NAME, r"^[a-zA-Z\s\.]+$");
lazy_regex!(YEAR, r"(?:19|20)\d{2}");
lazy_regex!(GPA, r"[0-4]\.\d{1,2}");
lazy_regex!(DEGREE_INITIALS, r"\b[ABM][A-Z\.]");
lazy_regex!(PRESENT, r"(?i)\b(?:present|current)\b");
lazy_regex!(TO_WORD, r"(?i)\bto\b");
lazy_regex!(BARE_DECIMAL, r"^\d+(?:\.\d+)?$");
lazy_regex!(LIST_SEPARATOR, r"\s*[,;|/]\s*|\s+and\s+|\s+\+\s+");

/// Words that name a job title.
pub const JOB_TITLES: &[&str] = &[
    "Accountant", "Administrator", "Advisor", "Agent", "Analyst", "Apprentice", "Architect",
    "Assistant", "Associate", "Auditor", "Bartender", "Biologist", "Bookkeeper", "Buyer",
    "Carpenter", "Cashier", "CEO", "Clerk", "Co-op", "Co-Founder", "Consultant", "Coordinator",
    "CTO", "Developer", "Designer", "Director", "Driver", "Editor", "Electrician", "Engineer",
    "Extern", "Founder", "Freelancer", "Head", "Intern", "Janitor", "Journalist", "Laborer",
    "Lawyer", "Lead", "Manager", "Mechanic", "Member", "Nurse", "Officer", "Operator",
    "Operation", "Photographer", "President", "Producer", "Recruiter", "Representative",
    "Researcher", "Sales", "Server", "Scientist", "Specialist", "Supervisor", "Teacher",
    "Technician", "Trader", "Trainee", "Treasurer", "Tutor", "Vice", "VP", "Volunteer",
    "Webmaster", "Worker",
];

/// Words that name a school.
pub const SCHOOLS: &[&str] = &[
    "College", "University", "Institute", "School", "Academy", "BASIS", "Magnet",
];

/// Words that name a degree.
pub const DEGREES: &[&str] = &["Associate", "Bachelor", "Master", "PhD", "Ph.D", "Ph."];

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Three-letter month abbreviations, plus the common "Sept".
pub const MONTH_ABBREVIATIONS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Sept", "Oct", "Nov", "Dec",
];

pub const SEASONS: &[&str] = &["Spring", "Summer", "Fall", "Winter"];

/// Lowercase technology keywords.
pub const TECH_KEYWORDS: &[&str] = &[
    "java", "python", "javascript", "typescript", "c++", "c#", "ruby", "php", "html", "css",
    "sql", "nosql", "react", "angular", "vue", "node", "express", "django", "spring", "aws",
    "azure", "gcp", "docker", "kubernetes", "linux", "unix", "git", "github", "agile", "scrum",
    "rest", "api", "database", "mongodb", "mysql", "postgresql", "oracle", "algorithm",
];

/// Lowercase names of spoken languages.
pub const SPOKEN_LANGUAGES: &[&str] = &[
    "english", "spanish", "french", "german", "italian", "chinese", "mandarin", "cantonese",
    "japanese", "korean", "russian", "arabic", "hindi", "portuguese", "dutch", "swedish",
    "danish", "finnish", "norwegian", "greek", "turkish", "polish", "czech", "vietnamese",
    "thai", "indonesian", "malay", "tagalog", "hebrew",
];

/// Words that mark a language proficiency statement.
pub const LANGUAGE_MARKERS: &[&str] = &[
    "language", "languages", "fluent", "native", "bilingual", "multilingual",
];

/// Words that mark a certification.
pub const CERTIFICATION_MARKERS: &[&str] = &[
    "certification", "certificate", "certified", "license", "licensed", "accredited",
];

/// A bullet glyph and whether it only counts at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletGlyph {
    pub glyph: &'static str,
    /// Hyphens and asterisks also occur inside ordinary text
    pub leading_only: bool,
}

const fn glyph(glyph: &'static str) -> BulletGlyph {
    BulletGlyph {
        glyph,
        leading_only: false,
    }
}

const fn leading(glyph: &'static str) -> BulletGlyph {
    BulletGlyph {
        glyph,
        leading_only: true,
    }
}

/// Bullet glyphs in priority order.
pub const BULLET_GLYPHS: &[BulletGlyph] = &[
    glyph("⋅"),
    glyph("∙"),
    glyph("🞄"),
    glyph("•"),
    glyph("⦁"),
    glyph("⚫\u{FE0E}"),
    glyph("●"),
    glyph("⬤"),
    glyph("⚬"),
    glyph("○"),
    leading("-"),
    glyph("▪"),
    glyph("■"),
    glyph("◦"),
    glyph("»"),
    glyph("►"),
    glyph("✓"),
    glyph("✔"),
    glyph("★"),
    glyph("☆"),
    leading("*"),
];

impl BulletGlyph {
    /// Whether a line of text carries this glyph as a bullet.
    pub fn marks(&self, text: &str) -> bool {
        if self.leading_only {
            text.trim_start().starts_with(self.glyph)
        } else {
            text.contains(self.glyph)
        }
    }
}

/// Whether a line of text carries any bullet glyph.
pub fn has_bullet(text: &str) -> bool {
    BULLET_GLYPHS.iter().any(|g| g.marks(text))
}

/// Whether `text` contains `word` as a whole token, ignoring case.
///
/// Tokens are split on whitespace and on punctuation other than the
/// characters that appear inside vocabulary words (`+ # - .`).
pub fn contains_token(text: &str, word: &str) -> bool {
    tokens(text).any(|t| t.eq_ignore_ascii_case(word))
}

/// Whether any vocabulary word appears as a whole token.
pub fn contains_any_token(text: &str, words: &[&str]) -> bool {
    tokens(text).any(|t| words.iter().any(|w| t.eq_ignore_ascii_case(w)))
}

/// Whole-token iterator used by vocabulary matching.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '(' | ')' | '/' | '|'))
        .map(|t| t.trim_matches(|c: char| c == '.' || c == '-'))
        .filter(|t| !t.is_empty())
}
