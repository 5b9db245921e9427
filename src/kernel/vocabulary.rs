use unicode_segmentation::UnicodeSegmentation;

/// Labels shown when no vocabulary is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "Java",
    "TypeScript",
    "JavaScript",
    "Python",
    "Django",
    "Flask",
    "FastAPI",
    "Nodejs",
    "Next",
    "Nuxt",
    "Vuejs",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Shell",
    "Bash",
    "Git",
    "Docker",
    "AWS",
    "HTML",
    "CSS",
    "SASS",
    "TailwindCSS",
    "Bootstrap",
    "MaterialDesign",
    "Jasmine",
    "Karma",
    "Jest",
    "Cypress",
    "JUnit",
    "Mockito",
    "Hibernate",
    "REST",
    "Jira",
    "Confluence",
    "Bitbucket",
    "GitLab",
    "Liquibase",
    "Maven",
    "Gradle",
    "Ionic",
    "Capacitor",
    "SSR",
];

/// Number of grid cells a label occupies: one per grapheme cluster.
pub fn char_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Ordered list of labels to lay out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Keeps the given order. Entries that are blank after trimming are
    /// dropped, since a blank label cannot be told apart from padding.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.trim().is_empty())
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn total_len(&self) -> usize {
        self.words.iter().map(|w| char_len(w)).sum()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/vocabulary.rs"]
mod tests;
