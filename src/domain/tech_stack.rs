//! Technology label synthesis from framework, language and topics.

use crate::utils::text::capitalize_first;

/// Maximum number of labels shown for a project.
pub const MAX_TECH_LABELS: usize = 6;

/// Provider framework identifiers mapped to display names.
const FRAMEWORK_LABELS: &[(&str, &str)] = &[
    ("nextjs", "Next.js"),
    ("react", "React"),
    ("vue", "Vue.js"),
    ("nuxt", "Nuxt"),
    ("gatsby", "Gatsby"),
    ("svelte", "Svelte"),
    ("astro", "Astro"),
];

/// Repository topics that count as technologies.
const RECOGNIZED_TOPICS: &[&str] = &[
    "typescript",
    "javascript",
    "react",
    "vue",
    "nextjs",
    "tailwindcss",
    "nodejs",
    "mongodb",
    "postgresql",
    "prisma",
    "supabase",
    "firebase",
    "graphql",
    "redux",
    "zustand",
];

/// Topics whose display name is not just the capitalized topic.
const TOPIC_LABELS: &[(&str, &str)] = &[
    ("nextjs", "Next.js"),
    ("tailwindcss", "Tailwind CSS"),
    ("nodejs", "Node.js"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Display name for a framework; unknown values pass through unchanged.
pub fn framework_label(framework: &str) -> String {
    lookup(FRAMEWORK_LABELS, &framework.to_lowercase())
        .map(str::to_string)
        .unwrap_or_else(|| framework.to_string())
}

/// Display name for a topic, or `None` if the topic is not a technology.
pub fn topic_label(topic: &str) -> Option<String> {
    let key = topic.to_lowercase();
    if !RECOGNIZED_TOPICS.contains(&key.as_str()) {
        return None;
    }
    Some(
        lookup(TOPIC_LABELS, &key)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize_first(topic)),
    )
}

/// Insertion-ordered label set, unique case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct TechStack {
    labels: Vec<String>,
}

impl TechStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label unless it is blank or already present.
    pub fn push(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty()
            || self
                .labels
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(trimmed))
        {
            return false;
        }
        self.labels.push(trimmed.to_string());
        true
    }

    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.push(label);
        }
    }

    /// First [`MAX_TECH_LABELS`] labels in insertion order.
    pub fn into_labels(mut self) -> Vec<String> {
        self.labels.truncate(MAX_TECH_LABELS);
        self.labels
    }
}

/// Builds the bounded label list for a project.
///
/// Framework first, then language, then recognized topics; anything past
/// the sixth label is dropped.
pub fn synthesize(framework: Option<&str>, language: Option<&str>, topics: &[String]) -> Vec<String> {
    let mut stack = TechStack::new();

    if let Some(framework) = framework {
        stack.push(framework_label(framework));
    }
    if let Some(language) = language {
        stack.push(language);
    }
    stack.extend(topics.iter().filter_map(|t| topic_label(t)));

    stack.into_labels()
}

/// Unions a synthesized list with operator-provided labels, re-truncated.
pub fn merge_additional(synthesized: Vec<String>, additional: &[String]) -> Vec<String> {
    let mut stack = TechStack::new();
    stack.extend(synthesized);
    stack.extend(additional.iter().cloned());
    stack.into_labels()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synthesize_framework_language_topics() {
        let topics = strings(&["tailwindcss", "mongodb", "notatopic"]);

        let labels = synthesize(Some("nextjs"), Some("TypeScript"), &topics);

        assert_eq!(
            labels,
            strings(&["Next.js", "TypeScript", "Tailwind CSS", "MongoDB"])
        );
    }

    #[test]
    fn test_unknown_framework_passes_through() {
        assert_eq!(framework_label("remix"), "remix");
        assert_eq!(framework_label("NextJS"), "Next.js");
    }

    #[test]
    fn test_topic_capitalized_fallback() {
        assert_eq!(topic_label("prisma").as_deref(), Some("Prisma"));
        assert_eq!(topic_label("GraphQL").as_deref(), Some("GraphQL"));
        assert_eq!(topic_label("rust"), None);
    }

    #[test]
    fn test_duplicates_are_case_insensitive() {
        let topics = strings(&["react", "typescript"]);

        let labels = synthesize(Some("react"), Some("TypeScript"), &topics);

        assert_eq!(labels, strings(&["React", "TypeScript"]));
    }

    #[test]
    fn test_truncation_keeps_first_six() {
        let topics = strings(&[
            "typescript",
            "tailwindcss",
            "nodejs",
            "mongodb",
            "postgresql",
            "prisma",
            "graphql",
        ]);

        let labels = synthesize(Some("nextjs"), None, &topics);

        assert_eq!(labels.len(), MAX_TECH_LABELS);
        assert_eq!(
            labels,
            strings(&[
                "Next.js",
                "Typescript",
                "Tailwind CSS",
                "Node.js",
                "MongoDB",
                "PostgreSQL"
            ])
        );
    }

    #[test]
    fn test_merge_additional_dedupes_and_truncates() {
        let base = strings(&["Next.js", "TypeScript", "Tailwind CSS"]);
        let extra = strings(&["next.js", "Framer Motion", "Prisma", "Redis", "Stripe"]);

        let labels = merge_additional(base, &extra);

        assert_eq!(
            labels,
            strings(&[
                "Next.js",
                "TypeScript",
                "Tailwind CSS",
                "Framer Motion",
                "Prisma",
                "Redis"
            ])
        );
    }

    #[test]
    fn test_eight_candidates_become_six() {
        let extra = strings(&["A", "B", "C", "D", "E", "F", "G", "H"]);

        let labels = merge_additional(Vec::new(), &extra);

        assert_eq!(labels, strings(&["A", "B", "C", "D", "E", "F"]));
    }
}
