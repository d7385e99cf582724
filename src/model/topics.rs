//! Topic details and topic-code expansion

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic information attached to a channel or video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetails {
    /// Opaque topic codes associated with the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_ids: Option<Vec<String>>,
    /// Codes of topics loosely relevant to a video; used when `topicIds`
    /// is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_topic_ids: Option<Vec<String>>,
    /// Wikipedia URLs describing the resource's topics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_categories: Option<Vec<String>>,
}

impl TopicDetails {
    /// The codes to expand: `topicIds`, falling back to
    /// `relevantTopicIds` when the primary list is absent.
    pub fn effective_ids(&self) -> &[String] {
        self.topic_ids
            .as_deref()
            .or(self.relevant_topic_ids.as_deref())
            .unwrap_or(&[])
    }

    /// Expand the topic codes into labeled topics.
    ///
    /// Unrecognized codes come back with `label: None`; expansion never
    /// fails.
    pub fn expand(&self, catalog: &TopicCatalog) -> Vec<Topic> {
        catalog.expand(self.effective_ids().iter().map(String::as_str))
    }
}

/// A topic code resolved against the label table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// The opaque topic code
    pub id: String,
    /// Human-readable label; `None` when the code is not in the table
    pub label: Option<String>,
}

/// Static code-to-label table for topic expansion.
///
/// The built-in table covers the documented topic codes; a substitute can
/// be injected wherever a catalog is accepted.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    labels: BTreeMap<String, String>,
}

static BUILTIN_TOPICS: Lazy<TopicCatalog> = Lazy::new(|| {
    let mut catalog = TopicCatalog::default();
    for (id, label) in TOPIC_LABELS {
        catalog.insert(*id, *label);
    }
    catalog
});

impl TopicCatalog {
    /// The built-in label table
    pub fn builtin() -> &'static Self {
        &BUILTIN_TOPICS
    }

    /// Register (or replace) a code's label
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), label.into());
    }

    /// Look up the label for one code
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Expand codes into labeled topics, in input order
    pub fn expand<'a, I>(&self, ids: I) -> Vec<Topic>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .map(|id| Topic {
                id: id.to_string(),
                label: self.label(id).map(str::to_string),
            })
            .collect()
    }
}

/// Documented topic codes and their labels
const TOPIC_LABELS: &[(&str, &str)] = &[
    // Music
    ("/m/04rlf", "Music"),
    ("/m/02mscn", "Christian music"),
    ("/m/0ggq0m", "Classical music"),
    ("/m/01lyv", "Country"),
    ("/m/02lkt", "Electronic music"),
    ("/m/0glt670", "Hip hop music"),
    ("/m/05rwpb", "Independent music"),
    ("/m/03_d0", "Jazz"),
    ("/m/028sqc", "Music of Asia"),
    ("/m/0g293", "Music of Latin America"),
    ("/m/064t9", "Pop music"),
    ("/m/06cqb", "Reggae"),
    ("/m/06j6l", "Rhythm and blues"),
    ("/m/06by7", "Rock music"),
    ("/m/0gywn", "Soul music"),
    // Gaming
    ("/m/0bzvm2", "Gaming"),
    ("/m/025zzc", "Action game"),
    ("/m/02ntfj", "Action-adventure game"),
    ("/m/0b1vjn", "Casual game"),
    ("/m/02hygl", "Music video game"),
    ("/m/04q1x3q", "Puzzle video game"),
    ("/m/01sjng", "Racing video game"),
    ("/m/0403l3g", "Role-playing video game"),
    ("/m/021bp2", "Simulation video game"),
    ("/m/022dc6", "Sports game"),
    ("/m/03hf_rm", "Strategy video game"),
    // Sports
    ("/m/06ntj", "Sports"),
    ("/m/0jm_", "American football"),
    ("/m/018jz", "Baseball"),
    ("/m/018w8", "Basketball"),
    ("/m/01cgz", "Boxing"),
    ("/m/09xp_", "Cricket"),
    ("/m/02vx4", "Football"),
    ("/m/037hz", "Golf"),
    ("/m/03tmr", "Ice hockey"),
    ("/m/01h7lh", "Mixed martial arts"),
    ("/m/0410tth", "Motorsport"),
    ("/m/07bs0", "Tennis"),
    ("/m/07_53", "Volleyball"),
    // Entertainment
    ("/m/02jjt", "Entertainment"),
    ("/m/09kqc", "Humor"),
    ("/m/02vxn", "Movies"),
    ("/m/05qjc", "Performing arts"),
    ("/m/066wd", "Professional wrestling"),
    ("/m/0f2f9", "TV shows"),
    // Lifestyle
    ("/m/019_rr", "Lifestyle"),
    ("/m/032tl", "Fashion"),
    ("/m/027x7n", "Fitness"),
    ("/m/02wbm", "Food"),
    ("/m/03glg", "Hobby"),
    ("/m/068hy", "Pets"),
    ("/m/041xxh", "Physical attractiveness"),
    ("/m/07c1v", "Technology"),
    ("/m/07bxq", "Tourism"),
    ("/m/07yv9", "Vehicles"),
    // Other
    ("/m/0kt51", "Health"),
    ("/m/01k8wb", "Knowledge"),
    ("/m/098wr", "Society"),
];
