//! Portfolio content documents.
//!
//! Every type here is read-only input. Optional fields stay `Option`, lists
//! default to empty, and a JSON `null` counts as absent: empty text, empty
//! list, or a dropped list entry.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// `null` → `T::default()`，避免整份文件因為一個空欄位解析失敗
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text list where `null` (whole list or single entries) means "nothing there".
pub(crate) fn text_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

fn skill_groups<'de, D>(deserializer: D) -> std::result::Result<SkillGroups, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = OrderedMap::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(OrderedMap(
        groups
            .0
            .into_iter()
            .map(|(name, skills)| (name, skills.into_iter().flatten().collect()))
            .collect(),
    ))
}

/// A JSON object whose key order is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
where
    V: Deserialize<'de> + Default,
{
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Option<V>>()? {
            entries.push((key, value.unwrap_or_default()));
        }
        Ok(OrderedMap(entries))
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(OrderedMap::default())
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

/// Email address split into two independently base64-encoded halves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObfuscatedEmail {
    pub local_b64: Option<String>,
    pub domain_b64: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedLink {
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Intro {
    #[serde(deserialize_with = "nullable")]
    pub headline: String,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "cvPath", alias = "cv_path")]
    pub cv_path: Option<String>,
    #[serde(rename = "cvSize", alias = "cv_size")]
    pub cv_size: Option<String>,
    pub email: Option<ObfuscatedEmail>,
    #[serde(deserialize_with = "text_list")]
    pub chips: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<NamedLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub blurb: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub tags: Vec<String>,
    pub links: OrderedMap<String>,
}

/// Group name → skills, in document order.
pub type SkillGroups = OrderedMap<Vec<String>>;

/// `skills.json` when published on its own.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SkillsDocument(#[serde(deserialize_with = "skill_groups")] pub SkillGroups);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

impl Certification {
    /// Trimmed URL, if there is one worth linking to.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    CopyEmail,
    Mailto,
    Link,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonSpec {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    pub id: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub href_key: Option<String>,
}

impl ButtonSpec {
    pub fn kind(&self) -> ButtonKind {
        match self.kind.as_str() {
            "copy-email" => ButtonKind::CopyEmail,
            "mailto" => ButtonKind::Mailto,
            "link" => ButtonKind::Link,
            _ => ButtonKind::Unknown,
        }
    }

    /// Identifier used by `ContactConfig::enabled`; falls back to the type tag.
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub cta: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub enabled: Vec<String>,
    pub links: OrderedMap<String>,
    pub email: Option<ObfuscatedEmail>,
    #[serde(deserialize_with = "nullable")]
    pub primary_buttons: Vec<ButtonSpec>,
}

impl ContactConfig {
    /// Buttons to show, in display order.
    pub fn active_buttons(&self) -> Vec<&ButtonSpec> {
        if self.enabled.is_empty() {
            return self.primary_buttons.iter().collect();
        }
        self.enabled
            .iter()
            .filter_map(|id| self.primary_buttons.iter().find(|b| b.identifier() == id))
            .collect()
    }
}

/// Everything one page build needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Content {
    #[serde(deserialize_with = "nullable")]
    pub intro: Intro,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<ExperienceItem>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<ProjectItem>,
    #[serde(deserialize_with = "skill_groups")]
    pub skills: SkillGroups,
    #[serde(deserialize_with = "nullable")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "nullable")]
    pub contact: ContactConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_groups_keep_document_order() {
        let groups: SkillGroups = serde_json::from_str(
            r#"{"Languages": ["Rust", "Go"], "Cloud": ["AWS"], "Data": null}"#,
        )
        .unwrap();

        let keys: Vec<&str> = groups.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Languages", "Cloud", "Data"]);
        assert_eq!(groups.get("Data").unwrap().len(), 0);
    }

    #[test]
    fn test_null_lists_are_absent() {
        let item: ExperienceItem =
            serde_json::from_str(r#"{"role": "Engineer", "highlights": null}"#).unwrap();
        assert_eq!(item.role, "Engineer");
        assert!(item.highlights.is_empty());
        assert!(item.tags.is_empty());
        assert!(item.end.is_none());
    }

    #[test]
    fn test_null_text_reads_as_empty() {
        let item: ExperienceItem = serde_json::from_str(
            r#"{"role": null, "highlights": ["Led migration", null], "tags": [null]}"#,
        )
        .unwrap();
        assert_eq!(item.role, "");
        assert_eq!(item.highlights, vec!["Led migration".to_string()]);
        assert!(item.tags.is_empty());

        let link: NamedLink = serde_json::from_str(r#"{"label": null, "url": null}"#).unwrap();
        assert_eq!(link, NamedLink::default());

        let button: ButtonSpec = serde_json::from_str(r#"{"type": null}"#).unwrap();
        assert_eq!(button.kind(), ButtonKind::Unknown);
    }

    #[test]
    fn test_null_skills_are_dropped() {
        let SkillsDocument(groups) =
            serde_json::from_str(r#"{"Lang": ["Rust", null], "Empty": null}"#).unwrap();
        assert_eq!(groups.get("Lang").unwrap(), &vec!["Rust".to_string()]);
        assert!(groups.get("Empty").unwrap().is_empty());
    }

    #[test]
    fn test_intro_accepts_both_cv_spellings() {
        let camel: Intro = serde_json::from_str(r#"{"cvPath": "/cv.pdf"}"#).unwrap();
        let snake: Intro = serde_json::from_str(r#"{"cv_path": "/cv.pdf"}"#).unwrap();
        assert_eq!(camel.cv_path.as_deref(), Some("/cv.pdf"));
        assert_eq!(snake.cv_path, camel.cv_path);
    }

    #[test]
    fn test_certification_link_ignores_blank_url() {
        let blank = Certification {
            label: "CKA".to_string(),
            url: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.link(), None);
    }

    #[test]
    fn test_active_buttons_follow_enabled_order() {
        let contact: ContactConfig = serde_json::from_str(
            r#"{
                "enabled": ["linkedin", "copy-email"],
                "primary_buttons": [
                    {"type": "copy-email"},
                    {"type": "mailto"},
                    {"type": "link", "id": "linkedin", "href_key": "linkedin"}
                ]
            }"#,
        )
        .unwrap();

        let order: Vec<&str> = contact.active_buttons().iter().map(|b| b.identifier()).collect();
        assert_eq!(order, vec!["linkedin", "copy-email"]);
    }

    #[test]
    fn test_unknown_button_type() {
        let button: ButtonSpec = serde_json::from_str(r#"{"type": "fax"}"#).unwrap();
        assert_eq!(button.kind(), ButtonKind::Unknown);
    }
}
