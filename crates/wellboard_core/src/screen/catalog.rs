//! Built-in screen catalog.
//!
//! # Responsibility
//! - Ship the thirteen admin list screens as data: configuration plus the
//!   embedded sample dataset each screen falls back to.
//!
//! # Invariants
//! - Every fallback row loads as a valid record; rows shipped without ids
//!   get ordinal ids assigned at load time.
//! - Catalog slugs are unique.

use crate::model::record::{Record, RecordValidationError};
use crate::screen::config::ScreenConfig;
use crate::screen::registry::{Screen, ScreenRegistry, ScreenRegistryError};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog loading errors.
///
/// These indicate a defective embedded fixture, so they only surface when
/// the crate itself is broken.
#[derive(Debug)]
pub enum CatalogError {
    Parse(&'static str, serde_json::Error),
    Record(&'static str, RecordValidationError),
    Registry(ScreenRegistryError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(slug, err) => write!(f, "fixture for `{slug}` is not valid JSON: {err}"),
            Self::Record(slug, err) => write!(f, "fixture row for `{slug}` is invalid: {err}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(_, err) => Some(err),
            Self::Record(_, err) => Some(err),
            Self::Registry(err) => Some(err),
        }
    }
}

impl From<ScreenRegistryError> for CatalogError {
    fn from(value: ScreenRegistryError) -> Self {
        Self::Registry(value)
    }
}

struct CatalogEntry {
    slug: &'static str,
    title: &'static str,
    resource_path: &'static str,
    per_page: u32,
    search_fields: &'static [&'static str],
    facet_field: Option<&'static str>,
    failure_notice: Option<&'static str>,
    fixture: &'static str,
}

/// Per-screen constants for the built-in admin screens. Failure-notice
/// wording is screen-specific, and some screens fall back silently
/// (`None`).
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        slug: "users",
        title: "Users",
        resource_path: "/api/users",
        per_page: 10,
        search_fields: &["name", "email"],
        facet_field: None,
        failure_notice: Some("Failed to load users"),
        fixture: include_str!("fixtures/users.json"),
    },
    CatalogEntry {
        slug: "assignments",
        title: "Assignments",
        resource_path: "/api/assignments",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to load assignments, showing sample data"),
        fixture: include_str!("fixtures/assignments.json"),
    },
    CatalogEntry {
        slug: "community-groups",
        title: "Community Groups",
        resource_path: "/api/community-groups",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to load community groups, showing sample data"),
        fixture: include_str!("fixtures/community_groups.json"),
    },
    CatalogEntry {
        slug: "companies",
        title: "Companies",
        resource_path: "/api/companies",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to load companies, showing sample data"),
        fixture: include_str!("fixtures/companies.json"),
    },
    CatalogEntry {
        slug: "content-collections",
        title: "Content Collections",
        resource_path: "/api/content-collections",
        per_page: 10,
        search_fields: &["name"],
        facet_field: None,
        failure_notice: Some("Failed to load content collections, showing sample data"),
        fixture: include_str!("fixtures/content_collections.json"),
    },
    CatalogEntry {
        slug: "goal-categories",
        title: "Goal Categories",
        resource_path: "/api/goal-categories",
        per_page: 10,
        search_fields: &["name"],
        facet_field: None,
        failure_notice: Some("Failed to load goal categories, showing sample data"),
        fixture: include_str!("fixtures/goal_categories.json"),
    },
    CatalogEntry {
        slug: "goal-templates",
        title: "Goal Templates",
        resource_path: "/api/goal-templates",
        per_page: 10,
        search_fields: &["name", "title"],
        facet_field: None,
        failure_notice: Some("Failed to fetch goal templates, showing sample data"),
        fixture: include_str!("fixtures/goal_templates.json"),
    },
    CatalogEntry {
        slug: "guidance-rules",
        title: "Guidance Rules",
        resource_path: "/api/guidance-rules",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to load guidance rules, showing sample data"),
        fixture: include_str!("fixtures/guidance_rules.json"),
    },
    CatalogEntry {
        slug: "media-library",
        title: "Media Library",
        resource_path: "/api/media-library",
        // Grid layout, larger page.
        per_page: 12,
        search_fields: &["name"],
        facet_field: Some("type"),
        failure_notice: Some("Failed to load media, showing sample data"),
        fixture: include_str!("fixtures/media_library.json"),
    },
    CatalogEntry {
        slug: "personalization-rules",
        title: "Personalization Rules",
        resource_path: "/api/personalization-rules",
        per_page: 10,
        search_fields: &["name", "taxonomies"],
        facet_field: None,
        // This screen falls back without any notice.
        failure_notice: None,
        fixture: include_str!("fixtures/personalization_rules.json"),
    },
    CatalogEntry {
        slug: "plan-templates",
        title: "Plan Templates",
        resource_path: "/api/plan-templates",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to fetch plan templates, showing sample data"),
        fixture: include_str!("fixtures/plan_templates.json"),
    },
    CatalogEntry {
        slug: "surveys",
        title: "Surveys",
        resource_path: "/api/surveys",
        per_page: 10,
        search_fields: &["title", "description"],
        facet_field: None,
        failure_notice: None,
        fixture: include_str!("fixtures/surveys.json"),
    },
    CatalogEntry {
        slug: "taxonomies",
        title: "Taxonomy",
        resource_path: "/api/taxonomies",
        per_page: 10,
        search_fields: &[],
        facet_field: None,
        failure_notice: Some("Failed to fetch taxonomies, showing sample data"),
        fixture: include_str!("fixtures/taxonomies.json"),
    },
];

/// Parses one embedded fixture into validated records.
fn load_fixture(slug: &'static str, fixture: &str) -> Result<Vec<Record>, CatalogError> {
    let rows: Vec<Value> =
        serde_json::from_str(fixture).map_err(|err| CatalogError::Parse(slug, err))?;
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            Record::from_value_with_ordinal(row, index as i64 + 1)
                .map_err(|err| CatalogError::Record(slug, err))
        })
        .collect()
}

/// Builds the registry of all built-in screens.
pub fn builtin_catalog() -> Result<ScreenRegistry, CatalogError> {
    let mut registry = ScreenRegistry::new();
    for entry in CATALOG {
        let config = ScreenConfig {
            slug: entry.slug.to_string(),
            title: entry.title.to_string(),
            resource_path: entry.resource_path.to_string(),
            per_page: entry.per_page,
            search_fields: entry
                .search_fields
                .iter()
                .map(|field| (*field).to_string())
                .collect(),
            facet_field: entry.facet_field.map(str::to_string),
            failure_notice: entry.failure_notice.map(str::to_string),
        };
        let fallback = load_fixture(entry.slug, entry.fixture)?;
        registry.register(Screen { config, fallback })?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::builtin_catalog;

    #[test]
    fn all_screens_load_with_expected_fallback_sizes() {
        let catalog = builtin_catalog().expect("catalog should load");
        let expected = [
            ("assignments", 15),
            ("community-groups", 12),
            ("companies", 20),
            ("content-collections", 2),
            ("goal-categories", 12),
            ("goal-templates", 12),
            ("guidance-rules", 20),
            ("media-library", 15),
            ("personalization-rules", 8),
            ("plan-templates", 15),
            ("surveys", 12),
            ("taxonomies", 15),
            ("users", 3),
        ];
        assert_eq!(catalog.len(), expected.len());
        for (slug, count) in expected {
            let screen = catalog.get(slug).expect("screen should exist");
            assert_eq!(screen.fallback.len(), count, "slug={slug}");
        }
    }

    #[test]
    fn idless_fixtures_receive_ordinal_ids() {
        let catalog = builtin_catalog().expect("catalog should load");
        for slug in ["assignments", "companies", "personalization-rules"] {
            let screen = catalog.get(slug).expect("screen should exist");
            let ids: Vec<String> = screen
                .fallback
                .iter()
                .map(|record| record.id().to_string())
                .collect();
            let expected: Vec<String> =
                (1..=screen.fallback.len()).map(|n| n.to_string()).collect();
            assert_eq!(ids, expected, "slug={slug}");
        }
    }

    #[test]
    fn media_library_is_the_only_faceted_screen() {
        let catalog = builtin_catalog().expect("catalog should load");
        for slug in catalog.slugs() {
            let screen = catalog.get(&slug).expect("screen should exist");
            if slug == "media-library" {
                assert_eq!(screen.config.facet_field.as_deref(), Some("type"));
                assert_eq!(screen.config.per_page, 12);
            } else {
                assert!(screen.config.facet_field.is_none(), "slug={slug}");
                assert_eq!(screen.config.per_page, 10, "slug={slug}");
            }
        }
    }
}
