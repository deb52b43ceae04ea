use wellboard_core::{builtin_catalog, Screen, ScreenRegistryError};

#[test]
fn catalog_covers_all_thirteen_screens() {
    let catalog = builtin_catalog().unwrap();
    assert_eq!(
        catalog.slugs(),
        vec![
            "assignments",
            "community-groups",
            "companies",
            "content-collections",
            "goal-categories",
            "goal-templates",
            "guidance-rules",
            "media-library",
            "personalization-rules",
            "plan-templates",
            "surveys",
            "taxonomies",
            "users",
        ]
    );
}

#[test]
fn failure_notices_preserve_per_screen_wording() {
    let catalog = builtin_catalog().unwrap();
    let wording = [
        ("users", Some("Failed to load users")),
        (
            "taxonomies",
            Some("Failed to fetch taxonomies, showing sample data"),
        ),
        (
            "media-library",
            Some("Failed to load media, showing sample data"),
        ),
        ("personalization-rules", None),
        ("surveys", None),
    ];
    for (slug, expected) in wording {
        let screen = catalog.get(slug).unwrap();
        assert_eq!(
            screen.config.failure_notice.as_deref(),
            expected,
            "slug={slug}"
        );
    }
}

#[test]
fn search_fields_match_each_screen() {
    let catalog = builtin_catalog().unwrap();
    let fields = |slug: &str| -> Vec<String> {
        catalog.get(slug).unwrap().config.search_fields.clone()
    };
    assert_eq!(fields("users"), ["name", "email"]);
    assert_eq!(fields("goal-templates"), ["name", "title"]);
    assert_eq!(fields("surveys"), ["title", "description"]);
    assert_eq!(fields("personalization-rules"), ["name", "taxonomies"]);
    assert!(fields("assignments").is_empty());
    assert!(fields("companies").is_empty());
}

#[test]
fn resource_paths_follow_the_api_convention() {
    let catalog = builtin_catalog().unwrap();
    for slug in catalog.slugs() {
        let screen = catalog.get(&slug).unwrap();
        assert_eq!(screen.config.resource_path, format!("/api/{slug}"));
    }
}

#[test]
fn every_fallback_row_has_a_usable_id() {
    let catalog = builtin_catalog().unwrap();
    for slug in catalog.slugs() {
        let screen = catalog.get(&slug).unwrap();
        for record in &screen.fallback {
            assert!(!record.id().to_string().is_empty(), "slug={slug}");
        }
    }
}

#[test]
fn catalog_screens_cannot_be_registered_twice() {
    let mut catalog = builtin_catalog().unwrap();
    let users: Screen = catalog.get("users").unwrap().clone();
    let duplicate = catalog.register(users);
    assert!(matches!(
        duplicate,
        Err(ScreenRegistryError::DuplicateSlug(_))
    ));
}
