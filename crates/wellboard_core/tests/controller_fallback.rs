use serde_json::json;
use wellboard_core::{
    builtin_catalog, Completion, Controller, FetchError, PageResult, Phase, Record, ScreenConfig,
    Screen,
};

fn screen_with_records(count: usize, per_page: u32) -> Screen {
    let fallback = (1..=count)
        .map(|ordinal| {
            Record::from_value(json!({
                "id": ordinal as i64,
                "name": format!("record {ordinal}")
            }))
            .unwrap()
        })
        .collect();
    Screen {
        config: ScreenConfig {
            slug: "records".to_string(),
            title: "Records".to_string(),
            resource_path: "/api/records".to_string(),
            per_page,
            search_fields: vec!["name".to_string()],
            facet_field: None,
            failure_notice: Some("Failed to load records, showing sample data".to_string()),
        },
        fallback,
    }
}

#[test]
fn failing_fetch_always_yields_the_paginated_fallback() {
    let mut controller = Controller::new(screen_with_records(15, 10)).unwrap();

    let ticket = controller.refresh();
    let completion = controller.complete(&ticket, Err(FetchError::Network("down".to_string())));
    assert_eq!(completion, Completion::AppliedFallback);
    assert_eq!(controller.state().items.len(), 10);
    assert_eq!(controller.state().total_pages, 2);
    assert_eq!(controller.state().phase, Phase::FallbackActive);
    assert!(controller.state().last_error.is_some());

    let ticket = controller.page_changed(2).unwrap();
    controller.complete(&ticket, Err(FetchError::Status(502)));
    assert_eq!(controller.state().items.len(), 5);
    assert_eq!(controller.state().current_page, 2);
}

#[test]
fn fallback_is_empty_only_when_the_filter_matches_nothing() {
    let mut controller = Controller::new(screen_with_records(15, 10)).unwrap();

    let ticket = controller.search_changed("no such record");
    controller.complete(&ticket, Err(FetchError::Timeout));
    assert!(controller.state().items.is_empty());
    assert_eq!(controller.state().total_pages, 1);

    let ticket = controller.search_changed("record 1");
    controller.complete(&ticket, Err(FetchError::Timeout));
    // record 1, record 10..15 all contain "record 1".
    assert_eq!(controller.state().items.len(), 7);
}

#[test]
fn search_scenario_resets_page_and_matches_names() {
    let fallback = ["Alice", "Bob", "Aaron"]
        .iter()
        .enumerate()
        .map(|(index, name)| Record::from_value(json!({"id": index as i64 + 1, "name": name})).unwrap())
        .collect();
    let screen = Screen {
        config: ScreenConfig {
            slug: "people".to_string(),
            title: "People".to_string(),
            resource_path: "/api/people".to_string(),
            per_page: 10,
            search_fields: vec!["name".to_string()],
            facet_field: None,
            failure_notice: None,
        },
        fallback,
    };
    let mut controller = Controller::new(screen).unwrap();

    let ticket = controller.search_changed("a");
    assert_eq!(controller.state().current_page, 1);
    controller.complete(&ticket, Err(FetchError::Network("down".to_string())));

    let names: Vec<&str> = controller
        .state()
        .items
        .iter()
        .filter_map(|record| record.text_field("name"))
        .collect();
    assert_eq!(names, vec!["Alice", "Aaron"]);
}

#[test]
fn media_library_facet_narrows_fallback_pages() {
    let catalog = builtin_catalog().unwrap();
    let screen = catalog.get("media-library").unwrap().clone();
    let mut controller = Controller::new(screen).unwrap();

    let ticket = controller.facet_changed(Some("image"));
    controller.complete(&ticket, Err(FetchError::Status(500)));
    assert_eq!(controller.state().items.len(), 5);
    assert!(controller
        .state()
        .items
        .iter()
        .all(|record| record.text_field("type") == Some("image")));

    // Facet plus term compose.
    let ticket = controller.search_changed("wellness");
    controller.complete(&ticket, Err(FetchError::Status(500)));
    let names: Vec<&str> = controller
        .state()
        .items
        .iter()
        .filter_map(|record| record.text_field("name"))
        .collect();
    assert_eq!(names, vec!["wellness-banner.jpg"]);

    // Back to "all".
    let ticket = controller.facet_changed(None);
    controller.complete(&ticket, Err(FetchError::Status(500)));
    assert_eq!(controller.state().search_term, "wellness");
}

#[test]
fn live_success_replaces_fallback_and_clears_error() {
    let mut controller = Controller::new(screen_with_records(15, 10)).unwrap();

    let ticket = controller.refresh();
    controller.complete(&ticket, Err(FetchError::Timeout));
    assert_eq!(controller.state().phase, Phase::FallbackActive);

    let ticket = controller.refresh();
    let live = PageResult {
        items: vec![Record::from_value(json!({"id": "live-1", "name": "Live"})).unwrap()],
        total_count: 41,
    };
    controller.complete(&ticket, Ok(live));
    assert_eq!(controller.state().phase, Phase::Ready);
    assert_eq!(controller.state().total_pages, 5);
    assert!(controller.state().last_error.is_none());
}

#[test]
fn stale_response_never_overwrites_newer_state() {
    let mut controller = Controller::new(screen_with_records(25, 10)).unwrap();

    // Settle once so total_pages allows navigation.
    let ticket = controller.refresh();
    controller.complete(&ticket, Err(FetchError::Timeout));
    assert_eq!(controller.state().total_pages, 3);

    let slow = controller.refresh();
    let fast = controller.page_changed(2).unwrap();

    let page_two = PageResult {
        items: vec![Record::from_value(json!({"id": 2, "name": "page two row"})).unwrap()],
        total_count: 25,
    };
    assert_eq!(controller.complete(&fast, Ok(page_two)), Completion::Applied);

    let page_one = PageResult {
        items: vec![Record::from_value(json!({"id": 1, "name": "page one row"})).unwrap()],
        total_count: 25,
    };
    assert_eq!(controller.complete(&slow, Ok(page_one)), Completion::Stale);
    assert_eq!(controller.state().current_page, 2);
    assert_eq!(
        controller.state().items[0].text_field("name"),
        Some("page two row")
    );
}
