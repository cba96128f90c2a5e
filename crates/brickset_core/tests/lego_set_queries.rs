use brickset_core::{LegoSet, LegoSetRepository, LegoSetService, Repository};

fn scenario_service() -> LegoSetService<LegoSetRepository> {
    let json = serde_json::json!([
        { "name": "Duplo Train", "theme": "Duplo" },
        { "name": "X", "theme": "City" },
        { "name": null, "theme": "Duplo" }
    ])
    .to_string();
    LegoSetService::new(LegoSetRepository::from_json_str("scenario", &json).unwrap())
}

fn bundled_service() -> LegoSetService<LegoSetRepository> {
    LegoSetService::new(LegoSetRepository::open_bundled().unwrap())
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn scenario_counts_and_first_names() {
    let service = scenario_service();

    assert_eq!(service.count_with_theme("Duplo"), 2);
    assert_eq!(service.count_name_contains("b"), 0);
    assert_eq!(service.first_n_names(2), [Some("Duplo Train"), Some("X")]);
}

#[test]
fn theme_match_is_case_sensitive_substring() {
    let service = scenario_service();

    assert_eq!(service.count_with_theme("upl"), 2);
    assert_eq!(service.count_with_theme("duplo"), 0);
    assert_eq!(service.count_with_theme(""), 3);
}

#[test]
fn name_match_skips_missing_names() {
    let service = scenario_service();

    assert_eq!(service.count_name_contains(""), 2);
    assert_eq!(service.count_name_contains("Train"), 1);
}

#[test]
fn first_n_is_bounded_and_empty_for_non_positive() {
    let service = scenario_service();

    assert!(service.first_n_names(0).is_empty());
    assert!(service.first_n_names(-4).is_empty());
    assert_eq!(
        service.first_n_names(10),
        [Some("Duplo Train"), Some("X"), None]
    );
}

#[test]
fn print_first_n_renders_missing_name_as_null() {
    let service = scenario_service();

    let output = render(|out| service.print_first_n_names(3, out));
    assert_eq!(output, "Duplo Train\nX\nnull\n");
}

#[test]
fn names_longer_than_is_strict_and_ordered() {
    let service = scenario_service();

    assert_eq!(service.names_longer_than(1), ["Duplo Train"]);
    assert_eq!(service.names_longer_than(0), ["Duplo Train", "X"]);
    assert!(service.names_longer_than(11).is_empty());
    assert_eq!(service.names_longer_than(-1).len(), 2);

    let output = render(|out| service.print_names_longer_than(0, out));
    assert_eq!(output, "Duplo Train\nX\n");
}

#[test]
fn dimensions_count_ignores_nested_content() {
    let json = serde_json::json!([
        { "name": "Empty box", "dimensions": {} },
        { "name": "Partial", "dimensions": { "height": 3.0 } },
        { "name": "Null", "dimensions": null },
        { "name": "Absent" }
    ])
    .to_string();
    let service = LegoSetService::new(LegoSetRepository::from_json_str("dims", &json).unwrap());

    assert_eq!(service.count_with_dimensions(), 2);
}

#[test]
fn bundled_queries_match_direct_scans() {
    let service = bundled_service();
    let sets: &[LegoSet] = service.repo().get_all();

    let duplo = sets
        .iter()
        .filter(|set| set.theme.as_deref().is_some_and(|t| t.contains("Duplo")))
        .count();
    assert_eq!(service.count_with_theme("Duplo"), duplo);
    assert!(duplo > 0);

    let with_dimensions = sets.iter().filter(|set| set.dimensions.is_some()).count();
    assert_eq!(service.count_with_dimensions(), with_dimensions);

    let long_names: Vec<&str> = sets
        .iter()
        .filter_map(|set| set.name.as_deref())
        .filter(|name| name.chars().count() > 50)
        .collect();
    assert_eq!(service.names_longer_than(50), long_names);

    assert_eq!(service.first_n_names(3).len(), 3.min(service.total_count()));
}

#[test]
fn total_pieces_sums_known_counts() {
    let json = serde_json::json!([
        { "pieces": 59 },
        { "pieces": null },
        { "pieces": 1226 }
    ])
    .to_string();
    let service = LegoSetService::new(LegoSetRepository::from_json_str("pieces", &json).unwrap());

    assert_eq!(service.total_pieces(), 1285);
    assert_eq!(service.total_count(), 3);
}
