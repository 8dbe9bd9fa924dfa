#![cfg(test)]

use super::*;
use test_case::test_case;

#[test]
fn test_section_order() {
    let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();

    assert_eq!(
        ids,
        [
            "introduction",
            "setup",
            "mongodb",
            "duckdb",
            "datasets",
            "examples"
        ]
    );
}

#[test_case("introduction", 3)]
#[test_case("setup", 4)]
#[test_case("mongodb", 3)]
#[test_case("duckdb", 3)]
#[test_case("datasets", 3)]
#[test_case("examples", 3)]
fn test_section_page_count(id: &str, count: usize) {
    let section = SECTIONS.iter().find(|s| s.id == id).unwrap();

    assert_eq!(section.pages.len(), count);
}

#[test]
fn test_every_section_leads_with_its_index() {
    for section in SECTIONS {
        let (first, _) = &section.pages[0];
        assert_eq!(*first, "_index.md", "section {}", section.id);
    }
}

#[test]
fn test_titles_non_empty() {
    for section in SECTIONS {
        for (file_name, page) in section.pages {
            assert!(!page.title.is_empty(), "{}/{}", section.id, file_name);
        }
    }
}

#[test]
fn test_page_file_names_unique_within_section() {
    for section in SECTIONS {
        for (i, (f0, _)) in section.pages.iter().enumerate() {
            for (f1, _) in &section.pages[i + 1..] {
                assert_ne!(f0, f1, "section {}", section.id);
            }
        }
    }
}
