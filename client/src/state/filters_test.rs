use super::*;

fn record(code: &str, customer: &str, attendee: &str, reg: &str) -> RegisteredRecord {
    RegisteredRecord {
        registration_id: reg.to_owned(),
        customer_code: code.to_owned(),
        customer_name: customer.to_owned(),
        attendee_name: attendee.to_owned(),
        here: "false".to_owned(),
    }
}

#[test]
fn empty_filters_match_everything() {
    let filters = Filters::default();
    assert!(row_matches_filters(&record("", "", "", "R1"), &filters));
    assert!(row_matches_filters(&record("C1", "Acme", "Jo", "R2"), &filters));
}

#[test]
fn substring_match_is_case_insensitive() {
    let filters = Filters { customer_name: "smith".to_owned(), ..Filters::default() };
    assert!(row_matches_filters(&record("", "Smith J", "", "R1"), &filters));
    assert!(!row_matches_filters(&record("", "Jones", "", "R2"), &filters));
}

#[test]
fn all_fields_are_anded() {
    let filters = Filters {
        customer_name: "acme".to_owned(),
        attendee_name: "jo".to_owned(),
        ..Filters::default()
    };
    assert!(row_matches_filters(&record("", "Acme Co", "Jo Smith", "R1"), &filters));
    assert!(!row_matches_filters(&record("", "Acme Co", "Sam", "R2"), &filters));
    assert!(!row_matches_filters(&record("", "Bolt", "Jo Smith", "R3"), &filters));
}

#[test]
fn filter_input_is_trimmed() {
    let filters = Filters { registration_id: "  r10 ".to_owned(), ..Filters::default() };
    assert!(row_matches_filters(&record("", "", "", "R100"), &filters));
}

#[test]
fn whitespace_only_filter_behaves_as_empty() {
    let filters = Filters { customer_code: "   ".to_owned(), ..Filters::default() };
    assert!(row_matches_filters(&record("", "", "", "R1"), &filters));
    assert!(filters.is_empty());
}

#[test]
fn clear_resets_all_fields() {
    let mut filters = Filters {
        customer_code: "a".to_owned(),
        customer_name: "b".to_owned(),
        attendee_name: "c".to_owned(),
        registration_id: "d".to_owned(),
    };
    filters.clear();
    assert!(filters.is_empty());
    assert_eq!(filters, Filters::default());
}

#[test]
fn registration_id_filter_matches_partial_ids() {
    let filters = Filters { registration_id: "10".to_owned(), ..Filters::default() };
    assert!(row_matches_filters(&record("", "", "", "R100"), &filters));
    assert!(!row_matches_filters(&record("", "", "", "R2"), &filters));
}
