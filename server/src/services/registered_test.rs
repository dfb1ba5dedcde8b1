use super::*;

// =============================================================================
// split_csv_line
// =============================================================================

#[test]
fn split_plain_fields() {
    assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn split_keeps_empty_fields() {
    assert_eq!(split_csv_line("a,,c,"), vec!["a", "", "c", ""]);
}

#[test]
fn split_quoted_field_with_comma() {
    assert_eq!(split_csv_line(r#""Smith, Jo",C42"#), vec!["Smith, Jo", "C42"]);
}

#[test]
fn split_doubled_quote_is_literal() {
    assert_eq!(split_csv_line(r#""Acme ""West"" Inc",x"#), vec![r#"Acme "West" Inc"#, "x"]);
}

#[test]
fn split_single_field_line() {
    assert_eq!(split_csv_line("only"), vec!["only"]);
}

#[test]
fn split_empty_line_is_one_empty_field() {
    assert_eq!(split_csv_line(""), vec![""]);
}

// =============================================================================
// parse_roster_csv
// =============================================================================

#[test]
fn parse_maps_columns_by_header_name() {
    let csv = "registration_id,customer_code,customer_name,attendee_name\nR1,C1,Acme,Jo\nR2,C2,Bolt,Sam\n";
    let (rows, skipped) = parse_roster_csv(csv).expect("parse");
    assert_eq!(skipped, 0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].registration_id, "R1");
    assert_eq!(rows[0].customer_name, "Acme");
    assert_eq!(rows[1].attendee_name, "Sam");
}

#[test]
fn parse_accepts_reordered_and_extra_columns() {
    let csv = "attendee_name,email,registration_id\nJo,jo@x.com,R9\n";
    let (rows, _) = parse_roster_csv(csv).expect("parse");
    assert_eq!(rows[0].registration_id, "R9");
    assert_eq!(rows[0].attendee_name, "Jo");
    assert_eq!(rows[0].customer_code, "");
}

#[test]
fn parse_header_match_is_case_insensitive() {
    let csv = "Registration_ID,Customer_Name\nR1,Acme\n";
    let (rows, _) = parse_roster_csv(csv).expect("parse");
    assert_eq!(rows[0].registration_id, "R1");
    assert_eq!(rows[0].customer_name, "Acme");
}

#[test]
fn parse_skips_rows_without_registration_id() {
    let csv = "registration_id,customer_name\nR1,Acme\n,Orphan\nR2,Bolt\n";
    let (rows, skipped) = parse_roster_csv(csv).expect("parse");
    assert_eq!(rows.len(), 2);
    assert_eq!(skipped, 1);
}

#[test]
fn parse_ignores_blank_lines() {
    let csv = "\nregistration_id\n\nR1\n\n";
    let (rows, skipped) = parse_roster_csv(csv).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(skipped, 0);
}

#[test]
fn parse_trims_field_whitespace() {
    let csv = "registration_id, customer_name\n R1 , Acme Co \n";
    let (rows, _) = parse_roster_csv(csv).expect("parse");
    assert_eq!(rows[0].registration_id, "R1");
    assert_eq!(rows[0].customer_name, "Acme Co");
}

#[test]
fn parse_rejects_header_without_id_column() {
    let err = parse_roster_csv("customer_name,attendee_name\nAcme,Jo\n").expect_err("no id column");
    assert!(matches!(err, RegisteredError::MissingIdColumn));
}

#[test]
fn parse_rejects_empty_input() {
    let err = parse_roster_csv("").expect_err("empty input");
    assert!(matches!(err, RegisteredError::MissingIdColumn));
}

// =============================================================================
// Live-database roster flow
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::*;
    use crate::state::test_helpers::integration_pool;

    #[tokio::test]
    async fn imported_roster_lists_with_computed_here_flag() {
        let pool = integration_pool().await;

        let csv = "registration_id,customer_code,customer_name,attendee_name\nR100,C1,Acme,Jo\nR200,C2,Bolt,Sam\n";
        let outcome = import_roster(&pool, csv).await.expect("import");
        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.skipped, 0);

        mark_here(&pool, "R100").await.expect("mark");
        // Second mark must be a no-op, not an error.
        mark_here(&pool, "R100").await.expect("repeat mark");

        let records = list_records(&pool).await.expect("list");
        let r100 = records.iter().find(|r| r.registration_id == "R100").expect("R100");
        let r200 = records.iter().find(|r| r.registration_id == "R200").expect("R200");
        assert_eq!(r100.here, "true");
        assert_eq!(r200.here, "false");
    }

    #[tokio::test]
    async fn reimport_updates_roster_fields_in_place() {
        let pool = integration_pool().await;

        import_roster(&pool, "registration_id,customer_name\nR300,Old Name\n")
            .await
            .expect("import");
        import_roster(&pool, "registration_id,customer_name\nR300,New Name\n")
            .await
            .expect("reimport");

        let records = list_records(&pool).await.expect("list");
        let row = records.iter().find(|r| r.registration_id == "R300").expect("R300");
        assert_eq!(row.customer_name, "New Name");
    }
}
