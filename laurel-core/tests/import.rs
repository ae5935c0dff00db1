use laurel_core::{AwardRecord, ImportConfig, LaurelError, parse_records, read_records};

const HEADER: &str = "year;title;studios;producers;winner";

fn cfg() -> ImportConfig {
    ImportConfig::default()
}

#[test]
fn reads_rows_and_maps_winner_flag() {
    let input = format!(
        "{HEADER}\n\
         1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
         1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;\n"
    );
    let records = parse_records(&input, &cfg()).unwrap();
    assert_eq!(
        records,
        vec![
            AwardRecord::win(1980, "Allan Carr")
                .with_title("Can't Stop the Music")
                .with_studios("Associated Film Distribution"),
            AwardRecord::new(1980, "Jerry Weintraub", false)
                .with_title("Cruising")
                .with_studios("Lorimar Productions, United Artists"),
        ]
    );
}

#[test]
fn winner_token_ignores_ascii_case_and_padding() {
    let input = format!(
        "{HEADER}\n1990;T;S;Joel Silver; YES \n1991;T;S;Joel Silver;Yes\n\
         1992;T;S;Joel Silver;no\n"
    );
    let winners: Vec<bool> = parse_records(&input, &cfg())
        .unwrap()
        .iter()
        .map(|r| r.winner)
        .collect();
    assert_eq!(winners, vec![true, true, false]);
}

#[test]
fn column_order_is_free_and_extra_columns_are_ignored() {
    let input = "winner;producers;year;rating\nyes;Bo Derek;1984;2.1\n";
    let records = parse_records(input, &cfg()).unwrap();
    assert_eq!(records, vec![AwardRecord::win(1984, "Bo Derek")]);
}

#[test]
fn blank_lines_are_skipped() {
    let input = format!("{HEADER}\n\n1984;Bolero;Cannon Films;Bo Derek;yes\n\n");
    assert_eq!(parse_records(&input, &cfg()).unwrap().len(), 1);
}

#[test]
fn custom_delimiter_and_token() {
    let cfg = ImportConfig {
        delimiter: b',',
        winner_token: "true".to_string(),
    };
    let input = "year,title,studios,producers,winner\n2002,Swept Away,Screen Gems,\"Matthew Vaughn\",true\n";
    let records = read_records(input.as_bytes(), &cfg).unwrap();
    assert_eq!(records[0].producers, "Matthew Vaughn");
    assert!(records[0].winner);
}

#[test]
fn header_only_yields_no_records() {
    assert!(parse_records(HEADER, &cfg()).unwrap().is_empty());
    assert!(parse_records("", &cfg()).unwrap().is_empty());
}

#[test]
fn non_numeric_year_reports_its_line() {
    let input = format!("{HEADER}\n1984;Bolero;Cannon Films;Bo Derek;yes\nnineteen;X;Y;Z;yes\n");
    let err = parse_records(&input, &cfg()).unwrap_err();
    assert!(matches!(err, LaurelError::InvalidRecord { line: 3, .. }), "{err:?}");
}

#[test]
fn producers_without_names_are_rejected() {
    let input = format!("{HEADER}\n1984;Bolero;Cannon Films; ;yes\n");
    let err = parse_records(&input, &cfg()).unwrap_err();
    assert_eq!(err.line(), Some(2));

    let input = format!("{HEADER}\n1984;Bolero;Cannon Films;and;yes\n");
    assert!(matches!(
        parse_records(&input, &cfg()),
        Err(LaurelError::InvalidRecord { .. })
    ));
}

#[test]
fn ragged_rows_are_structural_errors() {
    let input = format!("{HEADER}\n1984;Bolero;Cannon Films\n");
    assert!(matches!(parse_records(&input, &cfg()), Err(LaurelError::Csv(_))));
}

#[test]
fn missing_producers_column_is_a_structural_error() {
    let input = "year;title;winner\n1984;Bolero;yes\n";
    assert!(matches!(parse_records(input, &cfg()), Err(LaurelError::Csv(_))));
}

#[test]
fn years_at_the_i32_limits_are_rejected() {
    let input = "year;producers;winner\n-2147483648;A;yes\n2147483647;A;yes\n";
    let err = parse_records(input, &cfg()).unwrap_err();
    assert!(matches!(err, LaurelError::InvalidRecord { line: 2, .. }), "{err:?}");
}

#[test]
fn years_outside_the_calendar_range_are_rejected() {
    for year in [0, 10_000] {
        let input = format!("{HEADER}\n{year};T;S;A;yes\n");
        let err = parse_records(&input, &cfg()).unwrap_err();
        assert_eq!(err.line(), Some(2), "year {year}");
    }
    let input = format!("{HEADER}\n1;T;S;A;yes\n9999;T;S;A;yes\n");
    assert_eq!(parse_records(&input, &cfg()).unwrap().len(), 2);
}
