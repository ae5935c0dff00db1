use laurel_core::AwardRecord;

pub fn tied() -> Vec<AwardRecord> {
    vec![
        AwardRecord::win(2001, "Larry Brezner"),
        AwardRecord::win(2010, "Gloria Katz"),
        AwardRecord::win(2004, "Larry Brezner"),
        AwardRecord::win(2013, "Gloria Katz"),
    ]
}

pub fn same_year_double() -> Vec<AwardRecord> {
    vec![
        AwardRecord::win(1986, "Gloria Katz").with_title("Howard the Duck"),
        AwardRecord::win(1986, "Gloria Katz").with_title("Howard the Duck (re-release)"),
        AwardRecord::win(1988, "Ted Field and Robert W. Cort").with_title("Cocktail"),
        AwardRecord::win(1999, "Ted Field").with_title("Wild Wild West"),
    ]
}

pub fn no_winners() -> Vec<AwardRecord> {
    vec![
        AwardRecord::new(1980, "Jerry Weintraub", false).with_title("Cruising"),
        AwardRecord::new(1981, "Jerry Weintraub", false).with_title("All Night Long"),
        AwardRecord::new(2009, "Sandra Bullock and Mary McLaglen", false)
            .with_title("All About Steve"),
    ]
}
