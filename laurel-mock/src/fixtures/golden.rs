use laurel_core::{AwardRecord, IntervalReport, ProducerInterval};

/// Semicolon-delimited form of [`records`], in the same row order.
pub const GOLDEN_CSV: &str = "year;title;studios;producers;winner
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
1984;Bolero;Cannon Films;Bo Derek;yes
1985;Rambo: First Blood Part II;Columbia Pictures;Buzz Feitshans;yes
1986;Under the Cherry Moon;Warner Bros.;Bob Cavallo, Joe Ruffalo and Steve Fargnoli;yes
1986;Howard the Duck;Universal Studios;Gloria Katz;yes
1990;The Adventures of Ford Fairlane;20th Century Fox;Steven Perry and Joel Silver;yes
1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes
1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes
1993;Indecent Proposal;Paramount Pictures;Sherry Lansing;yes
1994;Color of Night;Hollywood Pictures;Buzz Feitshans and Andrew G. Vajna;yes
1995;Showgirls;MGM, United Artists;Alan Marshall and Charles Evans;yes
1999;Wild Wild West;Warner Bros.;Jon Peters and Barry Sonnenfeld;yes
2001;Freddy Got Fingered;20th Century Fox;Larry Brezner, Howard Lapides and Lauren Lloyd;yes
2002;Swept Away;Screen Gems;Matthew Vaughn;yes
2003;Gigli;Revolution Studios;Martin Brest and Casey Silver;yes
2009;All About Steve;20th Century Fox;Sandra Bullock and Mary McLaglen;
2009;Transformers: Revenge of the Fallen;Paramount Pictures;Lorenzo di Bonaventura, Ian Bryce, Tom DeSanto and Don Murphy;yes
2015;Fantastic Four;20th Century Fox;Simon Kinberg, Matthew Vaughn, Hutch Parker, Robert Kulzer and Gregory Goodman;yes
2015;Fifty Shades of Grey;Focus Features, Universal Pictures;Michael De Luca, Dana Brunetti and E. L. James;yes
2017;The Emoji Movie;Columbia Pictures;Michelle Raimo Kouyate;yes
2019;Cats;Universal Pictures;Debra Hayward, Tim Bevan, Eric Fellner and Tom Hooper;yes
";

pub fn records() -> Vec<AwardRecord> {
    vec![
        AwardRecord::win(1980, "Allan Carr")
            .with_title("Can't Stop the Music")
            .with_studios("Associated Film Distribution"),
        AwardRecord::new(1980, "Jerry Weintraub", false)
            .with_title("Cruising")
            .with_studios("Lorimar Productions, United Artists"),
        AwardRecord::win(1984, "Bo Derek")
            .with_title("Bolero")
            .with_studios("Cannon Films"),
        AwardRecord::win(1985, "Buzz Feitshans")
            .with_title("Rambo: First Blood Part II")
            .with_studios("Columbia Pictures"),
        AwardRecord::win(1986, "Bob Cavallo, Joe Ruffalo and Steve Fargnoli")
            .with_title("Under the Cherry Moon")
            .with_studios("Warner Bros."),
        AwardRecord::win(1986, "Gloria Katz")
            .with_title("Howard the Duck")
            .with_studios("Universal Studios"),
        AwardRecord::win(1990, "Steven Perry and Joel Silver")
            .with_title("The Adventures of Ford Fairlane")
            .with_studios("20th Century Fox"),
        AwardRecord::win(1990, "Bo Derek")
            .with_title("Ghosts Can't Do It")
            .with_studios("Triumph Releasing"),
        AwardRecord::win(1991, "Joel Silver")
            .with_title("Hudson Hawk")
            .with_studios("TriStar Pictures"),
        AwardRecord::win(1993, "Sherry Lansing")
            .with_title("Indecent Proposal")
            .with_studios("Paramount Pictures"),
        AwardRecord::win(1994, "Buzz Feitshans and Andrew G. Vajna")
            .with_title("Color of Night")
            .with_studios("Hollywood Pictures"),
        AwardRecord::win(1995, "Alan Marshall and Charles Evans")
            .with_title("Showgirls")
            .with_studios("MGM, United Artists"),
        AwardRecord::win(1999, "Jon Peters and Barry Sonnenfeld")
            .with_title("Wild Wild West")
            .with_studios("Warner Bros."),
        AwardRecord::win(2001, "Larry Brezner, Howard Lapides and Lauren Lloyd")
            .with_title("Freddy Got Fingered")
            .with_studios("20th Century Fox"),
        AwardRecord::win(2002, "Matthew Vaughn")
            .with_title("Swept Away")
            .with_studios("Screen Gems"),
        AwardRecord::win(2003, "Martin Brest and Casey Silver")
            .with_title("Gigli")
            .with_studios("Revolution Studios"),
        AwardRecord::new(2009, "Sandra Bullock and Mary McLaglen", false)
            .with_title("All About Steve")
            .with_studios("20th Century Fox"),
        AwardRecord::win(
            2009,
            "Lorenzo di Bonaventura, Ian Bryce, Tom DeSanto and Don Murphy",
        )
            .with_title("Transformers: Revenge of the Fallen")
            .with_studios("Paramount Pictures"),
        AwardRecord::win(
            2015,
            "Simon Kinberg, Matthew Vaughn, Hutch Parker, Robert Kulzer and Gregory Goodman",
        )
            .with_title("Fantastic Four")
            .with_studios("20th Century Fox"),
        AwardRecord::win(2015, "Michael De Luca, Dana Brunetti and E. L. James")
            .with_title("Fifty Shades of Grey")
            .with_studios("Focus Features, Universal Pictures"),
        AwardRecord::win(2017, "Michelle Raimo Kouyate")
            .with_title("The Emoji Movie")
            .with_studios("Columbia Pictures"),
        AwardRecord::win(2019, "Debra Hayward, Tim Bevan, Eric Fellner and Tom Hooper")
            .with_title("Cats")
            .with_studios("Universal Pictures"),
    ]
}

pub fn expected() -> IntervalReport {
    IntervalReport {
        min: vec![ProducerInterval::new("Joel Silver", 1990, 1991)],
        max: vec![ProducerInterval::new("Matthew Vaughn", 2002, 2015)],
    }
}
