use laurel::{AwardRecord, Laurel, split_producers};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = "Simon Kinberg, Matthew Vaughn, Hutch Parker, Robert Kulzer and Gregory Goodman";
    println!("{raw:?} credits {:?}", split_producers(raw));
    println!("{:?} stays whole", split_producers("Sandra Bullock"));

    let records = vec![
        AwardRecord::win(2002, "Matthew Vaughn").with_title("Swept Away"),
        AwardRecord::win(2015, raw).with_title("Fantastic Four"),
    ];
    let laurel = Laurel::builder().build()?;
    for wins in laurel.producer_wins(&records) {
        println!("{:<16} {:?}", wins.producer, wins.years);
    }
    println!("{}", serde_json::to_string_pretty(&laurel.intervals(&records))?);
    Ok(())
}
