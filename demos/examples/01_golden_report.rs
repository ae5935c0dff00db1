use laurel::Laurel;
use laurel_demos::common::get_records;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let laurel = Laurel::builder().build()?;
    let records = get_records(&laurel)?;

    let report = laurel.intervals(&records);
    println!("{}", serde_json::to_string_pretty(&report)?);

    for p in &report.min {
        println!(
            "shortest: {} won in {} and again in {} ({} year(s))",
            p.producer, p.previous_win, p.following_win, p.interval
        );
    }
    for p in &report.max {
        println!(
            "longest:  {} won in {} and again in {} ({} year(s))",
            p.producer, p.previous_win, p.following_win, p.interval
        );
    }
    Ok(())
}
