use laurel::{Laurel, ZeroIntervalPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = laurel_mock::same_year_double();

    for policy in [ZeroIntervalPolicy::Include, ZeroIntervalPolicy::Exclude] {
        let laurel = Laurel::builder().zero_intervals(policy).build()?;
        let report = laurel.intervals(&records);
        println!(
            "{policy:?}: min={:?} max={:?}",
            report.min_interval(),
            report.max_interval()
        );
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
