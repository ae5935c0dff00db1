use laurel::Laurel;
use laurel_demos::common::get_records;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=laurel=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let laurel = Laurel::builder().build()?;
    let records = get_records(&laurel)?;
    let _ = laurel.intervals(&records);

    let _ = laurel.intervals_from_csv(laurel_mock::GOLDEN_CSV.as_bytes())?;

    Ok(())
}
