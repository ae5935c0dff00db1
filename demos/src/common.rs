use laurel::{AwardRecord, Laurel, LaurelError};

/// Return records for demos.
///
/// Reads the CSV named by `LAUREL_DEMOS_CSV` when set, otherwise the golden
/// fixture from `laurel-mock`.
///
/// # Errors
/// Returns the loader's error if the file cannot be read or parsed.
pub fn get_records(laurel: &Laurel) -> Result<Vec<AwardRecord>, LaurelError> {
    match std::env::var("LAUREL_DEMOS_CSV") {
        Ok(path) => {
            println!("--- (Reading {path}) ---");
            let file = std::fs::File::open(&path)?;
            laurel.load_csv(std::io::BufReader::new(file))
        }
        Err(_) => {
            println!("--- (Using golden fixture) ---");
            Ok(laurel_mock::golden())
        }
    }
}
