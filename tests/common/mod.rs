use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_profiles(path: &Path) -> Result<(), Error> {
    let profiles = serde_json::json!([
        {
            "id_number": "1234 1234 1234 1234",
            "pin": "4444",
            "first_name": "peter",
            "last_name": "svensson",
            "bank_name": "Ikano Bank",
            "balance": 1400
        },
        {
            "id_number": "1111 2222 3333 4444",
            "pin": "1234",
            "first_name": "pelle",
            "last_name": "karlsson",
            "bank_name": "Ikano Bank",
            "balance": 45000
        }
    ]);

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &profiles)?;
    Ok(())
}

pub fn write_session(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["op", "card", "pin", "amount"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
