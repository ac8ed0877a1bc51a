use anyhow::Result;
use data_loader::AwardIndex;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let data_file = Path::new("data/movielist.csv");

    println!("Loading award list...\n");

    let start = Instant::now();
    let index = AwardIndex::load_from_file(data_file)?;
    let elapsed = start.elapsed();

    let (records, winners) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", records);
    println!("Winners: {}", winners);
    if let Some((first, last)) = index.year_span() {
        println!("Years: {}-{}", first, last);
    }
    println!("\nPerformance: {:.0} records/second",
             records as f64 / elapsed.as_secs_f64());
    Ok(())
}
