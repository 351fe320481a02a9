use cell_positioning::{
    MemorySignalRecorder, MemoryStationDirectory, PositionService, Signal, Station,
};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!(
            "Usage: {} <stations_json> <signals_json>",
            args.first().map_or("cell-positioning", |s| s.as_str())
        );
        eprintln!("  stations_json: [{{\"id\": \"0-32838-60122\", \"lat\": 30.732796, \"lng\": 103.962357}}, ...]");
        eprintln!("  signals_json:  [{{\"mnc\": \"0\", \"lac\": \"32838\", \"cid\": \"60122\", \"str\": -78}}, ...]");
        return Err("invalid arguments".into());
    }

    let stations: Vec<Station> = serde_json::from_str(&std::fs::read_to_string(&args[1])?)?;
    let signals: Vec<Signal> = serde_json::from_str(&std::fs::read_to_string(&args[2])?)?;

    let directory = Arc::new(MemoryStationDirectory::with_stations(stations));
    let recorder = Arc::new(MemorySignalRecorder::new());
    let service = PositionService::new(directory, recorder.clone());

    let outcome = service.compute_position(&signals);

    // Dropping the service flushes the unknown-signal queue so the summary
    // below is complete.
    drop(service);

    match outcome {
        Ok(estimate) => println!("estimated position: {}", estimate),
        Err(error) => {
            eprintln!("position computation failed: {}", error);
            return Err(error.into());
        }
    }

    let unknown = recorder.recorded();
    if !unknown.is_empty() {
        println!("signals without a known station:");
        for signal in &unknown {
            println!("  {}", signal);
        }
    }

    Ok(())
}
