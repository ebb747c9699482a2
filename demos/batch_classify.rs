//! Example: Classify every image in a directory in parallel
//!
//! The disease library is shared read-only across worker threads; each image
//! is an independent classification.
//!
//! ```text
//! cargo run --example batch_classify -- photos/
//! ```

use rayon::prelude::*;

use leafscan::{classify_bytes, AnalysisError, ClassifyConfig, DiseaseLibrary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::args()
        .nth(1)
        .ok_or("usage: batch_classify <directory>")?;

    let paths: Vec<_> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    let library = DiseaseLibrary::builtin();
    let config = ClassifyConfig::default();

    let mut outcomes: Vec<(String, String)> = paths
        .par_iter()
        .map(|path| {
            let name = path.display().to_string();
            let summary = match std::fs::read(path) {
                Ok(bytes) => match classify_bytes(&bytes, &library, &config) {
                    Ok(result) => {
                        format!("{} ({:.2}%)", result.disease, result.confidence)
                    }
                    Err(AnalysisError::NotALeaf { green_ratio }) => {
                        format!("not a leaf (green ratio {:.3})", green_ratio)
                    }
                    Err(e) => format!("error: {}", e),
                },
                Err(e) => format!("read error: {}", e),
            };
            (name, summary)
        })
        .collect();

    outcomes.sort();
    for (name, summary) in outcomes {
        println!("{}: {}", name, summary);
    }

    Ok(())
}
