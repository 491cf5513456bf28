use anyhow::{anyhow, Result};
use human_panic::setup_panic;
use log::{error, info, warn};

use namely::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    init_logger(get_verbosity(&matches), &get_log_file(&matches)?)?;

    let operations = get_operations(&matches)?;
    if operations.is_empty() {
        warn!("No operations given, every name stays as it is");
    }

    let files = get_files(&matches)?;
    let mut failures = 0;

    for result in preview_files(&files, &operations) {
        match result {
            Ok(preview) => info!("{}", preview.describe()),
            Err(e) => {
                error!("{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{failures} of {} file(s) could not be previewed", files.len()));
    }

    Ok(())
}
