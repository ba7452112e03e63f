/*

    Convert one viewpoint between the interchange format
    and the host's coordinate system.

    Reads a JSON request, prints the result as JSON on stdout.

    @date: Oct, 2025
    @author: Bartu

*/

use std::{self, env};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use bcf_viewpoint::json_parser::parse_request;
use bcf_viewpoint::viewpoint::{export_viewpoint, import_viewpoint};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console, stdout is kept for the result
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: String = if args.len() == 1 {
        warn!("No arguments were provided, setting default request path...");
        String::from("./inputs/sample_viewpoint.json")
    } else if args.len() == 2 {
        args[1].clone()
    } else {
        error!("Usage: {} <request>.json", args[0]);
        std::process::exit(1);
    };

    info!("Loading request from {}...", json_path);
    let request = parse_request(&json_path).map_err(|e| {
        error!("Failed to load request: {}", e);
        e
    })?;
    debug!("Request loaded.\n {:#?}", request);

    let output = match &request.export {
        Some(export) => {
            info!("Exporting host view to interchange viewpoint");
            let record = export_viewpoint(
                export.camera.as_ref(),
                export.section_box.as_ref(),
                &request.basepoint,
                &request.settings,
            );
            serde_json::to_string_pretty(&record)?
        }
        None => {
            info!("Importing interchange viewpoint into host view");
            let view = import_viewpoint(&request.viewpoint, &request.basepoint, &request.settings);
            if view.cutaway.is_none() && !request.viewpoint.clipping_planes.is_empty() {
                warn!("Clipping planes did not form a cutaway box, none applied");
            }
            serde_json::to_string_pretty(&view)?
        }
    };

    println!("{}", output);
    info!("Finished execution.");
    Ok(())
}
