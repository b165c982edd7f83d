use geojson_region_filter::filter::Selector;
use geojson_region_filter::process_path;
use geojson_region_filter::report::Report;
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "geojson_region_filter",
    about = "Filter a GeoJSON FeatureCollection down to one region"
)]
struct Opt {
    /// Input GeoJSON file
    #[structopt(short = "i", long = "input", default_value = "aus-coast.geojson")]
    input: PathBuf,
    /// Output GeoJSON file
    #[structopt(short = "o", long = "output", default_value = "nsw_coast_filtered.geojson")]
    output: PathBuf,
    /// Feature property holding the region name
    #[structopt(short = "p", long = "property", default_value = "STE_NAME21")]
    property: String,
    /// Region identifier, matched case-insensitively as a substring
    #[structopt(long = "identifier", default_value = "New South Wales")]
    identifier: String,
}

struct Console {
    selector: Selector,
    empty: bool,
}

impl Report for Console {
    fn collection(&mut self, total: usize) {
        println!("Processing {} features from FeatureCollection...", total);
    }

    fn single_feature(&mut self) {
        println!("Processing a single Feature object...");
    }

    fn geometry_only(&mut self, geometry_type: &str) {
        println!(
            "Warning: input is a single {} geometry, property filtering is not applicable.",
            geometry_type
        );
    }

    fn progress(&mut self, processed: usize, total: usize) {
        println!("Processed {}/{} features...", processed, total);
    }

    fn finished(&mut self, kept: usize, total: usize) {
        if total == 0 {
            return;
        }
        self.empty = kept == 0;
        if kept == 0 {
            println!(
                "No features found where properties.{} contains '{}'.",
                self.selector.property, self.selector.identifier
            );
        } else {
            println!(
                "Found and kept {} features for '{}'.",
                kept, self.selector.identifier
            );
        }
    }
}

fn main() {
    let opt = Opt::from_args();
    let selector = Selector::new(&opt.property, &opt.identifier);

    println!(
        "Filtering '{}' for features where properties.{} contains '{}'.",
        opt.input.display(),
        selector.property,
        selector.identifier
    );

    let mut console = Console {
        selector: selector.clone(),
        empty: false,
    };

    match process_path(&opt.input, &opt.output, &selector, &mut console) {
        Ok(()) => {
            println!("Filtered GeoJSON saved to {}.", opt.output.display());
            if console.empty {
                println!("Note: the output is an empty FeatureCollection, no features matched.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
