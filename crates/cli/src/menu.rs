//! Top-level menu loop.

use std::path::Path;

use chrono::Local;
use ludoteca_core::{save_catalog, Library};
use tracing::debug;

use crate::input::read_line;
use crate::{admin, member};

/// Run the main menu until the user quits, offering a save on the way out.
pub fn run(library: &mut Library, data_file: &Path) {
    loop {
        println!();
        println!("=== Ludoteca ===");
        println!("1. Admin");
        println!("2. Member login");
        println!("3. Save catalog");
        println!("0. Quit");

        match read_line("> ").as_str() {
            "1" => admin::run(library),
            "2" => member::run(library, Local::now().date_naive()),
            "3" => save(library, data_file),
            "0" | "" => {
                if read_line("Save catalog before quitting? [y/N] ").eq_ignore_ascii_case("y") {
                    save(library, data_file);
                }
                return;
            }
            other => {
                debug!(choice = other, "unknown menu choice");
                println!("Unknown choice.");
            }
        }
    }
}

fn save(library: &Library, data_file: &Path) {
    match save_catalog(data_file, library.catalog().games()) {
        Ok(()) => println!("Catalog saved to {}.", data_file.display()),
        Err(err) => println!("Could not save catalog: {}", err),
    }
}
