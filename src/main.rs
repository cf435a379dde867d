//! # Ayat
//!
//! Curation of word-by-word annotated Qur'an verse datasets.
//!
//! ```sh
//! ayat 0.1.0
//! verse dataset curation tool.
//!
//! USAGE:
//!     ayat <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     append     Append verses to a collection file
//!     convert    Print a chapter in the app format
//!     help       Prints this message or the help of the given subcommand(s)
//!     summary    Show the verse span of a collection file
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info ayat append ...`).

use structopt::StructOpt;

use ayat::error::Error;
use ayat::io;
use ayat::processing::convert::{self, RecitationSource};
use ayat::processing::{append_files, AppendOptions};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Ayat::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Ayat::Append(a) => {
            let options = AppendOptions {
                atomic: a.atomic,
                create: a.create,
            };
            let report = append_files(&a.dst, &a.src, options)?;
            println!("Added {} verses successfully!", report.added);
            println!("Total verses now: {}", report.total);
            if let Some((first, last)) = report.span {
                println!("Verses completed: {} to {}", first, last);
                if let Some(expected) = a.expected_last {
                    println!("Remaining: {} verses", expected.saturating_sub(last));
                }
            }
        }

        cli::Ayat::Convert(c) => {
            let recitation = RecitationSource::new(&c.host, &c.reciter);
            if c.json {
                let verses = convert::load_range(&c.src)?;
                let surah = convert::convert(&verses, c.chapter, &c.name, &recitation);
                println!("{}", serde_json::to_string_pretty(&surah)?);
            } else {
                let out = convert::convert_files(&c.src, c.chapter, &c.name, &recitation)?;
                print!("{}", out);
            }
        }

        cli::Ayat::Summary(s) => {
            let collection = io::load(&s.src)?;
            println!("Total verses: {}", collection.len());
            if let Some((first, last)) = collection.span() {
                println!("Verses: {} to {}", first, last);
            }
            let duplicates = collection.duplicates();
            if !duplicates.is_empty() {
                warn!("duplicate verse numbers: {:?}", duplicates);
                println!("Duplicate verses: {:?}", duplicates);
            }
            if let Some(expected) = s.expected_last {
                println!("Remaining: {} verses", collection.remaining(expected));
            }
        }
    };
    Ok(())
}
