//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use ayat::processing::convert::RangeSource;

#[derive(Debug, StructOpt)]
#[structopt(name = "ayat", about = "verse dataset curation tool.")]
/// Holds every command that is callable by the `ayat` command.
pub enum Ayat {
    #[structopt(about = "Append verses to a collection file")]
    Append(Append),
    #[structopt(about = "Print a chapter in the app format")]
    Convert(Convert),
    #[structopt(about = "Show the verse span of a collection file")]
    Summary(Summary),
}

#[derive(Debug, StructOpt)]
/// Append command and parameters.
///
/// ```sh
/// ayat-append 0.1.0
/// Append verses to a collection file
///
/// USAGE:
///     ayat append [FLAGS] [OPTIONS] <dst> <src>...
///
/// FLAGS:
///     -a, --atomic     write through a temporary file
///     -c, --create     start from an empty collection if dst does not exist
///
/// OPTIONS:
///     -e, --expected-last <expected-last>    last verse number of the chapter, to report remaining verses
///
/// ARGS:
///     <dst>       collection file, rewritten in place
///     <src>...    documents holding verses to append, in order
/// ```
pub struct Append {
    #[structopt(parse(from_os_str), help = "collection file, rewritten in place")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        required = true,
        help = "documents holding verses to append, in order"
    )]
    pub src: Vec<PathBuf>,
    #[structopt(short = "a", long = "atomic", help = "write through a temporary file")]
    pub atomic: bool,
    #[structopt(
        short = "c",
        long = "create",
        help = "start from an empty collection if dst does not exist"
    )]
    pub create: bool,
    #[structopt(
        short = "e",
        long = "expected-last",
        help = "last verse number of the chapter, to report remaining verses"
    )]
    pub expected_last: Option<u32>,
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// Sources are either `path` or `path:bound`, in which case only verses up to `bound` are kept.
pub struct Convert {
    #[structopt(help = "chapter number")]
    pub chapter: u32,
    #[structopt(help = "chapter name")]
    pub name: String,
    #[structopt(required = true, help = "source documents, as path or path:bound")]
    pub src: Vec<RangeSource>,
    #[structopt(long = "host", help = "recitation host", default_value = "everyayah.com")]
    pub host: String,
    #[structopt(
        long = "reciter",
        help = "recitation reciter id",
        default_value = "Nasser_Alqatami_128kbps"
    )]
    pub reciter: String,
    #[structopt(long = "json", help = "print JSON instead of a source literal")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Summary {
    #[structopt(parse(from_os_str), help = "collection file")]
    pub src: PathBuf,
    #[structopt(
        short = "e",
        long = "expected-last",
        help = "last verse number of the chapter, to report remaining verses"
    )]
    pub expected_last: Option<u32>,
}
