use clap::Parser;

/// Fetches a contiguous range of blocks over JSON-RPC and stores them, with
/// their transactions, in the database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// First block of the range to ingest
    #[arg(value_name = "START_BLOCK")]
    pub start_block: String,

    /// Last block of the range to ingest (inclusive)
    #[arg(value_name = "END_BLOCK")]
    pub end_block: String,

    /// Number of ingestion workers; falls back to 4 when omitted or invalid
    #[arg(value_name = "NUM_THREADS")]
    pub num_threads: Option<String>,
}
