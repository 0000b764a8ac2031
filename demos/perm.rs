use clap::Parser;
use permdex::PermutationCodec;

/// Multiset permutation indexing
///
/// Build a codec for a multiset of integers given on the command line, and
/// either look up the arrangement at a given index, rank a given arrangement,
/// or list every arrangement with its index.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// The multiset, as comma separated integers, e.g. 1,1,1,2,2,3
    multiset: String,

    /// Print the arrangement at this index.
    #[clap(long)]
    index: Option<u64>,

    /// Print the index of this arrangement (comma separated, same multiset).
    #[clap(long)]
    rank: Option<String>,
}

fn parse_values(s: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    s.split(',').map(|v| v.trim().parse()).collect()
}

fn show(arrangement: &[u64]) -> String {
    arrangement
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let multiset = parse_values(&args.multiset)?;
    let codec = PermutationCodec::<u64>::new(&multiset)?;
    println!("{} arrangements", codec.size());
    if let Some(index) = args.index {
        println!("{}\t{}", index, show(&codec.get(index)?));
    } else if let Some(rank) = args.rank {
        let arrangement = parse_values(&rank)?;
        println!("{}\t{}", codec.index(&arrangement)?, show(&arrangement));
    } else {
        for index in 0..codec.size() {
            println!("{}\t{}", index, show(&codec.get(index)?));
        }
    }
    Ok(())
}
