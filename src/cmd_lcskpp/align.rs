use anyhow::Context;
use clap::*;
use log::info;
use std::io::Write;

use lcskpp::libs::lcsk::{LcskParams, Mode, NodeStats};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("align")
        .about("LCSk++ alignment of two sequences")
        .after_help(
            r###"
Finds the longest common subsequence of the two inputs that is built from exact
matches of at least k symbols (LCSk++), or of whole k-blocks only (LCSk, --lcsk).

Each input is plain text, whose first line is the sequence, or FASTA, whose first
record is used. Either may be gzipped, or `stdin`.

Output formats:
* seq   - the symbols of the first sequence on the aligned positions, one line
* pairs - one `row<TAB>col` line per aligned pair, 0-based

Modes:
* LCSKPP - one optimal alignment
* MS     - multistart; merges the alignments found on halved match sets
* MSA    - aggressive multistart; not implemented, reported as an error

Examples:
1. Align two sequences with k = 3:
   lcskpp align 3 a.txt b.txt

2. Aligned pairs, also matching against the reversed second sequence:
   lcskpp align 10 a.fa b.fa --reverse --format pairs

"###,
        )
        .arg(
            Arg::new("k")
                .required(true)
                .index(1)
                .value_parser(value_parser!(usize))
                .help("Block length, at least 1"),
        )
        .arg(
            Arg::new("infile1")
                .required(true)
                .index(2)
                .help("First sequence (rows)"),
        )
        .arg(
            Arg::new("infile2")
                .required(true)
                .index(3)
                .help("Second sequence (columns)"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .action(ArgAction::SetTrue)
                .help("Also align against the reversed second sequence"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .num_args(1)
                .default_value("LCSKPP")
                .help("LCSKPP, MS or MSA"),
        )
        .arg(
            Arg::new("runs")
                .long("runs")
                .num_args(1)
                .default_value("3")
                .value_parser(value_parser!(usize))
                .help("Number of runs of the aggressive multistart"),
        )
        .arg(
            Arg::new("lcsk")
                .long("lcsk")
                .action(ArgAction::SetTrue)
                .help("Plain LCSk, scoring whole blocks only"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .num_args(1)
                .default_value("seq")
                .value_parser(["seq", "pairs"])
                .help("Output format"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Report chain node counts to stderr"),
        )
        .arg(super::verbose_arg())
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    super::init_logger(args.get_count("verbose"));

    let infile1 = args.get_one::<String>("infile1").unwrap();
    let infile2 = args.get_one::<String>("infile2").unwrap();
    let format = args.get_one::<String>("format").unwrap();
    let is_stats = args.get_flag("stats");

    let params = LcskParams {
        k: *args.get_one::<usize>("k").unwrap(),
        lcsk_plus: !args.get_flag("lcsk"),
        reverse: args.get_flag("reverse"),
        mode: args.get_one::<String>("mode").unwrap().parse::<Mode>()?,
        aggressive_runs: *args.get_one::<usize>("runs").unwrap(),
    };

    //----------------------------
    // Input
    //----------------------------
    let seq1 = lcskpp::read_sequence(infile1).with_context(|| format!("reading {}", infile1))?;
    let seq2 = lcskpp::read_sequence(infile2).with_context(|| format!("reading {}", infile2))?;
    info!("Sequence 1 length: {}", seq1.len());
    info!("Sequence 2 length: {}", seq2.len());

    //----------------------------
    // Ops
    //----------------------------
    let stats = NodeStats::new();
    let recon = lcskpp::lcsk_sparse_fast_with_stats(&seq1, &seq2, &params, &stats)?;
    info!(
        "LCSk{} length: {}",
        if params.lcsk_plus { "++" } else { "" },
        recon.len()
    );
    if is_stats {
        eprintln!("Nodes created: {}", stats.created());
        eprintln!("Peak live nodes: {}", stats.peak_live());
    }

    //----------------------------
    // Output
    //----------------------------
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    match format.as_str() {
        "pairs" => lcskpp::write_pairs(&mut writer, &recon)?,
        _ => {
            writer.write_all(&lcskpp::aligned_symbols(&seq1, &recon))?;
            writer.write_all(b"\n")?;
        }
    }

    Ok(())
}
