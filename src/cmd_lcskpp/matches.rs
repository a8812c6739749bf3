use anyhow::Context;
use clap::*;
use log::info;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("matches")
        .about("All exact k-block matches of two sequences")
        .after_help(
            r###"
Writes the start position of every length-k substring shared by the two inputs as
`row<TAB>col` lines (0-based), ordered by row then column. These are the matches
`lcskpp align` chains together.

Examples:
1. Shared 4-mers:
   lcskpp matches 4 a.txt b.txt

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

    let k = *args.get_one::<usize>("k").unwrap();
    if k == 0 {
        anyhow::bail!(lcskpp::LcskError::InvalidK);
    }
    let infile1 = args.get_one::<String>("infile1").unwrap();
    let infile2 = args.get_one::<String>("infile2").unwrap();
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());

    //----------------------------
    // Ops
    //----------------------------
    let seq1 = lcskpp::read_sequence(infile1).with_context(|| format!("reading {}", infile1))?;
    let seq2 = lcskpp::read_sequence(infile2).with_context(|| format!("reading {}", infile2))?;

    let matches = lcskpp::all_matches(&seq1, &seq2, k);
    info!("{} matches of length {}", matches.len(), k);

    //----------------------------
    // Output
    //----------------------------
    writer.write_fmt(format_args!("#row\tcol\n"))?;
    lcskpp::write_pairs(&mut writer, &matches)?;

    Ok(())
}
