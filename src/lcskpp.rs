extern crate clap;
use clap::*;

mod cmd_lcskpp;

fn main() -> anyhow::Result<()> {
    let app = Command::new("lcskpp")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`lcskpp` - Longest common subsequence in k-length blocks")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_lcskpp::align::make_subcommand())
        .subcommand(cmd_lcskpp::matches::make_subcommand())
        .after_help(
            r###"Subcommands:

* align   - LCSk++ (or LCSk) alignment of two sequences
* matches - All exact k-block matches of two sequences

Sequences are read from plain text (the first line) or FASTA (the first record).

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("align", sub_matches)) => cmd_lcskpp::align::execute(sub_matches),
        Some(("matches", sub_matches)) => cmd_lcskpp::matches::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
