use std::io::{BufRead, Write};

/// Reads one sequence from `input`, or from the screen when it is `stdin`.
///
/// FASTA input, detected by a leading `>`, yields the first record's
/// sequence. Anything else yields the first line, without its line ending.
/// Gzipped files are read transparently.
///
/// ```
/// let seq = lcskpp::read_sequence("tests/lcsk/plain_a.txt").unwrap();
/// assert_eq!(seq, b"ACGTACGTTGCA".to_vec());
/// ```
pub fn read_sequence(input: &str) -> anyhow::Result<Vec<u8>> {
    if input != "stdin" && !std::path::Path::new(input).is_file() {
        anyhow::bail!("could not open {}: no such file", input);
    }
    let mut reader = intspan::reader(input);

    let is_fasta = reader.fill_buf()?.first() == Some(&b'>');
    if is_fasta {
        let mut fa_in = noodles_fasta::io::Reader::new(reader);
        let seq = match fa_in.records().next() {
            Some(result) => {
                let record = result?;
                record.sequence().get(..).unwrap_or_default().to_vec()
            }
            None => Vec::new(),
        };
        return Ok(seq);
    }

    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(line)
}

/// Symbols of `a` covered by an alignment, in order.
///
/// Only the row of each pair is used; a row appearing twice, as it may after
/// merging a reverse pass, contributes once.
pub fn aligned_symbols(a: &[u8], recon: &[(usize, usize)]) -> Vec<u8> {
    use itertools::Itertools;

    recon
        .iter()
        .map(|&(row, _)| row)
        .dedup()
        .filter_map(|row| a.get(row).copied())
        .collect()
}

/// Writes pairs as `row<TAB>col` lines.
pub fn write_pairs(writer: &mut dyn Write, recon: &[(usize, usize)]) -> anyhow::Result<()> {
    for (row, col) in recon {
        writer.write_fmt(format_args!("{}\t{}\n", row, col))?;
    }
    Ok(())
}
