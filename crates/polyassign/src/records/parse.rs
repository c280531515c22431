//! Network reader: counts and records, one per line.

use std::str::FromStr;

use crate::error::ParseError;
use crate::types::{LatLon, Network, NodeId, NodeTable, User};

/// Parse a whole input document. Fails on the first malformed line.
pub fn parse_network(input: &str) -> Result<Network, ParseError> {
    let mut rd = LineReader::new(input);

    let n = rd.count("node count")?;
    let mut nodes = NodeTable::new();
    for _ in 0..n {
        let (line, [id, lat, lon]) = rd.record::<3>("node")?;
        nodes.insert(
            NodeId(field(line, id, "node id")?),
            LatLon::new(field(line, lat, "latitude")?, field(line, lon, "longitude")?),
        );
    }

    let m = rd.count("edge count")?;
    // counts are untrusted until their records are read
    let mut edges = Vec::with_capacity(m.min(input.len()));
    for _ in 0..m {
        let (line, [u, v]) = rd.record::<2>("edge")?;
        edges.push((
            NodeId(field(line, u, "edge endpoint")?),
            NodeId(field(line, v, "edge endpoint")?),
        ));
    }

    let t = rd.count("user count")?;
    let mut users = Vec::with_capacity(t.min(input.len()));
    for _ in 0..t {
        let (line, [id, lat, lon]) = rd.record::<3>("user")?;
        users.push(User::new(
            field(line, id, "user id")?,
            field(line, lat, "latitude")?,
            field(line, lon, "longitude")?,
        ));
    }

    Ok(Network {
        nodes,
        edges,
        users,
    })
}

fn field<T: FromStr>(line: usize, tok: &str, what: &str) -> Result<T, ParseError> {
    tok.parse()
        .map_err(|_| ParseError::new(line, format!("invalid {what} `{tok}`")))
}

/// Tracks 1-based line numbers for error messages.
struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str), ParseError> {
        self.line += 1;
        let line = self.line;
        match self.lines.next() {
            Some(text) => Ok((line, text)),
            None => Err(ParseError::new(
                line,
                format!("unexpected end of input, expected {what}"),
            )),
        }
    }

    /// A line holding exactly `N` tokens.
    fn record<const N: usize>(&mut self, what: &str) -> Result<(usize, [&'a str; N]), ParseError> {
        let (line, text) = self.next_line(what)?;
        let toks: Vec<&str> = text.split_whitespace().collect();
        let arr: [&str; N] = toks.as_slice().try_into().map_err(|_| {
            ParseError::new(
                line,
                format!("{what} record needs {N} fields, found {}", toks.len()),
            )
        })?;
        Ok((line, arr))
    }

    fn count(&mut self, what: &str) -> Result<usize, ParseError> {
        let (line, [tok]) = self.record::<1>(what)?;
        field(line, tok, what)
    }
}
