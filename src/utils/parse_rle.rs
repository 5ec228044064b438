use crate::error::{LifeError, Result, SeedDefect};
use crate::{Coord, Seed};

fn malformed(msg: impl Into<String>) -> LifeError {
    SeedDefect::Rle(msg.into()).into()
}

/// Parses `x = W, y = H[, rule = ...]` into `(W, H)`.
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let (mut width, mut height) = (None, None);
    for part in line.split(',') {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| malformed(format!("header item {:?} has no `=`", part.trim())))?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(value.parse::<usize>().map_err(|e| malformed(e.to_string()))?),
            "y" => height = Some(value.parse::<usize>().map_err(|e| malformed(e.to_string()))?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(malformed(format!("unsupported rule {value}")));
                }
            }
            other => return Err(malformed(format!("unknown header key {other:?}"))),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(malformed("header must define both x and y")),
    }
}

/// Returns the seed described by RLE data; `x` is the column count and `y` the row count.
pub fn parse_rle(data: &[u8]) -> Result<Seed> {
    let mut i = 0;
    // skipping comment and blank lines
    loop {
        match data.get(i) {
            Some(b'#') => {
                while i < data.len() && data[i] != b'\n' {
                    i += 1;
                }
            }
            Some(b'\n' | b'\r' | b' ' | b'\t') => i += 1,
            _ => break,
        }
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(malformed("missing `x = .., y = ..` header"));
    }
    let line_end = data[i..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(data.len(), |p| i + p);
    let header = std::str::from_utf8(&data[i..line_end])
        .map_err(|_| malformed("header is not valid UTF-8"))?;
    let (cols, rows) = parse_header(header)?;
    i = line_end;

    // run-length encoded pattern data
    let mut cells = Vec::new();
    let (mut row, mut col, mut run) = (0usize, 0usize, None::<usize>);
    while i < data.len() {
        let symbol = data[i];
        i += 1;
        match symbol {
            b'0'..=b'9' => {
                let digit = usize::from(symbol - b'0');
                let next = run
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit))
                    .ok_or_else(|| malformed("run count overflows"))?;
                run = Some(next);
            }
            b'b' | b'.' => {
                col = col
                    .checked_add(run.take().unwrap_or(1))
                    .ok_or_else(|| malformed("run count overflows"))?;
                if col > cols {
                    return Err(malformed(format!("row {row} is wider than x = {cols}")));
                }
            }
            b'o' | b'A' => {
                let n = run.take().unwrap_or(1);
                let end = col
                    .checked_add(n)
                    .ok_or_else(|| malformed("run count overflows"))?;
                if row >= rows || end > cols {
                    return Err(malformed(format!(
                        "live cells at ({row}, {col}) fall outside {rows}x{cols}"
                    )));
                }
                cells.extend((col..end).map(|c| Coord::new(row as i64, c as i64)));
                col = end;
            }
            b'$' => {
                row = row
                    .checked_add(run.take().unwrap_or(1))
                    .ok_or_else(|| malformed("run count overflows"))?;
                // a trailing `$` may step just past the last row
                if row > rows {
                    return Err(malformed(format!("row {row} is beyond y = {rows}")));
                }
                col = 0;
            }
            b'!' => break,
            b'\n' | b'\r' | b' ' | b'\t' => {}
            other => {
                return Err(malformed(format!(
                    "unexpected symbol {:?}",
                    char::from(other)
                )))
            }
        }
    }
    Seed::from_cells(rows, cols, cells)
}
