//! Point files: one `x y` pair per line, whitespace separated.
//!
//! Blank lines and lines starting with `#` are skipped. Columns after the
//! second are ignored.

use anyhow::{bail, Context, Result};
use dchull::Vec2;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let mut out = Vec::new();
    for (k, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = k + 1;
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            bail!("line {lineno}: expected two coordinates, got {line:?}");
        };
        let x: f64 = xs
            .parse()
            .with_context(|| format!("line {lineno}: bad x coordinate {xs:?}"))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("line {lineno}: bad y coordinate {ys:?}"))?;
        out.push(Vec2::new(x, y));
    }
    Ok(out)
}

pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_points(path: &Path, points: &[Vec2<f64>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let mut text = String::with_capacity(points.len() * 24);
    for p in points {
        // `{}` on f64 is the shortest representation that parses back exactly.
        writeln!(text, "{} {}", p.x, p.y)?;
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
