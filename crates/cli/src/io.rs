//! Plain-text point files: one `x y` or `x,y` pair per line.
//!
//! Blank lines and anything after `#` are ignored.

use anyhow::{bail, Context, Result};
use dchull::Vec2;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let mut out = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if fields.len() != 2 {
            bail!(
                "line {}: expected two coordinates, found {}",
                lineno + 1,
                fields.len()
            );
        }
        let x: f64 = fields[0]
            .parse()
            .with_context(|| format!("line {}: bad x {:?}", lineno + 1, fields[0]))?;
        let y: f64 = fields[1]
            .parse()
            .with_context(|| format!("line {}: bad y {:?}", lineno + 1, fields[1]))?;
        out.push(Vec2::new(x, y));
    }
    Ok(out)
}

pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_points(path: &Path, points: &[Vec2<f64>], header: &str) -> Result<()> {
    ensure_parent(path)?;
    let mut s = String::with_capacity(points.len() * 24);
    for line in header.lines() {
        let _ = writeln!(s, "# {line}");
    }
    for p in points {
        let _ = writeln!(s, "{} {}", p.x, p.y);
    }
    fs::write(path, s).with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
