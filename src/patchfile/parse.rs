use std::path::Path;

use glam::DVec3;

use crate::bezier::patch::PatchGrid;

const GRID_SIDE: usize = 4;
const POINTS_PER_PATCH: usize = GRID_SIDE * GRID_SIDE;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected 3 coordinates, found {found} tokens")]
    WrongTokenCount { line: usize, found: usize },
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parses whitespace-delimited coordinate triples, grouping every 16 into
/// one 4x4 control grid in row-major order. Blank lines are skipped; a
/// trailing group of fewer than 16 triples is discarded.
pub fn parse_patches(text: &str) -> Result<Vec<PatchGrid>, ParseError> {
    let mut patches = Vec::new();
    let mut pending: Vec<DVec3> = Vec::with_capacity(POINTS_PER_PATCH);

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 3 {
            return Err(ParseError::WrongTokenCount {
                line,
                found: tokens.len(),
            });
        }

        let mut coords = [0.0f64; 3];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            })?;
        }
        pending.push(DVec3::from_array(coords));

        if pending.len() == POINTS_PER_PATCH {
            patches.push(PatchGrid::new(
                std::mem::take(&mut pending),
                GRID_SIDE,
                GRID_SIDE,
            ));
            pending.reserve(POINTS_PER_PATCH);
        }
    }

    Ok(patches)
}

pub fn load_patches(path: &Path) -> Result<Vec<PatchGrid>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_patches(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(count: usize) -> String {
        (0..count)
            .map(|k| format!("{}.0 {}.5 0.0\n", k, k))
            .collect()
    }

    #[test]
    fn thirty_two_triples_yield_two_grids() {
        let patches = parse_patches(&triples(32)).unwrap();
        assert_eq!(patches.len(), 2);
        for patch in &patches {
            assert_eq!(patch.rows(), 4);
            assert_eq!(patch.cols(), 4);
        }
        // row-major reading order: triple k lands at grid (k / 4, k % 4)
        assert_eq!(patches[0].point(0, 0).x, 0.0);
        assert_eq!(patches[0].point(0, 3).x, 3.0);
        assert_eq!(patches[0].point(3, 3).x, 15.0);
        assert_eq!(patches[1].point(0, 0).x, 16.0);
    }

    #[test]
    fn trailing_partial_group_is_discarded() {
        let patches = parse_patches(&triples(20)).unwrap();
        assert_eq!(patches.len(), 1);

        assert!(parse_patches(&triples(15)).unwrap().is_empty());
        assert!(parse_patches("").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = format!("\n{}\n   \n{}", triples(8), triples(8));
        let patches = parse_patches(&text).unwrap();
        assert_eq!(patches.len(), 1);
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let err = parse_patches("0.0 0.0 0.0\n1.0 oops 2.0\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_token_count_is_an_error() {
        let err = parse_patches("1.0 2.0\n").unwrap_err();
        match err {
            ParseError::WrongTokenCount { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_patches(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
