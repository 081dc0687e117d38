use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use earclip::io::{read_polygon, write_triangles};
use earclip::{find_self_intersection, EarClipper, Triangle};

/// Result of triangulating one polygon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Triangulated(usize),
    /// the polygon crosses itself; an empty triangle list was written
    Rejected,
}

/// Reads the polygon at `input` and writes its triangles to `output`, or to
/// stdout when no output path is given.
pub fn triangulate_file(
    clipper: &mut EarClipper<f64>,
    input: &Path,
    output: Option<&Path>,
) -> Result<Outcome> {
    let file = File::open(input).context(format!("Failed to open {:?}", input))?;
    let polygon = read_polygon::<f64>(BufReader::new(file))
        .context(format!("Failed to parse polygon file {:?}", input))?;
    debug!("read {} vertices from {:?}", polygon.len(), input);

    let mut triangles: Vec<Triangle<f64>> = Vec::new();
    clipper
        .triangulate(polygon.iter().copied(), &mut triangles)
        .context(format!("Failed to triangulate {:?}", input))?;

    let outcome = if triangles.is_empty() {
        if let Some((i, j)) = find_self_intersection(&polygon) {
            warn!("{:?} is self-intersecting (edges {} and {})", input, i, j);
        }
        Outcome::Rejected
    } else {
        Outcome::Triangulated(triangles.len())
    };

    match output {
        Some(path) => {
            let file = File::create(path).context(format!("Failed to create {:?}", path))?;
            let mut writer = BufWriter::new(file);
            write_triangles(&mut writer, &triangles)?;
            writer.flush()?;
        }
        None => write_triangles(io::stdout().lock(), &triangles)?,
    }
    Ok(outcome)
}

pub struct BatchOptions {
    pub input_name: String,
    pub output_name: String,
    /// re-triangulate cases that already have an output file
    pub force: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub triangulated: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Triangulates every case directory under `root` in name order.
///
/// A case is a sub-directory holding the input file. Failures are logged and
/// counted; they do not stop the run.
pub fn run_batch(root: &Path, options: &BatchOptions) -> Result<BatchSummary> {
    let mut cases: Vec<PathBuf> = fs::read_dir(root)
        .context(format!("Failed to list {:?}", root))?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", root, e);
                None
            }
        })
        .filter(|path| path.is_dir())
        .collect();
    cases.sort();

    let mut clipper = EarClipper::new();
    let mut summary = BatchSummary::default();
    for case in &cases {
        let input = case.join(&options.input_name);
        let output = case.join(&options.output_name);
        if !input.exists() {
            debug!("{:?} has no {}", case, options.input_name);
            continue;
        }
        if output.exists() && !options.force {
            info!("{:?} already has output", case);
            summary.skipped += 1;
            continue;
        }

        match triangulate_file(&mut clipper, &input, Some(&output)) {
            Ok(Outcome::Triangulated(count)) => {
                info!("{:?}: {} triangles", case, count);
                summary.triangulated += 1;
            }
            Ok(Outcome::Rejected) => {
                info!("{:?}: intersect", case);
                summary.rejected += 1;
            }
            Err(e) => {
                error!("{:#}", e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> BatchOptions {
        BatchOptions {
            input_name: "input.txt".to_string(),
            output_name: "output_point.txt".to_string(),
            force: false,
        }
    }

    fn write_case(root: &Path, name: &str, file: &str, contents: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), contents).unwrap();
    }

    #[test]
    fn test_triangulate_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "4\n0 0\n4 0\n4 4\n0 4\n").unwrap();

        let mut clipper = EarClipper::new();
        let outcome = triangulate_file(&mut clipper, &input, Some(&output)).unwrap();
        assert_eq!(outcome, Outcome::Triangulated(2));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "2\n0 4\n0 0\n4 0\n\n4 0\n4 4\n0 4\n\n"
        );
    }

    #[test]
    fn test_triangulate_file_rejects_bowtie() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "4\n0 0\n1 1\n1 0\n0 1\n").unwrap();

        let mut clipper = EarClipper::new();
        let outcome = triangulate_file(&mut clipper, &input, Some(&output)).unwrap();
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(fs::read_to_string(&output).unwrap(), "0\n");
    }

    #[test]
    fn test_triangulate_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut clipper = EarClipper::new();

        let missing = dir.path().join("missing.txt");
        assert!(triangulate_file(&mut clipper, &missing, None).is_err());

        let short = dir.path().join("short.txt");
        fs::write(&short, "2\n0 0\n1 1\n").unwrap();
        let err = triangulate_file(&mut clipper, &short, None).unwrap_err();
        assert!(format!("{:#}", err).contains("too few vertices"));
    }

    #[test]
    fn test_run_batch() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_case(root, "1", "input.txt", "4\n0 0\n4 0\n4 4\n0 4\n");
        write_case(root, "2", "input.txt", "4\n0 0\n1 1\n1 0\n0 1\n");
        write_case(root, "3", "input.txt", "3\n0 0\n1 0\n0 1\n");
        write_case(root, "3", "output_point.txt", "stale");
        write_case(root, "4", "input.txt", "3\n0 0\nbad\n");
        write_case(root, "5", "notes.txt", "");
        fs::write(root.join("stray.txt"), "").unwrap();

        let summary = run_batch(root, &options()).unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                triangulated: 1,
                rejected: 1,
                skipped: 1,
                failed: 1,
            }
        );
        assert!(root.join("1/output_point.txt").exists());
        assert_eq!(
            fs::read_to_string(root.join("2/output_point.txt")).unwrap(),
            "0\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("3/output_point.txt")).unwrap(),
            "stale"
        );
        assert!(!root.join("5/output_point.txt").exists());
    }

    #[test]
    fn test_run_batch_force() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_case(root, "1", "input.txt", "3\n0 0\n1 0\n0 1\n");
        write_case(root, "1", "output_point.txt", "stale");

        let options = BatchOptions {
            force: true,
            ..options()
        };
        let summary = run_batch(root, &options).unwrap();
        assert_eq!(summary.triangulated, 1);
        assert_eq!(
            fs::read_to_string(root.join("1/output_point.txt")).unwrap(),
            "1\n0 0\n1 0\n0 1\n\n"
        );
    }
}
