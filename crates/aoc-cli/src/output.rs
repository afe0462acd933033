//! Where converted puzzle text goes: stdout, a terminal, a Markdown file, or
//! a notebook.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use termimad::{FmtText, MadSkin};

use crate::error::{AocError, Result};

/// Output destination, picked from the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Raw markdown, for pipes and redirects
    Stdout,
    /// Markdown rendered for an interactive terminal
    Terminal,
    /// Append to a text file (`.md` and any unrecognized extension)
    Markdown(PathBuf),
    /// Append a markdown cell to a Jupyter notebook (`.ipynb`)
    Notebook(PathBuf),
}

impl OutputMode {
    pub fn for_path(path: Option<PathBuf>) -> Self {
        match path {
            None => OutputMode::Stdout,
            Some(path) if path.extension().is_some_and(|ext| ext == "ipynb") => {
                OutputMode::Notebook(path)
            }
            Some(path) => OutputMode::Markdown(path),
        }
    }

    /// Switch stdout output to rendered output when stdout is a terminal.
    pub fn interactive(self, stdout_is_terminal: bool) -> Self {
        match self {
            OutputMode::Stdout if stdout_is_terminal => OutputMode::Terminal,
            mode => mode,
        }
    }

    /// Write `markdown` to this destination; `stdout` is used for
    /// [`OutputMode::Stdout`] and [`OutputMode::Terminal`].
    pub fn write(&self, markdown: &str, stdout: &mut dyn Write) -> Result<()> {
        match self {
            OutputMode::Stdout => {
                stdout.write_all(markdown.as_bytes())?;
                stdout.flush()?;
            }
            OutputMode::Terminal => {
                let (width, _) = termimad::terminal_size();
                write!(stdout, "{}", render_for_terminal(markdown, usize::from(width)))?;
                stdout.flush()?;
            }
            OutputMode::Markdown(path) => append_markdown(path, markdown)?,
            OutputMode::Notebook(path) => append_notebook_cell(path, markdown)?,
        }
        Ok(())
    }
}

/// Render markdown with the default skin, wrapped to `width` columns.
pub fn render_for_terminal(markdown: &str, width: usize) -> String {
    let skin = MadSkin::default();
    FmtText::from(&skin, markdown, Some(width)).to_string()
}

fn create_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Append to `path`, separating from existing content with a newline.
pub fn append_markdown(path: &Path, markdown: &str) -> io::Result<()> {
    create_parent(path)?;
    let existed = path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if existed {
        file.write_all(b"\n")?;
    }
    file.write_all(markdown.as_bytes())?;
    tracing::info!(path = %path.display(), appended = existed, "wrote markdown");
    Ok(())
}

/// Overwrite `path` with `contents`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    create_parent(path)?;
    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// nbformat v4 document. Unknown top-level keys are carried through.
#[derive(Debug, Serialize, Deserialize)]
struct Notebook {
    cells: Vec<Value>,
    #[serde(default)]
    metadata: Map<String, Value>,
    nbformat: u32,
    nbformat_minor: u32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Notebook {
    fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: 4,
            nbformat_minor: 5,
            extra: Map::new(),
        }
    }

    /// Smallest `aoc-cell-<n>` not already used as a cell id.
    fn next_cell_id(&self) -> String {
        let used: HashSet<&str> = self
            .cells
            .iter()
            .filter_map(|cell| cell.get("id").and_then(Value::as_str))
            .collect();
        (1..)
            .map(|n| format!("aoc-cell-{n}"))
            .find(|id| !used.contains(id.as_str()))
            .unwrap_or_default()
    }

    /// Cell ids exist from nbformat 4.5 on; older notebooks reject them.
    fn supports_cell_ids(&self) -> bool {
        self.nbformat > 4 || (self.nbformat == 4 && self.nbformat_minor >= 5)
    }

    fn push_markdown(&mut self, markdown: &str) {
        let mut cell = json!({
            "cell_type": "markdown",
            "metadata": {},
            "source": markdown,
        });
        if self.supports_cell_ids() {
            cell["id"] = Value::String(self.next_cell_id());
        }
        self.cells.push(cell);
    }
}

/// Append a markdown cell, creating the notebook if needed.
pub fn append_notebook_cell(path: &Path, markdown: &str) -> Result<()> {
    let mut notebook = if path.exists() {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| AocError::Notebook {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        Notebook::new()
    };

    notebook.push_markdown(markdown);

    let mut contents = serde_json::to_string_pretty(&notebook).map_err(|source| {
        AocError::Notebook {
            path: path.to_path_buf(),
            source,
        }
    })?;
    contents.push('\n');
    write_file(path, &contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_mode_for_path() {
        assert_eq!(OutputMode::for_path(None), OutputMode::Stdout);
        assert_eq!(
            OutputMode::for_path(Some("day01.md".into())),
            OutputMode::Markdown("day01.md".into())
        );
        assert_eq!(
            OutputMode::for_path(Some("notes/day01.ipynb".into())),
            OutputMode::Notebook("notes/day01.ipynb".into())
        );
        assert_eq!(
            OutputMode::for_path(Some("day01.txt".into())),
            OutputMode::Markdown("day01.txt".into())
        );
    }

    #[test]
    fn test_interactive() {
        assert_eq!(OutputMode::Stdout.interactive(true), OutputMode::Terminal);
        assert_eq!(OutputMode::Stdout.interactive(false), OutputMode::Stdout);
        assert_eq!(
            OutputMode::Markdown("day01.md".into()).interactive(true),
            OutputMode::Markdown("day01.md".into())
        );
    }

    #[test]
    fn test_render_for_terminal() {
        let rendered = render_for_terminal("Collect **fifty stars** today.\n", 80);
        assert!(rendered.contains("fifty stars"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_terminal_writes_rendered_text() {
        let mut out = Vec::new();
        OutputMode::Terminal.write("Hello world\n", &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Hello world"));
    }

    #[test]
    fn test_stdout() {
        let mut out = Vec::new();
        OutputMode::Stdout.write("# Title\n", &mut out).unwrap();
        assert_eq!(out, b"# Title\n");
    }

    #[test]
    fn test_markdown_appends_with_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2023/day01.md");
        let mode = OutputMode::Markdown(path.clone());
        let mut out = Vec::new();

        mode.write("## Part One\n", &mut out).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "## Part One\n");

        mode.write("## Part Two\n", &mut out).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "## Part One\n\n## Part Two\n"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_notebook_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day01.ipynb");

        append_notebook_cell(&path, "## Part One\n").unwrap();

        let notebook = read_json(&path);
        assert_eq!(notebook["nbformat"], 4);
        assert_eq!(notebook["nbformat_minor"], 5);
        assert_eq!(notebook["metadata"], json!({}));
        assert_eq!(
            notebook["cells"],
            json!([{
                "cell_type": "markdown",
                "id": "aoc-cell-1",
                "metadata": {},
                "source": "## Part One\n",
            }])
        );
    }

    #[test]
    fn test_notebook_appends_and_preserves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day01.ipynb");
        let existing = json!({
            "cells": [
                {"cell_type": "code", "id": "aoc-cell-1", "metadata": {}, "source": "print(1)",
                 "outputs": [], "execution_count": null}
            ],
            "metadata": {"kernelspec": {"name": "python3"}},
            "nbformat": 4,
            "nbformat_minor": 5
        });
        fs::write(&path, existing.to_string()).unwrap();

        append_notebook_cell(&path, "## Part Two\n").unwrap();

        let notebook = read_json(&path);
        let cells = notebook["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], existing["cells"][0]);
        assert_eq!(cells[1]["id"], "aoc-cell-2");
        assert_eq!(cells[1]["source"], "## Part Two\n");
        assert_eq!(notebook["metadata"]["kernelspec"]["name"], "python3");
    }

    #[test]
    fn test_notebook_minor_4_cells_have_no_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.ipynb");
        let existing = json!({"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 4});
        fs::write(&path, existing.to_string()).unwrap();

        append_notebook_cell(&path, "## Part One\n").unwrap();

        let notebook = read_json(&path);
        assert_eq!(notebook["nbformat_minor"], 4);
        assert_eq!(
            notebook["cells"],
            json!([{"cell_type": "markdown", "metadata": {}, "source": "## Part One\n"}])
        );
    }

    #[test]
    fn test_notebook_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ipynb");
        fs::write(&path, "not json").unwrap();

        let err = append_notebook_cell(&path, "x").unwrap_err();
        assert!(matches!(err, AocError::Notebook { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs/day01.txt");
        write_file(&path, "old").unwrap();
        write_file(&path, "1\n2\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n");
    }
}
