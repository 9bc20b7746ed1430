//! `batch` command: resolve every page of a manifest in parallel.
//!
//! A failing page does not stop the others. All failures are logged and the
//! command fails once every page has been processed. Pages whose output file
//! name is already taken by an earlier page count as failures too.

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use super::OutputFormat;
use crate::config::SiteConfig;
use crate::pipeline::render_head;
use crate::seo::{PageInput, ResolvedHead};
use crate::{debug, log};

/// One resolved page in JSON output.
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    pathname: &'a str,
    #[serde(flatten)]
    head: &'a ResolvedHead,
}

/// Read a JSON array of page inputs.
pub fn read_manifest(path: &Path) -> Result<Vec<PageInput>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest `{}`", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid manifest `{}`", path.display()))
}

/// Output file name for a page: `index` for the root, otherwise the pathname
/// with slashes turned into dashes.
///
/// Not injective: `/blog/post` and `/blog-post` share a name.
pub fn output_name(pathname: &str, format: OutputFormat) -> String {
    let stem = pathname.trim_matches('/');
    let stem = if stem.is_empty() {
        "index".to_string()
    } else {
        stem.replace('/', "-")
    };
    format!("{stem}.{}", format.extension())
}

pub fn run_batch(
    config: &SiteConfig,
    manifest: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let pages = read_manifest(manifest)?;
    log!("batch"; "rendering {} pages", pages.len());

    let results: Vec<_> = pages
        .par_iter()
        .map(|page| super::render::resolve_page(config, page))
        .collect();

    let mut heads = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (page, result) in pages.iter().zip(results) {
        match result {
            Ok(head) => heads.push((page.pathname(), head)),
            Err(e) => {
                failed += 1;
                log!("error"; "{:#}", e);
            }
        }
    }

    match output {
        Some(dir) => {
            let planned = plan_files(&heads, format);
            failed += heads.len() - planned.len();
            write_files(dir, &planned, format)?;
        }
        None => write_stream(out, &heads, format)?,
    }

    if failed > 0 {
        bail!("{} of {} pages failed to render", failed, pages.len());
    }
    log!("batch"; "rendered {} pages", heads.len());
    Ok(())
}

/// Assign output file names in manifest order.
///
/// The first page to claim a name keeps it. Later pages mapping to the same
/// name are logged and left out.
fn plan_files<'a>(
    heads: &'a [(&'a str, ResolvedHead)],
    format: OutputFormat,
) -> Vec<(String, &'a str, &'a ResolvedHead)> {
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(heads.len());
    let mut planned = Vec::with_capacity(heads.len());

    for (pathname, head) in heads {
        let name = output_name(pathname, format);
        if let Some(first) = claimed.get(&name) {
            log!("error"; "`{}` would overwrite `{}` in {}", pathname, first, name);
            continue;
        }
        claimed.insert(name.clone(), *pathname);
        planned.push((name, *pathname, head));
    }
    planned
}

fn write_files(
    dir: &Path,
    planned: &[(String, &str, &ResolvedHead)],
    format: OutputFormat,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory `{}`", dir.display()))?;

    for (name, pathname, head) in planned {
        let path: PathBuf = dir.join(name);
        let content = match format {
            OutputFormat::Html => render_head(head),
            OutputFormat::Json => serde_json::to_string_pretty(head)?,
        };
        fs::write(&path, content)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!("batch"; "{} -> {}", pathname, path.display());
    }
    Ok(())
}

fn write_stream(
    out: &mut impl Write,
    heads: &[(&str, ResolvedHead)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Html => {
            for (pathname, head) in heads {
                writeln!(out, "<!-- {pathname} -->")?;
                out.write_all(render_head(head).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = heads
                .iter()
                .map(|(pathname, head)| BatchEntry { pathname, head })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
