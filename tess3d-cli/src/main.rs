/// TESS3D Catalog Inspector
///
/// Usage: tess3d [--file <groupfile>] <command>
/// Commands:
///   list             one line per catalog group
///   show <index>     group summary with its depth profile
///   dump <index>     every transform, 16 row-major numbers per line
///   points <index>   chart-mapped orbit of the base point
use std::env;
use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use nalgebra::Vector4;
use tess3d_core::{parse_groupfile, GroupCatalog, TransformGroup};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tess3d [--file <groupfile>] <list | show <index> | dump <index> | points <index>>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let catalog = if args.first().map(String::as_str) == Some("--file") {
        if args.len() < 2 {
            bail!("--file requires a path");
        }
        args.remove(0);
        let path = args.remove(0);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read groupfile '{}'", path))?;
        let defs = parse_groupfile(&text)
            .with_context(|| format!("failed to parse groupfile '{}'", path))?;
        GroupCatalog::from_defs(&defs).context("failed to generate groupfile catalog")?
    } else {
        GroupCatalog::builtin().context("failed to generate builtin catalog")?
    };

    match args.first().map(String::as_str) {
        Some("list") => cmd_list(&catalog),
        Some("show") => cmd_show(group_arg(&catalog, &args)?),
        Some("dump") => cmd_dump(group_arg(&catalog, &args)?),
        Some("points") => cmd_points(group_arg(&catalog, &args)?),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }

    Ok(())
}

fn group_arg<'a>(catalog: &'a GroupCatalog, args: &[String]) -> Result<&'a TransformGroup> {
    let index: usize = args
        .get(1)
        .context("missing group index")?
        .parse()
        .context("group index must be a non-negative integer")?;
    catalog
        .get(index)
        .with_context(|| format!("group index {} out of range (0..{})", index, catalog.count()))
}

fn cmd_list(catalog: &GroupCatalog) {
    for (index, group) in catalog.iter().enumerate() {
        println!(
            "{:2}  {:<20} {:<10} depth {}  {} elements",
            index,
            group.name(),
            group.geometry().to_string(),
            group.max_depth(),
            group.size()
        );
    }
}

fn cmd_show(group: &TransformGroup) {
    println!("name:      {}", group.name());
    println!("geometry:  {}", group.geometry());
    println!("max depth: {}", group.max_depth());
    println!("elements:  {}", group.size());
    println!("cumulative by level: {:?}", group.depth_marks());

    let mut per_depth = vec![0usize; group.max_depth() as usize + 1];
    for n in 0..group.size() {
        if let Some(depth) = group.depth_of(n) {
            per_depth[depth as usize] += 1;
        }
    }
    for (depth, count) in per_depth.iter().enumerate() {
        if *count > 0 {
            println!("  depth {:2}: {:6} elements", depth, count);
        }
    }
}

fn cmd_dump(group: &TransformGroup) {
    for transform in group.transforms() {
        let entries: Vec<String> = (0..4)
            .flat_map(|r| (0..4).map(move |c| transform[(r, c)].to_string()))
            .collect();
        println!("{}", entries.join(" "));
    }
}

fn cmd_points(group: &TransformGroup) {
    let base = Vector4::new(1.0, 0.0, 0.0, 0.0);
    for transform in group.transforms() {
        // Points without a chart image (e.g. the stereographic pole) are skipped
        if let Some(p) = group.geometry().chart(&(transform * base)) {
            println!("{} {} {}", p[0], p[1], p[2]);
        }
    }
}
