//! CLI command for inspecting COL files

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::formats::col::{parse_col_bytes, ColGroup, ColHeader};
use crate::wire::Record;

/// Print the header and group table of a COL file.
///
/// With `verbose`, the whole file is parsed and per-group triangle data is
/// summarized as well.
pub fn run(path: &Path, verbose: bool) -> anyhow::Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let header = ColHeader::unpack(&mut reader)?;
    println!("{}", path.display());
    println!(
        "  vertices: {} (offset {:#x})",
        header.vertex_count, header.vertex_offset
    );
    println!(
        "  groups:   {} (offset {:#x})",
        header.group_count, header.group_offset
    );
    println!();
    println!("  type   tris  param  indices  terrain  unknown  params");

    let mut groups = Vec::new();
    for _ in 0..header.group_count {
        groups.push(ColGroup::unpack(&mut reader)?);
    }
    for group in &groups {
        println!(
            "  {:<6} {:<5} {:<6} {:<8x} {:<8x} {:<8x} {:<x}",
            group.collision_type,
            group.triangle_count,
            if group.has_col_parameter { "yes" } else { "no" },
            group.vertex_index_offset,
            group.terrain_type_offset,
            group.unknown_offset,
            group.col_parameter_offset,
        );
    }

    if verbose {
        let model = parse_col_bytes(&std::fs::read(path)?)?;
        let with_parameter = model.triangles.iter().filter(|t| t.has_col_parameter()).count();
        println!();
        println!(
            "  {} triangles total, {} with a parameter",
            model.triangles.len(),
            with_parameter
        );
    }

    Ok(())
}
