use comfy_table::{ContentArrangement, Table};
use ff_core::AreaId;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Ground", "Paths"]);

    for area in AreaId::ALL {
        let node = area.node();
        let paths = if node.connections.is_empty() {
            "door to Lisa's House".to_string()
        } else {
            node.connections
                .iter()
                .map(|(dir, target)| format!("{} {}", dir.arrow(), target.node().name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let ground = if node.interior {
            format!("{:?} (inside)", node.ground)
        } else {
            format!("{:?}", node.ground)
        };
        table.add_row(vec![area.as_str(), node.name, ground.as_str(), paths.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {} areas", AreaId::ALL.len());

    Ok(())
}
