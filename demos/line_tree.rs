//! The generic line tree, without any NaN0 grammar on top.
//!
//! Run with: cargo run --example line_tree

use nan0::{LineParser, RenderOptions};

fn main() {
    let parser = LineParser::default();
    let (tree, root) = parser.decode("root\n  child\n    subchild\n  second child\nsibling");

    println!("Top-level lines: {}", tree.children(root).len());
    for id in tree.flatten(root) {
        if id == root {
            continue;
        }
        println!("{}{} (level {})", "  ".repeat(tree.level(id) - 1), tree.content(id), tree.level(id));
    }

    let leaves = tree.filter(root, |entry| tree.children(entry.id).is_empty(), true);
    println!("Leaves: {:?}", leaves.iter().map(|&id| tree.content(id)).collect::<Vec<_>>());

    println!("\nRe-encoded:\n{}", parser.stringify(&tree, root));
    println!("\nRendered with tabs:\n{}", tree.render(root, &RenderOptions::default()));
    println!("\nTrimmed:\n{}", tree.render(root, &RenderOptions::new().trimmed()));
}
