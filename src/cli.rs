use clap::Parser;
use tracing::{info, warn};

use bst::{Tree, TreeError};

/// Build a binary search tree, mutate it and watch its shape change
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Values to build the tree from (duplicates are dropped)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Values to insert after building
    #[arg(short, long, value_name = "VALUE", value_delimiter = ',', allow_negative_numbers = true)]
    insert: Vec<i64>,

    /// Values to delete after inserting
    #[arg(short, long, value_name = "VALUE", value_delimiter = ',', allow_negative_numbers = true)]
    delete: Vec<i64>,

    /// Rebalance the tree at the end if it is unbalanced
    #[arg(short, long)]
    rebalance: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut tree = Tree::new(self.values);
        info!(len = tree.len(), "built tree");
        report(&tree);

        if !self.insert.is_empty() {
            for value in self.insert {
                if let Err(TreeError::DuplicateValue) = tree.try_insert(value) {
                    warn!(value, "already in the tree");
                }
            }
            println!("After inserting:");
            report(&tree);
        }

        if !self.delete.is_empty() {
            for value in self.delete {
                match tree.delete(&value) {
                    Ok(()) => {}
                    Err(TreeError::NotFound) => warn!(value, "not in the tree"),
                    Err(e) => return Err(e.into()),
                }
            }
            println!("After deleting:");
            report(&tree);
        }

        if self.rebalance && !tree.is_balanced() {
            tree.rebalance();
            println!("After rebalancing:");
            report(&tree);
        }

        Ok(())
    }
}

/// Prints the drawing, the balance flag and every traversal.
fn report(tree: &Tree<i64>) {
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());
    println!("height: {}", tree.height());
    println!("level order: {:?}", tree.level_order());
    println!("preorder: {:?}", tree.preorder());
    println!("postorder: {:?}", tree.postorder());
    println!("inorder: {:?}", tree.inorder());
    println!();
}
