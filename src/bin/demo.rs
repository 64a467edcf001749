//! Demonstration driver: builds a small tree of integers, prints all four
//! traversal orders, searches for a present and an absent value, deletes a
//! value, and prints the tree again.

use std::fmt::Display;

use ordered_tree::OrderedTree;

fn join<T: Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_level_order(tree: &OrderedTree<i32>) {
    match tree.level_order() {
        Some(values) => println!("Level-order traversal: {}", join(values)),
        None => println!("Tree is empty"),
    }
}

fn print_search(tree: &OrderedTree<i32>, value: i32) {
    let outcome = if tree.contains(&value) {
        "Found"
    } else {
        "Not found"
    };
    println!("Searching for {}: {}", value, outcome);
}

fn main() {
    let mut tree = OrderedTree::new();
    for value in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(value);
    }

    println!("Binary search tree traversals:");
    println!("In-order traversal: {}", join(tree.in_order()));
    println!("Pre-order traversal: {}", join(tree.pre_order()));
    println!("Post-order traversal: {}", join(tree.post_order()));
    print_level_order(&tree);

    println!();
    print_search(&tree, 40);
    print_search(&tree, 55);

    let value = 30;
    println!("\nDeleting {}", value);
    tree.remove(&value);

    println!("\nAfter deletion:");
    println!("In-order traversal: {}", join(tree.in_order()));
    print_level_order(&tree);
}
